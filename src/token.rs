use crate::textrange::TextRange;
use crate::token::ShortcodeToken::*;

/// One recognized shortcode occurrence in the document.
///
/// Classification follows the delimiter shape, in priority order: doubled
/// brackets on both sides make an escape, a trailing slash makes a void tag,
/// a leading slash makes a closer, anything else opens.
#[derive(Debug)]
pub enum ShortcodeToken<'a> {
    /// `[tag attr="value"]` — attrs is the raw, undecoded attribute text
    Opener { name: TextRange<'a>, attrs: TextRange<'a>, span: TextRange<'a> },
    /// `[/tag]` — closing tags carry no attributes
    Closer { name: TextRange<'a>, span: TextRange<'a> },
    /// `[tag /]` — complete on its own, never part of a pairing
    Void { name: TextRange<'a>, attrs: TextRange<'a>, span: TextRange<'a> },
    /// `[[tag]]` — literal text, one bracket layer to be stripped
    Escaped { span: TextRange<'a> },
}

impl<'a> ShortcodeToken<'a> {
    /// Source span of the entire token, delimiters included.
    pub fn span(&self) -> TextRange<'a> {
        match self {
            Opener { span, .. } | Closer { span, .. } | Void { span, .. } | Escaped { span } => *span,
        }
    }
}
