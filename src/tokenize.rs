use std::collections::HashSet;

use crate::charstream::CharStream;
use crate::shortcodechar::ShortcodeByte;
use crate::token::ShortcodeToken;
use crate::token::ShortcodeToken::*;

pub struct ShortcodeTokenizer<'a> {
    cs: CharStream<'a>,
    tags: HashSet<String>,
}

impl<'a> ShortcodeTokenizer<'a> {
    /// Create a tokenizer over `document` recognizing exactly the given tag
    /// names. The set is snapshotted here; registry changes made while a
    /// parse is running do not affect it.
    pub fn new<I, S>(document: &'a str, tags: I) -> ShortcodeTokenizer<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ShortcodeTokenizer {
            cs: CharStream { pos: 0, text: document },
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Find the next recognized shortcode token at or after `offset`.
    ///
    /// Bracketed text that does not resolve to a registered tag name is not
    /// a token; scanning continues strictly forward past it. `None` is the
    /// normal end-of-document signal, not an error.
    pub fn next_token(&mut self, offset: usize) -> Option<ShortcodeToken<'a>> {
        self.cs.pos = offset;
        while self.cs.seek_byte(b'[') {
            let candidate = self.cs.pos;
            if let Some(token) = self.match_tag(candidate) {
                let span = token.span();
                log::trace!("{:?} at {}..{}", token, span.start(), span.end());
                return Some(token);
            }
            self.cs.pos = candidate + 1;
        }
        None
    }

    /// Try to match one tag whose opening bracket sits at `start`.
    ///
    /// tag ::= '[' '['? '/'? S* Name AttrText '/'? ']'? ']'
    ///
    /// The doubled brackets must appear on both sides to make an escape, and
    /// AttrText may contain '/' only where it does not close the tag.
    /// [https://codex.wordpress.org/Shortcode_API]
    fn match_tag(&mut self, start: usize) -> Option<ShortcodeToken<'a>> {
        let cs = &mut self.cs;
        cs.pos = start + 1;

        let escaped_open = cs.test(b"[");
        if escaped_open {
            cs.advance_n(1);
        }
        let is_closer = cs.test(b"/");
        if is_closer {
            cs.advance_n(1);
        }
        cs.skip_spaces();

        let name_start = cs.pos;
        while cs.has_next() && cs.peek_byte().is_name_byte() {
            cs.advance_n(1);
        }
        let name = cs.slice(name_start..cs.pos);
        if name.is_empty() || !self.tags.contains(name.as_str()) {
            return None;
        }

        // attribute text runs to the closing delimiter; a '/' that is not
        // immediately followed by ']' belongs to an attribute value
        let attrs_start = cs.pos;
        let mut is_void = false;
        loop {
            while cs.has_next() && cs.peek_byte() != b']' && cs.peek_byte() != b'/' {
                cs.advance_n(1);
            }
            if !cs.has_next() {
                // the bracket never closed
                return None;
            }
            if cs.peek_byte() == b'/' {
                if cs.test(b"/]") {
                    is_void = true;
                    break;
                }
                cs.advance_n(1);
                continue;
            }
            break;
        }
        let attrs = cs.slice(attrs_start..cs.pos);
        if is_void {
            cs.advance_n(1); // the void slash
        }
        // a doubled right bracket is consumed whole; it only escapes the tag
        // when the left side was doubled too
        let escaped_close = cs.test(b"]]");
        if escaped_close {
            cs.advance_n(2);
        } else {
            cs.advance_n(1);
        }

        let span = cs.slice(start..cs.pos);
        if escaped_open && escaped_close {
            Some(Escaped { span })
        } else if is_void {
            Some(Void { name, attrs, span })
        } else if is_closer {
            Some(Closer { name, span })
        } else {
            Some(Opener { name, attrs, span })
        }
    }
}
