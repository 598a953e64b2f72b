use crate::attrs::AttrList;

/// One piece of a shortcode's interleaved content: either a literal text
/// fragment or a marker standing in for the next child shortcode.
#[derive(Debug, PartialEq)]
pub enum ContentPiece<'a> {
    Text(&'a str),
    Child,
}

/// A parsed shortcode, or a freeform run of document text between
/// shortcodes (`name == None`). Borrows the parsed document.
#[derive(Debug, PartialEq)]
pub struct Shortcode<'a> {
    pub name: Option<&'a str>,
    pub attrs: AttrList<'a>,
    pub children: Vec<Shortcode<'a>>,
    /// Source text from the opening delimiter through the matching close
    /// (the void tag itself, or the whole text for freeform nodes).
    pub raw_tag: &'a str,
    /// Source text between the opening tag's end and the closing tag's
    /// start; empty for void tags.
    pub raw_content: &'a str,
    /// Literal fragments and child markers in original document order.
    /// The number and order of `Child` markers matches `children`.
    pub inner_content: Vec<ContentPiece<'a>>,
}

impl<'a> Shortcode<'a> {
    /// A literal-text node for document text outside any shortcode.
    pub fn freeform(text: &'a str) -> Shortcode<'a> {
        Shortcode {
            name: None,
            attrs: AttrList::default(),
            children: vec![],
            raw_tag: text,
            raw_content: text,
            inner_content: vec![ContentPiece::Text(text)],
        }
    }

    /// A named tag with no content yet; the parser fills in spans and
    /// content as the document is consumed.
    pub fn tag(name: &'a str, attrs: AttrList<'a>, raw_tag: &'a str) -> Shortcode<'a> {
        Shortcode {
            name: Some(name),
            attrs,
            children: vec![],
            raw_tag,
            raw_content: "",
            inner_content: vec![],
        }
    }
}
