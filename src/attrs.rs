use crate::charstream::CharStream;
use crate::shortcodechar::ShortcodeByte;

/// Value side of a single attribute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttrValue<'a> {
    /// `key="value"`, `key='value'` or `key=value`
    Value(&'a str),
    /// a bare `key` with nothing attached: present, but no string value
    Flag,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attr<'a> {
    pub name: &'a str,
    pub value: AttrValue<'a>,
}

/// Ordered attribute list, in the order written inside the tag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrList<'a> {
    attrs: Vec<Attr<'a>>,
}

impl<'a> AttrList<'a> {
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Look up an attribute by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&AttrValue<'a>> {
        self.attrs.iter().find(|attr| attr.name.eq_ignore_ascii_case(name)).map(|attr| &attr.value)
    }

    /// The string value for `name`; `None` for flags and absent keys.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        match self.get(name) {
            Some(AttrValue::Value(value)) => Some(value),
            _ => None,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attr<'a>> {
        self.attrs.iter()
    }
}

impl<'a> From<Vec<Attr<'a>>> for AttrList<'a> {
    fn from(attrs: Vec<Attr<'a>>) -> AttrList<'a> {
        AttrList { attrs }
    }
}

/// Decode the raw attribute text captured between a tag's name and its
/// closing delimiter.
///
/// Attribute ::= Name '=' ('"' Text '"' | "'" Text "'" | Word) | Name
///
/// The decoder is deliberately forgiving: text that fits none of these
/// shapes is skipped a byte at a time instead of rejected, so arbitrary
/// (even malformed) input always yields a list. A bare word or standalone
/// quoted string becomes a flag keyed by its own text; an unterminated
/// quote takes the rest of the input as its value.
pub fn decode_attributes(raw: &str) -> AttrList {
    let mut cs = CharStream { pos: 0, text: raw };
    let mut attrs = vec![];
    loop {
        cs.skip_spaces();
        if !cs.has_next() {
            break;
        }
        if cs.peek_byte() == b'"' || cs.peek_byte() == b'\'' {
            let text = consume_quoted(&mut cs);
            if !text.is_empty() {
                attrs.push(Attr { name: text, value: AttrValue::Flag });
            }
            continue;
        }
        let key_start = cs.pos;
        while cs.has_next() && !cs.peek_byte().is_space_byte() && cs.peek_byte() != b'=' {
            cs.advance_n(1);
        }
        let key = cs.slice(key_start..cs.pos).as_str();
        if !key.is_empty() && cs.test(b"=") {
            cs.advance_n(1);
            let value = if cs.has_next() && (cs.peek_byte() == b'"' || cs.peek_byte() == b'\'') {
                consume_quoted(&mut cs)
            } else {
                let value_start = cs.pos;
                while cs.has_next() && !cs.peek_byte().is_space_byte() {
                    cs.advance_n(1);
                }
                cs.slice(value_start..cs.pos).as_str()
            };
            attrs.push(Attr { name: key, value: AttrValue::Value(value) });
        } else if !key.is_empty() {
            attrs.push(Attr { name: key, value: AttrValue::Flag });
        } else {
            // stray byte ('=' with no key); step over it
            cs.advance_n(1);
        }
    }
    AttrList { attrs }
}

/// Consume a quoted run, returning the text between the quotes.
fn consume_quoted<'a>(cs: &mut CharStream<'a>) -> &'a str {
    let quote = cs.peek_byte();
    cs.advance_n(1);
    let start = cs.pos;
    while cs.has_next() && cs.peek_byte() != quote {
        cs.advance_n(1);
    }
    let text = cs.slice(start..cs.pos).as_str();
    if cs.has_next() {
        cs.advance_n(1); // closing quote
    }
    text
}
