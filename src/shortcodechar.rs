pub trait ShortcodeByte {
    fn is_name_byte(&self) -> bool;

    fn is_space_byte(&self) -> bool;
}

impl ShortcodeByte for u8 {
    /// Name ::= (Letter | Digit | '_' | '-')+
    ///
    /// A candidate name is read with maximal munch, so a registered name
    /// followed by more name bytes never matches.
    /// [https://codex.wordpress.org/Shortcode_API]
    fn is_name_byte(&self) -> bool {
        match self {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' => true,
            _ => false
        }
    }

    /// S ::= (#x20 | #x9 | #xD | #xA)+
    fn is_space_byte(&self) -> bool {
        match self {
            b' ' | b'\n' | b'\t' | b'\r' => true,
            _ => false
        }
    }
}
