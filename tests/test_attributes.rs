use shortcode_rust::attrs::AttrValue::{Flag, Value};
use shortcode_rust::attrs::{decode_attributes, Attr, AttrList};
use shortcode_rust::parse::ShortcodeParser;

#[test]
pub fn test_mixed_attribute_styles() {
    let document = "[a href=\"http://example.com/x\" title='Quoted' width=300 nofollow][/a]";
    let parsed = ShortcodeParser::new(document, vec!["a"]).parse();
    let expected = AttrList::from(vec![
        Attr { name: "href", value: Value("http://example.com/x") },
        Attr { name: "title", value: Value("Quoted") },
        Attr { name: "width", value: Value("300") },
        Attr { name: "nofollow", value: Flag },
    ]);
    assert_eq!(1, parsed.len());
    assert_eq!(expected, parsed[0].attrs);
}

#[test]
pub fn test_slashes_inside_attribute_values() {
    // the '/' characters must not end the tag early
    let document = "[a path=/usr/share url=\"http://x/y/\"]body[/a]";
    let parsed = ShortcodeParser::new(document, vec!["a"]).parse();
    assert_eq!(1, parsed.len());
    assert_eq!(Some("/usr/share"), parsed[0].attrs.value("path"));
    assert_eq!(Some("http://x/y/"), parsed[0].attrs.value("url"));
    assert_eq!("body", parsed[0].raw_content);
}

#[test]
pub fn test_void_tag_attributes() {
    let document = "[a src=\"x.png\" /]";
    let parsed = ShortcodeParser::new(document, vec!["a"]).parse();
    assert_eq!(1, parsed.len());
    assert_eq!(Some("x.png"), parsed[0].attrs.value("src"));
    assert_eq!("", parsed[0].raw_content);
    assert!(parsed[0].children.is_empty());
    assert!(parsed[0].inner_content.is_empty());
}

#[test]
pub fn test_closer_attributes_are_discarded() {
    let document = "[a][/a ignored=1]";
    let parsed = ShortcodeParser::new(document, vec!["a"]).parse();
    assert_eq!(1, parsed.len());
    assert_eq!(AttrList::default(), parsed[0].attrs);
    assert_eq!(document, parsed[0].raw_tag);
}

#[test]
pub fn test_lookup_ignores_ascii_case() {
    let attrs = decode_attributes("Width=300 NoFollow");
    assert_eq!(Some("300"), attrs.value("width"));
    assert_eq!(Some(&Flag), attrs.get("nofollow"));
    assert_eq!(None, attrs.value("nofollow")); // flags have no string value
    assert_eq!(None, attrs.get("missing"));
}

#[test]
pub fn test_order_is_preserved() {
    let attrs = decode_attributes("z=1 a=2 m=3");
    let names: Vec<&str> = attrs.iter().map(|attr| attr.name).collect();
    assert_eq!(vec!["z", "a", "m"], names);
    assert_eq!(3, attrs.len());
}

#[test]
pub fn test_bare_and_quoted_flags() {
    let attrs = decode_attributes("123 \"hello there\" plain");
    let expected = AttrList::from(vec![
        Attr { name: "123", value: Flag },
        Attr { name: "hello there", value: Flag },
        Attr { name: "plain", value: Flag },
    ]);
    assert_eq!(expected, attrs);
}

#[test]
pub fn test_malformed_attribute_text() {
    // none of these may panic or be rejected outright
    assert_eq!(AttrList::default(), decode_attributes(""));
    assert_eq!(AttrList::default(), decode_attributes(" \t \n "));

    let trailing_equals = decode_attributes("key=");
    assert_eq!(Some(""), trailing_equals.value("key"));

    let unterminated = decode_attributes("key=\"no closing quote");
    assert_eq!(Some("no closing quote"), unterminated.value("key"));

    let stray = decode_attributes("= == a");
    assert_eq!(1, stray.len());
    assert_eq!(Some(&Flag), stray.get("a"));
}

#[test]
pub fn test_empty_quoted_value() {
    let attrs = decode_attributes("alt=\"\" title=''");
    assert_eq!(Some(""), attrs.value("alt"));
    assert_eq!(Some(""), attrs.value("title"));
}
