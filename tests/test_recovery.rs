use shortcode_rust::attrs::AttrList;
use shortcode_rust::error::ParseIssue::{UnclosedTag, UnmatchedCloser};
use shortcode_rust::node::ContentPiece::{Child, Text};
use shortcode_rust::node::Shortcode;
use shortcode_rust::parse::ShortcodeParser;

#[test]
pub fn test_out_of_order_closers_reflow() {
    let document = "[a][b]x[/a]y[/b]";
    let mut parser = ShortcodeParser::new(document, vec!["a", "b"]);
    let parsed = parser.parse();

    // [/a] arrives while b is still open: b is force-closed with the text
    // it accumulated and becomes a child of a; the stray [/b] stays literal
    let inner = Shortcode {
        name: Some("b"),
        attrs: AttrList::default(),
        children: vec![],
        raw_tag: "[b]x",
        raw_content: "x",
        inner_content: vec![Text("x")],
    };
    let outer = Shortcode {
        name: Some("a"),
        attrs: AttrList::default(),
        children: vec![inner],
        raw_tag: "[a][b]x[/a]",
        raw_content: "[b]x",
        inner_content: vec![Child],
    };
    let expected = vec![outer, Shortcode::freeform("y[/b]")];
    assert_eq!(expected, parsed);

    assert_eq!(2, parser.issues().len());
    assert!(matches!(parser.issues()[0], UnclosedTag { .. }));
    assert!(matches!(parser.issues()[1], UnmatchedCloser { .. }));
}

#[test]
pub fn test_unmatched_closer_is_literal() {
    let document = "[/b]hello";
    let mut parser = ShortcodeParser::new(document, vec!["b"]);
    let parsed = parser.parse();
    let expected = vec![Shortcode::freeform("[/b]"), Shortcode::freeform("hello")];
    assert_eq!(expected, parsed);
    assert!(matches!(parser.issues()[0], UnmatchedCloser { .. }));
}

#[test]
pub fn test_unmatched_closer_inside_tag() {
    let document = "[a]x[/b]y[/a]";
    let mut parser = ShortcodeParser::new(document, vec!["a", "b"]);
    let parsed = parser.parse();
    assert_eq!(1, parsed.len());
    assert_eq!(vec![Text("x[/b]y")], parsed[0].inner_content);
    assert_eq!("x[/b]y", parsed[0].raw_content);
    assert!(parsed[0].children.is_empty());
    assert!(matches!(parser.issues()[0], UnmatchedCloser { .. }));
}

#[test]
pub fn test_unterminated_tags_stay_nested() {
    let document = "intro [a]x[b]y";
    let mut parser = ShortcodeParser::new(document, vec!["a", "b"]);
    let parsed = parser.parse();

    let inner = Shortcode {
        name: Some("b"),
        attrs: AttrList::default(),
        children: vec![],
        raw_tag: "[b]y",
        raw_content: "y",
        inner_content: vec![Text("y")],
    };
    let outer = Shortcode {
        name: Some("a"),
        attrs: AttrList::default(),
        children: vec![inner],
        raw_tag: "[a]x[b]y",
        raw_content: "x[b]y",
        inner_content: vec![Text("x"), Child],
    };
    assert_eq!(vec![Shortcode::freeform("intro "), outer], parsed);

    // one issue per force-closed frame, innermost first
    assert_eq!(2, parser.issues().len());
    assert!(matches!(parser.issues()[0], UnclosedTag { .. }));
    assert!(matches!(parser.issues()[1], UnclosedTag { .. }));
}

#[test]
pub fn test_unmatched_openers_only() {
    let document = "[a][a][a]";
    let mut parser = ShortcodeParser::new(document, vec!["a"]);
    let parsed = parser.parse();
    assert_eq!(1, parsed.len());
    assert_eq!(document, parsed[0].raw_tag);
    // each level stays nested under the one before it
    assert_eq!(1, parsed[0].children.len());
    assert_eq!(1, parsed[0].children[0].children.len());
    assert!(parsed[0].children[0].children[0].children.is_empty());
    assert_eq!(3, parser.issues().len());
}

#[test]
pub fn test_escaped_tag_inside_content() {
    let document = "[a][[b]][/a]";
    let parsed = ShortcodeParser::new(document, vec!["a", "b"]).parse();
    assert_eq!(1, parsed.len());
    assert_eq!(vec![Text("[b]")], parsed[0].inner_content);
    assert!(parsed[0].children.is_empty());
}

#[test]
pub fn test_truncated_tag_is_literal() {
    let document = "text [a unfinished";
    let parsed = ShortcodeParser::new(document, vec!["a"]).parse();
    assert_eq!(vec![Shortcode::freeform(document)], parsed);
}

#[test]
pub fn test_deep_reflow_keeps_order() {
    let document = "[a][b][c]x[/a]";
    let mut parser = ShortcodeParser::new(document, vec!["a", "b", "c"]);
    let parsed = parser.parse();
    assert_eq!(1, parsed.len());
    let a = &parsed[0];
    assert_eq!(Some("a"), a.name);
    assert_eq!(1, a.children.len());
    let b = &a.children[0];
    assert_eq!(Some("b"), b.name);
    assert_eq!(1, b.children.len());
    let c = &b.children[0];
    assert_eq!(Some("c"), c.name);
    assert_eq!(vec![Text("x")], c.inner_content);
    assert_eq!(2, parser.issues().len()); // b and c never closed themselves
}
