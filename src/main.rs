use std::env;
use std::fs;

use shortcode_rust::attrs::AttrList;
use shortcode_rust::parse::ShortcodeParser;
use shortcode_rust::registry::ShortcodeRegistry;
use shortcode_rust::render::ShortcodeRenderer;

fn main() {
    let path = env::args().nth(1).expect("usage: shortcode_rust <file>");
    let document = fs::read_to_string(&path).unwrap();

    let mut registry = ShortcodeRegistry::new();
    registry.register("b", |_attrs: &AttrList, content: &str, _name: &str| {
        format!("<strong>{}</strong>", content)
    });
    registry.register("i", |_attrs: &AttrList, content: &str, _name: &str| {
        format!("<em>{}</em>", content)
    });
    registry.register("url", |attrs: &AttrList, content: &str, _name: &str| {
        match attrs.value("href") {
            Some(href) => format!("<a href=\"{}\">{}</a>", href, content),
            None => content.to_string(),
        }
    });
    registry.register("br", |_attrs: &AttrList, _content: &str, _name: &str| {
        "<br/>".to_string()
    });

    let mut parser = ShortcodeParser::new(&document, registry.tag_names());
    let tree = parser.parse();
    println!("{:#?}", tree);
    for issue in parser.issues() {
        println!("issue: {}", issue);
    }

    println!("{}", ShortcodeRenderer::new(&registry).render(&tree));
}
