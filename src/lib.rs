pub mod attrs;
pub mod error;
pub mod node;
pub mod parse;
pub mod registry;
pub mod render;
pub mod textrange;
pub mod token;
pub mod tokenize;

mod charstream;
mod shortcodechar;

use crate::parse::ShortcodeParser;
use crate::registry::ShortcodeRegistry;
use crate::render::ShortcodeRenderer;

/// Parse `document` against the registry's tag names and render the result
/// back into flat text in one step.
pub fn do_shortcode(document: &str, registry: &ShortcodeRegistry) -> String {
    let mut parser = ShortcodeParser::new(document, registry.tag_names());
    let tree = parser.parse();
    ShortcodeRenderer::new(registry).render(&tree)
}
