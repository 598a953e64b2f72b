use std::collections::HashMap;

use crate::attrs::AttrList;

/// Renders one shortcode occurrence.
///
/// Implemented for plain closures, so a function taking the decoded
/// attributes, the reconstructed inner content, and the tag name registers
/// directly.
pub trait ShortcodeHandler {
    fn render(&self, attrs: &AttrList<'_>, content: &str, name: &str) -> String;
}

impl<F> ShortcodeHandler for F
where
    F: Fn(&AttrList<'_>, &str, &str) -> String,
{
    fn render(&self, attrs: &AttrList<'_>, content: &str, name: &str) -> String {
        self(attrs, content, name)
    }
}

/// Runtime registry of tag names and their render handlers.
///
/// The registered names double as the parser's whitelist: only bracketed
/// text using one of these names is treated as markup at all.
#[derive(Default)]
pub struct ShortcodeRegistry {
    handlers: HashMap<String, Box<dyn ShortcodeHandler>>,
}

impl ShortcodeRegistry {
    pub fn new() -> ShortcodeRegistry {
        ShortcodeRegistry::default()
    }

    /// Register (or replace) the handler for a tag name.
    pub fn register(&mut self, name: impl Into<String>, handler: impl ShortcodeHandler + 'static) {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Look up the handler for a tag name.
    pub fn handler(&self, name: &str) -> Option<&dyn ShortcodeHandler> {
        self.handlers.get(name).map(|handler| handler.as_ref())
    }

    /// The currently registered tag names, i.e. the parser's whitelist.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.keys().map(|name| name.as_str())
    }
}
