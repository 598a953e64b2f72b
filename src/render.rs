use crate::attrs::AttrList;
use crate::node::{ContentPiece, Shortcode};
use crate::registry::ShortcodeRegistry;

type PreRenderHook<'r> = Box<dyn Fn(&str, &AttrList<'_>, &str) -> Option<String> + 'r>;
type RenderFilter<'r> = Box<dyn Fn(&str, String) -> String + 'r>;

/// Walks a parsed forest bottom-up and folds it back into a single string.
///
/// Each named node's inner content is reassembled by interleaving its
/// literal fragments with its rendered children in original order, then
/// handed to the handler registered for its name. Freeform nodes pass
/// through untouched. Rendering is total: a missing handler falls back to
/// the node's raw source text instead of failing.
pub struct ShortcodeRenderer<'r> {
    registry: &'r ShortcodeRegistry,
    pre_render: Option<PreRenderHook<'r>>,
    content_filter: Option<RenderFilter<'r>>,
    output_filter: Option<RenderFilter<'r>>,
}

impl<'r> ShortcodeRenderer<'r> {
    pub fn new(registry: &'r ShortcodeRegistry) -> ShortcodeRenderer<'r> {
        ShortcodeRenderer {
            registry,
            pre_render: None,
            content_filter: None,
            output_filter: None,
        }
    }

    /// Short-circuit hook consulted before a node's handler runs: given the
    /// tag name, attributes and reconstructed content, returning `Some`
    /// replaces the node's entire rendered output.
    pub fn with_pre_render(mut self, hook: impl Fn(&str, &AttrList<'_>, &str) -> Option<String> + 'r) -> ShortcodeRenderer<'r> {
        self.pre_render = Some(Box::new(hook));
        self
    }

    /// Transform a node's reconstructed content before its handler sees it.
    pub fn with_content_filter(mut self, filter: impl Fn(&str, String) -> String + 'r) -> ShortcodeRenderer<'r> {
        self.content_filter = Some(Box::new(filter));
        self
    }

    /// Transform a handler's output before it joins the final string.
    pub fn with_output_filter(mut self, filter: impl Fn(&str, String) -> String + 'r) -> ShortcodeRenderer<'r> {
        self.output_filter = Some(Box::new(filter));
        self
    }

    /// Render a parsed forest back into flat text.
    pub fn render(&self, shortcodes: &[Shortcode<'_>]) -> String {
        shortcodes.iter().map(|shortcode| self.render_shortcode(shortcode)).collect()
    }

    /// Render one node, children before their parent.
    fn render_shortcode(&self, shortcode: &Shortcode<'_>) -> String {
        let content = if shortcode.children.is_empty() {
            shortcode.inner_content.iter()
                .map(|piece| match piece {
                    ContentPiece::Text(text) => *text,
                    ContentPiece::Child => "",
                })
                .collect()
        } else {
            self.interleave(shortcode)
        };
        let name = match shortcode.name {
            Some(name) => name,
            None => return content,
        };
        let handler = match self.registry.handler(name) {
            Some(handler) => handler,
            None => {
                log::warn!("no handler registered for shortcode [{}]", name);
                return shortcode.raw_tag.to_string();
            }
        };
        if let Some(pre_render) = &self.pre_render {
            if let Some(output) = pre_render(name, &shortcode.attrs, &content) {
                return output;
            }
        }
        let content = match &self.content_filter {
            Some(filter) => filter(name, content),
            None => content,
        };
        let output = handler.render(&shortcode.attrs, &content, name);
        match &self.output_filter {
            Some(filter) => filter(name, output),
            None => output,
        }
    }

    /// Reassemble interleaved literal text and rendered children in
    /// original document order. Children the marker walk never reaches are
    /// rendered trailing rather than dropped.
    fn interleave(&self, shortcode: &Shortcode<'_>) -> String {
        let mut content = String::new();
        let mut children = shortcode.children.iter();
        for piece in &shortcode.inner_content {
            match piece {
                ContentPiece::Text(text) => content.push_str(text),
                ContentPiece::Child => {
                    if let Some(child) = children.next() {
                        content.push_str(&self.render_shortcode(child));
                    }
                }
            }
        }
        let mut leftover = false;
        for child in children {
            leftover = true;
            content.push_str(&self.render_shortcode(child));
        }
        if leftover {
            log::warn!(
                "shortcode [{}] has more children than content markers; extras rendered trailing",
                shortcode.name.unwrap_or_default()
            );
        }
        content
    }
}
