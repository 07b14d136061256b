//! Template rendering for new-puzzle.
//! Templates are plain text with literal tokens such as `<D>` that are
//! replaced by values from an ordered context.
use indexmap::IndexMap;

/// Ordered mapping from template token to replacement text.
pub type Context = IndexMap<&'static str, String>;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Tokens and the text that replaces them
    ///
    /// # Returns
    /// * `String` - Rendered template string
    fn render(&self, template: &str, context: &Context) -> String;
}

/// Renderer that substitutes every occurrence of each token, in context order.
///
/// Tokens that are not in the context are left in the output as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenRenderer;

impl TokenRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, template: &str, context: &Context) -> String {
        context
            .iter()
            .fold(template.to_string(), |rendered, (token, value)| {
                rendered.replace(token, value)
            })
    }
}
