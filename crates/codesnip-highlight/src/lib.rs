//! Highlighter interface for code snippet tags.
//!
//! Snippet tags hand their residual markup (language name, line number
//! toggles) and the tag body to a [`Highlighter`], then decorate the returned
//! HTML. Decorations rely on one property of that HTML: it ends with `</pre>`,
//! whitespace, and `</div>`.
//!
//! [`HtmlHighlighter`] produces that shape for hosts without a highlighter of
//! their own, tokenizing known languages with syntect.

mod args;
mod html;

pub use args::HighlightArgs;
pub use html::{
    DEFAULT_THEME, HIGHLIGHT_CLASS, HighlightOptions, HtmlHighlighter, LINENO_CLASS, TOGGLE_CLASS,
};

/// Highlighting error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HighlightError {
    /// Markup does not follow `[language] [option[=value]]...`.
    #[error("Syntax error in highlight markup {markup:?}: expected `[language] [option[=value]]...`")]
    Syntax {
        /// The markup as received.
        markup: String,
    },

    /// Tokenizing the body failed.
    #[error("Highlighting failed: {message}")]
    Render { message: String },
}

/// Renders a code body into an HTML block.
pub trait Highlighter: Send + Sync {
    /// Highlight `body` according to `markup`.
    ///
    /// The returned HTML must end with `</pre>`, whitespace, and `</div>`.
    fn highlight(&self, markup: &str, body: &str) -> Result<String, HighlightError>;
}

impl<H: Highlighter + ?Sized> Highlighter for Box<H> {
    fn highlight(&self, markup: &str, body: &str) -> Result<String, HighlightError> {
        (**self).highlight(markup, body)
    }
}
