//! Template tags for annotated code snippets.
//!
//! A host template engine owns a [`TagRegistry`] and forwards every tag
//! invocation (tag name, markup, body) to [`TagRegistry::render`]. Two tag
//! kinds exist:
//!
//! - [`TagKind::CodeSnippet`]: highlights its body and applies the features
//!   named in its markup (`githublink=...`, `invert_colors`)
//! - [`TagKind::CodeFromGithub`]: parses a line-range link and renders nothing
//!
//! # Example
//!
//! ```
//! use codesnip_features::FeatureOptions;
//! use codesnip_highlight::HtmlHighlighter;
//! use codesnip_tags::TagRegistry;
//!
//! let registry = TagRegistry::with_defaults(HtmlHighlighter::default(), FeatureOptions::default());
//! let html = registry
//!     .render("codesnippet", "go invert_colors", "package main")
//!     .unwrap();
//! assert!(html.starts_with(r#"<div class="inverse">"#));
//! ```

mod github;
mod registry;
mod snippet;

use codesnip_highlight::HighlightError;
use codesnip_link::LinkError;

pub use github::CodeFromGithubTag;
pub use registry::{LINK_TAG, SNIPPET_TAG, TagKind, TagRegistry};
pub use snippet::CodeSnippetTag;

/// Tag rendering error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// No tag registered under this name.
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("{0}")]
    Link(#[from] LinkError),

    #[error("{0}")]
    Highlight(#[from] HighlightError),
}
