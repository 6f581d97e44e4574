//! Tag name registry owned by the host template engine.

use std::collections::HashMap;

use codesnip_features::FeatureOptions;
use codesnip_highlight::Highlighter;

use crate::TagError;
use crate::github::CodeFromGithubTag;
use crate::snippet::CodeSnippetTag;

/// Default name of the snippet block tag.
pub const SNIPPET_TAG: &str = "codesnippet";

/// Default name of the line-range link tag.
pub const LINK_TAG: &str = "code_from_github";

/// Kind of tag a name is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    CodeSnippet,
    CodeFromGithub,
}

/// Maps tag names to tag kinds and renders invocations.
///
/// The registry is built once and only read afterwards, so a single instance
/// can serve parallel page renders.
#[derive(Debug)]
pub struct TagRegistry<H> {
    highlighter: H,
    options: FeatureOptions,
    tags: HashMap<String, TagKind>,
}

impl<H: Highlighter> TagRegistry<H> {
    /// Create a registry with no tags bound.
    #[must_use]
    pub fn new(highlighter: H, options: FeatureOptions) -> Self {
        Self {
            highlighter,
            options,
            tags: HashMap::new(),
        }
    }

    /// Create a registry with both tags under their default names.
    #[must_use]
    pub fn with_defaults(highlighter: H, options: FeatureOptions) -> Self {
        Self::new(highlighter, options)
            .with_tag(SNIPPET_TAG, TagKind::CodeSnippet)
            .with_tag(LINK_TAG, TagKind::CodeFromGithub)
    }

    /// Bind `name` to `kind`, replacing any previous binding.
    #[must_use]
    pub fn with_tag(mut self, name: impl Into<String>, kind: TagKind) -> Self {
        self.tags.insert(name.into(), kind);
        self
    }

    /// Kind bound to `name`.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<TagKind> {
        self.tags.get(name).copied()
    }

    /// Registered tag names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn highlighter(&self) -> &H {
        &self.highlighter
    }

    /// Render one tag invocation.
    ///
    /// # Errors
    ///
    /// Returns `TagError::UnknownTag` for unregistered names, and propagates
    /// link and highlighter errors.
    pub fn render(&self, name: &str, markup: &str, body: &str) -> Result<String, TagError> {
        let kind = self
            .kind(name)
            .ok_or_else(|| TagError::UnknownTag(name.to_owned()))?;
        tracing::debug!(tag = name, ?kind, markup, "Rendering tag");

        match kind {
            TagKind::CodeSnippet => {
                CodeSnippetTag::parse(markup, &self.options).render(&self.highlighter, body)
            }
            TagKind::CodeFromGithub => {
                Ok(CodeFromGithubTag::parse(markup, &self.options.link_base_url)?.render())
            }
        }
    }
}
