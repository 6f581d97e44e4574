//! Line-range link tag.

use codesnip_link::LineRange;

use crate::TagError;

/// One invocation of the line-range link tag.
///
/// The markup is a link suffix such as `octo/repo/blob/main/lib.rs#L3-L9`.
/// Parsing fails when the link has no line-range fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFromGithubTag {
    range: LineRange,
}

impl CodeFromGithubTag {
    pub fn parse(markup: &str, base_url: &str) -> Result<Self, TagError> {
        let range = LineRange::parse_with_base(markup.trim(), base_url)?;
        Ok(Self { range })
    }

    #[must_use]
    pub fn range(&self) -> &LineRange {
        &self.range
    }

    /// The tag produces no output.
    #[must_use]
    pub fn render(&self) -> String {
        tracing::debug!(
            url = self.range.url(),
            start = self.range.start(),
            end = self.range.end(),
            "Parsed line range link"
        );
        String::new()
    }
}
