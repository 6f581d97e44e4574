//! Line-range parsing for links into a source hosting service.
//!
//! A link suffix is everything after the hosting service's base URL, for
//! example `octo/hello-world/blob/main/src/lib.rs#L10-L20`. [`LineRange`]
//! extracts the highlighted lines from its fragment and the repository name
//! from its path.
//!
//! # Example
//!
//! ```
//! use codesnip_link::LineRange;
//!
//! let range = LineRange::parse("octo/hello-world/blob/v1/x.go#L10-L20").unwrap();
//! assert_eq!(range.start(), "10");
//! assert_eq!(range.end(), Some("20"));
//! assert_eq!(range.project(), Some("hello-world"));
//! assert_eq!(range.url(), "https://github.com/octo/hello-world/blob/v1/x.go#L10-L20");
//! ```

/// Base URL prefixed to link suffixes by [`LineRange::parse`].
pub const DEFAULT_BASE_URL: &str = "https://github.com/";

/// Link parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// The link has no `#L<start>[-<end>]` fragment.
    #[error("Malformed link {link}: missing line range fragment")]
    MalformedLink {
        /// The link suffix as given.
        link: String,
    },
}

/// Line range and project parsed from a hosted source link.
///
/// Line numbers stay strings: the fragment format does not guarantee numeric
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineRange {
    url: String,
    start: String,
    end: Option<String>,
    project: Option<String>,
}

impl LineRange {
    /// Parse a link suffix relative to [`DEFAULT_BASE_URL`].
    pub fn parse(suffix: &str) -> Result<Self, LinkError> {
        Self::parse_with_base(suffix, DEFAULT_BASE_URL)
    }

    /// Parse a link suffix relative to `base_url`.
    ///
    /// The fragment loses a leading `L` and is split on the first `-`. The end
    /// part loses its own leading `L`, so `L10-L20` and `L10-20` agree.
    pub fn parse_with_base(suffix: &str, base_url: &str) -> Result<Self, LinkError> {
        let malformed = || LinkError::MalformedLink {
            link: suffix.to_owned(),
        };

        let (location, fragment) = suffix.split_once('#').ok_or_else(malformed)?;
        let lines = fragment.strip_prefix('L').unwrap_or(fragment);
        if lines.is_empty() {
            return Err(malformed());
        }

        let (start, end) = match lines.split_once('-') {
            Some((start, end)) => (start, Some(end.strip_prefix('L').unwrap_or(end))),
            None => (lines, None),
        };

        Ok(Self {
            url: format!("{base_url}{suffix}"),
            start: start.to_owned(),
            end: end.map(str::to_owned),
            project: location.split('/').nth(1).map(str::to_owned),
        })
    }

    /// Full link URL including the fragment.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// First highlighted line.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Last highlighted line, absent for single-line links.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }

    /// Repository name: the second path segment of the link.
    #[must_use]
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }
}
