//! Tag markup tokenization.

use std::fmt;

/// Whitespace-delimited tokens of a tag's markup string, in source order.
///
/// # Example
///
/// ```
/// use codesnip_features::TagArguments;
///
/// let args = TagArguments::parse("  ruby   linenos ");
/// assert_eq!(args.tokens(), ["ruby", "linenos"]);
/// assert_eq!(args.to_markup(), "ruby linenos");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagArguments {
    tokens: Vec<String>,
}

impl TagArguments {
    /// Split markup on any run of whitespace.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        markup.split_whitespace().map(str::to_owned).collect()
    }

    /// All tokens in source order.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate tokens as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Re-join tokens with single spaces.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.tokens.join(" ")
    }
}

impl FromIterator<String> for TagArguments {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TagArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}
