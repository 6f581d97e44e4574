//! Highlight markup parsing.
//!
//! Parses `<language> [option] [option=value]...`, the argument syntax of
//! Jekyll's `highlight` block. The language may be omitted when the first
//! token is a `key=value` option, and `lang=<language>` names it instead.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::HighlightError;

static SYNTAX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(?:([a-zA-Z0-9.+#_-]+)(?:\s+|$))?((?:\w+(?:=(?:[\w.+#-]+|"[^"]*"))?(?:\s+|$))*)$"#,
    )
    .unwrap()
});

static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)(?:=([\w.+#-]+|"[^"]*"))?"#).unwrap());

/// Parsed highlight markup.
///
/// # Example
///
/// ```
/// use codesnip_highlight::HighlightArgs;
///
/// let args = HighlightArgs::parse("ruby linenos hl_lines=\"1 2\"").unwrap();
/// assert_eq!(args.language(), Some("ruby"));
/// assert!(args.line_numbers());
/// assert_eq!(args.get("hl_lines"), Some("1 2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightArgs {
    language: Option<String>,
    options: BTreeMap<String, Option<String>>,
}

impl HighlightArgs {
    /// Parse markup. Blank markup yields no language and no options.
    pub fn parse(markup: &str) -> Result<Self, HighlightError> {
        let markup = markup.trim();
        if markup.is_empty() {
            return Ok(Self::default());
        }

        let captures = SYNTAX_RE
            .captures(markup)
            .ok_or_else(|| HighlightError::Syntax {
                markup: markup.to_owned(),
            })?;

        let mut options: BTreeMap<String, Option<String>> = captures
            .get(2)
            .map(|opts| {
                OPTION_RE
                    .captures_iter(opts.as_str())
                    .map(|option| {
                        let value = option
                            .get(2)
                            .map(|v| v.as_str().trim_matches('"').to_owned());
                        (option[1].to_owned(), value)
                    })
                    .collect()
            })
            .unwrap_or_default();

        let language = match captures.get(1) {
            Some(language) => Some(language.as_str().to_owned()),
            None => options.remove("lang").flatten(),
        };

        Ok(Self { language, options })
    }

    /// Language name, the first markup token or the `lang` option.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Whether an option is present, with or without a value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Value of a `key=value` option.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key)?.as_deref()
    }

    /// Names of all options in sorted order.
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Whether `linenos` asks for line numbers.
    ///
    /// Accepts the bare flag as well as `inline`, `table` and `true` values.
    #[must_use]
    pub fn line_numbers(&self) -> bool {
        match self.options.get("linenos") {
            Some(None) => true,
            Some(Some(value)) => matches!(value.as_str(), "inline" | "table" | "true"),
            None => false,
        }
    }
}
