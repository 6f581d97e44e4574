//! Built-in HTML highlighter.

use std::fmt::Write;
use std::sync::LazyLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Style, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::args::HighlightArgs;
use crate::{HighlightError, Highlighter};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// CSS class of the outer block container.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// CSS class of the expand toggle picked up by `expandolink.js`.
pub const TOGGLE_CLASS: &str = "expandolink";

/// CSS class of line number gutters.
pub const LINENO_CLASS: &str = "lineno";

/// Color theme used unless configured otherwise.
pub const DEFAULT_THEME: &str = "InspiredGitHub";

/// Options understood by [`HtmlHighlighter`] itself.
const KNOWN_OPTIONS: &[&str] = &["lang", "linenos"];

/// Rendering options for [`HtmlHighlighter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    /// Emit an expand toggle inside every `<pre>`.
    pub expand_toggle: bool,
    /// Width in pixels an overflowing block expands to.
    pub expand_width: u32,
    /// Number lines even without `linenos` in the markup.
    pub line_numbers: bool,
    /// Name of a bundled syntect theme.
    pub theme: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            expand_toggle: true,
            expand_width: 1000,
            line_numbers: false,
            theme: DEFAULT_THEME.to_owned(),
        }
    }
}

/// Renders code inside the standard block wrapper.
///
/// Languages known to syntect are tokenized into inline-styled spans. Any
/// other language, or none, renders as escaped plain text.
///
/// Output shape:
///
/// ```text
/// <div class="highlight"><pre><a class="expandolink" ...>&gt;</a><code class="language-go" data-lang="go">...</code></pre>
/// </div>
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlHighlighter {
    options: HighlightOptions,
}

impl HtmlHighlighter {
    #[must_use]
    pub fn new(options: HighlightOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    fn write_toggle(&self, out: &mut String) {
        write!(
            out,
            r##"<a class="{TOGGLE_CLASS}" href="#" data-expand-width="{}" title="Expand">&gt;</a>"##,
            self.options.expand_width
        )
        .unwrap();
    }

    /// Render `code` into one HTML fragment per line.
    fn render_lines(&self, code: &str, language: Option<&str>) -> Result<Vec<String>, HighlightError> {
        let syntax = language.and_then(|lang| SYNTAX_SET.find_syntax_by_token(lang));
        let theme = THEME_SET.themes.get(&self.options.theme);
        if theme.is_none() {
            tracing::warn!(theme = %self.options.theme, "Unknown highlight theme, rendering plain text");
        }
        let (Some(syntax), Some(theme)) = (syntax, theme) else {
            if syntax.is_none() {
                tracing::debug!(language, "No syntax for language, rendering plain text");
            }
            return Ok(code
                .lines()
                .map(|line| html_escape::encode_text(line).into_owned())
                .collect());
        };

        let mut lines = HighlightLines::new(syntax, theme);
        LinesWithEndings::from(code)
            .map(|line| {
                let ranges: Vec<(Style, &str)> = lines
                    .highlight_line(line, &SYNTAX_SET)
                    .map_err(render_error)?
                    .into_iter()
                    .map(|(style, text)| (style, text.trim_end_matches(['\n', '\r'])))
                    .filter(|(_, text)| !text.is_empty())
                    .collect();
                styled_line_to_highlighted_html(&ranges, IncludeBackground::No).map_err(render_error)
            })
            .collect()
    }
}

fn render_error(err: syntect::Error) -> HighlightError {
    HighlightError::Render {
        message: err.to_string(),
    }
}

impl Highlighter for HtmlHighlighter {
    fn highlight(&self, markup: &str, body: &str) -> Result<String, HighlightError> {
        let args = HighlightArgs::parse(markup)?;
        for name in args.option_names().filter(|name| !KNOWN_OPTIONS.contains(name)) {
            tracing::warn!(option = name, "Ignoring unsupported highlight option");
        }

        let code = body.trim_matches(['\n', '\r']);
        let line_numbers = self.options.line_numbers || args.line_numbers();

        let mut out = format!(r#"<div class="{HIGHLIGHT_CLASS}"><pre>"#);
        if self.options.expand_toggle {
            self.write_toggle(&mut out);
        }

        match args.language() {
            Some(lang) => {
                let lang = html_escape::encode_double_quoted_attribute(lang);
                write!(out, r#"<code class="language-{lang}" data-lang="{lang}">"#).unwrap();
            }
            None => out.push_str("<code>"),
        }

        let lines = self.render_lines(code, args.language())?;
        if line_numbers {
            write_numbered(&lines, &mut out);
        } else {
            out.push_str(&lines.join("\n"));
        }

        out.push_str("</code></pre>\n</div>");
        Ok(out)
    }
}

/// Prefix every rendered line with a right-aligned line number gutter.
fn write_numbered(lines: &[String], out: &mut String) {
    let width = lines.len().to_string().len();

    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write!(
            out,
            r#"<span class="{LINENO_CLASS}">{:>width$} </span>{line}"#,
            index + 1
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static_assertions::assert_impl_all!(HtmlHighlighter: Send, Sync);

    fn plain() -> HtmlHighlighter {
        HtmlHighlighter::new(HighlightOptions {
            expand_toggle: false,
            ..HighlightOptions::default()
        })
    }

    #[test]
    fn test_highlight_known_language_tokenizes_keywords() {
        let html = plain().highlight("rust", "fn main() { let x = 1; }\n").unwrap();
        assert!(html.starts_with(
            r#"<div class="highlight"><pre><code class="language-rust" data-lang="rust"><span style=""#
        ));
        assert!(html.contains(">fn</span>"));
        assert!(html.ends_with("</span></code></pre>\n</div>"));
    }

    #[test]
    fn test_highlight_known_language_escapes_tokens() {
        let html = plain().highlight("html", "<b>&</b>").unwrap();
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_highlight_unknown_language_is_plain_text() {
        let html = plain().highlight("nosuchlang", "fmt.Println(\"hi\")\n").unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="highlight"><pre><code class="language-nosuchlang" data-lang="nosuchlang">"#,
                r#"fmt.Println("hi")</code></pre>"#,
                "\n</div>"
            )
        );
    }

    #[test]
    fn test_highlight_unknown_theme_is_plain_text() {
        let highlighter = HtmlHighlighter::new(HighlightOptions {
            expand_toggle: false,
            theme: "no-such-theme".to_owned(),
            ..HighlightOptions::default()
        });
        let html = highlighter.highlight("rust", "fn main() {}").unwrap();
        assert!(html.contains(r#"data-lang="rust">fn main() {}</code>"#));
    }

    #[test]
    fn test_highlight_without_language() {
        let html = plain().highlight("", "x").unwrap();
        assert_eq!(
            html,
            "<div class=\"highlight\"><pre><code>x</code></pre>\n</div>"
        );
    }

    #[test]
    fn test_highlight_escapes_body() {
        let html = plain().highlight("nosuchlang", "<b>&</b>").unwrap();
        assert!(html.contains("&lt;b&gt;&amp;&lt;/b&gt;"));
    }

    #[test]
    fn test_highlight_trims_surrounding_newlines_only() {
        let html = plain().highlight("", "\n\n    indented\n\n").unwrap();
        assert!(html.contains("<code>    indented</code>"));
    }

    #[test]
    fn test_highlight_with_toggle() {
        let html = HtmlHighlighter::default().highlight("go", "x").unwrap();
        assert!(html.starts_with(concat!(
            r#"<div class="highlight"><pre>"#,
            r##"<a class="expandolink" href="#" data-expand-width="1000" title="Expand">&gt;</a>"##,
            "<code"
        )));
        assert_eq!(html.matches("expandolink").count(), 1);
    }

    #[test]
    fn test_highlight_custom_expand_width() {
        let highlighter = HtmlHighlighter::new(HighlightOptions {
            expand_width: 1400,
            ..HighlightOptions::default()
        });
        let html = highlighter.highlight("", "x").unwrap();
        assert!(html.contains(r#"data-expand-width="1400""#));
    }

    #[test]
    fn test_highlight_line_numbers_from_markup() {
        let body = (1..=10).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
        let html = plain().highlight("nosuchlang linenos", &body).unwrap();
        assert!(html.contains(r#"<span class="lineno"> 1 </span>l1"#));
        assert!(html.contains(r#"<span class="lineno">10 </span>l10"#));
    }

    #[test]
    fn test_highlight_line_numbers_from_options() {
        let highlighter = HtmlHighlighter::new(HighlightOptions {
            expand_toggle: false,
            line_numbers: true,
            ..HighlightOptions::default()
        });
        let html = highlighter.highlight("", "a\nb").unwrap();
        assert!(html.contains(concat!(
            r#"<span class="lineno">1 </span>a"#,
            "\n",
            r#"<span class="lineno">2 </span>b"#
        )));
    }

    #[test]
    fn test_highlight_line_numbers_with_tokens() {
        let html = plain().highlight("rust linenos", "fn a() {}\nfn b() {}").unwrap();
        assert!(html.contains(r#"<span class="lineno">1 </span><span style=""#));
        assert!(html.contains(r#"<span class="lineno">2 </span><span style=""#));
        assert!(!html.contains("\n</span>"));
    }

    #[test]
    fn test_highlight_lang_option_sets_language() {
        let html = plain().highlight("lang=go", "package main").unwrap();
        assert!(html.contains(r#"<code class="language-go" data-lang="go"><span style=""#));
    }

    #[test]
    fn test_highlight_output_ends_with_closing_wrapper() {
        for markup in ["", "go", "go linenos", "go title=x", "lang=go", "nosuchlang"] {
            let html = HtmlHighlighter::default().highlight(markup, "x").unwrap();
            assert!(html.ends_with("</pre>\n</div>"), "markup {markup:?}");
        }
    }

    #[test]
    fn test_highlight_syntax_error() {
        let err = plain().highlight("go lang:go", "x").unwrap_err();
        assert!(matches!(err, HighlightError::Syntax { .. }));
    }

    #[test]
    fn test_boxed_highlighter() {
        let boxed: Box<dyn Highlighter> = Box::new(plain());
        assert!(boxed.highlight("go", "x").is_ok());
    }
}
