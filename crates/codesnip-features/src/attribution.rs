//! Attribution link back to the hosted source file.

use std::sync::LazyLock;

use regex::Regex;

use crate::feature::Decorator;
use crate::spec::GITHUB_LINK_PREFIX;

/// CSS class of the inserted anchor.
pub const ATTRIBUTION_CLASS: &str = "code-attribution";

/// Closing wrapper the highlighter emits at the end of a block.
static CLOSING_WRAPPER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</pre>\s+</div>\s*\z").unwrap());

/// Anchor pointing at the file and revision a snippet was copied from.
///
/// Built from a link value of the form `<owner>/<project>/blob/<ref>/<path...>`.
/// Missing segments leave the corresponding field empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributionLink {
    link: String,
    path: String,
    project: String,
    tag: String,
}

impl AttributionLink {
    /// Parse a `githublink=` value, joined onto `base_url` for the href.
    ///
    /// # Example
    ///
    /// ```
    /// use codesnip_features::AttributionLink;
    ///
    /// let link = AttributionLink::new("octo/hello-world/blob/v1/src/main.go", "https://github.com/");
    /// assert_eq!(link.project(), "hello-world");
    /// assert_eq!(link.tag(), "v1");
    /// assert_eq!(link.path(), "src/main.go");
    /// ```
    #[must_use]
    pub fn new(value: &str, base_url: &str) -> Self {
        let value = value.trim_start_matches('/');
        // Line fragments and query strings are part of the href but not the path.
        let location = value.find(['#', '?']).map_or(value, |end| &value[..end]);
        let segments: Vec<&str> = location.split('/').collect();
        let segment = |index: usize| segments.get(index).copied().unwrap_or_default().to_owned();

        Self {
            link: format!("{base_url}{value}"),
            project: segment(1),
            tag: segment(3),
            path: segments.get(4..).map(|rest| rest.join("/")).unwrap_or_default(),
        }
    }

    /// Fully qualified URL.
    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    /// File path relative to the repository root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Repository name (second link segment).
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Branch, tag or commit the link points at.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn render_anchor(&self) -> String {
        format!(
            r#"<a class="{ATTRIBUTION_CLASS}" href="{}">{} ({} {})</a>"#,
            html_escape::encode_double_quoted_attribute(&self.link),
            html_escape::encode_text(&self.path),
            html_escape::encode_text(&self.project),
            html_escape::encode_text(&self.tag),
        )
    }
}

impl Decorator for AttributionLink {
    fn owns_token(&self, token: &str) -> bool {
        token.starts_with(GITHUB_LINK_PREFIX)
    }

    /// Insert the anchor right before the block's final `</pre></div>`.
    ///
    /// HTML without the expected closing wrapper is returned unchanged.
    fn apply(&self, html: &str) -> String {
        let Some(closing) = CLOSING_WRAPPER_RE.find(html) else {
            tracing::debug!(link = %self.link, "Closing wrapper not found, skipping attribution");
            return html.to_owned();
        };

        let anchor = self.render_anchor();
        let mut out = String::with_capacity(closing.start() + anchor.len() + 12);
        out.push_str(&html[..closing.start()]);
        out.push_str(&anchor);
        out.push_str("</pre></div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BASE: &str = "https://github.com/";

    #[test]
    fn test_new_full_link() {
        let link = AttributionLink::new("octo/hello-world/blob/v1/src/main.go", BASE);
        assert_eq!(link.link(), "https://github.com/octo/hello-world/blob/v1/src/main.go");
        assert_eq!(link.project(), "hello-world");
        assert_eq!(link.tag(), "v1");
        assert_eq!(link.path(), "src/main.go");
    }

    #[test]
    fn test_new_deep_path() {
        let link = AttributionLink::new("o/p/blob/main/a/b/c/d.rs", BASE);
        assert_eq!(link.path(), "a/b/c/d.rs");
    }

    #[test]
    fn test_new_with_line_fragment() {
        let link = AttributionLink::new("o/p/blob/main/lib.rs#L3-L9", BASE);
        assert_eq!(link.link(), "https://github.com/o/p/blob/main/lib.rs#L3-L9");
        assert_eq!(link.path(), "lib.rs");
    }

    #[test]
    fn test_new_missing_segments_degrade_to_empty() {
        let link = AttributionLink::new("octo/hello-world", BASE);
        assert_eq!(link.project(), "hello-world");
        assert_eq!(link.tag(), "");
        assert_eq!(link.path(), "");

        let link = AttributionLink::new("", BASE);
        assert_eq!(link.link(), BASE);
        assert_eq!(link.project(), "");
        assert_eq!(link.tag(), "");
        assert_eq!(link.path(), "");
    }

    #[test]
    fn test_new_custom_base_url() {
        let link = AttributionLink::new("o/p/blob/r/f", "https://git.example.com/");
        assert_eq!(link.link(), "https://git.example.com/o/p/blob/r/f");
    }

    #[test]
    fn test_apply_inserts_anchor_before_closing() {
        let link = AttributionLink::new("octo/hello-world/blob/v1/src/main.go", BASE);
        let html = "<div class=\"highlight\"><pre><code>x</code></pre>\n</div>";
        assert_eq!(
            link.apply(html),
            concat!(
                r#"<div class="highlight"><pre><code>x</code>"#,
                r#"<a class="code-attribution" href="https://github.com/octo/hello-world/blob/v1/src/main.go">"#,
                "src/main.go (hello-world v1)</a></pre></div>"
            )
        );
    }

    #[test]
    fn test_apply_tolerates_trailing_whitespace() {
        let link = AttributionLink::new("o/p/blob/r/f.go", BASE);
        let result = link.apply("<div><pre>x</pre>\n  </div>\n");
        assert!(result.ends_with("f.go (p r)</a></pre></div>"));
    }

    #[test]
    fn test_apply_uses_last_pre() {
        let link = AttributionLink::new("o/p/blob/r/f.go", BASE);
        let result = link.apply("<div><pre>a</pre>\n</div><div><pre>b</pre>\n</div>");
        assert!(result.starts_with("<div><pre>a</pre>\n</div><div><pre>b<a "));
    }

    #[test]
    fn test_apply_without_closing_is_noop() {
        let link = AttributionLink::new("o/p/blob/r/f.go", BASE);
        for html in ["", "<p>plain</p>", "<pre>x</pre></div>", "<pre>x</pre>\n</div><p>after</p>"] {
            assert_eq!(link.apply(html), html);
        }
    }

    #[test]
    fn test_apply_escapes_link_text() {
        let link = AttributionLink::new("o/p/blob/r/<b>.go", BASE);
        let result = link.apply("<pre>x</pre>\n</div>");
        assert!(result.contains("&lt;b&gt;.go (p r)"));
    }

    #[test]
    fn test_owns_any_github_link_token() {
        let link = AttributionLink::new("o/p/blob/r/f", BASE);
        assert!(link.owns_token("githublink=o/p/blob/r/f"));
        assert!(link.owns_token("githublink=other"));
        assert!(!link.owns_token("invert_colors"));
    }
}
