//! Highlighted snippet block tag.

use codesnip_features::{
    Feature, FeatureOptions, FeatureSpec, TagArguments, activate, decorate, strip,
};
use codesnip_highlight::Highlighter;

use crate::TagError;

/// One invocation of the snippet block tag.
///
/// Parsing splits the markup into active features and the residual markup
/// forwarded to the highlighter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippetTag {
    features: Vec<Feature>,
    markup: String,
}

impl CodeSnippetTag {
    #[must_use]
    pub fn parse(markup: &str, options: &FeatureOptions) -> Self {
        let args = TagArguments::parse(markup);
        let features = activate(&args, &FeatureSpec::ALL, options);
        let markup = strip(&args, &features).to_markup();
        Self { features, markup }
    }

    /// Active features in application order.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Markup left for the highlighter.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Highlight `body` and decorate the result.
    pub fn render<H: Highlighter + ?Sized>(
        &self,
        highlighter: &H,
        body: &str,
    ) -> Result<String, TagError> {
        let html = highlighter.highlight(&self.markup, body)?;
        Ok(decorate(&html, &self.features))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use codesnip_highlight::HighlightError;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Records the markup it receives and returns a fixed block.
    #[derive(Default)]
    struct RecordingHighlighter {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl Highlighter for RecordingHighlighter {
        fn highlight(&self, markup: &str, body: &str) -> Result<String, HighlightError> {
            self.calls
                .lock()
                .unwrap()
                .push((markup.to_owned(), body.to_owned()));
            Ok(format!("<div class=\"highlight\"><pre>{body}</pre>\n</div>"))
        }
    }

    #[test]
    fn test_parse_strips_feature_tokens() {
        let tag = CodeSnippetTag::parse(
            "lang=go githublink=a/b/blob/c/d invert_colors",
            &FeatureOptions::default(),
        );
        assert_eq!(tag.markup(), "lang=go");
        assert_eq!(
            tag.features()
                .iter()
                .map(Feature::spec)
                .collect::<Vec<_>>(),
            vec![FeatureSpec::AttributionLink, FeatureSpec::ColorInversion]
        );
    }

    #[test]
    fn test_render_forwards_residual_markup() {
        let highlighter = RecordingHighlighter::default();
        let tag = CodeSnippetTag::parse("  ruby   invert_colors linenos ", &FeatureOptions::default());
        tag.render(&highlighter, "puts 1").unwrap();

        let calls = highlighter.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![("ruby linenos".to_owned(), "puts 1".to_owned())]
        );
    }

    #[test]
    fn test_render_without_features_returns_highlighter_output() {
        let highlighter = RecordingHighlighter::default();
        let tag = CodeSnippetTag::parse("go", &FeatureOptions::default());
        assert_eq!(
            tag.render(&highlighter, "x").unwrap(),
            "<div class=\"highlight\"><pre>x</pre>\n</div>"
        );
    }

    #[test]
    fn test_render_applies_features() {
        let highlighter = RecordingHighlighter::default();
        let tag = CodeSnippetTag::parse(
            "go githublink=octo/hello-world/blob/v1/src/main.go invert_colors",
            &FeatureOptions::default(),
        );
        assert_eq!(
            tag.render(&highlighter, "x").unwrap(),
            concat!(
                r#"<div class="inverse"><div class="highlight"><pre>x"#,
                r#"<a class="code-attribution" href="https://github.com/octo/hello-world/blob/v1/src/main.go">"#,
                "src/main.go (hello-world v1)</a></pre></div></div>"
            )
        );
    }

    #[test]
    fn test_render_propagates_highlight_error() {
        struct Failing;
        impl Highlighter for Failing {
            fn highlight(&self, markup: &str, _body: &str) -> Result<String, HighlightError> {
                Err(HighlightError::Syntax {
                    markup: markup.to_owned(),
                })
            }
        }

        let tag = CodeSnippetTag::parse("bad invert_colors", &FeatureOptions::default());
        let err = tag.render(&Failing, "x").unwrap_err();
        assert_eq!(
            err,
            TagError::Highlight(HighlightError::Syntax {
                markup: "bad".to_owned()
            })
        );
    }
}
