//! CLI command implementations.

pub(crate) mod assets;
pub(crate) mod link;
pub(crate) mod render;

pub(crate) use assets::AssetsArgs;
pub(crate) use link::LinkArgs;
pub(crate) use render::RenderArgs;

use codesnip_config::Config;
use codesnip_features::FeatureOptions;
use codesnip_highlight::{HighlightOptions, HtmlHighlighter};
use codesnip_tags::{TagKind, TagRegistry};

/// Build the tag registry described by `config`.
pub(crate) fn build_registry(config: &Config) -> TagRegistry<HtmlHighlighter> {
    let highlighter = HtmlHighlighter::new(HighlightOptions {
        expand_toggle: config.highlight.expand_toggle,
        expand_width: config.highlight.expand_width,
        line_numbers: config.highlight.line_numbers,
        theme: config.highlight.theme.clone(),
    });
    let options = FeatureOptions {
        link_base_url: config.hosting.base_url.clone(),
    };

    TagRegistry::new(highlighter, options)
        .with_tag(config.tags.snippet.clone(), TagKind::CodeSnippet)
        .with_tag(config.tags.link.clone(), TagKind::CodeFromGithub)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_build_registry_uses_configured_names() {
        let mut config = Config::default();
        config.tags.snippet = "snippet".to_owned();
        config.tags.link = "snippet_link".to_owned();

        let registry = build_registry(&config);
        assert_eq!(registry.names(), vec!["snippet", "snippet_link"]);
        assert_eq!(registry.kind("snippet"), Some(TagKind::CodeSnippet));
    }

    #[test]
    fn test_build_registry_passes_highlight_options() {
        let mut config = Config::default();
        config.highlight.expand_toggle = false;
        config.highlight.expand_width = 1400;
        config.highlight.theme = "base16-ocean.dark".to_owned();

        let registry = build_registry(&config);
        assert!(!registry.highlighter().options().expand_toggle);
        assert_eq!(registry.highlighter().options().expand_width, 1400);
        assert_eq!(registry.highlighter().options().theme, "base16-ocean.dark");
    }

    #[test]
    fn test_build_registry_renders_lang_option_markup() {
        let mut config = Config::default();
        config.highlight.expand_toggle = false;

        let html = build_registry(&config)
            .render("codesnippet", "lang=nosuchlang githublink=a/b/blob/c/d invert_colors", "x")
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="inverse"><div class="highlight"><pre>"#,
                r#"<code class="language-nosuchlang" data-lang="nosuchlang">x</code>"#,
                r#"<a class="code-attribution" href="https://github.com/a/b/blob/c/d">d (b c)</a>"#,
                "</pre></div></div>"
            )
        );
    }
}
