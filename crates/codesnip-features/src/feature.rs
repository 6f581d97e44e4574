//! Activated feature instances.

use crate::attribution::AttributionLink;
use crate::inversion::ColorInversion;
use crate::spec::FeatureSpec;

/// Hosting service prefix joined with `githublink=` values.
pub const DEFAULT_LINK_BASE_URL: &str = "https://github.com/";

/// Capabilities shared by every activated feature.
pub trait Decorator {
    /// Whether `token` is this feature's own markup token.
    ///
    /// Every token the feature's spec matches must also be owned here, so the
    /// token never reaches the highlighter.
    fn owns_token(&self, token: &str) -> bool;

    /// Transform rendered HTML.
    fn apply(&self, html: &str) -> String;
}

/// Settings shared by all feature instances of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureOptions {
    /// Prefix for attribution link URLs, ending with `/`.
    pub link_base_url: String,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            link_base_url: DEFAULT_LINK_BASE_URL.to_owned(),
        }
    }
}

/// One activated feature for one tag invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    AttributionLink(AttributionLink),
    ColorInversion(ColorInversion),
}

impl Feature {
    /// The spec this instance was built from.
    #[must_use]
    pub fn spec(&self) -> FeatureSpec {
        match self {
            Self::AttributionLink(_) => FeatureSpec::AttributionLink,
            Self::ColorInversion(_) => FeatureSpec::ColorInversion,
        }
    }
}

impl Decorator for Feature {
    fn owns_token(&self, token: &str) -> bool {
        match self {
            Self::AttributionLink(link) => link.owns_token(token),
            Self::ColorInversion(inversion) => inversion.owns_token(token),
        }
    }

    fn apply(&self, html: &str) -> String {
        match self {
            Self::AttributionLink(link) => link.apply(html),
            Self::ColorInversion(inversion) => inversion.apply(html),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(Feature: Send, Sync);

    #[test]
    fn test_spec_round_trips_through_build() {
        let options = FeatureOptions::default();
        for (spec, token) in [
            (FeatureSpec::AttributionLink, "githublink=a/b/blob/c/d"),
            (FeatureSpec::ColorInversion, "invert_colors"),
        ] {
            let feature = spec.build(token, &options).unwrap();
            assert_eq!(feature.spec(), spec);
            assert!(feature.owns_token(token));
        }
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(FeatureOptions::default().link_base_url, "https://github.com/");
    }
}
