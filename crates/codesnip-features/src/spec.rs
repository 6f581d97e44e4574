//! Registry of known snippet features.

use crate::attribution::AttributionLink;
use crate::feature::{Feature, FeatureOptions};
use crate::inversion::ColorInversion;

/// Token prefix that activates the attribution link.
pub const GITHUB_LINK_PREFIX: &str = "githublink=";

/// Bare flag that activates color inversion.
pub const INVERT_COLORS_FLAG: &str = "invert_colors";

/// Descriptor of one optional feature.
///
/// The set is closed. [`FeatureSpec::ALL`] fixes the order in which features
/// are activated and applied: the attribution link inserts an element at the
/// end of the highlighted block, so it has to run before color inversion wraps
/// that block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureSpec {
    /// `githublink=<owner>/<repo>/blob/<ref>/<path...>`
    AttributionLink,
    /// `invert_colors`
    ColorInversion,
}

impl FeatureSpec {
    /// All features in registration order.
    pub const ALL: [Self; 2] = [Self::AttributionLink, Self::ColorInversion];

    /// Unique feature name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AttributionLink => "githublink",
            Self::ColorInversion => "invert_colors",
        }
    }

    /// Whether `token` activates this feature.
    #[must_use]
    pub fn matches(self, token: &str) -> bool {
        match self {
            Self::AttributionLink => token.starts_with(GITHUB_LINK_PREFIX),
            Self::ColorInversion => token == INVERT_COLORS_FLAG,
        }
    }

    /// Build a feature instance from its activating token.
    ///
    /// Returns `None` when the token does not belong to this feature.
    #[must_use]
    pub fn build(self, token: &str, options: &FeatureOptions) -> Option<Feature> {
        if !self.matches(token) {
            return None;
        }
        match self {
            Self::AttributionLink => {
                let (_, value) = token.split_once('=')?;
                Some(Feature::AttributionLink(AttributionLink::new(
                    value,
                    &options.link_base_url,
                )))
            }
            Self::ColorInversion => Some(Feature::ColorInversion(ColorInversion)),
        }
    }
}
