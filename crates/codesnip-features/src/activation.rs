//! Feature activation from tag arguments.

use crate::args::TagArguments;
use crate::feature::{Feature, FeatureOptions};
use crate::spec::FeatureSpec;

/// Build one instance per spec that has a matching token.
///
/// Each spec uses the first token it matches. The result follows the order
/// of `specs`, not the order tokens appear in the markup.
#[must_use]
pub fn activate(args: &TagArguments, specs: &[FeatureSpec], options: &FeatureOptions) -> Vec<Feature> {
    specs
        .iter()
        .filter_map(|spec| {
            let token = args.iter().find(|token| spec.matches(token))?;
            let feature = spec.build(token, options)?;
            tracing::debug!(feature = spec.name(), token, "Feature activated");
            Some(feature)
        })
        .collect()
}
