//! Removal of feature tokens from tag arguments.

use crate::args::TagArguments;
use crate::feature::{Decorator, Feature};

/// Drop every token owned by an active feature.
///
/// Remaining tokens keep their relative order.
#[must_use]
pub fn strip(args: &TagArguments, features: &[Feature]) -> TagArguments {
    args.iter()
        .filter(|token| !features.iter().any(|feature| feature.owns_token(token)))
        .map(str::to_owned)
        .collect()
}
