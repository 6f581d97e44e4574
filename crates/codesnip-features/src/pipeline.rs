//! Decorator pipeline over rendered HTML.

use crate::feature::{Decorator, Feature};

/// Apply each feature in order, feeding every output into the next.
///
/// With no features the HTML is returned unchanged.
#[must_use]
pub fn decorate(html: &str, features: &[Feature]) -> String {
    features
        .iter()
        .fold(html.to_owned(), |html, feature| feature.apply(&html))
}
