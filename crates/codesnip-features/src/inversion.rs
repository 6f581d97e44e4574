//! Color inversion wrapper.

use crate::feature::Decorator;
use crate::spec::INVERT_COLORS_FLAG;

/// CSS class of the wrapping container.
pub const INVERSE_CLASS: &str = "inverse";

/// Wraps the whole block in an inverse-styled container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorInversion;

impl Decorator for ColorInversion {
    fn owns_token(&self, token: &str) -> bool {
        token == INVERT_COLORS_FLAG
    }

    fn apply(&self, html: &str) -> String {
        format!(r#"<div class="{INVERSE_CLASS}">{html}</div>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_wraps() {
        assert_eq!(
            ColorInversion.apply("<pre>x</pre>"),
            r#"<div class="inverse"><pre>x</pre></div>"#
        );
    }

    #[test]
    fn test_apply_wraps_empty() {
        assert_eq!(ColorInversion.apply(""), r#"<div class="inverse"></div>"#);
    }

    #[test]
    fn test_owns_token() {
        assert!(ColorInversion.owns_token("invert_colors"));
        assert!(!ColorInversion.owns_token("invert"));
    }
}
