//! Optional decorations for rendered code snippets.
//!
//! A snippet tag's markup carries the highlighter's own arguments mixed with
//! feature tokens. This crate recognizes the feature tokens, removes them
//! before the markup reaches the highlighter, and applies the matching
//! transforms to the rendered HTML afterwards.
//!
//! # Architecture
//!
//! - [`FeatureSpec`]: the fixed, ordered registry of known features
//! - [`activate`]: builds one [`Feature`] per spec whose token is present
//! - [`strip`]: removes every token owned by an active feature
//! - [`decorate`]: folds the active features over the rendered HTML
//!
//! # Example
//!
//! ```
//! use codesnip_features::{FeatureOptions, FeatureSpec, TagArguments, activate, decorate, strip};
//!
//! let args = TagArguments::parse("go githublink=octo/hello-world/blob/v1/main.go invert_colors");
//! let features = activate(&args, &FeatureSpec::ALL, &FeatureOptions::default());
//! assert_eq!(strip(&args, &features).to_markup(), "go");
//!
//! let html = decorate("<div class=\"highlight\"><pre>code</pre>\n</div>", &features);
//! assert!(html.starts_with(r#"<div class="inverse">"#));
//! assert!(html.contains("main.go (hello-world v1)"));
//! ```

mod activation;
mod args;
mod attribution;
mod feature;
mod filter;
mod inversion;
mod pipeline;
mod spec;

pub use activation::activate;
pub use args::TagArguments;
pub use attribution::{ATTRIBUTION_CLASS, AttributionLink};
pub use feature::{DEFAULT_LINK_BASE_URL, Decorator, Feature, FeatureOptions};
pub use filter::strip;
pub use inversion::{ColorInversion, INVERSE_CLASS};
pub use pipeline::decorate;
pub use spec::{FeatureSpec, GITHUB_LINK_PREFIX, INVERT_COLORS_FLAG};
