//! `codesnip render` command implementation.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use codesnip_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// File with the snippet body (default: read stdin).
    file: Option<PathBuf>,

    /// Tag markup, e.g. "go githublink=octo/repo/blob/main/main.go invert_colors".
    #[arg(short, long, default_value = "")]
    markup: String,

    /// Tag name (default: the configured snippet tag).
    #[arg(short, long)]
    tag: Option<String>,

    /// Hosting service base URL (overrides config).
    #[arg(long, env = "CODESNIP_BASE_URL")]
    base_url: Option<String>,

    /// Number lines in the rendered block.
    #[arg(long)]
    line_numbers: bool,

    /// Omit the expand toggle.
    #[arg(long)]
    no_toggle: bool,

    /// Path to configuration file (default: auto-discover codesnip.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            expand_toggle: self.no_toggle.then_some(false),
            line_numbers: self.line_numbers.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let registry = super::build_registry(&config);

        let body = read_body(self.file.as_deref())?;
        let tag = self.tag.unwrap_or_else(|| config.tags.snippet.clone());
        tracing::info!(tag = %tag, markup = %self.markup, bytes = body.len(), "Rendering snippet");

        let html = registry.render(&tag, &self.markup, &body)?;
        output.result(&html)?;
        Ok(())
    }
}

/// Read the snippet body from `file`, or stdin when absent.
fn read_body(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}
