//! `codesnip link` command implementation.

use std::path::PathBuf;

use clap::Args;
use codesnip_config::{CliSettings, Config};
use codesnip_link::LineRange;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the link command.
#[derive(Args)]
pub(crate) struct LinkArgs {
    /// Link suffix after the base URL, e.g. "octo/repo/blob/main/lib.rs#L10-L20".
    suffix: String,

    /// Print the parsed range as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Hosting service base URL (overrides config).
    #[arg(long, env = "CODESNIP_BASE_URL")]
    base_url: Option<String>,

    /// Path to configuration file (default: auto-discover codesnip.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl LinkArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let range = LineRange::parse_with_base(self.suffix.trim(), &config.hosting.base_url)?;

        if self.json {
            output.result(&serde_json::to_string_pretty(&range)?)?;
            return Ok(());
        }

        output.highlight(range.url());
        output.info(&format!("Start:   {}", range.start()));
        output.info(&format!("End:     {}", range.end().unwrap_or("-")));
        output.info(&format!("Project: {}", range.project().unwrap_or("-")));
        Ok(())
    }
}
