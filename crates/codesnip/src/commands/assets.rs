//! `codesnip assets` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the assets command.
#[derive(Args)]
pub(crate) struct AssetsArgs {
    /// Directory to write `expandolink.js` and `codesnip.css` into.
    #[arg(short, long, default_value = "assets")]
    output_dir: PathBuf,
}

impl AssetsArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let written = codesnip_assets::write_all(&self.output_dir)?;
        for path in &written {
            output.info(&describe(path));
        }
        output.success(&format!(
            "{} assets written to {}",
            written.len(),
            self.output_dir.display()
        ));
        Ok(())
    }
}

/// Describe a written asset with its content type.
fn describe(path: &Path) -> String {
    let mime = codesnip_assets::mime_for(&path.to_string_lossy());
    format!("Wrote {} ({mime})", path.display())
}
