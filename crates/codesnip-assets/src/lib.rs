//! Client-side assets for codesnip blocks.
//!
//! - `expandolink.js`: expand toggle behaviour for overflowing blocks
//! - `codesnip.css`: inverse colors, attribution and toggle placement
//!
//! Assets are compiled into the binary via `rust-embed`.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Embedded assets.
#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Get an asset by path (relative to the asset root).
///
/// Returns the file contents if the asset exists, `None` otherwise.
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Iterate all asset paths.
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

/// Write every asset into `dir`, creating it if needed.
///
/// Returns the written paths in asset iteration order.
pub fn write_all(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for name in iter() {
        let Some(data) = get(&name) else {
            continue;
        };
        let target = dir.join(&*name);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, data)?;
        written.push(target);
    }
    Ok(written)
}
