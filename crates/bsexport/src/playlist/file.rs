use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use super::Playlist;
use crate::error::Result;
use crate::mode::ExportMode;

pub const PLAYLIST_EXTENSION: &str = "bplist";

/// `{Mode}_{timestamp}.bplist`, with a timestamp safe on every filesystem
pub fn playlist_file_name(mode: ExportMode, exported_at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        mode,
        exported_at.format("%Y-%m-%dT%H-%M-%SZ"),
        PLAYLIST_EXTENSION
    )
}

/// Write the playlist into `output_dir`, replacing any file of the same name
pub fn write_playlist(
    playlist: &Playlist,
    output_dir: &Path,
    mode: ExportMode,
    exported_at: DateTime<Utc>,
) -> Result<PathBuf> {
    let content = playlist.to_json()?;

    if !output_dir.as_os_str().is_empty() {
        fs::create_dir_all(output_dir)?;
    }
    let path = output_dir.join(playlist_file_name(mode, exported_at));
    fs::write(&path, content)?;

    info!("Wrote {} songs to {}", playlist.len(), path.display());
    Ok(path)
}
