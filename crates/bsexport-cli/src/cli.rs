//! Command-line arguments

use std::path::PathBuf;
use std::time::Duration;

use bsexport::{DEFAULT_CATALOG_URL, ExportConfig, ExportMode};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bsexport")]
#[command(version, about = "Export Beat Saber votes and favorites to a playlist")]
pub struct Args {
    /// Maps to export: f(avorites), u(pvotes) or d(ownvotes). Asked for when omitted
    #[arg(short, long)]
    pub mode: Option<ExportMode>,

    /// Beat Saber installation directory (contains 'Beat Saber.exe')
    #[arg(short, long, env = "BSEXPORT_GAME_DIR")]
    pub game_dir: Option<PathBuf>,

    /// PlayerData.dat location, overriding the platform default
    #[arg(long, env = "BSEXPORT_PLAYER_DATA")]
    pub player_data: Option<PathBuf>,

    /// Directory to write the playlist to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// BeatSaver API base URL
    #[arg(long, env = "BSEXPORT_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: String,

    /// Timeout for each catalog request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Exit without waiting for a keypress
    #[arg(long)]
    pub no_pause: bool,
}

impl Args {
    pub fn to_config(&self) -> ExportConfig {
        let mut builder = ExportConfig::builder()
            .output_dir(&self.output_dir)
            .catalog_url(&self.catalog_url)
            .request_timeout(Duration::from_secs(self.timeout));

        if let Some(dir) = &self.game_dir {
            builder = builder.game_dir(dir);
        }
        if let Some(path) = &self.player_data {
            builder = builder.player_data_path(path);
        }

        builder.build()
    }
}
