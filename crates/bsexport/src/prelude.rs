//! Prelude module for convenient imports
//!
//! ```ignore
//! use bsexport::prelude::*;
//! ```

// Pipeline
pub use crate::config::ExportConfig;
pub use crate::exporter::{ExportSummary, Exporter};
pub use crate::mode::ExportMode;

// Error handling
pub use crate::error::{Error, Result};

// Seams
pub use crate::catalog::{CatalogResponse, CatalogTransport};
pub use crate::source::Prompter;

// Output
pub use crate::catalog::ResolvedMap;
pub use crate::playlist::Playlist;
