//! Batched hash resolution

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::ResolvedMap;
use super::transport::{CatalogResponse, CatalogTransport};
use crate::error::{Error, Result};

/// Maximum number of hashes the catalog accepts per request
pub const MAX_BATCH_SIZE: usize = 50;

const HTTP_NOT_FOUND: u16 = 404;

/// Fields read from a catalog map detail; everything else is ignored
#[derive(Debug, Default, Deserialize)]
struct MapDetail {
    id: Option<String>,
    name: Option<String>,
    error: Option<String>,
}

impl MapDetail {
    /// Non-blank `error` message, if the catalog reported one
    fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }

    fn into_resolved(self, hash: String) -> Result<ResolvedMap> {
        let beat_saver_id = self.id.ok_or_else(|| Error::ResponseParse {
            hash: hash.clone(),
            field: "id",
        })?;
        let name = self.name.ok_or_else(|| Error::ResponseParse {
            hash: hash.clone(),
            field: "name",
        })?;

        Ok(ResolvedMap {
            beat_saver_id,
            hash,
            name,
        })
    }
}

/// Outcome of resolving a hash list
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Maps found in the catalog, in response order
    pub maps: Vec<ResolvedMap>,
    /// Hashes the catalog could not resolve
    pub skipped: Vec<String>,
}

/// Resolves map hashes through the catalog, one request per batch
pub struct CatalogResolver<T: CatalogTransport> {
    transport: T,
    base_url: String,
}

impl<T: CatalogTransport> CatalogResolver<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Lookup URL for one batch of hashes
    pub fn batch_url(&self, batch: &[String]) -> String {
        format!("{}/maps/hash/{}", self.base_url, batch.join(","))
    }

    /// Resolve `hashes` in contiguous batches of at most `MAX_BATCH_SIZE`.
    ///
    /// Any failed request aborts the whole resolution; unknown maps are
    /// only skipped.
    pub fn resolve(&self, hashes: &[String]) -> Result<Resolution> {
        let total_batches = hashes.len().div_ceil(MAX_BATCH_SIZE);
        let mut resolution = Resolution::default();

        for (index, batch) in hashes.chunks(MAX_BATCH_SIZE).enumerate() {
            info!(
                "Resolving batch {}/{} ({} maps)",
                index + 1,
                total_batches,
                batch.len()
            );
            self.resolve_batch(batch, &mut resolution)?;
        }

        info!(
            "Resolved {} maps, skipped {}",
            resolution.maps.len(),
            resolution.skipped.len()
        );
        Ok(resolution)
    }

    fn resolve_batch(&self, batch: &[String], resolution: &mut Resolution) -> Result<()> {
        let url = self.batch_url(batch);
        let response = self.transport.get(&url)?;

        match batch {
            [hash] => resolve_single(hash, &url, response, resolution),
            _ => resolve_multiple(batch, &url, response, resolution),
        }
    }
}

/// A single-hash lookup answers with one map detail object
fn resolve_single(
    hash: &str,
    url: &str,
    response: CatalogResponse,
    resolution: &mut Resolution,
) -> Result<()> {
    if !response.is_success() {
        // The catalog answers an unknown single hash with 404 + error body
        if response.status == HTTP_NOT_FOUND
            && let Ok(detail) = serde_json::from_str::<MapDetail>(&response.body)
            && let Some(message) = detail.error_message()
        {
            warn!("Skipping map {}: {}", hash, message);
            resolution.skipped.push(hash.to_string());
            return Ok(());
        }
        return Err(status_error(url, &response));
    }

    let detail: MapDetail = serde_json::from_str(&response.body)?;
    if let Some(message) = detail.error_message() {
        warn!("Skipping map {}: {}", hash, message);
        resolution.skipped.push(hash.to_string());
        return Ok(());
    }

    let map = detail.into_resolved(hash.to_string())?;
    debug!("Resolved {} -> {} ({})", map.hash, map.beat_saver_id, map.name);
    resolution.maps.push(map);
    Ok(())
}

/// A multi-hash lookup answers with an object keyed by hash; unknown
/// hashes map to `null`, an empty object, or are left out entirely
fn resolve_multiple(
    batch: &[String],
    url: &str,
    response: CatalogResponse,
    resolution: &mut Resolution,
) -> Result<()> {
    if !response.is_success() {
        return Err(status_error(url, &response));
    }

    let entries: serde_json::Map<String, Value> = serde_json::from_str(&response.body)?;
    // Keys come back lowercase whatever case was requested
    let returned: HashSet<String> = entries.keys().map(|key| key.to_ascii_lowercase()).collect();

    for (hash, value) in entries {
        let is_missing = match &value {
            Value::Null => true,
            Value::Object(fields) => fields.is_empty(),
            _ => false,
        };
        if is_missing {
            warn!("Skipping map {}: not found", hash);
            resolution.skipped.push(hash);
            continue;
        }

        let detail = MapDetail::deserialize(value)?;
        if let Some(message) = detail.error_message() {
            warn!("Skipping map {}: {}", hash, message);
            resolution.skipped.push(hash);
            continue;
        }

        let map = detail.into_resolved(hash)?;
        debug!("Resolved {} -> {} ({})", map.hash, map.beat_saver_id, map.name);
        resolution.maps.push(map);
    }

    for hash in batch {
        if !returned.contains(&hash.to_ascii_lowercase()) {
            warn!("Skipping map {}: missing from catalog response", hash);
            resolution.skipped.push(hash.clone());
        }
    }

    Ok(())
}

fn status_error(url: &str, response: &CatalogResponse) -> Error {
    Error::CatalogRequest {
        url: url.to_string(),
        status: Some(response.status),
        message: format!("HTTP status {}", response.status),
    }
}
