//! In-memory cache of the web shell.
//!
//! The pinned assets are read once at startup; requests for them never touch
//! the disk again. Anything else is read from the web directory on demand, and
//! unknown page routes fall back to `index.html` so client-side routing works.

use bytes::Bytes;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

const INDEX_FILE: &str = "index.html";

/// A static asset ready to be served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedAsset {
    pub body: Bytes,
    pub content_type: String,
}

/// Pinned shell assets plus disk fallback
#[derive(Debug)]
pub struct ShellCache {
    web_dir: PathBuf,
    assets: HashMap<String, CachedAsset>,
}

impl ShellCache {
    /// Read the pinned asset list from `web_dir` into memory
    ///
    /// `/` maps to `index.html`. Missing or unreadable assets are logged and
    /// skipped so a partial web directory still starts.
    pub async fn install(web_dir: impl Into<PathBuf>, pinned: &[String]) -> Self {
        let web_dir = web_dir.into();
        let mut assets = HashMap::with_capacity(pinned.len());

        for request_path in pinned {
            let Some(file) = resolve(&web_dir, request_path) else {
                warn!(asset = %request_path, "Skipping shell asset outside the web directory");
                continue;
            };

            match read_asset(&file).await {
                Ok(asset) => {
                    assets.insert(request_path.clone(), asset);
                }
                Err(e) => {
                    warn!(asset = %request_path, file = %file.display(), "Shell asset not cached: {}", e);
                }
            }
        }

        info!(
            web_dir = %web_dir.display(),
            cached = assets.len(),
            pinned = pinned.len(),
            "Shell cache installed"
        );

        Self { web_dir, assets }
    }

    /// Cached copy of `path`, if it was pinned
    pub fn get(&self, path: &str) -> Option<&CachedAsset> {
        self.assets.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.assets.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Serve `path` cache-first
    ///
    /// Order: pinned copy, file in the web directory, then `index.html` for
    /// extensionless paths outside `/api`. `None` means nothing matched.
    pub async fn fetch(&self, path: &str) -> Option<CachedAsset> {
        if let Some(asset) = self.assets.get(path) {
            debug!(path, "Shell cache hit");
            return Some(asset.clone());
        }

        if let Some(file) = resolve(&self.web_dir, path) {
            if let Ok(asset) = read_asset(&file).await {
                debug!(path, "Served from web directory");
                return Some(asset);
            }
        }

        if !is_page_route(path) {
            return None;
        }

        if let Some(index) = self.assets.get("/") {
            return Some(index.clone());
        }
        read_asset(&self.web_dir.join(INDEX_FILE)).await.ok()
    }
}

/// Map a request path onto a file below `web_dir`
///
/// Rejects anything that could climb out of the directory.
fn resolve(web_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    if relative.is_empty() {
        return Some(web_dir.join(INDEX_FILE));
    }

    let relative = Path::new(relative);
    if !relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        return None;
    }

    Some(web_dir.join(relative))
}

fn is_page_route(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") {
        return false;
    }
    Path::new(path).extension().is_none()
}

async fn read_asset(file: &Path) -> std::io::Result<CachedAsset> {
    let body = tokio::fs::read(file).await?;
    let content_type = mime_guess::from_path(file)
        .first_or_octet_stream()
        .to_string();

    Ok(CachedAsset {
        body: Bytes::from(body),
        content_type,
    })
}
