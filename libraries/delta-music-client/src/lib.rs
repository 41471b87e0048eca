//! Delta Music Catalogue Client
//!
//! HTTP client for the remote music microservice that supplies search
//! results, recommendation lists and playable audio.
//!
//! # Features
//!
//! - **Search**: `GET /search?query=&lim=`
//! - **Recommendations**: `GET /recommendations?video_id=`
//! - **Download**: `GET /download?video_id=`, either audio bytes or a
//!   streaming URL
//! - **Search panel**: debounced query input publishing its state on a
//!   `watch` channel
//!
//! The client implements [`delta_core::MusicService`], so the player session
//! and the server can use it behind the trait.
//!
//! # Example
//!
//! ```ignore
//! use delta_music_client::{MusicServiceClient, SearchPanel, ServiceConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(MusicServiceClient::new(ServiceConfig::new(
//!         "https://music-api.example.com",
//!     ))?);
//!
//!     let mut panel = SearchPanel::new(client);
//!     let mut updates = panel.subscribe();
//!     panel.expand();
//!     panel.set_query("never gonna");
//!
//!     updates.wait_for(|state| !state.loading && !state.results.is_empty()).await?;
//!     let id = panel.select(0);
//!     println!("Open player for {:?}", id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod search;
mod types;

// Re-export main types
pub use client::MusicServiceClient;
pub use error::{MusicClientError, Result};
pub use search::{SearchPanel, SearchState, DEFAULT_DEBOUNCE};
pub use types::{ServiceConfig, DEFAULT_SEARCH_LIMIT};
