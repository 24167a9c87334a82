//! Media-session callback layer.
//!
//! Receives transport-control events (play, pause, seek, skip, custom actions
//! and raw hardware media-button presses) and forwards them to a
//! [`PlaybackService`]. Repeated presses of the play/pause family of keys are
//! classified into single, double and triple clicks within a short window:
//!
//! - single click: play, pause or toggle, immediately on the first press
//! - double click: jump backward, then play, when the window closes
//! - triple click or more: jump forward, then play, when the window closes
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mediabutton_core::{KeyEvent, MediaSession, SessionConfig, keys::KEYCODE_HEADSETHOOK};
//! # use mediabutton_core::{MediaResolver, PlaybackService};
//! # fn run(player: Arc<dyn PlaybackService>, library: Arc<dyn MediaResolver>) -> Result<(), mediabutton_core::SessionError> {
//! let (session, handle) = MediaSession::new(SessionConfig::default(), player, library)?;
//! let worker = session.spawn()?;
//!
//! let consumed = handle.media_button_event(Some(KeyEvent::up(KEYCODE_HEADSETHOOK)))?;
//! assert!(consumed);
//!
//! handle.shutdown()?;
//! let _ = worker.join();
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod gesture;
pub mod keys;
pub mod media_id;
pub mod service;
pub mod session;
pub mod speed;

#[cfg(test)]
mod test_support;

pub use commands::{CustomAction, PlayerCommand, SessionEvent};
pub use config::SessionConfig;
pub use dispatcher::CommandDispatcher;
pub use error::SessionError;
pub use gesture::{ClickClassifier, Gesture};
pub use keys::{KeyAction, KeyEvent, KeyEventKind};
pub use service::{
    LibraryItem, LibraryItemWithEpisode, MediaResolver, PlayCallback, PlayItemRequestPayload,
    PlayableItem, PlaybackService, PodcastEpisode,
};
pub use session::{MediaSession, MediaSessionHandle, SessionCore, SessionMessage};
