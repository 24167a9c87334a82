//! Capabilities the session layer depends on.
//!
//! The playback service and the media-item resolver are provided by the host
//! application. Every call is a fire-and-forget request; the session never
//! waits on them.

/// A library item (audiobook or podcast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryItem {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodcastEpisode {
    pub id: String,
    pub title: String,
}

/// A podcast together with one of its episodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryItemWithEpisode {
    pub item: LibraryItem,
    pub episode: PodcastEpisode,
}

/// Result of a successful play request, ready to hand to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayableItem {
    pub session_id: String,
    pub item_id: String,
    pub episode_id: Option<String>,
    pub title: String,
}

/// Options attached to a play request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayItemRequestPayload {
    pub force_transcode: bool,
}

/// Completion of [`MediaResolver::play`]; `None` means the request failed
pub type PlayCallback = Box<dyn FnOnce(Option<PlayableItem>) + Send + 'static>;

/// The audio-playback service the transport commands are forwarded to
pub trait PlaybackService: Send + Sync {
    fn play(&self);
    fn pause(&self);
    fn is_playing(&self) -> bool;
    fn skip_to_next(&self);
    fn skip_to_previous(&self);
    fn jump_forward(&self);
    fn jump_backward(&self);
    /// Position in milliseconds
    fn seek_to(&self, position_ms: u64);
    fn close_playback(&self);
    fn set_playback_speed(&self, rate: f32);

    fn saved_playback_rate(&self) -> f32;
    fn set_saved_playback_rate(&self, rate: f32);

    /// Load a resolved item into the player
    fn prepare_player(&self, item: PlayableItem, play_when_ready: bool, playback_rate: f32);

    fn play_item_request_payload(&self, force_transcode: bool) -> PlayItemRequestPayload {
        PlayItemRequestPayload { force_transcode }
    }
}

/// Looks up library items and starts play sessions for them
pub trait MediaResolver: Send + Sync {
    fn first_item(&self) -> Option<LibraryItem>;
    fn by_id(&self, id: &str) -> Option<LibraryItem>;
    fn from_search(&self, query: Option<&str>) -> Option<LibraryItem>;
    fn podcast_with_episode_by_episode_id(&self, episode_id: &str)
    -> Option<LibraryItemWithEpisode>;

    /// Start a play session. `on_complete` may run on any thread.
    fn play(
        &self,
        item: LibraryItem,
        episode: Option<PodcastEpisode>,
        payload: PlayItemRequestPayload,
        on_complete: PlayCallback,
    );
}
