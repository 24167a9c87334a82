#![allow(dead_code)]

use std::{
    sync::Mutex,
    thread,
    time::{Duration, Instant},
};

use mediabutton_core::{
    LibraryItem, LibraryItemWithEpisode, MediaResolver, PlayCallback, PlayItemRequestPayload,
    PlayableItem, PlaybackService, PodcastEpisode,
};

/// Calls the worker tests assert on; anything else is recorded by name
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Play,
    Pause,
    JumpForward,
    JumpBackward,
    SetPlaybackSpeed(f32),
    Prepared { item_id: String, episode_id: Option<String>, rate: f32 },
    Other(&'static str),
}

#[derive(Debug, Default)]
pub struct MockPlayer {
    calls: Mutex<Vec<Call>>,
    playing: Mutex<bool>,
    saved_rate: Mutex<f32>,
}

impl MockPlayer {
    pub fn new(saved_rate: f32) -> Self {
        Self {
            saved_rate: Mutex::new(saved_rate),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PlaybackService for MockPlayer {
    fn play(&self) {
        *self.playing.lock().unwrap() = true;
        self.push(Call::Play);
    }

    fn pause(&self) {
        *self.playing.lock().unwrap() = false;
        self.push(Call::Pause);
    }

    fn is_playing(&self) -> bool {
        *self.playing.lock().unwrap()
    }

    fn skip_to_next(&self) {
        self.push(Call::Other("skip_to_next"));
    }

    fn skip_to_previous(&self) {
        self.push(Call::Other("skip_to_previous"));
    }

    fn jump_forward(&self) {
        self.push(Call::JumpForward);
    }

    fn jump_backward(&self) {
        self.push(Call::JumpBackward);
    }

    fn seek_to(&self, _position_ms: u64) {
        self.push(Call::Other("seek_to"));
    }

    fn close_playback(&self) {
        *self.playing.lock().unwrap() = false;
        self.push(Call::Other("close_playback"));
    }

    fn set_playback_speed(&self, rate: f32) {
        self.push(Call::SetPlaybackSpeed(rate));
    }

    fn saved_playback_rate(&self) -> f32 {
        *self.saved_rate.lock().unwrap()
    }

    fn set_saved_playback_rate(&self, rate: f32) {
        *self.saved_rate.lock().unwrap() = rate;
    }

    fn prepare_player(&self, item: PlayableItem, _play_when_ready: bool, playback_rate: f32) {
        self.push(Call::Prepared {
            item_id: item.item_id,
            episode_id: item.episode_id,
            rate: playback_rate,
        });
    }
}

/// Library whose play requests complete on a separate thread
#[derive(Debug, Default)]
pub struct ThreadedLibrary;

impl MediaResolver for ThreadedLibrary {
    fn first_item(&self) -> Option<LibraryItem> {
        Some(LibraryItem {
            id: "li_first".to_string(),
            title: "First".to_string(),
        })
    }

    fn by_id(&self, _id: &str) -> Option<LibraryItem> {
        None
    }

    fn from_search(&self, _query: Option<&str>) -> Option<LibraryItem> {
        None
    }

    fn podcast_with_episode_by_episode_id(
        &self,
        episode_id: &str,
    ) -> Option<LibraryItemWithEpisode> {
        Some(LibraryItemWithEpisode {
            item: LibraryItem {
                id: "li_podcast".to_string(),
                title: "Podcast".to_string(),
            },
            episode: PodcastEpisode {
                id: episode_id.to_string(),
                title: "Episode".to_string(),
            },
        })
    }

    fn play(
        &self,
        item: LibraryItem,
        episode: Option<PodcastEpisode>,
        _payload: PlayItemRequestPayload,
        on_complete: PlayCallback,
    ) {
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            on_complete(Some(PlayableItem {
                session_id: "play_1".to_string(),
                item_id: item.id,
                episode_id: episode.map(|e| e.id),
                title: item.title,
            }));
        });
    }
}

/// Poll `condition` until it holds or `timeout` elapses
pub fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}
