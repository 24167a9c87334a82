use std::sync::Mutex;

use crate::service::{
    LibraryItem, LibraryItemWithEpisode, MediaResolver, PlayCallback, PlayItemRequestPayload,
    PlayableItem, PlaybackService, PodcastEpisode,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Play,
    Pause,
    SkipToNext,
    SkipToPrevious,
    JumpForward,
    JumpBackward,
    SeekTo(u64),
    ClosePlayback,
    SetPlaybackSpeed(f32),
    SetSavedRate(f32),
    PreparePlayer {
        item_id: String,
        episode_id: Option<String>,
        play_when_ready: bool,
        rate: f32,
    },
}

#[derive(Debug)]
struct PlayerState {
    calls: Vec<Call>,
    playing: bool,
    saved_rate: f32,
}

/// Playback service that records every call
#[derive(Debug)]
pub struct RecordingPlayer {
    state: Mutex<PlayerState>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::with_state(false, 1.0)
    }

    pub fn with_state(playing: bool, saved_rate: f32) -> Self {
        Self {
            state: Mutex::new(PlayerState {
                calls: Vec::new(),
                playing,
                saved_rate,
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) {
        let mut state = self.state.lock().unwrap();
        match call {
            Call::Play => state.playing = true,
            Call::Pause | Call::ClosePlayback => state.playing = false,
            Call::SetSavedRate(rate) => state.saved_rate = rate,
            _ => {}
        }
        state.calls.push(call);
    }
}

impl PlaybackService for RecordingPlayer {
    fn play(&self) {
        self.record(Call::Play);
    }

    fn pause(&self) {
        self.record(Call::Pause);
    }

    fn is_playing(&self) -> bool {
        self.state.lock().unwrap().playing
    }

    fn skip_to_next(&self) {
        self.record(Call::SkipToNext);
    }

    fn skip_to_previous(&self) {
        self.record(Call::SkipToPrevious);
    }

    fn jump_forward(&self) {
        self.record(Call::JumpForward);
    }

    fn jump_backward(&self) {
        self.record(Call::JumpBackward);
    }

    fn seek_to(&self, position_ms: u64) {
        self.record(Call::SeekTo(position_ms));
    }

    fn close_playback(&self) {
        self.record(Call::ClosePlayback);
    }

    fn set_playback_speed(&self, rate: f32) {
        self.record(Call::SetPlaybackSpeed(rate));
    }

    fn saved_playback_rate(&self) -> f32 {
        self.state.lock().unwrap().saved_rate
    }

    fn set_saved_playback_rate(&self, rate: f32) {
        self.record(Call::SetSavedRate(rate));
    }

    fn prepare_player(&self, item: PlayableItem, play_when_ready: bool, playback_rate: f32) {
        self.record(Call::PreparePlayer {
            item_id: item.item_id,
            episode_id: item.episode_id,
            play_when_ready,
            rate: playback_rate,
        });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    First,
    ById(String),
    Search(Option<String>),
    Episode(String),
    Played {
        item_id: String,
        episode_id: Option<String>,
        force_transcode: bool,
    },
}

/// Resolver over a fixed set of items; completes play requests inline
#[derive(Debug)]
pub struct FakeLibrary {
    items: Vec<LibraryItem>,
    episodes: Vec<LibraryItemWithEpisode>,
    fail_play: bool,
    lookups: Mutex<Vec<Lookup>>,
}

impl FakeLibrary {
    pub fn new() -> Self {
        Self {
            items: vec![
                LibraryItem {
                    id: "li_first".to_string(),
                    title: "First Book".to_string(),
                },
                LibraryItem {
                    id: "li_dune".to_string(),
                    title: "Dune".to_string(),
                },
            ],
            episodes: vec![LibraryItemWithEpisode {
                item: LibraryItem {
                    id: "li_podcast".to_string(),
                    title: "A Podcast".to_string(),
                },
                episode: PodcastEpisode {
                    id: "ep_42".to_string(),
                    title: "Episode 42".to_string(),
                },
            }],
            fail_play: false,
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            episodes: Vec::new(),
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_play: true,
            ..Self::new()
        }
    }

    pub fn lookups(&self) -> Vec<Lookup> {
        self.lookups.lock().unwrap().clone()
    }

    fn log(&self, lookup: Lookup) {
        self.lookups.lock().unwrap().push(lookup);
    }
}

impl MediaResolver for FakeLibrary {
    fn first_item(&self) -> Option<LibraryItem> {
        self.log(Lookup::First);
        self.items.first().cloned()
    }

    fn by_id(&self, id: &str) -> Option<LibraryItem> {
        self.log(Lookup::ById(id.to_string()));
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn from_search(&self, query: Option<&str>) -> Option<LibraryItem> {
        self.log(Lookup::Search(query.map(str::to_string)));
        let query = query?.to_lowercase();
        self.items
            .iter()
            .find(|item| item.title.to_lowercase().contains(&query))
            .cloned()
    }

    fn podcast_with_episode_by_episode_id(
        &self,
        episode_id: &str,
    ) -> Option<LibraryItemWithEpisode> {
        self.log(Lookup::Episode(episode_id.to_string()));
        self.episodes
            .iter()
            .find(|entry| entry.episode.id == episode_id)
            .cloned()
    }

    fn play(
        &self,
        item: LibraryItem,
        episode: Option<PodcastEpisode>,
        payload: PlayItemRequestPayload,
        on_complete: PlayCallback,
    ) {
        let episode_id = episode.map(|episode| episode.id);
        self.log(Lookup::Played {
            item_id: item.id.clone(),
            episode_id: episode_id.clone(),
            force_transcode: payload.force_transcode,
        });
        if self.fail_play {
            on_complete(None);
        } else {
            on_complete(Some(PlayableItem {
                session_id: format!("play_{}", item.id),
                item_id: item.id,
                episode_id,
                title: item.title,
            }));
        }
    }
}
