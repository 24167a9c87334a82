use std::{
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use mediabutton_core::{
    LibraryItem, LibraryItemWithEpisode, MediaResolver, PlayCallback, PlayItemRequestPayload,
    PlayableItem, PlaybackService, PodcastEpisode,
};

/// Stand-in player that logs every transport request
#[derive(Debug)]
pub struct LoggingPlayer {
    playing: AtomicBool,
    saved_rate: Mutex<f32>,
}

impl LoggingPlayer {
    pub fn new() -> Self {
        Self {
            playing: AtomicBool::new(false),
            saved_rate: Mutex::new(1.0),
        }
    }
}

impl PlaybackService for LoggingPlayer {
    fn play(&self) {
        self.playing.store(true, Ordering::Relaxed);
        log::info!("player: play");
    }

    fn pause(&self) {
        self.playing.store(false, Ordering::Relaxed);
        log::info!("player: pause");
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    fn skip_to_next(&self) {
        log::info!("player: skip to next");
    }

    fn skip_to_previous(&self) {
        log::info!("player: skip to previous");
    }

    fn jump_forward(&self) {
        log::info!("player: jump forward");
    }

    fn jump_backward(&self) {
        log::info!("player: jump backward");
    }

    fn seek_to(&self, position_ms: u64) {
        log::info!("player: seek to {} ms", position_ms);
    }

    fn close_playback(&self) {
        self.playing.store(false, Ordering::Relaxed);
        log::info!("player: close playback");
    }

    fn set_playback_speed(&self, rate: f32) {
        log::info!("player: speed {}x", rate);
    }

    fn saved_playback_rate(&self) -> f32 {
        self.saved_rate.lock().map(|rate| *rate).unwrap_or(1.0)
    }

    fn set_saved_playback_rate(&self, rate: f32) {
        if let Ok(mut saved) = self.saved_rate.lock() {
            *saved = rate;
        }
    }

    fn prepare_player(&self, item: PlayableItem, play_when_ready: bool, playback_rate: f32) {
        log::info!(
            "player: prepare {:?} (item {}, episode {:?}) at {}x, play when ready: {}",
            item.title,
            item.item_id,
            item.episode_id,
            playback_rate,
            play_when_ready
        );
        if play_when_ready {
            self.playing.store(true, Ordering::Relaxed);
        }
    }
}

/// Small in-memory library; play requests complete on a background thread
#[derive(Debug)]
pub struct DemoLibrary {
    items: Vec<LibraryItem>,
    episodes: Vec<LibraryItemWithEpisode>,
}

impl DemoLibrary {
    pub fn new() -> Self {
        let item = |id: &str, title: &str| LibraryItem {
            id: id.to_string(),
            title: title.to_string(),
        };
        let podcast = item("li_podcast", "Night Sky Weekly");
        Self {
            items: vec![
                item("li_hobbit", "The Hobbit"),
                item("li_dune", "Dune"),
                podcast.clone(),
            ],
            episodes: vec![
                LibraryItemWithEpisode {
                    item: podcast.clone(),
                    episode: PodcastEpisode {
                        id: "ep_42".to_string(),
                        title: "Jupiter at opposition".to_string(),
                    },
                },
                LibraryItemWithEpisode {
                    item: podcast,
                    episode: PodcastEpisode {
                        id: "local_ep_7".to_string(),
                        title: "Meteor showers".to_string(),
                    },
                },
            ],
        }
    }
}

impl MediaResolver for DemoLibrary {
    fn first_item(&self) -> Option<LibraryItem> {
        self.items.first().cloned()
    }

    fn by_id(&self, id: &str) -> Option<LibraryItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn from_search(&self, query: Option<&str>) -> Option<LibraryItem> {
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
        log::debug!("library: start play session for {} ({:?})", item.id, payload);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            let title = match &episode {
                Some(episode) => format!("{}: {}", item.title, episode.title),
                None => item.title.clone(),
            };
            on_complete(Some(PlayableItem {
                session_id: format!("play_{}", item.id),
                item_id: item.id,
                episode_id: episode.map(|episode| episode.id),
                title,
            }));
        });
    }
}
