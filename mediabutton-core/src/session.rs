//! The media-session callback layer.
//!
//! [`SessionCore`] handles every transport event synchronously against an
//! injected clock, which keeps the gesture timing testable. [`MediaSession`]
//! owns a core on a dedicated worker thread: platform events, play-request
//! completions and the single gesture deadline are all serialized through one
//! `select!` loop, so the click counter is never touched concurrently.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
    time::Instant,
};

use crossbeam_channel::{Receiver, Sender, select, unbounded};

use crate::{
    commands::{CustomAction, PlayerCommand, SessionEvent},
    config::SessionConfig,
    dispatcher::{CommandDispatcher, KeyBinding, key_binding},
    error::SessionError,
    gesture::{ClickClassifier, PressOutcome},
    keys::{KeyAction, KeyEvent, KeyEventKind, is_consumed},
    media_id::MediaId,
    service::{LibraryItem, MediaResolver, PlayableItem, PlaybackService, PodcastEpisode},
};

/// Messages processed by the session worker
#[derive(Debug)]
pub enum SessionMessage {
    /// An event from the transport-control layer
    Event(SessionEvent),
    /// A play request finished; hops the result back onto the worker
    PlayCompleted(Option<PlayableItem>),
    /// Stop the worker, dropping any open gesture window
    Shutdown,
}

pub struct SessionCore {
    dispatcher: CommandDispatcher,
    service: Arc<dyn PlaybackService>,
    resolver: Arc<dyn MediaResolver>,
    classifier: ClickClassifier,
    episode_prefixes: Vec<String>,
    completion_tx: Sender<SessionMessage>,
}

impl SessionCore {
    /// `completion_tx` must feed the queue that drives this core
    pub fn new(
        config: &SessionConfig,
        service: Arc<dyn PlaybackService>,
        resolver: Arc<dyn MediaResolver>,
        completion_tx: Sender<SessionMessage>,
    ) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(Arc::clone(&service)),
            service,
            resolver,
            classifier: ClickClassifier::new(config.click_timeout()),
            episode_prefixes: config.episode_prefixes.clone(),
            completion_tx,
        }
    }

    /// Handle one transport event received at `now`.
    ///
    /// Returns false only for a media-button event the platform should route
    /// elsewhere.
    pub fn handle_event(&mut self, event: SessionEvent, now: Instant) -> bool {
        match event {
            SessionEvent::Prepare => self.on_prepare(),
            SessionEvent::PrepareFromSearch(query) => {
                log::debug!("Prepare from search {:?}", query);
            }
            SessionEvent::Play => self.dispatcher.dispatch(PlayerCommand::Play),
            SessionEvent::PlayFromSearch(query) => self.on_play_from_search(query.as_deref()),
            SessionEvent::PlayFromMediaId(media_id) => {
                self.on_play_from_media_id(media_id.as_deref())
            }
            SessionEvent::Pause | SessionEvent::Stop => {
                self.dispatcher.dispatch(PlayerCommand::Pause)
            }
            SessionEvent::SkipToNext => self.dispatcher.dispatch(PlayerCommand::SkipToNext),
            SessionEvent::SkipToPrevious => {
                self.dispatcher.dispatch(PlayerCommand::SkipToPrevious)
            }
            SessionEvent::FastForward => self.dispatcher.dispatch(PlayerCommand::JumpForward),
            SessionEvent::Rewind => self.dispatcher.dispatch(PlayerCommand::JumpBackward),
            SessionEvent::SeekTo(position_ms) => {
                self.dispatcher.dispatch(PlayerCommand::SeekTo(position_ms))
            }
            SessionEvent::MediaButton(event) => return self.on_media_button_event(event, now),
            SessionEvent::CustomAction(action) => self.on_custom_action(&action),
        }
        true
    }

    pub fn on_media_button_event(&mut self, event: Option<KeyEvent>, now: Instant) -> bool {
        log::debug!("Media button event {:?}", event);
        let consumed = is_consumed(event.as_ref());

        let Some(event) = event else {
            return consumed;
        };
        if event.kind == KeyEventKind::Down {
            return consumed;
        }
        let Some(key) = KeyAction::from_key_code(event.key_code) else {
            log::debug!("Unhandled media key code {}", event.key_code);
            return consumed;
        };

        match key_binding(key) {
            KeyBinding::Direct(command) => self.dispatcher.dispatch(command),
            KeyBinding::Gesture(command) => self.on_ambiguous_key_up(key, command, now),
        }
        consumed
    }

    fn on_ambiguous_key_up(&mut self, key: KeyAction, first_press: PlayerCommand, now: Instant) {
        match self.classifier.press(now) {
            PressOutcome::Opened { deadline, expired } => {
                if let Some(gesture) = expired {
                    log::info!("Media button gesture resolved late: {:?}", gesture);
                    self.dispatcher.dispatch_all(gesture.follow_up());
                }
                log::debug!(
                    "{} opened gesture window for {:?}",
                    key,
                    deadline.saturating_duration_since(now)
                );
                self.dispatcher.dispatch(first_press);
            }
            PressOutcome::Counted { clicks } => {
                log::debug!("{} click {} in open gesture window", key, clicks);
            }
        }
    }

    /// Deadline of the open gesture window, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.classifier.deadline()
    }

    /// Resolve the gesture window once its deadline has passed
    pub fn on_deadline(&mut self, now: Instant) {
        if let Some(gesture) = self.classifier.poll(now) {
            log::info!("Media button gesture resolved: {:?}", gesture);
            self.dispatcher.dispatch_all(gesture.follow_up());
        }
    }

    pub fn click_count(&self) -> u32 {
        self.classifier.clicks()
    }

    fn on_custom_action(&self, action: &str) {
        match action.parse::<CustomAction>() {
            Ok(action) => self.dispatcher.dispatch(action.into()),
            Err(_) => log::warn!("Unknown custom action {:?}", action),
        }
    }

    fn on_prepare(&self) {
        log::debug!("Prepare media session");
        match self.resolver.first_item() {
            Some(item) => self.request_playback(item, None),
            None => log::warn!("Prepare: no library items available"),
        }
    }

    fn on_play_from_search(&self, query: Option<&str>) {
        log::debug!("Play from search {:?}", query);
        match self.resolver.from_search(query) {
            Some(item) => self.request_playback(item, None),
            None => log::error!("Play from search: nothing found for {:?}", query),
        }
    }

    fn on_play_from_media_id(&self, media_id: Option<&str>) {
        log::debug!("Play from media id {:?}", media_id);
        match MediaId::classify(media_id, &self.episode_prefixes) {
            MediaId::First => match self.resolver.first_item() {
                Some(item) => self.request_playback(item, None),
                None => log::error!("Play from media id: no library items available"),
            },
            MediaId::Episode(episode_id) => {
                match self.resolver.podcast_with_episode_by_episode_id(episode_id) {
                    Some(found) => self.request_playback(found.item, Some(found.episode)),
                    None => log::error!("Play from media id: episode not found {}", episode_id),
                }
            }
            MediaId::Item(item_id) => match self.resolver.by_id(item_id) {
                Some(item) => self.request_playback(item, None),
                None => log::error!("Play from media id: media item not found {}", item_id),
            },
        }
    }

    fn request_playback(&self, item: LibraryItem, episode: Option<PodcastEpisode>) {
        log::info!("Requesting playback of {} ({})", item.title, item.id);
        let payload = self.service.play_item_request_payload(false);
        let completion_tx = self.completion_tx.clone();
        self.resolver.play(
            item,
            episode,
            payload,
            Box::new(move |played| {
                if completion_tx.send(SessionMessage::PlayCompleted(played)).is_err() {
                    log::warn!("Media session closed before play request completed");
                }
            }),
        );
    }

    /// Load a finished play request into the player at the saved speed
    pub fn on_play_completed(&self, played: Option<PlayableItem>) {
        match played {
            Some(item) => {
                let playback_rate = self.service.saved_playback_rate();
                self.service.prepare_player(item, true, playback_rate);
            }
            None => log::error!("Failed to play library item"),
        }
    }
}

/// The session worker. Create with [`MediaSession::new`], then [`MediaSession::spawn`].
pub struct MediaSession {
    core: SessionCore,
    msg_rx: Receiver<SessionMessage>,
}

/// Sending side of a running [`MediaSession`]
#[derive(Debug, Clone)]
pub struct MediaSessionHandle {
    msg_tx: Sender<SessionMessage>,
}

impl MediaSession {
    pub fn new(
        config: SessionConfig,
        service: Arc<dyn PlaybackService>,
        resolver: Arc<dyn MediaResolver>,
    ) -> Result<(Self, MediaSessionHandle), SessionError> {
        config.validate()?;
        let (msg_tx, msg_rx) = unbounded();
        let core = SessionCore::new(&config, service, resolver, msg_tx.clone());
        Ok((MediaSession { core, msg_rx }, MediaSessionHandle { msg_tx }))
    }

    pub fn spawn(self) -> Result<JoinHandle<()>, SessionError> {
        let handle = thread::Builder::new()
            .name("media-session".to_string())
            .spawn(move || self.run())?;
        Ok(handle)
    }

    /// Run the event loop on the current thread until shut down
    pub fn run(mut self) {
        log::info!("Media session started");
        loop {
            let window = match self.core.next_deadline() {
                Some(deadline) => crossbeam_channel::at(deadline),
                None => crossbeam_channel::never(),
            };

            select! {
                recv(self.msg_rx) -> msg => match msg {
                    Ok(SessionMessage::Event(event)) => {
                        self.core.handle_event(event, Instant::now());
                    }
                    Ok(SessionMessage::PlayCompleted(played)) => self.core.on_play_completed(played),
                    Ok(SessionMessage::Shutdown) | Err(_) => break,
                },
                recv(window) -> fired => {
                    self.core.on_deadline(fired.unwrap_or_else(|_| Instant::now()));
                }
            }
        }
        if self.core.click_count() > 0 {
            log::debug!("Dropping open gesture window on shutdown");
        }
        log::info!("Media session stopped");
    }
}

impl MediaSessionHandle {
    pub fn send(&self, event: SessionEvent) -> Result<(), SessionError> {
        self.msg_tx
            .send(SessionMessage::Event(event))
            .map_err(|_| SessionError::Disconnected)
    }

    pub fn prepare(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::Prepare)
    }

    pub fn prepare_from_search(&self, query: Option<String>) -> Result<(), SessionError> {
        self.send(SessionEvent::PrepareFromSearch(query))
    }

    pub fn play(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::Play)
    }

    pub fn play_from_search(&self, query: Option<String>) -> Result<(), SessionError> {
        self.send(SessionEvent::PlayFromSearch(query))
    }

    pub fn play_from_media_id(&self, media_id: Option<String>) -> Result<(), SessionError> {
        self.send(SessionEvent::PlayFromMediaId(media_id))
    }

    pub fn pause(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::Pause)
    }

    pub fn stop(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::Stop)
    }

    pub fn skip_to_next(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::SkipToNext)
    }

    pub fn skip_to_previous(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::SkipToPrevious)
    }

    pub fn fast_forward(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::FastForward)
    }

    pub fn rewind(&self) -> Result<(), SessionError> {
        self.send(SessionEvent::Rewind)
    }

    pub fn seek_to(&self, position_ms: u64) -> Result<(), SessionError> {
        self.send(SessionEvent::SeekTo(position_ms))
    }

    /// Queue a media-button event; returns whether it is consumed
    pub fn media_button_event(&self, event: Option<KeyEvent>) -> Result<bool, SessionError> {
        let consumed = is_consumed(event.as_ref());
        self.send(SessionEvent::MediaButton(event))?;
        Ok(consumed)
    }

    pub fn custom_action(&self, action: &str) -> Result<(), SessionError> {
        self.send(SessionEvent::CustomAction(action.to_string()))
    }

    pub fn shutdown(&self) -> Result<(), SessionError> {
        self.msg_tx
            .send(SessionMessage::Shutdown)
            .map_err(|_| SessionError::Disconnected)
    }
}
