use std::sync::Arc;

use crate::{
    commands::PlayerCommand, keys::KeyAction, service::PlaybackService,
    speed::next_playback_speed,
};

/// How a released media key is handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyBinding {
    /// Dispatch right away, bypassing the gesture window
    Direct(PlayerCommand),
    /// Counted into a click gesture; the command is the first-press action
    Gesture(PlayerCommand),
}

pub fn key_binding(key: KeyAction) -> KeyBinding {
    match key {
        KeyAction::HeadsetHook | KeyAction::PlayPause => {
            KeyBinding::Gesture(PlayerCommand::TogglePlayPause)
        }
        KeyAction::Play => KeyBinding::Gesture(PlayerCommand::Play),
        KeyAction::Pause => KeyBinding::Gesture(PlayerCommand::Pause),
        KeyAction::Next | KeyAction::FastForward => KeyBinding::Direct(PlayerCommand::JumpForward),
        KeyAction::Previous | KeyAction::Rewind => KeyBinding::Direct(PlayerCommand::JumpBackward),
        KeyAction::Stop => KeyBinding::Direct(PlayerCommand::ClosePlayback),
    }
}

/// Forwards resolved commands to the playback service, one call each
#[derive(Clone)]
pub struct CommandDispatcher {
    service: Arc<dyn PlaybackService>,
}

impl CommandDispatcher {
    pub fn new(service: Arc<dyn PlaybackService>) -> Self {
        Self { service }
    }

    pub fn dispatch(&self, command: PlayerCommand) {
        log::debug!("dispatch {:?}", command);
        match command {
            PlayerCommand::Play => self.service.play(),
            PlayerCommand::Pause => self.service.pause(),
            PlayerCommand::TogglePlayPause => {
                if self.service.is_playing() {
                    self.service.pause();
                } else {
                    self.service.play();
                }
            }
            PlayerCommand::SkipToNext => self.service.skip_to_next(),
            PlayerCommand::SkipToPrevious => self.service.skip_to_previous(),
            PlayerCommand::JumpForward => self.service.jump_forward(),
            PlayerCommand::JumpBackward => self.service.jump_backward(),
            PlayerCommand::SeekTo(position_ms) => self.service.seek_to(position_ms),
            PlayerCommand::ClosePlayback => self.service.close_playback(),
            PlayerCommand::ChangeSpeed => self.change_speed(),
        }
    }

    pub fn dispatch_all(&self, commands: &[PlayerCommand]) {
        for command in commands {
            self.dispatch(*command);
        }
    }

    fn change_speed(&self) {
        let current = self.service.saved_playback_rate();
        let next = next_playback_speed(current);
        log::info!("Playback speed {} -> {}", current, next);
        self.service.set_saved_playback_rate(next);
        self.service.set_playback_speed(next);
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher").finish_non_exhaustive()
    }
}
