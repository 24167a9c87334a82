use crate::keys::KeyEvent;

/// Transport operations forwarded to the playback service
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    /// Start or resume playback
    Play,
    /// Pause playback
    Pause,
    /// Pause when playing, play otherwise
    TogglePlayPause,
    /// Move to the next library item or chapter
    SkipToNext,
    /// Move to the previous library item or chapter
    SkipToPrevious,
    /// Seek forward by the service's jump interval
    JumpForward,
    /// Seek backward by the service's jump interval
    JumpBackward,
    /// Seek to an absolute position in milliseconds
    SeekTo(u64),
    /// Tear down the current playback session
    ClosePlayback,
    /// Advance to the next playback speed tier
    ChangeSpeed,
}

/// Custom transport actions published alongside the standard controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CustomAction {
    JumpForward,
    JumpBackward,
    SkipForward,
    SkipBackward,
    ChangeSpeed,
}

impl From<CustomAction> for PlayerCommand {
    fn from(action: CustomAction) -> Self {
        match action {
            CustomAction::JumpForward => PlayerCommand::JumpForward,
            CustomAction::JumpBackward => PlayerCommand::JumpBackward,
            CustomAction::SkipForward => PlayerCommand::SkipToNext,
            CustomAction::SkipBackward => PlayerCommand::SkipToPrevious,
            CustomAction::ChangeSpeed => PlayerCommand::ChangeSpeed,
        }
    }
}

/// Events delivered by the platform transport-control layer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Prepare the first available item
    Prepare,
    /// Prepare from a voice/search query
    PrepareFromSearch(Option<String>),
    Play,
    /// Resolve a search query and play the result
    PlayFromSearch(Option<String>),
    /// Play a library item or podcast episode by media id
    PlayFromMediaId(Option<String>),
    Pause,
    Stop,
    SkipToNext,
    SkipToPrevious,
    FastForward,
    Rewind,
    /// Seek to position in milliseconds
    SeekTo(u64),
    /// Raw hardware media-button event
    MediaButton(Option<KeyEvent>),
    /// Named custom action
    CustomAction(String),
}
