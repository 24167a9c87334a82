use strum::EnumIter;

/// Raw platform key codes for the media keys this layer understands
pub const KEYCODE_HEADSETHOOK: i32 = 79;
pub const KEYCODE_MEDIA_PLAY_PAUSE: i32 = 85;
pub const KEYCODE_MEDIA_STOP: i32 = 86;
pub const KEYCODE_MEDIA_NEXT: i32 = 87;
pub const KEYCODE_MEDIA_PREVIOUS: i32 = 88;
pub const KEYCODE_MEDIA_REWIND: i32 = 89;
pub const KEYCODE_MEDIA_FAST_FORWARD: i32 = 90;
pub const KEYCODE_MEDIA_PLAY: i32 = 126;
pub const KEYCODE_MEDIA_PAUSE: i32 = 127;

/// Physical media keys
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum KeyAction {
    HeadsetHook,
    Play,
    Pause,
    PlayPause,
    Next,
    Previous,
    FastForward,
    Rewind,
    Stop,
}

impl KeyAction {
    pub fn from_key_code(key_code: i32) -> Option<KeyAction> {
        match key_code {
            KEYCODE_HEADSETHOOK => Some(KeyAction::HeadsetHook),
            KEYCODE_MEDIA_PLAY => Some(KeyAction::Play),
            KEYCODE_MEDIA_PAUSE => Some(KeyAction::Pause),
            KEYCODE_MEDIA_PLAY_PAUSE => Some(KeyAction::PlayPause),
            KEYCODE_MEDIA_NEXT => Some(KeyAction::Next),
            KEYCODE_MEDIA_PREVIOUS => Some(KeyAction::Previous),
            KEYCODE_MEDIA_FAST_FORWARD => Some(KeyAction::FastForward),
            KEYCODE_MEDIA_REWIND => Some(KeyAction::Rewind),
            KEYCODE_MEDIA_STOP => Some(KeyAction::Stop),
            _ => None,
        }
    }

    pub fn key_code(self) -> i32 {
        match self {
            KeyAction::HeadsetHook => KEYCODE_HEADSETHOOK,
            KeyAction::Play => KEYCODE_MEDIA_PLAY,
            KeyAction::Pause => KEYCODE_MEDIA_PAUSE,
            KeyAction::PlayPause => KEYCODE_MEDIA_PLAY_PAUSE,
            KeyAction::Next => KEYCODE_MEDIA_NEXT,
            KeyAction::Previous => KEYCODE_MEDIA_PREVIOUS,
            KeyAction::FastForward => KEYCODE_MEDIA_FAST_FORWARD,
            KeyAction::Rewind => KEYCODE_MEDIA_REWIND,
            KeyAction::Stop => KEYCODE_MEDIA_STOP,
        }
    }

    /// Keys whose repeated presses are counted into a click gesture
    pub fn is_ambiguous(self) -> bool {
        matches!(
            self,
            KeyAction::HeadsetHook | KeyAction::Play | KeyAction::Pause | KeyAction::PlayPause
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// A single key transition delivered with a media-button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key_code: i32,
}

impl KeyEvent {
    pub fn up(key_code: i32) -> Self {
        Self { kind: KeyEventKind::Up, key_code }
    }

    pub fn down(key_code: i32) -> Self {
        Self { kind: KeyEventKind::Down, key_code }
    }

    /// The recognised key released by this event, if any
    pub fn released_key(&self) -> Option<KeyAction> {
        match self.kind {
            KeyEventKind::Up => KeyAction::from_key_code(self.key_code),
            KeyEventKind::Down => None,
        }
    }
}

/// Whether a media-button event is consumed by this layer.
///
/// Only key-up events with an unrecognised key code are handed back to the
/// platform. Key-downs and events without a key are swallowed.
pub fn is_consumed(event: Option<&KeyEvent>) -> bool {
    match event {
        Some(event) if event.kind == KeyEventKind::Up => {
            KeyAction::from_key_code(event.key_code).is_some()
        }
        _ => true,
    }
}
