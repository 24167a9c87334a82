use strum::{EnumIter, IntoEnumIterator};

/// Preset playback speeds cycled by the change-speed action
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, strum::Display)]
pub enum SpeedTier {
    #[strum(serialize = "0.5x")]
    Half,
    #[strum(serialize = "1.0x")]
    Normal,
    #[strum(serialize = "1.2x")]
    Brisk,
    #[strum(serialize = "1.5x")]
    OneAndHalf,
    #[strum(serialize = "2.0x")]
    Double,
    #[strum(serialize = "3.0x")]
    Triple,
}

impl SpeedTier {
    pub fn rate(self) -> f32 {
        match self {
            SpeedTier::Half => 0.5,
            SpeedTier::Normal => 1.0,
            SpeedTier::Brisk => 1.2,
            SpeedTier::OneAndHalf => 1.5,
            SpeedTier::Double => 2.0,
            SpeedTier::Triple => 3.0,
        }
    }

    /// Exact match only; rates set elsewhere (e.g. 1.75) have no tier
    pub fn from_rate(rate: f32) -> Option<SpeedTier> {
        SpeedTier::iter().find(|tier| tier.rate() == rate)
    }

    pub fn next(self) -> SpeedTier {
        match self {
            SpeedTier::Half => SpeedTier::Normal,
            SpeedTier::Normal => SpeedTier::Brisk,
            SpeedTier::Brisk => SpeedTier::OneAndHalf,
            SpeedTier::OneAndHalf => SpeedTier::Double,
            SpeedTier::Double => SpeedTier::Triple,
            SpeedTier::Triple => SpeedTier::Half,
        }
    }
}

/// Speed that follows `current` in the tier cycle, or 1.0 for an unknown rate
pub fn next_playback_speed(current: f32) -> f32 {
    SpeedTier::from_rate(current)
        .map(SpeedTier::next)
        .unwrap_or(SpeedTier::Normal)
        .rate()
}
