use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::input::KeyBindings;
use crate::map::Level;
use crate::params::Params;

pub const DEFAULT_TICK_RATE: f32 = 60.0;

/// Everything needed to build a [`crate::Game`]. Missing JSON fields fall
/// back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub params: Params,
    /// Ticks per second the host loop should aim for.
    pub tick_rate: f32,
    /// Player start position (top-left).
    pub spawn: (f32, f32),
    pub bindings: KeyBindings,
    pub level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            params: Params::default(),
            tick_rate: DEFAULT_TICK_RATE,
            spawn: (200.0, 200.0),
            bindings: KeyBindings::default(),
            level: Level::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json(src: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !valid_tick_rate(self.tick_rate) {
            return Err(Error::InvalidTickRate(self.tick_rate));
        }
        let (w, h) = (self.params.player_w, self.params.player_h);
        if !(w > 0.0 && h > 0.0) {
            return Err(Error::InvalidPlayerSize { w, h });
        }
        validate_level(&self.level)
    }

    /// Interval between ticks. A rate that `validate` would reject, or one
    /// too small to express as a `Duration`, uses [`DEFAULT_TICK_RATE`].
    pub fn frame_interval(&self) -> Duration {
        Some(self.tick_rate)
            .filter(|r| valid_tick_rate(*r))
            .and_then(|r| Duration::try_from_secs_f32(1.0 / r).ok())
            .unwrap_or_else(|| Duration::from_secs_f32(1.0 / DEFAULT_TICK_RATE))
    }
}

fn valid_tick_rate(rate: f32) -> bool {
    rate.is_finite() && rate > 0.0
}

pub fn validate_level(level: &Level) -> Result<()> {
    match level.platforms.iter().position(|r| !r.is_well_formed()) {
        Some(index) => {
            let r = level.platforms[index];
            Err(Error::MalformedPlatform { index, w: r.w, h: r.h })
        }
        None => Ok(()),
    }
}
