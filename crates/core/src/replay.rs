//! Recorded input runs: a level, optional tuning, and one button byte per
//! tick. Used by the `replay` binary and by regression tests.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::game::Game;
use crate::input::Buttons;
use crate::map::Level;
use crate::params::Params;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub level: Level,
    #[serde(default = "default_spawn")]
    pub spawn: (f32, f32),
    pub inputs: Vec<u8>,
}

fn default_spawn() -> (f32, f32) {
    GameConfig::default().spawn
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct TraceRow {
    pub frame: usize,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: u8,
}

impl Replay {
    pub fn from_json(src: &str) -> Result<Self> {
        let replay: Self = serde_json::from_str(src)?;
        replay.config().validate()?;
        Ok(replay)
    }

    /// The game configuration this replay runs under.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            params: self.params,
            spawn: self.spawn,
            level: self.level.clone(),
            ..GameConfig::default()
        }
    }

    fn buttons(&self) -> Result<Vec<Buttons>> {
        self.inputs
            .iter()
            .enumerate()
            .map(|(frame, &bits)| {
                Buttons::from_bits(bits).ok_or(Error::ReplayInput { frame, bits })
            })
            .collect()
    }

    /// Run every input through a fresh game, one row per tick.
    pub fn run(&self) -> Result<Vec<TraceRow>> {
        let buttons = self.buttons()?;
        let mut game = Game::new(self.config());

        Ok(buttons
            .into_iter()
            .enumerate()
            .map(|(frame, b)| {
                game.update(b);
                let s = game.player_state();
                TraceRow { frame, x: s.x, y: s.y, vx: s.vx, vy: s.vy, grounded: s.grounded }
            })
            .collect())
    }
}
