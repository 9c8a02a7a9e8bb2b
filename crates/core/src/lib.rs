#![allow(clippy::many_single_char_names)]

//! Fixed-step platformer physics: a player rectangle under gravity, friction
//! and input, resolved against axis-aligned platforms.
//!
//! Collision side is decided from where both bodies were *before* this
//! tick's move, not from the overlap itself. That is exact for a single
//! obstacle at moderate speed and approximate otherwise: fast bodies can
//! tunnel, and a player overlapping several platforms is resolved against
//! each in turn.

pub mod body;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod player;
pub mod rect;
pub mod replay;

pub use body::Body;
pub use config::{GameConfig, DEFAULT_TICK_RATE};
pub use error::{Error, Result};
pub use game::{Game, Renderer, TickEvents};
pub use input::{Buttons, KeyBindings, Keyboard};
pub use map::{Level, Map, Platform};
pub use params::{EmbeddedResolution, Params};
pub use player::{Contact, Contacts, Player, PlayerState};
pub use rect::Rect;
pub use replay::{Replay, TraceRow};

#[cfg(test)]
mod tests {
    use super::{Buttons, Game, GameConfig};

    fn approx_eq(a: f32, b: f32) {
        let eps = 1e-4;
        assert!(
            (a - b).abs() <= eps,
            "expected {b}, got {a} (diff {})",
            (a - b).abs()
        );
    }

    fn script(frame: u32) -> Buttons {
        let mut buttons = Buttons::empty();
        if frame < 60 {
            buttons |= Buttons::RIGHT;
        }
        if frame == 10 || frame == 90 {
            buttons |= Buttons::JUMP;
        }
        buttons
    }

    #[test]
    fn fixed_input_sequence_is_deterministic() {
        let run = || {
            let mut game = Game::new(GameConfig::default());
            (0..180)
                .map(|f| {
                    game.update(script(f));
                    game.player_state()
                })
                .collect::<Vec<_>>()
        };
        let a = run();
        let b = run();
        assert_eq!(a, b);
    }

    #[test]
    fn idle_player_rests_on_spawn_platform() {
        let mut game = Game::new(GameConfig::default());
        for _ in 0..180 {
            game.update(Buttons::empty());
        }
        let s = game.player_state();
        approx_eq(s.x, 200.0);
        approx_eq(s.y, 200.0);
        approx_eq(s.vx, 0.0);
        approx_eq(s.vy, 0.0);
        assert_eq!(s.grounded, 1);
    }
}
