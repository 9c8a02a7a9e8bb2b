use serde::{Deserialize, Serialize};

/// What to do when the player already overlapped a platform on both axes
/// before this tick's move, so the side of approach is unknown.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddedResolution {
    /// Treat it like a hit from below: snap under the platform, zero `vy`.
    #[default]
    PushBelow = 0,
    /// Leave the player where it is.
    Ignore = 1,
}

/// Gameplay tuning. All velocities are in units per tick.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Horizontal / directional input
    pub acceleration: f32,
    pub friction_multiplier: f32,

    // Vertical
    pub gravity: f32,
    pub jump_speed: f32,

    // Player shape
    pub player_w: f32,
    pub player_h: f32,

    // Debug reset target
    pub reset_x: f32,
    pub reset_y: f32,

    pub embedded_resolution: EmbeddedResolution,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            acceleration: 0.5,
            friction_multiplier: 0.95,

            gravity: 0.5,
            jump_speed: 12.0,

            player_w: 50.0,
            player_h: 50.0,

            reset_x: 200.0,
            reset_y: 100.0,

            embedded_resolution: EmbeddedResolution::PushBelow,
        }
    }
}
