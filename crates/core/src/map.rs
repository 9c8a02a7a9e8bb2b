use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::rect::Rect;

/// A collision target. Moves only by its own velocity and is never pushed
/// by the player.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Platform {
    pub body: Body,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { body: Body::new(Rect::new(x, y, w, h)) }
    }

    /// A platform scripted to drift at a constant velocity.
    pub fn moving(rect: Rect, vx: f32, vy: f32) -> Self {
        Self { body: Body::new(rect).with_velocity(vx, vy) }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    pub fn update(&mut self) {
        self.body.integrate();
    }
}

impl From<Rect> for Platform {
    fn from(r: Rect) -> Self {
        Self { body: Body::new(r) }
    }
}

/// Ordered platform layout, as loaded from config or replay files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level {
    pub platforms: Vec<Rect>,
}

impl Default for Level {
    fn default() -> Self {
        Self {
            platforms: vec![
                Rect::new(100.0, 400.0, 150.0, 100.0),
                Rect::new(150.0, 300.0, 50.0, 50.0),
                Rect::new(450.0, 300.0, 50.0, 50.0),
                Rect::new(150.0, 250.0, 350.0, 50.0),
                Rect::new(400.0, 400.0, 150.0, 100.0),
                Rect::new(650.0, 300.0, 100.0, 200.0),
                Rect::new(50.0, 500.0, 700.0, 100.0),
            ],
        }
    }
}

impl Level {
    pub fn build(&self) -> Map {
        Map::new(self.platforms.iter().copied().map(Platform::from).collect())
    }
}

/// The obstacle set. Registration order is draw order and query order;
/// overlapping platforms are kept as separate entries.
#[derive(Clone, Debug, Default)]
pub struct Map {
    platforms: Vec<Platform>,
}

impl Map {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    pub fn add(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Every platform overlapping `rect`, in registration order.
    ///
    /// Linear scan; fine for hand-built levels, would want a grid at scale.
    pub fn get_collisions(&self, rect: &Rect) -> Vec<&Platform> {
        self.platforms
            .iter()
            .filter(|p| p.rect().colliding(rect))
            .collect()
    }

    pub fn update(&mut self) {
        for p in &mut self.platforms {
            p.update();
        }
    }
}
