//! The simulation context: one player, one map, one keyboard, ticked by the
//! host loop.
//!
//! Each tick runs, in order: platforms move, input is applied, the player
//! integrates and resolves against whatever it now overlaps. Drawing is a
//! separate pass through a [`Renderer`].

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::Result;
use crate::input::{Buttons, Keyboard};
use crate::map::Map;
use crate::params::EmbeddedResolution;
use crate::player::{Contact, Contacts, Player, PlayerState};
use crate::rect::Rect;

/// Drawing surface supplied by the host. `init` must succeed before any
/// other call.
pub trait Renderer {
    fn init(&mut self) -> Result<()>;
    fn clear(&mut self);
    fn draw_rect(&mut self, rect: &Rect);
    fn draw_filled_rect(&mut self, rect: &Rect);
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub jumped: u8,
    pub landed: u8,
    pub blocked: u8,
    pub bonked: u8,
}

pub struct Game {
    config: GameConfig,
    player: Player,
    map: Map,
    keyboard: Keyboard,
    tick: u64,
    initialised: bool,
}

impl Game {
    /// Builds without rejecting anything; hosts loading untrusted input go
    /// through [`GameConfig::from_json`] first.
    pub fn new(config: GameConfig) -> Self {
        if let Err(e) = config.validate() {
            warn!(error = %e, "game built from an invalid config");
        }
        let (x, y) = config.spawn;
        let player = Player::new(x, y, config.params);
        let map = config.level.build();
        info!(
            platforms = map.len(),
            tick_rate = config.tick_rate,
            "game created"
        );
        Self {
            config,
            player,
            map,
            keyboard: Keyboard::new(),
            tick: 0,
            initialised: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn player_state(&self) -> PlayerState {
        self.player.state()
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn keyboard_mut(&mut self) -> &mut Keyboard {
        &mut self.keyboard
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn frame_interval(&self) -> Duration {
        self.config.frame_interval()
    }

    /// One-time renderer setup; errors here are fatal for the host.
    pub fn init<R: Renderer>(&mut self, renderer: &mut R) -> Result<()> {
        renderer.init()?;
        self.initialised = true;
        Ok(())
    }

    /// Advance the world one step with an explicit button set.
    pub fn update(&mut self, buttons: Buttons) -> TickEvents {
        let was_grounded = self.player.can_jump();

        self.map.update();
        let jumped = self.player.handle_input(buttons);
        let contacts = self.player.update(&self.map);
        self.tick += 1;

        let push_embedded = self.config.params.embedded_resolution == EmbeddedResolution::PushBelow;
        let ev = events(jumped, was_grounded, push_embedded, &contacts);
        if ev.landed != 0 {
            debug!(tick = self.tick, y = self.player.body.rect.y, "landed");
        }
        ev
    }

    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        debug_assert!(self.initialised, "draw before init");
        renderer.clear();
        renderer.draw_filled_rect(&self.player.body.rect);
        for p in self.map.platforms() {
            renderer.draw_rect(p.rect());
        }
    }

    /// Sample the keyboard, step, and draw.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R) -> TickEvents {
        let buttons = self.keyboard.buttons(&self.config.bindings);
        let ev = self.update(buttons);
        self.draw(renderer);
        ev
    }
}

fn events(jumped: bool, was_grounded: bool, push_embedded: bool, contacts: &Contacts) -> TickEvents {
    let grounded = contacts.grounded();
    let bonked = contacts.as_slice().iter().any(|c| match c {
        Contact::Bottom => true,
        Contact::Embedded => push_embedded,
        _ => false,
    });
    TickEvents {
        jumped: jumped as u8,
        landed: (grounded && !was_grounded) as u8,
        blocked: contacts.blocked() as u8,
        bonked: bonked as u8,
    }
}
