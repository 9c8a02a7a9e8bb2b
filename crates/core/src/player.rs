use tracing::{debug, trace};

use crate::body::Body;
use crate::input::Buttons;
use crate::map::{Map, Platform};
use crate::params::{EmbeddedResolution, Params};
use crate::rect::Rect;

/// Which side of a platform the player was resolved against, judged from
/// both bodies' pre-move positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Contact {
    /// Was fully left of the platform; pushed back out to its left edge.
    Left,
    /// Was fully right of the platform.
    Right,
    /// Was fully above: landed on top. The only contact that grounds.
    Top,
    /// Was fully below: hit its head.
    Bottom,
    /// Already overlapped on both axes before moving, so the approach side
    /// is unknown. Response depends on [`EmbeddedResolution`].
    Embedded,
}

/// Contacts resolved during one player update, in platform order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Contacts(Vec<Contact>);

impl Contacts {
    pub fn as_slice(&self) -> &[Contact] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: Contact) -> bool {
        self.0.contains(&c)
    }

    /// True iff some platform was landed on this tick.
    pub fn grounded(&self) -> bool {
        self.contains(Contact::Top)
    }

    pub fn blocked(&self) -> bool {
        self.contains(Contact::Left) || self.contains(Contact::Right)
    }
}

impl FromIterator<Contact> for Contacts {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Flat snapshot handed to hosts (FFI, wasm, replay traces).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: u8,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    params: Params,
    grounded: bool,
}

impl Player {
    pub fn new(x: f32, y: f32, params: Params) -> Self {
        Self {
            body: Body::new(Rect::new(x, y, params.player_w, params.player_h)),
            params,
            grounded: false,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Whether a jump is allowed right now. Only set by a top landing during
    /// the last [`Player::update`]; a jump consumes it.
    pub fn can_jump(&self) -> bool {
        self.grounded
    }

    pub fn state(&self) -> PlayerState {
        PlayerState {
            x: self.body.rect.x,
            y: self.body.rect.y,
            vx: self.body.vx,
            vy: self.body.vy,
            grounded: self.grounded as u8,
        }
    }

    /// Apply one tick of input. Returns true if a jump fired.
    pub fn handle_input(&mut self, buttons: Buttons) -> bool {
        let a = self.params.acceleration;
        if buttons.contains(Buttons::LEFT) {
            self.body.accelerate(-a, 0.0);
        }
        if buttons.contains(Buttons::RIGHT) {
            self.body.accelerate(a, 0.0);
        }
        if buttons.contains(Buttons::UP) {
            self.body.accelerate(0.0, -a);
        }
        if buttons.contains(Buttons::DOWN) {
            self.body.accelerate(0.0, a);
        }

        let mut jumped = false;
        if buttons.contains(Buttons::JUMP) && self.grounded {
            self.grounded = false;
            self.body.accelerate(0.0, -self.params.jump_speed);
            jumped = true;
            debug!(x = self.body.rect.x, y = self.body.rect.y, "jump");
        }

        if buttons.contains(Buttons::RESET) {
            self.body.rect.set_position(self.params.reset_x, self.params.reset_y);
            self.body.set_velocity(0.0, 0.0);
            debug!(x = self.params.reset_x, y = self.params.reset_y, "player reset");
        }

        jumped
    }

    #[inline]
    pub fn apply_friction(&mut self) {
        self.body.vx *= self.params.friction_multiplier;
    }

    #[inline]
    pub fn apply_gravity(&mut self) {
        self.body.vy += self.params.gravity;
    }

    /// Separate from one overlapping platform. Grounding is not touched here;
    /// [`Player::update`] derives it from the returned contacts.
    ///
    /// Branches are checked in order and the first match wins. Only the
    /// pre-move positions decide the branch; the snap uses the platform's
    /// current position.
    pub fn handle_collision(&mut self, platform: &Platform) -> Contact {
        let me = self.body.last_rect();
        let other = platform.body.last_rect();
        let target = *platform.rect();
        let rect = &mut self.body.rect;

        if me.x + rect.w <= other.x {
            rect.x = target.x - rect.w;
            self.body.vx = 0.0;
            Contact::Left
        } else if me.x >= other.x + target.w {
            rect.x = target.x + target.w;
            self.body.vx = 0.0;
            Contact::Right
        } else if me.y + rect.h <= other.y {
            rect.y = target.y - rect.h;
            self.body.vy = 0.0;
            Contact::Top
        } else if me.y >= other.y + target.h {
            rect.y = target.y + target.h;
            self.body.vy = 0.0;
            Contact::Bottom
        } else {
            // Ambiguous: started the tick already inside the platform.
            if self.params.embedded_resolution == EmbeddedResolution::PushBelow {
                rect.y = target.y + target.h;
                self.body.vy = 0.0;
            }
            Contact::Embedded
        }
    }

    /// One physics tick: friction, gravity, integrate, then resolve against
    /// every platform overlapping the moved player.
    pub fn update(&mut self, map: &Map) -> Contacts {
        self.apply_friction();
        self.apply_gravity();

        self.body.integrate();

        let contacts: Contacts = map
            .get_collisions(&self.body.rect)
            .into_iter()
            .map(|p| {
                let c = self.handle_collision(p);
                trace!(contact = ?c, platform = ?p.rect(), "resolved");
                c
            })
            .collect();
        self.grounded = contacts.grounded();

        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, Player};
    use crate::input::Buttons;
    use crate::map::{Map, Platform};
    use crate::params::{EmbeddedResolution, Params};
    use crate::rect::Rect;

    fn approx_eq(a: f32, b: f32) {
        let eps = 1e-4;
        assert!(
            (a - b).abs() <= eps,
            "expected {b}, got {a} (diff {})",
            (a - b).abs()
        );
    }

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, Params::default())
    }

    #[test]
    fn player_is_fixed_size() {
        let p = player_at(1.0, 2.0);
        assert_eq!(p.body.rect, Rect::new(1.0, 2.0, 50.0, 50.0));
        assert!(!p.can_jump());
    }

    #[test]
    fn friction_decays_geometrically() {
        let mut p = player_at(0.0, 0.0);
        p.body.vx = 10.0;
        p.apply_friction();
        approx_eq(p.body.vx, 9.5);

        for n in 2..=40 {
            p.apply_friction();
            approx_eq(p.body.vx, 10.0 * 0.95f32.powi(n));
        }
        assert!(p.body.vx > 0.0);
    }

    #[test]
    fn directional_input_accelerates() {
        let mut p = player_at(0.0, 0.0);
        p.handle_input(Buttons::RIGHT | Buttons::UP);
        assert_eq!((p.body.vx, p.body.vy), (0.5, -0.5));

        p.handle_input(Buttons::LEFT | Buttons::RIGHT | Buttons::DOWN);
        assert_eq!((p.body.vx, p.body.vy), (0.5, 0.0));
    }

    #[test]
    fn jump_needs_ground_and_consumes_it() {
        let mut p = player_at(0.0, 0.0);
        assert!(!p.handle_input(Buttons::JUMP));
        assert_eq!(p.body.vy, 0.0);

        p.grounded = true;
        assert!(p.handle_input(Buttons::JUMP));
        assert_eq!(p.body.vy, -12.0);
        assert!(!p.can_jump());

        assert!(!p.handle_input(Buttons::JUMP));
        assert_eq!(p.body.vy, -12.0);
    }

    #[test]
    fn reset_snaps_position_and_stops() {
        let mut p = player_at(0.0, 0.0);
        p.body.set_velocity(3.0, -7.0);
        p.handle_input(Buttons::RESET | Buttons::RIGHT);
        assert_eq!((p.body.rect.x, p.body.rect.y), (200.0, 100.0));
        assert_eq!((p.body.vx, p.body.vy), (0.0, 0.0));
    }

    #[test]
    fn hit_from_left_snaps_to_left_edge() {
        let wall = Platform::new(100.0, -100.0, 20.0, 300.0);
        let mut p = player_at(30.0, 0.0);
        p.body.set_velocity(40.0, 0.0);
        p.body.integrate();
        assert!(p.body.rect.colliding(wall.rect()));

        assert_eq!(p.handle_collision(&wall), Contact::Left);
        assert_eq!(p.body.rect.x, 50.0);
        assert_eq!(p.body.vx, 0.0);
        assert!(!p.can_jump());
    }

    #[test]
    fn hit_from_right_snaps_to_right_edge() {
        let wall = Platform::new(100.0, -100.0, 20.0, 300.0);
        let mut p = player_at(130.0, 0.0);
        p.body.set_velocity(-25.0, 0.0);
        p.body.integrate();

        assert_eq!(p.handle_collision(&wall), Contact::Right);
        assert_eq!(p.body.rect.x, 120.0);
        assert_eq!(p.body.vx, 0.0);
    }

    #[test]
    fn landing_on_top_snaps_above() {
        let floor = Platform::new(0.0, 100.0, 200.0, 20.0);
        let mut p = player_at(10.0, 45.0);
        p.body.set_velocity(1.0, 9.0);
        p.body.integrate();

        assert_eq!(p.handle_collision(&floor), Contact::Top);
        assert_eq!(p.body.rect.y, 50.0);
        assert_eq!(p.body.vy, 0.0);
        assert_eq!(p.body.vx, 1.0);
        assert!(!p.can_jump());
    }

    #[test]
    fn hit_from_below_snaps_under() {
        let ceiling = Platform::new(0.0, 0.0, 200.0, 20.0);
        let mut p = player_at(10.0, 25.0);
        p.body.set_velocity(0.0, -8.0);
        p.body.integrate();

        assert_eq!(p.handle_collision(&ceiling), Contact::Bottom);
        assert_eq!(p.body.rect.y, 20.0);
        assert_eq!(p.body.vy, 0.0);
        assert!(!p.can_jump());
    }

    #[test]
    fn horizontal_branch_wins_over_vertical() {
        // Diagonal approach: clear of the platform on both axes before
        // moving, so the left-side branch is checked first and wins.
        let block = Platform::new(100.0, 100.0, 50.0, 50.0);
        let mut p = player_at(45.0, 45.0);
        p.body.set_velocity(10.0, 10.0);
        p.body.integrate();

        assert_eq!(p.handle_collision(&block), Contact::Left);
        assert_eq!((p.body.rect.x, p.body.rect.y), (50.0, 55.0));
        assert_eq!((p.body.vx, p.body.vy), (0.0, 10.0));
    }

    #[test]
    fn embedded_pushes_below_by_default() {
        let block = Platform::new(0.0, 0.0, 100.0, 100.0);
        let mut p = player_at(20.0, 20.0);
        p.body.set_velocity(0.0, 3.0);
        p.body.integrate();

        assert_eq!(p.handle_collision(&block), Contact::Embedded);
        assert_eq!(p.body.rect.y, 100.0);
        assert_eq!(p.body.vy, 0.0);
    }

    #[test]
    fn embedded_can_be_left_alone() {
        let params = Params {
            embedded_resolution: EmbeddedResolution::Ignore,
            ..Params::default()
        };
        let block = Platform::new(0.0, 0.0, 100.0, 100.0);
        let mut p = Player::new(20.0, 20.0, params);
        p.body.set_velocity(0.0, 3.0);
        p.body.integrate();

        assert_eq!(p.handle_collision(&block), Contact::Embedded);
        assert_eq!(p.body.rect.y, 23.0);
        assert_eq!(p.body.vy, 3.0);
    }

    #[test]
    fn side_detection_uses_platform_pre_move_position() {
        // The platform slides left into a stationary player; before the
        // tick the player was clear to its left.
        let mut map = Map::new(vec![Platform::moving(
            Rect::new(60.0, 0.0, 40.0, 100.0),
            -15.0,
            0.0,
        )]);
        map.update();

        let mut p = player_at(0.0, 20.0);
        let contacts = p.update(&map);
        assert_eq!(contacts.as_slice(), &[Contact::Left]);
        assert_eq!(p.body.rect.x, 45.0 - 50.0);
    }

    #[test]
    fn grounded_is_recomputed_every_update() {
        let map = Map::new(vec![Platform::new(0.0, 50.0, 200.0, 20.0)]);
        let mut p = player_at(10.0, 0.0);

        let contacts = p.update(&map);
        assert!(contacts.grounded());
        assert!(p.can_jump());

        p.handle_input(Buttons::JUMP);
        let contacts = p.update(&map);
        assert!(contacts.is_empty());
        assert!(!p.can_jump());
    }
}
