use crate::rect::Rect;

/// A rectangle with velocity (units per tick) and the position it held
/// before the current tick's integration.
///
/// `last_x`/`last_y` are what collision resolution uses to tell which side a
/// hit came from, so they must only be written by [`Body::save_old_position`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    last_x: f32,
    last_y: f32,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vx: 0.0,
            vy: 0.0,
            last_x: rect.x,
            last_y: rect.y,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.set_velocity(vx, vy);
        self
    }

    #[inline]
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.vx = vx;
        self.vy = vy;
    }

    #[inline]
    pub fn accelerate(&mut self, dvx: f32, dvy: f32) {
        self.vx += dvx;
        self.vy += dvy;
    }

    #[inline]
    pub fn save_old_position(&mut self) {
        self.last_x = self.rect.x;
        self.last_y = self.rect.y;
    }

    /// Snapshot the pre-move position, then step by one tick of velocity.
    pub fn integrate(&mut self) {
        self.save_old_position();
        self.rect.translate(self.vx, self.vy);
    }

    #[inline]
    pub fn last_x(&self) -> f32 {
        self.last_x
    }

    #[inline]
    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    /// Where the body was at the start of this tick, at its current size.
    pub fn last_rect(&self) -> Rect {
        Rect::new(self.last_x, self.last_y, self.rect.w, self.rect.h)
    }
}

#[cfg(test)]
mod tests {
    use super::Body;
    use crate::rect::Rect;

    #[test]
    fn new_body_remembers_spawn_position() {
        let b = Body::new(Rect::new(3.0, 4.0, 1.0, 1.0));
        assert_eq!((b.last_x(), b.last_y()), (3.0, 4.0));
        assert_eq!((b.vx, b.vy), (0.0, 0.0));
    }

    #[test]
    fn integrate_saves_then_translates() {
        let mut b = Body::new(Rect::new(10.0, 20.0, 5.0, 5.0)).with_velocity(2.0, -3.0);
        b.integrate();
        assert_eq!((b.last_x(), b.last_y()), (10.0, 20.0));
        assert_eq!((b.rect.x, b.rect.y), (12.0, 17.0));

        b.integrate();
        assert_eq!((b.last_x(), b.last_y()), (12.0, 17.0));
        assert_eq!(b.last_rect(), Rect::new(12.0, 17.0, 5.0, 5.0));
    }

    #[test]
    fn accelerate_adds_to_velocity() {
        let mut b = Body::new(Rect::new(0.0, 0.0, 1.0, 1.0));
        b.accelerate(0.5, -1.0);
        b.accelerate(0.5, -1.0);
        assert_eq!((b.vx, b.vy), (1.0, -2.0));

        b.set_velocity(0.0, 0.0);
        assert_eq!((b.vx, b.vy), (0.0, 0.0));
    }

    #[test]
    fn translating_rect_does_not_touch_snapshot() {
        let mut b = Body::new(Rect::new(0.0, 0.0, 1.0, 1.0));
        b.rect.translate(50.0, 50.0);
        assert_eq!((b.last_x(), b.last_y()), (0.0, 0.0));
    }
}
