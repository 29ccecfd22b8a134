use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Shrinks the rectangle by `margin` on every side.
    ///
    /// An inset larger than half the extent collapses to an empty rect at
    /// the center rather than inverting.
    #[inline]
    pub fn inset(self, margin: f32) -> Self {
        let w = (self.size.x - 2.0 * margin).max(0.0);
        let h = (self.size.y - 2.0 * margin).max(0.0);
        let c = self.center();
        Rect::new(c.x - w * 0.5, c.y - h * 0.5, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── min / max / center ────────────────────────────────────────────────

    #[test]
    fn max_is_origin_plus_size() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.max(), Vec2::new(11.0, 22.0));
    }

    #[test]
    fn center_of_square() {
        assert_eq!(r(0.0, 0.0, 10.0, 10.0).center(), Vec2::new(5.0, 5.0));
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_side() {
        let i = r(10.0, 10.0, 20.0, 20.0).inset(2.0);
        assert_eq!(i, r(12.0, 12.0, 16.0, 16.0));
    }

    #[test]
    fn inset_past_half_extent_collapses() {
        let i = r(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert!(i.is_empty());
        assert_eq!(i.center(), Vec2::new(5.0, 5.0));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
