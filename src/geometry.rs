//! Axis-aligned shapes and the overlap tests used for every collision in the game.
//!
//! Touching counts as colliding: all four edge comparisons are inclusive.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: [f32; 2],
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: [f32; 2], radius: f32) -> Circle {
        Circle { center, radius }
    }

    /// Square of side `2 * radius` centered on the circle.
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.center[0] - self.radius,
            self.center[1] - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

pub fn rect_intersects(a: &Rect, b: &Rect) -> bool {
    a.right() >= b.left()
        && a.left() <= b.right()
        && a.bottom() >= b.top()
        && a.top() <= b.bottom()
}

/// Bounding-box approximation of a circle/rectangle overlap.
///
/// Near a rectangle corner this reports contact even when the true circle
/// does not reach the corner; bounce behaviour depends on that.
pub fn circle_rect_overlap(circle: &Circle, rect: &Rect) -> bool {
    rect_intersects(&circle.bounding_box(), rect)
}
