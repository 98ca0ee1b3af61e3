/// Axis-aligned rectangles in world pixels (origin top-left, y grows down).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect { x, y, width, height }
    }

    /// Rectangle whose top edge is centred on `(x, y)`.
    pub fn from_mid_top((x, y): (i32, i32), width: i32, height: i32) -> Self {
        Rect::new(x - width / 2, y, width, height)
    }

    /// Rectangle whose bottom edge is centred on `(x, y)`.
    pub fn from_mid_bottom((x, y): (i32, i32), width: i32, height: i32) -> Self {
        Rect::new(x - width / 2, y - height, width, height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn mid_top(&self) -> (i32, i32) {
        (self.center_x(), self.y)
    }

    /// True when `other` lies entirely inside `self` (shared edges count).
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True when the two rectangles share a non-zero area.  Touching edges
    /// do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.width > 0
            && self.height > 0
            && other.width > 0
            && other.height > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Copy of `self` moved the least distance needed to sit inside
    /// `bounds`.  On an axis where `self` is larger than `bounds` it is
    /// centred instead.
    pub fn clamped_within(&self, bounds: &Rect) -> Rect {
        Rect {
            x: clamp_axis(self.x, self.width, bounds.x, bounds.width),
            y: clamp_axis(self.y, self.height, bounds.y, bounds.height),
            ..*self
        }
    }
}

fn clamp_axis(pos: i32, len: i32, lo: i32, span: i32) -> i32 {
    if len >= span {
        lo + span / 2 - len / 2
    } else if pos < lo {
        lo
    } else if pos + len > lo + span {
        lo + span - len
    } else {
        pos
    }
}
