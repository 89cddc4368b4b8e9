use serde::{Deserialize, Serialize};

/// Integer pixel coordinate, origin at the top-left corner, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Minimal-area bounding box of one contour, as produced by the upstream
/// edge/contour step. The angle follows the minimal-area box convention:
/// magnitude in [0, 180), where both near-0 and near-90 describe a visually
/// horizontal rectangle depending on which side was measured as "width".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrientedRect {
    pub center: (f32, f32),
    pub width: f32,
    pub height: f32,
    pub angle_degrees: f32,
    /// The 4 corner points, in arbitrary order.
    pub corners: [Point; 4],
}

impl OrientedRect {
    pub fn new(
        center: (f32, f32),
        width: f32,
        height: f32,
        angle_degrees: f32,
        corners: [Point; 4],
    ) -> Self {
        Self {
            center,
            width,
            height,
            angle_degrees,
            corners,
        }
    }
}

/// Axis-aligned rectangle: `top_left` is componentwise ≤ `bottom_right` for
/// any well-formed value. Degenerate rects (zero width or height) may occur
/// as intermediates and are filtered before they reach a candidate list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisRect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl AxisRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    pub fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y
    }

    /// True when the two axis extents intersect on both axes.
    pub fn overlaps(&self, other: &AxisRect) -> bool {
        if self.top_left.x > other.bottom_right.x || self.bottom_right.x < other.top_left.x {
            return false;
        }
        if self.top_left.y > other.bottom_right.y || self.bottom_right.y < other.top_left.y {
            return false;
        }
        true
    }

    /// Minimum rectangle containing both `self` and `other`.
    pub fn enclosing(&self, other: &AxisRect) -> AxisRect {
        AxisRect {
            top_left: Point::new(
                self.top_left.x.min(other.top_left.x),
                self.top_left.y.min(other.top_left.y),
            ),
            bottom_right: Point::new(
                self.bottom_right.x.max(other.bottom_right.x),
                self.bottom_right.y.max(other.bottom_right.y),
            ),
        }
    }
}

/// Pick the top-left and bottom-right corners of a box relative to its
/// center: a corner with both coordinates ≤ the center is the top-left one,
/// both ≥ the center the bottom-right one. An axis-aligned box can tie in a
/// way that leaves a side without such a corner, so each side falls back to
/// the corner with the extreme `x + y` sum, which is always defined.
pub fn margin_corners(center: (f32, f32), corners: &[Point; 4]) -> AxisRect {
    let (cx, cy) = center;

    let mut top_left = None;
    let mut bottom_right = None;
    for p in corners {
        if (p.x as f32) <= cx && (p.y as f32) <= cy {
            top_left = Some(*p);
        }
        if (p.x as f32) >= cx && (p.y as f32) >= cy {
            bottom_right = Some(*p);
        }
    }

    let top_left = top_left.unwrap_or_else(|| {
        let mut best = corners[0];
        for p in &corners[1..] {
            if p.x + p.y < best.x + best.y {
                best = *p;
            }
        }
        best
    });
    let bottom_right = bottom_right.unwrap_or_else(|| {
        let mut best = corners[0];
        for p in &corners[1..] {
            if p.x + p.y > best.x + best.y {
                best = *p;
            }
        }
        best
    });

    AxisRect::new(top_left, bottom_right)
}
