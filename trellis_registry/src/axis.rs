// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis selection for per-axis coordinate queries.

use kurbo::{Point, Rect, Vec2};

/// A coordinate axis in the shared absolute space.
///
/// Several operations (pan-origin seeding, arena bounding, autoscroll
/// stepping) work one axis at a time; this selector picks the component
/// without duplicating the surrounding logic per axis.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// Component of a point along this axis.
    #[inline]
    #[must_use]
    pub fn of_point(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Component of a vector along this axis.
    #[inline]
    #[must_use]
    pub fn of_vec(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }

    /// Minimum bound of a rectangle along this axis.
    #[inline]
    #[must_use]
    pub fn rect_min(self, r: &Rect) -> f64 {
        match self {
            Self::X => r.x0,
            Self::Y => r.y0,
        }
    }

    /// Maximum bound of a rectangle along this axis.
    #[inline]
    #[must_use]
    pub fn rect_max(self, r: &Rect) -> f64 {
        match self {
            Self::X => r.x1,
            Self::Y => r.y1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Axis;
    use kurbo::{Point, Rect, Vec2};

    #[test]
    fn components_select_the_named_axis() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(Axis::X.of_point(p), 3.0);
        assert_eq!(Axis::Y.of_point(p), 7.0);

        let v = Vec2::new(-1.0, 2.0);
        assert_eq!(Axis::X.of_vec(v), -1.0);
        assert_eq!(Axis::Y.of_vec(v), 2.0);

        let r = Rect::new(10.0, 20.0, 30.0, 60.0);
        assert_eq!(Axis::X.rect_min(&r), 10.0);
        assert_eq!(Axis::X.rect_max(&r), 30.0);
        assert_eq!(Axis::Y.rect_min(&r), 20.0);
        assert_eq!(Axis::Y.rect_max(&r), 60.0);
    }
}
