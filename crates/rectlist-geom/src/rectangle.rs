use std::fmt;

use glam::DVec2;
use serde::Serialize;

use crate::{format_g, Point};

/// Name carried by a rectangle that has not been named yet
pub const DEFAULT_NAME: &str = "NoName";

/// Factor applied by [`Rectangle::scale_by_3`]
pub const SCALE_FACTOR: f64 = 3.0;

/// Axis-aligned rectangle defined by its bottom left corner and extents
///
/// `length` runs along the x-axis and `height` along the y-axis. Both are
/// expected to be positive once the rectangle is fully populated; the type
/// itself does not check this, so a default rectangle is the zero-sized
/// sentinel at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    name: String,
    bottom_left: Point,
    length: f64,
    height: f64,
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            bottom_left: Point::default(),
            length: 0.0,
            height: 0.0,
        }
    }
}

impl Rectangle {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_bottom_left(&mut self, x: f64, y: f64) {
        self.bottom_left.set_x(x);
        self.bottom_left.set_y(y);
    }

    pub fn set_dimensions(&mut self, length: f64, height: f64) {
        self.length = length;
        self.height = height;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bottom_left(&self) -> Point {
        self.bottom_left
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Area (A = l * h)
    pub fn area(&self) -> f64 {
        self.length * self.height
    }

    /// Perimeter (P = 2l + 2h)
    pub fn perimeter(&self) -> f64 {
        2.0 * self.length + 2.0 * self.height
    }

    /// Geometric center of the rectangle
    pub fn mid_point(&self) -> Point {
        let bl = DVec2::from(self.bottom_left);
        (bl + self.size() / 2.0).into()
    }

    /// Scale by a factor of 3 about the midpoint.
    pub fn scale_by_3(&mut self) {
        self.scale_about_mid_point(SCALE_FACTOR);
    }

    /// Copy of this rectangle scaled by a factor of 3 about its midpoint.
    pub fn scaled_by_3(&self) -> Self {
        let mut scaled = self.clone();
        scaled.scale_by_3();
        scaled
    }

    /// Scale in place by `factor`, keeping the midpoint fixed.
    ///
    /// The corner moves by `(factor - 1) / 2` of the pre-scale extents, so it
    /// must be computed before the extents change. For a factor of 3 this is
    /// exactly the old length and height.
    pub fn scale_about_mid_point(&mut self, factor: f64) {
        let size = self.size();
        let shift = size * ((factor - 1.0) / 2.0);
        let scaled = size * factor;

        self.bottom_left = (DVec2::from(self.bottom_left) - shift).into();
        self.length = scaled.x;
        self.height = scaled.y;
    }

    /// Snapshot of the location, extents and derived values.
    pub fn summary(&self) -> Summary {
        Summary {
            location: self.bottom_left,
            length: self.length,
            height: self.height,
            area: self.area(),
            perimeter: self.perimeter(),
            mid_point: self.mid_point(),
        }
    }

    fn size(&self) -> DVec2 {
        DVec2::new(self.length, self.height)
    }
}

/// Read-only report of a rectangle's geometry at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub location: Point,
    pub length: f64,
    pub height: f64,
    pub area: f64,
    pub perimeter: f64,
    pub mid_point: Point,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Location is {}, Length is {}, Height is {}, Area is {}, Perimeter is {}, Midpoint is located at {}",
            self.location,
            format_g(self.length),
            format_g(self.height),
            format_g(self.area),
            format_g(self.perimeter),
            self.mid_point,
        )
    }
}
