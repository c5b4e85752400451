//! Pure per-variant metrics.
//!
//! Both functions dispatch with a total `match` and no default arm, so
//! adding a variant to [`Shape`] without extending them is a compile
//! error rather than a silent numeric default.

use std::f64::consts::PI;

use crate::shape::Shape;

impl Shape {
    /// Returns the area of the shape.
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => PI * radius * radius,
            Shape::Rectangle { width, height } => width * height,
            Shape::Triangle { base, height } => 0.5 * base * height,
        }
    }

    /// Returns the perimeter of the shape.
    ///
    /// The triangle arm treats `base` and `height` as the legs of a right
    /// triangle and derives the hypotenuse as `sqrt(base^2 + height^2)`.
    /// For a general triangle the true perimeter would need the third
    /// side as explicit input; this limitation is kept deliberately.
    pub fn perimeter(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => 2.0 * PI * radius,
            Shape::Rectangle { width, height } => 2.0 * (width + height),
            Shape::Triangle { base, height } => base + height + base.hypot(height),
        }
    }
}
