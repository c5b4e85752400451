use serde::{Deserialize, Serialize};

use trove_core::{ErrorInfo, TroveError};

/// Closed set of shape variants, discriminated by the `kind` tag.
///
/// Every instance carries exactly one tag and only that variant's fields;
/// the set is fixed, so dispatch over it is statically exhaustive. All
/// dimensions are positive reals; the checked constructors enforce that,
/// literal construction bypasses it (re-check with [`Shape::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Circle described by its radius.
    Circle {
        /// Radius, positive and finite.
        radius: f64,
    },
    /// Axis-aligned rectangle.
    Rectangle {
        /// Width, positive and finite.
        width: f64,
        /// Height, positive and finite.
        height: f64,
    },
    /// Right triangle described by its two legs.
    Triangle {
        /// Length of the base leg, positive and finite.
        base: f64,
        /// Length of the height leg, positive and finite.
        height: f64,
    },
}

impl Shape {
    /// Builds a validated circle.
    pub fn circle(radius: f64) -> Result<Self, TroveError> {
        check_dimension("radius", radius)?;
        Ok(Shape::Circle { radius })
    }

    /// Builds a validated rectangle.
    pub fn rectangle(width: f64, height: f64) -> Result<Self, TroveError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        Ok(Shape::Rectangle { width, height })
    }

    /// Builds a validated right triangle from its two legs.
    pub fn triangle(base: f64, height: f64) -> Result<Self, TroveError> {
        check_dimension("base", base)?;
        check_dimension("height", height)?;
        Ok(Shape::Triangle { base, height })
    }

    /// Returns the variant's tag string, matching the serialized `kind`.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Triangle { .. } => "triangle",
        }
    }

    /// Re-checks the dimension invariants on an already-built value.
    pub fn validate(&self) -> Result<(), TroveError> {
        match *self {
            Shape::Circle { radius } => check_dimension("radius", radius),
            Shape::Rectangle { width, height } => {
                check_dimension("width", width)?;
                check_dimension("height", height)
            }
            Shape::Triangle { base, height } => {
                check_dimension("base", base)?;
                check_dimension("height", height)
            }
        }
    }
}

fn check_dimension(field: &str, value: f64) -> Result<(), TroveError> {
    if !value.is_finite() {
        return Err(shape_error(
            "non-finite-dimension",
            "shape dimensions must be finite",
        )
        .with_context(field, value));
    }
    if value <= 0.0 {
        return Err(shape_error(
            "non-positive-dimension",
            "shape dimensions must be positive",
        )
        .with_context(field, value));
    }
    Ok(())
}

fn shape_error(code: impl Into<String>, message: impl Into<String>) -> TroveError {
    TroveError::Shape(ErrorInfo::new(code, message))
}

trait ContextExt {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> TroveError;
}

impl ContextExt for TroveError {
    fn with_context(self, key: impl Into<String>, value: impl ToString) -> TroveError {
        match self {
            TroveError::Shape(info) => TroveError::Shape(info.with_context(key, value)),
            other => other,
        }
    }
}
