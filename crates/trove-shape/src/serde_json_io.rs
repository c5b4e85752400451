//! JSON round-trips for shapes.
//!
//! Deserialization doubles as the runtime exhaustiveness guard: a `kind`
//! tag outside the closed set is rejected with a structured error, never
//! mapped to a default shape or value.

use trove_core::{ErrorInfo, TroveError};

use crate::shape::Shape;

/// Serializes a shape to its tagged JSON form.
pub fn to_json(shape: &Shape) -> Result<String, TroveError> {
    serde_json::to_string(shape)
        .map_err(|err| serde_error("shape-encode", "failed to encode shape", err))
}

/// Decodes a shape from tagged JSON, validating its dimensions.
pub fn from_json(data: &str) -> Result<Shape, TroveError> {
    let shape: Shape = serde_json::from_str(data)
        .map_err(|err| serde_error("malformed-shape", "failed to decode shape", err))?;
    shape.validate()?;
    Ok(shape)
}

fn serde_error(code: &str, message: &str, err: serde_json::Error) -> TroveError {
    TroveError::Serde(ErrorInfo::new(code, message).with_context("detail", err))
}
