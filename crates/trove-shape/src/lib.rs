#![deny(missing_docs)]
#![doc = "Closed tagged-variant shape type with exhaustive area and perimeter dispatch."]

mod metrics;
mod serde_json_io;
mod shape;

pub use serde_json_io::{from_json, to_json};
pub use shape::Shape;
