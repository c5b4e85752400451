#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the trove crates."]

pub mod errors;
pub mod response;
mod traits;

pub use errors::{ErrorInfo, TroveError};
pub use response::ApiResponse;
pub use traits::{HasId, Patchable};
