#![deny(missing_docs)]
#![doc = "Generic in-memory store with predicate-driven CRUD over an ordered sequence."]

//! The store owns its elements exclusively and preserves insertion order.
//! Absence is always reported by value (`Option` / `bool`), never by
//! panicking or returning an error; callers check the result.

mod store;

pub use store::Store;
