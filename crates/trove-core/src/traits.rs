use std::fmt::Debug;

/// Constraint for records carrying a numeric identifier.
///
/// The store itself imposes no identity model; this trait lets callers
/// opt into id-keyed convenience lookups. Uniqueness of the id remains a
/// caller-level invariant.
pub trait HasId {
    /// Returns the record's identifier.
    fn id(&self) -> u64;
}

/// Partial in-place update of a record.
///
/// `Patch` is a companion type whose fields are `Option`s mirroring the
/// record's fields; [`Patchable::apply_patch`] overwrites exactly the
/// fields present in the patch and leaves the rest untouched.
pub trait Patchable {
    /// The partial-update companion type.
    type Patch: Debug;

    /// Merges the provided patch into `self`.
    fn apply_patch(&mut self, patch: Self::Patch);
}
