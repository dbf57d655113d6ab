//! Sealed trait marker for Transport implementations.
//!
//! Keeps the `Transport` trait closed so every implementation applies the same endpoint
//! checks before credentials leave the process.

pub(crate) mod private {
    /// Sealed trait marker.
    pub trait Sealed {}
}
