//! Contraform: compositional, total encoders from typed values into a
//! chosen target representation.
//!
//! An encoder is a pure function from a borrowed input to an owned output.
//! There is no failure path and no validation step; inputs are already
//! well-typed, so every encoder answers for every input of its type.
//! Aggregate encoders are assembled from component encoders with the
//! combinators in [`combinator`], and the target representation stays
//! abstract behind [`Repr`] and [`StructuralMerge`] so one schema
//! definition can drive any structural output type.
//!
//! Laws
//!  - [`id`] emits a clone of its input and is neutral for
//!    [`Encoder::compose`] on both sides.
//!  - [`Encoder::compose`] is associative; [`Encoder::contramap`] with an
//!    identity function is observably a no-op.
//!  - Encoding never mutates the input and observes nothing but the input.
//!
//! Performance
//!  - Encoders are `Arc`-backed; cloning one shares the underlying
//!    transform instead of rebuilding it, so schemas can be reused freely.
//!  - Object and tuple assembly buffers use `smallvec` and keep up to 8
//!    entries inline before spilling to the heap.
//!
//! Example
//! ```
//! use contraform::{Encoder, id};
//!
//! struct User {
//!     name: String,
//! }
//!
//! // Contravariant on the input side, covariant on the output side.
//! let name: Encoder<String, User> = id::<String>().contramap(|user: &User| user.name.clone());
//! let shouted = name.compose(Encoder::new(|s: &String| s.to_uppercase()));
//! assert_eq!(shouted.encode(&User { name: "ada".into() }), "ADA");
//! ```

/// Combinators lifting component encoders into aggregate encoders.
pub mod combinator;
/// The encoder type and its contravariant core operations.
pub mod encoder;
/// Target-representation capabilities the structural combinators rely on.
pub mod repr;

pub use encoder::{Encoder, constant, id};
pub use repr::{Repr, StructuralMerge};

#[cfg(test)]
pub(crate) mod tests_utils;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - `Encoder` with its contravariant operations, plus `id` and `constant`
    //! - Every structural combinator and its supporting types
    //! - The `Repr` and `StructuralMerge` target capabilities
    pub use crate::encoder::{Encoder, constant, id};

    // Structural combinators
    pub use crate::combinator::{
        Field, OptionalField, Presence, TupleEncode, array, dictionary, field, intersection,
        lazy, nullable, optional_field, partial_shape, shape, sum, tuple,
    };

    // Target capabilities
    pub use crate::repr::{Repr, StructuralMerge};
}
