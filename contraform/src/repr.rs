//! Capability contracts connecting the algebra to a concrete target
//! representation.
//!
//! The structural combinators never name a concrete output type. Instead
//! they require the target to know how to build the handful of structural
//! forms they emit ([`Repr`]) and, for intersections, how to fuse two
//! fragments into one ([`StructuralMerge`]). Embedders implement these two
//! traits once per representation; `contraform-value` ships a JSON-like
//! reference implementation.

/// Constructors a structural target representation must provide.
///
/// Role
/// - `null` and `undefined` are the two sentinels: `null` is the encoding
///   of an explicitly-null input, `undefined` marks an object key that is
///   present but carries no value (a deliberately distinct state from the
///   key being absent).
/// - `object` builds a keyed aggregate from an ordered sequence of
///   entries. When the same key occurs more than once, the later entry
///   wins; combinators rely on this being deterministic.
/// - `sequence` builds an ordered aggregate, preserving length and order.
pub trait Repr: Sized {
    /// The explicit-null form.
    fn null() -> Self;

    /// The present-but-undefined sentinel used for optional object keys.
    fn undefined() -> Self;

    /// Build a keyed aggregate from `(key, value)` entries, in order.
    fn object<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Self)>;

    /// Build an ordered aggregate from a sequence of values.
    fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>;
}

/// The structural-merge capability consumed by
/// [`intersection`](crate::combinator::intersection).
///
/// `merge(x, y)` must produce a value containing every key present in `x`
/// or `y`. How colliding keys resolve (which side wins, and whether nested
/// aggregates merge recursively) is owned by the implementation and must be
/// documented there; the intersection combinator itself fixes no policy.
pub trait StructuralMerge {
    /// Fuse two fragments, keeping the union of their structure.
    fn merge(self, right: Self) -> Self;
}
