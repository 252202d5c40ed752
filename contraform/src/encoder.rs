//! The core encoder abstraction and its identity/adaptation algebra.
//!
//! Role
//! - [`Encoder`] wraps a single pure, total transform from a borrowed input
//!   value to an owned target representation.
//! - [`id`] is the neutral element: it emits the input unchanged.
//! - [`Encoder::contramap`] adapts the input side, [`Encoder::compose`]
//!   chains two encoders end-to-end. Together they satisfy the usual
//!   contravariant-functor and category laws (see the crate tests).
//!
//! Performance
//! - An encoder is one `Arc` around the transform; cloning is a reference
//!   count bump, and no combinator allocates while encoding beyond what the
//!   target representation itself requires.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

// Alias the shared transform type to satisfy clippy's type_complexity lint.
type Transform<O, A> = Arc<dyn Fn(&A) -> O + Send + Sync>;

/// A pure, total transform from values of type `A` to a target
/// representation `O`.
///
/// Role
/// - The one operation is [`encode`](Self::encode): borrow an `A`, produce
///   an owned `O`. Encoding never fails, never blocks, and never observes
///   anything but its argument; validating malformed data is a decoder's
///   job, not an encoder's.
/// - Encoders are immutable values. They are built once, typically at
///   schema-definition time, then shared freely: [`Clone`] is cheap and the
///   wrapped transform is `Send + Sync`, so one encoder may serve many
///   threads at once.
///
/// Equality semantics
/// - Two encoders are interchangeable exactly when their transforms agree
///   on every input. There is no structural identity beyond that, which is
///   why `Encoder` implements neither `PartialEq` nor `Hash`.
///
/// Example
/// ```
/// use contraform::Encoder;
///
/// let celsius: Encoder<String, f64> = Encoder::new(|c: &f64| format!("{c:.1} C"));
/// assert_eq!(celsius.encode(&21.5), "21.5 C");
///
/// // Adapt the input side: accept Fahrenheit, reuse the Celsius encoder.
/// let fahrenheit = celsius.contramap(|f: &f64| (f - 32.0) * 5.0 / 9.0);
/// assert_eq!(fahrenheit.encode(&212.0), "100.0 C");
/// ```
pub struct Encoder<O, A> {
    transform: Transform<O, A>,
}

impl<O, A> Encoder<O, A> {
    /// Wrap a transform function into an encoder.
    ///
    /// The function must be pure and total for every well-typed input: no
    /// observable side effects, no failure path. Nothing enforces this, but
    /// every law and combinator in this crate assumes it.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(&A) -> O + Send + Sync + 'static,
    {
        Encoder {
            transform: Arc::new(transform),
        }
    }

    /// Run the transform on a borrowed input, producing an owned output.
    #[inline]
    pub fn encode(&self, input: &A) -> O {
        (self.transform)(input)
    }
}

impl<O: 'static, A: 'static> Encoder<O, A> {
    /// Adapt this encoder to a different input type by preprocessing.
    ///
    /// The returned encoder transforms `b` as `self.encode(&adapt(b))`.
    /// Adapting with an identity function is observably a no-op, which is
    /// the contravariant-functor law this operation is named after.
    pub fn contramap<B, F>(self, adapt: F) -> Encoder<O, B>
    where
        B: 'static,
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        Encoder::new(move |input: &B| self.encode(&adapt(input)))
    }

    /// Chain this encoder with a second stage consuming its output.
    ///
    /// The returned encoder transforms `a` as `next.encode(&self.encode(a))`.
    /// Chaining is associative, and chaining with [`id`] on either side is
    /// observably a no-op; together with [`id`] this gives encoders a
    /// category structure.
    ///
    /// Example
    /// ```
    /// use contraform::{Encoder, id};
    ///
    /// let double: Encoder<i64, i64> = Encoder::new(|n: &i64| n * 2);
    /// let render: Encoder<String, i64> = Encoder::new(|n: &i64| n.to_string());
    /// assert_eq!(double.compose(render).encode(&21), "42");
    /// ```
    pub fn compose<E: 'static>(self, next: Encoder<E, O>) -> Encoder<E, A> {
        Encoder::new(move |input: &A| next.encode(&self.encode(input)))
    }

    /// Adapt this encoder to accept any smart pointer to its input type.
    ///
    /// The output is unchanged; only the input side moves behind a `Deref`.
    /// Useful when schema nodes are shared (`Arc<A>`, `Box<A>`, `Rc<A>`)
    /// rather than stored inline.
    pub fn via_deref<D>(self) -> Encoder<O, D>
    where
        D: Deref<Target = A> + 'static,
    {
        Encoder::new(move |input: &D| self.encode(input))
    }
}

impl<O, A> Clone for Encoder<O, A> {
    fn clone(&self) -> Self {
        Encoder {
            transform: Arc::clone(&self.transform),
        }
    }
}

impl<O, A> fmt::Debug for Encoder<O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder").finish_non_exhaustive()
    }
}

/// The identity encoder: emits its input unchanged.
///
/// This is the neutral element for [`Encoder::compose`]. `Clone` is
/// required because encoders borrow their input and hand back an owned
/// output; a clone of a value is observably that value.
#[inline]
pub fn id<A: Clone + 'static>() -> Encoder<A, A> {
    Encoder::new(|input: &A| input.clone())
}

/// An encoder that ignores its input and emits a fixed output.
///
/// Mostly used to stamp discriminant tag fields into object shapes, where
/// the emitted value is known at schema-definition time.
///
/// Example
/// ```
/// use contraform::constant;
///
/// let tag = constant::<&'static str, i64>("circle");
/// assert_eq!(tag.encode(&7), "circle");
/// assert_eq!(tag.encode(&-3), "circle");
/// ```
#[inline]
pub fn constant<O, A>(output: O) -> Encoder<O, A>
where
    O: Clone + Send + Sync + 'static,
    A: 'static,
{
    Encoder::new(move |_: &A| output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double() -> Encoder<i64, i64> {
        Encoder::new(|n: &i64| n * 2)
    }

    #[test]
    fn identity_is_observably_the_input() {
        for x in [-3_i64, 0, 1, 42, i64::MAX] {
            assert_eq!(id::<i64>().encode(&x), x);
        }
        let s = String::from("unchanged");
        assert_eq!(id::<String>().encode(&s), s);
    }

    #[test]
    fn compose_with_id_is_a_no_op() {
        for x in [-5_i64, 0, 7] {
            assert_eq!(double().compose(id()).encode(&x), double().encode(&x));
            assert_eq!(id().compose(double()).encode(&x), double().encode(&x));
        }
    }

    #[test]
    fn contramap_preprocesses_the_input() {
        let parse_len = id::<usize>().contramap(|s: &String| s.len());
        assert_eq!(parse_len.encode(&String::from("four")), 4);
    }

    #[test]
    fn via_deref_reuses_the_inner_transform() {
        let boxed = double().via_deref::<Box<i64>>();
        assert_eq!(boxed.encode(&Box::new(21)), 42);

        let shared = double().via_deref::<std::sync::Arc<i64>>();
        assert_eq!(shared.encode(&std::sync::Arc::new(8)), 16);
    }

    #[test]
    fn constant_ignores_its_input() {
        let unit = constant::<&'static str, String>("fixed");
        assert_eq!(unit.encode(&String::from("a")), "fixed");
        assert_eq!(unit.encode(&String::new()), "fixed");
    }

    #[test]
    fn cloned_encoders_share_one_transform() {
        let original = double();
        let clone = original.clone();
        assert_eq!(original.encode(&10), clone.encode(&10));
    }
}
