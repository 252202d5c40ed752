//! Combinators lifting component encoders into aggregate encoders.
//!
//! Role
//! - Each combinator mirrors one structural form of the data being
//!   encoded: optional values ([`nullable`]), fixed-key objects
//!   ([`shape`]), optional-key objects ([`partial_shape`]), arbitrary-key
//!   mappings ([`dictionary`]), homogeneous sequences ([`array`]),
//!   fixed-arity heterogeneous sequences ([`tuple`]), fused fragments
//!   ([`intersection`]), closed tagged unions ([`sum`]), and
//!   self-referential schemas ([`lazy`]).
//! - A typed input value flows down the combinator tree exactly once; each
//!   node invokes its children and assembles the aggregate output. There is
//!   no feedback path, no state, and no failure path.
//!
//! Example: a fixed shape with a nested array
//! ```
//! use std::collections::BTreeMap;
//! use contraform::prelude::*;
//!
//! // A minimal in-tree target representation for the example.
//! #[derive(Debug, Clone, PartialEq)]
//! enum Out {
//!     Null,
//!     Undefined,
//!     Int(i64),
//!     Seq(Vec<Out>),
//!     Map(BTreeMap<String, Out>),
//! }
//!
//! impl Repr for Out {
//!     fn null() -> Self {
//!         Out::Null
//!     }
//!     fn undefined() -> Self {
//!         Out::Undefined
//!     }
//!     fn object<I: IntoIterator<Item = (String, Out)>>(entries: I) -> Self {
//!         Out::Map(entries.into_iter().collect())
//!     }
//!     fn sequence<I: IntoIterator<Item = Out>>(items: I) -> Self {
//!         Out::Seq(items.into_iter().collect())
//!     }
//! }
//!
//! struct Reading {
//!     id: i64,
//!     samples: Vec<i64>,
//! }
//!
//! let int = || Encoder::new(|n: &i64| Out::Int(*n));
//! let reading = shape([
//!     field("id", |r: &Reading| &r.id, int()),
//!     field("samples", |r: &Reading| &r.samples, array(int())),
//! ]);
//!
//! let out = reading.encode(&Reading { id: 7, samples: vec![1, 2] });
//! assert_eq!(
//!     out,
//!     Out::Map(BTreeMap::from([
//!         ("id".into(), Out::Int(7)),
//!         ("samples".into(), Out::Seq(vec![Out::Int(1), Out::Int(2)])),
//!     ]))
//! );
//! ```

pub mod lazy;
pub mod object;
pub mod tuple;
pub mod union;

pub use lazy::lazy;
pub use object::{Field, OptionalField, Presence, field, optional_field, partial_shape, shape};
pub use tuple::{TupleEncode, tuple};
pub use union::sum;

use std::collections::BTreeMap;

use crate::encoder::Encoder;
use crate::repr::{Repr, StructuralMerge};

/// Lift an encoder over `A` to one over `Option<A>`.
///
/// `None` encodes to the target's null form without invoking `or`; any
/// present value delegates to `or` untouched.
pub fn nullable<J, A>(or: Encoder<J, A>) -> Encoder<J, Option<A>>
where
    J: Repr + 'static,
    A: 'static,
{
    Encoder::new(move |input: &Option<A>| match input {
        None => J::null(),
        Some(value) => or.encode(value),
    })
}

/// Encode every element of a vector with one `item` encoder.
///
/// Output length and order mirror the input exactly; an empty input yields
/// an empty sequence.
pub fn array<J, A>(item: Encoder<J, A>) -> Encoder<J, Vec<A>>
where
    J: Repr + 'static,
    A: 'static,
{
    Encoder::new(move |items: &Vec<A>| J::sequence(items.iter().map(|value| item.encode(value))))
}

/// Encode an arbitrary-keyed mapping with one `codomain` encoder per value.
///
/// The input key set is preserved as-is (nothing is fixed at construction
/// time, unlike [`shape`]); `BTreeMap` iteration keeps the entry order
/// deterministic.
pub fn dictionary<J, A>(codomain: Encoder<J, A>) -> Encoder<J, BTreeMap<String, A>>
where
    J: Repr + 'static,
    A: 'static,
{
    Encoder::new(move |entries: &BTreeMap<String, A>| {
        J::object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), codomain.encode(value))),
        )
    })
}

/// Feed the same input through two encoders and fuse their outputs.
///
/// The result contains the union of the keys both branches produce; how
/// colliding keys resolve is owned by the target's
/// [`StructuralMerge`] implementation, not by this combinator.
pub fn intersection<J, A>(left: Encoder<J, A>, right: Encoder<J, A>) -> Encoder<J, A>
where
    J: StructuralMerge + 'static,
    A: 'static,
{
    Encoder::new(move |input: &A| left.encode(input).merge(right.encode(input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests_utils::{MiniValue, int};

    #[test]
    fn nullable_passes_null_through_without_encoding() {
        let enc = nullable(int());
        assert_eq!(enc.encode(&None), MiniValue::Null);
        assert_eq!(enc.encode(&Some(5)), MiniValue::Int(5));
    }

    #[test]
    fn array_preserves_length_and_order() {
        let enc = array(int());
        assert_eq!(
            enc.encode(&vec![1, 2, 3]),
            MiniValue::Seq(vec![
                MiniValue::Int(1),
                MiniValue::Int(2),
                MiniValue::Int(3)
            ])
        );
        assert_eq!(enc.encode(&vec![]), MiniValue::Seq(vec![]));
    }

    #[test]
    fn dictionary_preserves_the_input_key_set() {
        let enc = dictionary(int());
        let input = BTreeMap::from([(String::from("x"), 1_i64), (String::from("y"), 2)]);
        let MiniValue::Map(out) = enc.encode(&input) else {
            panic!("expected a map");
        };
        assert_eq!(
            out.keys().cloned().collect::<Vec<_>>(),
            vec![String::from("x"), String::from("y")]
        );
        assert_eq!(out["x"], MiniValue::Int(1));
        assert_eq!(out["y"], MiniValue::Int(2));
    }

    #[test]
    fn intersection_unions_the_keys_of_both_branches() {
        let left = shape([field("a", |n: &i64| n, int())]);
        let right = shape([field("b", |n: &i64| n, int())]);
        let both = intersection(left, right);

        let MiniValue::Map(out) = both.encode(&9) else {
            panic!("expected a map");
        };
        assert_eq!(out.len(), 2);
        assert_eq!(out["a"], MiniValue::Int(9));
        assert_eq!(out["b"], MiniValue::Int(9));
    }
}
