//! Fixed-arity heterogeneous tuple combinator.
//!
//! A tuple encoder carries one component encoder per position; the arity
//! is fixed by the component family at construction time and the output
//! sequence mirrors positions exactly. Arities 1 through 8 are provided.

use smallvec::SmallVec;

use crate::encoder::Encoder;
use crate::repr::Repr;

// Inline capacity matching the largest supported arity.
const MAX_ARITY: usize = 8;

mod sealed {
    pub trait Sealed {}
}

/// A family of positional component encoders driving [`tuple`].
///
/// Implemented for tuples of [`Encoder`]s sharing one target, from
/// `(Encoder<J, A0>,)` up to arity 8. Sealed: positions and arity are
/// meaningful only for the tuple forms provided here.
pub trait TupleEncode<J>: sealed::Sealed {
    /// The tuple type the components jointly encode.
    type Input;

    /// Encode each position of `input` into `out`, in positional order.
    fn encode_components(&self, input: &Self::Input, out: &mut SmallVec<[J; MAX_ARITY]>);
}

/// Encode a fixed-arity tuple, one component encoder per position.
///
/// `encode(&(a0, a1, ..))` emits the sequence
/// `[c0.encode(&a0), c1.encode(&a1), ..]`; length and order always equal
/// the arity.
///
/// Example
/// ```
/// use contraform::combinator::tuple;
/// use contraform::{Encoder, Repr};
///
/// #[derive(Debug, PartialEq)]
/// enum Out {
///     Text(String),
///     Seq(Vec<Out>),
/// }
///
/// impl Repr for Out {
///     fn null() -> Self {
///         Out::Text("null".into())
///     }
///     fn undefined() -> Self {
///         Out::Text("undefined".into())
///     }
///     fn object<I: IntoIterator<Item = (String, Out)>>(_: I) -> Self {
///         unimplemented!("not exercised here")
///     }
///     fn sequence<I: IntoIterator<Item = Out>>(items: I) -> Self {
///         Out::Seq(items.into_iter().collect())
///     }
/// }
///
/// let pair = tuple((
///     Encoder::new(|n: &i64| Out::Text(n.to_string())),
///     Encoder::new(|s: &String| Out::Text(s.clone())),
/// ));
/// assert_eq!(
///     pair.encode(&(1, String::from("x"))),
///     Out::Seq(vec![Out::Text("1".into()), Out::Text("x".into())])
/// );
/// ```
pub fn tuple<J, T>(components: T) -> Encoder<J, T::Input>
where
    J: Repr + 'static,
    T: TupleEncode<J> + Send + Sync + 'static,
{
    Encoder::new(move |input: &T::Input| {
        let mut out: SmallVec<[J; MAX_ARITY]> = SmallVec::new();
        components.encode_components(input, &mut out);
        J::sequence(out)
    })
}

// One impl per arity; positions are spelled out so the expansion stays a
// plain field access.
macro_rules! impl_tuple_encode {
    ($( ( $($part:ident . $idx:tt),+ ) );+ $(;)?) => {
        $(
            impl<J, $($part),+> sealed::Sealed for ($(Encoder<J, $part>,)+) {}

            impl<J, $($part),+> TupleEncode<J> for ($(Encoder<J, $part>,)+) {
                type Input = ($($part,)+);

                fn encode_components(
                    &self,
                    input: &Self::Input,
                    out: &mut SmallVec<[J; MAX_ARITY]>,
                ) {
                    $( out.push(self.$idx.encode(&input.$idx)); )+
                }
            }
        )+
    };
}

impl_tuple_encode! {
    (A0.0);
    (A0.0, A1.1);
    (A0.0, A1.1, A2.2);
    (A0.0, A1.1, A2.2, A3.3);
    (A0.0, A1.1, A2.2, A3.3, A4.4);
    (A0.0, A1.1, A2.2, A3.3, A4.4, A5.5);
    (A0.0, A1.1, A2.2, A3.3, A4.4, A5.5, A6.6);
    (A0.0, A1.1, A2.2, A3.3, A4.4, A5.5, A6.6, A7.7);
}
