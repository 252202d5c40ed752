//! Deferred encoder construction.
//!
//! [`lazy`] breaks definition cycles for recursive shapes: the builder
//! closure runs at most once, on the first encode, and the built encoder
//! is cached for every later call on any thread.

use once_cell::sync::OnceCell;

use crate::encoder::Encoder;

/// Defer construction of an encoder until it is first used.
///
/// The builder must not force the encoder it is building; recursive
/// definitions instead call their own constructor inside the builder,
/// which creates a fresh unforced cell for the next depth level.
///
/// Example
/// ```
/// use contraform::combinator::lazy;
/// use contraform::Encoder;
///
/// struct Chain {
///     label: String,
///     next: Option<Box<Chain>>,
/// }
///
/// fn chain() -> Encoder<String, Chain> {
///     lazy(|| {
///         let rest = chain();
///         Encoder::new(move |node: &Chain| match &node.next {
///             None => node.label.clone(),
///             Some(next) => format!("{} -> {}", node.label, rest.encode(next)),
///         })
///     })
/// }
///
/// let tail = Chain { label: String::from("b"), next: None };
/// let head = Chain { label: String::from("a"), next: Some(Box::new(tail)) };
/// assert_eq!(chain().encode(&head), "a -> b");
/// ```
pub fn lazy<O, A, F>(builder: F) -> Encoder<O, A>
where
    O: 'static,
    A: 'static,
    F: Fn() -> Encoder<O, A> + Send + Sync + 'static,
{
    let cell: OnceCell<Encoder<O, A>> = OnceCell::new();
    Encoder::new(move |input: &A| {
        let inner = cell.get_or_init(|| {
            log::trace!("building deferred encoder");
            builder()
        });
        inner.encode(input)
    })
}
