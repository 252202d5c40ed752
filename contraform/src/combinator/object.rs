//! Object-shaped combinators: fixed-key and optional-key property maps.
//!
//! Role
//! - [`shape`] encodes a fixed set of declared keys, nothing more: keys the
//!   input happens to carry beyond the declaration are never read.
//! - [`partial_shape`] encodes keys that may be absent. Absence and
//!   explicit undefined-ness are distinct, observable states (see
//!   [`Presence`]): an absent key is omitted from the output entirely,
//!   while a present-but-undefined key is emitted with the target's
//!   undefined sentinel and its child encoder is never invoked.
//! - Both iterate their properties in declaration order, so the entries
//!   handed to the target are deterministic; when the target keeps the last
//!   duplicate entry, redeclaring a key therefore has last-wins semantics.

use smallvec::SmallVec;
use strum::EnumIs;

use crate::encoder::Encoder;
use crate::repr::Repr;

// Inline capacity for assembling object entries before handing them to the
// target; typical shapes fit without spilling to the heap.
const INLINE_FIELDS: usize = 8;

/// One declared property of a [`shape`]: a key plus an encoder for the
/// whole aggregate value.
///
/// The encoder receives the entire input, not just one field of it; the
/// [`field`] helper is the usual way to build one, fusing a borrowing
/// accessor with an encoder for the field's own type.
pub struct Field<J, A> {
    name: String,
    encoder: Encoder<J, A>,
}

impl<J, A> Field<J, A> {
    /// Declare a property from a key and a whole-value encoder.
    pub fn new(name: impl Into<String>, encoder: Encoder<J, A>) -> Self {
        Field {
            name: name.into(),
            encoder,
        }
    }

    /// The declared key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Declare a [`shape`] property by key, borrowing accessor, and an encoder
/// for the accessed part.
///
/// Example
/// ```
/// use contraform::combinator::field;
/// use contraform::Encoder;
///
/// struct User {
///     name: String,
/// }
///
/// let name_field = field(
///     "name",
///     |u: &User| &u.name,
///     Encoder::new(|s: &String| s.to_uppercase()),
/// );
/// assert_eq!(name_field.name(), "name");
/// ```
pub fn field<J, A, B, F>(name: impl Into<String>, access: F, encoder: Encoder<J, B>) -> Field<J, A>
where
    F: for<'a> Fn(&'a A) -> &'a B + Send + Sync + 'static,
    J: 'static,
    A: 'static,
    B: 'static,
{
    Field::new(
        name,
        Encoder::new(move |whole: &A| encoder.encode(access(whole))),
    )
}

/// Encode a fixed-key object from its declared properties.
///
/// Every declared key is emitted on every encode, in declaration order;
/// nothing else on the input is ever read. Declaring the same key twice is
/// a construction bug (checked by a `debug_assert!`).
pub fn shape<J, A>(properties: impl IntoIterator<Item = Field<J, A>>) -> Encoder<J, A>
where
    J: Repr + 'static,
    A: 'static,
{
    let properties: Vec<Field<J, A>> = properties.into_iter().collect();
    debug_assert!(
        distinct_names(properties.iter().map(Field::name)),
        "shape declared with a duplicate field name"
    );

    Encoder::new(move |input: &A| {
        let entries: SmallVec<[(String, J); INLINE_FIELDS]> = properties
            .iter()
            .map(|property| (property.name.clone(), property.encoder.encode(input)))
            .collect();
        J::object(entries)
    })
}

/// Presence of an optional object key on the input side.
///
/// The three states are deliberately distinct: a key can be missing
/// altogether, present with no value, or present with a value. Optional
/// encoders preserve this distinction instead of collapsing it, because
/// round-tripping representations that tell "key omitted" apart from "key
/// explicitly undefined" depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIs)]
pub enum Presence<T> {
    /// The key is not on the input at all; it is omitted from the output.
    Absent,
    /// The key is on the input with no value; the output carries the
    /// target's undefined sentinel and no child encoder runs.
    Undefined,
    /// The key is on the input with a value, encoded as usual.
    Present(T),
}

impl<T> Presence<T> {
    /// Borrowing view of the carried value, keeping the state.
    #[inline]
    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Presence::Absent => Presence::Absent,
            Presence::Undefined => Presence::Undefined,
            Presence::Present(value) => Presence::Present(value),
        }
    }
}

/// `Some` maps to `Present`, `None` to `Absent`. Inputs modeled with plain
/// `Option` fields never produce the undefined state.
impl<T> From<Option<T>> for Presence<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Presence::Present(value),
            None => Presence::Absent,
        }
    }
}

// Project one optional property of `A` straight to its encoded state.
type OptionalProjection<J, A> = Box<dyn Fn(&A) -> Presence<J> + Send + Sync>;

/// One declared property of a [`partial_shape`]: a key plus a projection
/// reporting, per input, whether the key is absent, undefined, or present
/// (already encoded). Built with [`optional_field`].
pub struct OptionalField<J, A> {
    name: String,
    project: OptionalProjection<J, A>,
}

impl<J, A> OptionalField<J, A> {
    /// The declared key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Declare a [`partial_shape`] property by key, presence accessor, and an
/// encoder for the value carried when present.
///
/// The accessor reports the key's [`Presence`] on a given input; the
/// encoder runs only for `Present` values.
pub fn optional_field<J, A, B, F>(
    name: impl Into<String>,
    access: F,
    encoder: Encoder<J, B>,
) -> OptionalField<J, A>
where
    F: for<'a> Fn(&'a A) -> Presence<&'a B> + Send + Sync + 'static,
    J: 'static,
    A: 'static,
    B: 'static,
{
    OptionalField {
        name: name.into(),
        project: Box::new(move |whole: &A| match access(whole) {
            Presence::Absent => Presence::Absent,
            Presence::Undefined => Presence::Undefined,
            Presence::Present(part) => Presence::Present(encoder.encode(part)),
        }),
    }
}

/// Encode an optional-key object from its declared properties.
///
/// Keys reported [`Presence::Absent`] are omitted from the output
/// entirely; keys reported [`Presence::Undefined`] are emitted carrying
/// the target's undefined sentinel, untouched by any child encoder. An
/// input with no declared key present encodes to an empty object.
pub fn partial_shape<J, A>(
    properties: impl IntoIterator<Item = OptionalField<J, A>>,
) -> Encoder<J, A>
where
    J: Repr + 'static,
    A: 'static,
{
    let properties: Vec<OptionalField<J, A>> = properties.into_iter().collect();
    debug_assert!(
        distinct_names(properties.iter().map(OptionalField::name)),
        "partial shape declared with a duplicate field name"
    );

    Encoder::new(move |input: &A| {
        let mut entries: SmallVec<[(String, J); INLINE_FIELDS]> = SmallVec::new();
        for property in &properties {
            match (property.project)(input) {
                Presence::Absent => {}
                Presence::Undefined => entries.push((property.name.clone(), J::undefined())),
                Presence::Present(encoded) => entries.push((property.name.clone(), encoded)),
            }
        }
        J::object(entries)
    })
}

fn distinct_names<'a>(names: impl Iterator<Item = &'a str>) -> bool {
    let mut seen: Vec<&str> = Vec::new();
    for name in names {
        if seen.contains(&name) {
            return false;
        }
        seen.push(name);
    }
    true
}
