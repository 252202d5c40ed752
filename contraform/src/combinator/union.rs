//! Tagged sum combinator.
//!
//! A sum encoder owns one member encoder per discriminant value and
//! dispatches on the discriminant of the input before delegating. The
//! combinator never rewrites the member's output and never injects the
//! tag property itself; members that want the tag in their output encode
//! it as one of their own fields.

use std::collections::BTreeMap;

use crate::encoder::Encoder;

/// Encode a tagged union by delegating to the member selected by
/// `discriminant`.
///
/// `tag` names the discriminant property for diagnostics only. The
/// `discriminant` closure projects the tag value out of an input;
/// `members` associates every reachable tag value with the encoder for
/// that variant.
///
/// Panics when `discriminant` yields a value no member was registered
/// for. An input carrying an unregistered tag value is a construction
/// error in the caller, not data-dependent failure, so the panic is
/// deliberate rather than a fallback output.
///
/// Example
/// ```
/// use contraform::combinator::sum;
/// use contraform::Encoder;
///
/// enum Shape {
///     Circle { radius: f64 },
///     Rect { width: f64, height: f64 },
/// }
///
/// let encoder: Encoder<String, Shape> = sum(
///     "kind",
///     |shape: &Shape| match shape {
///         Shape::Circle { .. } => "circle",
///         Shape::Rect { .. } => "rect",
///     },
///     [
///         (
///             "circle",
///             Encoder::new(|shape: &Shape| match shape {
///                 Shape::Circle { radius } => format!("circle r={radius}"),
///                 _ => unreachable!("dispatched on the circle tag"),
///             }),
///         ),
///         (
///             "rect",
///             Encoder::new(|shape: &Shape| match shape {
///                 Shape::Rect { width, height } => format!("rect {width}x{height}"),
///                 _ => unreachable!("dispatched on the rect tag"),
///             }),
///         ),
///     ],
/// );
///
/// assert_eq!(encoder.encode(&Shape::Circle { radius: 2.0 }), "circle r=2");
/// ```
pub fn sum<J, A, D, K, M>(tag: impl Into<String>, discriminant: D, members: M) -> Encoder<J, A>
where
    J: 'static,
    A: 'static,
    D: for<'a> Fn(&'a A) -> &'a str + Send + Sync + 'static,
    K: Into<String>,
    M: IntoIterator<Item = (K, Encoder<J, A>)>,
{
    let tag = tag.into();
    let mut table: BTreeMap<String, Encoder<J, A>> = BTreeMap::new();
    for (value, member) in members {
        let value = value.into();
        let previous = table.insert(value.clone(), member);
        debug_assert!(
            previous.is_none(),
            "sum over tag {tag:?} registered two members for value {value:?}"
        );
    }

    Encoder::new(move |input: &A| {
        let value = discriminant(input);
        let Some(member) = table.get(value) else {
            log::error!("sum over tag {tag:?} has no member for value {value:?}");
            panic!("sum over tag {tag:?} has no member for value {value:?}");
        };
        member.encode(input)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Opened { by: String },
        Closed { code: i64 },
    }

    fn event_tag(event: &Event) -> &str {
        match event {
            Event::Opened { .. } => "opened",
            Event::Closed { .. } => "closed",
        }
    }

    fn event_encoder() -> Encoder<String, Event> {
        sum(
            "type",
            event_tag,
            [
                (
                    "opened",
                    Encoder::new(|event: &Event| match event {
                        Event::Opened { by } => format!("opened by {by}"),
                        other => panic!("opened member saw {other:?}"),
                    }),
                ),
                (
                    "closed",
                    Encoder::new(|event: &Event| match event {
                        Event::Closed { code } => format!("closed with {code}"),
                        other => panic!("closed member saw {other:?}"),
                    }),
                ),
            ],
        )
    }

    #[test]
    fn dispatches_on_the_discriminant() {
        let encoder = event_encoder();
        assert_eq!(
            encoder.encode(&Event::Opened {
                by: String::from("ada")
            }),
            "opened by ada"
        );
        assert_eq!(encoder.encode(&Event::Closed { code: 410 }), "closed with 410");
    }

    #[test]
    #[should_panic(expected = "has no member for value \"opened\"")]
    fn unregistered_discriminant_panics() {
        let encoder: Encoder<String, Event> = sum(
            "type",
            event_tag,
            [(
                "closed",
                Encoder::new(|_: &Event| String::from("closed")),
            )],
        );
        encoder.encode(&Event::Opened {
            by: String::from("ada"),
        });
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "registered two members")]
    fn duplicate_member_is_rejected() {
        let _ = sum(
            "type",
            event_tag,
            [
                ("opened", Encoder::new(|_: &Event| String::new())),
                ("opened", Encoder::new(|_: &Event| String::new())),
            ],
        );
    }
}
