//! Leaf encoders producing [`Value`] terminals.

use contraform::{Encoder, constant, id};

use crate::value::Value;

/// Encodes an `i64` as [`Value::Int`].
pub fn integer() -> Encoder<Value, i64> {
    Encoder::new(|n: &i64| Value::Int(*n))
}

/// Encodes an `f64` as [`Value::Float`].
pub fn float() -> Encoder<Value, f64> {
    Encoder::new(|x: &f64| Value::Float(*x))
}

/// Encodes a `bool` as [`Value::Bool`].
pub fn boolean() -> Encoder<Value, bool> {
    Encoder::new(|b: &bool| Value::Bool(*b))
}

/// Encodes a `String` as [`Value::Str`].
pub fn string() -> Encoder<Value, String> {
    Encoder::new(|s: &String| Value::Str(s.clone()))
}

/// Passes an already-built [`Value`] through unchanged.
pub fn raw() -> Encoder<Value, Value> {
    id()
}

/// Emits a fixed string regardless of input.
///
/// The usual way to stamp a discriminant field into the members of a
/// tagged union.
pub fn tag<A: 'static>(label: impl Into<String>) -> Encoder<Value, A> {
    constant(Value::Str(label.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_wrap_their_variant() {
        assert_eq!(integer().encode(&7), Value::Int(7));
        assert_eq!(float().encode(&0.5), Value::Float(0.5));
        assert_eq!(boolean().encode(&true), Value::Bool(true));
        assert_eq!(string().encode(&String::from("s")), Value::Str(String::from("s")));
        assert_eq!(raw().encode(&Value::Null), Value::Null);
    }

    #[test]
    fn tag_ignores_its_input() {
        let kind: Encoder<Value, i64> = tag("circle");
        assert_eq!(kind.encode(&1), Value::Str(String::from("circle")));
        assert_eq!(kind.encode(&-9), Value::Str(String::from("circle")));
    }
}
