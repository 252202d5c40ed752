//! The dynamic value type produced by the encoders in this crate.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs};

use contraform::Repr;

/// A JSON-like dynamic value.
///
/// Role
///  - Serves as the ready-made target representation for encoders: it
///    implements [`Repr`] for construction and
///    [`StructuralMerge`](contraform::StructuralMerge) for intersection.
///  - Objects keep their entries in a `BTreeMap`, so key order is always
///    deterministic regardless of how a shape was declared.
///
/// Equality semantics
///  - The derived `PartialEq` compares structurally. `Float` follows IEEE
///    comparison, so a NaN payload is unequal to itself; `Eq` is therefore
///    not implemented.
///
/// Example
/// ```
/// use contraform_value::Value;
///
/// let name: Value = "Alice".into();
/// let age: Value = 30i64.into();
/// assert_eq!(name.as_str(), Some("Alice"));
/// assert!(age.is_int());
///
/// let row: Value = [(String::from("name"), name), (String::from("age"), age)]
///     .into_iter()
///     .collect();
/// assert_eq!(row.to_string(), r#"{"age": 30, "name": "Alice"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// An explicit null.
    Null,
    /// A key that is present while its value is not. Distinct from
    /// [`Value::Null`]: partial shapes emit this for fields that exist in
    /// the input with no value attached.
    Undefined,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the string slice when the value is a [`Value::Str`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up `key` when the value is a [`Value::Object`].
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Returns the element at `index` when the value is a [`Value::Array`].
    #[inline]
    pub fn index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl Repr for Value {
    fn null() -> Self {
        Value::Null
    }

    fn undefined() -> Self {
        Value::Undefined
    }

    fn object<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Self)>,
    {
        Value::Object(entries.into_iter().collect())
    }

    fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Value::Array(items.into_iter().collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(items: I) -> Self {
        Value::Array(items.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(entries: I) -> Self {
        Value::Object(entries.into_iter().collect())
    }
}

/// Renders in a JSON-flavored notation for diagnostics. [`Value::Undefined`]
/// prints as the bare word `undefined`, so the output is not always valid
/// JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
