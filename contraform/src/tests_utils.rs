//! Miniature target representation shared by the unit tests.
//!
//! Small on purpose: just enough variants to observe what the structural
//! combinators emit, with a right-biased merge for intersection tests.

use std::collections::BTreeMap;

use crate::encoder::Encoder;
use crate::repr::{Repr, StructuralMerge};

#[derive(Debug, Clone, PartialEq)]
pub enum MiniValue {
    Null,
    Undefined,
    Int(i64),
    Text(String),
    Seq(Vec<MiniValue>),
    Map(BTreeMap<String, MiniValue>),
}

impl Repr for MiniValue {
    fn null() -> Self {
        MiniValue::Null
    }

    fn undefined() -> Self {
        MiniValue::Undefined
    }

    fn object<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Self)>,
    {
        MiniValue::Map(entries.into_iter().collect())
    }

    fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        MiniValue::Seq(items.into_iter().collect())
    }
}

impl StructuralMerge for MiniValue {
    fn merge(self, right: Self) -> Self {
        match (self, right) {
            (MiniValue::Map(mut merged), MiniValue::Map(incoming)) => {
                for (key, value) in incoming {
                    let value = match merged.remove(&key) {
                        Some(existing) => existing.merge(value),
                        None => value,
                    };
                    merged.insert(key, value);
                }
                MiniValue::Map(merged)
            }
            (_, right) => right,
        }
    }
}

pub fn int() -> Encoder<MiniValue, i64> {
    Encoder::new(|n: &i64| MiniValue::Int(*n))
}

pub fn text() -> Encoder<MiniValue, String> {
    Encoder::new(|s: &String| MiniValue::Text(s.clone()))
}
