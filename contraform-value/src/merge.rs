//! Structural merge policy for [`Value`].

use contraform::StructuralMerge;

use crate::value::Value;

/// Right-biased, recursive merge.
///
/// Two objects merge key-wise: keys unique to either side are kept, and
/// keys present on both sides recurse. Every other pairing resolves to
/// the right operand, arrays included; element-wise array merging is
/// never attempted.
impl StructuralMerge for Value {
    fn merge(self, right: Self) -> Self {
        match (self, right) {
            (Value::Object(mut merged), Value::Object(incoming)) => {
                for (key, value) in incoming {
                    let value = match merged.remove(&key) {
                        Some(existing) => existing.merge(value),
                        None => value,
                    };
                    merged.insert(key, value);
                }
                Value::Object(merged)
            }
            (_, right) => right,
        }
    }
}
