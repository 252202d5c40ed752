//! A ready-made dynamic target for contraform encoders.
//!
//! The [`Value`] enum is a JSON-like representation implementing both
//! capabilities the structural combinators ask of a target: construction
//! through [`contraform::Repr`] and intersection through
//! [`contraform::StructuralMerge`]. Leaf encoders for the terminal
//! variants live in [`leaf`].
//!
//! Merge policy
//!  - Intersection outputs merge right-biased and recursively: objects
//!    union their keys, colliding objects recurse, and any other
//!    collision keeps the right branch's value.
//!
//! Example
//! ```
//! use contraform::prelude::*;
//! use contraform_value::{Value, leaf};
//!
//! struct User {
//!     name: String,
//!     admin: bool,
//!     karma: Option<i64>,
//! }
//!
//! let user = shape([
//!     field("name", |u: &User| &u.name, leaf::string()),
//!     field("admin", |u: &User| &u.admin, leaf::boolean()),
//!     field("karma", |u: &User| &u.karma, nullable(leaf::integer())),
//! ]);
//!
//! let out = user.encode(&User {
//!     name: "ada".into(),
//!     admin: true,
//!     karma: None,
//! });
//! assert_eq!(out.get("name").and_then(Value::as_str), Some("ada"));
//! assert_eq!(out.get("karma"), Some(&Value::Null));
//! ```

/// Leaf encoders producing [`Value`] terminals.
pub mod leaf;
mod merge;
mod value;

pub use value::Value;
