//! ObjUtil Core - object helpers for UI state comparison
//!
//! Small, non-destructive helpers over key-value mappings, aimed at deciding
//! whether a component needs to re-render:
//! - Shallow diff of two mappings by property name (`diff`)
//! - Key and value listing with exclusions (`keys`, `values`, `rest`)
//! - Richness-preserving property selection (`pick`)
//! - Deep conversion of rich mappings into plain data (`to_plain_deep`)
//!
//! Mappings are either plain (insertion-ordered maps) or rich (anything
//! implementing [`capability::RichMapping`], such as [`model::FrozenMap`]).
//!
//! ```
//! use objutil_core::model::Mapping;
//! use objutil_core::ops::{diff, Diff};
//! use serde_json::json;
//!
//! let props = Mapping::try_from(json!({"name": "a", "address": "x"})).unwrap();
//! let next = Mapping::try_from(json!({"name": "b", "address": "x"})).unwrap();
//!
//! if diff(Some(&props), Some(&next), Some(["name", "address"].into())).is_changed() {
//!     // re-render
//! }
//! assert_eq!(diff(Some(&props), Some(&next), None), Diff::Changed(vec!["name".into()]));
//! ```

pub mod capability;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use capability::{HashKeySetFactory, KeySet, KeySetFactory, RichMapping};
pub use errors::{ExError, ExErrorKind, ObjUtilError, Result};
pub use model::{FrozenMap, Mapping, PlainMap, Value};
pub use ops::{
    diff, keys, pick, rest, to_plain_deep, values, Diff, KeyOptions, ObjUtil, PropertyNames,
};
