//! JSON Pointer (RFC 6901) paths.
//!
//! Patches produced by `jsondiff` address their targets with JSON Pointers.
//! This crate holds the path representation shared by the differ, the patch
//! applier and the patch codec.
//!
//! # Example
//!
//! ```
//! use jsondiff_json_pointer::{format_json_pointer, get, parse_json_pointer};
//!
//! let path = parse_json_pointer("/foo/0");
//! assert_eq!(path, vec!["foo".to_string(), "0".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/0");
//!
//! let doc = serde_json::json!({"foo": ["bar"]});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!("bar")));
//! ```

use thiserror::Error;

pub mod get;
pub mod types;
pub mod util;
pub mod validate;

pub use get::{get, get_mut};
pub use types::{Path, PathStep};
pub use util::{
    child, escape_component, format_json_pointer, is_child, is_root, is_valid_index, parent,
    parse_json_pointer, unescape_component,
};
pub use validate::{validate_json_pointer, validate_path, ValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("NO_PARENT")]
    NoParent,
}
