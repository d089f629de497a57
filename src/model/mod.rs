//! # Document Model
//!
//! Clean DTOs for the structured records this crate reads: definition
//! documents, their field values, and the JSON boundary they cross.
//!
//! Design rule: this module is pure data. No I/O and no locking.
//! The index layer never touches a concrete wire format; it only sees
//! `Document` and `Value`.

pub mod document;
pub mod json;
pub mod value;

pub use document::Document;
pub use json::{document_to_json, json_to_document, json_to_value, value_to_json};
pub use value::Value;
