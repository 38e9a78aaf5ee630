//! Core data model and pure logic for dumping a SQLite database to JSON.
//!
//! This crate holds everything that does not touch an external process or
//! the filesystem: literal text tokenization, raw-field-to-typed-value
//! coercion, and the in-memory [`Document`] that is serialized as the final
//! JSON output.
//!
//! # Example
//!
//! ```
//! use litedump_core::{Document, Record, Value};
//!
//! let mut record = Record::new();
//! record.push("id", Value::coerce("1"));
//! record.push("name", Value::coerce("Alice"));
//! record.push("age", Value::coerce(""));
//!
//! let mut document = Document::new();
//! document.insert_table("people", vec![record]);
//!
//! let mut out = Vec::new();
//! document.write_json_pretty(&mut out).unwrap();
//! let json = String::from_utf8(out).unwrap();
//! assert!(json.contains("\"age\": null"));
//! ```

pub mod document;
pub mod text;
pub mod value;

pub use document::{Document, Record};
pub use value::Value;
