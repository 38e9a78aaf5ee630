//! The in-memory dump document and its JSON emission.
//!
//! A [`Document`] maps table names to record sequences, preserving the
//! order in which the extractor reported tables and the schema order of
//! columns within each record. It is built once per run, serialized with
//! 4-space indentation, and discarded.

use std::io;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::value::Value;

/// One row after coercion: column name paired with typed value, in column
/// order. Null values keep their key when serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column/value pair at the next position.
    pub fn push(&mut self, column: impl Into<String>, value: Value) {
        self.fields.push((column.into(), value));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column/value pairs in insertion order.
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().map(|(column, value)| (column, value)))
    }
}

/// The complete table-to-records structure serialized as the final output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    tables: Vec<(String, Vec<Record>)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a table with its records. Tables serialize in insertion
    /// order; the caller is expected to insert each table name once.
    pub fn insert_table(&mut self, name: impl Into<String>, records: Vec<Record>) {
        self.tables.push((name.into(), records));
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn record_count(&self) -> usize {
        self.tables.iter().map(|(_, records)| records.len()).sum()
    }

    /// Serializes the document as UTF-8 JSON with 4-space indentation.
    pub fn write_json_pretty<W: io::Write>(&self, writer: W) -> serde_json::Result<()> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for (name, records) in &self.tables {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people_document() -> Document {
        let mut alice = Record::new();
        alice.push("id", Value::Integer(1));
        alice.push("name", Value::Text("Alice".to_string()));
        alice.push("age", Value::Integer(30));

        let mut bob = Record::new();
        bob.push("id", Value::Integer(2));
        bob.push("name", Value::Text("Bob".to_string()));
        bob.push("age", Value::Null);

        let mut document = Document::new();
        document.insert_table("people", vec![alice, bob]);
        document
    }

    fn to_pretty_string(document: &Document) -> String {
        let mut out = Vec::new();
        document.write_json_pretty(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_document_is_empty_object() {
        assert_eq!(to_pretty_string(&Document::new()), "{}");
    }

    #[test]
    fn test_null_field_keeps_its_key() {
        let json = to_pretty_string(&people_document());
        assert!(json.contains("\"age\": null"));
    }

    #[test]
    fn test_four_space_indentation() {
        let json = to_pretty_string(&people_document());
        assert!(json.contains("\n    \"people\""));
        assert!(json.contains("\n            \"id\": 1"));
    }

    #[test]
    fn test_document_structure() {
        let json = to_pretty_string(&people_document());
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["people"][0]["id"], 1);
        assert_eq!(parsed["people"][0]["name"], "Alice");
        assert_eq!(parsed["people"][1]["age"], serde_json::Value::Null);
        assert_eq!(parsed["people"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_table_order_is_insertion_order() {
        let mut document = Document::new();
        document.insert_table("zebra", Vec::new());
        document.insert_table("apple", Vec::new());
        let json = to_pretty_string(&document);
        let zebra = json.find("zebra").unwrap();
        let apple = json.find("apple").unwrap();
        assert!(zebra < apple, "tables must serialize in insertion order");
    }

    #[test]
    fn test_column_order_is_insertion_order() {
        let mut record = Record::new();
        record.push("z_last", Value::Integer(1));
        record.push("a_first", Value::Integer(2));
        let mut document = Document::new();
        document.insert_table("t", vec![record]);
        let json = to_pretty_string(&document);
        assert!(json.find("z_last").unwrap() < json.find("a_first").unwrap());
    }

    #[test]
    fn test_counts() {
        let document = people_document();
        assert_eq!(document.table_count(), 1);
        assert_eq!(document.record_count(), 2);
    }
}
