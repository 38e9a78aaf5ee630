//! Schema and record extraction from external engine output.
//!
//! All database access goes through the engine's command-line program:
//! `.tables` for the table list, `PRAGMA table_info(<t>);` for column
//! names, and `SELECT * FROM '<t>';` for row data. The pipe-delimited text
//! it prints is the de facto interchange format; a field value containing
//! `|` is indistinguishable from a field boundary and is not escaped.

use litedump_core::text::{omit_blank, split_literal, trim};
use tracing::debug;

use crate::error::{DumpError, Result};
use crate::invoker::Invocation;

/// Default external engine program, resolved on PATH.
pub const DEFAULT_ENGINE_PROGRAM: &str = "sqlite3";

/// Handle on one database file, reached through the external engine.
///
/// The database path is quoted once at construction and treated as
/// read-only for the lifetime of the handle.
#[derive(Debug, Clone)]
pub struct Engine {
    program: String,
    db_file: String,
}

impl Engine {
    /// Engine for `db_path` using the default program.
    pub fn new(db_path: &str) -> Self {
        Self::with_program(DEFAULT_ENGINE_PROGRAM, db_path)
    }

    /// Engine for `db_path` using a specific engine program.
    pub fn with_program(program: &str, db_path: &str) -> Self {
        Self {
            program: program.to_string(),
            db_file: quoted(db_path),
        }
    }

    fn invoke(&self, argument: &str) -> Result<String> {
        Invocation::new()
            .arg(&self.program)
            .arg(&self.db_file)
            .arg(argument)
            .run()
    }

    /// Table names in the order the engine reports them; not re-sorted.
    pub fn tables(&self) -> Result<Vec<String>> {
        let raw = self.invoke(".tables")?;
        let tables = parse_table_names(&raw);
        debug!(count = tables.len(), "Listed tables");
        Ok(tables)
    }

    /// Ordered column names for `table` from schema introspection.
    pub fn columns(&self, table: &str) -> Result<Vec<String>> {
        let raw = self.invoke(&quoted(&format!("PRAGMA table_info({table});")))?;
        parse_columns(table, &raw)
    }

    /// All rows of `table`, each an ordered sequence of raw text fields.
    pub fn records(&self, table: &str) -> Result<Vec<Vec<String>>> {
        let raw = self.invoke(&quoted(&format!("SELECT * FROM '{table}';")))?;
        Ok(parse_records(&raw))
    }
}

/// Wraps a token in double quotes for the shell command line.
fn quoted(token: &str) -> String {
    format!("\"{token}\"")
}

/// Parses `.tables` output: split on single spaces, drop blanks, trim each
/// remaining token.
fn parse_table_names(raw: &str) -> Vec<String> {
    omit_blank(split_literal(raw, " "))
        .into_iter()
        .map(|name| trim(name).to_string())
        .collect()
}

/// Parses `table_info` introspection output.
///
/// Each non-blank line is `ordinal|name|type|...`; field 1 is the column
/// name and the rest is ignored. A line with fewer than two fields is a
/// [`DumpError::MalformedOutput`].
fn parse_columns(table: &str, raw: &str) -> Result<Vec<String>> {
    let mut columns = Vec::new();
    for line in omit_blank(split_literal(raw, "\n")) {
        let fields = split_literal(line, "|");
        let Some(name) = fields.get(1) else {
            return Err(DumpError::MalformedOutput {
                table: table.to_string(),
                line: line.to_string(),
            });
        };
        columns.push((*name).to_string());
    }
    Ok(columns)
}

/// Parses row output into records of raw text fields.
///
/// A line whose every field is empty is discarded. This guards against
/// trailing-blank-line artifacts from the engine, at the cost of also
/// dropping a legitimately all-empty row; the two are indistinguishable in
/// the text format.
fn parse_records(raw: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    for line in split_literal(raw, "\n") {
        let fields = split_literal(line, "|");
        if fields.iter().all(|field| field.is_empty()) {
            continue;
        }
        records.push(fields.into_iter().map(str::to_string).collect());
    }
    records
}
