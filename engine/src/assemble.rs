//! Document assembly and output emission.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use litedump_core::{Document, Record, Value};
use tracing::{debug, info};

use crate::error::Result;
use crate::extract::Engine;

/// Builds the complete dump document for every table the engine reports.
///
/// Fields pair positionally with column names; a row with more fields than
/// the schema has columns loses the surplus. Each field is coerced to its
/// typed value, and null fields keep their keys.
pub fn dump(engine: &Engine) -> Result<Document> {
    let mut document = Document::new();

    for table in engine.tables()? {
        let columns = engine.columns(&table)?;
        let rows = engine.records(&table)?;
        debug!(
            table = %table,
            columns = columns.len(),
            rows = rows.len(),
            "Dumping table"
        );

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let mut record = Record::new();
            for (column, field) in columns.iter().zip(&row) {
                record.push(column.clone(), Value::coerce(field));
            }
            records.push(record);
        }
        document.insert_table(table, records);
    }

    Ok(document)
}

/// Writes the document as indented JSON to `path`, truncating any existing
/// file. No partial-write recovery.
pub fn write_document(document: &Document, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    document.write_json_pretty(&mut writer)?;
    writer.flush()?;

    info!(
        path = %path.display(),
        tables = document.table_count(),
        records = document.record_count(),
        "Wrote dump document"
    );
    Ok(())
}
