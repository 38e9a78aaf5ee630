//! External engine boundary for litedump.
//!
//! Everything that touches a subprocess or the filesystem lives here: the
//! [`Invocation`] builder that runs the engine's command-line program, the
//! [`Engine`] extractor that turns its text output into table names,
//! column lists, and raw records, and the assembler that coerces fields
//! and emits the final JSON document.
//!
//! The engine program is an external collaborator: this crate never links
//! a database library, it scrapes the text the program prints. The parsing
//! contracts (pipe-delimited introspection, space-delimited table lists,
//! all-empty row dropping) are documented on the extraction functions.
//!
//! # Example
//!
//! ```no_run
//! use litedump_engine::{dump, write_document, Engine};
//!
//! let engine = Engine::new("people.db");
//! let document = dump(&engine)?;
//! write_document(&document, std::path::Path::new("people.json"))?;
//! # Ok::<(), litedump_engine::DumpError>(())
//! ```

pub mod assemble;
pub mod error;
pub mod extract;
pub mod invoker;

pub use assemble::{dump, write_document};
pub use error::{DumpError, Result};
pub use extract::{DEFAULT_ENGINE_PROGRAM, Engine};
pub use invoker::Invocation;
