//! Record Ingestion Module
//!
//! Converts raw delimited record files into documents ready for indexing.
//!
//! ## Workflow
//! 1. **Header**: The first line names the columns; at least two are required.
//! 2. **Rows**: Each following line is one record. Column 0 is the primary
//!    key; the remaining columns become analyzed fields under their header
//!    names, and the whole raw row is kept as a cross-field search blob.
//! 3. **Containment**: A row whose column count does not match the header is
//!    reported alongside the parsed documents instead of aborting the file.
//!
//! The parser is a pure transform: it never touches the index and leaves
//! persistence to the pipeline.

pub mod csv;
pub mod types;
