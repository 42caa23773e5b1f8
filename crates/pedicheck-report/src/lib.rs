//! pedicheck-report
//!
//! Report assembly and the end-to-end triage pipeline.

pub mod assemble;
pub mod error;
pub mod triage;

pub use assemble::{assemble, assemble_at, ReportParts};
pub use error::{ReportError, TriageError};
pub use triage::{TriageEngine, TriageRequest};
