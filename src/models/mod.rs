//! Models module
//!
//! Defines the record kinds, the reference type used for relationships, and
//! the canonical 2.5 record structs produced by normalization.

pub mod enums;
pub mod records;
pub mod reference;

pub use enums::{RecordKind, RecordState};
pub use records::{
    CanonicalRecord, Credential, ExecutionEnvironment, Inventory, JobTemplate, Organization,
    Project, WorkflowTemplate,
};
pub use reference::{Reference, resolve_name};
