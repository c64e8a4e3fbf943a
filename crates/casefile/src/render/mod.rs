//! Artifact renderers
//!
//! Each renderer has a pure layout step that turns entities into rows or
//! blocks, and a `write_*` step that produces the file and returns its path.

pub mod casenote;
pub mod recognizance;
pub mod tenancy;

pub use casenote::write_case_note;
pub use recognizance::write_recognizance;
pub use tenancy::write_tenancy;
