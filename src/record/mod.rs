//! Record module for generating record.json

pub mod generator;
pub mod types;

pub use generator::RecordGenerator;
pub use types::{IncludeRecord, LaunchRecord, NodeRecord};
