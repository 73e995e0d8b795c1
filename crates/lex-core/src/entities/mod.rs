//! Entity structs for the practice data LexDesk reads.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names use camelCase on the wire to
//! match the snapshot format produced by the front end.

mod activity;
mod case;
mod client;
mod deadline;
mod task;

pub use activity::Activity;
pub use case::{CaseRecord, ClientSummary};
pub use client::ClientRecord;
pub use deadline::Deadline;
pub use task::Task;
