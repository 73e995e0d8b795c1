//! # lex-query
//!
//! Derived, read-only views over a LexDesk snapshot.
//!
//! - [`query`]: search → filter → stable sort → pagination over cases and clients
//! - [`debounce`]: delay-coalescing primitive for search input
//! - [`agenda`]: flattening of case deadlines and tasks into an urgency-annotated stream
//! - [`calendar`]: month grid built from agenda events
//! - [`dashboard`]: status funnel, headline counts, task and activity panels
//! - [`palette`]: quick find across cases and clients
//!
//! Everything except the debouncer is a pure, synchronous function of its inputs.

pub mod agenda;
pub mod calendar;
pub mod dashboard;
pub mod debounce;
pub mod error;
pub mod palette;
pub mod query;

pub use error::QueryError;
