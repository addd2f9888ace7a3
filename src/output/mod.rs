// src/output/mod.rs
//! The local content store, with planning separated from execution.
//!
//! Plans are built by pure functions; [`deliver`] is the only code that
//! writes to disk or stdout.

mod paths;
mod plan;
mod types;
mod writer;

pub use paths::{entry_filename, entry_path, sanitize_filename};
pub use plan::{plan_collection, plan_schema, plan_stdout, plan_sync};
pub use types::{DeliveryFailure, DeliveryTarget, Effect, OutputPlan, OutputReport};
pub use writer::deliver;
