//! Command implementations.

pub mod batch;
pub mod check;
pub mod dataset;
pub mod facts;
pub mod rules;

pub use batch::{execute_batch, read_claims};
pub use check::execute_check;
pub use dataset::execute_dataset;
pub use facts::execute_facts;
pub use rules::execute_rules;
