//! Client follow-up data for the "today's tasks" table.
//!
//! - **Types**: records, pipeline stage, contact channel, filter criteria
//! - **Filter**: stable, side-effect free narrowing of a record list
//! - **Repository**: read-only access by id over a fixture set

mod filter;
mod repository;
mod types;

pub use filter::{filter_clients, filter_with_outcome};
pub use repository::{ClientRepository, FixtureRepository};
pub use types::*;
