//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BrowseSession` - Owns the selection while the user navigates the catalog
//! - `CheckUseCase` - Loads a catalog and reports data-contract issues

pub mod browse_session;
pub mod check;

pub use browse_session::{BrowseSession, View};
pub use check::{CheckResult, CheckUseCase};
