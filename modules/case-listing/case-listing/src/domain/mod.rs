//! Domain layer for case listing.

pub mod error;
pub mod local_client;
pub mod ports;
pub mod repo;
pub mod service;

pub use error::DomainError;
pub use local_client::CaseListingLocalClient;
pub use ports::ModulePermissionsPort;
pub use repo::{CaseScope, CasesRepository};
pub use service::{CasesService, ServiceConfig};
