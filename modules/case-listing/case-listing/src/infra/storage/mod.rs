//! Document store adapters for the domain ports.

mod cases_repo;
mod permissions_repo;

pub use cases_repo::DocStoreCasesRepository;
pub use permissions_repo::DocStoreModulePermissions;
