use std::sync::Arc;

use case_listing_sdk::CaseListingClientV1;
use docstore_query::DocumentStore;
use tracing::{debug, info};

use crate::config::CaseListingConfig;
use crate::domain::{CaseListingLocalClient, CasesService, ModulePermissionsPort};
use crate::infra::storage::{DocStoreCasesRepository, DocStoreModulePermissions};

/// Composition root for case listing.
///
/// The host supplies the document store client; [`init`](Self::init) wires
/// repositories, service and the local client around it.
pub struct CaseListing {
    // Keep the domain service behind ArcSwap for cheap read-mostly access.
    service: arc_swap::ArcSwapOption<CasesService>,
}

impl Default for CaseListing {
    fn default() -> Self {
        Self {
            service: arc_swap::ArcSwapOption::from(None),
        }
    }
}

impl Clone for CaseListing {
    fn clone(&self) -> Self {
        Self {
            service: arc_swap::ArcSwapOption::new(self.service.load().as_ref().map(Clone::clone)),
        }
    }
}

impl CaseListing {
    /// Initialize with permission records read from the same store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn init(
        &self,
        cfg: &CaseListingConfig,
        store: Arc<dyn DocumentStore>,
    ) -> anyhow::Result<Arc<dyn CaseListingClientV1>> {
        let permissions: Arc<dyn ModulePermissionsPort> =
            Arc::new(DocStoreModulePermissions::new(Arc::clone(&store), cfg));
        self.init_with_permissions(cfg, store, permissions)
    }

    /// Initialize with a separately provided permission source.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn init_with_permissions(
        &self,
        cfg: &CaseListingConfig,
        store: Arc<dyn DocumentStore>,
        permissions: Arc<dyn ModulePermissionsPort>,
    ) -> anyhow::Result<Arc<dyn CaseListingClientV1>> {
        info!("Initializing case_listing module");

        cfg.validate()?;
        debug!(
            "Loaded case_listing config: container={}, default_page_limit={}, max_page_limit={}",
            cfg.container, cfg.default_page_limit, cfg.max_page_limit
        );

        let repo = Arc::new(DocStoreCasesRepository::new(store, cfg));
        let service = Arc::new(CasesService::new(repo, permissions, cfg.service_config()));
        self.service.store(Some(Arc::clone(&service)));

        info!("case_listing module initialized successfully");
        Ok(Arc::new(CaseListingLocalClient::new(service)))
    }

    /// Client over the initialized service.
    ///
    /// # Errors
    ///
    /// Returns an error if [`init`](Self::init) has not run yet.
    pub fn client(&self) -> anyhow::Result<Arc<dyn CaseListingClientV1>> {
        let service = self
            .service
            .load_full()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))?;
        Ok(Arc::new(CaseListingLocalClient::new(service)))
    }
}
