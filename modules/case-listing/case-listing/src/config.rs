//! Configuration for the case listing module.

use std::path::Path;

use case_listing_sdk::DocumentTypeOption;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::domain::ServiceConfig;

/// Prefix for environment overrides, e.g. `CASE_LISTING__MAX_PAGE_LIMIT=200`.
pub const ENV_PREFIX: &str = "CASE_LISTING__";

/// Module configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseListingConfig {
    /// Container holding case documents.
    pub container: String,
    /// Container holding module permission records.
    pub permissions_container: String,
    /// Page size used when the request leaves it unset.
    pub default_page_limit: u32,
    pub max_page_limit: u32,
    /// Top-level property naming the module a case belongs to.
    pub module_field: String,
    /// Property used for the fallback ordering (newest first).
    pub created_at_field: String,
    pub customer_field: String,
    pub project_field: String,
    /// Catalog returned with every page.
    pub document_type_options: Vec<DocumentTypeOption>,
}

impl Default for CaseListingConfig {
    fn default() -> Self {
        Self {
            container: "cases".to_owned(),
            permissions_container: "permissions".to_owned(),
            default_page_limit: 50,
            max_page_limit: 1000,
            module_field: "module".to_owned(),
            created_at_field: "createdAt".to_owned(),
            customer_field: "customerId".to_owned(),
            project_field: "projectId".to_owned(),
            document_type_options: default_document_type_options(),
        }
    }
}

fn default_document_type_options() -> Vec<DocumentTypeOption> {
    [
        ("passport", "Passport"),
        ("idCard", "ID card"),
        ("driverLicense", "Driver license"),
        ("residencePermit", "Residence permit"),
        ("proofOfAddress", "Proof of address"),
        ("bankStatement", "Bank statement"),
    ]
    .into_iter()
    .map(|(value, label)| DocumentTypeOption::new(value, label))
    .collect()
}

impl CaseListingConfig {
    /// Load configuration: built-in defaults, then the optional YAML file,
    /// then `CASE_LISTING__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed, names an unknown key,
    /// or the merged result fails [`validate`](Self::validate).
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let cfg: Self = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| anyhow::anyhow!("invalid case-listing config: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_page_limit: self.default_page_limit,
            max_page_limit: self.max_page_limit,
            module_field: self.module_field.clone(),
            document_type_options: self.document_type_options.clone(),
        }
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns an error for zero page limits, a default above the maximum,
    /// blank container and field names, or a dotted `module_field`.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_page_limit == 0 || self.max_page_limit == 0 {
            anyhow::bail!("page limits must be positive");
        }
        if self.default_page_limit > self.max_page_limit {
            anyhow::bail!(
                "default_page_limit ({}) exceeds max_page_limit ({})",
                self.default_page_limit,
                self.max_page_limit
            );
        }
        for (name, value) in [
            ("container", &self.container),
            ("permissions_container", &self.permissions_container),
            ("module_field", &self.module_field),
            ("created_at_field", &self.created_at_field),
            ("customer_field", &self.customer_field),
            ("project_field", &self.project_field),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("{name} must not be blank");
            }
        }
        // rows are matched on a top-level property
        if self.module_field.contains('.') {
            anyhow::bail!(
                "module_field must name a top-level property, got {:?}",
                self.module_field
            );
        }
        Ok(())
    }
}
