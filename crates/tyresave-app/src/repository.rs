//! Catalog selection

use std::path::Path;

use tracing::info;
use tyresave_domain::model::Catalog;
use tyresave_infra::catalog_loader::load_catalog_from_file;
use tyresave_types::Result;

use crate::config::Config;
use crate::constants::default_catalog;

/// Open the catalog named by the override path, the config, or the built-in one
pub fn open_catalog(config: &Config, override_path: Option<&Path>) -> Result<Catalog> {
    match override_path.or(config.catalog_path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "using catalog file");
            load_catalog_from_file(path)
        }
        None => default_catalog(),
    }
}
