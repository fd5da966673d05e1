//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the page
//! bootstrap and the HTTP handlers. Request handling never reads environment variables.

use crate::constants::{COMPONENTS_DIR, DEFAULT_SITE_TITLE};
use crate::{VetError, VetResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    components_dir: PathBuf,
    catalog_path: Option<PathBuf>,
    site_title: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `VetError::InvalidInput` if `site_title` is blank.
    pub fn new(
        components_dir: PathBuf,
        catalog_path: Option<PathBuf>,
        site_title: String,
    ) -> VetResult<Self> {
        if site_title.trim().is_empty() {
            return Err(VetError::InvalidInput("site_title cannot be empty".into()));
        }

        Ok(Self {
            components_dir,
            catalog_path,
            site_title,
        })
    }

    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }

    /// Catalog override file, if one was configured.
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }
}

/// Resolve the components directory holding the header/footer fragments.
///
/// If `override_dir` is provided it must be an existing directory. Otherwise this searches
/// for `components/` relative to the current working directory and then walks up from
/// `CARGO_MANIFEST_DIR`. When nothing is found the cwd-relative path is returned anyway:
/// fragment loads will then fail individually and leave their placeholders empty.
pub fn resolve_components_dir(override_dir: Option<PathBuf>) -> VetResult<PathBuf> {
    if let Some(dir) = override_dir {
        if dir.is_dir() {
            return Ok(dir);
        }
        return Err(VetError::InvalidInput(format!(
            "VET_COMPONENTS_DIR override is not a directory: {}",
            dir.display()
        )));
    }

    let cwd_relative = PathBuf::from(COMPONENTS_DIR);
    if cwd_relative.is_dir() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(COMPONENTS_DIR);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    tracing::warn!(
        "components directory not found; header and footer will be empty ({})",
        cwd_relative.display()
    );
    Ok(cwd_relative)
}

/// Parse the site title from an optional environment value.
///
/// `None` or a blank value yields the default title.
pub fn site_title_from_env_value(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_SITE_TITLE.to_string())
}
