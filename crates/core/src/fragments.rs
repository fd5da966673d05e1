//! Header and footer markup fragments.
//!
//! Fragments are fetched concurrently. A failed load is logged and yields an empty
//! placeholder; it never fails the page.

use crate::constants::{FOOTER_FRAGMENT_PATH, HEADER_FRAGMENT_PATH};
use crate::{VetError, VetResult};
use std::future::Future;
use std::path::{Component, Path, PathBuf};

/// Somewhere fragment markup can be loaded from.
pub trait FragmentSource {
    /// Loads the raw markup stored at `path`.
    fn load(&self, path: &str) -> impl Future<Output = VetResult<String>> + Send;
}

/// Loads fragments from a components directory on disk.
#[derive(Debug, Clone)]
pub struct FsFragmentSource {
    root: PathBuf,
}

impl FsFragmentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> VetResult<PathBuf> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || path.is_empty() {
            return Err(VetError::UnsafeFragmentPath(path.to_owned()));
        }
        Ok(self.root.join(relative))
    }
}

impl FragmentSource for FsFragmentSource {
    fn load(&self, path: &str) -> impl Future<Output = VetResult<String>> + Send {
        let resolved = self.resolve(path);
        let path = path.to_owned();
        async move {
            let full = resolved?;
            tokio::fs::read_to_string(&full)
                .await
                .map_err(|source| VetError::FragmentLoad { path, source })
        }
    }
}

/// Loaded header and footer markup; empty strings for fragments that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    pub header: String,
    pub footer: String,
}

/// Loads the header and footer concurrently.
pub async fn load_fragments<F: FragmentSource>(source: &F) -> Fragments {
    let (header, footer) = tokio::join!(
        source.load(HEADER_FRAGMENT_PATH),
        source.load(FOOTER_FRAGMENT_PATH)
    );
    Fragments {
        header: or_empty(HEADER_FRAGMENT_PATH, header),
        footer: or_empty(FOOTER_FRAGMENT_PATH, footer),
    }
}

fn or_empty(path: &str, result: VetResult<String>) -> String {
    match result {
        Ok(markup) => markup,
        Err(e) => {
            tracing::error!("error loading component {}: {}", path, e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loads_both_fragments() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("header.html"), "<nav>top</nav>").unwrap();
        std::fs::write(tmp.path().join("footer.html"), "<footer>end</footer>").unwrap();

        let fragments = load_fragments(&FsFragmentSource::new(tmp.path())).await;
        assert_eq!(fragments.header, "<nav>top</nav>");
        assert_eq!(fragments.footer, "<footer>end</footer>");
    }

    #[tokio::test]
    async fn test_missing_fragment_leaves_placeholder_empty() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("footer.html"), "<footer>end</footer>").unwrap();

        let fragments = load_fragments(&FsFragmentSource::new(tmp.path())).await;
        assert_eq!(fragments.header, "");
        assert_eq!(fragments.footer, "<footer>end</footer>");
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_root() {
        let source = FsFragmentSource::new("/tmp");
        for path in ["../etc/passwd", "/etc/passwd", ""] {
            let err = source.load(path).await.unwrap_err();
            assert!(matches!(err, VetError::UnsafeFragmentPath(_)), "{path}");
        }
    }
}
