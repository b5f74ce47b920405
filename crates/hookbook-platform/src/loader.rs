use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use hookbook_core::{AssetLoader, FetchError};

/// Serves assets from a directory. Paths are relative to the root and may
/// not climb out of it.
#[derive(Clone, Debug)]
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let rel = Path::new(path);
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || path.is_empty() {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(rel))
    }
}

impl AssetLoader for DirLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'static, Result<Vec<u8>, FetchError>> {
        let result = self.resolve(path).and_then(|full| {
            log::debug!("reading {}", full.display());
            std::fs::read(&full).map_err(|e| match e.kind() {
                ErrorKind::NotFound => FetchError::NotFound(path.to_string()),
                _ => FetchError::Io {
                    path: path.to_string(),
                    message: e.to_string(),
                },
            })
        });
        futures::future::ready(result).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_rejects_parent_dirs() {
        let loader = DirLoader::new(".");
        for bad in ["../secret.json", "a/../../b.json", "/etc/passwd", ""] {
            assert_eq!(
                block_on(loader.load(bad)),
                Err(FetchError::InvalidPath(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_reads_and_reports_missing() {
        let loader = DirLoader::new(env!("CARGO_MANIFEST_DIR"));
        let bytes = block_on(loader.load("Cargo.toml")).unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("hookbook-platform"));
        assert_eq!(
            block_on(loader.load("missing.json")),
            Err(FetchError::NotFound("missing.json".to_string()))
        );
    }
}
