//! Static asset reads.
//!
//! The platform installs an `AssetLoader` on the scheduler; views and event
//! handlers reach it through the current runtime. Reads are futures polled by
//! the scheduler's task pump, so completions arrive on the UI thread between
//! frames.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::{FetchError, Runtime};

pub trait AssetLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'static, Result<Vec<u8>, FetchError>>;
}

pub fn asset_loader() -> Result<Rc<dyn AssetLoader>, FetchError> {
    Runtime::current()
        .and_then(|rt| rt.asset_loader())
        .ok_or(FetchError::NoLoader)
}

/// Read `path` and decode it as JSON. Leading slashes are ignored, so
/// `"/names.json"` and `"names.json"` name the same asset.
pub fn fetch_json<T: DeserializeOwned + 'static>(
    path: &str,
) -> LocalBoxFuture<'static, Result<T, FetchError>> {
    let path = path.trim_start_matches('/').to_string();
    let loader = asset_loader();
    async move {
        let bytes = loader?.load(&path).await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode {
            path,
            message: e.to_string(),
        })
    }
    .boxed_local()
}

/// In-memory loader. Records every requested path.
#[derive(Default)]
pub struct StaticAssets {
    files: HashMap<String, Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, path: &str) -> usize {
        self.requests.borrow().iter().filter(|p| *p == path).count()
    }
}

impl AssetLoader for StaticAssets {
    fn load(&self, path: &str) -> LocalBoxFuture<'static, Result<Vec<u8>, FetchError>> {
        self.requests.borrow_mut().push(path.to_string());
        let found = self
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()));
        futures::future::ready(found).boxed_local()
    }
}
