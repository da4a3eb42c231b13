use super::ModelMeta;
use crate::Model;

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, PoisonError, RwLock},
};
use tracing::trace;

type Cache = RwLock<HashMap<TypeId, Arc<ModelMeta>>>;

fn cache() -> &'static Cache {
    static CACHE: OnceLock<Cache> = OnceLock::new();
    CACHE.get_or_init(Default::default)
}

/// Returns the metadata for `M`, computing it on first use.
///
/// Metadata is computed from `M::schema()` and kept for the lifetime of the
/// process. Concurrent first calls may each compute it; the first one stored
/// wins and every caller gets the same `Arc`.
pub fn resolve<M: Model>() -> Arc<ModelMeta> {
    let id = TypeId::of::<M>();

    if let Some(meta) = cache()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
    {
        return meta.clone();
    }

    let meta = Arc::new(ModelMeta::new(M::schema()));
    trace!(model = meta.name(), "resolved model metadata");

    cache()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(id)
        .or_insert(meta)
        .clone()
}

/// Resolves model metadata up front, typically at application start-up.
///
/// ```ignore
/// let registry = Registry::new().register::<User>().register::<Order>();
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    models: Vec<Arc<ModelMeta>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn register<M: Model>(mut self) -> Registry {
        self.models.push(resolve::<M>());
        self
    }

    /// Metadata of every registered model, in registration order.
    pub fn models(&self) -> &[Arc<ModelMeta>] {
        &self.models
    }
}
