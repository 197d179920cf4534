use std::collections::BTreeMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::features::categories::models::Category;
use crate::features::products::models::Product;

/// Shared catalog state: both collections behind a single lock.
///
/// Cross-collection invariants (a product referencing a category, a category
/// deletion counting its products) require check-then-mutate sequences that
/// span both maps, so one guard covers them together. Nothing suspends while
/// a guard is held.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: RwLock<CatalogState>,
}

/// The maps themselves. `BTreeMap` keeps listing order stable across calls.
#[derive(Debug, Default)]
pub struct CatalogState {
    pub categories: BTreeMap<Uuid, Category>,
    pub products: BTreeMap<Uuid, Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().await
    }
}
