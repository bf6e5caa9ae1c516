/// Persistence layer for one module.
pub(crate) const BODY: &str = r#"//! Persistence for the {{label}} module.

use crate::models::{{snake}}::{{pascal}};
use crate::store::{Store, StoreError};

/// Repository over the `{{plural}}` table.
#[derive(Clone)]
pub struct {{pascal}}Repo {
    store: Store,
}

impl {{pascal}}Repo {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<{{pascal}}>, StoreError> {
        self.store.fetch_all({{pascal}}::TABLE).await
    }

    pub async fn find(&self, id: i64) -> Result<{{pascal}}, StoreError> {
        self.store.fetch_one({{pascal}}::TABLE, id).await
    }

    pub async fn insert(&self, record: {{pascal}}) -> Result<{{pascal}}, StoreError> {
        self.store.insert({{pascal}}::TABLE, record).await
    }

    pub async fn update(&self, id: i64, record: {{pascal}}) -> Result<{{pascal}}, StoreError> {
        self.store.update({{pascal}}::TABLE, id, record).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.store.delete({{pascal}}::TABLE, id).await
    }
}
"#;
