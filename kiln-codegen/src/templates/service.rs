/// Business-logic layer for one module.
pub(crate) const BODY: &str = r#"//! Business logic for the {{label}} module.

use crate::models::{{snake}}::{{pascal}};
use crate::repos::{{snake}}_repo::{{pascal}}Repo;
use crate::store::{Store, StoreError};

/// Service layer for {{plural}}.
#[derive(Clone)]
pub struct {{pascal}}Service {
    repo: {{pascal}}Repo,
}

impl {{pascal}}Service {
    pub fn new(store: Store) -> Self {
        Self {
            repo: {{pascal}}Repo::new(store),
        }
    }

    pub async fn list(&self) -> Result<Vec<{{pascal}}>, StoreError> {
        self.repo.list().await
    }

    pub async fn create(&self, record: {{pascal}}) -> Result<{{pascal}}, StoreError> {
        self.repo.insert(record).await
    }

    pub async fn get(&self, id: i64) -> Result<{{pascal}}, StoreError> {
        self.repo.find(id).await
    }

    pub async fn update(&self, id: i64, record: {{pascal}}) -> Result<{{pascal}}, StoreError> {
        self.repo.update(id, record).await
    }

    pub async fn remove(&self, id: i64) -> Result<(), StoreError> {
        self.repo.delete(id).await
    }
}
"#;
