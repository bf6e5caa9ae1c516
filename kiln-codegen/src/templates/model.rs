/// Data model for one module.
pub(crate) const BODY: &str = r#"//! Data model for the {{label}} module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A {{name}} record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct {{pascal}} {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl {{pascal}} {
    /// Table backing the {{name}} repository.
    pub const TABLE: &'static str = "{{plural}}";
}
"#;
