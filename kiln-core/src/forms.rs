//! The naming-forms record every template and snippet is rendered from.

use crate::error::{Error, Result};
use crate::naming::{
    Pluralizer, pluralize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
};

/// Every spelling derived from one module name, built once per invocation.
///
/// All fields are pure functions of the raw name, label, and module path:
/// two runs over the same input produce identical forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleForms {
    /// The name exactly as the user typed it
    pub raw: String,
    /// Raw name lowercased (e.g., "order-item")
    pub lower: String,
    /// PascalCase (e.g., "OrderItem")
    pub pascal: String,
    /// camelCase (e.g., "orderItem")
    pub camel: String,
    /// snake_case (e.g., "order_item")
    pub snake: String,
    /// kebab-case (e.g., "order-item")
    pub kebab: String,
    /// Plural of the snake form (e.g., "order_items")
    pub plural: String,
    /// Human display label
    pub label: String,
    /// Crate name of the target project
    pub module_path: String,
}

impl ModuleForms {
    /// Derive all naming forms with the built-in pluralizer.
    pub fn derive(raw: &str, label: &str, module_path: &str) -> Self {
        Self::derive_with(raw, label, module_path, pluralize)
    }

    /// Derive all naming forms with a caller-supplied pluralizer.
    pub fn derive_with(raw: &str, label: &str, module_path: &str, plural: Pluralizer) -> Self {
        let snake = to_snake_case(raw);
        let label = if label.trim().is_empty() { raw } else { label };
        Self {
            raw: raw.to_string(),
            lower: raw.to_lowercase(),
            pascal: to_pascal_case(raw),
            camel: to_camel_case(raw),
            plural: plural(&snake),
            snake,
            kebab: to_kebab_case(raw),
            label: label.to_string(),
            module_path: module_path.to_string(),
        }
    }

    /// Look up a template field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "name" => &self.lower,
            "pascal" => &self.pascal,
            "camel" => &self.camel,
            "snake" => &self.snake,
            "kebab" => &self.kebab,
            "plural" => &self.plural,
            "label" => &self.label,
            "module_path" => &self.module_path,
            _ => return None,
        };
        Some(value)
    }
}

/// Validate a raw module name before deriving anything from it.
///
/// Accepted: ASCII letters, digits, '-' and '_', starting with a letter.
pub fn validate_name(raw: &str) -> Result<()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::EmptyName);
    }
    let mut chars = raw.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidName {
            name: raw.to_string(),
            reason: "must start with an ASCII letter".to_string(),
        });
    }
    if let Some(bad) = raw
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        return Err(Error::InvalidName {
            name: raw.to_string(),
            reason: format!("contains unsupported character '{}'", bad),
        });
    }
    Ok(())
}
