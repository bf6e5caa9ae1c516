//! The four artifact templates and their output paths.

mod handler;
mod model;
mod repository;
mod service;

use std::path::PathBuf;

use kiln_core::{ModuleForms, Result};

use crate::render::render;

/// One artifact the generator produces: a template body paired with the
/// output path pattern it renders into. Static configuration, one entry
/// per artifact kind.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    /// Artifact kind, used in error messages and step labels
    pub kind: &'static str,
    /// Template body with `{{field}}` placeholders
    pub body: &'static str,
    dir: &'static str,
    suffix: &'static str,
}

impl TemplateSpec {
    /// Output path relative to the project root, derived from the snake form.
    pub fn output_path(&self, forms: &ModuleForms) -> PathBuf {
        PathBuf::from(self.dir).join(format!("{}{}.rs", forms.snake, self.suffix))
    }

    /// Render this artifact's content for the given forms.
    pub fn render(&self, forms: &ModuleForms) -> Result<String> {
        render(self.kind, self.body, forms)
    }
}

/// The four artifacts generated for every module, in emission order.
pub fn specs() -> [TemplateSpec; 4] {
    [
        TemplateSpec {
            kind: "handler",
            body: handler::BODY,
            dir: "src/handlers",
            suffix: "_handler",
        },
        TemplateSpec {
            kind: "service",
            body: service::BODY,
            dir: "src/services",
            suffix: "_service",
        },
        TemplateSpec {
            kind: "model",
            body: model::BODY,
            dir: "src/models",
            suffix: "",
        },
        TemplateSpec {
            kind: "repository",
            body: repository::BODY,
            dir: "src/repos",
            suffix: "_repo",
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn forms() -> ModuleForms {
        ModuleForms::derive("order-item", "Order item", "shop-api")
    }

    #[test]
    fn test_output_paths_use_snake_form() {
        let forms = forms();
        let paths: Vec<PathBuf> = specs().iter().map(|s| s.output_path(&forms)).collect();
        assert_eq!(paths[0], Path::new("src/handlers/order_item_handler.rs"));
        assert_eq!(paths[1], Path::new("src/services/order_item_service.rs"));
        assert_eq!(paths[2], Path::new("src/models/order_item.rs"));
        assert_eq!(paths[3], Path::new("src/repos/order_item_repo.rs"));
    }

    #[test]
    fn test_all_bodies_render() {
        let forms = forms();
        for spec in specs() {
            let content = spec.render(&forms).unwrap();
            assert!(!content.is_empty(), "{} rendered empty", spec.kind);
            // No placeholder survives rendering
            assert!(!content.contains("{{"), "{} left a placeholder", spec.kind);
        }
    }

    #[test]
    fn test_handler_content() {
        let content = specs()[0].render(&forms()).unwrap();
        assert!(content.contains("pub async fn list"));
        assert!(content.contains("OrderItemService"));
        assert!(content.contains("crate::models::order_item::OrderItem"));
    }

    #[test]
    fn test_service_content() {
        let content = specs()[1].render(&forms()).unwrap();
        assert!(content.contains("pub struct OrderItemService"));
        assert!(content.contains("OrderItemRepo::new"));
    }

    #[test]
    fn test_model_content() {
        let content = specs()[2].render(&forms()).unwrap();
        assert!(content.contains("pub struct OrderItem"));
        assert!(content.contains("\"order_items\""));
    }

    #[test]
    fn test_repository_content() {
        let content = specs()[3].render(&forms()).unwrap();
        assert!(content.contains("pub struct OrderItemRepo"));
        assert!(content.contains("OrderItem::TABLE"));
    }
}
