//! Marker-based insertion into hand-maintained files.

use std::fs;
use std::path::Path;

use kiln_core::{Error, ModuleForms, Result};

use crate::render::render;

/// Marker line in `src/router.rs`. Snippets are inserted immediately above
/// it; the line itself must never be removed or duplicated.
pub const ROUTES_MARKER: &str =
    "// kiln:routes - generated registrations land above, do not remove";

/// Marker line in `src/schema.rs`.
pub const MODELS_MARKER: &str =
    "// kiln:models - generated registrations land above, do not remove";

const ROUTES_SNIPPET: &str = r#"// {{pascal}} module ({{label}})
    use crate::handlers::{{snake}}_handler;
    router = router
        .route(
            "/{{plural}}",
            get({{snake}}_handler::list).post({{snake}}_handler::create),
        )
        .route(
            "/{{plural}}/{id}",
            get({{snake}}_handler::get)
                .put({{snake}}_handler::update)
                .delete({{snake}}_handler::remove),
        );

    "#;

const MODELS_SNIPPET: &str =
    "registry.register::<crate::models::{{snake}}::{{pascal}}>();\n    ";

const ROUTER_SEED: &str = r#"//! HTTP route registration.
//!
//! kiln inserts module routes at the marker below. Keep the marker line
//! intact; everything else in this file is yours to edit.

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

pub fn register_routes(mut router: Router<AppState>) -> Router<AppState> {
    // kiln:routes - generated registrations land above, do not remove
    router
}
"#;

const SCHEMA_SEED: &str = r#"//! Model registration for schema migration.
//!
//! kiln inserts model registrations at the marker below. Keep the marker
//! line intact; everything else in this file is yours to edit.

use crate::store::ModelRegistry;

pub fn register_models(registry: &mut ModelRegistry) {
    // kiln:models - generated registrations land above, do not remove
}
"#;

/// One hand-maintained file kiln edits in place: a path, the unique marker
/// expected inside it, and the snippet template inserted above that marker.
#[derive(Debug, Clone, Copy)]
pub struct InjectionTarget {
    /// Step label, e.g. "route registration"
    pub label: &'static str,
    /// Target file relative to the project root
    pub file: &'static str,
    /// Single-line sentinel comment, expected exactly once
    pub marker: &'static str,
    snippet: &'static str,
    seed: &'static str,
}

impl InjectionTarget {
    /// Render the snippet this target would insert for the given forms.
    pub fn render_snippet(&self, forms: &ModuleForms) -> Result<String> {
        render(self.label, self.snippet, forms)
    }

    /// Initial file content carrying the marker, used to seed a fresh project.
    pub fn seed(&self) -> &'static str {
        self.seed
    }

    /// Insert the rendered snippet immediately before the first occurrence of
    /// the marker, preserving the marker verbatim for future insertions.
    ///
    /// Not idempotent: running twice for the same module inserts twice; no
    /// check is made for already-injected content. A missing marker leaves
    /// the file untouched.
    pub fn inject(&self, root: &Path, forms: &ModuleForms) -> Result<()> {
        let path = root.join(self.file);
        let content =
            fs::read_to_string(&path).map_err(|e| Error::io("read", &path, e))?;
        if !content.contains(self.marker) {
            return Err(Error::MarkerNotFound {
                path,
                marker: self.marker.to_string(),
            });
        }
        let snippet = self.render_snippet(forms)?;
        let updated = content.replacen(self.marker, &format!("{}{}", snippet, self.marker), 1);
        fs::write(&path, updated).map_err(|e| Error::io("write", &path, e))?;
        Ok(())
    }
}

/// The two files edited for every module, in injection order.
pub fn targets() -> [InjectionTarget; 2] {
    [
        InjectionTarget {
            label: "route registration",
            file: "src/router.rs",
            marker: ROUTES_MARKER,
            snippet: ROUTES_SNIPPET,
            seed: ROUTER_SEED,
        },
        InjectionTarget {
            label: "model registration",
            file: "src/schema.rs",
            marker: MODELS_MARKER,
            snippet: MODELS_SNIPPET,
            seed: SCHEMA_SEED,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn forms() -> ModuleForms {
        ModuleForms::derive("payment", "Payment", "shop-api")
    }

    fn seed_target(root: &Path, target: &InjectionTarget) {
        let path = root.join(target.file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, target.seed()).unwrap();
    }

    #[test]
    fn test_seeds_contain_their_marker_once() {
        for target in targets() {
            assert_eq!(target.seed().matches(target.marker).count(), 1);
        }
    }

    #[test]
    fn test_snippets_do_not_contain_a_marker_line() {
        let forms = forms();
        for target in targets() {
            let snippet = target.render_snippet(&forms).unwrap();
            assert!(
                snippet.lines().all(|l| l.trim() != target.marker),
                "{} snippet would shadow its marker",
                target.label
            );
        }
    }

    #[test]
    fn test_inject_inserts_above_marker() {
        let temp = TempDir::new().unwrap();
        let target = targets()[1];
        seed_target(temp.path(), &target);

        target.inject(temp.path(), &forms()).unwrap();

        let content = fs::read_to_string(temp.path().join(target.file)).unwrap();
        let snippet_at = content
            .find("registry.register::<crate::models::payment::Payment>();")
            .expect("snippet missing");
        let marker_at = content.find(target.marker).expect("marker missing");
        assert!(snippet_at < marker_at);
        assert_eq!(content.matches(target.marker).count(), 1);
    }

    #[test]
    fn test_inject_twice_inserts_twice() {
        let temp = TempDir::new().unwrap();
        let target = targets()[0];
        seed_target(temp.path(), &target);
        let forms = forms();

        target.inject(temp.path(), &forms).unwrap();
        target.inject(temp.path(), &forms).unwrap();

        let content = fs::read_to_string(temp.path().join(target.file)).unwrap();
        assert_eq!(content.matches("// Payment module (Payment)").count(), 2);
        // Marker survives, once, after both snippets
        assert_eq!(content.matches(target.marker).count(), 1);
        let marker_at = content.find(target.marker).unwrap();
        assert!(content[..marker_at].matches("\"/payments\"").count() == 2);
    }

    #[test]
    fn test_missing_marker_leaves_file_unchanged() {
        let temp = TempDir::new().unwrap();
        let target = targets()[0];
        let path = temp.path().join(target.file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "fn register_routes() {}\n").unwrap();

        let err = target.inject(temp.path(), &forms()).unwrap_err();

        assert!(matches!(err, Error::MarkerNotFound { .. }));
        assert!(err.is_advisory());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "fn register_routes() {}\n"
        );
    }
}
