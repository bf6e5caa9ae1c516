mod generator;
mod inject;
mod manifest;
mod render;
mod report;

pub mod templates;

pub use generator::{Generator, PreviewFile};
pub use inject::{InjectionTarget, targets};
pub use manifest::{DEFAULT_MODULE_PATH, detect_module_path};
pub use render::render;
pub use report::{GenerateReport, Outcome, Step};
pub use templates::{TemplateSpec, specs};
