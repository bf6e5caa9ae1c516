//! The generation pipeline: four emits, then two injections.

use std::path::Path;

use kiln_core::{ModuleForms, Result, emit};

use crate::inject::targets;
use crate::report::{GenerateReport, Outcome};
use crate::templates::{TemplateSpec, specs};

/// A rendered file held in memory, for `--dry-run` output.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// Drives one generation run for a single module.
pub struct Generator<'a> {
    forms: &'a ModuleForms,
}

impl<'a> Generator<'a> {
    pub fn new(forms: &'a ModuleForms) -> Self {
        Self { forms }
    }

    /// Render everything in memory without touching disk: the four artifact
    /// files plus the two registration snippets.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = Vec::new();
        for spec in specs() {
            files.push(PreviewFile {
                path: spec.output_path(self.forms).display().to_string(),
                content: spec.render(self.forms)?,
            });
        }
        for target in targets() {
            files.push(PreviewFile {
                path: format!("{} (snippet for {})", target.file, target.label),
                content: target.render_snippet(self.forms)?,
            });
        }
        Ok(files)
    }

    /// Run the six steps against a project root and report each outcome.
    ///
    /// The first render or emit failure aborts the run; remaining steps are
    /// recorded as skipped and files already written stay on disk. Injection
    /// failures are advisory and never stop the sibling injection.
    pub fn generate(&self, root: &Path) -> GenerateReport {
        let mut report = GenerateReport::default();
        let mut aborted = false;

        for spec in specs() {
            let rel = spec.output_path(self.forms);
            let label = rel.display().to_string();
            if aborted {
                report.record(label, Outcome::Skipped);
                continue;
            }
            match self.emit_artifact(root, &spec, &rel) {
                Ok(()) => report.record(label, Outcome::Written),
                Err(e) => {
                    report.record(label, Outcome::Failed(e));
                    aborted = true;
                }
            }
        }

        for target in targets() {
            let label = format!("{} in {}", target.label, target.file);
            if aborted {
                report.record(label, Outcome::Skipped);
                continue;
            }
            match target.inject(root, self.forms) {
                Ok(()) => report.record(label, Outcome::Injected),
                Err(e) => report.record(label, Outcome::Warned(e)),
            }
        }

        report
    }

    fn emit_artifact(&self, root: &Path, spec: &TemplateSpec, rel: &Path) -> Result<()> {
        let content = spec.render(self.forms)?;
        emit(&root.join(rel), &content)
    }
}
