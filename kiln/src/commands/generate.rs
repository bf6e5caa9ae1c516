use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kiln_codegen::{Generator, Outcome, detect_module_path};
use kiln_core::{ModuleForms, validate_name};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenCommand {
    /// Module name in snake, kebab, camel, or Pascal spelling
    pub name: String,

    /// Human-readable label (defaults to the module name)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Crate name recorded in generated headers (auto-detected from Cargo.toml)
    #[arg(short, long)]
    pub module_path: Option<String>,

    /// Project root containing src/ (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenCommand {
    /// Run the gen command
    pub fn run(&self) -> Result<()> {
        let name = self.name.trim();
        validate_name(name).unwrap_or_exit();

        let label = self
            .label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(name);
        let module_path = self
            .module_path
            .clone()
            .unwrap_or_else(|| detect_module_path(&self.root));
        let forms = ModuleForms::derive(name, label, &module_path);
        let generator = Generator::new(&forms);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        println!("generating module: {} ({})", forms.pascal, forms.label);

        let report = generator.generate(&self.root);
        for step in report.steps() {
            match &step.outcome {
                Outcome::Written | Outcome::Injected => println!("  + {}", step.label),
                Outcome::Skipped => println!("  - {} (skipped)", step.label),
                Outcome::Warned(e) => eprintln!("  ! {}: {} (add manually)", step.label, e),
                Outcome::Failed(e) => eprintln!("  x {}: {}", step.label, e),
            }
        }

        if !report.succeeded() {
            // Files written before the failure stay in place
            return Err(eyre::eyre!("generation aborted; earlier files were kept"));
        }

        println!();
        println!("module {} generated", forms.pascal);
        println!();
        println!("Next steps:");
        println!("  1. edit src/models/{}.rs and add your fields", forms.snake);
        println!(
            "  2. edit src/services/{}_service.rs and fill in the business logic",
            forms.snake
        );
        if report.warnings() > 0 {
            println!("  3. finish the registrations reported above by hand");
        }

        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        let files = generator.preview().unwrap_or_exit();

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated or edited", files.len());

        Ok(())
    }
}
