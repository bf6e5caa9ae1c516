use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use kiln_codegen::targets;
use kiln_core::WriteResult;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Project root containing src/ (defaults to current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        for target in targets() {
            let path = self.root.join(target.file);
            let result = kiln_core::write_if_missing(&path, target.seed()).unwrap_or_exit();
            match result {
                WriteResult::Written => println!("  + {}", target.file),
                WriteResult::Skipped => println!("  - {} (exists, kept)", target.file),
            }
        }

        println!();
        println!("project seeded; run 'kiln gen <name>' to scaffold a module");

        Ok(())
    }
}
