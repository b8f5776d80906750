use std::path::PathBuf;

use clap::Args;
use contractgen_manifest::Manifest;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to contractgen.toml (defaults to ./contractgen.toml)
    #[arg(short, long, default_value = "contractgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides the manifest's `output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let output_dir = match &self.output {
            Some(output) => output.clone(),
            None => {
                let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
                manifest.output_dir(ops::manifest_dir(&self.config))
            }
        };

        let report = ops::clean(ops::clean::CleanOptions {
            output_dir: &output_dir,
            dry_run: self.dry_run,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
