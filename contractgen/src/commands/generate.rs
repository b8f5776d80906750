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
pub struct GenerateCommand {
    /// Path to contractgen.toml (defaults to ./contractgen.toml)
    #[arg(short, long, default_value = "contractgen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides the manifest's `output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let manifest_dir = ops::manifest_dir(&self.config);
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| manifest.output_dir(manifest_dir));

        let report = ops::generate(
            &manifest,
            ops::generate::GenerateOptions {
                manifest_dir,
                output_dir: &output_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
