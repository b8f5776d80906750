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
pub struct CheckCommand {
    /// Path to contractgen.toml (defaults to ./contractgen.toml)
    #[arg(short, long, default_value = "contractgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let report = ops::check(&manifest, &self.config)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
