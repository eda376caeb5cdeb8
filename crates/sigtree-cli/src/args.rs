//! Shared argument definitions.

use std::path::PathBuf;

use anyhow::{Context, bail};
use sigtree::{BuilderConfig, SigtreeConfig};

/// Document and builder arguments shared by every command.
///
/// Embedded in command Args using `#[command(flatten)]`.
#[derive(clap::Args, Clone, Default)]
pub struct DocumentArgs {
    /// XML document to work on (defaults to `output` from Sigtree.toml)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to the nearest Sigtree.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Name of the root element
    #[arg(long)]
    pub root: Option<String>,

    /// Path segment delimiter
    #[arg(short = 'd', long)]
    pub delimiter: Option<char>,
}

impl DocumentArgs {
    /// Merges the config file with command-line overrides.
    pub fn resolve(&self) -> anyhow::Result<(BuilderConfig, PathBuf)> {
        let config_path = match &self.config {
            Some(path) => Some(path.clone()),
            None => {
                let cwd = std::env::current_dir().context("cannot read current directory")?;
                SigtreeConfig::find_config_file(&cwd)
            }
        };
        let file_config = match &config_path {
            Some(path) => SigtreeConfig::load(path)
                .with_context(|| format!("cannot load config {}", path.display()))?,
            None => SigtreeConfig::default(),
        };

        let builder = BuilderConfig::new(
            self.root
                .clone()
                .unwrap_or_else(|| file_config.builder.root_element().to_string()),
            self.delimiter.unwrap_or(file_config.builder.delimiter()),
        )?;

        let Some(output) = self.output.clone().or(file_config.output) else {
            bail!("no document given: pass --output or set `output` in Sigtree.toml");
        };
        Ok((builder, output))
    }
}
