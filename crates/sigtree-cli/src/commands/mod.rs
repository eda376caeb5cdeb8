use std::path::Path;

use anyhow::{Context, bail};
use sigtree::{Builder, BuilderConfig};

pub mod apply;
pub mod inspect;
pub mod set;

/// Opens the document at `output` for writing.
///
/// A file whose root element differs from the configured one would be
/// replaced on save, so it is refused unless `force` is set.
pub fn open_for_write(config: &BuilderConfig, output: &Path, force: bool) -> anyhow::Result<Builder> {
    let builder = Builder::open(config, output)
        .with_context(|| format!("cannot open {}", output.display()))?;
    if builder.replaced_mismatched_root() && !force {
        bail!(
            "{} does not have the root element <{}>; pass --force to replace it",
            output.display(),
            config.root_element()
        );
    }
    Ok(builder)
}
