use anyhow::{Context, bail};
use sigtree::SerialElement;
use tracing::info;

use crate::args::DocumentArgs;
use crate::commands::open_for_write;
use crate::util::read_input;

#[derive(clap::Args)]
pub struct Args {
    /// JSON array of `{ "path": ..., "value": ... }` objects (use - for stdin)
    pub items: String,
    /// Replace a document whose root element does not match
    #[arg(long)]
    pub force: bool,
    #[command(flatten)]
    pub document: DocumentArgs,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let (config, output) = args.document.resolve()?;

    let file_opt = if args.items == "-" {
        None
    } else {
        Some(args.items.as_str())
    };
    let contents = read_input(file_opt).map_err(anyhow::Error::msg)?;
    let items: Vec<SerialElement> =
        serde_json::from_str(&contents).context("items must be a JSON array of path/value objects")?;

    let mut builder = open_for_write(&config, &output, args.force)?;
    let all_written = builder.write_all(&items);
    if !builder.save(&output) {
        bail!("failed to save {}", output.display());
    }
    info!(items = items.len(), path = %output.display(), "applied items");

    // Items that could be written are saved even if others failed.
    if !all_written {
        bail!("some items could not be written, see log output");
    }
    Ok(())
}
