use anyhow::{Context, bail};

use crate::args::DocumentArgs;
use crate::commands::open_for_write;

#[derive(clap::Args)]
pub struct Args {
    /// Address of the value, e.g. `Devices/Light id="5"/Brightness/`
    pub path: String,
    /// Value to write
    pub value: String,
    /// Replace a document whose root element does not match
    #[arg(long)]
    pub force: bool,
    #[command(flatten)]
    pub document: DocumentArgs,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let (config, output) = args.document.resolve()?;
    let mut builder = open_for_write(&config, &output, args.force)?;

    builder
        .try_write(&args.path, &args.value)
        .with_context(|| format!("cannot write {:?}", args.path))?;
    if !builder.save(&output) {
        bail!("failed to save {}", output.display());
    }
    Ok(())
}
