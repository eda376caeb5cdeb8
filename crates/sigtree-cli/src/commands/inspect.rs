use anyhow::{Context, bail};
use sigtree::Builder;
use sigtree::xml::{Config, node_to_string};

use crate::args::DocumentArgs;

#[derive(clap::Args)]
pub struct Args {
    /// Only show the element addressed by this path
    pub path: Option<String>,
    #[command(flatten)]
    pub document: DocumentArgs,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let (config, output) = args.document.resolve()?;
    if !output.exists() {
        bail!("{} does not exist", output.display());
    }
    let builder = Builder::open(&config, &output)
        .with_context(|| format!("cannot open {}", output.display()))?;
    if builder.replaced_mismatched_root() {
        bail!(
            "{} does not have the root element <{}>",
            output.display(),
            config.root_element()
        );
    }

    let document = builder.document();
    let node = match &args.path {
        Some(path) => match document.find_path(path, builder.delimiter())? {
            Some(node) => node,
            None => bail!("nothing found at {path:?}"),
        },
        None => document.root_id(),
    };
    let xml = Config {
        declaration: false,
        ..Config::default()
    };
    print!("{}", node_to_string(document, node, &xml)?);
    Ok(())
}
