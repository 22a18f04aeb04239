use anyhow::Context;
use clap::Parser;
use rand::rngs::OsRng;

use foldergen::cli::Cli;
use foldergen::{fixtures, logging};

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = cli.resolve().context("failed to resolve generation settings")?;

    let progress = fixtures::progress_bar(config.total_files()?, cli.quiet)
        .context("failed to build progress bar")?;
    let report = fixtures::generate_with(&config, &mut OsRng, &progress).with_context(|| {
        format!(
            "failed to generate fixtures under {}",
            config.base_directory.display()
        )
    })?;

    println!("{report}");
    Ok(())
}
