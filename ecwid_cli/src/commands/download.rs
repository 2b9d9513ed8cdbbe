use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ecwid_api::Store;

#[derive(Args)]
pub struct DownloadArgs {
    /// Product the file is attached to
    #[arg(long)]
    pub product_id: i64,

    /// File ID
    #[arg(long)]
    pub file_id: i64,

    /// Destination path
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &DownloadArgs, store: &Store<'_>) -> Result<()> {
    let bytes = store
        .download_product_file(args.product_id, args.file_id)?
        .execute()?;
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    eprintln!("Wrote {} bytes to {}", bytes.len(), args.out.display());
    Ok(())
}
