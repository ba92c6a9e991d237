//! Run command: replay a file of JSON-RPC requests

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use quill_server::QuillServer;

use crate::output::format_output;
use crate::AppContext;

#[derive(Args)]
pub struct RunArgs {
    /// File with one JSON-RPC request per line
    pub file: PathBuf,

    /// Start without the demo data
    #[arg(long)]
    pub empty: bool,
}

pub async fn run(args: &RunArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let storage = ctx.open_storage(args.empty).await?;
    let server = QuillServer::new(storage);

    let mut handled = 0;
    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let response = server.handle_line(line).await;
        println!("{}", format_output(&response, ctx.format));
        handled += 1;
    }

    tracing::info!("Handled {} requests from {}", handled, args.file.display());
    Ok(())
}
