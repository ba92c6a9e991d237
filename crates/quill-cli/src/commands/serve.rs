//! Serve command

use clap::Args;
use quill_server::QuillServer;

use crate::AppContext;

#[derive(Args)]
pub struct ServeArgs {
    /// Serve over HTTP instead of stdio, optionally on ADDR
    #[arg(long, value_name = "ADDR")]
    pub http: Option<Option<String>>,

    /// Start without the demo data
    #[arg(long)]
    pub empty: bool,
}

pub async fn run(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let storage = ctx.open_storage(args.empty).await?;
    let server = QuillServer::new(storage);

    match &args.http {
        None => server.run_stdio().await,
        Some(addr) => {
            let addr = addr.as_deref().unwrap_or(&ctx.config.http_addr);
            serve_http(server, addr).await
        }
    }
}

#[cfg(feature = "http")]
async fn serve_http(
    server: QuillServer<quill_storage::MemoryStorage>,
    addr: &str,
) -> anyhow::Result<()> {
    quill_server::run_http_server(std::sync::Arc::new(server), addr).await
}

#[cfg(not(feature = "http"))]
async fn serve_http(
    _server: QuillServer<quill_storage::MemoryStorage>,
    addr: &str,
) -> anyhow::Result<()> {
    anyhow::bail!("Cannot serve on {}: built without the http feature", addr)
}
