//! Real-estate MCP server binary.

#[tokio::main]
async fn main() -> miette::Result<()> {
    estate::cli::run().await
}
