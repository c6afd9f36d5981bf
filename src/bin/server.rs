use clap::Parser;
use fourchan::server::{self, ServerConfig};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    SimpleLogger::new().with_level(config.log_level).init()?;

    server::run(config).await
}
