//! The example HTML server.
//!
//! One [`Renderer`] is built at start-up and shared by every connection, so
//! the board list is fetched once per process.

mod config;
mod router;

use std::{sync::Arc, time::Duration};

use crate::{client::Client, render::Renderer};
use anyhow::Context;
use hyper::{server::conn::http1, service::service_fn};
use hyper_util::rt::TokioIo;
use log::{error, info};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub use config::ServerConfig;
pub use router::router;

/// Serves HTTP/1 until interrupted with Ctrl-C.
///
/// Upstream requests still in flight at shutdown are cancelled.
///
/// # Errors
///
/// Fails if the client cannot be built, the address cannot be bound, or
/// accepting a connection fails.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    info!("run() initializing the server");
    let shutdown = CancellationToken::new();

    let mut builder = Client::builder()
        .base(config.api_base.as_str())
        .cancellation(shutdown.clone());
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().context("Failed to build the API client")?;
    info!("run() using upstream {}", client.base());

    let renderer = Arc::new(Renderer::new(client));

    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    info!("run() running at {}, waiting for connections...", listener.local_addr()?);

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let (stream, remote) = tokio::select! {
            accepted = listener.accept() => accepted?,
            _ = &mut ctrl_c => {
                info!("run() shutting down");
                shutdown.cancel();
                return Ok(());
            }
        };
        let renderer = renderer.clone();

        tokio::task::spawn(async move {
            let service = service_fn(|request| {
                let renderer = renderer.clone();
                async move { router(&remote, request, &*renderer).await }
            });

            if let Err(err) = http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service)
                .await
            {
                error!("run() connection from {remote} failed: {err}");
            }
        });
    }
}
