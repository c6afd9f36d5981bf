use std::net::SocketAddr;

use http_body_util::Full;
use hyper::{body::Bytes, http::response::Builder, Method, Request, Response, StatusCode};
use log::{error, info};
use tokio::time::Instant;

use crate::{client::Source, render::Renderer};

trait ContentType {
    fn html(self) -> Builder;
}

impl ContentType for Builder {
    fn html(self) -> Builder {
        self.header("Content-Type", "text/html; charset=utf-8")
    }
}

/// Dispatches one request to the renderer.
///
/// Routes:
/// - `GET /` board list
/// - `GET /{board}` catalog
/// - `GET /{board}/{thread}` thread
///
/// Render failures are reported in the body with a status code matching the
/// failure.
///
/// # Errors
///
/// Fails only if the response itself cannot be built.
pub async fn router<S, B>(
    remote: &SocketAddr,
    request: Request<B>,
    renderer: &Renderer<S>,
) -> anyhow::Result<Response<Full<Bytes>>>
where
    S: Source,
{
    let path = request.uri().path();
    info!("router() new request to '{path}' from '{remote}'");

    if request.method() != Method::GET {
        return plain(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let start = Instant::now();
    let rendered = match segments.as_slice() {
        [] => renderer.render_board_list().await,
        [board] => renderer.render_board(board).await,
        [board, thread] => renderer.render_thread(board, thread).await,
        _ => return plain(StatusCode::NOT_FOUND, "not found"),
    };

    match rendered {
        Ok(page) => {
            info!(
                "router() request to '{path}' from '{remote}' success, took {} ms",
                start.elapsed().as_millis()
            );
            let response = Response::builder()
                .html()
                .status(StatusCode::OK)
                .body(Full::new(Bytes::from(page)))?;
            Ok(response)
        }
        Err(err) => {
            error!("router() request to '{path}' error: {err:?}");
            let status = StatusCode::from_u16(err.status_code())?;
            let message = html_escape::encode_text(&err.to_string()).into_owned();
            plain(status, &message)
        }
    }
}

fn plain(status: StatusCode, message: &str) -> anyhow::Result<Response<Full<Bytes>>> {
    let response = Response::builder()
        .html()
        .status(status)
        .body(Full::new(Bytes::from(message.to_string())))?;
    Ok(response)
}
