//! HTML pages for the board list, a board catalog and a thread.
//!
//! Escaping: every field except comments (board codes and titles, subjects,
//! names, capcodes) is escaped. Comments are markup generated by the API,
//! which already escapes the poster's text inside them, so they are embedded
//! as is once their quotelinks are resolved.

mod cache;
mod html;

use std::num::ParseIntError;

use crate::{
    client::Source,
    error::Error,
    models::{
        board::Board,
        catalog::Page,
        thread::{FullThread, ThreadNo},
    },
    quotelink,
};
use reqwest::StatusCode;
use thiserror::Error;

pub use cache::BoardListCache;
pub use html::Html;

/// Why a page could not be rendered.
///
/// The [`Display`](std::fmt::Display) output is meant to be shown to the
/// visitor in place of the page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// `boards.json` could not be fetched.
    #[error("error fetching the list of boards: {0}")]
    Boards(#[source] Error),

    /// The catalog of a board could not be fetched.
    #[error("error fetching the board {board}: {source}")]
    Catalog {
        /// Requested board code.
        board: String,
        /// Client failure.
        #[source]
        source: Error,
    },

    /// A thread could not be fetched.
    #[error("error getting the thread {no}: {source}")]
    Thread {
        /// Requested thread.
        no: ThreadNo,
        /// Client failure.
        #[source]
        source: Error,
    },

    /// The thread segment of the path is not a number.
    #[error("error converting {input} to int: {source}")]
    Format {
        /// The segment as requested.
        input: String,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The thread was fetched but holds no posts.
    #[error("no posts, sorry")]
    EmptyThread,
}

impl RenderError {
    /// HTTP status code that reflects this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RenderError::Format { .. } => 400,
            RenderError::EmptyThread => 404,
            RenderError::Boards(source)
            | RenderError::Catalog { source, .. }
            | RenderError::Thread { source, .. } => match source {
                Error::UnexpectedStatus(StatusCode::NOT_FOUND) => 404,
                Error::Cancelled => 503,
                _ => 502,
            },
        }
    }
}

/// Renders pages from the data of a [`Source`].
///
/// Owns the board-list cache, so one renderer should be shared by all
/// requests of a server.
#[derive(Debug)]
pub struct Renderer<S> {
    source: S,
    boards: BoardListCache,
}

impl<S> Renderer<S>
where
    S: Source,
{
    /// Creates a renderer with an empty board-list cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            boards: BoardListCache::new(),
        }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Renders the list of boards.
    ///
    /// The first successful render is cached for the lifetime of the renderer.
    ///
    /// # Errors
    ///
    /// Fails if the board list cannot be fetched; the failure is not cached.
    pub async fn render_board_list(&self) -> Result<String, RenderError> {
        let page = self
            .boards
            .get_or_try_init(|| async {
                let boards = self
                    .source
                    .list_boards()
                    .await
                    .map_err(RenderError::Boards)?;
                log::info!("caching the list of {} boards", boards.len());
                Ok::<_, RenderError>(board_list_page(&boards))
            })
            .await?;
        Ok(page.to_string())
    }

    /// Renders the catalog of `board`.
    ///
    /// # Errors
    ///
    /// Fails if the catalog cannot be fetched.
    pub async fn render_board(&self, board: &str) -> Result<String, RenderError> {
        let pages = self
            .source
            .get_catalog(board)
            .await
            .map_err(|source| RenderError::Catalog {
                board: board.to_string(),
                source,
            })?;
        Ok(catalog_page(board, &pages))
    }

    /// Renders thread `thread` of `board`, with quotelinks resolved.
    ///
    /// # Errors
    ///
    /// Fails if `thread` is not a number, if the thread cannot be fetched, or
    /// if it has no posts.
    pub async fn render_thread(&self, board: &str, thread: &str) -> Result<String, RenderError> {
        let no = thread
            .parse::<ThreadNo>()
            .map_err(|source| RenderError::Format {
                input: thread.to_string(),
                source,
            })?;
        let thread = self
            .source
            .get_thread(board, no)
            .await
            .map_err(|source| RenderError::Thread { no, source })?;

        if thread.is_empty() {
            return Err(RenderError::EmptyThread);
        }
        Ok(thread_page(&thread))
    }
}

/// Renders a `<ul>` linking every board.
pub fn board_list_page(boards: &[Board]) -> String {
    let mut html = Html::new();
    html.open("html").open("body").newline();
    html.open("h1").text("Boards").close("h1").newline();
    html.open("ul").newline();
    for board in boards {
        html.open("li")
            .link(&format!("/{}", board.code()), board.title())
            .close("li")
            .newline();
    }
    html.close("ul").newline();
    html.close("body").close("html");
    html.finish()
}

/// Renders every thread preview of a catalog.
pub fn catalog_page(board: &str, pages: &[Page]) -> String {
    let mut html = Html::new();
    html.trusted("<html lang=\"en\">").open("body").newline();
    html.open("h1").text(board).close("h1").newline();

    for thread in pages.iter().flat_map(Page::threads) {
        let subject = thread.sub().filter(|sub| !sub.is_empty()).unwrap_or("thread");
        html.open("h2")
            .link(&format!("/{board}/{}", thread.no()), subject)
            .close("h2")
            .newline();

        if let Some(capcode) = thread.capcode().filter(|capcode| !capcode.is_empty()) {
            html.open("div").text(capcode).close("div").newline();
        }

        html.text(thread.name())
            .text(" | ")
            .trusted(thread.com().unwrap_or_default())
            .newline();
        html.text(&format!("omitted {} posts", thread.omitted_posts()))
            .open("br")
            .newline();

        if !thread.last_replies().is_empty() {
            html.open("ul").newline();
            for reply in thread.last_replies() {
                html.open("li").text(reply.name()).text(" | ");
                match reply.com().filter(|com| !com.is_empty()) {
                    Some(com) => html.trusted(com),
                    None => html.text("no content"),
                };
                html.close("li").newline();
            }
            html.close("ul").newline();
        }
    }

    html.close("body").close("html");
    html.finish()
}

/// Renders every post of a thread that has a comment.
pub fn thread_page(thread: &FullThread) -> String {
    let mut html = Html::new();
    html.trusted("<html lang=\"en\">").open("body").newline();

    if let Some(subject) = thread.op().and_then(|op| op.sub()).filter(|sub| !sub.is_empty()) {
        html.open("h1").text(subject).close("h1").newline();
    }

    html.open("ul").newline();
    for post in thread.posts() {
        if post.com().unwrap_or_default().is_empty() {
            continue;
        }
        html.open("li")
            .trusted(&quotelink::resolve(thread.posts(), post))
            .close("li")
            .newline();
    }
    html.close("ul").newline();

    html.close("body").close("html");
    html.finish()
}

#[cfg(test)]
mod tests {
    use super::{RenderError, Renderer};
    use crate::{
        error::Error,
        testing::{link, FakeSource},
    };
    use reqwest::StatusCode;
    use serde_json::json;
    use test_case::test_case;

    fn boards() -> serde_json::Value {
        json!([
            { "board": "g", "title": "Technology", "ws_board": 1, "meta_description": "tech" },
            { "board": "mu", "title": "Music & <Stuff>", "ws_board": 1, "meta_description": "music" }
        ])
    }

    #[tokio::test]
    async fn board_list_links_every_board() {
        let renderer = Renderer::new(FakeSource::default().with_boards(boards()));
        let page = renderer.render_board_list().await.unwrap();

        assert!(page.contains("<li><a href=\"/g\">Technology</a></li>"));
        assert!(page.contains("<a href=\"/mu\">Music &amp; &lt;Stuff&gt;</a>"));
    }

    #[tokio::test]
    async fn board_list_is_fetched_once() {
        let renderer = Renderer::new(FakeSource::default().with_boards(boards()));

        let first = renderer.render_board_list().await.unwrap();
        let second = renderer.render_board_list().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(renderer.source().board_list_calls(), 1);
    }

    #[tokio::test]
    async fn board_list_failure_is_retried() {
        let renderer = Renderer::new(FakeSource::default());

        let err = renderer.render_board_list().await.unwrap_err();
        assert!(err
            .to_string()
            .starts_with("error fetching the list of boards: fourchan: "));
        assert!(renderer.render_board_list().await.is_err());
        assert_eq!(renderer.source().board_list_calls(), 2);
    }

    #[tokio::test]
    async fn catalog_renders_threads_and_replies() {
        let source = FakeSource::default().with_catalog(
            "po",
            json!([{
                "page": 1,
                "threads": [
                    {
                        "no": 570368,
                        "name": "Anonymous",
                        "sub": "Welcome <b>",
                        "com": "hello<br>world",
                        "capcode": "mod",
                        "omitted_posts": 3,
                        "last_replies": [
                            { "no": 570369, "name": "Anonymous", "com": "first" },
                            { "no": 570370, "name": "<i>anon</i>" }
                        ]
                    },
                    { "no": 570400, "name": "Anonymous", "com": "" }
                ]
            }]),
        );
        let page = Renderer::new(source).render_board("po").await.unwrap();

        assert!(page.contains("<h1>po</h1>"));
        assert!(page.contains("<h2><a href=\"/po/570368\">Welcome &lt;b&gt;</a></h2>"));
        assert!(page.contains("<div>mod</div>"));
        assert!(page.contains("Anonymous | hello<br>world"));
        assert!(page.contains("omitted 3 posts<br>"));
        assert!(page.contains("<li>Anonymous | first</li>"));
        assert!(page.contains("<li>&lt;i&gt;anon&lt;/i&gt; | no content</li>"));
        assert!(page.contains("<h2><a href=\"/po/570400\">thread</a></h2>"));
        assert!(page.contains("omitted 0 posts<br>"));
    }

    #[tokio::test]
    async fn catalog_threads_keep_server_order() {
        let source = FakeSource::default().with_catalog(
            "g",
            json!([
                { "page": 1, "threads": [{ "no": 3, "name": "a", "sub": "third" }] },
                { "page": 2, "threads": [{ "no": 1, "name": "a", "sub": "first" }] }
            ]),
        );
        let page = Renderer::new(source).render_board("g").await.unwrap();

        let third = page.find("third").unwrap();
        let first = page.find("first").unwrap();
        assert!(third < first);
    }

    #[tokio::test]
    async fn missing_catalog_reports_board() {
        let renderer = Renderer::new(FakeSource::default());
        let err = renderer.render_board("zz").await.unwrap_err();

        assert!(err.to_string().starts_with("error fetching the board zz: "));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn thread_resolves_quotelinks() {
        let source = FakeSource::default().with_thread(
            "g",
            111_111_111,
            json!([
                { "no": 111111111, "resto": 0, "name": "Anonymous", "sub": "Rust <3", "com": "OP text" },
                { "no": 222222222, "resto": 111111111, "name": "Anonymous", "com": format!("{} nice", link(111_111_111)) },
                { "no": 333333333, "resto": 111111111, "name": "Anonymous" }
            ]),
        );
        let page = Renderer::new(source)
            .render_thread("g", "111111111")
            .await
            .unwrap();

        assert!(page.contains("<h1>Rust &lt;3</h1>"));
        assert!(page.contains("<li>OP text</li>"));
        assert!(page.contains("<li><blockquote>OP text</blockquote> nice</li>"));
        assert_eq!(page.matches("<li>").count(), 2);
    }

    #[tokio::test]
    async fn thread_without_subject_has_no_heading() {
        let source = FakeSource::default().with_thread(
            "g",
            5,
            json!([{ "no": 5, "name": "Anonymous", "com": "hi" }]),
        );
        let page = Renderer::new(source).render_thread("g", "5").await.unwrap();

        assert!(!page.contains("<h1>"));
        assert!(page.contains("<li>hi</li>"));
    }

    #[test_case("abc" ; "letters")]
    #[test_case("12a" ; "trailing letter")]
    #[test_case("" ; "empty")]
    #[tokio::test]
    async fn non_numeric_thread_is_a_format_error(input: &str) {
        let renderer = Renderer::new(FakeSource::default());
        let err = renderer.render_thread("g", input).await.unwrap_err();

        assert!(matches!(err, RenderError::Format { .. }));
        assert!(err
            .to_string()
            .starts_with(&format!("error converting {input} to int: ")));
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn empty_thread_says_so() {
        let source = FakeSource::default().with_thread("g", 7, json!([]));
        let err = Renderer::new(source)
            .render_thread("g", "7")
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::EmptyThread));
        assert_eq!(err.to_string(), "no posts, sorry");
        assert_eq!(err.status_code(), 404);
    }

    #[test_case(Error::Cancelled, 503 ; "cancelled")]
    #[test_case(Error::UnexpectedStatus(StatusCode::NOT_FOUND), 404 ; "not found upstream")]
    #[test_case(Error::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR), 502 ; "upstream failure")]
    fn fetch_errors_map_to_status(source: Error, status: u16) {
        let err = RenderError::Boards(source);
        assert_eq!(err.status_code(), status);
    }
}
