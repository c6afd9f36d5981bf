#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate)]
//! # fourchan
//!
//! fourchan is a small wrapper library around an imageboard's read-only API,
//! together with an example server that renders it as plain HTML.
//!
//! This library can fetch:
//! - the list of [`Board`]s
//! - the catalog of a board, as [`Page`]s of thread previews
//! - a [`FullThread`]
//!
//! and [resolve](quotelink::resolve) the reply references of a post into
//! blockquotes.
//!
//! ## Example: Printing the comments of a thread.
//!
//! ```rust,no_run
//! # type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
//! use fourchan::{quotelink, Client, ThreadNo};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new();
//!     let thread = client.get_thread("po", ThreadNo::new(570368)).await?;
//!
//!     for post in thread.posts() {
//!         let comment = quotelink::resolve(thread.posts(), post);
//!         println!("{}: {}", post.no(), comment.replace("<br>", "\n"));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Board`]:      crate::board::Board
//! [`Page`]:       crate::catalog::Page
//! [`FullThread`]: crate::thread::FullThread

/// Client module contains [`Client`] for requesting data.
pub mod client;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub mod quotelink;

pub mod render;

pub(crate) mod result;

pub mod server;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{Client, ClientBuilder, Source};
pub use error::Error;
pub use models::*;
pub use models::{board::Board, catalog::Page, thread::FullThread, thread::Post, thread::ThreadNo};
pub use render::{RenderError, Renderer};
pub use result::Result;
