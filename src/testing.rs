//! In-memory [`Source`] used by the renderer and router tests.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use crate::{
    client::Source,
    error::Error,
    models::{
        board::Board,
        catalog::Page,
        thread::{FullThread, ThreadNo},
    },
    result::Result,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

#[derive(Debug, Default)]
pub(crate) struct FakeSource {
    pub(crate) boards: Option<Vec<Board>>,
    pub(crate) catalogs: HashMap<String, Vec<Page>>,
    pub(crate) threads: HashMap<(String, u64), FullThread>,
    pub(crate) board_list_calls: AtomicUsize,
}

impl FakeSource {
    pub(crate) fn with_boards(mut self, boards: serde_json::Value) -> Self {
        self.boards = Some(serde_json::from_value(boards).unwrap());
        self
    }

    pub(crate) fn with_catalog(mut self, board: &str, pages: serde_json::Value) -> Self {
        self.catalogs
            .insert(board.to_string(), serde_json::from_value(pages).unwrap());
        self
    }

    pub(crate) fn with_thread(mut self, board: &str, no: u64, posts: serde_json::Value) -> Self {
        let thread = serde_json::from_value(json!({ "posts": posts })).unwrap();
        self.threads.insert((board.to_string(), no), thread);
        self
    }

    pub(crate) fn board_list_calls(&self) -> usize {
        self.board_list_calls.load(Ordering::SeqCst)
    }
}

fn not_found() -> Error {
    Error::UnexpectedStatus(StatusCode::NOT_FOUND)
}

#[async_trait]
impl Source for FakeSource {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        self.board_list_calls.fetch_add(1, Ordering::SeqCst);
        self.boards
            .clone()
            .ok_or(Error::UnexpectedStatus(StatusCode::BAD_GATEWAY))
    }

    async fn get_catalog(&self, board: &str) -> Result<Vec<Page>> {
        self.catalogs.get(board).cloned().ok_or_else(not_found)
    }

    async fn get_thread(&self, board: &str, no: ThreadNo) -> Result<FullThread> {
        self.threads
            .get(&(board.to_string(), no.get()))
            .cloned()
            .ok_or_else(not_found)
    }
}

pub(crate) fn link(id: u64) -> String {
    format!(r##"<a href="#p{id}" class="quotelink">&gt;&gt;{id}</a>"##)
}
