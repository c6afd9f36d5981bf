//! Boards as listed by `boards.json`.

use crate::{
    client::Source,
    models::{catalog::Page, de_bool},
    result::Result,
};
use serde::{Deserialize, Serialize};

/// Top-level object of `boards.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BoardList {
    pub(crate) boards: Vec<Board>,
}

/// A board as listed by `boards.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// The short code of the board, e.g. `mu`.
    board: String,

    /// The readable title, e.g. `Music`.
    title: String,

    /// True if the board is worksafe.
    #[serde(default, deserialize_with = "de_bool")]
    ws_board: bool,

    /// SEO meta description content for a board.
    #[serde(default)]
    meta_description: String,
}

impl Board {
    /// Returns the short code used in catalog and thread URLs.
    pub fn code(&self) -> &str {
        &self.board
    }

    /// Returns the board title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the short text describing the board.
    pub fn description(&self) -> &str {
        &self.meta_description
    }

    /// Returns true if the board is safe for work.
    pub fn sfw(&self) -> bool {
        self.ws_board
    }

    /// Fetches the catalog pages of this board.
    ///
    /// # Errors
    ///
    /// Fails with whatever the source reports for the catalog request.
    pub async fn catalog<S>(&self, source: &S) -> Result<Vec<Page>>
    where
        S: Source + ?Sized,
    {
        source.get_catalog(&self.board).await
    }
}

#[cfg(test)]
mod tests {
    use super::BoardList;
    use crate::testing::FakeSource;
    use serde_json::json;

    const BOARDS: &str = r#"{
        "boards": [
            {
                "board": "3",
                "title": "3DCG",
                "ws_board": 1,
                "per_page": 15,
                "pages": 10,
                "meta_description": "&quot;/3/ - 3DCG&quot; is 4chan's board for 3D modeling."
            },
            {
                "board": "b",
                "title": "Random",
                "ws_board": 0,
                "meta_description": "random"
            }
        ]
    }"#;

    #[test]
    fn decodes_board_list_and_ignores_unknown_fields() {
        let list: BoardList = serde_json::from_str(BOARDS).unwrap();
        assert_eq!(list.boards.len(), 2);

        let first = &list.boards[0];
        assert_eq!(first.code(), "3");
        assert_eq!(first.title(), "3DCG");
        assert!(first.sfw());
        assert!(first.description().starts_with("&quot;/3/"));

        assert!(!list.boards[1].sfw());
    }

    #[tokio::test]
    async fn board_fetches_its_own_catalog() {
        let list: BoardList = serde_json::from_str(BOARDS).unwrap();
        let source = FakeSource::default()
            .with_catalog("3", json!([{ "page": 1, "threads": [{ "no": 1 }] }]));

        let pages = list.boards[0].catalog(&source).await.unwrap();
        assert_eq!(pages[0].threads().len(), 1);
        assert!(list.boards[1].catalog(&source).await.is_err());
    }
}
