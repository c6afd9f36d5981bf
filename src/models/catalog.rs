//! Catalog pages of a board: `{board}/catalog.json`.

use crate::models::{macros::str_opt_ref, maybe_de_bool, thread::Post, thread::ThreadNo};
use serde::{Deserialize, Serialize};

/// Represents a page within a board catalog, containing multiple thread previews.
///
/// Pages and the threads in them keep the order the server sent them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// current page number
    page: u32,
    /// threads in the current page
    #[serde(default)]
    threads: Vec<ThreadPreview>,
}

impl Page {
    /// Returns the page number of the page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns the thread previews on this page.
    pub fn threads(&self) -> &[ThreadPreview] {
        &self.threads
    }
}

/// The OP of a thread as shown in the catalog, with a sample of its latest replies.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThreadPreview {
    /// The thread number; pass it to `get_thread`.
    no: ThreadNo,

    /// Always 0 for a catalog entry.
    #[serde(default)]
    resto: u64,

    /// 1 if the thread is stickied, not present otherwise
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "maybe_de_bool"
    )]
    sticky: Option<bool>,

    /// 1 if the thread is closed, not present otherwise
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "maybe_de_bool"
    )]
    closed: Option<bool>,

    /// Time of post creation in MM/DD/YY(Day)HH:MM(:SS) EST/EDT format
    #[serde(default)]
    now: String,

    /// UNIX timestamp of post creation
    #[serde(default)]
    time: i64,

    /// Name user posted with (defaults to "Anonymous")
    #[serde(default)]
    name: String,

    /// Capcode for the post (if present)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capcode: Option<String>,

    /// OP subject text (if present)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,

    /// Comment (HTML escaped) if present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    com: Option<String>,

    /// Number of replies minus number of previewed replies
    #[serde(default)]
    omitted_posts: u32,

    /// Total number of replies to thread
    #[serde(default)]
    replies: u32,

    /// UNIX timestamp of last thread modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified: Option<i64>,

    /// SEO URL slug for thread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    semantic_url: Option<String>,

    /// Most recent replies to the thread, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    last_replies: Vec<Post>,
}

impl ThreadPreview {
    /// Returns the thread number.
    pub fn no(&self) -> ThreadNo {
        self.no
    }

    /// Returns the ID of the thread being replied to, 0 for an OP.
    pub fn resto(&self) -> u64 {
        self.resto
    }

    /// Returns true if the thread is stickied, or None otherwise.
    pub fn sticky(&self) -> Option<bool> {
        self.sticky
    }

    /// Returns true if the thread is closed, or None otherwise.
    pub fn closed(&self) -> Option<bool> {
        self.closed
    }

    /// Returns the time of post creation as a formatted string.
    pub fn now(&self) -> &str {
        &self.now
    }

    /// Returns the UNIX timestamp of post creation.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Returns the name user posted with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the capcode if present.
    pub fn capcode(&self) -> Option<&str> {
        str_opt_ref!(self.capcode)
    }

    /// Returns the subject text if present.
    pub fn sub(&self) -> Option<&str> {
        str_opt_ref!(self.sub)
    }

    /// Returns the OP comment if present.
    pub fn com(&self) -> Option<&str> {
        str_opt_ref!(self.com)
    }

    /// Returns the number of replies not shown in [`Self::last_replies`].
    pub fn omitted_posts(&self) -> u32 {
        self.omitted_posts
    }

    /// Returns the total number of replies to the thread.
    pub fn replies(&self) -> u32 {
        self.replies
    }

    /// Returns the UNIX timestamp of the last thread modification.
    pub fn last_modified(&self) -> Option<i64> {
        self.last_modified
    }

    /// Returns the SEO URL slug for the thread.
    pub fn semantic_url(&self) -> Option<&str> {
        str_opt_ref!(self.semantic_url)
    }

    /// Returns the sample of most recent replies.
    pub fn last_replies(&self) -> &[Post] {
        &self.last_replies
    }
}
