//! Full threads and their posts: `{board}/thread/{no}.json`.

use std::{fmt, num::ParseIntError, str::FromStr};

use crate::models::{macros::str_opt_ref, maybe_de_bool};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The number of a thread, which is also the ID of its OP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThreadNo(u64);

impl ThreadNo {
    /// Wraps a raw thread number.
    pub const fn new(no: u64) -> Self {
        Self(no)
    }

    /// Returns the raw thread number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ThreadNo {
    fn from(no: u64) -> Self {
        Self(no)
    }
}

impl fmt::Display for ThreadNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ThreadNo {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A collection of [`Post`]s representing a whole thread.
///
/// Posts are ordered by posting time; the first one is the OP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullThread {
    #[serde(default)]
    posts: Vec<Post>,
}

impl FullThread {
    /// Returns the thread-opening post, if the thread has any posts.
    pub fn op(&self) -> Option<&Post> {
        self.posts.first()
    }

    /// Looks a post up by its ID.
    pub fn find(&self, no: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.no == no)
    }

    /// Returns all posts in thread order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

impl From<Vec<Post>> for FullThread {
    fn from(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

impl std::ops::Deref for FullThread {
    type Target = Vec<Post>;

    fn deref(&self) -> &Self::Target {
        &self.posts
    }
}

/// A single post in a thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The numeric post ID, unique within the thread.
    no: u64,

    /// For replies: the ID of the thread being replied to. For OP posts: this value is 0.
    #[serde(default)]
    resto: u64,

    /// Whether the thread is stickied. Present only for OP posts.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "maybe_de_bool"
    )]
    sticky: Option<bool>,

    /// Whether the thread is closed to replies. Present only for OP posts.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "maybe_de_bool"
    )]
    closed: Option<bool>,

    /// `MM/DD/YY(Day)HH:MM(:SS)` in the EST/EDT timezone.
    #[serde(default)]
    now: String,

    /// UNIX timestamp (seconds) of post creation.
    #[serde(default)]
    time: i64,

    /// Name of the poster. Defaults to `Anonymous` upstream.
    #[serde(default)]
    name: String,

    /// Capcode used for this post (`mod`, `admin`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capcode: Option<String>,

    /// Subject of the OP post, if one was provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,

    /// The comment as HTML, possibly carrying quotelink markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    com: Option<String>,

    /// SEO URL slug, OP only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    semantic_url: Option<String>,

    /// Total number of replies, OP only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replies: Option<u32>,

    /// Number of unique posters, OP only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unique_ips: Option<u32>,
}

impl Post {
    /// Returns the numeric post ID.
    pub fn no(&self) -> u64 {
        self.no
    }

    /// Returns the thread ID (or `0` if the post is OP).
    pub fn resto(&self) -> u64 {
        self.resto
    }

    /// Returns true if this post opened its thread.
    pub fn is_op(&self) -> bool {
        self.resto == 0
    }

    /// Returns whether the thread is stickied to the top of the page.
    pub fn sticky(&self) -> Option<bool> {
        self.sticky
    }

    /// Returns whether the thread is closed to replies.
    pub fn closed(&self) -> Option<bool> {
        self.closed
    }

    /// Returns the formatted creation time of the post.
    pub fn now(&self) -> &str {
        &self.now
    }

    /// Returns the UNIX timestamp when the post was created.
    pub fn time(&self) -> i64 {
        self.time
    }

    /// Returns the creation time, if the timestamp is in range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// Returns the name of the user who posted.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the capcode identifier for the post (if present).
    pub fn capcode(&self) -> Option<&str> {
        str_opt_ref!(self.capcode)
    }

    /// Returns the subject for an OP post (if provided).
    pub fn sub(&self) -> Option<&str> {
        str_opt_ref!(self.sub)
    }

    /// Returns the comment content of the post (if provided).
    pub fn com(&self) -> Option<&str> {
        str_opt_ref!(self.com)
    }

    /// Returns the SEO URL slug for a thread (if present; OP only).
    pub fn semantic_url(&self) -> Option<&str> {
        str_opt_ref!(self.semantic_url)
    }

    /// Returns the total number of replies to the thread (if present; OP only).
    pub fn replies(&self) -> Option<u32> {
        self.replies
    }

    /// Returns the number of unique IPs in a thread (if present; OP only).
    pub fn unique_ips(&self) -> Option<u32> {
        self.unique_ips
    }
}

#[cfg(test)]
pub(crate) fn post(no: u64, com: &str) -> Post {
    Post {
        no,
        name: String::from("Anonymous"),
        com: (!com.is_empty()).then(|| com.to_string()),
        ..Post::default()
    }
}
