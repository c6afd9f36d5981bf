//! Inlining of in-thread reply references.
//!
//! Upstream renders a reply to post `123456789` inside a comment as
//!
//! ```text
//! <a href="#p123456789" class="quotelink">&gt;&gt;123456789</a>
//! ```
//!
//! [`resolve`] swaps each such anchor for a `<blockquote>` holding the quoted
//! post's comment. The pattern below follows the markup the API emits today;
//! it is a parsing contract and breaks if upstream changes the markup.

use std::borrow::Cow;

use crate::models::thread::Post;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref QUOTELINK_REGEX: Regex = Regex::new(
        r##"<a\shref="#[a-zA-Z0-9]{10}"\sclass="quotelink">&gt;&gt;([0-9]{9})</a>"##
    )
    .expect("quotelink pattern is valid");
}

/// Returns `target`'s comment with every resolvable quotelink replaced by a
/// blockquote of the quoted post.
///
/// Only posts in `posts` can be quoted. References to anything else (another
/// thread, a deleted post) are left as they are. A post without a comment
/// resolves to the empty string.
pub fn resolve(posts: &[Post], target: &Post) -> String {
    resolve_comment(posts, target.com().unwrap_or_default())
}

/// Same as [`resolve`], for a bare comment.
pub fn resolve_comment(posts: &[Post], comment: &str) -> String {
    let mut resolved = comment.to_string();

    for capture in QUOTELINK_REGEX.captures_iter(comment) {
        let (Some(anchor), Some(id)) = (capture.get(0), capture.get(1)) else {
            continue;
        };
        let Ok(id) = id.as_str().parse::<u64>() else {
            continue;
        };
        let Some(quoted) = posts.iter().find(|post| post.no() == id) else {
            log::trace!("quotelink to {id} is outside the thread");
            continue;
        };

        // The quoted comment loses its own quotelinks; it is not resolved further.
        let inner = strip(quoted.com().unwrap_or_default());
        let block = format!("<blockquote>{inner}</blockquote>");
        resolved = resolved.replace(anchor.as_str(), &block);
    }

    resolved
}

/// Removes every quotelink anchor from `comment`.
pub fn strip(comment: &str) -> Cow<'_, str> {
    QUOTELINK_REGEX.replace_all(comment, "")
}

/// Iterates the post IDs referenced by `comment`, in order of appearance.
pub fn references(comment: &str) -> impl Iterator<Item = u64> + '_ {
    QUOTELINK_REGEX
        .captures_iter(comment)
        .filter_map(|capture| capture.get(1))
        .filter_map(|id| id.as_str().parse().ok())
}
