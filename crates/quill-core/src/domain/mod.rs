//! Domain entities - the core business objects.

mod post;

pub use post::{EXCERPT_MAX_CHARS, Post, TITLE_MAX_CHARS};
