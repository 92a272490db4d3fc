//! Construction-time errors
//!
//! Per-frame `update`/`draw` never fail; everything fallible happens while
//! building a [`crate::Game`] or parsing [`crate::Settings`].

use crate::renderer::sprite::SpriteError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSettings { field: &'static str, reason: String },
    #[error("sprite atlas: {0}")]
    Sprite(#[from] SpriteError),
    #[error("settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}
