//! Carepath summarizer: plain-language explanations of medical records and
//! community clinic recommendations, backed by a text-generation API.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod summarizer;

pub use client::{GeminiClient, TextGenerator};
pub use config::{API_KEY_VARS, DEFAULT_ENDPOINT, DEFAULT_MODEL, SummarizerSettings};
pub use error::{AiError, Result};
pub use prompt::{explain_prompt, recommend_prompt};
pub use summarizer::{
    EXPLAIN_EMPTY, EXPLAIN_NOT_CONFIGURED, EXPLAIN_UNAVAILABLE, RECOMMEND_EMPTY,
    RECOMMEND_NOT_CONFIGURED, RECOMMEND_UNAVAILABLE, Summarizer,
};
