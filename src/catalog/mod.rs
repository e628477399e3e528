//! Model catalog: API client, raw-record adapter, and the
//! [`ModelRecord`] entity with its pricing accessors.

pub mod adapter;
pub mod client;
pub mod record;

pub use adapter::{normalize, parse_record, FetchStats, SkipReason};
pub use client::OpenRouterClient;
pub use record::{ConversationShape, ModelRecord};
