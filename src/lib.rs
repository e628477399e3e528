//! # ModelScrapOR - OpenRouter Model Rankings & Pricing Tracker
//!
//! Fetches the OpenRouter model catalog and generates a static HTML
//! report of model rankings, pricing, and free-tier availability across
//! a fixed set of topical categories.
//!
//! ## Pipeline
//!
//! A single synchronous batch run, each stage completing before the
//! next begins:
//!
//! ```text
//! OpenRouterClient          catalog::adapter         Categorizer
//!   fetch_raw_catalog() --> normalize() ----------> assign()
//!                                                       |
//!                          report::write_report <-- Ranker::views()
//! ```
//!
//! The catalog adapter tolerates malformed records by skipping them;
//! everything downstream of normalization is a pure transform over
//! immutable [`ModelRecord`](catalog::ModelRecord) values.
//!
//! ## Ranking
//!
//! OpenRouter publishes no benchmark data, so total price (input +
//! output per-million) serves as the capability proxy. Each category
//! gets three orderings (heuristic, price descending, price ascending)
//! and a capped free-tier shortlist; see [`rank`].
//!
//! ## Quick start
//!
//! ```rust
//! use modelscrapor::catalog::ModelRecord;
//! use modelscrapor::categorize::Categorizer;
//! use modelscrapor::rank::Ranker;
//!
//! let models = vec![ModelRecord {
//!     id: "openai/gpt-4o".to_string(),
//!     name: "GPT-4o".to_string(),
//!     prompt_price: 0.000005,
//!     completion_price: 0.000015,
//!     context_length: 128000,
//! }];
//!
//! let assignment = Categorizer::default().assign(&models);
//! let ranker = Ranker::default();
//! for category in assignment.iter() {
//!     let views = ranker.views(&category.members);
//!     assert!(!views.is_empty());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: API client, raw-record adapter, model entity
//! - [`categorize`]: keyword-based category assignment
//! - [`rank`]: per-category ranking views
//! - [`report`]: HTML/CSS rendering and file output
//! - [`config`]: configuration management
//! - [`error`]: error types and result alias

pub mod catalog;
pub mod categorize;
pub mod config;
pub mod error;
pub mod rank;
pub mod report;

// Re-exports for convenience
pub use catalog::{ConversationShape, FetchStats, ModelRecord, OpenRouterClient, SkipReason};
pub use categorize::{CategoryAssignment, CategoryConfig, Categorizer};
pub use config::Config;
pub use error::{Error, Result};
pub use rank::{CategoryViews, RankedModel, Ranker};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
