//! Model record entity and pricing accessors.
//!
//! A [`ModelRecord`] is immutable once the adapter constructs it; every
//! price figure below is derived on demand from the raw per-token
//! prices, never stored.

use serde::{Deserialize, Serialize};

/// Tokens-per-million scaling factor for display prices.
const PER_MILLION: f64 = 1_000_000.0;

/// Shape of the multi-turn exchange used for cost estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationShape {
    /// Tokens the user sends per turn.
    pub user_tokens: u32,
    /// Tokens the model returns per turn.
    pub model_tokens: u32,
    /// Number of turns in the exchange.
    pub turns: u32,
}

impl Default for ConversationShape {
    fn default() -> Self {
        Self {
            user_tokens: 125,
            model_tokens: 375,
            turns: 10,
        }
    }
}

/// One model from the upstream catalog.
///
/// Prices are raw per-token USD as served by the API; use
/// [`input_price`](Self::input_price) / [`output_price`](Self::output_price)
/// for the per-million-token figures shown in reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRecord {
    /// Unique model identifier, e.g. `openai/gpt-4o`.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Raw prompt price per token (USD).
    pub prompt_price: f64,
    /// Raw completion price per token (USD).
    pub completion_price: f64,
    /// Maximum context window, 0 when the API omits it.
    pub context_length: u32,
}

impl ModelRecord {
    /// Price per million input tokens (USD).
    pub fn input_price(&self) -> f64 {
        self.prompt_price * PER_MILLION
    }

    /// Price per million output tokens (USD).
    pub fn output_price(&self) -> f64 {
        self.completion_price * PER_MILLION
    }

    /// Combined input + output per-million price.
    ///
    /// This is the single scalar used as the capability proxy for every
    /// ranking in the report.
    pub fn total_price(&self) -> f64 {
        self.input_price() + self.output_price()
    }

    /// Whether both derived prices are exactly zero.
    ///
    /// Exact equality on purpose: a raw price of 1e-7 rounds to "$0.00"
    /// at display precision but the model is not free.
    pub fn is_free(&self) -> bool {
        self.input_price() == 0.0 && self.output_price() == 0.0
    }

    /// Estimated USD cost of a fixed-shape multi-turn conversation.
    ///
    /// Computed from the raw per-token prices; the per-million scaling
    /// cancels against the token counts, so
    /// `cost = turns * (user_tokens * prompt + model_tokens * completion)`.
    pub fn conversation_cost(&self, shape: ConversationShape) -> f64 {
        f64::from(shape.turns)
            * (f64::from(shape.user_tokens) * self.prompt_price
                + f64::from(shape.model_tokens) * self.completion_price)
    }

    /// Pricing formatted for display, e.g. `($2.50/$10.00)`.
    pub fn price_display(&self) -> String {
        format!("(${:.2}/${:.2})", self.input_price(), self.output_price())
    }
}
