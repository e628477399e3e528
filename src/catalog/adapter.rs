//! Raw catalog record normalization.
//!
//! The upstream API serves heterogeneous JSON: prices arrive as decimal
//! strings, optional fields come and go between revisions. This adapter
//! turns each raw record into a validated [`ModelRecord`] or an explicit
//! [`SkipReason`], so one malformed entry never aborts the batch.

use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::record::ModelRecord;

/// Why a single raw record was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The `id` field is absent or not a string.
    #[error("missing or non-string `id`")]
    MissingId,
    /// The `name` field is absent or not a string.
    #[error("missing or non-string `name`")]
    MissingName,
}

/// Counts for fetch observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Records successfully normalized.
    pub fetched: usize,
    /// Records dropped with a [`SkipReason`].
    pub skipped: usize,
}

/// Parse one raw catalog entry.
///
/// `id` and `name` are required; pricing and context length default to
/// zero when absent or of the wrong type. Prices are accepted both as
/// JSON strings (`"0.000005"`, the API's usual form) and as numbers.
pub fn parse_record(raw: &Value) -> Result<ModelRecord, SkipReason> {
    let id = raw
        .get("id")
        .and_then(Value::as_str)
        .ok_or(SkipReason::MissingId)?;
    let name = raw
        .get("name")
        .and_then(Value::as_str)
        .ok_or(SkipReason::MissingName)?;

    let pricing = raw.get("pricing");
    let prompt_price = price_field(pricing, "prompt");
    let completion_price = price_field(pricing, "completion");

    let context_length = raw
        .get("context_length")
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0);

    Ok(ModelRecord {
        id: id.to_string(),
        name: name.to_string(),
        prompt_price,
        completion_price,
        context_length,
    })
}

/// Extract one per-token price, defaulting to 0 on absence or bad type.
fn price_field(pricing: Option<&Value>, key: &str) -> f64 {
    let value = match pricing.and_then(|p| p.get(key)) {
        Some(v) => v,
        None => return 0.0,
    };
    match value {
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Normalize a fetched batch, preserving upstream order.
///
/// Bad records are skipped with a warning; the stats carry the
/// fetched/skipped split for the run log.
pub fn normalize(raw_records: &[Value]) -> (Vec<ModelRecord>, FetchStats) {
    let mut models = Vec::with_capacity(raw_records.len());
    let mut stats = FetchStats::default();

    for raw in raw_records {
        match parse_record(raw) {
            Ok(model) => {
                models.push(model);
                stats.fetched += 1;
            }
            Err(reason) => {
                warn!("Skipping model due to parsing error: {reason}");
                stats.skipped += 1;
            }
        }
    }

    info!(
        "Normalized {} models ({} skipped)",
        stats.fetched, stats.skipped
    );
    (models, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_record() {
        let raw = json!({
            "id": "openai/gpt-4o",
            "name": "GPT-4o",
            "pricing": { "prompt": "0.000005", "completion": "0.000015" },
            "context_length": 128000
        });
        let m = parse_record(&raw).unwrap();
        assert_eq!(m.id, "openai/gpt-4o");
        assert_eq!(m.name, "GPT-4o");
        assert!((m.prompt_price - 0.000005).abs() < 1e-12);
        assert!((m.completion_price - 0.000015).abs() < 1e-12);
        assert_eq!(m.context_length, 128000);
    }

    #[test]
    fn test_missing_id_skips() {
        let raw = json!({ "name": "Anonymous" });
        assert_eq!(parse_record(&raw), Err(SkipReason::MissingId));
    }

    #[test]
    fn test_missing_name_skips() {
        let raw = json!({ "id": "x/y" });
        assert_eq!(parse_record(&raw), Err(SkipReason::MissingName));
    }

    #[test]
    fn test_defaults_for_absent_fields() {
        let raw = json!({ "id": "a/b", "name": "Bare" });
        let m = parse_record(&raw).unwrap();
        assert_eq!(m.prompt_price, 0.0);
        assert_eq!(m.completion_price, 0.0);
        assert_eq!(m.context_length, 0);
        assert!(m.is_free());
    }

    #[test]
    fn test_non_numeric_price_defaults_to_zero() {
        let raw = json!({
            "id": "a/b",
            "name": "Odd",
            "pricing": { "prompt": "not-a-number", "completion": null },
            "context_length": "huge"
        });
        let m = parse_record(&raw).unwrap();
        assert_eq!(m.prompt_price, 0.0);
        assert_eq!(m.completion_price, 0.0);
        assert_eq!(m.context_length, 0);
    }

    #[test]
    fn test_numeric_price_accepted() {
        let raw = json!({
            "id": "a/b",
            "name": "Numeric",
            "pricing": { "prompt": 0.000002, "completion": 0.000006 }
        });
        let m = parse_record(&raw).unwrap();
        assert!((m.prompt_price - 0.000002).abs() < 1e-12);
        assert!((m.completion_price - 0.000006).abs() < 1e-12);
    }

    #[test]
    fn test_batch_drops_only_bad_records() {
        let raw = vec![
            json!({ "id": "a", "name": "A" }),
            json!({ "id": "b", "name": "B" }),
            json!({ "name": "no id here" }),
            json!({ "id": "c", "name": "C" }),
            json!({ "id": "d", "name": "D" }),
        ];
        let (models, stats) = normalize(&raw);
        assert_eq!(models.len(), 4);
        assert_eq!(stats.fetched, 4);
        assert_eq!(stats.skipped, 1);
        // Upstream order is preserved.
        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }
}
