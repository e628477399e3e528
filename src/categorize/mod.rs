//! Keyword-based model categorization.
//!
//! OpenRouter does not tag models with topics, so assignment is a
//! heuristic over the model name and id. A model may land in several
//! categories (intentional fan-out), and two fallback rules guarantee
//! that no category in the fixed set ends up empty for a non-empty
//! input:
//!
//! 1. A record matching no keyword at all goes to each of the
//!    designated general categories.
//! 2. Any category still empty after the pass is backfilled with the
//!    top records by total price from the entire input set.

use serde::{Deserialize, Serialize};

use crate::catalog::ModelRecord;

/// How many top-priced records backfill a still-empty category.
const BACKFILL_COUNT: usize = 10;

/// One category with its keyword set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Category display name.
    pub name: String,
    /// Lowercase substrings matched against model name and id.
    pub keywords: Vec<String>,
}

/// Ordered category list with keyword sets and the general-fallback
/// subset. Configuration data, not behavior: fully substitutable via
/// the TOML config file, order-preserving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Ordered category rules; list order is report order.
    pub rules: Vec<CategoryRule>,
    /// Categories that collect records matching no keyword.
    pub fallback: Vec<String>,
}

fn rule(name: &str, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                rule("Programming", &["code", "coder", "coding", "program", "dev", "devstral"]),
                rule("Roleplay", &["roleplay", "rp", "character", "chat", "story", "creative"]),
                rule("Marketing", &["marketing", "business", "content", "copywriting"]),
                rule("SEO", &["seo", "search", "optimization"]),
                rule("Technology", &["tech", "technical", "system", "engineering"]),
                rule("Science", &["science", "scientific", "research", "academic"]),
                rule("Translation", &["translate", "translation", "language", "multilingual"]),
                rule("Legal", &["legal", "law", "compliance"]),
                rule("Finance", &["finance", "financial", "economics", "trading"]),
                rule("Health", &["health", "medical", "healthcare", "clinical"]),
                rule("Trivia", &["trivia", "quiz", "general", "knowledge"]),
                rule("Academia", &["academic", "scholar", "research", "education"]),
            ],
            fallback: vec![
                "Technology".to_string(),
                "Trivia".to_string(),
                "Academia".to_string(),
            ],
        }
    }
}

impl CategoryConfig {
    /// Category names in report order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }
}

/// One category's member list after assignment.
#[derive(Debug, Clone)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Members in insertion order over the input set.
    pub members: Vec<ModelRecord>,
}

/// Category name → ordered member sequence, in configured order.
#[derive(Debug, Clone, Default)]
pub struct CategoryAssignment {
    categories: Vec<Category>,
}

impl CategoryAssignment {
    /// Iterate categories in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Look up one category's members by name.
    pub fn members(&self, name: &str) -> Option<&[ModelRecord]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.members.as_slice())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether there are no categories at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Assigns models to categories by keyword matching.
pub struct Categorizer {
    config: CategoryConfig,
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(CategoryConfig::default())
    }
}

impl Categorizer {
    /// Create a categorizer over the given category configuration.
    pub fn new(config: CategoryConfig) -> Self {
        Self { config }
    }

    /// The active category configuration.
    pub fn config(&self) -> &CategoryConfig {
        &self.config
    }

    /// Assign every model to its matching categories.
    ///
    /// Iteration order over `models` is insertion order within each
    /// category. For a non-empty input, every configured category has
    /// at least one member afterwards.
    pub fn assign(&self, models: &[ModelRecord]) -> CategoryAssignment {
        let mut categories: Vec<Category> = self
            .config
            .rules
            .iter()
            .map(|rule| Category {
                name: rule.name.clone(),
                members: Vec::new(),
            })
            .collect();

        for model in models {
            let name_lower = model.name.to_lowercase();
            let id_lower = model.id.to_lowercase();
            let mut matched = false;

            for (idx, rule) in self.config.rules.iter().enumerate() {
                let hit = rule
                    .keywords
                    .iter()
                    .any(|kw| name_lower.contains(kw.as_str()) || id_lower.contains(kw.as_str()));
                if hit {
                    categories[idx].members.push(model.clone());
                    matched = true;
                }
            }

            if !matched {
                for (idx, rule) in self.config.rules.iter().enumerate() {
                    if self.config.fallback.iter().any(|f| f == &rule.name) {
                        categories[idx].members.push(model.clone());
                    }
                }
            }
        }

        // Backfill still-empty categories from the whole input set.
        let backfill = top_by_total_price(models, BACKFILL_COUNT);
        for category in &mut categories {
            if category.members.is_empty() {
                category.members.clone_from(&backfill);
            }
        }

        CategoryAssignment { categories }
    }
}

/// Top `count` records by total price descending, stable on ties.
fn top_by_total_price(models: &[ModelRecord], count: usize) -> Vec<ModelRecord> {
    let mut sorted = models.to_vec();
    sorted.sort_by(|a, b| b.total_price().total_cmp(&a.total_price()));
    sorted.truncate(count);
    sorted
}
