//! HTML report rendering.
//!
//! Consumes only the structured category views; no ranking logic lives
//! here. Categories whose views are empty are skipped, never an error.

use crate::catalog::ConversationShape;
use crate::categorize::CategoryAssignment;
use crate::rank::{CategoryViews, RankedModel, Ranker};

/// Minimal HTML escaping for text interpolated into the document.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Anchor id for a category section.
fn anchor(category: &str) -> String {
    category.to_lowercase().replace(' ', "-")
}

fn unknown_or(rank: Option<u32>) -> String {
    rank.map_or_else(|| "?".to_string(), |r| r.to_string())
}

/// Render the complete report document.
///
/// One section per non-empty category, each with the heuristic top
/// list, both price orderings, and the free shortlist when non-empty.
pub fn render_html(
    assignment: &CategoryAssignment,
    ranker: &Ranker,
    date_str: &str,
    top_n: usize,
    shape: ConversationShape,
) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>OpenRouter Models - {date_str}</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
    <div class="container">
        <header>
            <h1>OpenRouter Models as of {date_str}</h1>
            <button id="theme-toggle" aria-label="Toggle dark/light mode">&#127763;</button>
        </header>
        <nav class="category-nav">
            <ul>
"#
    ));

    for category in assignment.iter() {
        html.push_str(&format!(
            "                <li><a href=\"#{}\">{}</a></li>\n",
            anchor(&category.name),
            escape(&category.name)
        ));
    }

    html.push_str("            </ul>\n        </nav>\n        <main>\n");

    for category in assignment.iter() {
        let views = ranker.views(&category.members);
        if views.is_empty() {
            continue;
        }
        push_section(&mut html, &category.name, &views, top_n, shape);
    }

    html.push_str(
        r#"        </main>
        <footer>
            <p>Generated by <a href="https://github.com/modelscrapor/modelscrapor" target="_blank">ModelScrapOR</a></p>
            <p>Data sourced from <a href="https://openrouter.ai/" target="_blank">OpenRouter</a></p>
        </footer>
    </div>
    <script>
        const themeToggle = document.getElementById('theme-toggle');
        const html = document.documentElement;
        const savedTheme = localStorage.getItem('theme');
        const systemPreference = window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light';
        html.setAttribute('data-theme', savedTheme || systemPreference);

        themeToggle.addEventListener('click', () => {
            const next = html.getAttribute('data-theme') === 'dark' ? 'light' : 'dark';
            html.setAttribute('data-theme', next);
            localStorage.setItem('theme', next);
        });

        document.querySelectorAll('.category-nav a').forEach(anchor => {
            anchor.addEventListener('click', function (e) {
                e.preventDefault();
                const target = document.querySelector(this.getAttribute('href'));
                if (target) {
                    target.scrollIntoView({ behavior: 'smooth', block: 'start' });
                }
            });
        });
    </script>
</body>
</html>
"#,
    );

    html
}

fn push_section(
    html: &mut String,
    category: &str,
    views: &CategoryViews,
    top_n: usize,
    shape: ConversationShape,
) {
    html.push_str(&format!(
        "\n            <section id=\"{}\" class=\"category-section\">\n                <h2>{}</h2>\n",
        anchor(category),
        escape(category)
    ));

    push_subsection(
        html,
        "Daily Rankings",
        views.heuristic.iter().take(top_n),
        |item| {
            format!(
                "{} <span class=\"price\">{}</span> <span class=\"conv-cost\">(~${:.4}/conv)</span>",
                escape(&item.record.name),
                item.record.price_display(),
                item.record.conversation_cost(shape)
            )
        },
    );

    push_subsection(
        html,
        "Rankings by Price (Highest First)",
        views.by_price_desc.iter().take(top_n),
        |item| {
            format!(
                "{} <span class=\"price\">{}</span>",
                escape(&item.record.name),
                item.record.price_display()
            )
        },
    );

    push_subsection(
        html,
        "Rankings by Price (Lowest First)",
        views.by_price_asc.iter().take(top_n),
        |item| {
            format!(
                "{} <span class=\"price\">{}</span> <span class=\"ranking\">(ranking: #{})</span>",
                escape(&item.record.name),
                item.record.price_display(),
                unknown_or(item.rank)
            )
        },
    );

    if !views.free.is_empty() {
        html.push_str(
            "                <article class=\"subsection\">\n                    <h3>Best FREE Models</h3>\n                    <ul class=\"model-list free-models\">\n",
        );
        for item in &views.free {
            html.push_str(&format!(
                "                        <li><span class=\"free-badge\">[FREE]</span> {} <span class=\"ranking\">({} #{})</span></li>\n",
                escape(&item.record.name),
                escape(category),
                unknown_or(item.rank)
            ));
        }
        html.push_str("                    </ul>\n                </article>\n");
    }

    html.push_str("            </section>\n");
}

fn push_subsection<'a>(
    html: &mut String,
    title: &str,
    items: impl Iterator<Item = &'a RankedModel>,
    line: impl Fn(&RankedModel) -> String,
) {
    html.push_str(&format!(
        "                <article class=\"subsection\">\n                    <h3>{title}</h3>\n                    <ol class=\"model-list\">\n"
    ));
    for item in items {
        html.push_str(&format!("                        <li>{}</li>\n", line(item)));
    }
    html.push_str("                    </ol>\n                </article>\n");
}
