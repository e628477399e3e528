//! Shared stylesheet for the report.

/// The stylesheet written next to every report, with light/dark theme
/// variables keyed off the `data-theme` attribute the page script sets.
pub fn render_css() -> &'static str {
    r"/* ModelScrapOR Stylesheet */

:root {
    --bg-primary: #ffffff;
    --bg-secondary: #f5f5f5;
    --text-primary: #1a1a1a;
    --text-secondary: #666666;
    --border-color: #e0e0e0;
    --accent-color: #3b82f6;
    --accent-hover: #2563eb;
    --free-badge: #10b981;
    --shadow: rgba(0, 0, 0, 0.1);
}

[data-theme='dark'] {
    --bg-primary: #1a1a1a;
    --bg-secondary: #2d2d2d;
    --text-primary: #f5f5f5;
    --text-secondary: #a0a0a0;
    --border-color: #404040;
    --accent-color: #60a5fa;
    --accent-hover: #93c5fd;
    --free-badge: #34d399;
    --shadow: rgba(0, 0, 0, 0.4);
}

* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto,
        'Helvetica Neue', Arial, sans-serif;
    background-color: var(--bg-primary);
    color: var(--text-primary);
    line-height: 1.6;
    transition: background-color 0.3s, color 0.3s;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
}

header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 30px 0;
    border-bottom: 2px solid var(--border-color);
}

h1 {
    font-size: 2rem;
    font-weight: 700;
}

#theme-toggle {
    background: var(--bg-secondary);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    padding: 8px 14px;
    font-size: 1.2rem;
    cursor: pointer;
    transition: transform 0.2s;
}

#theme-toggle:hover {
    transform: scale(1.1);
}

.category-nav {
    position: sticky;
    top: 0;
    background: var(--bg-primary);
    padding: 15px 0;
    border-bottom: 1px solid var(--border-color);
    z-index: 10;
}

.category-nav ul {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
    list-style: none;
}

.category-nav a {
    color: var(--accent-color);
    text-decoration: none;
    padding: 6px 12px;
    border-radius: 6px;
    background: var(--bg-secondary);
    font-size: 0.9rem;
    transition: background-color 0.2s, color 0.2s;
}

.category-nav a:hover {
    background: var(--accent-color);
    color: var(--bg-primary);
}

.category-section {
    margin: 40px 0;
    padding: 30px;
    background: var(--bg-secondary);
    border-radius: 12px;
    box-shadow: 0 2px 8px var(--shadow);
}

.category-section h2 {
    font-size: 1.6rem;
    margin-bottom: 20px;
    color: var(--accent-color);
}

.subsection {
    margin: 25px 0;
}

.subsection h3 {
    font-size: 1.1rem;
    margin-bottom: 12px;
    color: var(--text-secondary);
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.model-list {
    padding-left: 24px;
}

.model-list li {
    padding: 6px 8px;
    border-radius: 6px;
    transition: transform 0.15s, background-color 0.15s;
}

.model-list li:hover {
    background: var(--bg-primary);
    transform: translateX(4px);
}

.price {
    color: var(--text-secondary);
    font-size: 0.9rem;
}

.conv-cost {
    color: var(--text-secondary);
    font-size: 0.85rem;
    font-style: italic;
}

.ranking {
    color: var(--accent-color);
    font-size: 0.85rem;
}

.free-badge {
    background: var(--free-badge);
    color: #ffffff;
    padding: 2px 8px;
    border-radius: 4px;
    font-size: 0.85rem;
    font-weight: 700;
    margin-right: 8px;
}

.free-models {
    list-style: none;
    padding-left: 0;
}

footer {
    text-align: center;
    padding: 30px 0;
    margin-top: 50px;
    border-top: 2px solid var(--border-color);
    color: var(--text-secondary);
}

footer a {
    color: var(--accent-color);
    text-decoration: none;
}

footer a:hover {
    text-decoration: underline;
}

@media (max-width: 768px) {
    .container {
        padding: 10px;
    }

    header {
        flex-direction: column;
        gap: 20px;
        text-align: center;
    }

    h1 {
        font-size: 1.5rem;
    }

    .category-nav ul {
        justify-content: center;
    }

    .category-section {
        padding: 20px;
    }

    .model-list li:hover {
        transform: none;
    }
}
"
}
