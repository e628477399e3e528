//! Static report output: HTML document, shared stylesheet, file
//! writing. A swappable consumer of the core's structured views; the
//! pipeline itself never touches presentation.

pub mod css;
pub mod html;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

pub use css::render_css;
pub use html::render_html;

/// Write the rendered report files.
///
/// Both documents are fully rendered strings before this is called, so
/// a fatal path earlier in the run never leaves partial output behind.
/// Returns the written HTML and CSS paths.
pub fn write_report(dir: &Path, date_str: &str, html: &str, css: &str) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;

    let html_path = dir.join(format!("models-{date_str}.html"));
    std::fs::write(&html_path, html)?;
    info!("HTML report saved to: {}", html_path.display());

    let css_path = dir.join("style.css");
    std::fs::write(&css_path, css)?;
    info!("CSS stylesheet saved to: {}", css_path.display());

    Ok((html_path, css_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report_creates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let (html_path, css_path) =
            write_report(dir.path(), "2026-08-24", "<html></html>", "body {}").unwrap();

        assert_eq!(
            html_path.file_name().unwrap().to_str().unwrap(),
            "models-2026-08-24.html"
        );
        assert_eq!(css_path.file_name().unwrap().to_str().unwrap(), "style.css");
        assert_eq!(std::fs::read_to_string(&html_path).unwrap(), "<html></html>");
        assert_eq!(std::fs::read_to_string(&css_path).unwrap(), "body {}");
    }

    #[test]
    fn test_write_report_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports/daily");
        write_report(&nested, "2026-08-24", "x", "y").unwrap();
        assert!(nested.join("style.css").exists());
    }
}
