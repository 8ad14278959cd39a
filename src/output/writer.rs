use crate::pipeline::Outputs;
use crate::render::PageOutput;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write one generated page as JSON, atomically.
///
/// The file is never left half-written: content goes to a temporary file
/// that is renamed into place on commit.
pub fn write_page(dir: &Path, filename: &str, page: &PageOutput, pretty: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory at {}", dir.display()))?;

    let path = dir.join(filename);
    let mut file = AtomicWriteFile::open(&path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    if pretty {
        serde_json::to_writer_pretty(&mut file, page)
    } else {
        serde_json::to_writer(&mut file, page)
    }
    .with_context(|| format!("Failed to serialize {filename}"))?;

    file.commit()
        .with_context(|| format!("Failed to save {}", path.display()))?;

    info!(path = %path.display(), "wrote page");
    Ok(path)
}

/// Write every generated page under the output directory.
/// Returns the paths written, in page order.
pub fn write_outputs(dir: &Path, outputs: &Outputs, pretty: bool) -> Result<Vec<PathBuf>> {
    let pages = [
        ("faq.json", outputs.faq.as_ref()),
        ("product_page.json", outputs.product_page.as_ref()),
        ("comparison.json", outputs.comparison.as_ref()),
    ];

    let mut paths = Vec::new();
    for (filename, page) in pages {
        if let Some(page) = page {
            paths.push(write_page(dir, filename, page, pretty)?);
        }
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pipeline;
    use serde_json::{json, Value};

    fn generated_outputs() -> Outputs {
        let result = pipeline::run(
            &json!({"product_name": "GlowBoost Vitamin C Serum", "price": 699}),
            &Config::default(),
        );
        assert!(result.success);
        result.outputs
    }

    #[test]
    fn test_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = generated_outputs();

        let paths = write_outputs(dir.path(), &outputs, true).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(dir.path().join("faq.json").exists());
        assert!(dir.path().join("product_page.json").exists());
        assert!(dir.path().join("comparison.json").exists());
    }

    #[test]
    fn test_written_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = generated_outputs();

        write_outputs(dir.path(), &outputs, true).unwrap();
        let content = fs::read_to_string(dir.path().join("comparison.json")).unwrap();
        let document: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(document["page_type"], "ComparisonPage");
        assert!(document["content"]["comparison_table"]["rows"].is_array());
    }

    #[test]
    fn test_compact_output() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = generated_outputs();

        write_outputs(dir.path(), &outputs, false).unwrap();
        let content = fs::read_to_string(dir.path().join("faq.json")).unwrap();
        assert!(!content.contains('\n'));
    }

    #[test]
    fn test_skips_missing_pages() {
        let dir = tempfile::tempdir().unwrap();
        let mut outputs = generated_outputs();
        outputs.faq = None;

        let paths = write_outputs(dir.path(), &outputs, true).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(!dir.path().join("faq.json").exists());
    }

    #[test]
    fn test_creates_nested_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("pages");
        let outputs = generated_outputs();

        write_outputs(&nested, &outputs, true).unwrap();
        assert!(nested.join("faq.json").exists());
    }
}
