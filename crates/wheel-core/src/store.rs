use crate::category::{Category, CategoryId};
use crate::chart::{Chart, ChartError, Selections, validate_categories};
use crate::selection::MAX_IMPACT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to determine data directory")]
    DataDirNotFound,
    #[error("Unsupported chart format version {0} (expected {expected})", expected = FORMAT_VERSION)]
    UnsupportedVersion(u32),
    #[error("Impact value {value} for '{id}' is outside 0..={max}", max = MAX_IMPACT)]
    ImpactOutOfRange { id: CategoryId, value: u8 },
    #[error("Invalid categories: {0}")]
    Categories(#[from] ChartError),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Serialize, Deserialize)]
struct Document {
    version: u32,
    categories: Vec<Category>,
    #[serde(default)]
    selections: Selections,
}

pub fn default_path() -> Result<PathBuf, StoreError> {
    let proj_dirs = ProjectDirs::from("org", "wheel", "impact-wheel")
        .ok_or(StoreError::DataDirNotFound)?;
    Ok(proj_dirs.data_dir().join("chart.json"))
}

pub fn to_json(chart: &Chart) -> Result<String, StoreError> {
    let doc = Document {
        version: FORMAT_VERSION,
        categories: chart.categories().to_vec(),
        selections: chart.selections().clone(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn from_json(json: &str) -> Result<Chart, StoreError> {
    let header: VersionHeader = serde_json::from_str(json)?;
    if header.version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(header.version));
    }

    let doc: Document = serde_json::from_str(json)?;
    validate_categories(&doc.categories)?;

    for (id, selection) in &doc.selections {
        for value in [selection.typical_impact, selection.stressed_impact] {
            if value > MAX_IMPACT {
                return Err(StoreError::ImpactOutOfRange {
                    id: id.clone(),
                    value,
                });
            }
        }
    }

    Ok(Chart::from_parts(doc.categories, doc.selections))
}

pub fn save(path: &Path, chart: &Chart) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    fs_err::write(path, to_json(chart)?)?;
    log::debug!("Saved chart to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Chart, StoreError> {
    from_json(&fs_err::read_to_string(path)?)
}

/// Stored chart if one exists and reads cleanly, otherwise a fresh chart over `categories`.
pub fn load_or_new(path: &Path, categories: Vec<Category>) -> Chart {
    if !path.exists() {
        return Chart::new(categories);
    }

    match load(path) {
        Ok(chart) => chart.with_categories(categories),
        Err(e) => {
            log::error!("Failed to load chart from {}: {}", path.display(), e);
            Chart::new(categories)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SegmentAddress;
    use crate::selection::Selection;

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("chart.json");

        let chart = Chart::default()
            .select(SegmentAddress::new(0, 3))
            .select(SegmentAddress::new(0, 6))
            .select(SegmentAddress::new(5, 1));
        save(&path, &chart).unwrap();

        assert_eq!(load(&path).unwrap(), chart);
    }

    #[test]
    fn test_document_layout() {
        let chart = Chart::default().select(SegmentAddress::new(0, 3));
        let value: serde_json::Value = serde_json::from_str(&to_json(&chart).unwrap()).unwrap();

        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["categories"][0]["color"], "#3a86ff");
        assert_eq!(value["selections"]["sensory"]["typicalImpact"], 4);
        assert_eq!(value["selections"]["sensory"]["stressedImpact"], 0);
    }

    #[test]
    fn test_rejects_other_versions() {
        let json = r#"{"version": 2, "categories": [], "selections": {}}"#;
        assert!(matches!(
            from_json(json),
            Err(StoreError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_impact() {
        let json = r##"{
            "version": 1,
            "categories": [{"id": "a", "name": "A", "color": "#000"}],
            "selections": {"a": {"typicalImpact": 3, "stressedImpact": 11}}
        }"##;
        assert!(matches!(
            from_json(json),
            Err(StoreError::ImpactOutOfRange { value: 11, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_category_lists() {
        let empty = r#"{"version": 1, "categories": [], "selections": {}}"#;
        assert!(matches!(
            from_json(empty),
            Err(StoreError::Categories(ChartError::TooFewCategories))
        ));

        let twins = r##"{
            "version": 1,
            "categories": [
                {"id": "a", "name": "A", "color": "#000"},
                {"id": "a", "name": "B", "color": "#fff"}
            ],
            "selections": {"a": {"typicalImpact": 2, "stressedImpact": 0}}
        }"##;
        assert!(matches!(
            from_json(twins),
            Err(StoreError::Categories(ChartError::DuplicateCategory(id))) if id.as_str() == "a"
        ));

        let crowded: Vec<String> = (0..11)
            .map(|i| format!(r##"{{"id": "c{i}", "name": "C{i}", "color": "#000"}}"##))
            .collect();
        let crowded = format!(
            r#"{{"version": 1, "categories": [{}], "selections": {{}}}}"#,
            crowded.join(",")
        );
        assert!(matches!(
            from_json(&crowded),
            Err(StoreError::Categories(ChartError::TooManyCategories))
        ));
    }

    #[test]
    fn test_repairs_hand_edited_selection() {
        let json = r##"{
            "version": 1,
            "categories": [{"id": "a", "name": "A", "color": "#000"}],
            "selections": {"a": {"typicalImpact": 6, "stressedImpact": 4}}
        }"##;
        let chart = from_json(json).unwrap();
        assert_eq!(chart.selection(&CategoryId::from("a")), Selection::new(6, 0));
    }

    #[test]
    fn test_load_or_new_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");

        let fresh = load_or_new(&path, Category::defaults());
        assert!(fresh.selections().is_empty());

        fs_err::write(&path, "not json").unwrap();
        let broken = load_or_new(&path, Category::defaults());
        assert_eq!(broken.categories().len(), Category::defaults().len());
    }
}
