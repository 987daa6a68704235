//! Panel sets authored in a YAML file.
//!
//! ```yaml
//! panel_sets:
//!   - id: morning
//!     panels:
//!       - kind: welcome
//!         header: GOOD MORNING
//!         paragraphs:
//!           - text: A new day.
//!             verse: Lamentations 3:23
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

use crate::domain::foundation::{PanelSetId, ValidationError};
use crate::domain::panel::{Panel, PanelSet};
use crate::ports::{PanelCatalog, StoreError};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    panel_sets: Vec<PanelSetDto>,
}

#[derive(Debug, Deserialize)]
struct PanelSetDto {
    id: String,
    panels: Vec<Panel>,
}

impl PanelSetDto {
    fn into_domain(self) -> Result<PanelSet, ValidationError> {
        PanelSet::new(PanelSetId::new(self.id)?, self.panels)
    }
}

/// Catalog loaded once from a YAML document.
#[derive(Debug, Clone)]
pub struct YamlPanelCatalog {
    sets: Vec<PanelSet>,
}

impl YamlPanelCatalog {
    /// Parse a catalog document. Every set must be valid and ids unique.
    pub fn from_yaml(yaml: &str) -> Result<Self, StoreError> {
        let file: CatalogFile =
            serde_yaml::from_str(yaml).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut sets: Vec<PanelSet> = Vec::with_capacity(file.panel_sets.len());
        for dto in file.panel_sets {
            let set = dto.into_domain()?;
            if sets.iter().any(|s| s.id() == set.id()) {
                return Err(ValidationError::invalid_format(
                    "panel_sets",
                    format!("duplicate panel set id '{}'", set.id()),
                )
                .into());
            }
            sets.push(set);
        }
        if sets.is_empty() {
            return Err(ValidationError::empty_field("panel_sets").into());
        }
        Ok(Self { sets })
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_yaml(&yaml)?;
        tracing::info!(
            path = %path.display(),
            panel_sets = catalog.sets.len(),
            "panel catalog loaded"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl PanelCatalog for YamlPanelCatalog {
    async fn get(&self, id: &PanelSetId) -> Result<Option<PanelSet>, StoreError> {
        Ok(self.sets.iter().find(|set| set.id() == id).cloned())
    }

    async fn list_ids(&self) -> Result<Vec<PanelSetId>, StoreError> {
        Ok(self.sets.iter().map(|set| set.id().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::panel::PanelKind;

    const CATALOG: &str = r#"
panel_sets:
  - id: short
    panels:
      - kind: welcome
        header: HELLO
        paragraphs:
          - text: Be still.
            verse: Psalm 46:10
      - kind: present_loop
        header: PRAY
      - kind: closing
        header: AMEN
"#;

    #[tokio::test]
    async fn parses_panel_sets() {
        let catalog = YamlPanelCatalog::from_yaml(CATALOG).unwrap();
        let id = PanelSetId::new("short").unwrap();
        let set = catalog.get(&id).await.unwrap().unwrap();

        assert_eq!(set.panels().len(), 3);
        assert_eq!(set.first().paragraphs[0].verse.as_deref(), Some("Psalm 46:10"));
        assert_eq!(set.next_kind(PanelKind::PresentLoop), Some(PanelKind::Closing));
    }

    #[test]
    fn rejects_out_of_order_panels() {
        let yaml = r#"
panel_sets:
  - id: bad
    panels:
      - kind: closing
        header: AMEN
      - kind: welcome
        header: HELLO
"#;
        assert!(matches!(
            YamlPanelCatalog::from_yaml(yaml),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let yaml = r#"
panel_sets:
  - id: twice
    panels: [{kind: welcome, header: A}]
  - id: twice
    panels: [{kind: closing, header: B}]
"#;
        assert!(matches!(
            YamlPanelCatalog::from_yaml(yaml),
            Err(StoreError::Validation(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_serialization_error() {
        assert!(matches!(
            YamlPanelCatalog::from_yaml("panel_sets: [{id: x"),
            Err(StoreError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn load_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("panels.yaml");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = YamlPanelCatalog::load(&path).await.unwrap();
        assert_eq!(catalog.list_ids().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let result = YamlPanelCatalog::load("/definitely/not/here.yaml").await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
