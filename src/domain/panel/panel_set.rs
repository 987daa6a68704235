//! Panel and PanelSet - the authored content of a session traversal.

use serde::{Deserialize, Serialize};

use super::PanelKind;
use crate::domain::foundation::{PanelSetId, ValidationError};

/// A paragraph of panel text with an optional scripture reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse: Option<String>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            verse: None,
        }
    }

    pub fn with_verse(mut self, verse: impl Into<String>) -> Self {
        self.verse = Some(verse.into());
        self
    }
}

/// One screen of a session: a header and its paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub header: String,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl Panel {
    pub fn new(kind: PanelKind, header: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            kind,
            header: header.into(),
            paragraphs,
        }
    }
}

/// An ordered sequence of panels defining one traversal of a session.
///
/// # Invariants
///
/// - at least one panel
/// - kinds strictly follow [`PanelKind::ORDER`] (so none repeats)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSet {
    id: PanelSetId,
    panels: Vec<Panel>,
}

impl PanelSet {
    /// Builds a panel set, validating its ordering.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `panels` is empty
    /// - `InvalidFormat` if kinds repeat or are out of canonical order
    pub fn new(id: PanelSetId, panels: Vec<Panel>) -> Result<Self, ValidationError> {
        if panels.is_empty() {
            return Err(ValidationError::empty_field("panels"));
        }
        for pair in panels.windows(2) {
            if !pair[0].kind.is_before(pair[1].kind) {
                return Err(ValidationError::invalid_format(
                    "panels",
                    format!(
                        "{:?} cannot follow {:?} in panel set '{}'",
                        pair[1].kind, pair[0].kind, id
                    ),
                ));
            }
        }
        Ok(Self { id, panels })
    }

    pub fn id(&self) -> &PanelSetId {
        &self.id
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// The first panel of the traversal.
    pub fn first(&self) -> &Panel {
        &self.panels[0]
    }

    /// Finds the panel of the given kind, if the set contains it.
    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    /// The kind following `kind` in this set, or `None` at the end.
    pub fn next_kind(&self, kind: PanelKind) -> Option<PanelKind> {
        let idx = self.panels.iter().position(|p| p.kind == kind)?;
        self.panels.get(idx + 1).map(|p| p.kind)
    }

    pub fn contains(&self, kind: PanelKind) -> bool {
        self.panel(kind).is_some()
    }
}
