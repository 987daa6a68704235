//! Panel sets compiled into the binary.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::foundation::PanelSetId;
use crate::domain::panel::{Panel, PanelKind, PanelSet, Paragraph};
use crate::ports::{PanelCatalog, StoreError};

static BUILTIN_SETS: Lazy<Vec<PanelSet>> = Lazy::new(|| {
    [classic(), evening()]
        .into_iter()
        .filter_map(|result| match result {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::error!(error = %e, "built-in panel set is malformed");
                None
            }
        })
        .collect()
});

fn classic() -> Result<PanelSet, crate::domain::foundation::ValidationError> {
    PanelSet::new(
        PanelSetId::new("classic")?,
        vec![
            Panel::new(
                PanelKind::Welcome,
                "WELCOME",
                vec![Paragraph::new(
                    "Take a moment to be still. Set aside what you were doing and settle in.",
                )],
            ),
            Panel::new(
                PanelKind::Worship,
                "WORSHIP",
                vec![
                    Paragraph::new("Give thanks for who God is before asking for anything.")
                        .with_verse("Psalm 100:4"),
                    Paragraph::new("Name three things from today you are grateful for."),
                ],
            ),
            Panel::new(
                PanelKind::ShareAndAdd,
                "MY CONCERNS",
                vec![Paragraph::new(
                    "What is on your heart? Add anything new you want to pray about.",
                )
                .with_verse("Philippians 4:6")],
            ),
            Panel::new(
                PanelKind::PresentLoop,
                "PRAYERS",
                vec![Paragraph::new(
                    "Pray through each request. Mark any that have been answered.",
                )],
            ),
            Panel::new(
                PanelKind::Encouragement,
                "GOD'S WILL",
                vec![Paragraph::new(
                    "Leave these requests in trusting hands and accept the answer that comes.",
                )
                .with_verse("Romans 8:28")],
            ),
            Panel::new(
                PanelKind::Closing,
                "AMEN",
                vec![Paragraph::new("Go in peace.")],
            ),
        ],
    )
}

fn evening() -> Result<PanelSet, crate::domain::foundation::ValidationError> {
    PanelSet::new(
        PanelSetId::new("evening")?,
        vec![
            Panel::new(
                PanelKind::Welcome,
                "EVENING",
                vec![Paragraph::new("The day is done. Look back over it without hurry.")],
            ),
            Panel::new(
                PanelKind::ShareAndAdd,
                "TODAY",
                vec![Paragraph::new(
                    "Who did you meet today? What needs did you see? Add them here.",
                )],
            ),
            Panel::new(
                PanelKind::PresentLoop,
                "INTERCESSION",
                vec![Paragraph::new("Hold each of these up in turn.")
                    .with_verse("1 Timothy 2:1")],
            ),
            Panel::new(
                PanelKind::Closing,
                "REST",
                vec![Paragraph::new("Lie down and sleep in peace.").with_verse("Psalm 4:8")],
            ),
        ],
    )
}

/// Catalog of the panel sets shipped with the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPanelCatalog;

impl BuiltinPanelCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PanelCatalog for BuiltinPanelCatalog {
    async fn get(&self, id: &PanelSetId) -> Result<Option<PanelSet>, StoreError> {
        Ok(BUILTIN_SETS.iter().find(|set| set.id() == id).cloned())
    }

    async fn list_ids(&self) -> Result<Vec<PanelSetId>, StoreError> {
        Ok(BUILTIN_SETS.iter().map(|set| set.id().clone()).collect())
    }
}
