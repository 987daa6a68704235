//! Presentation Port - the rendering side of the session.
//!
//! The controller pushes a [`PanelDescriptor`] after session start and
//! after every successful transition. User actions travel the other way
//! as [`SessionAction`](crate::domain::session::SessionAction)s
//! dispatched into the controller.

use crate::domain::session::PanelDescriptor;

/// Renders panels. Console, GUI and web views implement this.
pub trait PresentationAdapter: Send + Sync {
    fn render(&self, panel: &PanelDescriptor);

    /// Surface a failed action to the user. The session is unchanged.
    fn notify_error(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
