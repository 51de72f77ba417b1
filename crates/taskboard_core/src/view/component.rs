//! Capability trait shared by board views.

use crate::store::project_store::ProjectStore;

/// A board view that can be wired to the store and rendered to plain data.
///
/// `render_content` produces a view model; turning it into pixels or markup
/// is left to the host renderer.
pub trait Component {
    type View;

    /// Connects the view to the store. Views without subscriptions keep the
    /// default no-op.
    fn configure(&mut self, _store: &mut ProjectStore) {}

    fn render_content(&self) -> Self::View;
}
