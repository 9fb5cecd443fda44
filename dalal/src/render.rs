//! Renderer seam. The dashboard pushes a fresh [`DashboardView`] after every state change.

use std::sync::{Mutex, PoisonError};

use crate::view::DashboardView;

/// Consumer of view descriptions (a TUI, a web bridge, a test recorder).
pub trait Renderer: Send + Sync {
    /// Draw `view`.
    ///
    /// Called synchronously while the dashboard holds its state lock, so views
    /// arrive in state order. Keep it cheap and never call back into the dashboard.
    fn render(&self, view: &DashboardView);
}

/// Renderer that drops every view.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&self, _view: &DashboardView) {}
}

/// Renderer that keeps every view it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    views: Mutex<Vec<DashboardView>>,
}

impl RecordingRenderer {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Views received so far.
    pub fn views(&self) -> Vec<DashboardView> {
        self.views
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Most recent view, if any.
    pub fn last(&self) -> Option<DashboardView> {
        self.views
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, view: &DashboardView) {
        self.views
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(view.clone());
    }
}
