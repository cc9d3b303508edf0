//! Drag-reorder controller
//!
//! Turns a pointer drag over rows into one `move_record` on the store. The
//! reorder is committed on drop; hovering over rows never touches the store.

use super::store::RecordStore;
use tracing::debug;

/// Where in a row a drag gesture started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// The row's drag handle
    Handle,
    /// Anywhere else in the row
    Body,
}

/// State of the current reorder gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { source_index: usize },
}

/// A committed reorder, reported back for status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMove {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Default)]
pub struct RowDragController {
    session: DragSession,
}

impl RowDragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.session, DragSession::Dragging { .. })
    }

    /// Row currently being dragged, used only for visual feedback
    pub fn source_index(&self) -> Option<usize> {
        match self.session {
            DragSession::Idle => None,
            DragSession::Dragging { source_index } => Some(source_index),
        }
    }

    /// Start a session if the gesture began on a drag handle
    ///
    /// Returns whether a session is now active for `index`.
    pub fn begin(&mut self, origin: DragOrigin, index: usize) -> bool {
        if origin != DragOrigin::Handle {
            return false;
        }
        debug!("Row drag started at index {}", index);
        self.session = DragSession::Dragging {
            source_index: index,
        };
        true
    }

    /// Whether `target` would accept a drop right now
    pub fn drag_over(&self, _target: usize) -> bool {
        self.is_dragging()
    }

    /// Commit the reorder onto `target` and end the session
    pub fn drop(&mut self, target: usize, store: &mut RecordStore) -> Option<RowMove> {
        let DragSession::Dragging { source_index } = std::mem::take(&mut self.session) else {
            return None;
        };
        if source_index >= store.len() {
            debug!("Dropped stale drag source {}", source_index);
            return None;
        }

        let to = target.min(store.len().saturating_sub(1));
        store.move_record(source_index, to);
        Some(RowMove {
            from: source_index,
            to,
        })
    }

    /// End the session without touching the store
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("Row drag cancelled");
        }
        self.session = DragSession::Idle;
    }
}
