//! Column-resize controller and pointer capture
//!
//! A resize session holds a [`CaptureGuard`] for as long as it lives. Pointer
//! moves and the release are only routed to the session while its guard is
//! live, and dropping the guard releases the capture, so every way out of a
//! session detaches it.

use super::columns::ColumnWidths;
use super::record::ColumnId;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, trace};

// ═══════════════════════════════════════════════════════════════════════════════
// Pointer Capture
// ═══════════════════════════════════════════════════════════════════════════════

/// Exclusive claim on pointer move/release events
#[derive(Debug, Clone, Default)]
pub struct PointerCapture {
    holder: Rc<Cell<Option<u64>>>,
    next_id: Rc<Cell<u64>>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the capture, superseding any previous holder
    pub fn acquire(&self) -> CaptureGuard {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.holder.set(Some(id));
        CaptureGuard {
            id,
            holder: Rc::clone(&self.holder),
        }
    }

    #[cfg(test)]
    pub fn is_captured(&self) -> bool {
        self.holder.get().is_some()
    }
}

/// Scoped ownership of the pointer capture, released on drop
#[derive(Debug)]
pub struct CaptureGuard {
    id: u64,
    holder: Rc<Cell<Option<u64>>>,
}

impl CaptureGuard {
    /// Whether this guard still owns the capture
    pub fn is_live(&self) -> bool {
        self.holder.get() == Some(self.id)
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        // A superseded guard must not clear its successor's capture
        if self.is_live() {
            self.holder.set(None);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Resize Controller
// ═══════════════════════════════════════════════════════════════════════════════

/// State of the current resize gesture
#[derive(Debug, Default)]
pub enum ResizeSession {
    #[default]
    Idle,
    Resizing {
        column: ColumnId,
        origin_x: i64,
        origin_width: u32,
        capture: CaptureGuard,
    },
}

#[derive(Debug, Default)]
pub struct ColumnResizeController {
    session: ResizeSession,
    capture: PointerCapture,
}

impl ColumnResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column being resized, if a session is live
    pub fn active_column(&self) -> Option<ColumnId> {
        match &self.session {
            ResizeSession::Resizing {
                column, capture, ..
            } if capture.is_live() => Some(*column),
            _ => None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.active_column().is_some()
    }

    /// Start resizing `column` from pointer position `x`
    pub fn begin(&mut self, column: ColumnId, x: i64, current_width: u32) {
        let capture = self.capture.acquire();
        debug!(
            "Resize of {} started at x={} width={}",
            column, x, current_width
        );
        // Replacing the session drops the previous guard after the new one took over
        self.session = ResizeSession::Resizing {
            column,
            origin_x: x,
            origin_width: current_width,
            capture,
        };
    }

    /// Apply one pointer move, returning the width that was stored
    pub fn pointer_move(&mut self, x: i64, widths: &mut ColumnWidths) -> Option<u32> {
        let ResizeSession::Resizing {
            column,
            origin_x,
            origin_width,
            capture,
        } = &self.session
        else {
            return None;
        };
        if !capture.is_live() {
            trace!("Ignoring pointer move for a released capture");
            return None;
        }

        let proposed = *origin_width as i64 + (x - *origin_x);
        widths.set_width(*column, proposed);
        Some(widths.width_of(*column))
    }

    /// End the session and release the pointer capture
    pub fn release(&mut self) -> Option<ColumnId> {
        match std::mem::take(&mut self.session) {
            ResizeSession::Resizing { column, .. } => {
                debug!("Resize of {} finished", column);
                Some(column)
            }
            ResizeSession::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_gesture_then_stray_move() {
        let mut widths = ColumnWidths::default();
        let mut resize = ColumnResizeController::new();

        resize.begin(ColumnId::Name, 500, widths.width_of(ColumnId::Name));
        assert_eq!(resize.active_column(), Some(ColumnId::Name));

        assert_eq!(resize.pointer_move(550, &mut widths), Some(250));
        assert_eq!(widths.width_of(ColumnId::Name), 250);

        assert_eq!(resize.pointer_move(430, &mut widths), Some(130));
        assert_eq!(widths.width_of(ColumnId::Name), 130);

        assert_eq!(resize.release(), Some(ColumnId::Name));
        assert!(!resize.is_resizing());

        assert_eq!(resize.pointer_move(900, &mut widths), None);
        assert_eq!(widths.width_of(ColumnId::Name), 130);
    }

    #[test]
    fn test_drag_past_origin_hits_floor() {
        let mut widths = ColumnWidths::default();
        let mut resize = ColumnResizeController::new();

        resize.begin(ColumnId::Age, 300, 100);
        assert_eq!(resize.pointer_move(160, &mut widths), Some(50));
        assert_eq!(widths.width_of(ColumnId::Age), 50);
    }

    #[test]
    fn test_each_move_measured_from_baseline() {
        let mut widths = ColumnWidths::default();
        let mut resize = ColumnResizeController::new();

        resize.begin(ColumnId::Mobile, 100, 150);
        // Clamped intermediate value must not shift the baseline
        resize.pointer_move(-100, &mut widths);
        assert_eq!(widths.width_of(ColumnId::Mobile), 50);
        resize.pointer_move(120, &mut widths);
        assert_eq!(widths.width_of(ColumnId::Mobile), 170);
    }

    #[test]
    fn test_release_without_session() {
        let mut resize = ColumnResizeController::new();
        assert_eq!(resize.release(), None);
        assert!(!resize.capture.is_captured());
    }

    #[test]
    fn test_release_frees_capture() {
        let mut widths = ColumnWidths::default();
        let mut resize = ColumnResizeController::new();
        resize.begin(ColumnId::Name, 0, 200);
        assert!(resize.capture.is_captured());

        resize.release();
        assert!(!resize.capture.is_captured());
        assert_eq!(resize.pointer_move(10, &mut widths), None);
    }

    #[test]
    fn test_new_session_replaces_old() {
        let mut widths = ColumnWidths::default();
        let mut resize = ColumnResizeController::new();

        resize.begin(ColumnId::Name, 500, 200);
        resize.begin(ColumnId::Age, 100, 100);
        assert!(resize.capture.is_captured());

        resize.pointer_move(120, &mut widths);
        assert_eq!(widths.width_of(ColumnId::Age), 120);
        assert!(!widths.is_resized(ColumnId::Name));
    }

    #[test]
    fn test_superseded_guard_is_dead() {
        let capture = PointerCapture::new();
        let first = capture.acquire();
        assert!(first.is_live());

        let second = capture.acquire();
        assert!(!first.is_live());
        assert!(second.is_live());

        drop(first);
        assert!(second.is_live());
        assert!(capture.is_captured());

        drop(second);
        assert!(!capture.is_captured());
    }
}
