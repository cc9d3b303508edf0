//! Table state - the one container owning everything a table instance mutates
//!
//! Components never touch the store or the trackers directly; every gesture
//! and edit goes through the operations here so the two gesture kinds stay
//! mutually exclusive.

use super::columns::ColumnWidths;
use super::drag::{DragOrigin, RowDragController, RowMove};
use super::expansion::ExpansionTracker;
use super::record::{ColumnId, FieldUpdate, Record, RecordId};
use super::resize::ColumnResizeController;
use super::store::RecordStore;
use std::collections::HashMap;
use tracing::debug;

/// One line of the rendered table body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleRow<'a> {
    /// A record at its index in the store
    Record { index: usize, record: &'a Record },
    /// The detail panel below an expanded record
    Detail { index: usize, record: &'a Record },
}

impl<'a> VisibleRow<'a> {
    pub fn index(&self) -> usize {
        match self {
            VisibleRow::Record { index, .. } | VisibleRow::Detail { index, .. } => *index,
        }
    }

    pub fn record(&self) -> &'a Record {
        match self {
            VisibleRow::Record { record, .. } | VisibleRow::Detail { record, .. } => record,
        }
    }
}

/// Result of a pointer release, for status reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Nothing was in progress
    Idle,
    /// A resize of this column finished
    ResizeEnded(ColumnId),
    /// A row drag ended without a drop target
    DragCancelled,
}

#[derive(Debug, Default)]
pub struct TableState {
    store: RecordStore,
    expansion: ExpansionTracker,
    widths: ColumnWidths,
    drag: RowDragController,
    resize: ColumnResizeController,
}

impl TableState {
    pub fn new(store: RecordStore, exclusive_expansion: bool) -> Self {
        Self {
            store,
            expansion: ExpansionTracker::new(exclusive_expansion),
            widths: ColumnWidths::default(),
            drag: RowDragController::new(),
            resize: ColumnResizeController::new(),
        }
    }

    pub fn with_column_defaults(mut self, overrides: &HashMap<ColumnId, u32>) -> Self {
        self.widths = ColumnWidths::with_defaults(overrides);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.store.get(index)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn columns(&self) -> [ColumnId; 6] {
        ColumnId::all()
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expansion.is_expanded(id)
    }

    pub fn width_of(&self, column: ColumnId) -> u32 {
        self.widths.width_of(column)
    }

    /// Records in order, each followed by its detail row when expanded
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        let mut rows = Vec::with_capacity(self.store.len());
        for (index, record) in self.store.records().iter().enumerate() {
            rows.push(VisibleRow::Record { index, record });
            if self.expansion.is_expanded(&record.id) {
                rows.push(VisibleRow::Detail { index, record });
            }
        }
        rows
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Direct Operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn move_record(&mut self, from: usize, to: usize) {
        self.store.move_record(from, to);
    }

    pub fn update_field(&mut self, id: &RecordId, update: FieldUpdate) -> bool {
        self.store.update_field(id, update)
    }

    /// Toggle the detail panel of a record; unknown ids are ignored
    pub fn toggle_expanded(&mut self, id: &RecordId) {
        if self.store.contains(id) {
            self.expansion.toggle(id);
        } else {
            debug!("Ignoring expansion toggle for unknown record {}", id);
        }
    }

    pub fn set_width(&mut self, column: ColumnId, proposed: i64) {
        self.widths.set_width(column, proposed);
    }

    pub fn reset_width(&mut self, column: ColumnId) {
        self.widths.reset(column);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Row Drag
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a row drag; ignored off-handle, out of range, or while resizing
    pub fn begin_row_drag(&mut self, origin: DragOrigin, index: usize) -> bool {
        if self.resize.is_resizing() || index >= self.store.len() {
            return false;
        }
        self.drag.begin(origin, index)
    }

    pub fn drag_over(&self, target: usize) -> bool {
        target < self.store.len() && self.drag.drag_over(target)
    }

    pub fn drop_row(&mut self, target: usize) -> Option<RowMove> {
        self.drag.drop(target, &mut self.store)
    }

    pub fn cancel_row_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn dragging_source(&self) -> Option<usize> {
        self.drag.source_index()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Column Resize
    // ─────────────────────────────────────────────────────────────────────────

    /// Start resizing `column` from pointer position `x`; ignored while dragging a row
    pub fn begin_resize(&mut self, column: ColumnId, x: i64) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        let width = self.widths.width_of(column);
        self.resize.begin(column, x, width);
        true
    }

    pub fn resize_move(&mut self, x: i64) -> Option<u32> {
        self.resize.pointer_move(x, &mut self.widths)
    }

    pub fn end_resize(&mut self) -> Option<ColumnId> {
        self.resize.release()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    pub fn resizing_column(&self) -> Option<ColumnId> {
        self.resize.active_column()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Gesture Exits
    // ─────────────────────────────────────────────────────────────────────────

    /// A pointer release that did not land on a drop target
    pub fn pointer_released(&mut self) -> Release {
        if let Some(column) = self.resize.release() {
            return Release::ResizeEnded(column);
        }
        if self.drag.is_dragging() {
            self.drag.cancel();
            return Release::DragCancelled;
        }
        Release::Idle
    }

    /// End every gesture without mutating anything
    pub fn cancel_gestures(&mut self) {
        self.cancel_row_drag();
        self.end_resize();
    }
}
