//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{ColumnId, DragOrigin, Gender, RecordId};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Force quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all controls
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Scroll the current modal up one line
    ScrollUp,
    /// Scroll the current modal down one line
    ScrollDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Keyboard Row Operations
    // ─────────────────────────────────────────────────────────────────────────
    /// Select the next row
    NextRow,
    /// Select the previous row
    PrevRow,
    /// Select a row by index
    SelectRow(usize),
    /// Move the selected row one position up
    MoveSelectedUp,
    /// Move the selected row one position down
    MoveSelectedDown,
    /// Toggle the detail panel of the selected row
    ToggleSelectedExpansion,
    /// Set the category of the selected row
    SetSelectedGender(Gender),

    // ─────────────────────────────────────────────────────────────────────────
    // Record Edits
    // ─────────────────────────────────────────────────────────────────────────
    /// Toggle the detail panel of a record
    ToggleExpansion(RecordId),
    /// Set the category of a record
    SetGender(RecordId, Gender),

    // ─────────────────────────────────────────────────────────────────────────
    // Row Drag
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer pressed on a row
    BeginRowDrag { index: usize, origin: DragOrigin },
    /// Pointer dragged over a row
    DragOver(usize),
    /// Pointer released over a row
    DropRow(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Column Resize
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer pressed on a column's resize handle, `x` in px
    BeginColumnResize { column: ColumnId, x: i64 },
    /// Pointer moved while the pointer is captured, `x` in px
    ResizePointer(i64),
    /// Restore a column's default width
    ResetColumnWidth(ColumnId),

    // ─────────────────────────────────────────────────────────────────────────
    // Gesture Exits
    // ─────────────────────────────────────────────────────────────────────────
    /// Pointer released anywhere that is not a drop target
    PointerReleased,
    /// Abandon every active gesture (Esc, focus lost)
    CancelGestures,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::SelectRow(i) => write!(f, "SelectRow({})", i),
            Action::MoveSelectedUp => write!(f, "MoveSelectedUp"),
            Action::MoveSelectedDown => write!(f, "MoveSelectedDown"),
            Action::ToggleSelectedExpansion => write!(f, "ToggleSelectedExpansion"),
            Action::SetSelectedGender(g) => write!(f, "SetSelectedGender({})", g),
            Action::ToggleExpansion(id) => write!(f, "ToggleExpansion({})", id),
            Action::SetGender(id, g) => write!(f, "SetGender({}, {})", id, g),
            Action::BeginRowDrag { index, origin } => {
                write!(f, "BeginRowDrag({}, {:?})", index, origin)
            }
            Action::DragOver(i) => write!(f, "DragOver({})", i),
            Action::DropRow(i) => write!(f, "DropRow({})", i),
            Action::BeginColumnResize { column, x } => {
                write!(f, "BeginColumnResize({}, {})", column, x)
            }
            Action::ResizePointer(x) => write!(f, "ResizePointer({})", x),
            Action::ResetColumnWidth(c) => write!(f, "ResetColumnWidth({})", c),
            Action::PointerReleased => write!(f, "PointerReleased"),
            Action::CancelGestures => write!(f, "CancelGestures"),
        }
    }
}
