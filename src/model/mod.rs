//! Model layer - the interactive table state engine
//!
//! This module contains all state-related types:
//! - `RecordStore` - Ordered roster records
//! - `ExpansionTracker` / `ColumnWidths` - Per-row and per-column view state
//! - `RowDragController` / `ColumnResizeController` - Gesture state machines
//! - `TableState` - The container composing all of the above
//! - `ModalStack` - Modal overlay management

pub mod columns;
pub mod drag;
pub mod expansion;
pub mod modal;
pub mod record;
pub mod resize;
pub mod store;
pub mod table;

// Re-export commonly used types
pub use drag::DragOrigin;
pub use record::{ColumnId, FieldUpdate, Gender, Record, RecordId};
pub use store::RecordStore;
pub use table::{Release, TableState, VisibleRow};
