//! Roster table component
//!
//! Renders the table and maps mouse coordinates back onto it. Column widths
//! live in px inside the model and are scaled to terminal cells by
//! `px_per_cell`; pointer positions are scaled back the same way, so a
//! one-cell pointer move is a `px_per_cell` width change.

use crate::action::Action;
use crate::component::Component;
use crate::model::{
    ColumnId, DragOrigin, FieldUpdate, Gender, Record, RecordId, Release, TableState,
    VisibleRow,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use tracing::{debug, trace};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Two presses on the same handle within this window reset the column
const DOUBLE_CLICK: Duration = Duration::from_millis(400);

/// Header line plus the separator below it
const HEADER_LINES: u16 = 2;

// ═══════════════════════════════════════════════════════════════════════════════
// Geometry & Hit Testing
// ═══════════════════════════════════════════════════════════════════════════════

/// Horizontal extent of one rendered column, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub column: ColumnId,
    pub x: u16,
    pub width: u16,
}

/// What a rendered body line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Record(usize),
    Detail(usize),
}

impl LineKind {
    pub fn index(&self) -> usize {
        match self {
            LineKind::Record(index) | LineKind::Detail(index) => *index,
        }
    }
}

/// What lies under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The last header cell of a column
    ResizeHandle(ColumnId),
    Header(ColumnId),
    Cell {
        row: usize,
        column: ColumnId,
        /// Cell offset from the column's left edge
        offset: u16,
        width: u16,
    },
    Detail(usize),
}

/// Layout of the last drawn frame, used to resolve mouse events
#[derive(Debug, Clone, Default)]
pub struct TableGeometry {
    pub area: Rect,
    pub columns: Vec<ColumnSpan>,
    pub lines: Vec<(u16, LineKind)>,
    px_per_cell: u32,
}

impl TableGeometry {
    pub fn compute(area: Rect, state: &TableState, px_per_cell: u32, scroll: usize) -> Self {
        let px_per_cell = px_per_cell.max(1);
        let right = area.x.saturating_add(area.width);

        let mut columns = Vec::new();
        let mut x = area.x;
        for column in state.columns() {
            if x >= right {
                break;
            }
            let width = Self::cells_for(state.width_of(column), px_per_cell).min(right - x);
            columns.push(ColumnSpan { column, x, width });
            x += width;
        }

        let body_top = area.y.saturating_add(HEADER_LINES);
        let bottom = area.y.saturating_add(area.height);
        let lines = state
            .visible_rows()
            .iter()
            .skip(scroll)
            .zip(body_top..bottom)
            .map(|(row, y)| {
                let kind = match row {
                    VisibleRow::Record { .. } => LineKind::Record(row.index()),
                    VisibleRow::Detail { .. } => LineKind::Detail(row.index()),
                };
                (y, kind)
            })
            .collect();

        Self {
            area,
            columns,
            lines,
            px_per_cell,
        }
    }

    /// Cells used to draw a column `width_px` wide, rounded to nearest
    pub fn cells_for(width_px: u32, px_per_cell: u32) -> u16 {
        let px_per_cell = px_per_cell.max(1);
        let cells = width_px.saturating_add(px_per_cell / 2) / px_per_cell;
        cells.clamp(1, u16::MAX as u32) as u16
    }

    /// Pointer position in px relative to the table's left edge
    pub fn px_at(&self, x: u16) -> i64 {
        (x as i64 - self.area.x as i64) * self.px_per_cell as i64
    }

    fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.area.x
            && x < self.area.x.saturating_add(self.area.width)
            && y >= self.area.y
            && y < self.area.y.saturating_add(self.area.height)
    }

    fn column_at(&self, x: u16) -> Option<(ColumnSpan, u16)> {
        self.columns
            .iter()
            .find(|span| x >= span.x && x < span.x + span.width)
            .map(|span| (*span, x - span.x))
    }

    pub fn line_at(&self, y: u16) -> Option<LineKind> {
        self.lines
            .iter()
            .find(|(line_y, _)| *line_y == y)
            .map(|(_, kind)| *kind)
    }

    /// Record index of the row (or its detail panel) at screen row `y`
    pub fn row_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        self.line_at(y).map(|kind| kind.index())
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        if !self.contains(x, y) {
            return None;
        }

        if y == self.area.y {
            let (span, offset) = self.column_at(x)?;
            if offset + 1 == span.width {
                return Some(Hit::ResizeHandle(span.column));
            }
            return Some(Hit::Header(span.column));
        }

        match self.line_at(y)? {
            LineKind::Detail(index) => Some(Hit::Detail(index)),
            LineKind::Record(row) => {
                let (span, offset) = self.column_at(x)?;
                Some(Hit::Cell {
                    row,
                    column: span.column,
                    offset,
                    width: span.width,
                })
            }
        }
    }
}

/// Pad or truncate `text` to exactly `width` terminal cells
pub fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Which option of the category cell lies at `offset`
fn gender_at(offset: u16, width: u16) -> Gender {
    let content = width.saturating_sub(1);
    if offset < content / 2 {
        Gender::Male
    } else {
        Gender::Female
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Table Component
// ═══════════════════════════════════════════════════════════════════════════════

pub struct TableComponent {
    /// Records, widths, expansion and gesture state
    state: TableState,
    /// Selected record index (keyboard focus)
    selected: usize,
    /// First visible body line
    scroll: usize,
    px_per_cell: u32,
    geometry: TableGeometry,
    status_message: Option<String>,
    /// Last press on a resize handle, for double-click detection
    last_handle_press: Option<(ColumnId, Instant)>,
}

impl TableComponent {
    pub fn new(state: TableState, px_per_cell: u32) -> Self {
        Self {
            state,
            selected: 0,
            scroll: 0,
            px_per_cell: px_per_cell.max(1),
            geometry: TableGeometry::default(),
            status_message: None,
            last_handle_press: None,
        }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn geometry(&self) -> &TableGeometry {
        &self.geometry
    }

    /// Recompute geometry for `area` without drawing
    pub fn layout(&mut self, area: Rect) {
        let inner = Self::block().inner(area);
        self.keep_selection_visible(inner.height.saturating_sub(HEADER_LINES) as usize);
        self.geometry = TableGeometry::compute(inner, &self.state, self.px_per_cell, self.scroll);
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn select(&mut self, index: usize) {
        if index < self.state.len() {
            self.selected = index;
        }
    }

    fn selected_record(&self) -> Option<&Record> {
        self.state.record(self.selected)
    }

    fn keep_selection_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        let rows = self.state.visible_rows();
        let Some(position) = rows.iter().position(|row| {
            matches!(row, VisibleRow::Record { .. }) && row.index() == self.selected
        }) else {
            self.scroll = 0;
            return;
        };

        if position < self.scroll {
            self.scroll = position;
        } else if position >= self.scroll + height {
            self.scroll = position + 1 - height;
        }
        self.scroll = self.scroll.min(rows.len().saturating_sub(1));
    }

    /// Move the selected row by one, following it with the selection
    fn move_selected(&mut self, down: bool) {
        if self.state.dragging_source().is_some() {
            return;
        }
        let from = self.selected;
        let to = if down {
            from + 1
        } else {
            match from.checked_sub(1) {
                Some(to) => to,
                None => return,
            }
        };
        if to >= self.state.len() {
            return;
        }

        self.state.move_record(from, to);
        self.selected = to;
        if let Some(record) = self.state.record(to) {
            let message = format!("Moved {} to row {}", record.name, to + 1);
            self.set_status(message);
        }
    }

    fn set_gender(&mut self, id: &RecordId, gender: Gender) {
        if !self.state.update_field(id, FieldUpdate::Gender(gender)) {
            return;
        }
        if let Some(record) = self.state.records().iter().find(|r| &r.id == id) {
            let message = format!("{} set to {}", record.name, gender.label());
            self.set_status(message);
        }
    }

    /// End whatever gesture is active, as a pointer release would
    fn release_gesture(&mut self) {
        match self.state.pointer_released() {
            Release::ResizeEnded(column) => {
                let width = self.state.width_of(column);
                self.set_status(format!("{} width set to {}px", column, width));
            }
            Release::DragCancelled => self.set_status("Drag cancelled"),
            Release::Idle => {}
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .title(" Roster ")
            .border_style(Style::default().fg(Color::DarkGray))
    }

    fn render_lines(&self) -> Vec<Line<'static>> {
        let spans = &self.geometry.columns;
        let mut lines = Vec::with_capacity(self.geometry.lines.len() + HEADER_LINES as usize);

        lines.push(self.header_line(spans));
        lines.push(Self::separator_line(spans));

        let rows = self.state.visible_rows();
        for row in rows.iter().skip(self.scroll).take(self.geometry.lines.len()) {
            let line = match row {
                VisibleRow::Record { .. } => self.record_line(row.index(), row.record(), spans),
                VisibleRow::Detail { .. } => Self::detail_line(row.record(), spans),
            };
            lines.push(line);
        }

        if self.state.is_empty() {
            lines.push(Line::from(Span::styled(
                "No records",
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines
    }

    fn header_line(&self, spans: &[ColumnSpan]) -> Line<'static> {
        let resizing = self.state.resizing_column();
        let mut out = Vec::new();
        for span in spans {
            out.push(Span::styled(
                fit(span.column.header(), span.width.saturating_sub(1) as usize),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            let handle = if resizing == Some(span.column) {
                Span::styled("┃", Style::default().fg(Color::Yellow))
            } else {
                Span::styled("│", Style::default().fg(Color::DarkGray))
            };
            out.push(handle);
        }
        Line::from(out)
    }

    fn separator_line(spans: &[ColumnSpan]) -> Line<'static> {
        let separator: String = spans
            .iter()
            .map(|span| format!("{}┼", "─".repeat(span.width.saturating_sub(1) as usize)))
            .collect();
        Line::from(Span::styled(separator, Style::default().fg(Color::DarkGray)))
    }

    fn record_line(&self, index: usize, record: &Record, spans: &[ColumnSpan]) -> Line<'static> {
        let base = if self.state.dragging_source() == Some(index) {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM | Modifier::ITALIC)
        } else if index == self.selected {
            Style::default().fg(Color::White).bg(Color::Rgb(40, 44, 52))
        } else {
            Style::default().fg(Color::White)
        };

        let mut out = Vec::new();
        for span in spans {
            let content = span.width.saturating_sub(1) as usize;
            match span.column {
                ColumnId::Drag => {
                    out.push(Span::styled(fit("⠿", content), base.fg(Color::Yellow)));
                }
                ColumnId::Expand => {
                    let marker = if self.state.is_expanded(&record.id) {
                        "▼"
                    } else {
                        "▶"
                    };
                    out.push(Span::styled(fit(marker, content), base.fg(Color::Cyan)));
                }
                ColumnId::Gender => {
                    let half = content / 2;
                    let options = [(Gender::Male, half), (Gender::Female, content - half)];
                    for (gender, width) in options {
                        let checked = record.gender == gender;
                        let mark = if checked { "•" } else { " " };
                        let text = format!("({}) {}", mark, gender.label());
                        let style = if checked {
                            base.fg(Color::Green).add_modifier(Modifier::BOLD)
                        } else {
                            base
                        };
                        out.push(Span::styled(fit(&text, width), style));
                    }
                }
                column => {
                    let text = record.display_value(column).unwrap_or_default();
                    out.push(Span::styled(fit(&text, content), base));
                }
            }
            if span.width > 0 {
                out.push(Span::styled("│", base.fg(Color::DarkGray)));
            }
        }
        Line::from(out)
    }

    fn detail_line(record: &Record, spans: &[ColumnSpan]) -> Line<'static> {
        let width: usize = spans.iter().map(|span| span.width as usize).sum();
        let text = format!("  ↳ {}", record.details);
        Line::from(Span::styled(
            fit(&text, width),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        ))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mouse Handling
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_press(&mut self, x: u16, y: u16) -> Option<Action> {
        let hit = self.geometry.hit_test(x, y)?;
        trace!("Press at ({}, {}) hit {:?}", x, y, hit);

        match hit {
            Hit::ResizeHandle(column) => {
                let now = Instant::now();
                let double = matches!(
                    self.last_handle_press,
                    Some((last, at)) if last == column && now.duration_since(at) <= DOUBLE_CLICK
                );
                if double {
                    self.last_handle_press = None;
                    return Some(Action::ResetColumnWidth(column));
                }
                self.last_handle_press = Some((column, now));
                Some(Action::BeginColumnResize {
                    column,
                    x: self.geometry.px_at(x),
                })
            }
            Hit::Header(_) => None,
            Hit::Cell {
                row,
                column,
                offset,
                width,
            } => {
                let record = self.state.record(row)?;
                match column {
                    ColumnId::Drag => Some(Action::BeginRowDrag {
                        index: row,
                        origin: DragOrigin::Handle,
                    }),
                    ColumnId::Expand => Some(Action::ToggleExpansion(record.id.clone())),
                    ColumnId::Gender => {
                        Some(Action::SetGender(record.id.clone(), gender_at(offset, width)))
                    }
                    _ => Some(Action::BeginRowDrag {
                        index: row,
                        origin: DragOrigin::Body,
                    }),
                }
            }
            Hit::Detail(row) => Some(Action::SelectRow(row)),
        }
    }
}

impl Component for TableComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('J') => Some(Action::MoveSelectedDown),
            KeyCode::Char('K') => Some(Action::MoveSelectedUp),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Action::MoveSelectedDown)
            }
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Action::MoveSelectedUp)
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ToggleSelectedExpansion),
            KeyCode::Char('m') => Some(Action::SetSelectedGender(Gender::Male)),
            KeyCode::Char('f') => Some(Action::SetSelectedGender(Gender::Female)),
            KeyCode::Esc => Some(Action::CancelGestures),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let (x, y) = (mouse.column, mouse.row);
        let resizing = self.state.is_resizing();
        let dragging = self.state.dragging_source().is_some();

        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A press while a gesture is live means its release was lost
                if resizing || dragging {
                    debug!("Press during a gesture, ending the stale one first");
                    self.release_gesture();
                }
                self.handle_press(x, y)
            }
            MouseEventKind::Drag(MouseButton::Left) if resizing => {
                Some(Action::ResizePointer(self.geometry.px_at(x)))
            }
            MouseEventKind::Drag(MouseButton::Left) if dragging => {
                self.geometry.row_at(x, y).map(Action::DragOver)
            }
            MouseEventKind::Up(MouseButton::Left) if dragging => match self.geometry.row_at(x, y) {
                Some(row) => Some(Action::DropRow(row)),
                None => Some(Action::PointerReleased),
            },
            MouseEventKind::Up(_) if resizing || dragging => Some(Action::PointerReleased),
            // Motion with no button held means the release was lost
            MouseEventKind::Moved if resizing || dragging => {
                debug!("Button-up motion during a gesture, ending it");
                Some(Action::PointerReleased)
            }
            MouseEventKind::ScrollDown => Some(Action::NextRow),
            MouseEventKind::ScrollUp => Some(Action::PrevRow),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => self.select(self.selected + 1),
            Action::PrevRow => self.select(self.selected.saturating_sub(1)),
            Action::SelectRow(index) => self.select(index),
            Action::MoveSelectedUp => self.move_selected(false),
            Action::MoveSelectedDown => self.move_selected(true),
            Action::ToggleSelectedExpansion => {
                if let Some(id) = self.selected_record().map(|r| r.id.clone()) {
                    self.state.toggle_expanded(&id);
                }
            }
            Action::SetSelectedGender(gender) => {
                if let Some(id) = self.selected_record().map(|r| r.id.clone()) {
                    self.set_gender(&id, gender);
                }
            }
            Action::ToggleExpansion(id) => {
                if let Some(index) = self.state.records().iter().position(|r| r.id == id) {
                    self.select(index);
                }
                self.state.toggle_expanded(&id);
            }
            Action::SetGender(id, gender) => self.set_gender(&id, gender),
            Action::BeginRowDrag { index, origin } => {
                self.select(index);
                if self.state.begin_row_drag(origin, index) {
                    if let Some(record) = self.state.record(index) {
                        let message = format!("Dragging {}", record.name);
                        self.set_status(message);
                    }
                }
            }
            Action::DragOver(target) => {
                if self.state.drag_over(target) {
                    trace!("Drag over row {}", target);
                }
            }
            Action::DropRow(target) => {
                if let Some(moved) = self.state.drop_row(target) {
                    self.selected = moved.to;
                    if let Some(record) = self.state.record(moved.to) {
                        let message = format!("Moved {} to row {}", record.name, moved.to + 1);
                        self.set_status(message);
                    }
                }
            }
            Action::BeginColumnResize { column, x } => {
                if self.state.begin_resize(column, x) {
                    let message = format!("Resizing {}: {}px", column, self.state.width_of(column));
                    self.set_status(message);
                }
            }
            Action::ResizePointer(x) => {
                if let Some(width) = self.state.resize_move(x) {
                    if let Some(column) = self.state.resizing_column() {
                        self.set_status(format!("Resizing {}: {}px", column, width));
                    }
                }
            }
            Action::ResetColumnWidth(column) => {
                self.state.cancel_gestures();
                self.state.reset_width(column);
                let width = self.state.width_of(column);
                self.set_status(format!("{} width reset to {}px", column, width));
            }
            Action::PointerReleased => self.release_gesture(),
            Action::CancelGestures => {
                if self.state.is_resizing() || self.state.dragging_source().is_some() {
                    self.state.cancel_gestures();
                    self.set_status("Cancelled");
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.layout(area);
        let paragraph = Paragraph::new(self.render_lines()).block(Self::block());
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordStore;
    use crate::services::sample_roster;
    use ratatui::{backend::TestBackend, Terminal};

    // Outer area 100x20; inner area starts at (1, 1).
    // Columns at 10px/cell: drag 4, name 20, age 10, mobile 15, gender 20, expand 5.
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 20,
    };

    fn component() -> TableComponent {
        let state = TableState::new(RecordStore::new(sample_roster()).unwrap(), false);
        let mut table = TableComponent::new(state, 10);
        table.layout(AREA);
        table
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed one mouse event through the component like the app loop does
    fn send(table: &mut TableComponent, kind: MouseEventKind, column: u16, row: u16) {
        if let Some(action) = table.handle_mouse_event(mouse(kind, column, row)).unwrap() {
            table.update(action).unwrap();
        }
        table.layout(AREA);
    }

    fn names(table: &TableComponent) -> Vec<&str> {
        table.state().records().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abc", 0), "");
        assert_eq!(fit("⠿", 3), "⠿  ");
    }

    #[test]
    fn test_cells_for_rounds() {
        assert_eq!(TableGeometry::cells_for(200, 10), 20);
        assert_eq!(TableGeometry::cells_for(45, 10), 5);
        assert_eq!(TableGeometry::cells_for(44, 10), 4);
        assert_eq!(TableGeometry::cells_for(0, 10), 1);
    }

    #[test]
    fn test_geometry_columns() {
        let table = component();
        let spans = &table.geometry().columns;
        assert_eq!(spans.len(), 6);
        assert_eq!(spans[0], ColumnSpan { column: ColumnId::Drag, x: 1, width: 4 });
        assert_eq!(spans[1], ColumnSpan { column: ColumnId::Name, x: 5, width: 20 });
        assert_eq!(spans[5].column, ColumnId::Expand);
    }

    #[test]
    fn test_hit_test_regions() {
        let table = component();
        let geometry = table.geometry();

        // Last header cell of the name column
        assert_eq!(geometry.hit_test(24, 1), Some(Hit::ResizeHandle(ColumnId::Name)));
        assert_eq!(geometry.hit_test(10, 1), Some(Hit::Header(ColumnId::Name)));
        // Separator line
        assert_eq!(geometry.hit_test(10, 2), None);
        assert!(matches!(
            geometry.hit_test(2, 3),
            Some(Hit::Cell { row: 0, column: ColumnId::Drag, .. })
        ));
        assert!(matches!(
            geometry.hit_test(10, 5),
            Some(Hit::Cell { row: 2, column: ColumnId::Name, .. })
        ));
        assert_eq!(geometry.hit_test(200, 3), None);
    }

    #[test]
    fn test_gender_halves() {
        assert_eq!(gender_at(0, 20), Gender::Male);
        assert_eq!(gender_at(8, 20), Gender::Male);
        assert_eq!(gender_at(9, 20), Gender::Female);
        assert_eq!(gender_at(19, 20), Gender::Female);
    }

    #[test]
    fn test_mouse_drag_reorders_rows() {
        let mut table = component();
        // Press the handle of row 0 (screen row 3), drop on row 3 (screen row 6)
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 2, 3);
        assert_eq!(table.state().dragging_source(), Some(0));

        send(&mut table, MouseEventKind::Drag(MouseButton::Left), 10, 4);
        send(&mut table, MouseEventKind::Drag(MouseButton::Left), 10, 5);
        assert_eq!(names(&table)[0], "John Doe");

        send(&mut table, MouseEventKind::Up(MouseButton::Left), 10, 6);
        assert_eq!(
            names(&table),
            vec!["Jane Smith", "Mike Johnson", "Sarah Williams", "John Doe", "Tom Brown"]
        );
        assert_eq!(table.state().dragging_source(), None);
        assert_eq!(table.selected(), 3);
    }

    #[test]
    fn test_press_outside_handle_only_selects() {
        let mut table = component();
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 10, 5);
        assert_eq!(table.state().dragging_source(), None);
        assert_eq!(table.selected(), 2);

        send(&mut table, MouseEventKind::Up(MouseButton::Left), 10, 7);
        assert_eq!(names(&table)[2], "Mike Johnson");
    }

    #[test]
    fn test_release_outside_table_cancels_drag() {
        let mut table = component();
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 2, 4);
        send(&mut table, MouseEventKind::Up(MouseButton::Left), 50, 30);
        assert_eq!(table.state().dragging_source(), None);
        assert_eq!(names(&table)[1], "Jane Smith");
        assert_eq!(table.status_message(), Some("Drag cancelled"));
    }

    #[test]
    fn test_mouse_resize_then_stray_motion() {
        let mut table = component();
        // Name handle at x=24 is 230px from the inner left edge
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 24, 1);
        assert!(table.state().is_resizing());

        send(&mut table, MouseEventKind::Drag(MouseButton::Left), 29, 1);
        assert_eq!(table.state().width_of(ColumnId::Name), 250);

        send(&mut table, MouseEventKind::Drag(MouseButton::Left), 0, 1);
        assert_eq!(table.state().width_of(ColumnId::Name), 50);

        send(&mut table, MouseEventKind::Up(MouseButton::Left), 70, 15);
        assert!(!table.state().is_resizing());

        send(&mut table, MouseEventKind::Drag(MouseButton::Left), 90, 1);
        assert_eq!(table.state().width_of(ColumnId::Name), 50);
    }

    #[test]
    fn test_lost_release_ends_resize() {
        let mut table = component();
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 24, 1);
        send(&mut table, MouseEventKind::Moved, 40, 10);
        assert!(!table.state().is_resizing());
    }

    #[test]
    fn test_press_after_lost_resize_release_starts_fresh_drag() {
        let mut table = component();
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 24, 1);
        assert!(table.state().is_resizing());

        // No release arrives; the next press is on row 0's handle
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 2, 3);
        assert!(!table.state().is_resizing());
        assert_eq!(table.state().dragging_source(), Some(0));

        send(&mut table, MouseEventKind::Drag(MouseButton::Left), 10, 6);
        assert_eq!(table.state().width_of(ColumnId::Name), 200);

        send(&mut table, MouseEventKind::Up(MouseButton::Left), 10, 6);
        assert_eq!(names(&table)[3], "John Doe");
        assert_eq!(table.state().width_of(ColumnId::Name), 200);
    }

    #[test]
    fn test_press_after_lost_drag_release_does_not_reorder() {
        let mut table = component();
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 2, 3);
        assert_eq!(table.state().dragging_source(), Some(0));

        // No release arrives; a plain click on row 2's body follows
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 10, 5);
        assert_eq!(table.state().dragging_source(), None);
        send(&mut table, MouseEventKind::Up(MouseButton::Left), 10, 5);

        assert_eq!(
            names(&table),
            vec!["John Doe", "Jane Smith", "Mike Johnson", "Sarah Williams", "Tom Brown"]
        );
        assert_eq!(table.selected(), 2);
    }

    #[test]
    fn test_double_click_handle_resets_width() {
        let mut table = component();
        table.state.set_width(ColumnId::Name, 300);
        table.layout(AREA);

        let handle_x = table.geometry().columns[1].x + table.geometry().columns[1].width - 1;
        send(&mut table, MouseEventKind::Down(MouseButton::Left), handle_x, 1);
        send(&mut table, MouseEventKind::Up(MouseButton::Left), handle_x, 1);
        send(&mut table, MouseEventKind::Down(MouseButton::Left), handle_x, 1);

        assert_eq!(table.state().width_of(ColumnId::Name), 200);
        assert!(!table.state().is_resizing());
    }

    #[test]
    fn test_click_expand_and_gender() {
        let mut table = component();
        let expand_x = table.geometry().columns[5].x;
        send(&mut table, MouseEventKind::Down(MouseButton::Left), expand_x, 4);
        assert!(table.state().is_expanded(&RecordId::new("rec-2")));
        assert_eq!(table.geometry().line_at(5), Some(LineKind::Detail(1)));

        // Row 0 is still on screen row 3; click its "Female" half
        let gender = table.geometry().columns[4];
        send(&mut table, MouseEventKind::Down(MouseButton::Left), gender.x + gender.width - 3, 3);
        assert_eq!(table.state().record(0).unwrap().gender, Gender::Female);
        assert_eq!(table.state().record(1).unwrap().gender, Gender::Female);
        assert_eq!(table.state().record(2).unwrap().gender, Gender::Male);
    }

    #[test]
    fn test_keyboard_move_and_edit() {
        let mut table = component();
        for code in [KeyCode::Char('j'), KeyCode::Char('J'), KeyCode::Char('m')] {
            if let Some(action) = table.handle_key_event(key(code)).unwrap() {
                table.update(action).unwrap();
            }
        }
        assert_eq!(names(&table)[2], "Jane Smith");
        assert_eq!(table.selected(), 2);
        assert_eq!(table.state().record(2).unwrap().gender, Gender::Male);
    }

    #[test]
    fn test_escape_cancels_resize() {
        let mut table = component();
        send(&mut table, MouseEventKind::Down(MouseButton::Left), 24, 1);
        let action = table.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert_eq!(action, Some(Action::CancelGestures));
        table.update(Action::CancelGestures).unwrap();
        assert!(!table.state().is_resizing());
    }

    #[test]
    fn test_draw_renders_header_and_rows() {
        let mut table = component();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| {
                table.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let row = |y: usize| -> String {
            buffer.content[y * width..(y + 1) * width]
                .iter()
                .map(|cell| cell.symbol())
                .collect()
        };
        assert!(row(1).contains("Name"));
        assert!(row(1).contains("Mobile No"));
        assert!(row(3).contains("John Doe"));
        assert!(row(3).contains("(•) Male"));
    }
}
