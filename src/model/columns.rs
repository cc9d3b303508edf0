//! Column width tracker

use super::record::ColumnId;
use std::collections::HashMap;
use tracing::trace;

/// Narrowest width in px a column can be set to
pub const MIN_COLUMN_WIDTH: u32 = 50;

/// Per-column widths in px, falling back to each column's default
#[derive(Debug, Clone, Default)]
pub struct ColumnWidths {
    widths: HashMap<ColumnId, u32>,
    defaults: HashMap<ColumnId, u32>,
}

impl ColumnWidths {
    /// Create a tracker with default-width overrides
    ///
    /// Overrides below the floor are raised to it. Columns without an
    /// override use [`ColumnId::default_width`].
    pub fn with_defaults(overrides: &HashMap<ColumnId, u32>) -> Self {
        let defaults = overrides
            .iter()
            .map(|(column, width)| (*column, (*width).max(MIN_COLUMN_WIDTH)))
            .collect();
        Self {
            widths: HashMap::new(),
            defaults,
        }
    }

    /// Store `max(proposed, MIN_COLUMN_WIDTH)` for `column`
    pub fn set_width(&mut self, column: ColumnId, proposed: i64) {
        let width = proposed
            .max(MIN_COLUMN_WIDTH as i64)
            .min(u32::MAX as i64) as u32;
        trace!("Column {} width {} (proposed {})", column, width, proposed);
        self.widths.insert(column, width);
    }

    pub fn width_of(&self, column: ColumnId) -> u32 {
        self.widths
            .get(&column)
            .copied()
            .unwrap_or_else(|| self.default_of(column))
    }

    pub fn default_of(&self, column: ColumnId) -> u32 {
        self.defaults
            .get(&column)
            .copied()
            .unwrap_or_else(|| column.default_width())
    }

    /// Forget a stored width so the default applies again
    pub fn reset(&mut self, column: ColumnId) {
        self.widths.remove(&column);
    }

    #[cfg(test)]
    pub fn is_resized(&self, column: ColumnId) -> bool {
        self.widths.contains_key(&column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_column_uses_default() {
        let widths = ColumnWidths::default();
        assert_eq!(widths.width_of(ColumnId::Name), 200);
        assert_eq!(widths.width_of(ColumnId::Age), 100);
        assert_eq!(widths.width_of(ColumnId::Drag), 40);
    }

    #[test]
    fn test_set_width_stores_value() {
        let mut widths = ColumnWidths::default();
        widths.set_width(ColumnId::Name, 250);
        assert_eq!(widths.width_of(ColumnId::Name), 250);
        assert!(widths.is_resized(ColumnId::Name));
        assert!(!widths.is_resized(ColumnId::Age));
    }

    #[test]
    fn test_set_width_never_below_floor() {
        let mut widths = ColumnWidths::default();
        for proposed in [-1000, -40, -1, 0, 1, 49, 50, 51, 400] {
            widths.set_width(ColumnId::Mobile, proposed);
            assert!(widths.width_of(ColumnId::Mobile) >= MIN_COLUMN_WIDTH);
        }

        widths.set_width(ColumnId::Mobile, -40);
        assert_eq!(widths.width_of(ColumnId::Mobile), 50);
    }

    #[test]
    fn test_default_overrides_clamped() {
        let overrides = HashMap::from([(ColumnId::Name, 300), (ColumnId::Age, 10)]);
        let widths = ColumnWidths::with_defaults(&overrides);
        assert_eq!(widths.width_of(ColumnId::Name), 300);
        assert_eq!(widths.width_of(ColumnId::Age), MIN_COLUMN_WIDTH);
        assert_eq!(widths.width_of(ColumnId::Mobile), 150);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut widths = ColumnWidths::default();
        widths.set_width(ColumnId::Gender, 90);
        widths.reset(ColumnId::Gender);
        assert_eq!(widths.width_of(ColumnId::Gender), 200);
        assert!(!widths.is_resized(ColumnId::Gender));
    }
}
