//! Draggable content: a generated character grid translated inside the viewport

use rebound_core::{Position, TranslationSink};

/// Content box rendered inside the panel viewport
///
/// Implements [`TranslationSink`]: the pixel translation from the panel is
/// converted to a whole-cell offset at render time.
#[derive(Debug, Clone)]
pub struct ContentView {
    grid: Vec<Vec<char>>,
    columns: u16,
    rows: u16,
    cell_width_px: f64,
    cell_height_px: f64,
    translation: Position,
}

impl ContentView {
    /// Rows between coordinate labels
    const LABEL_EVERY_ROWS: u16 = 4;
    /// Columns between coordinate labels
    const LABEL_EVERY_COLUMNS: u16 = 20;

    pub fn new(columns: u16, rows: u16, cell_width_px: f64, cell_height_px: f64) -> Self {
        Self {
            grid: build_grid(columns, rows),
            columns,
            rows,
            cell_width_px,
            cell_height_px,
            translation: Position::ORIGIN,
        }
    }

    /// Content size in pixels (the panel's scroll-width/scroll-height)
    pub fn size_px(&self) -> (f64, f64) {
        (
            self.columns as f64 * self.cell_width_px,
            self.rows as f64 * self.cell_height_px,
        )
    }

    pub fn translation(&self) -> Position {
        self.translation
    }

    /// Translation rounded to whole cells (columns, rows)
    pub fn cell_offset(&self) -> (i32, i32) {
        (
            (self.translation.x / self.cell_width_px).round() as i32,
            (self.translation.y / self.cell_height_px).round() as i32,
        )
    }

    /// Character shown at viewport cell (`column`, `row`); `None` outside the content
    pub fn cell_at(&self, column: u16, row: u16) -> Option<char> {
        let (ox, oy) = self.cell_offset();
        let x = column as i32 - ox;
        let y = row as i32 - oy;
        if x < 0 || y < 0 {
            return None;
        }
        self.grid
            .get(y as usize)
            .and_then(|line| line.get(x as usize))
            .copied()
    }

    /// Visible text for a viewport of `width` x `height` cells
    ///
    /// Cells outside the content (the elastic gap) come back as `None`.
    pub fn visible_rows(&self, width: u16, height: u16) -> Vec<Vec<Option<char>>> {
        (0..height)
            .map(|row| (0..width).map(|column| self.cell_at(column, row)).collect())
            .collect()
    }
}

impl TranslationSink for ContentView {
    fn apply_translation(&mut self, position: Position) {
        if position != self.translation {
            tracing::trace!(transform = %position.translate3d(), "Content moved");
        }
        self.translation = position;
    }
}

fn build_grid(columns: u16, rows: u16) -> Vec<Vec<char>> {
    let mut grid: Vec<Vec<char>> = (0..rows)
        .map(|row| (0..columns).map(|column| pattern(column, row, columns, rows)).collect())
        .collect();

    // Coordinate labels so movement is easy to follow
    for row in (ContentView::LABEL_EVERY_ROWS..rows.saturating_sub(1))
        .step_by(ContentView::LABEL_EVERY_ROWS as usize)
    {
        for column in (2..columns.saturating_sub(1)).step_by(ContentView::LABEL_EVERY_COLUMNS as usize) {
            let label = format!(" {},{} ", column, row);
            let line = &mut grid[row as usize];
            for (i, ch) in label.chars().enumerate() {
                match line.get_mut(column as usize + i) {
                    Some(cell) if (column as usize + i) < columns as usize - 1 => *cell = ch,
                    _ => break,
                }
            }
        }
    }

    grid
}

fn pattern(column: u16, row: u16, columns: u16, rows: u16) -> char {
    let last_column = columns.saturating_sub(1);
    let last_row = rows.saturating_sub(1);
    match (column, row) {
        (0, 0) => '╔',
        (c, 0) if c == last_column => '╗',
        (0, r) if r == last_row => '╚',
        (c, r) if c == last_column && r == last_row => '╝',
        (_, 0) => '═',
        (_, r) if r == last_row => '═',
        (0, _) => '║',
        (c, _) if c == last_column => '║',
        (c, r) if (c / 8 + r / 4) % 2 == 0 => '░',
        _ => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_px() {
        let view = ContentView::new(160, 80, 8.0, 16.0);
        assert_eq!(view.size_px(), (1280.0, 1280.0));
    }

    #[test]
    fn test_corners_at_origin() {
        let view = ContentView::new(40, 10, 8.0, 16.0);
        assert_eq!(view.cell_at(0, 0), Some('╔'));
        assert_eq!(view.cell_at(39, 9), Some('╝'));
        assert_eq!(view.cell_at(40, 0), None);
    }

    #[test]
    fn test_translation_shifts_cells() {
        let mut view = ContentView::new(40, 10, 8.0, 16.0);
        // 2 columns right, 1 row down exposes the elastic gap on the top-left
        view.apply_translation(Position::new(16.0, 16.0));
        assert_eq!(view.cell_offset(), (2, 1));
        assert_eq!(view.cell_at(1, 1), None);
        assert_eq!(view.cell_at(2, 1), Some('╔'));

        view.apply_translation(Position::new(-8.0 * 39.0, 0.0));
        assert_eq!(view.cell_at(0, 0), Some('╗'));
    }

    #[test]
    fn test_visible_rows_dimensions() {
        let view = ContentView::new(40, 10, 8.0, 16.0);
        let rows = view.visible_rows(50, 12);
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.len() == 50));
        assert_eq!(rows[11][0], None);
    }

    #[test]
    fn test_labels_stay_inside_border() {
        let view = ContentView::new(30, 9, 8.0, 16.0);
        for row in 0..9 {
            assert!(matches!(view.cell_at(29, row), Some('║' | '╗' | '╝')));
        }
        assert_eq!(view.cell_at(3, 4), Some('2'));
    }
}
