use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Elastic gap fill shown where the content has been dragged away
const GAP: char = '·';

pub struct PanelWidget;

impl PanelWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let border_color = if app.is_dragging() {
            app.theme.dragging
        } else if app.panel.is_animating() {
            app.theme.animating
        } else {
            app.theme.grey0
        };

        let block = Block::default()
            .title(" Panel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(app.theme.bg0));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Extents are measured from the inner area on every draw
        app.set_viewport(inner_area);

        let content_style = Style::default().fg(app.theme.content).bg(app.theme.bg0);
        let gap_style = Style::default().fg(app.theme.grey0).bg(app.theme.elastic);

        let lines: Vec<Line> = app
            .content
            .visible_rows(inner_area.width, inner_area.height)
            .into_iter()
            .map(|row| Self::render_row(row, content_style, gap_style))
            .collect();

        frame.render_widget(Paragraph::new(lines), inner_area);
    }

    /// Group consecutive cells of the same kind into spans
    fn render_row(row: Vec<Option<char>>, content: Style, gap: Style) -> Line<'static> {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_is_gap = None;

        for cell in row {
            let is_gap = cell.is_none();
            if run_is_gap.is_some_and(|prev| prev != is_gap) {
                let style = if is_gap { content } else { gap };
                spans.push(Span::styled(std::mem::take(&mut run), style));
            }
            run_is_gap = Some(is_gap);
            run.push(cell.unwrap_or(GAP));
        }
        if let Some(is_gap) = run_is_gap {
            spans.push(Span::styled(run, if is_gap { gap } else { content }));
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_row_splits_gap_and_content() {
        let content = Style::default();
        let gap = Style::default().bg(ratatui::style::Color::Red);
        let line = PanelWidget::render_row(vec![None, None, Some('╔'), Some('═')], content, gap);

        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "··");
        assert_eq!(line.spans[0].style, gap);
        assert_eq!(line.spans[1].content, "╔═");
        assert_eq!(line.spans[1].style, content);
    }

    #[test]
    fn test_render_empty_row() {
        let line = PanelWidget::render_row(Vec::new(), Style::default(), Style::default());
        assert!(line.spans.is_empty());
    }
}
