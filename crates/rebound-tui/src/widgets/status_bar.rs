use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let (state_str, state_color) = if app.is_dragging() {
            ("DRAG", app.theme.dragging)
        } else if app.panel.is_animating() {
            ("ANIM", app.theme.animating)
        } else {
            ("IDLE", app.theme.grey2)
        };

        let momentum = if app.panel.config().momentum.enabled {
            "on"
        } else {
            "off"
        };

        let (status_text, status_color) = match &app.status_message {
            Some(msg) => (format!(" {}", msg), app.theme.accent),
            None => (
                format!(" {} | momentum: {}", app.position(), momentum),
                app.theme.fg0,
            ),
        };

        let state_text = format!(" {} ", state_str);
        let help_hint = " q:quit drag/hjkl:move space:release m:momentum r:reset ";
        let used = state_text.chars().count() + status_text.chars().count() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                state_text,
                Style::default().fg(app.theme.bg0).bg(state_color),
            ),
            Span::styled(
                status_text,
                Style::default().fg(status_color).bg(app.theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey2).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
