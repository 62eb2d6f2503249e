use std::time::Instant;

use crossterm::event::MouseEvent;
use ratatui::layout::Rect;
use rebound_core::{AppConfig, Delta, ElasticPanel, Extents, Position, TranslationSink};

use crate::content::ContentView;
use crate::frame_clock::FrameClock;
use crate::gesture::{Gesture, GestureTracker};
use crate::input::Action;
use crate::theme::Theme;

/// Interactive panel state for the terminal demo
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub panel: ElasticPanel,
    pub content: ContentView,
    pub clock: FrameClock,
    gestures: GestureTracker,
    /// Viewport area in terminal cells, updated on every draw
    pub viewport: Rect,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let ui = &config.ui;
        let panel = ElasticPanel::new(config.panel.clone());
        let content = ContentView::new(
            ui.content_columns,
            ui.content_rows,
            ui.cell_width_px,
            ui.cell_height_px,
        );
        let clock = FrameClock::new(ui.frame_interval());
        let gestures = GestureTracker::new(
            ui.cell_width_px,
            ui.cell_height_px,
            config.panel.momentum.min_swipe_velocity,
        );

        Self {
            config,
            theme,
            panel,
            content,
            clock,
            gestures,
            viewport: Rect::default(),
            should_quit: false,
            status_message: None,
        }
    }

    /// Fresh extents snapshot: viewport and content measured in pixels
    pub fn extents(&self) -> Extents {
        let (content_width, content_height) = self.content.size_px();
        Extents::new(
            self.viewport.width as f64 * self.config.ui.cell_width_px,
            self.viewport.height as f64 * self.config.ui.cell_height_px,
            content_width,
            content_height,
        )
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Check if the main loop should poll at animation rate
    #[inline]
    pub fn needs_frames(&self) -> bool {
        self.clock.has_pending()
    }

    pub fn is_dragging(&self) -> bool {
        self.panel.is_dragging()
    }

    pub fn position(&self) -> Position {
        self.panel.position()
    }

    /// Route a mouse event through gesture recognition into the panel
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        // Presses outside the viewport do not grab the panel
        if !self.gestures.is_dragging() && !self.contains(event.column, event.row) {
            return;
        }
        for gesture in self.gestures.handle_mouse(event, now) {
            self.handle_gesture(gesture, now);
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture, now: Instant) {
        let extents = self.extents();
        match gesture {
            Gesture::Start => self.panel.drag_start(&mut self.clock),
            Gesture::Move(delta) => {
                self.panel.drag_move(delta, &extents, &mut self.clock);
            }
            Gesture::End => {
                self.panel.drag_end(&extents, now, &mut self.clock);
            }
            Gesture::Swipe(velocity) => {
                self.panel.swipe(velocity, &extents, now, &mut self.clock);
            }
        }
        self.sync_content();
    }

    /// Apply a keyboard action
    pub fn apply_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Reset => {
                self.panel.reset(&mut self.clock);
                self.sync_content();
                self.set_status("Reset to origin");
            }
            Action::ToggleMomentum => {
                let mut config = self.panel.config().clone();
                config.momentum.enabled = !config.momentum.enabled;
                let enabled = config.momentum.enabled;
                self.panel.set_config(config);
                self.set_status(if enabled {
                    "Swipe momentum on"
                } else {
                    "Swipe momentum off"
                });
            }
            Action::Nudge(columns, rows) => {
                if !self.panel.is_dragging() {
                    self.handle_gesture(Gesture::Start, now);
                }
                let delta = Delta::new(
                    columns as f64 * self.config.ui.cell_width_px,
                    rows as f64 * self.config.ui.cell_height_px,
                );
                self.handle_gesture(Gesture::Move(delta), now);
            }
            Action::Release => {
                if self.panel.is_dragging() {
                    self.handle_gesture(Gesture::End, now);
                }
            }
            Action::None => {}
        }
    }

    /// Fire due animation frames
    pub fn tick(&mut self, now: Instant) {
        let extents = self.extents();
        for handle in self.clock.due(now) {
            self.panel.on_frame(handle, now, &extents, &mut self.clock);
        }
        self.sync_content();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn sync_content(&mut self) {
        self.content.apply_translation(self.panel.position());
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        let area = self.viewport;
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    }
}
