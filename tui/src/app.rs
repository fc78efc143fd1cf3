use crate::content::PanelContents;
use crate::controller::DashboardController;
use crate::layout::DashboardLayout;
use crate::view::DashboardView;
use color_eyre::Result;
use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyEvent;
use kubenav_core::navigation::DispatchOutcome;
use kubenav_core::navigation::NavEvent;
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::time::Duration;
use tracing::debug;
use tracing::info;

const TICK: Duration = Duration::from_millis(250);

/// Owns the controller and the panel contents for the lifetime of the
/// terminal session.
pub struct App {
    controller: DashboardController,
    contents: PanelContents,
    status: Option<String>,
}

impl App {
    pub fn new(controller: DashboardController, contents: PanelContents) -> Self {
        Self {
            controller,
            contents,
            status: None,
        }
    }

    pub fn controller(&self) -> &DashboardController {
        &self.controller
    }

    pub fn contents(&self) -> &PanelContents {
        &self.contents
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;
            if self.controller.quit_requested() {
                info!("quit requested");
                return Ok(());
            }
            if !event::poll(TICK)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    self.handle_key_event(key);
                }
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                _ => {}
            }
        }
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = DashboardLayout::compute(&self.controller.snapshot(), area);
            self.controller.sync_viewports(&layout, &self.contents);
            let snapshot = self.controller.snapshot();
            let hints = self.controller.key_hints();
            frame.render_widget(
                DashboardView::new(&snapshot, &self.contents, &hints)
                    .with_status(self.status.as_deref()),
                area,
            );
        })?;
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> DispatchOutcome {
        let outcome = self.controller.handle_key_event(key);
        match &outcome {
            DispatchOutcome::Failed { action, error } => {
                self.status = Some(format!("{action}: {error}"));
            }
            DispatchOutcome::Consumed { .. } => self.status = None,
            DispatchOutcome::Unhandled => {}
        }
        for event in self.controller.take_events() {
            self.apply_event(event);
        }
        outcome
    }

    fn apply_event(&mut self, event: NavEvent) {
        match event {
            NavEvent::MenuSwitched {
                panel,
                option: Some(option),
                ..
            } => self.contents.show_selection(&panel, &option),
            other => debug!(event = ?other, "navigation event"),
        }
    }
}
