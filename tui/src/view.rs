use crate::content::PanelContents;
use crate::controller::KeyHint;
use crate::layout::DashboardLayout;
use kubenav_core::navigation::DashboardSnapshot;
use kubenav_core::navigation::PanelId;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::WidgetRef;

pub struct DashboardView<'a> {
    snapshot: &'a DashboardSnapshot,
    contents: &'a PanelContents,
    hints: &'a [KeyHint],
    status: Option<&'a str>,
}

impl<'a> DashboardView<'a> {
    pub fn new(
        snapshot: &'a DashboardSnapshot,
        contents: &'a PanelContents,
        hints: &'a [KeyHint],
    ) -> Self {
        Self {
            snapshot,
            contents,
            hints,
            status: None,
        }
    }

    /// Replaces the key hints in the footer.
    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }

    fn render_panel(&self, panel: &PanelId, area: Rect, buf: &mut Buffer) {
        let block = styled_block(panel.as_str(), self.snapshot.is_focused(panel));
        block.render_ref(area, buf);
        let inner = block.inner(area);
        if inner.height == 0 {
            return;
        }
        let origin = self
            .snapshot
            .viewport(panel)
            .map(|view| view.origin_y)
            .unwrap_or_default();
        let lines: Vec<Line> = self
            .contents
            .lines(panel)
            .iter()
            .skip(origin)
            .take(inner.height as usize)
            .map(|line| Line::from(line.as_str()))
            .collect();
        Paragraph::new(lines).render_ref(inner, buf);
    }

    fn render_navigation(&self, panel: &PanelId, area: Rect, buf: &mut Buffer) {
        let focused = self.snapshot.is_focused(panel);
        let menu = &self.snapshot.menu;
        let title = match &menu.panel {
            Some(source) => format!("{panel} ({source})"),
            None => panel.to_string(),
        };
        let block = styled_block(&title, focused);
        block.render_ref(area, buf);
        let inner = block.inner(area);
        if inner.height == 0 {
            return;
        }
        let mut spans = Vec::new();
        for (index, option) in menu.options.iter().enumerate() {
            if index == menu.index {
                let selected = Span::from(format!("[{option}]"));
                spans.push(if focused {
                    selected.cyan().bold()
                } else {
                    selected.bold()
                });
            } else {
                spans.push(Span::from(format!(" {option} ")).dim());
            }
            spans.push(Span::raw(" "));
        }
        Paragraph::new(Line::from(spans)).render_ref(inner, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        if let Some(status) = self.status {
            Paragraph::new(Line::from(status.to_string().red())).render_ref(area, buf);
            return;
        }
        let mut spans = Vec::new();
        for hint in self.hints {
            spans.push(Span::from(hint.key.clone()).cyan());
            spans.push(Span::raw(" "));
            spans.push(Span::from(hint.action.clone()).dim());
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans)).render_ref(area, buf);
    }
}

impl Widget for DashboardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 4 || area.width < 20 {
            return;
        }
        let layout = DashboardLayout::compute(self.snapshot, area);
        for (panel, panel_area) in layout.panel_areas() {
            if self.snapshot.navigation_panel.as_ref() == Some(panel) {
                self.render_navigation(panel, panel_area, buf);
            } else {
                self.render_panel(panel, panel_area, buf);
            }
        }
        self.render_footer(layout.footer(), buf);
    }
}

fn styled_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Block::default()
        .title(Span::styled(format!(" {title} "), style))
        .borders(Borders::ALL)
        .border_style(style)
}
