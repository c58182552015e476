use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use sysdash_core::format::{elapsed_time, progress_bar};
use sysdash_core::layout::{self, PanelHeights};
use sysdash_core::model::{MetricsSnapshot, ProcessRow};
use sysdash_core::state::DashboardState;

use super::theme::styles;

pub const HELP_TEXT: &str = "↑/↓: Navigate  k: Kill  s: Suspend  r: Resume  q: Quit";

/// Everything one frame draws
pub struct FrameView<'a> {
    pub system: &'a MetricsSnapshot,
    pub rows: &'a [ProcessRow],
    pub state: &'a DashboardState,
}

/// Screen rectangles for one frame, already clipped to the terminal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Regions {
    system: Rect,
    processes: Rect,
    status: Rect,
    help: Rect,
}

impl Regions {
    /// The footer is pinned to the bottom rows; panels above it are clipped
    /// when the terminal is shorter than their minimum heights.
    fn compute(area: Rect, heights: PanelHeights) -> Self {
        let footer = heights.footer.min(area.height);
        let footer_top = area.bottom() - footer;
        let body = Rect::new(area.x, area.y, area.width, area.height - footer);

        let system = Rect::new(area.x, area.y, area.width, heights.system).intersection(body);
        let processes = Rect::new(
            area.x,
            area.y.saturating_add(heights.system),
            area.width,
            heights.processes,
        )
        .intersection(body);

        let line = |offset: u16| {
            Rect::new(area.x, footer_top.saturating_add(offset), area.width, 1).intersection(area)
        };

        Self {
            system,
            processes,
            status: line(0),
            help: line(1),
        }
    }
}

pub fn draw(frame: &mut Frame, view: &FrameView) {
    let area = frame.area();
    let heights = PanelHeights::for_terminal(area.height);
    let regions = Regions::compute(area, heights);

    draw_system(frame, regions.system, view.system);
    draw_processes(frame, regions.processes, view, heights.rows_available());
    draw_footer(frame, regions, view.state.status());
}

fn meter_line(label: &str, fraction: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label:<8}"), styles::text()),
        Span::styled(progress_bar(fraction), styles::success()),
    ])
}

fn draw_system(frame: &mut Frame, area: Rect, system: &MetricsSnapshot) {
    if area.is_empty() {
        return;
    }

    let text = |s: String| Line::styled(format!(" {s}"), styles::text());
    let lines = vec![
        text(format!("OS: {}    Kernel: {}", system.os_name, system.kernel)),
        meter_line("CPU:", system.cpu_utilization),
        meter_line("Memory:", system.memory_utilization),
        text(format!("Total Processes: {}", system.total_processes)),
        text(format!("Running Processes: {}", system.running_processes)),
        text(format!("Up Time: {}", elapsed_time(system.uptime_secs))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" System ")
        .style(styles::text());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_processes(frame: &mut Frame, area: Rect, view: &FrameView, rows_available: usize) {
    if area.is_empty() {
        return;
    }

    let term_width = frame.area().width;
    let selected = view.state.selected();

    let mut lines = Vec::with_capacity(rows_available + 1);
    lines.push(Line::styled(layout::header_line(), styles::text()));

    for idx in layout::visible_rows(view.rows.len(), selected, rows_available) {
        let row = &view.rows[idx];
        lines.push(Line::styled(
            layout::process_line(row, term_width),
            styles::row(row.process_state(), idx == selected),
        ));
    }
    log::trace!(
        "process panel: {} rows, selected {}, {} visible",
        view.rows.len(),
        selected,
        lines.len() - 1
    );

    // the system panel's bottom border closes the top of this one
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .style(styles::text());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(frame: &mut Frame, regions: Regions, status: &str) {
    if !regions.status.is_empty() {
        frame.render_widget(
            Paragraph::new(status.to_string()).style(styles::text()),
            regions.status,
        );
    }
    if !regions.help.is_empty() {
        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(styles::footer()),
            regions.help,
        );
    }
}
