//! Screen geometry and the fixed-column process table.
//!
//! The dashboard is three stacked bands: a system panel of fixed height, the
//! process panel filling whatever is left (never less than
//! [`MIN_PROCESS_PANEL_HEIGHT`]), and a two-line footer. Sizes are computed
//! from the terminal height alone; drawing clips anything that overflows.

use std::ops::Range;

use crate::format::elapsed_time;
use crate::model::ProcessRow;

pub const SYSTEM_PANEL_HEIGHT: u16 = 8;
pub const FOOTER_HEIGHT: u16 = 2;
pub const MIN_PROCESS_PANEL_HEIGHT: u16 = 4;

/// Rows of the process panel taken by the column header and bottom border
const PROCESS_PANEL_CHROME: u16 = 2;

/// Users longer than this are cut
pub const USER_WIDTH: usize = 10;

/// Screen column where the command starts
pub const COMMAND_COLUMN: u16 = 52;
const MIN_COMMAND_WIDTH: usize = 10;
const ELLIPSIS: &str = "...";

/// Column titles and widths; the last column takes the remaining width.
/// The widths put the columns at screen offsets 2, 9, 22, 30, 38, 48 and 52
/// once the border and one space of padding are added.
pub const COLUMNS: [(&str, usize); 7] = [
    ("PID", 7),
    ("USER", 13),
    ("CPU", 8),
    ("RAM", 8),
    ("UPTIME", 10),
    ("ST", 4),
    ("COMMAND", 0),
];

/// Heights of the three bands for one frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelHeights {
    pub system: u16,
    pub processes: u16,
    pub footer: u16,
}

impl PanelHeights {
    /// Compute the bands for a terminal `term_height` rows tall.
    pub fn for_terminal(term_height: u16) -> Self {
        let processes = term_height
            .saturating_sub(SYSTEM_PANEL_HEIGHT + FOOTER_HEIGHT)
            .max(MIN_PROCESS_PANEL_HEIGHT);
        Self {
            system: SYSTEM_PANEL_HEIGHT,
            processes,
            footer: FOOTER_HEIGHT,
        }
    }

    /// Number of process rows that fit under the header, at least one.
    pub fn rows_available(&self) -> usize {
        usize::from(self.processes.saturating_sub(PROCESS_PANEL_CHROME)).max(1)
    }
}

/// Index of the first visible row.
///
/// Only scrolls forward: the selection becomes the last visible row once it
/// moves past the bottom, and the window snaps back to the top as soon as the
/// selection fits on the first page again.
pub fn viewport_top(selected: usize, rows_available: usize) -> usize {
    if selected < rows_available {
        0
    } else {
        selected - rows_available + 1
    }
}

/// Indices of the rows drawn this frame.
pub fn visible_rows(len: usize, selected: usize, rows_available: usize) -> Range<usize> {
    let top = viewport_top(selected, rows_available);
    let end = top.saturating_add(rows_available).min(len);
    top.min(end)..end
}

/// Characters available to the command column on a terminal `term_width` wide.
pub fn command_width(term_width: u16) -> usize {
    usize::from(term_width)
        .saturating_sub(usize::from(COMMAND_COLUMN) + 2)
        .max(MIN_COMMAND_WIDTH)
}

/// Cut `command` to `width` characters, marking the cut with `...`.
pub fn truncate_command(command: &str, width: usize) -> String {
    if command.chars().count() <= width {
        return command.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = command.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

fn truncate_user(user: &str) -> String {
    user.chars().take(USER_WIDTH).collect()
}

/// Header text of the process table.
pub fn header_line() -> String {
    let mut line = String::from(" ");
    for (title, width) in COLUMNS {
        line.push_str(&format!("{title:<width$}"));
    }
    line.trim_end().to_string()
}

/// Text of one process row for a terminal `term_width` wide.
pub fn process_line(row: &ProcessRow, term_width: u16) -> String {
    let state: String = row.state.chars().take(2).collect();
    let cells = [
        row.pid.to_string(),
        truncate_user(&row.user),
        format!("{:5.2}", row.cpu_utilization * 100.0),
        format!("{:>6}", row.ram),
        format!("{:>8}", elapsed_time(row.uptime_secs)),
        format!("{state:>2}"),
        truncate_command(&row.command, command_width(term_width)),
    ];

    let mut line = String::from(" ");
    for ((_, width), cell) in COLUMNS.iter().zip(cells.iter()) {
        line.push_str(&format!("{cell:<width$}", width = *width));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pid: u32, user: &str, command: &str) -> ProcessRow {
        ProcessRow {
            pid,
            user: user.into(),
            cpu_utilization: 0.1234,
            ram: "12.5".into(),
            uptime_secs: 3661,
            state: "S".into(),
            command: command.into(),
        }
    }

    #[test]
    fn test_panel_heights_normal_terminal() {
        let h = PanelHeights::for_terminal(40);
        assert_eq!(h.system, 8);
        assert_eq!(h.footer, 2);
        assert_eq!(h.processes, 30);
        assert_eq!(h.rows_available(), 28);
    }

    #[test]
    fn test_panel_heights_floor_on_tiny_terminal() {
        for height in [0, 5, 10, 13] {
            let h = PanelHeights::for_terminal(height);
            assert_eq!(h.processes, MIN_PROCESS_PANEL_HEIGHT);
            assert_eq!(h.rows_available(), 2);
        }
    }

    #[test]
    fn test_viewport_scrolls_forward_only() {
        assert_eq!(viewport_top(0, 2), 0);
        assert_eq!(viewport_top(1, 2), 0);
        assert_eq!(viewport_top(2, 2), 1);
        assert_eq!(viewport_top(9, 2), 8);
    }

    #[test]
    fn test_visible_rows_window() {
        assert_eq!(visible_rows(3, 2, 2), 1..3);
        assert_eq!(visible_rows(3, 0, 2), 0..2);
        assert_eq!(visible_rows(1, 0, 5), 0..1);
        assert_eq!(visible_rows(0, 0, 5), 0..0);
    }

    #[test]
    fn test_command_width_has_floor() {
        assert_eq!(command_width(120), 66);
        assert_eq!(command_width(40), 10);
    }

    #[test]
    fn test_truncate_command() {
        assert_eq!(truncate_command("short", 10), "short");
        assert_eq!(truncate_command("exactly-10", 10), "exactly-10");
        assert_eq!(truncate_command("/usr/bin/something-long", 10), "/usr/bi...");
        assert_eq!(truncate_command("ääääääääääää", 10), "äääääää...");
    }

    #[test]
    fn test_header_columns_at_fixed_offsets() {
        let header = header_line();
        // offsets are one less than the screen column: the border is drawn separately
        assert_eq!(header.find("PID"), Some(1));
        assert_eq!(header.find("USER"), Some(8));
        assert_eq!(header.find("CPU"), Some(21));
        assert_eq!(header.find("RAM"), Some(29));
        assert_eq!(header.find("UPTIME"), Some(37));
        assert_eq!(header.find("ST"), Some(47));
        assert_eq!(header.find("COMMAND"), Some(51));
    }

    #[test]
    fn test_process_line_fields() {
        let line = process_line(&row(4242, "averyverylongusername", "/bin/sleep 100"), 100);
        assert!(line.starts_with(" 4242   averyveryl   12.34"));
        assert_eq!(&line[29..35], "  12.5");
        assert_eq!(&line[37..45], "01:01:01");
        assert_eq!(&line[47..49], " S");
        assert_eq!(&line[51..], "/bin/sleep 100");
    }

    #[test]
    fn test_process_line_truncates_command_to_terminal() {
        let command = "x".repeat(200);
        let line = process_line(&row(1, "root", &command), 80);
        let shown = &line[51..];
        assert_eq!(shown.len(), command_width(80));
        assert!(shown.ends_with("..."));
    }
}
