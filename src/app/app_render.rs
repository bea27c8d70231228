use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph, Row, Table},
};

use super::app_state::{App, Phase};
use crate::theme;

const STATS_HEADER: [&str; 6] = ["tables", "inserts", "others", "total", "spent", "eta"];

pub const GAUGE_TITLE: &str = "progress";
pub const GAUGE_TITLE_DONE: &str = "done, press \"q\" to exit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [stats_area, gauge_area, _, status_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_stats(frame, stats_area);
        self.render_gauge(frame, gauge_area);
        self.render_status(frame, status_area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let counters = self.snapshot.counters;
        let values = Row::new(vec![
            counters.tables.to_string(),
            counters.inserts.to_string(),
            counters.others.to_string(),
            counters.total().to_string(),
            self.snapshot.elapsed_display(),
            self.snapshot.eta_display(),
        ])
        .style(Style::default().fg(theme::stats::VALUE));

        let header = Row::new(STATS_HEADER)
            .style(theme::stats::HEADER)
            .bottom_margin(1);

        let table = Table::new([values], [Constraint::Ratio(1, 6); 6])
            .header(header)
            .block(
                Block::bordered()
                    .title(Span::styled(" stats ", Style::default().fg(theme::stats::TITLE)))
                    .border_style(Style::default().fg(theme::stats::BORDER)),
            );

        frame.render_widget(table, area);
    }

    fn render_gauge(&self, frame: &mut Frame, area: Rect) {
        let (title, bar) = match self.phase {
            Phase::Done => (
                Span::styled(
                    format!(" {} ", GAUGE_TITLE_DONE),
                    Style::default().fg(theme::gauge::TITLE_DONE).bold(),
                ),
                theme::gauge::BAR,
            ),
            Phase::Interrupted => (
                Span::raw(format!(" {} ", GAUGE_TITLE)),
                theme::gauge::BAR_INTERRUPTED,
            ),
            Phase::Importing | Phase::Failed => {
                (Span::raw(format!(" {} ", GAUGE_TITLE)), theme::gauge::BAR)
            }
        };

        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::default().fg(theme::gauge::BORDER)),
            )
            .gauge_style(Style::default().fg(bar).bg(theme::gauge::BAR_BG))
            .percent(self.snapshot.gauge_percent())
            .label(self.snapshot.gauge_label());

        frame.render_widget(gauge, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(" q", Style::default().fg(theme::status::KEY)),
            Span::styled(" quit", Style::default().fg(theme::status::DESCRIPTION)),
            Span::styled(" │ ", Style::default().fg(theme::status::SEPARATOR)),
        ];

        let state = match self.phase {
            Phase::Importing => format!("importing into {}", self.target),
            Phase::Done => format!("imported into {}", self.target),
            Phase::Interrupted => "interrupted".to_string(),
            Phase::Failed => "import failed".to_string(),
        };
        let state_color = if self.phase == Phase::Failed {
            theme::status::ERROR
        } else {
            theme::status::DESCRIPTION
        };
        spans.push(Span::styled(state, Style::default().fg(state_color)));

        if let Some(warning) = &self.warning {
            spans.push(Span::styled(" │ ", Style::default().fg(theme::status::SEPARATOR)));
            spans.push(Span::styled(
                format!("⚠ {}", warning),
                Style::default().fg(theme::status::WARNING),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
