//! Line chart of a projection series.
//!
//! The chart is a plain ratatui widget so it can be drawn into any frame; on
//! native builds [`print_inline`] draws it once below the command output.

use fincalc_core::model::ValueSeries;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph},
};

use crate::util::format::format_compact_currency;

const TITLE: &str = " Evolução do patrimônio ";

/// Series as `(index, amount)` pairs
pub fn chart_points(series: &ValueSeries) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.amount))
        .collect()
}

/// Y bounds, padded so a flat series still gets a visible range
pub fn y_bounds(series: &ValueSeries) -> [f64; 2] {
    match series.amount_bounds() {
        Some((lo, hi)) if hi - lo >= 1.0 => [lo, hi],
        Some((lo, _)) => [lo, lo + 1.0],
        None => [0.0, 1.0],
    }
}

/// Low, middle and high tick labels in compact currency form
pub fn y_labels(series: &ValueSeries) -> Vec<String> {
    let [lo, hi] = y_bounds(series);
    [lo, (lo + hi) / 2.0, hi]
        .into_iter()
        .map(format_compact_currency)
        .collect()
}

/// First, middle and last period labels
pub fn x_labels(series: &ValueSeries) -> Vec<String> {
    let points = series.points();
    match points.len() {
        0 => Vec::new(),
        1 => vec![points[0].label.clone()],
        2 => vec![points[0].label.clone(), points[1].label.clone()],
        n => vec![
            points[0].label.clone(),
            points[n / 2].label.clone(),
            points[n - 1].label.clone(),
        ],
    }
}

/// Render the series chart into `area`
pub fn render_series_chart(frame: &mut Frame, area: Rect, series: &ValueSeries) {
    if series.is_empty() {
        let msg = Paragraph::new("Sem dados").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(msg, area);
        return;
    }

    let points = chart_points(series);
    let max_x = (points.len().saturating_sub(1)).max(1) as f64;

    let dataset = Dataset::default()
        .name("Valor")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let axis_style = Style::default().fg(Color::DarkGray);
    let chart = Chart::new(vec![dataset])
        .block(Block::bordered().title(TITLE))
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, max_x])
                .labels(x_labels(series).into_iter().map(Line::from)),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds(y_bounds(series))
                .labels(y_labels(series).into_iter().map(Line::from)),
        );

    frame.render_widget(chart, area);
}

/// Draw the chart once in an inline viewport of `height` rows.
#[cfg(feature = "native")]
pub fn print_inline(series: &ValueSeries, height: u16) -> std::io::Result<()> {
    use ratatui::backend::CrosstermBackend;
    use ratatui::{Terminal, TerminalOptions, Viewport};

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )?;
    terminal.draw(|frame| render_series_chart(frame, frame.area(), series))?;
    println!();
    Ok(())
}
