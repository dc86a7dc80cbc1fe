//! Bar chart of label counts.

use std::path::Path;
use std::sync::OnceLock;

use finsent_core::SentimentLabel;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::register_font;

use crate::error::ReportError;

/// Output image size in pixels.
pub const CHART_SIZE: (u32, u32) = (800, 600);
pub const CHART_TITLE: &str = "Financial News Sentiment Distribution";
pub const X_AXIS_LABEL: &str = "Sentiment";
pub const Y_AXIS_LABEL: &str = "Number of Headlines";

const MARGIN: u32 = 20;
const X_LABEL_AREA: u32 = 60;
const Y_LABEL_AREA: u32 = 70;
const CAPTION_SIZE: u32 = 28;
const LABEL_SIZE: u32 = 18;
const AXIS_DESC_SIZE: u32 = 20;
/// Half the width of a bar, in slot units.
const BAR_HALF_WIDTH: f64 = 0.35;

/// Family name the embedded font is registered under. Plotters falls back
/// to this name for unstyled text.
const FONT_FAMILY: &str = "sans-serif";
static FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Fixed fill colour per label.
#[must_use]
pub fn label_color(label: SentimentLabel) -> RGBColor {
    match label {
        SentimentLabel::Positive => RGBColor(0, 128, 0),
        SentimentLabel::Negative => RGBColor(255, 0, 0),
        SentimentLabel::Neutral => RGBColor(128, 128, 128),
    }
}

fn chart_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Chart(err.to_string())
}

fn ensure_font() -> Result<(), ReportError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let ok = *REGISTERED
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES).is_ok());
    if ok {
        Ok(())
    } else {
        Err(ReportError::Chart(
            "embedded chart font could not be loaded".to_string(),
        ))
    }
}

/// Render one bar per `(label, count)` entry, left to right in the given
/// order, and write the PNG to `path`, replacing any previous chart.
///
/// # Errors
///
/// Returns [`ReportError::Chart`] if drawing or encoding fails.
pub fn render_chart(path: &Path, counts: &[(SentimentLabel, usize)]) -> Result<(), ReportError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_chart(&root, counts)?;
    root.present().map_err(chart_error)?;
    tracing::debug!(path = %path.display(), bars = counts.len(), "rendered sentiment chart");
    Ok(())
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    counts: &[(SentimentLabel, usize)],
) -> Result<(), ReportError> {
    ensure_font()?;
    root.fill(&WHITE).map_err(chart_error)?;

    let slots = counts.len().max(1) as f64;
    let max_count = counts.iter().map(|&(_, c)| c).max().unwrap_or(0).max(1);
    let y_top = max_count + max_count / 10 + 1;

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, (FONT_FAMILY, CAPTION_SIZE))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(-0.5..slots - 0.5, 0usize..y_top)
        .map_err(chart_error)?;

    // Bars sit on integer x positions; only those ticks get a category name.
    let category = |x: &f64| {
        let rounded = x.round();
        if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        counts
            .get(rounded as usize)
            .map(|&(label, _)| label.as_str().to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len().max(1))
        .x_label_formatter(&category)
        .y_label_formatter(&|y: &usize| y.to_string())
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .label_style((FONT_FAMILY, LABEL_SIZE))
        .axis_desc_style((FONT_FAMILY, AXIS_DESC_SIZE))
        .draw()
        .map_err(chart_error)?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, &(label, count))| {
            let center = i as f64;
            Rectangle::new(
                [(center - BAR_HALF_WIDTH, 0), (center + BAR_HALF_WIDTH, count)],
                label_color(label).filled(),
            )
        }))
        .map_err(chart_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_dir;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    fn render_to_buffer(counts: &[(SentimentLabel, usize)]) -> Vec<u8> {
        let (w, h) = CHART_SIZE;
        let mut buffer = vec![0u8; (w * h * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, CHART_SIZE).into_drawing_area();
            draw_chart(&root, counts).expect("draw chart");
            root.present().expect("present");
        }
        buffer
    }

    fn has_ink(buffer: &[u8], rows: std::ops::Range<u32>) -> bool {
        let width = CHART_SIZE.0 as usize;
        rows.flat_map(|y| {
            let start = y as usize * width * 3;
            buffer[start..start + width * 3].chunks(3)
        })
        .any(|px| px != [255, 255, 255])
    }

    #[test]
    fn renders_png() {
        let dir = scratch_dir("chart-render");
        let path = dir.join("chart.png");
        render_chart(
            &path,
            &[(SentimentLabel::Positive, 3), (SentimentLabel::Negative, 1)],
        )
        .expect("render chart");

        let bytes = std::fs::read(&path).expect("read png");
        assert!(bytes.starts_with(PNG_MAGIC));
    }

    #[test]
    fn replaces_existing_chart() {
        let dir = scratch_dir("chart-replace");
        let path = dir.join("chart.png");
        std::fs::write(&path, "stale").expect("seed file");

        render_chart(&path, &[(SentimentLabel::Neutral, 2)]).expect("render chart");
        let bytes = std::fs::read(&path).expect("read png");
        assert!(bytes.starts_with(PNG_MAGIC));
    }

    #[test]
    fn caption_is_drawn_above_plot() {
        let buffer = render_to_buffer(&[(SentimentLabel::Positive, 1)]);
        // Only the caption occupies the band just inside the top margin.
        assert!(has_ink(&buffer, MARGIN..MARGIN + CAPTION_SIZE / 2));
        assert!(!has_ink(&buffer, 0..MARGIN / 2));
    }

    #[test]
    fn category_and_axis_text_are_drawn_below_plot() {
        let buffer = render_to_buffer(&[
            (SentimentLabel::Neutral, 4),
            (SentimentLabel::Positive, 2),
            (SentimentLabel::Negative, 1),
        ]);
        let bottom = CHART_SIZE.1 - MARGIN;
        // Skip the axis line at the top of the label area.
        assert!(has_ink(&buffer, bottom - X_LABEL_AREA + 5..bottom));
    }

    #[test]
    fn colors_are_fixed_per_label() {
        assert_eq!(label_color(SentimentLabel::Positive), RGBColor(0, 128, 0));
        assert_eq!(label_color(SentimentLabel::Negative), RGBColor(255, 0, 0));
        assert_eq!(label_color(SentimentLabel::Neutral), RGBColor(128, 128, 128));
    }
}
