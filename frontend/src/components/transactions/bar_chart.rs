//! Canvas implementation of the chart library boundary, drawn with plotters.

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_canvas::CanvasBackend;
use shared::{BarChartConfig, ChartHandle, ChartLibrary, DashboardError, Result};
use web_sys::HtmlCanvasElement;
use yew::NodeRef;

const FALLBACK_COLOR: RGBColor = RGBColor(49, 130, 206);
const PLACEHOLDER_COLOR: RGBColor = RGBColor(113, 128, 150);
/// Horizontal gap in pixels between a bar and each edge of its category slot
const BAR_INSET: u32 = 10;

type BarCoord = (SegmentValue<u32>, f64);

/// Draws bar charts onto the `<canvas>` behind `canvas_ref`
#[derive(Clone)]
pub struct CanvasChartLibrary {
    canvas_ref: NodeRef,
}

impl CanvasChartLibrary {
    pub fn new(canvas_ref: NodeRef) -> Self {
        Self { canvas_ref }
    }
}

impl ChartLibrary for CanvasChartLibrary {
    type Handle = CanvasChart;

    fn construct(&mut self, config: &BarChartConfig) -> Result<CanvasChart> {
        let canvas = mounted_canvas(&self.canvas_ref)?;
        draw_bar_chart(&canvas, config)?;
        Ok(CanvasChart { canvas })
    }
}

/// A bar chart currently painted on a canvas
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
}

impl ChartHandle for CanvasChart {
    fn destroy(self) {
        if let Err(e) = clear_canvas(&self.canvas) {
            log::warn!("Failed to clear chart canvas: {}", e);
        }
    }
}

pub fn mounted_canvas(canvas_ref: &NodeRef) -> Result<HtmlCanvasElement> {
    canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| DashboardError::Chart("chart canvas is not mounted".to_string()))
}

fn backend_for(canvas: &HtmlCanvasElement) -> Result<CanvasBackend> {
    CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| DashboardError::Chart("canvas has no 2d context".to_string()))
}

fn chart_error(e: impl std::fmt::Display) -> DashboardError {
    DashboardError::Chart(e.to_string())
}

pub fn clear_canvas(canvas: &HtmlCanvasElement) -> Result<()> {
    let root = backend_for(canvas)?.into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;
    root.present().map_err(chart_error)
}

/// Paint `text` centered on an otherwise blank canvas
pub fn draw_placeholder(canvas: &HtmlCanvasElement, text: &str) -> Result<()> {
    let root = backend_for(canvas)?.into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let (width, height) = root.dim_in_pixel();
    let style = TextStyle::from(("sans-serif", 20).into_font())
        .color(&PLACEHOLDER_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(text, &style, (width as i32 / 2, height as i32 / 2))
        .map_err(chart_error)?;
    root.present().map_err(chart_error)
}

pub fn draw_bar_chart(canvas: &HtmlCanvasElement, config: &BarChartConfig) -> Result<()> {
    let root = backend_for(canvas)?.into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let color = parse_hex_color(&config.color).unwrap_or(FALLBACK_COLOR);
    let (y_low, y_high) = config.y_range();
    let headroom = (y_high - y_low) * 0.1;
    // A zero-category chart still needs a non-empty axis
    let slots = config.categories.len().max(1) as u32;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.series_label, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..slots).into_segmented(), y_low..y_high + headroom)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_label_formatter(&|v| config.y_tick_label(*v))
        .x_label_formatter(&|segment| category_label(&config.categories, segment))
        .x_labels(config.categories.len().max(1))
        .label_style(("sans-serif", 12))
        .bold_line_style(&RGBColor(237, 242, 247))
        .draw()
        .map_err(chart_error)?;

    let bars = config.values.iter().enumerate();
    chart
        .draw_series(bars.clone().map(|(i, v)| bar(i as u32, *v, color.filled())))
        .map_err(chart_error)?;
    if config.border_width > 0 {
        chart
            .draw_series(bars.map(|(i, v)| bar(i as u32, *v, color.stroke_width(config.border_width))))
            .map_err(chart_error)?;
    }

    root.present().map_err(chart_error)
}

/// Category `index` drawn from zero to `value`, inset by [`BAR_INSET`] on both
/// sides. Used for both the fill and the outline.
fn bar(index: u32, value: f64, style: ShapeStyle) -> Rectangle<BarCoord> {
    let mut rect = Rectangle::new(
        [(SegmentValue::Exact(index), 0.0), (SegmentValue::Exact(index + 1), value)],
        style,
    );
    rect.set_margin(0, 0, BAR_INSET, BAR_INSET);
    rect
}

fn category_label(categories: &[String], segment: &SegmentValue<u32>) -> String {
    match segment {
        SegmentValue::CenterOf(i) => categories.get(*i as usize).cloned().unwrap_or_default(),
        SegmentValue::Exact(_) | SegmentValue::Last => String::new(),
    }
}

/// `#rrggbb` to an RGB colour
pub fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
