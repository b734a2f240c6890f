//! Plotters-backed implementation of `ChartRendererPort`.

use std::path::Path;

use async_trait::async_trait;
use basecalc_core::{ChartError, ChartRendererPort, NumberSystem, SystemFrequency};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

/// Caption drawn above the pie.
pub const CHART_TITLE: &str = "Frequency of Number Systems";

const OUTLINE: RGBColor = RGBColor(200, 200, 200);
const FONT: &str = "sans-serif";

/// Fraction of the space below the title used as the pie radius.
const RADIUS_RATIO: f64 = 0.35;

/// Slice colour for a number system.
pub const fn system_color(system: NumberSystem) -> RGBColor {
    match system {
        NumberSystem::Decimal => RGBColor(31, 119, 180),
        NumberSystem::Binary => RGBColor(255, 127, 14),
        NumberSystem::Octal => RGBColor(44, 160, 44),
        NumberSystem::Hexadecimal => RGBColor(214, 39, 40),
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

/// Renders usage frequencies as a PNG pie chart.
#[derive(Debug, Clone, Default)]
pub struct PieChartRenderer {
    size: ChartSize,
}

impl PieChartRenderer {
    /// Renderer with the default 640x480 canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with a custom canvas size.
    pub const fn with_size(size: ChartSize) -> Self {
        Self { size }
    }
}

/// One labelled wedge.
#[derive(Debug, Clone, PartialEq)]
struct Slice {
    label: &'static str,
    color: RGBColor,
    weight: f64,
}

#[allow(clippy::cast_precision_loss)]
fn pie_slices(frequencies: &[SystemFrequency]) -> Vec<Slice> {
    frequencies
        .iter()
        .filter(|f| f.count > 0)
        .map(|f| Slice {
            label: f.system.as_str(),
            color: system_color(f.system),
            weight: f.count as f64,
        })
        .collect()
}

/// Title band height, pie centre and radius for a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    title_px: f64,
    center: (i32, i32),
    radius: f64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn layout(size: ChartSize) -> Layout {
    let title_px = (f64::from(size.height) / 16.0).max(8.0);
    let band = (title_px * 2.0).round() as u32;
    let body = size.height.saturating_sub(band);

    Layout {
        title_px,
        center: ((size.width / 2) as i32, (band + body / 2) as i32),
        radius: f64::from(size.width.min(body)) * RADIUS_RATIO,
    }
}

fn render_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Render(e.to_string())
}

fn io_error(e: &std::io::Error) -> ChartError {
    ChartError::Io(e.to_string())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn draw_pie(path: &Path, size: ChartSize, slices: &[Slice]) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_error)?;

    let Layout {
        title_px,
        center,
        radius,
    } = layout(size);

    let title_style = TextStyle::from((FONT, title_px).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw_text(
        CHART_TITLE,
        &title_style,
        ((size.width / 2) as i32, title_px.round() as i32),
    )
    .map_err(render_error)?;

    if slices.is_empty() {
        root.draw(&Circle::new(
            center,
            radius.round() as i32,
            ShapeStyle::from(&OUTLINE).stroke_width(2),
        ))
        .map_err(render_error)?;
        root.present().map_err(render_error)?;
        return Ok(());
    }

    let weights: Vec<f64> = slices.iter().map(|s| s.weight).collect();
    let colors: Vec<RGBColor> = slices.iter().map(|s| s.color).collect();
    let labels: Vec<&str> = slices.iter().map(|s| s.label).collect();

    let mut pie = Pie::new(&center, &radius, &weights, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style((FONT, title_px * 0.75).into_font().color(&BLACK));
    pie.label_offset(radius * 0.1);
    root.draw(&pie).map_err(render_error)?;

    root.present().map_err(render_error)?;
    Ok(())
}

/// Draw into a scratch directory and read the encoded PNG back.
fn render_png(size: ChartSize, slices: &[Slice]) -> Result<Vec<u8>, ChartError> {
    let dir = tempfile::Builder::new()
        .prefix("basecalc-chart-")
        .tempdir()
        .map_err(|e| io_error(&e))?;
    let path = dir.path().join("chart.png");

    draw_pie(&path, size, slices)?;
    std::fs::read(&path).map_err(|e| io_error(&e))
}

#[async_trait]
impl ChartRendererPort for PieChartRenderer {
    async fn render_pie(&self, frequencies: &[SystemFrequency]) -> Result<Vec<u8>, ChartError> {
        let slices = pie_slices(frequencies);
        let size = self.size;
        let slice_count = slices.len();

        // plotters is synchronous; keep it off the async worker threads
        let handle: tokio::task::JoinHandle<Result<Vec<u8>, ChartError>> =
            tokio::task::spawn_blocking(move || render_png(size, &slices));

        let bytes = handle
            .await
            .map_err(|e| ChartError::Internal(format!("chart render task failed: {e}")))??;

        info!(
            slices = slice_count,
            bytes = bytes.len(),
            width = size.width,
            height = size.height,
            "Pie chart rendered"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    /// Width and height from the IHDR chunk.
    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    #[tokio::test]
    async fn test_empty_chart_is_valid_png() {
        let renderer = PieChartRenderer::new();
        let bytes = renderer.render_pie(&[]).await.unwrap();

        assert_eq!(bytes[..8], PNG_SIGNATURE);
        assert_eq!(png_dimensions(&bytes), (640, 480));
    }

    #[tokio::test]
    async fn test_chart_with_slices() {
        let renderer = PieChartRenderer::with_size(ChartSize::new(200, 120));
        let frequencies = [
            SystemFrequency {
                system: NumberSystem::Decimal,
                count: 3,
            },
            SystemFrequency {
                system: NumberSystem::Hexadecimal,
                count: 1,
            },
        ];

        let bytes = renderer.render_pie(&frequencies).await.unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
        assert_eq!(png_dimensions(&bytes), (200, 120));

        let empty = renderer.render_pie(&[]).await.unwrap();
        assert_ne!(bytes, empty);
    }

    #[tokio::test]
    async fn test_single_system_fills_disc() {
        let renderer = PieChartRenderer::with_size(ChartSize::new(100, 100));
        let frequencies = [SystemFrequency {
            system: NumberSystem::Octal,
            count: 7,
        }];

        let bytes = renderer.render_pie(&frequencies).await.unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_system_colors_are_distinct() {
        let colors: Vec<RGBColor> = NumberSystem::ALL.into_iter().map(system_color).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_slices_are_labelled_with_system_names() {
        let frequencies = [
            SystemFrequency {
                system: NumberSystem::Binary,
                count: 2,
            },
            SystemFrequency {
                system: NumberSystem::Octal,
                count: 0,
            },
            SystemFrequency {
                system: NumberSystem::Hexadecimal,
                count: 5,
            },
        ];

        let slices = pie_slices(&frequencies);
        let labels: Vec<&str> = slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, ["binary", "hexadecimal"]);
        assert_eq!(slices[0].color, system_color(NumberSystem::Binary));
        assert!((slices[1].weight - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pie_sits_below_title_band() {
        for size in [ChartSize::default(), ChartSize::new(160, 120), ChartSize::new(100, 300)] {
            let Layout {
                title_px,
                center,
                radius,
            } = layout(size);

            assert!(f64::from(center.1) - radius > title_px * 1.5, "{size:?}");
            assert!(f64::from(center.1) + radius <= f64::from(size.height), "{size:?}");
            assert!(radius * 2.0 <= f64::from(size.width), "{size:?}");
        }
    }
}
