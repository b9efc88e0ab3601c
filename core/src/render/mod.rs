//! Drawing an [`InteractionGraph`] with a circular layout into a PNG image.
//!
//! The figure geometry follows the usual plotting defaults: the graph is
//! drawn into an axes box that leaves a border around the figure, the data
//! limits get a small margin and sizes are given in points (1/72 inch).

use std::path::Path;
use std::time::Instant;

use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;

use crate::colormap::{normalize, Color, Colormap};
use crate::errors::{InteraxError, Result};
use crate::layout::circular_layout;
use crate::types::Position;
use crate::InteractionGraph;

mod text;


const POINTS_PER_INCH: f64 = 72.0;

// Axes box as fraction of the figure.
const AXES_LEFT: f64 = 0.125;
const AXES_RIGHT: f64 = 0.9;
const AXES_BOTTOM: f64 = 0.11;
const AXES_TOP: f64 = 0.88;
const DATA_MARGIN: f64 = 0.05;

const MAX_CANVAS_SIDE: u32 = 1 << 15;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width_inches: f64,
    pub height_inches: f64,
    pub dpi: u32,
    pub background: Color,
    pub node_color: Color,
    /// Area of the node marker in pt².
    pub node_size: f64,
    /// Line width of the edges in pt.
    pub edge_width: f64,
    pub edge_colormap: Colormap,
    pub with_labels: bool,
    /// Label height in pt.
    pub font_size: f64,
    pub font_bold: bool,
    pub label_color: Color,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width_inches: 20.0,
            height_inches: 10.0,
            dpi: 100,
            background: Color::new(255, 255, 255),
            node_color: Color::new(255, 0, 0),
            node_size: 200.0,
            edge_width: 10.0,
            edge_colormap: Colormap::Blues,
            with_labels: true,
            font_size: 24.0,
            font_bold: true,
            label_color: Color::new(0, 0, 0),
        }
    }
}

impl RenderSettings {
    /// Size of the resulting image in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_inches * dpi).round() as u32,
            (self.height_inches * dpi).round() as u32,
        )
    }

    fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi as f64 / POINTS_PER_INCH
    }

    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(InteraxError::InvalidSettings(
                "dpi must be larger than zero".to_string(),
            ));
        }
        if !(self.width_inches.is_finite() && self.height_inches.is_finite()) {
            return Err(InteraxError::InvalidSettings(
                "figure size must be a finite number".to_string(),
            ));
        }
        let (width, height) = self.canvas_size();
        if width == 0 || height == 0 {
            return Err(InteraxError::InvalidSettings(format!(
                "figure of {}x{} inches at {} dpi is empty",
                self.width_inches, self.height_inches, self.dpi
            )));
        }
        if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
            return Err(InteraxError::InvalidSettings(format!(
                "canvas of {}x{} pixels is too large (maximum side length is {})",
                width, height, MAX_CANVAS_SIDE
            )));
        }
        for (name, value) in [
            ("node_size", self.node_size),
            ("edge_width", self.edge_width),
            ("font_size", self.font_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(InteraxError::InvalidSettings(format!(
                    "{} must not be negative, but is {}",
                    name, value
                )));
            }
        }
        // marker, line and label sizes must fit on the canvas
        let max_side = width.max(height) as f64;
        for (name, pixels) in [
            ("node_size", self.points_to_pixels(self.node_size.sqrt())),
            ("edge_width", self.points_to_pixels(self.edge_width)),
            ("font_size", self.points_to_pixels(self.font_size)),
        ] {
            if pixels > max_side {
                return Err(InteraxError::InvalidSettings(format!(
                    "{} of {:.0} pixels does not fit on a canvas of {}x{} pixels",
                    name, pixels, width, height
                )));
            }
        }
        Ok(())
    }
}

/// Maps layout coordinates to pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Viewport {
    x_range: (f64, f64),
    y_range: (f64, f64),
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

fn data_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });
    let (min, max) = if min > max {
        (-1.0, 1.0)
    } else if max - min < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    };
    let margin = (max - min) * DATA_MARGIN;
    (min - margin, max + margin)
}

impl Viewport {
    pub(crate) fn new(settings: &RenderSettings, positions: &[Position]) -> Viewport {
        let (w, h) = settings.canvas_size();
        let (w, h) = (w as f64, h as f64);
        Viewport {
            x_range: data_range(positions.iter().map(|p| p.x)),
            y_range: data_range(positions.iter().map(|p| p.y)),
            left: AXES_LEFT * w,
            top: (1.0 - AXES_TOP) * h,
            width: (AXES_RIGHT - AXES_LEFT) * w,
            height: (AXES_TOP - AXES_BOTTOM) * h,
        }
    }

    pub(crate) fn to_pixel(&self, p: Position) -> (f64, f64) {
        let (x_min, x_max) = self.x_range;
        let (y_min, y_max) = self.y_range;
        (
            self.left + (p.x - x_min) / (x_max - x_min) * self.width,
            // image rows grow downwards
            self.top + (y_max - p.y) / (y_max - y_min) * self.height,
        )
    }
}

fn draw_thick_segment(
    img: &mut RgbImage,
    a: (f64, f64),
    b: (f64, f64),
    width: f64,
    color: Rgb<u8>,
) {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length = dx.hypot(dy);
    if length < 1.0 || width < 1.5 {
        draw_line_segment_mut(img, (a.0 as f32, a.1 as f32), (b.0 as f32, b.1 as f32), color);
        return;
    }
    let nx = -dy / length * width / 2.0;
    let ny = dx / length * width / 2.0;
    let corner = |x: f64, y: f64| Point::new(x.round() as i32, y.round() as i32);
    let polygon = [
        corner(a.0 + nx, a.1 + ny),
        corner(b.0 + nx, b.1 + ny),
        corner(b.0 - nx, b.1 - ny),
        corner(a.0 - nx, a.1 - ny),
    ];
    draw_polygon_mut(img, &polygon, color);
}

fn draw_self_loop(
    img: &mut RgbImage,
    node: (f64, f64),
    node_radius: f64,
    width: f64,
    color: Rgb<u8>,
) {
    let loop_radius = (node_radius * 1.5).max(width);
    let (cx, cy) = (node.0, node.1 - node_radius - loop_radius);
    let inner = (loop_radius - width / 2.0).max(0.0);
    let outer = loop_radius + width / 2.0;

    // only visit the part of the bounding box that lies on the canvas
    let clip = |from: f64, to: f64, size: u32| {
        let start = from.floor().max(0.0) as u32;
        let end = to.ceil().min(size as f64).max(0.0) as u32;
        start..end
    };
    let columns = clip(cx - outer, cx + outer, img.width());
    for y in clip(cy - outer, cy + outer, img.height()) {
        for x in columns.clone() {
            let distance = (x as f64 - cx).hypot(y as f64 - cy);
            if distance >= inner && distance <= outer {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Render the graph into an image.
///
/// Edges are colored by their weight relative to the minimum and maximum
/// weight of the graph, nodes are drawn on top and labeled with their name.
pub fn render(graph: &InteractionGraph, settings: &RenderSettings) -> Result<RgbImage> {
    settings.validate()?;

    let (width, height) = settings.canvas_size();
    let mut img = RgbImage::from_pixel(width, height, settings.background.into());

    let positions = circular_layout(graph);
    let viewport = Viewport::new(settings, &positions);
    let pixels: Vec<(f64, f64)> = positions.iter().map(|p| viewport.to_pixel(*p)).collect();

    let node_radius = settings.points_to_pixels(settings.node_size.sqrt() / 2.0);
    let edge_width = settings.points_to_pixels(settings.edge_width);

    if let Some((min_weight, max_weight)) = graph.weight_range() {
        debug!(
            "drawing {} edges with weights from {} to {}",
            graph.edge_count(),
            min_weight,
            max_weight
        );
        for e in graph.edges() {
            let color: Rgb<u8> = settings
                .edge_colormap
                .map(normalize(e.weight, min_weight, max_weight))
                .into();
            if e.is_self_loop() {
                draw_self_loop(&mut img, pixels[e.source], node_radius, edge_width, color);
            } else {
                draw_thick_segment(
                    &mut img,
                    pixels[e.source],
                    pixels[e.target],
                    edge_width,
                    color,
                );
            }
        }
    }

    let (width, height) = img.dimensions();
    let radius = node_radius.min(width.max(height) as f64).round() as i32;
    if settings.node_size > 0.0 {
        for p in &pixels {
            draw_filled_circle_mut(
                &mut img,
                (p.0.round() as i32, p.1.round() as i32),
                radius,
                settings.node_color.into(),
            );
        }
    }

    if settings.with_labels && settings.font_size > 0.0 {
        let font_pixels = settings.points_to_pixels(settings.font_size);
        let scale = ((font_pixels / text::GLYPH_SIZE as f64).round() as u32)
            .clamp(1, MAX_CANVAS_SIDE / text::GLYPH_SIZE);
        for (name, p) in graph.nodes().zip(pixels.iter()) {
            let (text_width, text_height) = text::text_size(name, scale);
            // centered horizontally, bottom of the text at the node center
            let left = p.0.round() as i64 - (text_width / 2) as i64;
            let top = p.1.round() as i64 - text_height as i64;
            text::draw_text_mut(
                &mut img,
                name,
                left,
                top,
                scale,
                settings.font_bold,
                settings.label_color.into(),
            );
        }
    }

    Ok(img)
}

/// Render the graph and save it as PNG file.
pub fn render_to_file(
    graph: &InteractionGraph,
    settings: &RenderSettings,
    path: &Path,
) -> Result<()> {
    let t_start = Instant::now();
    let img = render(graph, settings)?;
    img.save_with_format(path, ImageFormat::Png)?;
    info!(
        "saved {}x{} image to {} in {} ms",
        img.width(),
        img.height(),
        path.display(),
        t_start.elapsed().as_millis()
    );
    Ok(())
}
