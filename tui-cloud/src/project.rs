use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Widget;

use crate::animate::{CUBE_EDGES, Placeholder};
use crate::config::{Camera, CloudConfig};
use crate::hsl::{self, Hsl};
use crate::item::{RenderItem, Vec3};
use crate::layout::{Cloud, Scene};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 0.5;
const NEAR_PLANE: f32 = 0.1;
/// Lightness factor at the far side of the sphere.
const FAR_DIM: f32 = 0.45;
const BOLD_SIZE: f32 = 0.75;
const DIM_SIZE: f32 = 0.4;
const EDGE_SAMPLES: usize = 10;

/// Screen-space point: fractional cell column/row plus camera depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub column: f32,
    pub row: f32,
    pub depth: f32,
}

/// Perspective projection from a camera on +z looking at the origin.
pub fn project(camera: &Camera, area: Rect, p: Vec3) -> Option<ScreenPoint> {
    let depth = camera.distance - p.z;

    if depth < NEAR_PLANE || area.is_empty() {
        return None;
    }

    let focal = 1.0 / (camera.fov_y_degrees.to_radians() * 0.5).tan();
    let aspect = area.width as f32 * CELL_ASPECT / area.height as f32;

    let ndc_x = p.x * focal / (depth * aspect);
    let ndc_y = p.y * focal / depth;

    Some(ScreenPoint {
        column: area.x as f32 + (ndc_x + 1.0) * 0.5 * area.width as f32,
        row: area.y as f32 + (1.0 - ndc_y) * 0.5 * area.height as f32,
        depth,
    })
}

/// A label's on-screen footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub index: usize,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub depth: f32,
}

impl Label {
    pub fn contains(&self, column: u16, row: u16) -> bool {
        row == self.y && column >= self.x && column < self.x + self.width
    }
}

/// Visible labels ordered far to near. Labels are centered on their point and
/// shifted (or truncated) to stay inside `area`.
pub fn labels(items: &[RenderItem], rotation: f32, camera: &Camera, area: Rect) -> Vec<Label> {
    let mut out: Vec<Label> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let sp = project(camera, area, item.current_position.rotate_y(rotation))?;
            let row = sp.row.floor();

            if row < area.top() as f32 || row >= area.bottom() as f32 {
                return None;
            }

            let text_width = Span::raw(item.word.as_str()).width().min(area.width as usize) as u16;
            let start = (sp.column - text_width as f32 / 2.0).round();
            let max_start = (area.right() - text_width) as f32;
            let x = start.clamp(area.left() as f32, max_start) as u16;

            Some(Label {
                index,
                x,
                y: row as u16,
                width: text_width,
                depth: sp.depth,
            })
        })
        .collect();

    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    out
}

/// Index of the nearest label under the given cell.
pub fn pick(scene: Scene<'_>, config: &CloudConfig, area: Rect, column: u16, row: u16) -> Option<usize> {
    match scene {
        Scene::Idle(_) => None,
        Scene::Cloud { items, rotation } => labels(items, rotation, &config.camera, area)
            .iter()
            .rev()
            .find(|label| label.contains(column, row))
            .map(|label| label.index),
    }
}

pub fn render(scene: Scene<'_>, config: &CloudConfig, area: Rect, buf: &mut Buffer) {
    let area = area.intersection(buf.area);

    match scene {
        Scene::Idle(cube) => render_placeholder(cube, config, area, buf),
        Scene::Cloud { items, rotation } => render_cloud(items, rotation, config, area, buf),
    }
}

fn render_cloud(items: &[RenderItem], rotation: f32, config: &CloudConfig, area: Rect, buf: &mut Buffer) {
    for label in labels(items, rotation, &config.camera, area) {
        let item = &items[label.index];
        let fg = depth_shade(item.color, label.depth, config);

        buf.set_stringn(
            label.x,
            label.y,
            &item.word,
            label.width as usize,
            Style::new().fg(fg).add_modifier(modifier_for(item)),
        );
    }
}

fn render_placeholder(cube: &Placeholder, config: &CloudConfig, area: Rect, buf: &mut Buffer) {
    let vertices = cube.vertices();
    let color = config.palette.cold();

    for &(a, b) in &CUBE_EDGES {
        for s in 1..EDGE_SAMPLES {
            let t = s as f32 / EDGE_SAMPLES as f32;
            let p = Vec3::new(
                vertices[a].x + (vertices[b].x - vertices[a].x) * t,
                vertices[a].y + (vertices[b].y - vertices[a].y) * t,
                vertices[a].z + (vertices[b].z - vertices[a].z) * t,
            );

            plot(buf, config, area, p, "·", color);
        }
    }

    for &v in &vertices {
        plot(buf, config, area, v, "●", color);
    }
}

fn plot(buf: &mut Buffer, config: &CloudConfig, area: Rect, p: Vec3, symbol: &str, color: Hsl) {
    let Some(sp) = project(&config.camera, area, p) else {
        return;
    };

    let (column, row) = (sp.column.floor(), sp.row.floor());

    if column < area.left() as f32
        || column >= area.right() as f32
        || row < area.top() as f32
        || row >= area.bottom() as f32
    {
        return;
    }

    if let Some(cell) = buf.cell_mut((column as u16, row as u16)) {
        cell.set_symbol(symbol);
        cell.set_fg(hsl::to_color(color));
    }
}

/// Darken with distance from the camera across the sphere's depth span.
fn depth_shade(color: Hsl, depth: f32, config: &CloudConfig) -> ratatui::style::Color {
    let near = config.camera.distance - config.radius;
    let span = 2.0 * config.radius;
    let t = if span > 0.0 {
        ((depth - near) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };

    hsl::to_color(hsl::dim(color, 1.0 - (1.0 - FAR_DIM) * t))
}

fn modifier_for(item: &RenderItem) -> Modifier {
    let size = item.display_size();
    let mut modifier = if size >= BOLD_SIZE {
        Modifier::BOLD
    } else if size < DIM_SIZE {
        Modifier::DIM
    } else {
        Modifier::empty()
    };

    if item.highlighted {
        modifier |= Modifier::REVERSED;
    }

    modifier
}

/// Draws a [`Cloud`]'s current scene.
pub struct CloudView<'a> {
    cloud: &'a Cloud,
}

impl<'a> CloudView<'a> {
    pub fn new(cloud: &'a Cloud) -> Self {
        Self { cloud }
    }
}

impl Widget for CloudView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render(self.cloud.scene(), self.cloud.config(), area, buf);
    }
}
