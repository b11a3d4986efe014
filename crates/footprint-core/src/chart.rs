// crates/footprint-core/src/chart.rs

use plotters::element::Polygon;
use plotters::prelude::*;

use crate::error::{FootprintError, Result};
use crate::types::{Breakdown, Category};

// Slice colors, one per category in display order.
const SLICE_COLORS: [RGBColor; 5] = [
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
];

/// Rasterized pie-chart snapshot. `pixels` is RGB8, row-major,
/// `width * height * 3` bytes.
#[derive(Debug, Clone)]
pub struct ChartSnapshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Renders breakdown pie charts. Every call produces a fresh snapshot, so
/// dropping the previous one is the whole lifecycle; no stale chart can
/// survive a re-render.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: 360,
            height: 270,
        }
    }
}

impl ChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn render(&self, parts: &Breakdown) -> Result<ChartSnapshot> {
        let mut pixels = vec![255u8; (self.width * self.height * 3) as usize];
        let total: f64 = Category::ALL
            .iter()
            .map(|category| parts.get(*category).max(0.0))
            .sum();

        {
            let root =
                BitMapBackend::with_buffer(&mut pixels, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE)
                .map_err(|err| FootprintError::Chart(err.to_string()))?;

            // An all-zero breakdown has no slices to draw.
            if total > 0.0 {
                let cx = f64::from(self.width) / 2.0;
                let cy = f64::from(self.height) / 2.0;
                let radius = cx.min(cy) - 8.0;

                let mut start = -std::f64::consts::FRAC_PI_2;
                for (idx, category) in Category::ALL.iter().enumerate() {
                    let share = parts.get(*category).max(0.0) / total;
                    if share <= 0.0 {
                        continue;
                    }
                    let end = start + share * std::f64::consts::TAU;
                    root.draw(&Polygon::new(
                        sector_points(cx, cy, radius, start, end),
                        SLICE_COLORS[idx].filled(),
                    ))
                    .map_err(|err| FootprintError::Chart(err.to_string()))?;
                    start = end;
                }
            }

            root.present()
                .map_err(|err| FootprintError::Chart(err.to_string()))?;
        }

        Ok(ChartSnapshot {
            width: self.width,
            height: self.height,
            pixels,
        })
    }
}

/// Closed polygon approximating a pie sector, one arc point per degree.
fn sector_points(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = ((end - start).to_degrees().abs().ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push((cx as i32, cy as i32));
    for i in 0..=steps {
        let angle = start + (end - start) * (i as f64 / steps as f64);
        points.push((
            (cx + radius * angle.cos()) as i32,
            (cy + radius * angle.sin()) as i32,
        ));
    }
    points
}
