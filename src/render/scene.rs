// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Backend independent display list.

use serde::Serialize;

use super::coords::Point;
use crate::input::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerKind {
    Source,
    Sink,
    Node,
    Buffer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    /// Outline of the problem bounds.
    Bounds(Rect),
    Blockage(Rect),
    Wire { from: Point, to: Point },
    Marker { kind: MarkerKind, at: Point },
}

impl Shape {
    /// Paint order: area fills below wires, wires below markers.
    pub fn layer(&self) -> u8 {
        match self {
            Shape::Bounds(_) => 0,
            Shape::Blockage(_) => 1,
            Shape::Wire { .. } => 2,
            Shape::Marker {
                kind: MarkerKind::Buffer,
                ..
            } => 4,
            Shape::Marker { .. } => 3,
        }
    }
}

/// World-space window shown by the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Viewport {
    /// Bounds grown on every side by `ratio` of their largest span,
    /// truncated to whole units. Edges saturate at the `i64` range.
    pub fn padded(bounds: &Rect, ratio: f64) -> Self {
        let span = bounds.width().max(bounds.height());
        let pad = (span as f64 * ratio) as i64;
        Self {
            min_x: bounds.llx.saturating_sub(pad),
            min_y: bounds.lly.saturating_sub(pad),
            max_x: bounds.urx.saturating_add(pad),
            max_y: bounds.ury.saturating_add(pad),
        }
    }

    pub fn width(&self) -> i64 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn height(&self) -> i64 {
        self.max_y.saturating_sub(self.min_y)
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn marker(&mut self, kind: MarkerKind, at: Point) {
        self.push(Shape::Marker { kind, at });
    }

    pub fn markers(&self) -> impl Iterator<Item = (MarkerKind, Point)> + '_ {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Marker { kind, at } => Some((*kind, *at)),
            _ => None,
        })
    }

    pub fn marker_count(&self, kind: MarkerKind) -> usize {
        self.markers().filter(|(k, _)| *k == kind).count()
    }

    pub fn wire_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Wire { .. }))
            .count()
    }

    pub fn blockage_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Blockage(_)))
            .count()
    }

    /// Shapes in paint order, stable within a layer.
    pub fn painted(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.iter().collect();
        shapes.sort_by_key(|shape| shape.layer());
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_uses_largest_span() {
        let viewport = Viewport::padded(&Rect::new(0, 0, 200, 50), 0.1);
        assert_eq!(
            viewport,
            Viewport {
                min_x: -20,
                min_y: -20,
                max_x: 220,
                max_y: 70
            }
        );
    }

    #[test]
    fn test_padding_truncates() {
        let viewport = Viewport::padded(&Rect::new(0, 0, 15, 15), 0.1);
        assert_eq!(viewport.min_x, -1);
        assert_eq!(viewport.max_y, 16);
    }

    #[test]
    fn test_padding_saturates_on_extreme_bounds() {
        let bounds = Rect::new(-9_000_000_000_000_000_000, 0, 9_000_000_000_000_000_000, 1);
        let viewport = Viewport::padded(&bounds, 0.1);
        assert_eq!(viewport.min_x, i64::MIN);
        assert_eq!(viewport.max_x, i64::MAX);
        assert_eq!(viewport.width(), i64::MAX);
    }

    #[test]
    fn test_painted_puts_markers_over_blockages() {
        let mut scene = Scene::new(Viewport::padded(&Rect::new(0, 0, 10, 10), 0.1));
        scene.marker(MarkerKind::Source, Point::new(1, 1));
        scene.push(Shape::Blockage(Rect::new(0, 0, 5, 5)));
        let painted = scene.painted();
        assert!(matches!(painted[0], Shape::Blockage(_)));
        assert!(matches!(painted[1], Shape::Marker { .. }));
    }
}
