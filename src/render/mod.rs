//! # Body Renderer
//!
//! Walks a region table in table order, resolves each region's fill
//! through the precedence rules, and emits an abstract draw-op stream over
//! shared compiled geometry. Hit-testing and bounding-box queries reuse the
//! exact same compiled geometry through the same cache, so what you see is
//! what you hit.
//!
//! Paint order and hit-test order both iterate the table forward. For
//! overlapping regions this means a hit does not necessarily land on the
//! topmost-painted region; callers relying on overlap resolution should
//! order their tables accordingly.

use std::sync::Arc;

use crate::cache::PathCache;
use crate::data::selection::MuscleSelection;
use crate::data::{BodySlug, BodyTable, Muscle, MuscleSide};
use crate::geometry::{Point, Rect, Size};
use crate::heatmap::{Color, MuscleFill, MuscleHighlights, Shading};
use crate::path::CompiledPath;
use crate::style::BodyViewStyle;
use crate::transform::ViewportTransform;

/// One drawing instruction for a target surface. Geometry is shared with
/// the cache; consumers must treat it as read-only.
#[derive(Debug, Clone)]
pub enum DrawOp {
    Fill {
        path: Arc<CompiledPath>,
        shading: Shading,
    },
    Stroke {
        path: Arc<CompiledPath>,
        color: Color,
        width: f64,
    },
}

/// Renders one (gender, side) table with a style, highlights, and a
/// selection. Cheap to construct per frame; the cache outlives it.
pub struct BodyRenderer<'a> {
    table: &'a BodyTable,
    style: &'a BodyViewStyle,
    highlights: Option<&'a MuscleHighlights>,
    selection: MuscleSelection,
    cache: &'a PathCache,
}

impl<'a> BodyRenderer<'a> {
    pub fn new(table: &'a BodyTable, style: &'a BodyViewStyle, cache: &'a PathCache) -> Self {
        BodyRenderer {
            table,
            style,
            highlights: None,
            selection: MuscleSelection::EMPTY,
            cache,
        }
    }

    pub fn with_highlights(mut self, highlights: &'a MuscleHighlights) -> Self {
        self.highlights = Some(highlights);
        self
    }

    pub fn with_selection(mut self, selection: MuscleSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Produces the ordered draw-op stream for a target size.
    pub fn render(&self, size: Size) -> Vec<DrawOp> {
        let transform = ViewportTransform::fit(&self.table.view_box, size);
        let mut ops = Vec::new();

        for part in &self.table.parts {
            let muscle = part.slug.muscle();
            let highlight =
                muscle.and_then(|m| self.highlights.and_then(|h| h.get(m)));
            let is_selected = muscle.is_some_and(|m| self.selection.contains(m));
            let is_hair = part.slug == BodySlug::Hair;

            let (fill, opacity) = self.resolve_fill(muscle, is_hair, highlight, is_selected);

            for path_string in part.all_paths() {
                let path = self.cache.get(path_string, &transform);
                let bounds = path.bounding_rect().unwrap_or(Rect::ZERO);
                ops.push(DrawOp::Fill {
                    path: Arc::clone(&path),
                    shading: fill.shading(&bounds).with_opacity(opacity),
                });

                if self.style.stroke_width > 0.0 {
                    ops.push(DrawOp::Stroke {
                        path: Arc::clone(&path),
                        color: self.style.stroke_color,
                        width: self.style.stroke_width,
                    });
                }

                if is_selected {
                    ops.push(DrawOp::Stroke {
                        path,
                        color: self.style.selection_stroke_color,
                        width: self.style.selection_stroke_width,
                    });
                }
            }
        }

        ops
    }

    /// Finds the muscle under `point`, testing each region's left subpaths
    /// first, then right, then common. Rendering-only parts with no muscle
    /// mapping (hair) never match; the head does, like any other region.
    pub fn hit_test(&self, point: Point, size: Size) -> Option<(Muscle, MuscleSide)> {
        let transform = ViewportTransform::fit(&self.table.view_box, size);

        for part in &self.table.parts {
            let Some(muscle) = part.slug.muscle() else {
                continue;
            };
            let groups = [
                (&part.left, MuscleSide::Left),
                (&part.right, MuscleSide::Right),
                (&part.common, MuscleSide::Both),
            ];
            for (paths, side) in groups {
                for path_string in paths {
                    let path = self.cache.get(path_string, &transform);
                    if path.contains(point) {
                        return Some((muscle, side));
                    }
                }
            }
        }

        None
    }

    /// The union of the bounding boxes of a muscle's compiled subpaths at
    /// a target size, or `None` if the table has no geometry for it.
    pub fn bounding_box(&self, muscle: Muscle, size: Size) -> Option<Rect> {
        let transform = ViewportTransform::fit(&self.table.view_box, size);
        let mut bounds: Option<Rect> = None;

        for part in &self.table.parts {
            if part.slug.muscle() != Some(muscle) {
                continue;
            }
            for path_string in part.all_paths() {
                let path = self.cache.get(path_string, &transform);
                if let Some(rect) = path.bounding_rect() {
                    bounds = Some(match bounds {
                        Some(b) => b.union(&rect),
                        None => rect,
                    });
                }
            }
        }

        bounds
    }

    /// Fill precedence: cosmetic parts always use their fixed style color;
    /// then selection, then highlight, then the default fill.
    fn resolve_fill(
        &self,
        muscle: Option<Muscle>,
        is_hair: bool,
        highlight: Option<&crate::heatmap::MuscleHighlight>,
        is_selected: bool,
    ) -> (MuscleFill, f64) {
        if is_hair {
            return (MuscleFill::Color(self.style.hair_color), 1.0);
        }
        if muscle.is_some_and(Muscle::is_cosmetic_part) {
            return (MuscleFill::Color(self.style.head_color), 1.0);
        }
        if is_selected {
            return (MuscleFill::Color(self.style.selection_color), 1.0);
        }
        if let Some(highlight) = highlight {
            return (highlight.fill.clone(), highlight.opacity());
        }
        (MuscleFill::Color(self.style.default_fill_color), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BodyPart, BodySlug, ViewBox};
    use crate::heatmap::MuscleHighlight;

    // A 100x100 source space with two 10-unit triangles for the chest and
    // a square head.
    fn test_table() -> BodyTable {
        BodyTable {
            view_box: ViewBox {
                origin: Point::ZERO,
                size: Size::new(100.0, 100.0),
            },
            parts: vec![
                BodyPart {
                    slug: BodySlug::Muscle(Muscle::Head),
                    common: vec!["M 40 0 L 60 0 L 60 20 L 40 20 Z".to_string()],
                    left: vec![],
                    right: vec![],
                },
                BodyPart {
                    slug: BodySlug::Muscle(Muscle::Chest),
                    common: vec![],
                    left: vec!["M 30 30 L 45 30 L 38 45 Z".to_string()],
                    right: vec!["M 55 30 L 70 30 L 62 45 Z".to_string()],
                },
            ],
        }
    }

    fn render_all(
        table: &BodyTable,
        style: &BodyViewStyle,
        highlights: &MuscleHighlights,
        selection: MuscleSelection,
    ) -> Vec<DrawOp> {
        let cache = PathCache::new();
        BodyRenderer::new(table, style, &cache)
            .with_highlights(highlights)
            .with_selection(selection)
            .render(Size::new(100.0, 100.0))
    }

    fn first_fill_solid(ops: &[DrawOp]) -> Color {
        for op in ops {
            if let DrawOp::Fill {
                shading: Shading::Solid(c),
                ..
            } = op
            {
                return *c;
            }
        }
        panic!("no solid fill emitted");
    }

    #[test]
    fn test_render_emits_fill_per_subpath() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let ops = render_all(
            &table,
            &style,
            &MuscleHighlights::new(),
            MuscleSelection::EMPTY,
        );
        let fills = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Fill { .. }))
            .count();
        assert_eq!(fills, 3);
        // Default style has no stroke.
        assert!(ops.iter().all(|op| matches!(op, DrawOp::Fill { .. })));
    }

    #[test]
    fn test_head_uses_fixed_style_color_over_highlight() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let mut highlights = MuscleHighlights::new();
        highlights.insert(Muscle::Head, MuscleHighlight::new(Color::RED));
        let ops = render_all(&table, &style, &highlights, MuscleSelection::EMPTY);
        // The head is drawn first and keeps its style color.
        assert_eq!(first_fill_solid(&ops), style.head_color);
    }

    #[test]
    fn test_selection_beats_highlight() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let mut highlights = MuscleHighlights::new();
        highlights.insert(Muscle::Chest, MuscleHighlight::new(Color::RED));
        let selection: MuscleSelection = [Muscle::Chest].into_iter().collect();
        let ops = render_all(&table, &style, &highlights, selection);

        let chest_fills: Vec<Color> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill {
                    shading: Shading::Solid(c),
                    ..
                } => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(chest_fills[1], style.selection_color);
        assert_eq!(chest_fills[2], style.selection_color);

        // Selection also adds a stroke per subpath.
        let strokes = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke { .. }))
            .count();
        assert_eq!(strokes, 2);
    }

    #[test]
    fn test_highlight_opacity_applies_to_shading() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let mut highlights = MuscleHighlights::new();
        highlights.insert(
            Muscle::Chest,
            MuscleHighlight::with_fill(Color::RED.into(), 0.5),
        );
        let ops = render_all(&table, &style, &highlights, MuscleSelection::EMPTY);
        let chest_fill = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill {
                    shading: Shading::Solid(c),
                    ..
                } => Some(*c),
                _ => None,
            })
            .nth(1)
            .unwrap();
        assert_eq!(chest_fill.a, 0.5);
    }

    #[test]
    fn test_hit_test_left_and_right() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let cache = PathCache::new();
        let renderer = BodyRenderer::new(&table, &style, &cache);
        let size = Size::new(100.0, 100.0);

        assert_eq!(
            renderer.hit_test(Point::new(38.0, 35.0), size),
            Some((Muscle::Chest, MuscleSide::Left))
        );
        assert_eq!(
            renderer.hit_test(Point::new(62.0, 35.0), size),
            Some((Muscle::Chest, MuscleSide::Right))
        );
        // The head is a real region for tapping, fixed color or not.
        assert_eq!(
            renderer.hit_test(Point::new(50.0, 10.0), size),
            Some((Muscle::Head, MuscleSide::Both))
        );
    }

    #[test]
    fn test_hit_test_miss() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let cache = PathCache::new();
        let renderer = BodyRenderer::new(&table, &style, &cache);
        assert_eq!(
            renderer.hit_test(Point::new(0.0, 0.0), Size::new(100.0, 100.0)),
            None
        );
    }

    #[test]
    fn test_hit_test_scales_with_target_size() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let cache = PathCache::new();
        let renderer = BodyRenderer::new(&table, &style, &cache);
        // At 200x200 everything doubles.
        assert_eq!(
            renderer.hit_test(Point::new(76.0, 70.0), Size::new(200.0, 200.0)),
            Some((Muscle::Chest, MuscleSide::Left))
        );
    }

    #[test]
    fn test_bounding_box_unions_subpaths() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let cache = PathCache::new();
        let renderer = BodyRenderer::new(&table, &style, &cache);
        let bounds = renderer
            .bounding_box(Muscle::Chest, Size::new(100.0, 100.0))
            .unwrap();
        assert_eq!(bounds, Rect::new(30.0, 30.0, 40.0, 15.0));
    }

    #[test]
    fn test_bounding_box_absent_region() {
        let table = test_table();
        let style = BodyViewStyle::default();
        let cache = PathCache::new();
        let renderer = BodyRenderer::new(&table, &style, &cache);
        assert!(renderer
            .bounding_box(Muscle::Calves, Size::new(100.0, 100.0))
            .is_none());
    }
}
