//! # Myomap
//!
//! The geometry and color core of an anatomical body map.
//!
//! Most body-diagram widgets bake their artwork into the UI layer: paths
//! parsed per frame, hit-testing done against approximate bounding boxes,
//! colors hard-coded per theme. Myomap separates the expensive, testable
//! core — path compilation, viewport fitting, winding-rule hit-testing,
//! intensity-to-color resolution — from presentation entirely. The output
//! is an ordered stream of draw operations over shared compiled geometry;
//! any drawing surface that can fill and stroke paths can consume it.
//!
//! ## Architecture
//!
//! ```text
//! Region table (JSON/API)
//!       ↓
//!   [path]      — Lenient path parsing, compilation, containment
//!       ↓
//!   [transform] — Fit the authored viewbox into a target size
//!       ↓
//!   [cache]     — One compiled copy per (path, transform), shared
//!       ↓
//!   [render]    — Fill precedence, draw ops, hit-testing
//!
//!   [heatmap]   — Intensities → interpolation curves → scales → fills
//!   [data]      — Muscles, selections, tables, selection history
//!   [style]     — Fills, strokes, selection emphasis
//! ```

pub mod cache;
pub mod data;
pub mod error;
pub mod geometry;
pub mod heatmap;
pub mod path;
pub mod render;
pub mod style;
pub mod transform;

pub use cache::PathCache;
pub use data::history::SelectionHistory;
pub use data::selection::MuscleSelection;
pub use data::{BodyGender, BodyPart, BodySide, BodySlug, BodyTable, Muscle, MuscleSide, ViewBox};
pub use error::MapError;
pub use geometry::{Point, Rect, Size, UnitPoint};
pub use heatmap::{
    Color, ColorInterpolation, GradientDirection, HeatmapColorScale, HeatmapConfiguration,
    MuscleFill, MuscleHighlight, MuscleHighlights, MuscleIntensity, Shading,
};
pub use path::{CompiledPath, PathCommand, PathOp};
pub use render::{BodyRenderer, DrawOp};
pub use style::BodyViewStyle;
pub use transform::ViewportTransform;
