//! # Body Data Model
//!
//! The closed domain of regions (muscles plus cosmetic parts), laterality,
//! and the region-table structures the renderer walks. Tables are static
//! reference data: one table per (gender, side) pair, loaded once — usually
//! from JSON via [`BodyTable::from_json`] — and never mutated.

pub mod history;
pub mod selection;

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::geometry::{Point, Rect, Size};

/// Every muscle group that can be highlighted, selected, or hit-tested.
/// The string form is the kebab-case id used in table data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Muscle {
    Abs,
    Adductors,
    Ankles,
    Biceps,
    Calves,
    Chest,
    Deltoids,
    Feet,
    Forearm,
    Gluteal,
    Hamstring,
    Hands,
    Head,
    Knees,
    LowerBack,
    Neck,
    Obliques,
    Quadriceps,
    Tibialis,
    Trapezius,
    Triceps,
    UpperBack,
    RotatorCuff,
    HipFlexors,
    Serratus,
    Rhomboids,
    // Sub-groups
    UpperChest,
    LowerChest,
    InnerQuad,
    OuterQuad,
    UpperAbs,
    LowerAbs,
    FrontDeltoid,
    RearDeltoid,
    UpperTrapezius,
    LowerTrapezius,
}

impl Muscle {
    pub const COUNT: usize = 36;

    pub const ALL: [Muscle; Muscle::COUNT] = [
        Muscle::Abs,
        Muscle::Adductors,
        Muscle::Ankles,
        Muscle::Biceps,
        Muscle::Calves,
        Muscle::Chest,
        Muscle::Deltoids,
        Muscle::Feet,
        Muscle::Forearm,
        Muscle::Gluteal,
        Muscle::Hamstring,
        Muscle::Hands,
        Muscle::Head,
        Muscle::Knees,
        Muscle::LowerBack,
        Muscle::Neck,
        Muscle::Obliques,
        Muscle::Quadriceps,
        Muscle::Tibialis,
        Muscle::Trapezius,
        Muscle::Triceps,
        Muscle::UpperBack,
        Muscle::RotatorCuff,
        Muscle::HipFlexors,
        Muscle::Serratus,
        Muscle::Rhomboids,
        Muscle::UpperChest,
        Muscle::LowerChest,
        Muscle::InnerQuad,
        Muscle::OuterQuad,
        Muscle::UpperAbs,
        Muscle::LowerAbs,
        Muscle::FrontDeltoid,
        Muscle::RearDeltoid,
        Muscle::UpperTrapezius,
        Muscle::LowerTrapezius,
    ];

    /// Compact discriminant, used to index enum-keyed collections.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The stable kebab-case identifier.
    pub fn id(self) -> &'static str {
        match self {
            Muscle::Abs => "abs",
            Muscle::Adductors => "adductors",
            Muscle::Ankles => "ankles",
            Muscle::Biceps => "biceps",
            Muscle::Calves => "calves",
            Muscle::Chest => "chest",
            Muscle::Deltoids => "deltoids",
            Muscle::Feet => "feet",
            Muscle::Forearm => "forearm",
            Muscle::Gluteal => "gluteal",
            Muscle::Hamstring => "hamstring",
            Muscle::Hands => "hands",
            Muscle::Head => "head",
            Muscle::Knees => "knees",
            Muscle::LowerBack => "lower-back",
            Muscle::Neck => "neck",
            Muscle::Obliques => "obliques",
            Muscle::Quadriceps => "quadriceps",
            Muscle::Tibialis => "tibialis",
            Muscle::Trapezius => "trapezius",
            Muscle::Triceps => "triceps",
            Muscle::UpperBack => "upper-back",
            Muscle::RotatorCuff => "rotator-cuff",
            Muscle::HipFlexors => "hip-flexors",
            Muscle::Serratus => "serratus",
            Muscle::Rhomboids => "rhomboids",
            Muscle::UpperChest => "upper-chest",
            Muscle::LowerChest => "lower-chest",
            Muscle::InnerQuad => "inner-quad",
            Muscle::OuterQuad => "outer-quad",
            Muscle::UpperAbs => "upper-abs",
            Muscle::LowerAbs => "lower-abs",
            Muscle::FrontDeltoid => "front-deltoid",
            Muscle::RearDeltoid => "rear-deltoid",
            Muscle::UpperTrapezius => "upper-trapezius",
            Muscle::LowerTrapezius => "lower-trapezius",
        }
    }

    /// Display name in English.
    pub fn display_name(self) -> &'static str {
        match self {
            Muscle::Abs => "Abs",
            Muscle::Adductors => "Adductors",
            Muscle::Ankles => "Ankles",
            Muscle::Biceps => "Biceps",
            Muscle::Calves => "Calves",
            Muscle::Chest => "Chest",
            Muscle::Deltoids => "Deltoids",
            Muscle::Feet => "Feet",
            Muscle::Forearm => "Forearm",
            Muscle::Gluteal => "Gluteal",
            Muscle::Hamstring => "Hamstring",
            Muscle::Hands => "Hands",
            Muscle::Head => "Head",
            Muscle::Knees => "Knees",
            Muscle::LowerBack => "Lower Back",
            Muscle::Neck => "Neck",
            Muscle::Obliques => "Obliques",
            Muscle::Quadriceps => "Quadriceps",
            Muscle::Tibialis => "Tibialis",
            Muscle::Trapezius => "Trapezius",
            Muscle::Triceps => "Triceps",
            Muscle::UpperBack => "Upper Back",
            Muscle::RotatorCuff => "Rotator Cuff",
            Muscle::HipFlexors => "Hip Flexors",
            Muscle::Serratus => "Serratus",
            Muscle::Rhomboids => "Rhomboids",
            Muscle::UpperChest => "Upper Chest",
            Muscle::LowerChest => "Lower Chest",
            Muscle::InnerQuad => "Inner Quad",
            Muscle::OuterQuad => "Outer Quad",
            Muscle::UpperAbs => "Upper Abs",
            Muscle::LowerAbs => "Lower Abs",
            Muscle::FrontDeltoid => "Front Deltoid",
            Muscle::RearDeltoid => "Rear Deltoid",
            Muscle::UpperTrapezius => "Upper Trapezius",
            Muscle::LowerTrapezius => "Lower Trapezius",
        }
    }

    /// Whether this is a cosmetic part (drawn with a fixed style color)
    /// rather than a muscle.
    pub fn is_cosmetic_part(self) -> bool {
        self == Muscle::Head
    }

    /// Sub-groups belonging to this group. Empty if it has none.
    pub fn sub_groups(self) -> &'static [Muscle] {
        match self {
            Muscle::Chest => &[Muscle::UpperChest, Muscle::LowerChest],
            Muscle::Quadriceps => &[Muscle::InnerQuad, Muscle::OuterQuad],
            Muscle::Abs => &[Muscle::UpperAbs, Muscle::LowerAbs],
            Muscle::Deltoids => &[Muscle::FrontDeltoid, Muscle::RearDeltoid],
            Muscle::Trapezius => &[Muscle::UpperTrapezius, Muscle::LowerTrapezius],
            _ => &[],
        }
    }

    /// The parent group, if this muscle is a sub-group.
    pub fn parent_group(self) -> Option<Muscle> {
        match self {
            Muscle::UpperChest | Muscle::LowerChest => Some(Muscle::Chest),
            Muscle::InnerQuad | Muscle::OuterQuad => Some(Muscle::Quadriceps),
            Muscle::UpperAbs | Muscle::LowerAbs => Some(Muscle::Abs),
            Muscle::FrontDeltoid | Muscle::RearDeltoid => Some(Muscle::Deltoids),
            Muscle::UpperTrapezius | Muscle::LowerTrapezius => Some(Muscle::Trapezius),
            _ => None,
        }
    }

    pub fn is_sub_group(self) -> bool {
        self.parent_group().is_some()
    }
}

/// Region slug as it appears in table data: every muscle plus the
/// rendering-only hair part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodySlug {
    Hair,
    #[serde(untagged)]
    Muscle(Muscle),
}

impl BodySlug {
    /// The muscle this slug maps to, or `None` for rendering-only parts.
    pub fn muscle(self) -> Option<Muscle> {
        match self {
            BodySlug::Hair => None,
            BodySlug::Muscle(m) => Some(m),
        }
    }
}

/// Which side of the body a subpath (or a hit) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleSide {
    Left,
    Right,
    Both,
}

/// Which face of the body a table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySide {
    Front,
    Back,
}

/// The body gender model a table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyGender {
    Male,
    Female,
}

/// The source coordinate rectangle region paths are authored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub origin: Point,
    pub size: Size,
}

impl ViewBox {
    pub fn rect(&self) -> Rect {
        Rect {
            origin: self.origin,
            size: self.size,
        }
    }
}

/// Path data for one region, partitioned by laterality. A region's
/// combined geometry is the union of all three groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPart {
    pub slug: BodySlug,
    #[serde(default)]
    pub common: Vec<String>,
    #[serde(default)]
    pub left: Vec<String>,
    #[serde(default)]
    pub right: Vec<String>,
}

impl BodyPart {
    /// All raw path strings combined, common first, then left, then right.
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.common
            .iter()
            .chain(&self.left)
            .chain(&self.right)
            .map(String::as_str)
    }
}

/// A complete region table for one (gender, side) combination. Paint and
/// hit-test order is the order of `parts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTable {
    pub view_box: ViewBox,
    pub parts: Vec<BodyPart>,
}

impl BodyTable {
    /// Loads a table from JSON, rejecting duplicate region slugs.
    pub fn from_json(json: &str) -> Result<BodyTable, MapError> {
        let table: BodyTable = serde_json::from_str(json)?;
        for (i, part) in table.parts.iter().enumerate() {
            if table.parts[..i].iter().any(|p| p.slug == part.slug) {
                return Err(MapError::Table(format!(
                    "duplicate region slug {:?}",
                    part.slug
                )));
            }
        }
        Ok(table)
    }

    /// The table entry for a slug, if present.
    pub fn part(&self, slug: BodySlug) -> Option<&BodyPart> {
        self.parts.iter().find(|p| p.slug == slug)
    }
}
