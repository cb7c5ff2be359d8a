//! Entity model.
//!
//! Every IGES entity occupies two fixed-format directory lines plus one
//! logical parameter record. The directory attributes are shared by all
//! types ([`EntityCommon`]); the parameter record is decoded per type.
//! Types without a specialized decoder are kept as [`GenericEntity`].

pub mod general_note;
pub mod generic;
pub mod line;
pub mod rational_bspline_curve;

pub use general_note::{GeneralNote, TextString};
pub use generic::GenericEntity;
pub use line::Line;
pub use rational_bspline_curve::RationalBSplineCurve;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::Result;

/// Display names for the entity types catalogued in IGES 5.3, Table 3 and
/// sections 3.3-3.6.
static ENTITY_TYPE_NAMES: Lazy<HashMap<i32, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert(100, "Circular Arc");
    m.insert(102, "Composite Curve");
    m.insert(104, "Conic Arc");
    m.insert(108, "Plane");
    m.insert(110, "Line");
    m.insert(112, "Parametric Spline Curve");
    m.insert(114, "Parametric Spline Surface");
    m.insert(116, "Point");
    m.insert(118, "Ruled Surface");
    m.insert(120, "Surface of Revolution");
    m.insert(122, "Tabulated Cylinder");
    m.insert(124, "Transformation Matrix");
    m.insert(126, "Rational B-Spline Curve");
    m.insert(128, "Rational B-Spline Surface");
    m.insert(132, "Connect Point");
    m.insert(150, "Block");
    m.insert(186, "Manifold Solid B-Rep Object");
    m.insert(202, "Angular Dimension");
    m.insert(212, "General Note");
    m
});

/// Display name for an entity type number, `"Entity"` when uncatalogued.
pub fn entity_type_name(type_number: i32) -> &'static str {
    ENTITY_TYPE_NAMES.get(&type_number).copied().unwrap_or("Entity")
}

/// Common entity attributes from the two directory lines.
///
/// Pointer-valued fields (structure, line font pattern, level, view,
/// transform) hold either a value or a negated directory sequence number;
/// they are stored as read. Blank fields decode as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCommon {
    // First directory line
    /// IGES entity type number (field 1).
    pub entity_type_number: i32,
    /// Sequence number of the first parameter line (field 2).
    pub parameter_pointer: i32,
    /// Structure (field 3).
    pub structure: i32,
    /// Line font pattern (field 4).
    pub line_font_pattern: i32,
    /// Level (field 5).
    pub level: i32,
    /// View (field 6).
    pub view: i32,
    /// Transformation matrix pointer (field 7).
    pub transform: i32,
    /// Label display associativity (field 8).
    pub label_display_association: i32,
    /// Status number (field 9).
    pub status_number: i32,
    /// Sequence number of the first directory line (field 10), the
    /// entity's unique key within the file.
    pub sequence_number: i32,

    // Second directory line
    /// Line weight number (field 12).
    pub line_weight_number: i32,
    /// Color number (field 13).
    pub color_number: i32,
    /// Number of parameter lines for this entity (field 14).
    pub parameter_line_count: i32,
    /// Form number (field 15).
    pub form_number: i32,
    /// Entity label (field 18), trimmed.
    pub entity_label: String,
    /// Entity subscript number (field 19).
    pub entity_subscript_number: i32,
}

impl EntityCommon {
    /// Create an empty set of directory attributes.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A decoded entity, tagged by type.
#[derive(Debug, Clone)]
pub enum EntityType {
    /// Line entity (type 110)
    Line(Line),
    /// Rational B-spline curve entity (type 126)
    RationalBSplineCurve(RationalBSplineCurve),
    /// General note entity (type 212)
    GeneralNote(GeneralNote),
    /// Any other type, kept with its raw parameters
    Generic(GenericEntity),
}

impl EntityType {
    /// Instantiate the entity for a completed directory entry.
    ///
    /// Unsupported type numbers are not an error; they fall through to
    /// [`GenericEntity`].
    pub fn from_directory_entry(common: EntityCommon) -> Self {
        match common.entity_type_number {
            110 => EntityType::Line(Line::new(common)),
            126 => EntityType::RationalBSplineCurve(RationalBSplineCurve::new(common)),
            212 => EntityType::GeneralNote(GeneralNote::new(common)),
            _ => EntityType::Generic(GenericEntity::new(common)),
        }
    }

    /// Shared directory attributes.
    pub fn common(&self) -> &EntityCommon {
        match self {
            EntityType::Line(e) => &e.common,
            EntityType::RationalBSplineCurve(e) => &e.common,
            EntityType::GeneralNote(e) => &e.common,
            EntityType::Generic(e) => &e.common,
        }
    }

    /// Mutable shared directory attributes.
    pub fn common_mut(&mut self) -> &mut EntityCommon {
        match self {
            EntityType::Line(e) => &mut e.common,
            EntityType::RationalBSplineCurve(e) => &mut e.common,
            EntityType::GeneralNote(e) => &mut e.common,
            EntityType::Generic(e) => &mut e.common,
        }
    }

    /// IGES entity type number.
    pub fn type_number(&self) -> i32 {
        self.common().entity_type_number
    }

    /// Directory sequence number, the entity's key within the file.
    pub fn sequence_number(&self) -> i32 {
        self.common().sequence_number
    }

    /// Display name of the entity type.
    pub fn type_name(&self) -> &'static str {
        entity_type_name(self.type_number())
    }

    /// Decode a parameter token list into this entity.
    ///
    /// Token 0 is the entity type number and is not consumed.
    pub fn add_parameters(&mut self, parameters: &[String]) -> Result<()> {
        match self {
            EntityType::Line(e) => e.add_parameters(parameters),
            EntityType::RationalBSplineCurve(e) => e.add_parameters(parameters),
            EntityType::GeneralNote(e) => e.add_parameters(parameters),
            EntityType::Generic(e) => {
                e.add_parameters(parameters);
                Ok(())
            }
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Line(e) => e.fmt(f),
            EntityType::RationalBSplineCurve(e) => e.fmt(f),
            EntityType::GeneralNote(e) => e.fmt(f),
            EntityType::Generic(e) => e.fmt(f),
        }
    }
}
