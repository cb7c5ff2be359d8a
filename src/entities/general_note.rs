//! General note entity (type 212).

use std::fmt;

use crate::entities::EntityCommon;
use crate::error::{IgesError, Result};
use crate::io::iges::number::{parse_int, parse_real};
use crate::types::Point3;

/// One text string of a general note: layout attributes plus the text
/// itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextString {
    /// Declared character count (NC). Not validated against `text`.
    pub char_count: i32,
    /// Box width (WT).
    pub box_width: f64,
    /// Box height (HT).
    pub box_height: f64,
    /// Font code (FC).
    pub font_code: i32,
    /// Slant angle in radians (SL).
    pub slant_angle: f64,
    /// Rotation angle in radians (A).
    pub rotation_angle: f64,
    /// Mirror flag (M).
    pub mirror: i32,
    /// Rotate-internal-text flag (H).
    pub rotate_flag: i32,
    /// Text start point (XS, YS, ZS).
    pub origin: Point3,
    /// The text, with its Hollerith prefix removed.
    pub text: String,
}

/// An annotation made of one or more positioned text strings.
#[derive(Debug, Clone, Default)]
pub struct GeneralNote {
    /// Common directory attributes.
    pub common: EntityCommon,
    /// The note's text strings, NS entries.
    pub strings: Vec<TextString>,
}

impl GeneralNote {
    /// IGES entity type number.
    pub const TYPE_NUMBER: i32 = 212;

    /// Create an empty note from its directory attributes.
    pub fn new(common: EntityCommon) -> Self {
        Self {
            common,
            strings: Vec::new(),
        }
    }

    /// Decode the parameter record: NS at token 1, then NS groups of 12
    /// tokens (NC, WT, HT, FC, SL, A, M, H, XS, YS, ZS, TEXT).
    ///
    /// TEXT keeps the portion after the last literal `H` of the raw token;
    /// a token without `H` decodes as the empty string. The count prefix is
    /// not checked against NC.
    pub fn add_parameters(&mut self, parameters: &[String]) -> Result<()> {
        let actual = parameters.len();
        if actual < 2 {
            return Err(IgesError::ParameterCountMismatch {
                entity_type: Self::TYPE_NUMBER,
                expected: 2,
                actual,
            });
        }

        let ns = parse_int(&parameters[1])?;
        if ns < 0 {
            return Err(IgesError::Parse(format!(
                "general note {}: negative string count {}",
                self.common.sequence_number, ns
            )));
        }
        let count = ns as usize;

        let required = 2 + count * 12;
        if actual < required {
            return Err(IgesError::ParameterCountMismatch {
                entity_type: Self::TYPE_NUMBER,
                expected: required,
                actual,
            });
        }

        let mut strings = Vec::with_capacity(count);
        for i in 0..count {
            let start = 2 + 12 * i;
            strings.push(TextString {
                char_count: parse_int(&parameters[start])?,
                box_width: parse_real(&parameters[start + 1])?,
                box_height: parse_real(&parameters[start + 2])?,
                font_code: parse_int(&parameters[start + 3])?,
                slant_angle: parse_real(&parameters[start + 4])?,
                rotation_angle: parse_real(&parameters[start + 5])?,
                mirror: parse_int(&parameters[start + 6])?,
                rotate_flag: parse_int(&parameters[start + 7])?,
                origin: Point3::new(
                    parse_real(&parameters[start + 8])?,
                    parse_real(&parameters[start + 9])?,
                    parse_real(&parameters[start + 10])?,
                ),
                text: extract_text(&parameters[start + 11]),
            });
        }

        self.strings = strings;
        Ok(())
    }
}

/// Everything after the last `H` of the raw token.
fn extract_text(token: &str) -> String {
    match token.rfind('H') {
        Some(i) => token[i + 1..].to_string(),
        None => String::new(),
    }
}

impl fmt::Display for GeneralNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "General Note #{}:", self.common.sequence_number)?;
        for s in &self.strings {
            write!(f, " {:?} at {}", s.text, s.origin)?;
        }
        Ok(())
    }
}
