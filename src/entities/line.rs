//! Line entity (type 110).

use std::fmt;

use crate::entities::EntityCommon;
use crate::error::{IgesError, Result};
use crate::io::iges::number::parse_real;
use crate::types::Point3;

/// A straight segment between two model-space points.
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// Common directory attributes.
    pub common: EntityCommon,
    /// Start point (X1, Y1, Z1).
    pub start: Point3,
    /// End point (X2, Y2, Z2).
    pub end: Point3,
}

impl Line {
    /// IGES entity type number.
    pub const TYPE_NUMBER: i32 = 110;

    /// Create a line with default geometry from its directory attributes.
    pub fn new(common: EntityCommon) -> Self {
        Self {
            common,
            start: Point3::ZERO,
            end: Point3::ZERO,
        }
    }

    /// Decode the parameter record: X1,Y1,Z1,X2,Y2,Z2 at tokens 1-6.
    pub fn add_parameters(&mut self, parameters: &[String]) -> Result<()> {
        if parameters.len() < 7 {
            return Err(IgesError::ParameterCountMismatch {
                entity_type: Self::TYPE_NUMBER,
                expected: 7,
                actual: parameters.len(),
            });
        }
        let start = Point3::new(
            parse_real(&parameters[1])?,
            parse_real(&parameters[2])?,
            parse_real(&parameters[3])?,
        );
        let end = Point3::new(
            parse_real(&parameters[4])?,
            parse_real(&parameters[5])?,
            parse_real(&parameters[6])?,
        );
        self.start = start;
        self.end = end;
        Ok(())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line #{}: {} -> {}",
            self.common.sequence_number, self.start, self.end
        )
    }
}
