//! Rational B-spline curve entity (type 126).

use std::fmt;

use crate::entities::EntityCommon;
use crate::error::{IgesError, Result};
use crate::io::iges::number::{parse_int, parse_real};
use crate::types::Point3;

/// A NURBS curve: knot sequence, weights, control points and parameter
/// range, plus a unit normal when the curve is planar.
#[derive(Debug, Clone, Default)]
pub struct RationalBSplineCurve {
    /// Common directory attributes.
    pub common: EntityCommon,
    /// Upper index of the control-point sum (K).
    pub upper_index: i32,
    /// Basis degree (M).
    pub degree: i32,
    /// PROP1-PROP4, stored as the raw 0/1 values.
    pub property_flags: [i32; 4],
    /// Knot sequence, A+1 values with A = N + 2M, N = 1 + K - M.
    pub knots: Vec<f64>,
    /// Weights, K values.
    pub weights: Vec<f64>,
    /// Control points, K+1 values.
    pub control_points: Vec<Point3>,
    /// Start of the parameter range, V(0).
    pub v0: f64,
    /// End of the parameter range, V(1).
    pub v1: f64,
    /// Unit normal, present only for planar curves.
    pub normal: Option<Point3>,
}

impl RationalBSplineCurve {
    /// IGES entity type number.
    pub const TYPE_NUMBER: i32 = 126;

    /// Create an empty curve from its directory attributes.
    pub fn new(common: EntityCommon) -> Self {
        Self {
            common,
            ..Default::default()
        }
    }

    /// True when the curve carries a planar unit normal.
    pub fn is_planar(&self) -> bool {
        self.normal.is_some()
    }

    /// Decode the parameter record.
    ///
    /// The layout is positional, by absolute token index (type number at 0,
    /// A = N + 2M, N = 1 + K - M):
    ///
    /// * `1..=6`: K, M, PROP1..PROP4
    /// * `7..=7+A`: knot sequence, A+1 values
    /// * `8+A..`: weight block, K values read
    /// * `9+A+K..`: K+1 control point triples, stride 3
    /// * `12+A+4K`, `13+A+4K`: V(0), V(1)
    /// * `14+A+4K..=16+A+4K`: unit normal, present exactly when more than
    ///   15+A+4K tokens exist; no property flag governs this.
    pub fn add_parameters(&mut self, parameters: &[String]) -> Result<()> {
        let actual = parameters.len();
        if actual < 7 {
            return Err(IgesError::ParameterCountMismatch {
                entity_type: Self::TYPE_NUMBER,
                expected: 7,
                actual,
            });
        }

        let k = parse_int(&parameters[1])?;
        let m = parse_int(&parameters[2])?;
        if k < 0 || m < 1 {
            return Err(IgesError::Parse(format!(
                "rational B-spline curve {}: upper index {} / degree {} out of range",
                self.common.sequence_number, k, m
            )));
        }
        // Derived counts exceed i32 range for large K and M.
        let spans = 1 + i64::from(k) - i64::from(m);
        let a_wide = spans + 2 * i64::from(m);
        let required = 14 + a_wide + 4 * i64::from(k);
        if (actual as i64) < required {
            return Err(IgesError::ParameterCountMismatch {
                entity_type: Self::TYPE_NUMBER,
                expected: required as usize,
                actual,
            });
        }
        let a = a_wide as usize;
        let upper_index = k as usize;

        let mut property_flags = [0i32; 4];
        for (slot, token) in property_flags.iter_mut().zip(&parameters[3..7]) {
            *slot = parse_int(token)?;
        }

        let mut knots = Vec::with_capacity(a + 1);
        for token in &parameters[7..=7 + a] {
            knots.push(parse_real(token)?);
        }

        let mut weights = Vec::with_capacity(upper_index);
        for token in &parameters[8 + a..8 + a + upper_index] {
            weights.push(parse_real(token)?);
        }

        let mut control_points = Vec::with_capacity(upper_index + 1);
        for i in 0..=upper_index {
            let base = 9 + a + upper_index + 3 * i;
            control_points.push(Point3::new(
                parse_real(&parameters[base])?,
                parse_real(&parameters[base + 1])?,
                parse_real(&parameters[base + 2])?,
            ));
        }

        let v0 = parse_real(&parameters[12 + a + 4 * upper_index])?;
        let v1 = parse_real(&parameters[13 + a + 4 * upper_index])?;

        let normal = if actual > 15 + a + 4 * upper_index {
            let needed = 17 + a + 4 * upper_index;
            if actual < needed {
                return Err(IgesError::ParameterCountMismatch {
                    entity_type: Self::TYPE_NUMBER,
                    expected: needed,
                    actual,
                });
            }
            let base = 14 + a + 4 * upper_index;
            Some(Point3::new(
                parse_real(&parameters[base])?,
                parse_real(&parameters[base + 1])?,
                parse_real(&parameters[base + 2])?,
            ))
        } else {
            None
        };

        self.upper_index = k;
        self.degree = m;
        self.property_flags = property_flags;
        self.knots = knots;
        self.weights = weights;
        self.control_points = control_points;
        self.v0 = v0;
        self.v1 = v1;
        self.normal = normal;
        Ok(())
    }
}

impl fmt::Display for RationalBSplineCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rational B-Spline Curve #{}: degree {}, {} control points, parameter range [{}, {}]{}",
            self.common.sequence_number,
            self.degree,
            self.control_points.len(),
            self.v0,
            self.v1,
            if self.is_planar() { ", planar" } else { "" }
        )
    }
}
