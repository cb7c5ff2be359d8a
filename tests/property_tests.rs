//! Randomized checks over token decoding and curve record arithmetic.

use proptest::prelude::*;

use iges_tools_rs::entities::{EntityCommon, RationalBSplineCurve};
use iges_tools_rs::io::iges::number::{decode_hollerith, parse_real};
use iges_tools_rs::IgesError;

/// Build a complete curve record for the given upper index and degree,
/// with synthetic knot and coordinate values.
fn curve_tokens(k: i32, m: i32) -> Vec<String> {
    let a = 1 + k + m;
    let mut tokens = vec![
        "126".to_string(),
        k.to_string(),
        m.to_string(),
        "0".to_string(),
        "0".to_string(),
        "1".to_string(),
        "0".to_string(),
    ];
    for i in 0..=a {
        tokens.push(format!("{}.", i));
    }
    for _ in 0..k {
        tokens.push("1.".to_string());
    }
    tokens.push("0.".to_string());
    for i in 0..=k {
        tokens.push(format!("{}.", i));
        tokens.push(format!("{}.", i * 2));
        tokens.push("0.".to_string());
    }
    tokens.push("0.".to_string());
    tokens.push(format!("{}.", a));
    tokens
}

proptest! {
    #[test]
    fn prop_fortran_exponent_parses_like_standard(value in -1.0e300f64..1.0e300) {
        let scientific = format!("{:E}", value);
        let fortran = scientific.replace('E', "D");
        prop_assert_eq!(parse_real(&fortran).unwrap(), value);
        prop_assert_eq!(parse_real(&scientific).unwrap(), value);
    }

    #[test]
    fn prop_hollerith_prefix_strips_cleanly(text in "[A-Za-z0-9]{1,20}") {
        let token = format!("{}H{}", text.len(), text);
        prop_assert_eq!(decode_hollerith(&token), text);
    }

    #[test]
    fn prop_curve_record_lengths_follow_the_header(
        (k, m) in (1i32..8).prop_flat_map(|k| (Just(k), 1i32..=k)),
    ) {
        let tokens = curve_tokens(k, m);
        let a = 1 + k + m;
        prop_assert_eq!(tokens.len() as i32, 14 + a + 4 * k);

        let mut curve = RationalBSplineCurve::new(EntityCommon {
            entity_type_number: 126,
            sequence_number: 1,
            ..Default::default()
        });
        curve.add_parameters(&tokens).unwrap();
        prop_assert_eq!(curve.upper_index, k);
        prop_assert_eq!(curve.degree, m);
        prop_assert_eq!(curve.knots.len() as i32, a + 1);
        prop_assert_eq!(curve.weights.len() as i32, k);
        prop_assert_eq!(curve.control_points.len() as i32, k + 1);
        prop_assert_eq!(curve.normal, None);

        // One token short of the mandatory count must fail, whatever the size.
        let mut short = RationalBSplineCurve::new(EntityCommon::default());
        let error = short
            .add_parameters(&tokens[..tokens.len() - 1])
            .unwrap_err();
        prop_assert!(
            matches!(error, IgesError::ParameterCountMismatch { .. }),
            "unexpected error: {:?}",
            error
        );
    }
}
