//! Property tests for the coordinate parser.

use proptest::prelude::*;
use starnav_coords::{CoordinateResult, parse};

const LABELS: [&str; 16] = [
    "N", "NE", "E", "SE", "S", "SW", "W", "NW", "n", "ne", "e", "se", "s", "sw", "w", "nw",
];

fn key_value_tokens() -> impl Strategy<Value = (i32, i32, i32, Vec<String>)> {
    (any::<i32>(), any::<i32>(), any::<i32>()).prop_flat_map(|(x, y, z)| {
        let tokens = vec![format!("x:{x}"), format!("y:{y}"), format!("z:{z}")];
        (Just(x), Just(y), Just(z), Just(tokens).prop_shuffle())
    })
}

fn separator() -> impl Strategy<Value = String> {
    "[ \t]{1,3}"
}

proptest! {
    #[test]
    fn key_value_order_does_not_matter(
        (x, y, z, tokens) in key_value_tokens(),
        sep in separator(),
    ) {
        let input = tokens.join(&sep);
        let result = parse(&input);
        prop_assert_eq!(result, CoordinateResult::at(f64::from(x), f64::from(y), f64::from(z)));
    }

    #[test]
    fn key_value_last_duplicate_wins(
        first in any::<i32>(),
        last in any::<i32>(),
        y in any::<i32>(),
        z in any::<i32>(),
    ) {
        let input = format!("x:{first} y:{y} z:{z} x:{last}");
        let result = parse(&input);
        prop_assert_eq!(result.x, f64::from(last));
    }

    #[test]
    fn canonical_form_reparses_to_same_result(
        x in -1.0e12..1.0e12f64,
        y in -1.0e12..1.0e12f64,
        z in -1.0e12..1.0e12f64,
        distance in 0.0..1.0e9f64,
        direction in proptest::option::of("[A-Za-z][A-Za-z0-9.]{0,8}"),
    ) {
        let original = CoordinateResult { x, y, z, distance, direction };
        let reparsed = parse(&original.to_string());
        prop_assert_eq!(reparsed, original);
    }

    #[test]
    fn dotted_form_recombines_label_and_angle(
        x in any::<i32>(),
        y in any::<i32>(),
        z in any::<i32>(),
        distance in 0..100_000i32,
        label in proptest::sample::select(LABELS.to_vec()),
        angle in 0..360u32,
    ) {
        let input = format!("{x}.{y}.{z}.{distance}.{label}.{angle}");
        let result = parse(&input);
        let expected = CoordinateResult::at(f64::from(x), f64::from(y), f64::from(z))
            .with_distance(f64::from(distance))
            .with_direction(format!("{label}.{angle}"));
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn dotted_output_reparses(
        x in any::<i32>(),
        y in any::<i32>(),
        z in any::<i32>(),
        distance in 0..100_000i32,
        label in proptest::sample::select(LABELS.to_vec()),
        angle in 0..360u32,
    ) {
        let original = CoordinateResult::at(f64::from(x), f64::from(y), f64::from(z))
            .with_distance(f64::from(distance))
            .with_direction(format!("{label}.{angle}"));
        let dotted = original.to_dotted().unwrap();
        prop_assert_eq!(parse(&dotted), original);
    }

    #[test]
    fn never_panics_and_stays_well_formed(input in "\\PC{0,64}") {
        let result = parse(&input);
        prop_assert!(result.x.is_finite());
        prop_assert!(result.y.is_finite());
        prop_assert!(result.z.is_finite());
        prop_assert!(result.distance.is_finite());
        if let Some(direction) = &result.direction {
            prop_assert!(!direction.is_empty());
        }
    }

    #[test]
    fn never_panics_on_separator_soup(input in "[-0-9xyzdn:., \tA-Za-z]{0,48}") {
        let result = parse(&input);
        prop_assert!(!result.x.is_nan() && !result.y.is_nan() && !result.z.is_nan());
    }
}

#[test]
fn spec_examples() {
    let cases: [(&str, CoordinateResult); 10] = [
        ("x:100 y:200 z:300", CoordinateResult::at(100.0, 200.0, 300.0)),
        (
            "x:0 y:1500 z:3500 d:3808 n:S.180",
            CoordinateResult::at(0.0, 1500.0, 3500.0)
                .with_distance(3808.0)
                .with_direction("S.180"),
        ),
        (
            "x:-115 y:-1546 z:3248 d:3 n:sw.215",
            CoordinateResult::at(-115.0, -1546.0, 3248.0)
                .with_distance(3.0)
                .with_direction("sw.215"),
        ),
        (
            "-734.700.1370.10.ne.80",
            CoordinateResult::at(-734.0, 700.0, 1370.0)
                .with_distance(10.0)
                .with_direction("ne.80"),
        ),
        (
            "-1160.729.1189.961.SE.121",
            CoordinateResult::at(-1160.0, 729.0, 1189.0)
                .with_distance(961.0)
                .with_direction("SE.121"),
        ),
        (
            "0.1500.3500.3808.S.120",
            CoordinateResult::at(0.0, 1500.0, 3500.0)
                .with_distance(3808.0)
                .with_direction("S.120"),
        ),
        (
            "100.200.300.50",
            CoordinateResult::at(100.0, 200.0, 300.0).with_distance(50.0),
        ),
        ("100.200.300", CoordinateResult::at(100.0, 200.0, 300.0)),
        ("", CoordinateResult::default()),
        ("100.200", CoordinateResult::default()),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input), expected, "input {input:?}");
    }
    assert_eq!(parse("invalid input"), CoordinateResult::default());
}
