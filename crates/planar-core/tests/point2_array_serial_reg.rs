//! Point array text regression test
//!
//! Delimited-pair and bracketed-coordinate parsing, and the flat and
//! bracketed text forms.

use planar_core::{Error, Point2, Point2Array, RealArray};
use planar_test::{RegParams, TestResult, points};

#[test]
fn point2_array_serial_reg() {
    let mut rp = RegParams::new("point2_array_serial");

    // --- Test 1: delimited pairs ---
    let pta = Point2Array::create_from_pairs("1,2,3,4", ",").unwrap();
    rp.check(
        pta == Some(Point2Array::from_points(&[Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)])),
        "pairs 1,2,3,4",
    );

    let pta = Point2Array::create_from_pairs("1.5 -2,+3 .25", ",| ").unwrap();
    rp.check(pta.is_some(), "regex delimiter");
    if let Some(pta) = pta {
        rp.compare_points(&points("[(1.5,-2)(3,0.25)]").unwrap(), &pta, 0.0);
    }

    let pta = Point2Array::create_from_pairs("10\t20\n30   40", r"\s+").unwrap();
    rp.check(pta.map(|p| p.len()) == Some(2), "whitespace delimiter");

    // --- Test 2: odd and malformed pairs yield nothing ---
    rp.check(
        Point2Array::create_from_pairs("1,2,3", ",").unwrap().is_none(),
        "odd token count",
    );
    rp.check(
        Point2Array::create_from_pairs("1,2,three,4", ",").unwrap().is_none(),
        "bad token",
    );
    for text in ["nan,inf,1,2", "1,0,-NaN,1,-5,2", "-infinity,1", "+Infinity,1", "1e999,1"] {
        rp.check(
            Point2Array::create_from_pairs(text, ",").unwrap().is_none(),
            "non-finite token",
        );
    }
    rp.check(
        matches!(
            Point2Array::create_from_pairs("1,2", "[,"),
            Err(Error::InvalidDelimiter(_))
        ),
        "invalid delimiter is an error",
    );

    // --- Test 3: flat numeric pairs ---
    let flat = RealArray::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let pta = Point2Array::create_from_real_pairs(&flat).unwrap();
    rp.compare_points(&points("[(1,2)(3,4)(5,6)]").unwrap(), &pta, 0.0);
    rp.check(
        Point2Array::create_from_real_pairs(&RealArray::from_slice(&[1.0]))
            == Err(Error::OddLength(1)),
        "odd flat sequence",
    );

    // --- Test 4: bracketed coordinates ---
    let pta = Point2Array::create_from_coords("[(1.0,2.0)(3.0,-4.5)]");
    rp.check(pta.is_some(), "bracketed parse");
    if let Some(pta) = pta {
        rp.compare_values(2.0, pta.len() as f64, 0.0);
        rp.check(pta.get(1).unwrap() == Point2::new(3.0, -4.5), "second point");
    }
    rp.check(
        Point2Array::create_from_coords("[(1,2)(bad,4)]").is_none(),
        "malformed group discards everything",
    );
    rp.check(
        Point2Array::create_from_coords("(1,2)(3,4)").is_none(),
        "outer brackets required",
    );

    // --- Test 5: emission ---
    let pta = points("[(1,2.5)(-3,0)]").unwrap();
    rp.compare_strings("1 2.5 -3 0", &pta.to_flat_string());
    rp.compare_strings("[(1,2.5)(-3,0)]", &pta.to_string());

    // --- Test 6: bracketed round trip ---
    let pta = Point2Array::from_vecs(
        vec![0.1, -123.456, 1.0 / 3.0, 5e-9, 0.0],
        vec![2.0e15, -0.0, 7.0, -1.0 / 7.0, 42.0],
    )
    .unwrap();
    let back = Point2Array::create_from_coords(&pta.to_string());
    rp.check(back.is_some_and(|b| b.is_equal_to(Some(&pta), 0.0)), "round trip");

    assert!(rp.cleanup(), "point2_array_serial regression test failed");
}

#[test]
fn point2_array_serial_pairs_match_coords() -> TestResult<()> {
    let mut rp = RegParams::new("point2_array_serial_pairs");

    let from_coords: Point2Array = "[(4,3)(2,1)]".parse()?;
    let from_pairs = Point2Array::create_from_pairs("4 3 2 1", " ")?;
    rp.check(
        from_pairs.is_some_and(|p| p.is_equal_to(Some(&from_coords), 0.0)),
        "both text forms agree",
    );
    rp.compare_strings(&from_coords.to_flat_string(), "4 3 2 1");

    assert!(rp.cleanup(), "point2_array_serial_pairs regression test failed");
    Ok(())
}
