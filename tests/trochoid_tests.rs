use gerotor::{
    GearError,
    float_types::{PI, Real, TAU},
    pump::{PumpSpec, derive},
    sampler::{sample, sample_vec},
    trochoid::{Branch, GearSpec, branch, epicycloid, evaluate, hypocycloid},
};

mod support;

use crate::support::{approx_eq, distance};

#[test]
fn curve_is_closed_for_many_gears() {
    for teeth in 2..=16 {
        for &radius in &[0.5, 1.0, 10.0, 123.4] {
            let gear = GearSpec::new(radius, teeth).unwrap();
            let start = evaluate(0.0, &gear);
            let end = evaluate(TAU, &gear);
            assert!(
                distance(start, end) < 1e-9 * radius.max(1.0),
                "teeth={teeth} radius={radius}: {start} vs {end}"
            );
        }
    }
}

#[test]
fn sample_length_is_point_count_plus_one() {
    let gear = GearSpec::new(3.0, 5).unwrap();
    for n in [2, 5, 64, 200, 1001] {
        assert_eq!(sample(&gear, n).unwrap().count(), n + 1);
    }
}

#[test]
fn golden_value_at_theta_zero() {
    let gear = GearSpec::new(10.0, 7).unwrap();
    let r_m: Real = 10.0 / 14.0;
    let expected_x = (10.0 + r_m) * 1.0 - r_m * 1.0;
    let p = evaluate(0.0, &gear);
    assert_eq!(branch(0.0, &gear), Branch::Epicycloid);
    assert!(approx_eq(p.x, expected_x, 1e-12));
    assert!(approx_eq(p.y, 0.0, 1e-12));
}

#[test]
fn branch_boundary_belongs_to_hypocycloid() {
    let gear = GearSpec::new(10.0, 7).unwrap();
    let theta = PI / 7.0;
    assert_eq!(branch(theta, &gear), Branch::Hypocycloid);
    let r_m = gear.roller_radius();
    assert_eq!(evaluate(theta, &gear), hypocycloid(theta, 10.0, r_m, Some(r_m)));
    let just_before = theta - 1e-6;
    assert_eq!(
        evaluate(just_before, &gear),
        epicycloid(just_before, 10.0, r_m, Some(r_m))
    );
}

#[test]
fn every_tooth_alternates_branches() {
    let gear = GearSpec::new(10.0, 7).unwrap();
    let quarter = gear.half_period() / 2.0;
    for k in 0..7 {
        let start = k as Real * gear.period();
        assert_eq!(branch(start + quarter, &gear), Branch::Epicycloid);
        assert_eq!(branch(start + 3.0 * quarter, &gear), Branch::Hypocycloid);
    }
}

#[test]
fn reference_pump_derivation() {
    let inner = derive(10.0, 7, 0.01);
    assert!(approx_eq(inner.tooth_height, 0.714286, 1e-6));
    assert!(approx_eq(inner.radius, 8.5514, 1e-4));
    assert_eq!(inner.teeth, 6);
}

#[test]
fn infeasible_pump_is_rejected() {
    assert!(derive(1.0, 7, 1.0).radius <= 0.0);
    let spec = PumpSpec {
        outer_radius: 1.0,
        outer_teeth: 7,
        clearance: 1.0,
        ..PumpSpec::default()
    };
    assert!(matches!(
        spec.validate(),
        Err(GearError::InfeasibleGeometry { .. })
    ));
}

#[test]
fn clearance_threshold_matches_half_radius() {
    // inner_radius <= 0 exactly when tooth_height + clearance >= outer_radius / 2
    let outer_radius = 4.0;
    let teeth = 8;
    let tooth_height = outer_radius / (2.0 * teeth as Real);
    for &clearance in &[0.0, 1.0, 1.7, 1.74, 1.76, 2.0, 5.0] {
        let spec = PumpSpec {
            outer_radius,
            outer_teeth: teeth,
            clearance,
            ..PumpSpec::default()
        };
        let rejected = tooth_height + clearance >= outer_radius / 2.0;
        assert_eq!(spec.validate().is_err(), rejected, "clearance {clearance}");
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let gear = GearSpec::new(7.5, 9).unwrap();
    for &theta in &[0.0, 0.123, 1.0, -2.5, 100.0] {
        let a = evaluate(theta, &gear);
        let b = evaluate(theta, &gear);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
    assert_eq!(sample_vec(&gear, 300).unwrap(), sample_vec(&gear, 300).unwrap());
    assert_eq!(derive(7.5, 9, 0.2), derive(7.5, 9, 0.2));
}
