//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use gerotor::{
    float_types::Real,
    mesh::Mesh,
    pump::{GearPair, PumpSpec},
    trochoid::CurvePoint,
};

/// Simple helper to compare floating-point values with a tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Distance between two outline points.
pub fn distance(a: CurvePoint, b: CurvePoint) -> Real {
    (a - b).norm()
}

/// The 10 mm, 7 tooth reference pump.
pub fn reference_pair() -> GearPair {
    PumpSpec::default()
        .gear_pair()
        .expect("the default pump is valid")
}

/// Counts how often each undirected edge occurs in a mesh.
/// A closed surface uses every edge exactly twice.
pub fn edge_use_counts(mesh: &Mesh<()>) -> std::collections::HashMap<[[i64; 3]; 2], usize> {
    let key = |p: &nalgebra::Point3<Real>| {
        [
            (p.x * 1e6).round() as i64,
            (p.y * 1e6).round() as i64,
            (p.z * 1e6).round() as i64,
        ]
    };
    let mut counts = std::collections::HashMap::new();
    for tri in &mesh.triangles {
        for i in 0..3 {
            let a = key(&tri[i].pos);
            let b = key(&tri[(i + 1) % 3].pos);
            let edge = if a <= b { [a, b] } else { [b, a] };
            *counts.entry(edge).or_insert(0) += 1;
        }
    }
    counts
}
