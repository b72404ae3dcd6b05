#![cfg(feature = "stl-io")]

mod support;

use crate::support::reference_pair;

#[test]
fn mesh_to_stl_ascii() {
    let mesh = reference_pair().inner_solid::<()>(64, None).unwrap();
    let stl_str = mesh.to_stl_ascii("inner_rotor");
    // Basic checks
    assert!(stl_str.starts_with("solid inner_rotor"));
    assert!(stl_str.trim_end().ends_with("endsolid inner_rotor"));
    assert_eq!(stl_str.matches("facet normal").count(), mesh.triangle_count());
    assert_eq!(stl_str.matches("vertex").count(), 3 * mesh.triangle_count());
}

#[test]
fn mesh_to_stl_binary() {
    let mesh = reference_pair().outer_solid::<()>(64, None).unwrap();
    let bytes = mesh.to_stl_binary().unwrap();
    // 80 byte header, u32 count, 50 bytes per triangle
    assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());
    let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
    assert_eq!(count as usize, mesh.triangle_count());
}

#[test]
fn facet_normals_are_unit_and_match_stored_walls() {
    let mesh = reference_pair().inner_solid::<()>(64, None).unwrap();
    let stl_str = mesh.to_stl_ascii("inner_rotor");
    let normals: Vec<[f64; 3]> = stl_str
        .lines()
        .filter_map(|l| l.trim().strip_prefix("facet normal "))
        .map(|rest| {
            let v: Vec<f64> = rest.split_whitespace().map(|t| t.parse().unwrap()).collect();
            [v[0], v[1], v[2]]
        })
        .collect();
    assert_eq!(normals.len(), mesh.triangle_count());
    for (n, tri) in normals.iter().zip(&mesh.triangles) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
        let stored = tri[0].normal.normalize();
        let dot = n[0] * stored.x as f64 + n[1] * stored.y as f64 + n[2] * stored.z as f64;
        assert!(dot > 0.99, "facet normal {n:?} disagrees with {stored:?}");
    }
}
