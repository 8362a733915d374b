//! Structural properties every generated mesh must satisfy.

use approx::assert_relative_eq;
use glam::DVec3;
use solid_mesh::{
    combine, generate_cone, generate_sphere, CombinedSolidMeshBuilder, ConePlacement, ConeTransform,
    MeshError, MeshParameters, TriangleMesh,
};

fn sample_parameters() -> Vec<MeshParameters> {
    let base = MeshParameters::default();
    vec![
        base,
        MeshParameters {
            sphere_latitude_segments: 3,
            sphere_longitude_segments: 3,
            cone_segments: 3,
            ..base
        },
        MeshParameters {
            sphere_radius: 2.5,
            cone_radius: 1.0,
            cone_height: 3.0,
            cone_segments: 31,
            cone_base_cap: true,
            ..base
        },
        MeshParameters {
            cone_radius: 0.0,
            cone_height: 0.0,
            ..base
        },
        MeshParameters {
            cone_radius: 1.4,
            cone_height: 0.2,
            sphere_latitude_segments: 7,
            ..base
        },
    ]
}

fn sample_placements() -> Vec<ConePlacement> {
    vec![
        ConePlacement::default(),
        ConePlacement::new(DVec3::new(1.0, 1.0, 0.0), 0.1),
        ConePlacement::new(DVec3::NEG_Y, 0.0),
    ]
}

fn assert_winding_matches_normals(mesh: &TriangleMesh) {
    for [a, b, c] in mesh.triangles() {
        let (p0, p1, p2) = (mesh.vertex(a), mesh.vertex(b), mesh.vertex(c));
        let face = (p1 - p0).cross(p2 - p0);
        if face.length() < 1e-12 {
            continue;
        }
        let stored = mesh.normal(a) + mesh.normal(b) + mesh.normal(c);
        assert!(
            face.dot(stored) > 0.0,
            "triangle {a},{b},{c} winds against its normals"
        );
    }
}

#[test]
fn attributes_align_and_indices_in_range() {
    for params in sample_parameters() {
        for placement in sample_placements() {
            let mesh = CombinedSolidMeshBuilder::new(params)
                .with_placement(placement)
                .build()
                .unwrap();
            assert_eq!(mesh.normals().len(), mesh.vertex_count());
            assert_eq!(mesh.uvs().len(), mesh.vertex_count());
            assert_eq!(mesh.indices().len() % 3, 0);
            assert!(mesh
                .indices()
                .iter()
                .all(|&i| (i as usize) < mesh.vertex_count()));
        }
    }
}

#[test]
fn sphere_normals_are_unit_radial() {
    let params = MeshParameters::default();
    let mesh = CombinedSolidMeshBuilder::new(params).build().unwrap();
    let sphere_vertices = params.sphere_vertex_count() as usize;
    for (v, n) in mesh.vertices()[..sphere_vertices]
        .iter()
        .zip(&mesh.normals()[..sphere_vertices])
    {
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.cross(*n).length(), 0.0, epsilon = 1e-12);
        assert!(v.dot(*n) > 0.0);
    }
}

#[test]
fn winding_is_consistent_with_stored_normals() {
    for params in sample_parameters() {
        for placement in sample_placements() {
            let mesh = CombinedSolidMeshBuilder::new(params)
                .with_placement(placement)
                .build()
                .unwrap();
            assert_winding_matches_normals(&mesh);
        }
    }
}

#[test]
fn repeated_builds_are_bit_identical() {
    for params in sample_parameters() {
        let builder = CombinedSolidMeshBuilder::new(params);
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first.vertices_f32(), second.vertices_f32());
        assert_eq!(first.normals_f32(), second.normals_f32());
        assert_eq!(first.uvs_f32(), second.uvs_f32());
        assert_eq!(first.indices(), second.indices());
        assert_eq!(first, second);
    }
}

#[test]
fn minimum_segments_build_and_two_segments_fail() {
    let minimum = MeshParameters {
        sphere_latitude_segments: 3,
        sphere_longitude_segments: 3,
        cone_segments: 3,
        ..MeshParameters::default()
    };
    let mesh = CombinedSolidMeshBuilder::new(minimum).build().unwrap();
    assert!(!mesh.is_empty());
    assert!(mesh.triangle_count() > 0);
    mesh.validate().unwrap();

    for field in ["lat", "lon", "cone"] {
        let mut params = minimum;
        match field {
            "lat" => params.sphere_latitude_segments = 2,
            "lon" => params.sphere_longitude_segments = 2,
            _ => params.cone_segments = 2,
        }
        assert!(matches!(
            CombinedSolidMeshBuilder::new(params).build(),
            Err(MeshError::InvalidParameter { .. })
        ));
    }
}

#[test]
fn small_sphere_scenario() {
    let sphere = generate_sphere(1.0, 2, 4).unwrap();
    assert_eq!(sphere.vertex_count(), (2 + 1) * (4 + 1));
    assert_eq!(sphere.triangle_count(), 2 * 4 * 2);
    for lon in 0..=4 {
        assert_eq!(sphere.vertex(lon), DVec3::new(0.0, 1.0, 0.0));
    }
}

#[test]
fn combine_keeps_every_vertex() {
    let sphere = generate_sphere(1.0, 5, 9).unwrap();
    let cone = generate_cone(0.4, 0.7, 7, true).unwrap();
    let placement = ConeTransform::along(DVec3::new(0.3, -0.2, 1.0), 0.85);
    let mesh = combine(&sphere, &cone, &placement, 0.5).unwrap();
    assert_eq!(mesh.vertex_count(), sphere.vertex_count() + cone.vertex_count());
    assert_eq!(
        mesh.triangle_count(),
        sphere.triangle_count() + cone.triangle_count()
    );
    assert_winding_matches_normals(&mesh);
}

#[test]
fn concurrent_builds_match_sequential() {
    let builder = CombinedSolidMeshBuilder::default();
    let expected = builder.build().unwrap();

    let meshes: Vec<TriangleMesh> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| builder.build().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for mesh in meshes {
        assert_eq!(mesh, expected);
    }

    let batch = builder.build_many(&sample_parameters());
    for (result, params) in batch.iter().zip(sample_parameters()) {
        let mesh = result.as_ref().unwrap();
        assert_eq!(mesh, &CombinedSolidMeshBuilder::new(params).build().unwrap());
    }
}
