//! Model decoding against synthetic files.

mod common;

use common::{MeshDef, ModelBuilder, ROOT, skin4_vertex, static_vertex};
use mhkit::Error;
use mhkit::diagnostics::Diagnostic;
use mhkit::formats::model::Model;
use mhkit::formats::model::vertex::VertexEncoding;
use mhkit::registry::name_hash;

const STATIC_NORMAL: u32 = 0xD829_7027;
const SKIN4: u32 = 0x77D8_7021;

fn quad() -> Vec<u8> {
    [
        static_vertex([0.0, 0.0, 0.0], [0, 127, 0], [0.0, 0.0]),
        static_vertex([1.0, 0.0, 0.0], [0, 127, 0], [1.0, 0.0]),
        static_vertex([0.0, 0.0, 1.0], [0, 127, 0], [0.0, 1.0]),
        static_vertex([1.0, 0.0, 1.0], [0, 127, 0], [1.0, 1.0]),
    ]
    .concat()
}

fn parse(data: &[u8]) -> (Model, Vec<Diagnostic>) {
    let mut sink: Vec<Diagnostic> = Vec::new();
    let model = Model::parse(data, &mut sink).unwrap();
    (model, sink)
}

#[test]
fn static_quad() {
    let data = ModelBuilder::new()
        .material("body")
        .mesh(MeshDef::new(STATIC_NORMAL, 24, quad(), vec![0, 1, 2, 3]))
        .build();
    let (model, diagnostics) = parse(&data);
    assert!(diagnostics.is_empty());
    assert_eq!(model.meshes.len(), 1);

    let mesh = &model.meshes[0];
    assert_eq!(mesh.encoding, VertexEncoding::StaticNormal);
    assert_eq!(mesh.material_name.as_deref(), Some("body"));
    assert_eq!(mesh.material_name_hash, Some(name_hash("body")));
    assert_eq!(mesh.label(), "LOD0_G0_I0");

    let g = &mesh.geometry;
    assert_eq!(g.faces, vec![[0, 1, 2], [2, 1, 3]]);
    assert_eq!(g.positions[3], [1.0, 0.0, 1.0]);
    assert_eq!(g.normals.as_ref().unwrap()[0], [0.0, 1.0, 0.0]);
    // V is flipped on read.
    assert_eq!(g.uv0.as_ref().unwrap()[2], [0.0, 0.0]);
    assert_eq!(g.uv0.as_ref().unwrap()[0], [0.0, 1.0]);
    assert!(g.skin.is_none());
    assert!(g.uv1.is_none());
}

#[test]
fn unused_vertices_are_dropped() {
    let mut vertices = quad();
    vertices.extend(quad());
    let data = ModelBuilder::new()
        .mesh(MeshDef::new(
            STATIC_NORMAL,
            24,
            vertices,
            vec![5, 6, 7, 0xFFFF, 7, 6, 4],
        ))
        .build();
    let (model, _) = parse(&data);
    let g = &model.meshes[0].geometry;
    assert_eq!(g.positions.len(), 4);
    assert_eq!(g.positions[0], [0.0, 0.0, 0.0]);
    assert_eq!(g.positions[1], [1.0, 0.0, 0.0]);
    assert_eq!(g.faces, vec![[1, 2, 3], [3, 2, 0]]);
    assert!(g.faces.iter().flatten().all(|&i| (i as usize) < g.positions.len()));
}

#[test]
fn skinned_mesh_uses_remap_and_bone_scale() {
    let vertices = [
        skin4_vertex([16384, 0, -16384], [1, 2, 0, 0], 0.5, 0.25, 0.125),
        skin4_vertex([0, 0, 0], [2, 2, 2, 2], 1.0, 0.0, 0.0),
        skin4_vertex([-32768, 0, 0], [0, 1, 2, 0], 0.25, 0.25, 0.25),
    ]
    .concat();
    let data = ModelBuilder::new()
        .bones(&[ROOT, 0, 1], 4.0)
        .remap(10, 1)
        .bbox([1.0, 2.0, 3.0], [100.0, 100.0, 100.0])
        .mesh(MeshDef::new(SKIN4, 28, vertices, vec![0, 1, 2]))
        .build();
    let (model, diagnostics) = parse(&data);
    assert!(diagnostics.is_empty());

    let sk = &model.skeleton;
    assert_eq!(sk.len(), 3);
    assert_eq!(sk.bones.iter().filter(|b| b.remap as usize != b.id).count(), 1);
    assert_eq!(sk.bones[1].name(), "bone_010");
    assert_eq!(sk.parent_of(2), Some(10));

    let g = &model.meshes[0].geometry;
    // Scale comes from the first global matrix, offset from the bbox.
    assert_eq!(g.positions[0], [3.0, 2.0, 1.0]);
    assert_eq!(g.positions[2], [-3.0, 2.0, 3.0]);
    assert_eq!(g.colors.as_ref().unwrap()[0], [10, 20, 30, 255]);

    let skin = g.skin.as_ref().unwrap();
    assert_eq!(skin.influences, 4);
    let (ids, weights) = skin.vertex(0);
    assert_eq!(ids, &[10, 2, 0, 0]);
    assert!((weights[0] - 0.5).abs() < 1e-4);
    assert_eq!(weights[1], 0.25);
    assert_eq!(weights[2], 0.125);
    for v in 0..skin.len() {
        let sum: f32 = skin.vertex(v).1.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5, "vertex {v} sums to {sum}");
    }
    assert_eq!(g.used_bones(), vec![0, 2, 10]);
}

#[test]
fn unknown_and_non_geometry_encodings_are_skipped() {
    let data = ModelBuilder::new()
        .mesh(MeshDef::new(0xDEAD_BEEF, 24, quad(), vec![0, 1, 2]))
        .mesh(MeshDef::new(0xA320_C015, 24, quad(), vec![0, 1, 2]))
        .mesh(MeshDef::new(STATIC_NORMAL, 24, quad(), vec![0, 1, 2]))
        .build();
    let (model, diagnostics) = parse(&data);
    assert_eq!(model.meshes.len(), 1);
    assert_eq!(model.meshes[0].id, 2);
    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::UnsupportedEncoding { mesh: 0, tag: 0xDEAD_BEEF },
            Diagnostic::SkippedEncoding { mesh: 1, tag: 0xA320_C015 },
        ]
    );
    assert!(!diagnostics[0].is_expected());
    assert!(diagnostics[1].is_expected());
}

#[test]
fn lod_levels() {
    let mesh = |lod: u8, group: u8| {
        MeshDef::new(STATIC_NORMAL, 24, quad(), vec![0, 1, 2])
            .lod(lod)
            .group(group)
    };
    let data = ModelBuilder::new()
        .mesh(mesh(0x01, 1))
        .mesh(mesh(0x82, 1))
        .mesh(mesh(0xFF, 2))
        .mesh(mesh(0x8C, 2))
        .build();
    let (model, _) = parse(&data);
    assert!(model.has_lod);
    let lods: Vec<u8> = model.meshes.iter().map(|m| m.lod).collect();
    assert_eq!(lods, vec![0, 1, 4, 2]);
    let labels: Vec<String> = model.meshes_for_lod(1).map(|m| m.label()).collect();
    assert_eq!(labels, vec!["LOD1_G1_I1"]);

    let data = ModelBuilder::new().mesh(mesh(0xFF, 0)).mesh(mesh(0xFF, 0)).build();
    let (model, _) = parse(&data);
    assert!(!model.has_lod);
    assert_eq!(model.meshes_for_lod(0).count(), 2);
}

#[test]
fn out_of_range_face_index_is_an_error() {
    let data = ModelBuilder::new()
        .mesh(MeshDef::new(STATIC_NORMAL, 24, quad(), vec![0, 1, 9]))
        .build();
    assert!(matches!(
        Model::parse(&data, &mut Vec::<Diagnostic>::new()),
        Err(Error::InvalidRange(_))
    ));
}

#[test]
fn truncated_vertex_buffer_is_an_error() {
    let mut data = ModelBuilder::new()
        .mesh(MeshDef::new(STATIC_NORMAL, 24, quad(), vec![]))
        .build();
    data.truncate(data.len() - 30);
    assert!(matches!(
        Model::parse(&data, &mut Vec::<Diagnostic>::new()),
        Err(Error::BufferUnderrun { .. })
    ));
}

#[test]
fn material_index_out_of_table_has_no_name() {
    let data = ModelBuilder::new()
        .material("body")
        .mesh(MeshDef::new(STATIC_NORMAL, 24, quad(), vec![0, 1, 2]).material(3))
        .build();
    let (model, _) = parse(&data);
    assert_eq!(model.meshes[0].material_index, 3);
    assert_eq!(model.meshes[0].material_name, None);
    assert_eq!(model.meshes[0].material_name_hash, None);
}

#[test]
fn overflowing_header_offsets_are_an_error() {
    let base = ModelBuilder::new()
        .mesh(MeshDef::new(0xDEAD_BEEF, 24, quad(), vec![0, 1, 2]))
        .mesh(MeshDef::new(STATIC_NORMAL, 24, quad(), vec![0, 1, 2]))
        .build();

    // Vertex and face buffer offsets. The first mesh is skipped, and the
    // second one's buffer displacement pushes either field past usize::MAX.
    for field in [0x48, 0x50] {
        let mut data = base.clone();
        data[field..field + 8].copy_from_slice(&u64::MAX.to_le_bytes());
        assert!(
            matches!(
                Model::parse(&data, &mut Vec::<Diagnostic>::new()),
                Err(Error::InvalidRange(_))
            ),
            "field {field:#x}"
        );
    }
}
