//! MOD - skinned mesh container (version 214).
//!
//! One file holds a skeleton, a material name table and any number of
//! meshes sharing one vertex buffer and one index buffer.
//!
//! ## Header (0x90 bytes)
//! ```text
//! [0x00] Magic "MOD\0"              (u32 LE)
//! [0x04] Version (214)              (u16 LE)
//! [0x06] BoneCount                  (u16 LE)
//! [0x08] MeshCount                  (u16 LE)
//! [0x0A] MaterialCount              (u16 LE)
//! [0x0C] VertexCount                (u32 LE)
//! [0x10] FaceCount                  (u32 LE)
//! [0x14] EdgeCount                  (u32 LE)
//! [0x18] VertexBufferSize           (u64 LE)
//! [0x20] GroupCount                 (u64 LE)
//! [0x28] BoneOffset                 (u64 LE)
//! [0x30] GroupOffset                (u64 LE)
//! [0x38] MaterialNameOffset         (u64 LE)
//! [0x40] MeshOffset                 (u64 LE)
//! [0x48] VertexBufferOffset         (u64 LE)
//! [0x50] FaceBufferOffset           (u64 LE)
//! [0x58] Reserved offset            (u64 LE)
//! [0x60] BoundingSphere             (4 × f32)
//! [0x70] BoundingBoxMin             (4 × f32)
//! [0x80] BoundingBoxMax             (4 × f32)
//! ```
//!
//! Material names are NUL-terminated strings in 128-byte slots. The bone
//! block is described in [`skeleton`].
//!
//! ## Mesh descriptor (0x38 bytes)
//! ```text
//! [0x00] ShadowFlags       (u16)
//! [0x02] VertexCount       (u16)
//! [0x04] Group             (u8)
//! [0x05] MaterialIndex×16  (u16, unaligned)
//! [0x07] Lod               (u8)  - see [`lod_level`]
//! [0x08] Unknown           (u16)
//! [0x0A] BlockSize         (u8)  - vertex stride
//! [0x0B] Unknown           (u8)
//! [0x0C] ExtraVertexCount  (u16)
//! [0x0E] Unknown           (u16)
//! [0x10] BufferOffset      (u32) - into the vertex buffer
//! [0x14] Encoding          (u32) - see [`vertex`]
//! [0x18] FaceStart         (u32) - in indices
//! [0x1C] FaceCount         (u32) - in indices
//! [0x20] VertexSkip        (u32) - in records
//! [0x24] Unknown           (20 bytes)
//! ```
//!
//! A mesh's vertices start at
//! `VertexBufferOffset + BufferOffset + VertexSkip × BlockSize` and span
//! `(VertexCount + ExtraVertexCount) × BlockSize` bytes.

pub mod faces;
pub mod skeleton;
pub mod vertex;

use std::collections::BTreeSet;

use serde::Serialize;

use self::skeleton::Skeleton;
use self::vertex::{NON_GEOMETRY_TAGS, PositionDecode, Skin, VertexEncoding};
use crate::cursor::ByteCursor;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::registry::name_hash;
use crate::{Error, Result};

/// `"MOD\0"` as a little-endian `u32`.
pub const MOD_MAGIC: u32 = 0x0044_4F4D;
/// The only supported format version.
pub const MOD_VERSION: u16 = 214;
/// Size of one mesh descriptor.
pub const DESCRIPTOR_SIZE: usize = 0x38;
const MATERIAL_NAME_STRIDE: usize = 128;
const NO_LOD: u8 = 0xFF;

/// Output LOD level of a raw descriptor LOD byte.
pub fn lod_level(raw: u8) -> u8 {
    match raw {
        0x01 | 0x81 => 0,
        0x02 | 0x82 => 1,
        0x0C | 0x8C => 2,
        0x7F => 3,
        0xFF => 4,
        _ => 0,
    }
}

/// Fixed file header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelHeader {
    pub version: u16,
    pub bone_count: u16,
    pub mesh_count: u16,
    pub material_count: u16,
    pub vertex_count: u32,
    pub face_count: u32,
    pub edge_count: u32,
    pub vertex_buffer_size: u64,
    pub group_count: u64,
    pub bone_offset: usize,
    pub group_offset: usize,
    pub material_name_offset: usize,
    pub mesh_offset: usize,
    pub vertex_buffer_offset: usize,
    pub face_buffer_offset: usize,
    pub bounding_sphere: [f32; 4],
    pub bbox_min: [f32; 4],
    pub bbox_max: [f32; 4],
}

impl ModelHeader {
    /// Read and validate the header at the start of `r`.
    pub fn read(r: &mut ByteCursor) -> Result<Self> {
        let magic = r.u32()?;
        if magic != MOD_MAGIC {
            return Err(Error::BadMagic {
                expected: MOD_MAGIC,
                found: magic,
            });
        }
        let version = r.u16()?;
        if version != MOD_VERSION {
            return Err(Error::BadVersion {
                expected: MOD_VERSION as u32,
                found: version as u32,
            });
        }
        let bone_count = r.u16()?;
        let mesh_count = r.u16()?;
        let material_count = r.u16()?;
        let vertex_count = r.u32()?;
        let face_count = r.u32()?;
        let edge_count = r.u32()?;
        let vertex_buffer_size = r.u64()?;
        let group_count = r.u64()?;
        let bone_offset = r.offset()?;
        let group_offset = r.offset()?;
        let material_name_offset = r.offset()?;
        let mesh_offset = r.offset()?;
        let vertex_buffer_offset = r.offset()?;
        let face_buffer_offset = r.offset()?;
        let _reserved = r.u64()?;
        let mut vec4 = || -> Result<[f32; 4]> { Ok([r.f32()?, r.f32()?, r.f32()?, r.f32()?]) };
        let bounding_sphere = vec4()?;
        let bbox_min = vec4()?;
        let bbox_max = vec4()?;

        Ok(Self {
            version,
            bone_count,
            mesh_count,
            material_count,
            vertex_count,
            face_count,
            edge_count,
            vertex_buffer_size,
            group_count,
            bone_offset,
            group_offset,
            material_name_offset,
            mesh_offset,
            vertex_buffer_offset,
            face_buffer_offset,
            bounding_sphere,
            bbox_min,
            bbox_max,
        })
    }

    /// Largest bounding box edge.
    pub fn bbox_extent(&self) -> f32 {
        (0..3)
            .map(|i| self.bbox_max[i] - self.bbox_min[i])
            .fold(f32::MIN, f32::max)
    }
}

/// Raw mesh descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshDescriptor {
    pub shadow_flags: u16,
    pub vertex_count: u16,
    pub group: u8,
    pub material_index: u16,
    pub raw_lod: u8,
    pub block_size: u8,
    pub extra_vertex_count: u16,
    pub buffer_offset: u32,
    pub encoding: u32,
    pub face_start: u32,
    pub face_count: u32,
    pub vertex_skip: u32,
}

impl MeshDescriptor {
    pub fn read(r: &mut ByteCursor) -> Result<Self> {
        let start = r.position();
        let shadow_flags = r.u16()?;
        let vertex_count = r.u16()?;
        let group = r.u8()?;
        let material_index = r.u16()? / 16;
        let raw_lod = r.u8()?;
        let _unk0 = r.u16()?;
        let block_size = r.u8()?;
        let _unk1 = r.u8()?;
        let extra_vertex_count = r.u16()?;
        let _unk2 = r.u16()?;
        let buffer_offset = r.u32()?;
        let encoding = r.u32()?;
        let face_start = r.u32()?;
        let face_count = r.u32()?;
        let vertex_skip = r.u32()?;
        r.seek(start + DESCRIPTOR_SIZE)?;

        Ok(Self {
            shadow_flags,
            vertex_count,
            group,
            material_index,
            raw_lod,
            block_size,
            extra_vertex_count,
            buffer_offset,
            encoding,
            face_start,
            face_count,
            vertex_skip,
        })
    }

    /// Records in the mesh's vertex slice.
    pub fn record_count(&self) -> usize {
        self.vertex_count as usize + self.extra_vertex_count as usize
    }
}

/// Geometry of one mesh, restricted to the vertices its faces use.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshGeometry {
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub uv0: Option<Vec<[f32; 2]>>,
    pub uv1: Option<Vec<[f32; 2]>>,
    pub colors: Option<Vec<[u8; 4]>>,
    pub skin: Option<Skin>,
    pub faces: Vec<[u32; 3]>,
}

impl MeshGeometry {
    /// Distinct output bone ids carrying a non-zero weight, ascending.
    pub fn used_bones(&self) -> Vec<u16> {
        let Some(skin) = &self.skin else {
            return Vec::new();
        };
        let used: BTreeSet<u16> = skin
            .bone_ids
            .iter()
            .zip(&skin.weights)
            .filter(|(_, w)| **w != 0.0)
            .map(|(id, _)| *id)
            .collect();
        used.into_iter().collect()
    }
}

/// A decoded mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    /// Index in the descriptor table.
    pub id: usize,
    pub lod: u8,
    pub group: u8,
    pub material_index: u16,
    pub material_name: Option<String>,
    /// [`name_hash`] of `material_name`.
    pub material_name_hash: Option<u32>,
    pub encoding: VertexEncoding,
    pub geometry: MeshGeometry,
}

impl Mesh {
    /// `LOD{lod}_G{group}_I{id}`.
    pub fn label(&self) -> String {
        format!("LOD{}_G{}_I{}", self.lod, self.group, self.id)
    }
}

/// A decoded model file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Model {
    pub header: ModelHeader,
    pub material_names: Vec<String>,
    pub skeleton: Skeleton,
    /// Whether any descriptor carries a real LOD byte.
    pub has_lod: bool,
    pub meshes: Vec<Mesh>,
}

impl Model {
    /// Decode a model held in memory.
    ///
    /// Header, bone or buffer corruption is fatal. Meshes with an unknown
    /// vertex encoding are skipped and reported to `sink`.
    pub fn parse(data: &[u8], sink: &mut dyn DiagnosticSink) -> Result<Self> {
        let mut r = ByteCursor::new(data);
        let header = ModelHeader::read(&mut r)?;

        let material_names = (0..header.material_count as usize)
            .map(|i| {
                let offset = offset_of(header.material_name_offset, i, MATERIAL_NAME_STRIDE)?;
                r.cstring_at(offset)
            })
            .collect::<Result<Vec<_>>>()?;

        let skeleton = if header.bone_count > 0 {
            r.seek(header.bone_offset)?;
            Skeleton::read(&mut r, header.bone_count as usize, sink)?
        } else {
            Skeleton::default()
        };

        let scale = match skeleton.scale() {
            Some(diagonal) => diagonal.into_iter().fold(f32::MIN, f32::max),
            None => header.bbox_extent(),
        };
        let position = PositionDecode {
            scale,
            offset: [header.bbox_min[0], header.bbox_min[1], header.bbox_min[2]],
        };

        r.seek(header.mesh_offset)?;
        let descriptors = (0..header.mesh_count)
            .map(|_| MeshDescriptor::read(&mut r))
            .collect::<Result<Vec<_>>>()?;
        let has_lod = descriptors.iter().any(|d| d.raw_lod != NO_LOD);

        let mut meshes = Vec::with_capacity(descriptors.len());
        for (id, desc) in descriptors.iter().enumerate() {
            let Some(encoding) = VertexEncoding::from_tag(desc.encoding) else {
                if NON_GEOMETRY_TAGS.contains(&desc.encoding) {
                    sink.report(Diagnostic::SkippedEncoding {
                        mesh: id,
                        tag: desc.encoding,
                    });
                } else {
                    sink.report(Diagnostic::UnsupportedEncoding {
                        mesh: id,
                        tag: desc.encoding,
                    });
                }
                continue;
            };

            let geometry = decode_mesh(&r, &header, desc, encoding, position, &skeleton)?;
            let material_name = material_names.get(desc.material_index as usize).cloned();
            meshes.push(Mesh {
                id,
                lod: if has_lod { lod_level(desc.raw_lod) } else { 0 },
                group: desc.group,
                material_index: desc.material_index,
                material_name_hash: material_name.as_deref().map(name_hash),
                material_name,
                encoding,
                geometry,
            });
        }

        Ok(Self {
            header,
            material_names,
            skeleton,
            has_lod,
            meshes,
        })
    }

    /// Meshes at one LOD level, in descriptor order.
    pub fn meshes_for_lod(&self, lod: u8) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter().filter(move |m| m.lod == lod)
    }
}

fn decode_mesh(
    r: &ByteCursor,
    header: &ModelHeader,
    desc: &MeshDescriptor,
    encoding: VertexEncoding,
    position: PositionDecode,
    skeleton: &Skeleton,
) -> Result<MeshGeometry> {
    let block = desc.block_size as usize;
    let base = offset_of(header.vertex_buffer_offset, 1, desc.buffer_offset as usize)?;
    let mut vr = r.clone();
    vr.seek(offset_of(base, desc.vertex_skip as usize, block)?)?;
    let vertex_len = block
        .checked_mul(desc.record_count())
        .ok_or(Error::InvalidRange("vertex slice length overflows"))?;
    let vertex_bytes = vr.bytes(vertex_len)?;
    let stream = vertex::decode_vertices(vertex_bytes, encoding.layout(), block, position, skeleton)?;

    let mut fr = r.clone();
    fr.seek(offset_of(header.face_buffer_offset, desc.face_start as usize, 2)?)?;
    let indices = (0..desc.face_count)
        .map(|_| fr.u16())
        .collect::<Result<Vec<_>>>()?;
    let triangles = faces::strip_triangles(&indices);
    let compacted = faces::compact(&triangles, stream.len())?;
    let used = &compacted.used;

    Ok(MeshGeometry {
        positions: faces::gather(&stream.positions, used),
        normals: stream.normals.as_deref().map(|v| faces::gather(v, used)),
        uv0: stream.uv0.as_deref().map(|v| faces::gather(v, used)),
        uv1: stream.uv1.as_deref().map(|v| faces::gather(v, used)),
        colors: stream.colors.as_deref().map(|v| faces::gather(v, used)),
        skin: stream.skin.as_ref().map(|s| gather_skin(s, used)),
        faces: compacted.faces,
    })
}

/// `base + index * stride`, or [`Error::InvalidRange`] when it overflows.
fn offset_of(base: usize, index: usize, stride: usize) -> Result<usize> {
    index
        .checked_mul(stride)
        .and_then(|o| base.checked_add(o))
        .ok_or(Error::InvalidRange("buffer offset overflows"))
}

fn gather_skin(skin: &Skin, used: &[usize]) -> Skin {
    let mut out = Skin {
        influences: skin.influences,
        bone_ids: Vec::with_capacity(used.len() * skin.influences),
        weights: Vec::with_capacity(used.len() * skin.influences),
    };
    for &i in used {
        let (ids, weights) = skin.vertex(i);
        out.bone_ids.extend_from_slice(ids);
        out.weights.extend_from_slice(weights);
    }
    out
}
