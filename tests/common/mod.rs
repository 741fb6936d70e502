//! In-memory writers for synthetic model files.

#![allow(dead_code)]

use half::f16;

pub const ROOT: u8 = 255;

/// One mesh of a synthetic model.
#[derive(Debug, Clone)]
pub struct MeshDef {
    pub tag: u32,
    pub block_size: u8,
    pub raw_lod: u8,
    pub group: u8,
    pub material: u16,
    /// Raw vertex records, `block_size` bytes each.
    pub vertices: Vec<u8>,
    pub indices: Vec<u16>,
}

impl MeshDef {
    pub fn new(tag: u32, block_size: u8, vertices: Vec<u8>, indices: Vec<u16>) -> Self {
        Self {
            tag,
            block_size,
            raw_lod: 0xFF,
            group: 0,
            material: 0,
            vertices,
            indices,
        }
    }

    pub fn lod(mut self, raw_lod: u8) -> Self {
        self.raw_lod = raw_lod;
        self
    }

    pub fn group(mut self, group: u8) -> Self {
        self.group = group;
        self
    }

    pub fn material(mut self, material: u16) -> Self {
        self.material = material;
        self
    }
}

/// Builds a version 214 model file.
#[derive(Debug, Clone, Default)]
pub struct ModelBuilder {
    pub materials: Vec<String>,
    /// Parent index of each bone.
    pub bones: Vec<u8>,
    /// `(slot, source bone)` remap entries.
    pub remap: Vec<(usize, u8)>,
    /// Diagonal of the first global matrix.
    pub global_scale: f32,
    pub bbox_min: [f32; 3],
    pub bbox_max: [f32; 3],
    pub meshes: Vec<MeshDef>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            global_scale: 1.0,
            bbox_max: [1.0; 3],
            ..Default::default()
        }
    }

    pub fn material(mut self, name: &str) -> Self {
        self.materials.push(name.to_owned());
        self
    }

    pub fn bones(mut self, parents: &[u8], global_scale: f32) -> Self {
        self.bones = parents.to_vec();
        self.global_scale = global_scale;
        self
    }

    pub fn remap(mut self, slot: usize, source: u8) -> Self {
        self.remap.push((slot, source));
        self
    }

    pub fn bbox(mut self, min: [f32; 3], max: [f32; 3]) -> Self {
        self.bbox_min = min;
        self.bbox_max = max;
        self
    }

    pub fn mesh(mut self, mesh: MeshDef) -> Self {
        self.meshes.push(mesh);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let material_offset = 0x90usize;
        let bone_offset = material_offset + self.materials.len() * 128;
        let bone_size = if self.bones.is_empty() {
            0
        } else {
            self.bones.len() * (24 + 128) + 4096
        };
        let mesh_offset = bone_offset + bone_size;
        let vbuffer_offset = mesh_offset + self.meshes.len() * 0x38;
        let vbuffer_size: usize = self.meshes.iter().map(|m| m.vertices.len()).sum();
        let fbuffer_offset = vbuffer_offset + vbuffer_size;

        let mut out = Vec::new();
        out.extend_from_slice(b"MOD\0");
        put_u16(&mut out, 214);
        put_u16(&mut out, self.bones.len() as u16);
        put_u16(&mut out, self.meshes.len() as u16);
        put_u16(&mut out, self.materials.len() as u16);
        put_u32(&mut out, 0);
        put_u32(&mut out, 0);
        put_u32(&mut out, 0);
        put_u64(&mut out, vbuffer_size as u64);
        put_u64(&mut out, 0);
        for offset in [
            bone_offset,
            0,
            material_offset,
            mesh_offset,
            vbuffer_offset,
            fbuffer_offset,
            0,
        ] {
            put_u64(&mut out, offset as u64);
        }
        for v in [0.0, 0.0, 0.0, 1.0] {
            put_f32(&mut out, v);
        }
        for v in self.bbox_min.into_iter().chain([0.0]) {
            put_f32(&mut out, v);
        }
        for v in self.bbox_max.into_iter().chain([0.0]) {
            put_f32(&mut out, v);
        }
        assert_eq!(out.len(), material_offset);

        for name in &self.materials {
            let start = out.len();
            out.extend_from_slice(name.as_bytes());
            out.resize(start + 128, 0);
        }

        if !self.bones.is_empty() {
            for &parent in &self.bones {
                put_u16(&mut out, 0);
                out.push(parent);
                out.push(0);
                for v in [0.0, 1.0, 0.0, 0.0, 0.0] {
                    put_f32(&mut out, v);
                }
            }
            for _ in &self.bones {
                put_matrix(&mut out, 1.0);
            }
            for _ in &self.bones {
                put_matrix(&mut out, self.global_scale);
            }
            let mut slots = vec![255u8; 4096];
            for &(slot, source) in &self.remap {
                slots[slot] = source;
            }
            out.extend_from_slice(&slots);
        }
        assert_eq!(out.len(), mesh_offset);

        let mut buffer_offset = 0usize;
        let mut face_start = 0usize;
        for mesh in &self.meshes {
            let records = mesh.vertices.len() / mesh.block_size as usize;
            put_u16(&mut out, 0);
            put_u16(&mut out, records as u16);
            out.push(mesh.group);
            put_u16(&mut out, mesh.material * 16);
            out.push(mesh.raw_lod);
            put_u16(&mut out, 0);
            out.push(mesh.block_size);
            out.push(0);
            put_u16(&mut out, 0);
            put_u16(&mut out, 0);
            put_u32(&mut out, buffer_offset as u32);
            put_u32(&mut out, mesh.tag);
            put_u32(&mut out, face_start as u32);
            put_u32(&mut out, mesh.indices.len() as u32);
            put_u32(&mut out, 0);
            out.resize(out.len() + 20, 0);
            buffer_offset += mesh.vertices.len();
            face_start += mesh.indices.len();
        }
        assert_eq!(out.len(), vbuffer_offset);

        for mesh in &self.meshes {
            out.extend_from_slice(&mesh.vertices);
        }
        for mesh in &self.meshes {
            for &i in &mesh.indices {
                put_u16(&mut out, i);
            }
        }
        out
    }
}

fn put_matrix(out: &mut Vec<u8>, diag: f32) {
    for row in 0..4 {
        for col in 0..4 {
            put_f32(out, if row == col { diag } else { 0.0 });
        }
    }
}

pub fn put_u16(out: &mut Vec<u8>, v: u16) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub fn put_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub fn put_u64(out: &mut Vec<u8>, v: u64) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub fn put_f32(out: &mut Vec<u8>, v: f32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub fn put_f16(out: &mut Vec<u8>, v: f32) {
    out.extend_from_slice(&f16::from_f32(v).to_le_bytes());
}

/// A 24-byte `0xD8297027` record: f32 position, i8 normal, f16 uv.
pub fn static_vertex(position: [f32; 3], normal: [i8; 3], uv: [f32; 2]) -> Vec<u8> {
    let mut v = Vec::new();
    for p in position {
        put_f32(&mut v, p);
    }
    v.extend(normal.map(|n| n as u8));
    v.resize(20, 0);
    put_f16(&mut v, uv[0]);
    put_f16(&mut v, uv[1]);
    v
}

/// A 28-byte `0x77D87021` record with four byte bone ids.
pub fn skin4_vertex(q: [i16; 3], bones: [u8; 4], w0: f32, w1: f32, w2: f32) -> Vec<u8> {
    let mut v = Vec::new();
    for c in q {
        v.extend_from_slice(&c.to_le_bytes());
    }
    v.extend_from_slice(&((w0 * 32767.0).round() as i16).to_le_bytes());
    v.extend_from_slice(&[127, 0, 0, 0]);
    v.extend_from_slice(&[10, 20, 30, 255]);
    v.extend_from_slice(&bones);
    put_f16(&mut v, 0.25);
    put_f16(&mut v, 0.5);
    put_f16(&mut v, w1);
    put_f16(&mut v, w2);
    v
}
