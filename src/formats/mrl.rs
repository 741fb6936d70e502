//! MRL - material table.
//!
//! Defines the materials a model refers to by name. Each material points at
//! a list of resource bindings; texture bindings index into a table of
//! texture paths stored at the front of the file.
//!
//! ## Header
//! ```text
//! [0x00] Magic "MRL\0"       (u32 LE)
//! [0x04] Version             (u32 LE)
//! [0x08] MaterialCount       (u32 LE)
//! [0x0C] TextureCount        (u32 LE)
//! [0x10] Reserved            (2 × u32)
//! [0x18] TextureOffset       (u64 LE)
//! [0x20] MaterialOffset      (u64 LE)
//! ```
//!
//! ## Texture table
//! Records are variable-sized and start with a discriminator. Only
//! [`TEXTURE_TYPE_HASH`] records carry a path: `u32 + u64 + u64` followed by
//! a NUL-terminated string. A zero discriminator is padding and does not
//! occupy a texture slot.
//!
//! | Discriminator | Stride |
//! |---------------|--------|
//! | `0x00000000` | 58 (padding) |
//! | `0x241F5DEB` | 152 (path) |
//! | `0x59993333` | 152 |
//! | `0x451E3333`, `0xC53E7FFF`, `0xCCCC9999`, `0x60850864`, `0xE6CFBABE` | 94 |
//! | anything else | 94 |
//!
//! ## Material (72 bytes)
//! ```text
//! [0x00] ShaderHash     (u32)
//! [0x08] NameHash       (u32) - name_hash of the material name
//! [0x1C] BindingCount   (u8)
//! [0x1E] AlphaCoef      (u8)
//! [0x38] BindingOffset  (u64)
//! ```
//!
//! ## Binding (24 bytes)
//! ```text
//! [0x00] Kind           (u8)  - low nibble 3 = texture, 0 = property
//! [0x08] TextureIndex   (u32) - 1-based
//! [0x10] ResourceHash   (u32) - resolved through a ResourceDictionary
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::dictionary::ResourceDictionary;
use crate::formats::model::Model;
use crate::registry::{TEXTURE_TYPE_HASH, name_hash};
use crate::{Error, Result};

/// `"MRL\0"` as a little-endian `u32`.
pub const MRL_MAGIC: u32 = 0x004C_524D;
/// Size of one material record.
pub const MATERIAL_SIZE: usize = 72;
/// Size of one resource binding.
pub const BINDING_SIZE: usize = 24;
/// Extension appended to texture paths on disk.
pub const TEXTURE_EXTENSION: &str = ".tex";

const PADDING_STRIDE: usize = 58;
const DEFAULT_STRIDE: usize = 94;

const KIND_TEXTURE: u8 = 3;
const KIND_PROPERTY: u8 = 0;

fn texture_record_stride(discriminator: u32) -> usize {
    match discriminator {
        0 => PADDING_STRIDE,
        TEXTURE_TYPE_HASH | 0x5999_3333 => 152,
        _ => DEFAULT_STRIDE,
    }
}

/// One decoded material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterialRecord {
    pub shader_hash: u32,
    pub name_hash: u32,
    pub alpha_coef: u8,
    /// Slot name to texture path (without extension). A slot may be bound
    /// to a record that carries no path.
    pub textures: BTreeMap<String, Option<String>>,
    /// Names of the scalar properties bound by the material.
    pub properties: BTreeSet<String>,
}

impl MaterialRecord {
    /// Resolve texture slots to files under `game_root`.
    ///
    /// Slots without a path are left out. Paths that do not exist are
    /// reported as [`Diagnostic::MissingTexture`] and left out.
    pub fn texture_files(
        &self,
        game_root: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> BTreeMap<String, PathBuf> {
        let mut files = BTreeMap::new();
        for (slot, path) in &self.textures {
            let Some(path) = path else { continue };
            let file = game_root.join(format!("{}{TEXTURE_EXTENSION}", path.replace('\\', "/")));
            if file.is_file() {
                files.insert(slot.clone(), file);
            } else {
                sink.report(Diagnostic::MissingTexture { path: file });
            }
        }
        files
    }
}

/// A decoded material file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialTable {
    pub version: u32,
    /// Texture slots in file order; [`None`] for records without a path.
    pub texture_paths: Vec<Option<String>>,
    /// Materials keyed by [`MaterialRecord::name_hash`].
    pub materials: BTreeMap<u32, MaterialRecord>,
}

impl MaterialTable {
    /// Decode a material file, resolving binding names through `dictionary`.
    pub fn parse(
        data: &[u8],
        dictionary: &ResourceDictionary,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self> {
        let mut r = ByteCursor::new(data);
        let magic = r.u32()?;
        if magic != MRL_MAGIC {
            return Err(Error::BadMagic {
                expected: MRL_MAGIC,
                found: magic,
            });
        }
        let version = r.u32()?;
        let material_count = r.u32()? as usize;
        let texture_count = r.u32()? as usize;
        let _reserved = (r.u32()?, r.u32()?);
        let texture_offset = r.offset()?;
        let material_offset = r.offset()?;

        r.seek(texture_offset)?;
        let texture_paths = read_texture_paths(&mut r, texture_count)?;

        r.seek(material_offset)?;
        let mut materials = BTreeMap::new();
        for _ in 0..material_count {
            let start = r.position();
            let shader_hash = r.u32()?;
            let _unk = r.u32()?;
            let name_hash = r.u32()?;
            r.seek(start + 0x1C)?;
            let binding_count = r.u8()? as usize;
            let _unk = r.u8()?;
            let alpha_coef = r.u8()?;
            r.seek(start + 0x38)?;
            let binding_offset = r.offset()?;
            r.seek(start + MATERIAL_SIZE)?;

            let mut record = MaterialRecord {
                shader_hash,
                name_hash,
                alpha_coef,
                ..Default::default()
            };
            let mut br = r.clone();
            br.seek(binding_offset)?;
            for _ in 0..binding_count {
                read_binding(&mut br, &mut record, &texture_paths, dictionary, sink)?;
            }
            materials.insert(name_hash, record);
        }

        Ok(Self {
            version,
            texture_paths,
            materials,
        })
    }

    /// Material whose key is the name hash of `name`.
    pub fn get_by_name(&self, name: &str) -> Option<&MaterialRecord> {
        self.materials.get(&name_hash(name))
    }
}

fn read_texture_paths(r: &mut ByteCursor, count: usize) -> Result<Vec<Option<String>>> {
    let mut paths = Vec::with_capacity(count);
    while paths.len() < count {
        let origin = r.position();
        let discriminator = r.u32()?;
        match discriminator {
            0 => {}
            TEXTURE_TYPE_HASH => {
                let _header = (r.u32()?, r.u64()?, r.u64()?);
                paths.push(Some(r.cstring()?));
            }
            _ => paths.push(None),
        }
        r.seek(origin + texture_record_stride(discriminator))?;
    }
    Ok(paths)
}

fn read_binding(
    r: &mut ByteCursor,
    record: &mut MaterialRecord,
    texture_paths: &[Option<String>],
    dictionary: &ResourceDictionary,
    sink: &mut dyn DiagnosticSink,
) -> Result<()> {
    let start = r.position();
    let kind = r.u8()? & 0xF;
    r.seek(start + 8)?;
    let index = r.u32()?;
    r.seek(start + 16)?;
    let hash = r.u32()?;
    r.seek(start + BINDING_SIZE)?;

    let material = record.name_hash;
    match kind {
        KIND_TEXTURE => {
            let Some(slot) = dictionary.get(hash) else {
                sink.report(Diagnostic::UnknownTextureSlot { material, hash });
                return Ok(());
            };
            let path = (index as usize)
                .checked_sub(1)
                .and_then(|i| texture_paths.get(i));
            match path {
                Some(path) => {
                    record.textures.insert(slot.to_owned(), path.clone());
                }
                None => sink.report(Diagnostic::TextureIndexOutOfRange { material, index }),
            }
        }
        KIND_PROPERTY => match dictionary.get(hash) {
            Some(name) => {
                record.properties.insert(name.to_owned());
            }
            None => sink.report(Diagnostic::UnknownProperty { material, hash }),
        },
        _ => {}
    }
    Ok(())
}

/// A model material paired with its definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundMaterial<'a> {
    /// Index into the model's material name table.
    pub index: usize,
    pub name: &'a str,
    pub record: &'a MaterialRecord,
}

/// Pair every material name of `model` with the record keyed by its name
/// hash. Names without a record are reported and left out.
pub fn bind_materials<'a>(
    model: &'a Model,
    table: &'a MaterialTable,
    sink: &mut dyn DiagnosticSink,
) -> Vec<BoundMaterial<'a>> {
    let mut bound = Vec::with_capacity(model.material_names.len());
    for (index, name) in model.material_names.iter().enumerate() {
        let hash = name_hash(name);
        match table.materials.get(&hash) {
            Some(record) => bound.push(BoundMaterial {
                index,
                name,
                record,
            }),
            None => sink.report(Diagnostic::UnmatchedMaterial {
                name: name.clone(),
                hash,
            }),
        }
    }
    bound
}

/// Builds material files in memory. Used by tests and tooling that need
/// synthetic inputs.
#[derive(Debug, Default, Clone)]
pub struct MaterialWriter {
    textures: Vec<Option<String>>,
    padding_before: Vec<usize>,
    materials: Vec<(u32, u32, u8, Vec<(u8, u32, u32)>)>,
}

impl MaterialWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path-bearing texture record.
    pub fn texture(&mut self, path: &str) -> &mut Self {
        self.textures.push(Some(path.to_owned()));
        self
    }

    /// Append a texture record that carries no path.
    pub fn pathless_texture(&mut self) -> &mut Self {
        self.textures.push(None);
        self
    }

    /// Insert a zero padding record before the next texture.
    pub fn padding(&mut self) -> &mut Self {
        self.padding_before.push(self.textures.len());
        self
    }

    /// Append a material with `(kind, texture index, resource hash)` bindings.
    pub fn material(
        &mut self,
        shader_hash: u32,
        name: &str,
        alpha_coef: u8,
        bindings: &[(u8, u32, u32)],
    ) -> &mut Self {
        self.materials
            .push((shader_hash, name_hash(name), alpha_coef, bindings.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&MRL_MAGIC.to_le_bytes());
        out.extend_from_slice(&0x22u32.to_le_bytes());
        out.extend_from_slice(&(self.materials.len() as u32).to_le_bytes());
        out.extend_from_slice(&(self.textures.len() as u32).to_le_bytes());
        out.extend_from_slice(&[0u8; 8]);
        let texture_offset = 0x28u64;
        out.extend_from_slice(&texture_offset.to_le_bytes());
        let material_offset_at = out.len();
        out.extend_from_slice(&0u64.to_le_bytes());

        for (i, texture) in self.textures.iter().enumerate() {
            for _ in self.padding_before.iter().filter(|&&p| p == i) {
                out.resize(out.len() + PADDING_STRIDE, 0);
            }
            let start = out.len();
            match texture {
                Some(path) => {
                    out.extend_from_slice(&TEXTURE_TYPE_HASH.to_le_bytes());
                    out.resize(start + 24, 0);
                    out.extend_from_slice(path.as_bytes());
                    out.push(0);
                    out.resize(start + texture_record_stride(TEXTURE_TYPE_HASH), 0);
                }
                None => {
                    out.extend_from_slice(&0x451E_3333u32.to_le_bytes());
                    out.resize(start + DEFAULT_STRIDE, 0);
                }
            }
        }

        let material_offset = out.len();
        out[material_offset_at..material_offset_at + 8]
            .copy_from_slice(&(material_offset as u64).to_le_bytes());
        let mut binding_offset = material_offset + self.materials.len() * MATERIAL_SIZE;
        for (shader, hash, alpha, bindings) in &self.materials {
            let start = out.len();
            out.resize(start + MATERIAL_SIZE, 0);
            out[start..start + 4].copy_from_slice(&shader.to_le_bytes());
            out[start + 8..start + 12].copy_from_slice(&hash.to_le_bytes());
            out[start + 0x1C] = bindings.len() as u8;
            out[start + 0x1E] = *alpha;
            out[start + 0x38..start + 0x40].copy_from_slice(&(binding_offset as u64).to_le_bytes());
            binding_offset += bindings.len() * BINDING_SIZE;
        }
        for (_, _, _, bindings) in &self.materials {
            for &(kind, index, hash) in bindings {
                let start = out.len();
                out.resize(start + BINDING_SIZE, 0);
                out[start] = kind;
                out[start + 8..start + 12].copy_from_slice(&index.to_le_bytes());
                out[start + 16..start + 20].copy_from_slice(&hash.to_le_bytes());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALBEDO: u32 = 0x1B3B_3A47;
    const NORMAL: u32 = 0x2A8A_E1E3;
    const ROUGHNESS: u32 = 0x0BAD_F00D;

    fn dictionary() -> ResourceDictionary {
        [
            (ALBEDO, "tAlbedoMap".to_owned()),
            (NORMAL, "tNormalMap".to_owned()),
            (ROUGHNESS, "fRoughness".to_owned()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn texture_walk_skips_padding() {
        let data = MaterialWriter::new()
            .texture("chr\\em096\\tex\\em096_BM")
            .padding()
            .pathless_texture()
            .texture("chr\\em096\\tex\\em096_NM")
            .build();
        let table = MaterialTable::parse(&data, &dictionary(), &mut Vec::<Diagnostic>::new()).unwrap();
        assert_eq!(
            table.texture_paths,
            vec![
                Some("chr\\em096\\tex\\em096_BM".to_owned()),
                None,
                Some("chr\\em096\\tex\\em096_NM".to_owned()),
            ]
        );
    }

    #[test]
    fn bindings_resolve_through_dictionary() {
        let data = MaterialWriter::new()
            .texture("a_BM")
            .texture("a_NM")
            .material(
                0xABCD,
                "body",
                200,
                &[
                    (0x13, 1, ALBEDO),
                    (0x03, 2, NORMAL),
                    (0x00, 0, ROUGHNESS),
                    (0x03, 1, 0x7777),
                    (0x00, 0, 0x8888),
                    (0x03, 9, ALBEDO),
                    (0x01, 0, 0x9999),
                ],
            )
            .build();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let table = MaterialTable::parse(&data, &dictionary(), &mut sink).unwrap();

        let body = table.get_by_name("body").unwrap();
        assert_eq!(body.shader_hash, 0xABCD);
        assert_eq!(body.alpha_coef, 200);
        assert_eq!(body.textures.len(), 2);
        assert_eq!(body.textures["tAlbedoMap"].as_deref(), Some("a_BM"));
        assert_eq!(body.textures["tNormalMap"].as_deref(), Some("a_NM"));
        assert!(body.properties.contains("fRoughness"));

        let material = name_hash("body");
        assert_eq!(
            sink,
            vec![
                Diagnostic::UnknownTextureSlot { material, hash: 0x7777 },
                Diagnostic::UnknownProperty { material, hash: 0x8888 },
                Diagnostic::TextureIndexOutOfRange { material, index: 9 },
            ]
        );
    }

    #[test]
    fn rejects_other_magic() {
        let mut data = MaterialWriter::new().build();
        data[..4].copy_from_slice(b"MOD\0");
        assert!(matches!(
            MaterialTable::parse(&data, &dictionary(), &mut Vec::<Diagnostic>::new()),
            Err(Error::BadMagic { .. })
        ));
    }

    #[test]
    fn missing_textures_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("chr")).unwrap();
        std::fs::write(dir.path().join("chr/a_BM.tex"), b"TEX").unwrap();

        let mut record = MaterialRecord::default();
        record.textures.insert("tAlbedoMap".into(), Some("chr\\a_BM".into()));
        record.textures.insert("tNormalMap".into(), Some("chr\\a_NM".into()));
        record.textures.insert("tMaskMap".into(), None);

        let mut sink: Vec<Diagnostic> = Vec::new();
        let files = record.texture_files(dir.path(), &mut sink);
        assert_eq!(files.len(), 1);
        assert_eq!(files["tAlbedoMap"], dir.path().join("chr/a_BM.tex"));
        assert_eq!(
            sink,
            vec![Diagnostic::MissingTexture {
                path: dir.path().join("chr/a_NM.tex")
            }]
        );
    }
}
