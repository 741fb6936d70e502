//! Bone table and remap table.
//!
//! ## Layout (at the header's bone offset)
//! ```text
//! BoneCount × Bone        (24 bytes each)
//! BoneCount × Local       (4×4 f32, row-major)
//! BoneCount × Global      (4×4 f32, row-major)
//! Remap                   (4096 × u8)
//! ```
//!
//! ## Bone (24 bytes)
//! ```text
//! [0x00] Function  (u16)
//! [0x02] Parent    (u8)   - 255 = root
//! [0x03] Child     (u8)
//! [0x04] Radius    (f32)
//! [0x08] Length    (f32)
//! [0x0C] Tail      (3 × f32)
//! ```
//!
//! ## Remap
//! A byte `v != 255` at index `i` moves source bone `v` to output slot `i`.
//! Bones without an entry keep their own id. Skin bone indices and parent
//! links are both expressed in output ids.

use serde::Serialize;

use crate::cursor::ByteCursor;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::Result;

/// Parent value of a bone attached to the root.
pub const ROOT_PARENT: u8 = 255;
/// Number of slots in the remap table.
pub const REMAP_SLOTS: usize = 4096;
const LAST_SLOT: u16 = (REMAP_SLOTS - 1) as u16;
const UNUSED_SLOT: u8 = 255;

/// 4×4 matrix, column-major after loading.
pub type Matrix4 = [[f32; 4]; 4];

/// One decoded bone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoneRecord {
    /// Index in the bone table.
    pub id: usize,
    pub function: u16,
    /// Raw parent index, [`ROOT_PARENT`] for roots.
    pub parent: u8,
    pub child: u8,
    pub radius: f32,
    pub length: f32,
    pub tail: [f32; 3],
    /// Output id after remapping.
    pub remap: u16,
    /// Output id of the parent, [`None`] when attached to the root.
    pub parent_remap: Option<u16>,
    pub local: Matrix4,
    pub global: Matrix4,
}

impl BoneRecord {
    /// Stable bone name derived from the output id.
    pub fn name(&self) -> String {
        format!("bone_{:03}", self.remap)
    }
}

/// Bones plus the remap table that translates bone ids to output ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skeleton {
    pub bones: Vec<BoneRecord>,
    #[serde(skip)]
    remap_table: Vec<u16>,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            bones: Vec::new(),
            remap_table: identity_table(),
        }
    }
}

fn identity_table() -> Vec<u16> {
    (0..REMAP_SLOTS as u16).collect()
}

impl Skeleton {
    /// Read `count` bones and the trailing remap table from `r`.
    ///
    /// Parents that refer to a bone not yet defined are attached to the root
    /// and reported as [`Diagnostic::UnresolvedParent`].
    pub fn read(r: &mut ByteCursor, count: usize, sink: &mut dyn DiagnosticSink) -> Result<Self> {
        let mut bones = Vec::with_capacity(count);
        for id in 0..count {
            let function = r.u16()?;
            let parent = r.u8()?;
            let child = r.u8()?;
            let radius = r.f32()?;
            let length = r.f32()?;
            let tail = [r.f32()?, r.f32()?, r.f32()?];
            bones.push(BoneRecord {
                id,
                function,
                parent,
                child,
                radius,
                length,
                tail,
                remap: id as u16,
                parent_remap: None,
                local: [[0.0; 4]; 4],
                global: [[0.0; 4]; 4],
            });
        }
        for bone in &mut bones {
            bone.local = read_matrix(r)?;
        }
        for bone in &mut bones {
            bone.global = read_matrix(r)?;
        }

        let mut remap_table = identity_table();
        let slots = r.bytes(REMAP_SLOTS)?;
        for (slot, &source) in slots.iter().enumerate() {
            if source == UNUSED_SLOT {
                continue;
            }
            remap_table[source as usize] = slot as u16;
            if let Some(bone) = bones.get_mut(source as usize) {
                bone.remap = slot as u16;
            }
        }

        for id in 0..bones.len() {
            let parent = bones[id].parent;
            if parent == ROOT_PARENT {
                continue;
            }
            if (parent as usize) < id {
                bones[id].parent_remap = Some(bones[parent as usize].remap);
            } else {
                sink.report(Diagnostic::UnresolvedParent { bone: id, parent });
            }
        }

        Ok(Self { bones, remap_table })
    }

    /// Translate a bone id to its output id. Ids past the table clamp to
    /// the last slot, so every output id stays below [`REMAP_SLOTS`].
    pub fn remap(&self, id: usize) -> u16 {
        self.remap_table.get(id).copied().unwrap_or(LAST_SLOT)
    }

    /// The whole remap table, indexed by bone id.
    pub fn remap_table(&self) -> &[u16] {
        &self.remap_table
    }

    /// Output id of the parent of bone `id`, [`None`] for the root.
    pub fn parent_of(&self, id: usize) -> Option<u16> {
        self.bones.get(id).and_then(|b| b.parent_remap)
    }

    /// Diagonal of the first global matrix.
    pub fn scale(&self) -> Option<[f32; 3]> {
        self.bones
            .first()
            .map(|b| [b.global[0][0], b.global[1][1], b.global[2][2]])
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }
}

/// Read a row-major matrix and transpose it.
fn read_matrix(r: &mut ByteCursor) -> Result<Matrix4> {
    let mut m = [[0.0; 4]; 4];
    for row in 0..4 {
        for col in 0..4 {
            m[col][row] = r.f32()?;
        }
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bone(parent: u8) -> Vec<u8> {
        let mut b = Vec::new();
        b.extend_from_slice(&7u16.to_le_bytes());
        b.push(parent);
        b.push(0);
        for v in [0.5f32, 2.0, 1.0, 0.0, 0.0] {
            b.extend_from_slice(&v.to_le_bytes());
        }
        b
    }

    fn matrix(diag: f32) -> Vec<u8> {
        let mut b = Vec::new();
        for row in 0..4 {
            for col in 0..4 {
                let v = if row == col { diag } else if col == 3 { row as f32 } else { 0.0 };
                b.extend_from_slice(&v.to_le_bytes());
            }
        }
        b
    }

    fn skeleton_bytes(parents: &[u8], remap: &[(usize, u8)]) -> Vec<u8> {
        let mut data = Vec::new();
        for &p in parents {
            data.extend(bone(p));
        }
        for _ in parents {
            data.extend(matrix(1.0));
        }
        for i in 0..parents.len() {
            data.extend(matrix(3.0 + i as f32));
        }
        let mut slots = vec![UNUSED_SLOT; REMAP_SLOTS];
        for &(slot, source) in remap {
            slots[slot] = source;
        }
        data.extend(slots);
        data
    }

    #[test]
    fn remap_moves_only_listed_bones() {
        let data = skeleton_bytes(&[ROOT_PARENT, 0, 1], &[(10, 1), (11, 2)]);
        let mut sink: Vec<Diagnostic> = Vec::new();
        let sk = Skeleton::read(&mut ByteCursor::new(&data), 3, &mut sink).unwrap();
        assert!(sink.is_empty());

        let moved: Vec<_> = sk.bones.iter().filter(|b| b.remap as usize != b.id).collect();
        assert_eq!(moved.len(), 2);
        assert_eq!(sk.bones[0].remap, 0);
        assert_eq!(sk.bones[1].remap, 10);
        assert_eq!(sk.bones[2].name(), "bone_011");
        assert_eq!(sk.remap(2), 11);
        assert_eq!(sk.remap(200), 200);
        assert!(sk.remap_table().iter().all(|&id| (id as usize) < REMAP_SLOTS));
    }

    #[test]
    fn parents_resolve_through_remap() {
        let data = skeleton_bytes(&[ROOT_PARENT, 0, 1], &[(10, 1)]);
        let sk = Skeleton::read(&mut ByteCursor::new(&data), 3, &mut Vec::<Diagnostic>::new()).unwrap();
        assert_eq!(sk.parent_of(0), None);
        assert_eq!(sk.parent_of(1), Some(0));
        assert_eq!(sk.parent_of(2), Some(10));
    }

    #[test]
    fn forward_parent_attaches_to_root() {
        let data = skeleton_bytes(&[2, ROOT_PARENT, 1], &[]);
        let mut sink: Vec<Diagnostic> = Vec::new();
        let sk = Skeleton::read(&mut ByteCursor::new(&data), 3, &mut sink).unwrap();
        assert_eq!(sk.parent_of(0), None);
        assert_eq!(sink, vec![Diagnostic::UnresolvedParent { bone: 0, parent: 2 }]);
    }

    #[test]
    fn matrices_are_transposed_and_scale_read() {
        let data = skeleton_bytes(&[ROOT_PARENT, 0], &[]);
        let sk = Skeleton::read(&mut ByteCursor::new(&data), 2, &mut Vec::<Diagnostic>::new()).unwrap();
        // Row 1 column 3 on disk lands in column 3 row 1.
        assert_eq!(sk.bones[0].local[3][1], 1.0);
        assert_eq!(sk.bones[0].local[1][3], 0.0);
        assert_eq!(sk.scale(), Some([3.0, 3.0, 3.0]));
        assert_eq!(sk.bones[1].length, 2.0);
        assert_eq!(sk.bones[1].tail, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn truncated_remap_is_an_error() {
        let mut data = skeleton_bytes(&[ROOT_PARENT], &[]);
        data.truncate(data.len() - 1);
        assert!(Skeleton::read(&mut ByteCursor::new(&data), 1, &mut Vec::<Diagnostic>::new()).is_err());
    }

    #[test]
    fn empty_skeleton_is_identity() {
        let sk = Skeleton::default();
        assert!(sk.is_empty());
        assert_eq!(sk.scale(), None);
        assert_eq!(sk.remap(4095), 4095);
        assert_eq!(sk.remap(4096), 4095);
        assert_eq!(sk.remap(usize::MAX), 4095);
    }
}
