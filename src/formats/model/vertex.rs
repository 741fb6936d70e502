//! Vertex buffer layouts.
//!
//! Every mesh names its vertex layout with a 32-bit encoding tag. Each tag
//! selects one fixed record layout; the same record is read as `f32`, `f16`,
//! `i16`, `u8` and `i8` fields at fixed byte offsets.
//!
//! | Field | Storage | Decode |
//! |-------|---------|--------|
//! | position | 3 × `f32` | as is |
//! | position | 3 × `i16` | `q / 32768 × scale + bbox_min` |
//! | normal | 3 × `i8` | `n / 127` |
//! | uv | 2 × `f16` | `(u, 1 − v)` |
//! | color | 4 × `u8` | RGBA |
//! | bone ids | `u8` or `f16` holding an integer | through the skeleton remap table |
//! | weights | `i16` / `u8` / `f16` | see below |
//!
//! ## Weights
//! Single-influence layouts have an implicit weight of 1. The others store
//! all but the last influence: an `i16` first weight (`/ 32767`), optionally
//! four `u8` weights (`/ 255`), optionally two `f16` weights, and the last
//! weight is always `1 − Σ stored`.
//!
//! ## Known layouts
//!
//! | Tag | Variant | Stride | Position | Influences | UV sets | Color | Normal |
//! |-----|---------|--------|----------|------------|---------|-------|--------|
//! | `0xD8297027` | [`StaticNormal`](VertexEncoding::StaticNormal) | block | f32 | - | 1 | no | yes |
//! | `0x207D6036` | [`StaticColor`](VertexEncoding::StaticColor) | block | f32 | - | 1 | yes | no |
//! | `0xA7D7D035` | [`StaticUv`](VertexEncoding::StaticUv) | block | f32 | - | 1 | no | no |
//! | `0x49B4F028` | [`StaticNormalColor`](VertexEncoding::StaticNormalColor) | block | f32 | - | 1 | yes | yes |
//! | `0xCBF6C019` | [`Skin1`](VertexEncoding::Skin1) | block | i16 | 1 | 1 | yes | yes |
//! | `0xA8FAB017` | [`Skin1Ex`](VertexEncoding::Skin1Ex) | block | i16 | 1 | 1 | yes | yes |
//! | `0xD877801A` | [`Skin1Uv2`](VertexEncoding::Skin1Uv2) | block | i16 | 1 | 2 | yes | yes |
//! | `0x667B1018` | [`Skin1Uv2Packed`](VertexEncoding::Skin1Uv2Packed) | block | i16 | 1 | 2 | yes | yes |
//! | `0xA013501D` | [`Skin2`](VertexEncoding::Skin2) | block | i16 | 2 | 1 | yes | yes |
//! | `0xC31F201B` | [`Skin2Ex`](VertexEncoding::Skin2Ex) | block | i16 | 2 | 1 | yes | yes |
//! | `0xB392101E` | [`Skin2Uv2`](VertexEncoding::Skin2Uv2) | block | i16 | 2 | 2 | yes | yes |
//! | `0x77D87021` | [`Skin4`](VertexEncoding::Skin4) | block | i16 | 4 | 1 | yes | yes |
//! | `0x14D4001F` | [`Skin4Fixed`](VertexEncoding::Skin4Fixed) | 28 | i16 | 4 | 1 | yes | yes |
//! | `0xDA55A020` | [`Skin4Uv2`](VertexEncoding::Skin4Uv2) | block | i16 | 4 | 2 | yes | yes |
//! | `0x64593022` | [`Skin4Uv2Wide`](VertexEncoding::Skin4Uv2Wide) | block | i16 | 4 | 2 | yes | yes |
//! | `0xCBCF7026` | [`Skin8`](VertexEncoding::Skin8) | block | i16 | 8 | 1 | no | yes |
//! | `0xBB424023` | [`Skin8Color`](VertexEncoding::Skin8Color) | 36 | i16 | 8 | 1 | yes | yes |
//!
//! Tags in [`NON_GEOMETRY_TAGS`] are recognised but carry nothing to decode.

use half::f16;
use serde::Serialize;

use super::skeleton::Skeleton;
use crate::{Error, Result};

/// Encodings used by meshes that carry no decodable geometry.
pub const NON_GEOMETRY_TAGS: [u32; 4] = [0xA320_C015, 0x0CB6_8014, 0xDB7D_A013, 0xB098_3012];

/// Closed set of supported vertex layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VertexEncoding {
    StaticNormal,
    StaticColor,
    StaticUv,
    StaticNormalColor,
    Skin1,
    Skin1Ex,
    Skin1Uv2,
    Skin1Uv2Packed,
    Skin2,
    Skin2Ex,
    Skin2Uv2,
    Skin4,
    Skin4Fixed,
    Skin4Uv2,
    Skin4Uv2Wide,
    Skin8,
    Skin8Color,
}

impl VertexEncoding {
    /// Every supported encoding.
    pub const ALL: [VertexEncoding; 17] = [
        Self::StaticNormal,
        Self::StaticColor,
        Self::StaticUv,
        Self::StaticNormalColor,
        Self::Skin1,
        Self::Skin1Ex,
        Self::Skin1Uv2,
        Self::Skin1Uv2Packed,
        Self::Skin2,
        Self::Skin2Ex,
        Self::Skin2Uv2,
        Self::Skin4,
        Self::Skin4Fixed,
        Self::Skin4Uv2,
        Self::Skin4Uv2Wide,
        Self::Skin8,
        Self::Skin8Color,
    ];

    /// Look up the encoding for an exact tag.
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.tag() == tag)
    }

    /// The on-disk tag.
    pub fn tag(self) -> u32 {
        match self {
            Self::StaticNormal => 0xD829_7027,
            Self::StaticColor => 0x207D_6036,
            Self::StaticUv => 0xA7D7_D035,
            Self::StaticNormalColor => 0x49B4_F028,
            Self::Skin1 => 0xCBF6_C019,
            Self::Skin1Ex => 0xA8FA_B017,
            Self::Skin1Uv2 => 0xD877_801A,
            Self::Skin1Uv2Packed => 0x667B_1018,
            Self::Skin2 => 0xA013_501D,
            Self::Skin2Ex => 0xC31F_201B,
            Self::Skin2Uv2 => 0xB392_101E,
            Self::Skin4 => 0x77D8_7021,
            Self::Skin4Fixed => 0x14D4_001F,
            Self::Skin4Uv2 => 0xDA55_A020,
            Self::Skin4Uv2Wide => 0x6459_3022,
            Self::Skin8 => 0xCBCF_7026,
            Self::Skin8Color => 0xBB42_4023,
        }
    }

    /// Field layout of one vertex record.
    pub fn layout(self) -> &'static VertexLayout {
        match self {
            Self::StaticNormal => &STATIC_NORMAL,
            Self::StaticColor => &STATIC_COLOR,
            Self::StaticUv => &STATIC_UV,
            Self::StaticNormalColor => &STATIC_NORMAL_COLOR,
            Self::Skin1 | Self::Skin1Ex => &SKIN1,
            Self::Skin1Uv2 => &SKIN1_UV2,
            Self::Skin1Uv2Packed => &SKIN1_UV2_PACKED,
            Self::Skin2 | Self::Skin2Ex => &SKIN2,
            Self::Skin2Uv2 => &SKIN2_UV2,
            Self::Skin4 => &SKIN4,
            Self::Skin4Fixed => &SKIN4_FIXED,
            Self::Skin4Uv2 => &SKIN4_UV2,
            Self::Skin4Uv2Wide => &SKIN4_UV2_WIDE,
            Self::Skin8 => &SKIN8,
            Self::Skin8Color => &SKIN8_COLOR,
        }
    }
}

/// How positions are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFormat {
    /// Three `f32` at offset 0.
    Float,
    /// Three `i16` at offset 0, relative to the model bounding box.
    Quantized,
}

/// How bone ids are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneIds {
    /// `count` bytes at `offset`.
    Bytes { offset: usize, count: usize },
    /// `count` halfs at `offset`, each holding an integral value.
    Half { offset: usize, count: usize },
}

impl BoneIds {
    pub fn count(self) -> usize {
        match self {
            BoneIds::Bytes { count, .. } | BoneIds::Half { count, .. } => count,
        }
    }
}

/// How skin weights are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weights {
    None,
    /// One influence with weight 1.
    Single,
    /// Stored weights in this order; one more weight completes the sum.
    Stored {
        /// `i16` normalised by 32767.
        short: usize,
        /// `(offset, count)` bytes normalised by 255.
        unorm8: Option<(usize, usize)>,
        /// `(offset, count)` halfs.
        half: Option<(usize, usize)>,
    },
}

/// Byte offsets of every attribute inside one vertex record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Record size; [`None`] means the mesh descriptor's block size.
    pub stride: Option<usize>,
    pub position: PositionFormat,
    pub normal: Option<usize>,
    pub uv: [Option<usize>; 2],
    pub color: Option<usize>,
    pub bones: Option<BoneIds>,
    pub weights: Weights,
}

impl VertexLayout {
    /// Smallest record that holds every field of the layout.
    pub fn min_stride(&self) -> usize {
        let mut end = match self.position {
            PositionFormat::Float => 12,
            PositionFormat::Quantized => 6,
        };
        let mut fit = |offset: usize, size: usize| end = end.max(offset + size);
        if let Some(o) = self.normal {
            fit(o, 3);
        }
        for o in self.uv.into_iter().flatten() {
            fit(o, 4);
        }
        if let Some(o) = self.color {
            fit(o, 4);
        }
        match self.bones {
            Some(BoneIds::Bytes { offset, count }) => fit(offset, count),
            Some(BoneIds::Half { offset, count }) => fit(offset, count * 2),
            None => {}
        }
        if let Weights::Stored {
            short,
            unorm8,
            half,
        } = self.weights
        {
            fit(short, 2);
            if let Some((o, n)) = unorm8 {
                fit(o, n);
            }
            if let Some((o, n)) = half {
                fit(o, n * 2);
            }
        }
        end
    }

    /// Number of influences per vertex (0 for static layouts).
    pub fn influences(&self) -> usize {
        match self.weights {
            Weights::None => 0,
            Weights::Single => 1,
            Weights::Stored { unorm8, half, .. } => {
                2 + unorm8.map_or(0, |(_, n)| n) + half.map_or(0, |(_, n)| n)
            }
        }
    }
}

const STATIC_NORMAL: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Float,
    normal: Some(12),
    uv: [Some(20), None],
    color: None,
    bones: None,
    weights: Weights::None,
};

const STATIC_COLOR: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Float,
    normal: None,
    uv: [Some(16), None],
    color: Some(20),
    bones: None,
    weights: Weights::None,
};

const STATIC_UV: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Float,
    normal: None,
    uv: [Some(16), None],
    color: None,
    bones: None,
    weights: Weights::None,
};

const STATIC_NORMAL_COLOR: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Float,
    normal: Some(12),
    uv: [Some(20), None],
    color: Some(24),
    bones: None,
    weights: Weights::None,
};

const SKIN1: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Quantized,
    normal: Some(8),
    uv: [Some(16), None],
    color: Some(12),
    bones: Some(BoneIds::Bytes { offset: 6, count: 1 }),
    weights: Weights::Single,
};

const SKIN1_UV2: VertexLayout = VertexLayout {
    uv: [Some(16), Some(24)],
    ..SKIN1
};

const SKIN1_UV2_PACKED: VertexLayout = VertexLayout {
    uv: [Some(16), Some(20)],
    ..SKIN1
};

const SKIN2: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Quantized,
    normal: Some(8),
    uv: [Some(16), None],
    color: Some(12),
    bones: Some(BoneIds::Half { offset: 20, count: 2 }),
    weights: Weights::Stored {
        short: 6,
        unorm8: None,
        half: None,
    },
};

const SKIN2_UV2: VertexLayout = VertexLayout {
    uv: [Some(20), Some(24)],
    bones: Some(BoneIds::Half { offset: 16, count: 2 }),
    ..SKIN2
};

const SKIN4: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Quantized,
    normal: Some(8),
    uv: [Some(20), None],
    color: Some(12),
    bones: Some(BoneIds::Bytes { offset: 16, count: 4 }),
    weights: Weights::Stored {
        short: 6,
        unorm8: None,
        half: Some((24, 2)),
    },
};

const SKIN4_FIXED: VertexLayout = VertexLayout {
    stride: Some(28),
    ..SKIN4
};

const SKIN4_UV2: VertexLayout = VertexLayout {
    uv: [Some(20), Some(28)],
    ..SKIN4
};

const SKIN4_UV2_WIDE: VertexLayout = VertexLayout {
    uv: [Some(20), Some(32)],
    ..SKIN4
};

const SKIN8: VertexLayout = VertexLayout {
    stride: None,
    position: PositionFormat::Quantized,
    normal: Some(8),
    uv: [Some(24), None],
    color: None,
    bones: Some(BoneIds::Bytes { offset: 16, count: 8 }),
    weights: Weights::Stored {
        short: 6,
        unorm8: Some((12, 4)),
        half: Some((28, 2)),
    },
};

const SKIN8_COLOR: VertexLayout = VertexLayout {
    stride: Some(36),
    color: Some(32),
    ..SKIN8
};

/// Maps quantized positions back to model space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionDecode {
    pub scale: f32,
    pub offset: [f32; 3],
}

/// Per-vertex skin influences stored flat, `influences` entries per vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Skin {
    pub influences: usize,
    /// Output (remapped) bone ids.
    pub bone_ids: Vec<u16>,
    pub weights: Vec<f32>,
}

impl Skin {
    /// Bone ids and weights of vertex `i`.
    pub fn vertex(&self, i: usize) -> (&[u16], &[f32]) {
        let range = i * self.influences..(i + 1) * self.influences;
        (&self.bone_ids[range.clone()], &self.weights[range])
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.bone_ids.len().checked_div(self.influences).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Every attribute of every vertex in a mesh's buffer slice, before faces
/// select the ones actually used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexStream {
    pub positions: Vec<[f32; 3]>,
    pub normals: Option<Vec<[f32; 3]>>,
    pub uv0: Option<Vec<[f32; 2]>>,
    pub uv1: Option<Vec<[f32; 2]>>,
    pub colors: Option<Vec<[u8; 4]>>,
    pub skin: Option<Skin>,
}

impl VertexStream {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Decode the records in `bytes` with `layout`.
///
/// `block_size` is the descriptor's stride, used unless the layout fixes its
/// own. Trailing bytes that do not fill a record are ignored.
pub fn decode_vertices(
    bytes: &[u8],
    layout: &VertexLayout,
    block_size: usize,
    position: PositionDecode,
    skeleton: &Skeleton,
) -> Result<VertexStream> {
    let stride = layout.stride.unwrap_or(block_size);
    if stride == 0 || stride < layout.min_stride() {
        return Err(Error::InvalidRange("vertex block smaller than its layout"));
    }
    let count = bytes.len() / stride;
    let records = bytes.chunks_exact(stride);

    let mut out = VertexStream {
        positions: Vec::with_capacity(count),
        normals: layout.normal.map(|_| Vec::with_capacity(count)),
        uv0: layout.uv[0].map(|_| Vec::with_capacity(count)),
        uv1: layout.uv[1].map(|_| Vec::with_capacity(count)),
        colors: layout.color.map(|_| Vec::with_capacity(count)),
        skin: layout.bones.map(|_| Skin {
            influences: layout.influences(),
            bone_ids: Vec::with_capacity(count * layout.influences()),
            weights: Vec::with_capacity(count * layout.influences()),
        }),
    };

    for rec in records {
        out.positions.push(match layout.position {
            PositionFormat::Float => [f32_at(rec, 0), f32_at(rec, 4), f32_at(rec, 8)],
            PositionFormat::Quantized => {
                let q = |o: usize| i16_at(rec, o) as f32 / 32768.0 * position.scale;
                [
                    q(0) + position.offset[0],
                    q(2) + position.offset[1],
                    q(4) + position.offset[2],
                ]
            }
        });
        if let (Some(o), Some(normals)) = (layout.normal, out.normals.as_mut()) {
            normals.push([0, 1, 2].map(|i| rec[o + i] as i8 as f32 / 127.0));
        }
        if let (Some(o), Some(uv)) = (layout.uv[0], out.uv0.as_mut()) {
            uv.push(uv_at(rec, o));
        }
        if let (Some(o), Some(uv)) = (layout.uv[1], out.uv1.as_mut()) {
            uv.push(uv_at(rec, o));
        }
        if let (Some(o), Some(colors)) = (layout.color, out.colors.as_mut()) {
            colors.push([rec[o], rec[o + 1], rec[o + 2], rec[o + 3]]);
        }
        if let (Some(bones), Some(skin)) = (layout.bones, out.skin.as_mut()) {
            read_influences(rec, bones, layout.weights, skeleton, skin);
        }
    }
    Ok(out)
}

fn read_influences(rec: &[u8], bones: BoneIds, weights: Weights, skeleton: &Skeleton, skin: &mut Skin) {
    match bones {
        BoneIds::Bytes { offset, count } => {
            for i in 0..count {
                skin.bone_ids.push(skeleton.remap(rec[offset + i] as usize));
            }
        }
        BoneIds::Half { offset, count } => {
            for i in 0..count {
                // The half holds an integral bone id.
                let id = f16_at(rec, offset + 2 * i) as usize;
                skin.bone_ids.push(skeleton.remap(id));
            }
        }
    }
    match weights {
        Weights::None => skin.weights.extend(std::iter::repeat_n(0.0, skin.influences)),
        Weights::Single => skin.weights.extend(std::iter::repeat_n(1.0, skin.influences)),
        Weights::Stored {
            short,
            unorm8,
            half,
        } => {
            let start = skin.weights.len();
            skin.weights.push(i16_at(rec, short) as f32 / 32767.0);
            if let Some((o, n)) = unorm8 {
                skin.weights.extend((0..n).map(|i| rec[o + i] as f32 / 255.0));
            }
            if let Some((o, n)) = half {
                skin.weights.extend((0..n).map(|i| f16_at(rec, o + 2 * i)));
            }
            let stored: f32 = skin.weights[start..].iter().sum();
            skin.weights.push(1.0 - stored);
        }
    }
}

#[inline]
fn array_at<const N: usize>(rec: &[u8], offset: usize) -> [u8; N] {
    let mut b = [0u8; N];
    b.copy_from_slice(&rec[offset..offset + N]);
    b
}

#[inline]
fn f32_at(rec: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(array_at(rec, offset))
}

#[inline]
fn f16_at(rec: &[u8], offset: usize) -> f32 {
    f16::from_le_bytes(array_at(rec, offset)).to_f32()
}

#[inline]
fn i16_at(rec: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes(array_at(rec, offset))
}

#[inline]
fn uv_at(rec: &[u8], offset: usize) -> [f32; 2] {
    [f16_at(rec, offset), 1.0 - f16_at(rec, offset + 2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: PositionDecode = PositionDecode {
        scale: 1.0,
        offset: [0.0; 3],
    };

    fn half(v: f32) -> [u8; 2] {
        f16::from_f32(v).to_le_bytes()
    }

    #[test]
    fn tags_are_unique_and_round_trip() {
        for e in VertexEncoding::ALL {
            assert_eq!(VertexEncoding::from_tag(e.tag()), Some(e));
            assert!(!NON_GEOMETRY_TAGS.contains(&e.tag()));
        }
        assert_eq!(VertexEncoding::from_tag(0xDEAD_BEEF), None);
    }

    #[test]
    fn fixed_strides_hold_their_layouts() {
        for e in VertexEncoding::ALL {
            let layout = e.layout();
            if let Some(stride) = layout.stride {
                assert!(layout.min_stride() <= stride, "{e:?}");
            }
            assert_eq!(layout.bones.map_or(0, BoneIds::count), layout.influences(), "{e:?}");
        }
        assert_eq!(VertexEncoding::Skin8.layout().influences(), 8);
        assert_eq!(VertexEncoding::Skin4.layout().influences(), 4);
        assert_eq!(VertexEncoding::Skin2.layout().influences(), 2);
        assert_eq!(VertexEncoding::Skin1.layout().influences(), 1);
    }

    #[test]
    fn static_float_layout() {
        let mut rec = [0u8; 24];
        rec[0..4].copy_from_slice(&1.5f32.to_le_bytes());
        rec[4..8].copy_from_slice(&(-2.0f32).to_le_bytes());
        rec[8..12].copy_from_slice(&0.25f32.to_le_bytes());
        rec[12..15].copy_from_slice(&[127, 0x81, 0]);
        rec[20..22].copy_from_slice(&half(0.5));
        rec[22..24].copy_from_slice(&half(0.25));

        let layout = VertexEncoding::StaticNormal.layout();
        let v = decode_vertices(&rec, layout, 24, UNIT, &Skeleton::default()).unwrap();
        assert_eq!(v.positions, vec![[1.5, -2.0, 0.25]]);
        assert_eq!(v.normals.unwrap(), vec![[1.0, -1.0, 0.0]]);
        assert_eq!(v.uv0.unwrap(), vec![[0.5, 0.75]]);
        assert!(v.skin.is_none());
        assert!(v.colors.is_none());
    }

    #[test]
    fn quantized_positions_use_bbox() {
        let mut rec = [0u8; 24];
        rec[0..2].copy_from_slice(&16384i16.to_le_bytes());
        rec[2..4].copy_from_slice(&(-32768i16).to_le_bytes());
        let decode = PositionDecode {
            scale: 10.0,
            offset: [1.0, 2.0, 3.0],
        };
        let v = decode_vertices(&rec, VertexEncoding::Skin1.layout(), 24, decode, &Skeleton::default())
            .unwrap();
        assert_eq!(v.positions, vec![[6.0, -8.0, 3.0]]);
    }

    #[test]
    fn eight_influences_sum_to_one() {
        let mut rec = [0u8; 36];
        rec[6..8].copy_from_slice(&((0.3f32 * 32767.0) as i16).to_le_bytes());
        rec[12..16].copy_from_slice(&[25, 25, 13, 0]);
        rec[16..24].copy_from_slice(&[0, 1, 2, 3, 4, 5, 6, 7]);
        rec[28..30].copy_from_slice(&half(0.125));
        rec[30..32].copy_from_slice(&half(0.0625));
        rec[32..36].copy_from_slice(&[1, 2, 3, 4]);

        let v = decode_vertices(&rec, VertexEncoding::Skin8Color.layout(), 0, UNIT, &Skeleton::default())
            .unwrap();
        let skin = v.skin.unwrap();
        let (ids, weights) = skin.vertex(0);
        assert_eq!(ids, &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(weights.len(), 8);
        assert!((weights.iter().sum::<f32>() - 1.0).abs() < 1e-4);
        assert!((weights[0] - 0.3).abs() < 1e-4);
        assert!((weights[5] - 0.125).abs() < 1e-6);
        assert_eq!(v.colors.unwrap(), vec![[1, 2, 3, 4]]);
    }

    #[test]
    fn half_bone_ids_and_two_weights() {
        let mut rec = [0u8; 24];
        rec[6..8].copy_from_slice(&((0.75f32 * 32767.0) as i16).to_le_bytes());
        rec[20..22].copy_from_slice(&half(3.0));
        rec[22..24].copy_from_slice(&half(17.0));

        let v = decode_vertices(&rec, VertexEncoding::Skin2.layout(), 24, UNIT, &Skeleton::default())
            .unwrap();
        let skin = v.skin.unwrap();
        let (ids, weights) = skin.vertex(0);
        assert_eq!(ids, &[3, 17]);
        assert!((weights[0] - 0.75).abs() < 1e-4);
        assert!((weights[0] + weights[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn oversized_half_bone_ids_stay_in_the_table() {
        let mut rec = [0u8; 24];
        rec[20..22].copy_from_slice(&half(5000.0));
        rec[22..24].copy_from_slice(&half(f32::INFINITY));

        let v = decode_vertices(&rec, VertexEncoding::Skin2.layout(), 24, UNIT, &Skeleton::default())
            .unwrap();
        let skin = v.skin.unwrap();
        assert_eq!(skin.vertex(0).0, &[4095, 4095]);
    }

    #[test]
    fn single_influence_weight_is_one() {
        let mut rec = [0u8; 20];
        rec[6] = 9;
        let v = decode_vertices(&rec, VertexEncoding::Skin1.layout(), 20, UNIT, &Skeleton::default())
            .unwrap();
        let skin = v.skin.unwrap();
        assert_eq!(skin.vertex(0), (&[9u16][..], &[1.0f32][..]));
    }

    #[test]
    fn undersized_block_is_rejected() {
        let rec = [0u8; 64];
        assert!(matches!(
            decode_vertices(&rec, VertexEncoding::Skin4Uv2.layout(), 16, UNIT, &Skeleton::default()),
            Err(Error::InvalidRange(_))
        ));
        assert!(decode_vertices(&rec, VertexEncoding::StaticUv.layout(), 0, UNIT, &Skeleton::default()).is_err());
    }
}
