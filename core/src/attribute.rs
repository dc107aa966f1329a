//! Vertex attribute kinds and the ordered schema built from them.
//!
//! A vertex is a flat run of `f32`s. The [`AttributeSchema`] says how that
//! run is split: each [`AttributeKind`] contributes a fixed number of floats,
//! in schema order.

use std::ops::Index;
use std::sync::Arc;

use crate::error::FormatError;

/// Semantic role of a contiguous float run within a vertex.
///
/// The discriminants are the on-disk codes. Every code taken modulo 5 equals
/// the kind's float width; the codec relies on this for compatibility, but
/// widths are always read through [`AttributeKind::width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AttributeKind {
    /// Generic single float.
    Scalar = 1,
    /// Generic 2-component vector.
    Vec2 = 2,
    /// Generic 3-component vector.
    Vec3 = 3,
    /// Generic 4-component vector.
    Vec4 = 4,
    /// Texture coordinates (u, v).
    TextureCoords = 7,
    /// Position (x, y, z).
    Position = 8,
    /// Color with alpha (r, g, b, a).
    RgbaColor = 9,
    /// Normal (x, y, z).
    Normal = 13,
    /// Color without alpha (r, g, b).
    RgbColor = 18,
}

impl AttributeKind {
    /// Every attribute kind, in code order.
    pub const ALL: [AttributeKind; 9] = [
        Self::Scalar,
        Self::Vec2,
        Self::Vec3,
        Self::Vec4,
        Self::TextureCoords,
        Self::Position,
        Self::RgbaColor,
        Self::Normal,
        Self::RgbColor,
    ];

    /// The on-disk code of this kind.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Number of floats this kind contributes to a vertex.
    pub const fn width(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 | Self::TextureCoords => 2,
            Self::Vec3 | Self::Position | Self::Normal | Self::RgbColor => 3,
            Self::Vec4 | Self::RgbaColor => 4,
        }
    }

    /// Look up a kind by its on-disk code.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Scalar),
            2 => Some(Self::Vec2),
            3 => Some(Self::Vec3),
            4 => Some(Self::Vec4),
            7 => Some(Self::TextureCoords),
            8 => Some(Self::Position),
            9 => Some(Self::RgbaColor),
            13 => Some(Self::Normal),
            18 => Some(Self::RgbColor),
            _ => None,
        }
    }
}

const fn widths_match_codes() -> bool {
    let mut i = 0;
    while i < AttributeKind::ALL.len() {
        let kind = AttributeKind::ALL[i];
        if kind.code() % 5 != kind.width() as u32 {
            return false;
        }
        i += 1;
    }
    true
}

static_assertions::const_assert!(widths_match_codes());

/// Ordered, immutable list of attribute kinds defining a vertex layout.
///
/// Cloning is cheap: the kind list is shared. Equality is structural and
/// order sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSchema {
    kinds: Arc<[AttributeKind]>,
    total_floats: usize,
}

impl AttributeSchema {
    /// Create a schema from kinds in vertex order.
    pub fn new(kinds: impl Into<Vec<AttributeKind>>) -> Self {
        let kinds: Arc<[AttributeKind]> = kinds.into().into();
        let total_floats = kinds.iter().map(|k| k.width()).sum();
        Self {
            kinds,
            total_floats,
        }
    }

    /// Build a schema from on-disk attribute codes.
    pub fn from_codes(codes: &[u32]) -> Result<Self, FormatError> {
        let kinds = codes
            .iter()
            .map(|&code| AttributeKind::from_code(code).ok_or(FormatError::UnknownAttribute(code)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(kinds))
    }

    /// Position only (3 floats).
    pub fn position_only() -> Self {
        Self::new([AttributeKind::Position])
    }

    /// Position, normal and texture coordinates (8 floats).
    pub fn position_normal_uv() -> Self {
        Self::new([
            AttributeKind::Position,
            AttributeKind::Normal,
            AttributeKind::TextureCoords,
        ])
    }

    /// Position and RGBA color (7 floats).
    pub fn position_color() -> Self {
        Self::new([AttributeKind::Position, AttributeKind::RgbaColor])
    }

    /// Floats per vertex: the sum of every kind's width.
    pub fn total_floats(&self) -> usize {
        self.total_floats
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the schema has no attributes.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Attribute at `index`, if any.
    pub fn get(&self, index: usize) -> Option<AttributeKind> {
        self.kinds.get(index).copied()
    }

    /// Iterate over the kinds in vertex order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = AttributeKind> + '_ {
        self.kinds.iter().copied()
    }

    /// The kinds as a slice.
    pub fn kinds(&self) -> &[AttributeKind] {
        &self.kinds
    }

    /// On-disk codes in vertex order.
    pub fn codes(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.iter().map(AttributeKind::code)
    }

    /// Float offset of attribute `index` within a vertex.
    pub fn float_offset(&self, index: usize) -> Option<usize> {
        (index < self.kinds.len()).then(|| self.kinds[..index].iter().map(|k| k.width()).sum())
    }
}

impl Index<usize> for AttributeSchema {
    type Output = AttributeKind;

    fn index(&self, index: usize) -> &AttributeKind {
        &self.kinds[index]
    }
}

impl From<&[AttributeKind]> for AttributeSchema {
    fn from(kinds: &[AttributeKind]) -> Self {
        Self::new(kinds.to_vec())
    }
}

static_assertions::assert_impl_all!(AttributeSchema: Send, Sync);
