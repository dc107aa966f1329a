//! The line-oriented `key: value` model descriptor.

use std::collections::HashMap;

use super::error::DescriptorError;

/// What kind of model a descriptor declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelKind {
    /// A block model with face opacity masks.
    Block {
        /// Faces of neighbors this block hides.
        blocks: u8,
        /// Faces of this block that neighbors can hide.
        blockable: u8,
    },
    /// Any other model type, by name.
    Other(String),
}

impl ModelKind {
    /// The `(blocks, blockable)` masks for block models.
    pub fn opacity_masks(&self) -> Option<(u8, u8)> {
        match self {
            Self::Block { blocks, blockable } => Some((*blocks, *blockable)),
            Self::Other(_) => None,
        }
    }
}

/// A parsed model descriptor.
///
/// Paths are kept exactly as written; they are relative to the folder that
/// holds the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Path of the encoded mesh.
    pub mesh_path: String,
    /// Path of the texture image.
    pub texture_path: String,
    /// Model type and its metadata.
    pub kind: ModelKind,
}

impl ModelDescriptor {
    /// Parse a descriptor.
    ///
    /// Requires `type`, `mesh` and `texture`; a `block` type also requires
    /// `blocks` and `blockable` as `u8` values. Malformed lines are logged and
    /// skipped.
    ///
    /// ```
    /// use vmesh_core::model::{ModelDescriptor, ModelKind};
    ///
    /// let desc = ModelDescriptor::parse(
    ///     "type: block\nmesh: stone.vbmesh\ntexture: stone.png\nblocks: 63\nblockable: 63",
    /// )?;
    /// assert_eq!(desc.kind, ModelKind::Block { blocks: 63, blockable: 63 });
    /// # Ok::<(), vmesh_core::model::DescriptorError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self, DescriptorError> {
        let (entries, errors) = parse_key_values(text);
        for error in &errors {
            log::warn!("Skipping descriptor line: {error}");
        }

        let required = |key: &'static str| {
            entries
                .get(key)
                .cloned()
                .ok_or(DescriptorError::MissingKey(key))
        };

        // Every required key is checked before any value is parsed.
        let kind_name = required("type")?;
        let mesh_path = required("mesh")?;
        let masks = if kind_name == "block" {
            Some((required("blocks")?, required("blockable")?))
        } else {
            None
        };
        let texture_path = required("texture")?;

        let kind = match masks {
            Some((blocks, blockable)) => ModelKind::Block {
                blocks: parse_mask("blocks", blocks)?,
                blockable: parse_mask("blockable", blockable)?,
            },
            None => ModelKind::Other(kind_name),
        };

        Ok(Self {
            mesh_path,
            texture_path,
            kind,
        })
    }

    /// Parse a descriptor from raw bytes, which must be UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DescriptorError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| DescriptorError::Syntax(format!("not valid UTF-8: {e}")))?;
        Self::parse(text)
    }
}

fn parse_mask(key: &'static str, value: String) -> Result<u8, DescriptorError> {
    value
        .parse()
        .map_err(|_| DescriptorError::InvalidValue { key, value })
}

/// Split `text` into `key: value` pairs.
///
/// Lines are trimmed and blank lines skipped. Each remaining line is split at
/// its first `:`; key and value are trimmed and must both be non-empty. When
/// a key repeats, the first occurrence wins. Malformed lines are returned as
/// errors alongside the entries that did parse.
pub fn parse_key_values(text: &str) -> (HashMap<String, String>, Vec<DescriptorError>) {
    let mut entries = HashMap::new();
    let mut errors = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let pair = line
            .split_once(':')
            .map(|(k, v)| (k.trim(), v.trim()))
            .filter(|(k, v)| !k.is_empty() && !v.is_empty());
        match pair {
            Some((key, value)) => {
                entries
                    .entry(key.to_owned())
                    .or_insert_with(|| value.to_owned());
            }
            None => errors.push(DescriptorError::Syntax(format!(
                "can't have empty value: \"{line}\". Are you missing a colon?"
            ))),
        }
    }

    (entries, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_values() {
        let (entries, errors) =
            parse_key_values("  type: item \n\nmesh:a.vbmesh\nurl: http://x\nmesh: b.vbmesh\n");
        assert!(errors.is_empty());
        assert_eq!(entries["type"], "item");
        assert_eq!(entries["mesh"], "a.vbmesh");
        assert_eq!(entries["url"], "http://x");
    }

    #[test]
    fn test_key_values_reports_bad_lines() {
        let (entries, errors) = parse_key_values("novalue\nkey:\n: value\nok: yes");
        assert_eq!(errors.len(), 3);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_parse_other_kind() {
        let desc = ModelDescriptor::parse("type: prop\nmesh: m.vbmesh\ntexture: t.png").unwrap();
        assert_eq!(desc.kind, ModelKind::Other("prop".into()));
        assert_eq!(desc.mesh_path, "m.vbmesh");
        assert_eq!(desc.texture_path, "t.png");
        assert_eq!(desc.kind.opacity_masks(), None);
    }

    #[test]
    fn test_parse_block_kind() {
        let desc = ModelDescriptor::parse(
            "type: block\nmesh: m.vbmesh\ntexture: t.png\nblocks: 12\nblockable: 255",
        )
        .unwrap();
        assert_eq!(desc.kind.opacity_masks(), Some((12, 255)));
    }

    #[test]
    fn test_missing_keys() {
        assert_eq!(
            ModelDescriptor::parse("mesh: m.vbmesh\ntexture: t.png"),
            Err(DescriptorError::MissingKey("type"))
        );
        assert_eq!(
            ModelDescriptor::parse("type: block\nmesh: m.vbmesh\ntexture: t.png\nblocks: 1"),
            Err(DescriptorError::MissingKey("blockable"))
        );
        assert_eq!(
            ModelDescriptor::parse("type: prop\nmesh: m.vbmesh"),
            Err(DescriptorError::MissingKey("texture"))
        );
    }

    #[test]
    fn test_invalid_mask() {
        assert_eq!(
            ModelDescriptor::parse(
                "type: block\nmesh: m.vbmesh\ntexture: t.png\nblocks: 256\nblockable: 1"
            ),
            Err(DescriptorError::InvalidValue {
                key: "blocks",
                value: "256".into()
            })
        );
    }

    #[test]
    fn test_missing_texture_reported_before_bad_mask() {
        assert_eq!(
            ModelDescriptor::parse("type: block\nmesh: m.vbmesh\nblocks: 256\nblockable: 1"),
            Err(DescriptorError::MissingKey("texture"))
        );
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        assert!(matches!(
            ModelDescriptor::from_bytes(&[0xff, 0xfe]),
            Err(DescriptorError::Syntax(_))
        ));
    }
}
