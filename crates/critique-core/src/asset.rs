use bytes::Bytes;

use crate::ids::AssetId;

/// A user-supplied image queued for analysis. Owned by a single run; the
/// bytes are whatever the client sent (PNG, JPEG, ...) and are normalized
/// to PNG during conversion.
#[derive(Clone)]
pub struct DesignAsset {
    pub id: AssetId,
    /// Client-supplied name, used in error messages when conversion fails.
    pub name: String,
    pub bytes: Bytes,
}

impl DesignAsset {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            id: AssetId::new(),
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl std::fmt::Debug for DesignAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignAsset")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
