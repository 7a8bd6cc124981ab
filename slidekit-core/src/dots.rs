//! Dot indicator identity to slide index mapping, built once at mount.

use std::collections::HashMap;

use slidekit_model::DotId;

use crate::error::GalleryError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotMap {
    ids: Vec<DotId>,
    index: HashMap<DotId, usize>,
}

impl DotMap {
    /// Map with no indicators, used when dots are disabled.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the mapping from the ids the host returned, in slide order.
    pub fn from_ids(ids: Vec<DotId>, size: usize) -> Result<Self, GalleryError> {
        if ids.len() != size {
            return Err(GalleryError::DotCountMismatch {
                built: ids.len(),
                slides: size,
            });
        }
        let mut index = HashMap::with_capacity(ids.len());
        for (slide, id) in ids.iter().enumerate() {
            if index.insert(*id, slide).is_some() {
                return Err(GalleryError::DuplicateDot(*id));
            }
        }
        Ok(Self { ids, index })
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn index_of(&self, id: DotId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn id_at(&self, slide: usize) -> Option<DotId> {
        self.ids.get(slide).copied()
    }
}
