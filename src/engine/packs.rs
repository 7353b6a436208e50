//! engine::packs
//!
//! Insertion-ordered pack storage keyed by pack id.

use crate::core::types::FontPack;

/// Packs keyed by id, iterated in insertion order.
///
/// Replacing a pack keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct PackMap {
    packs: Vec<FontPack>,
}

impl PackMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a pack, returning the replaced one.
    pub fn insert(&mut self, pack: FontPack) -> Option<FontPack> {
        match self.position(&pack.id) {
            Some(index) => Some(std::mem::replace(&mut self.packs[index], pack)),
            None => {
                self.packs.push(pack);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&FontPack> {
        self.packs.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Remove a pack, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<FontPack> {
        self.position(id).map(|index| self.packs.remove(index))
    }

    pub fn clear(&mut self) {
        self.packs.clear();
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// All packs in insertion order.
    pub fn as_slice(&self) -> &[FontPack] {
        &self.packs
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontPack> {
        self.packs.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.packs.iter().position(|p| p.id == id)
    }
}
