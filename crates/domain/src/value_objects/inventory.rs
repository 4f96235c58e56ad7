use serde::{Deserialize, Serialize};

use super::choice::ChoiceSource;
use crate::ids::ItemId;

/// One line of a compiled inventory.
///
/// Entries are never merged: two grants of the same item stay two entries so
/// each can be traced to where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub item: ItemId,
    pub quantity: u32,
    pub source: ChoiceSource,
    /// The pack this entry was unpacked from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack: Option<ItemId>,
}

impl InventoryEntry {
    pub fn new(item: ItemId, quantity: u32, source: ChoiceSource) -> Self {
        Self {
            item,
            quantity,
            source,
            pack: None,
        }
    }

    pub fn from_pack(mut self, pack: ItemId) -> Self {
        self.pack = Some(pack);
        self
    }
}
