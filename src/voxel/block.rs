//! Block type registry

use std::collections::HashMap;

/// Numeric block id as stored in sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: Self = Self(0);
}

/// A registered block type
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockInfo {
    pub id: BlockId,
    /// Namespaced name, e.g. `minecraft:stone`
    pub name: String,
}

/// Name <-> id lookup for block types
#[derive(Clone, Debug)]
pub struct BlockTypes {
    by_id: HashMap<BlockId, BlockInfo>,
    by_name: HashMap<String, BlockId>,
}

impl BlockTypes {
    /// Create an empty registry containing only air
    pub fn new() -> Self {
        let mut types = Self {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        };
        types.register(BlockId::AIR, "minecraft:air");
        types
    }

    /// Register a block type, replacing any previous entry with the same id
    pub fn register(&mut self, id: BlockId, name: impl Into<String>) -> BlockInfo {
        let info = BlockInfo { id, name: name.into() };
        if let Some(old) = self.by_id.insert(id, info.clone()) {
            self.by_name.remove(&old.name);
        }
        self.by_name.insert(info.name.clone(), id);
        info
    }

    /// Look up a block type by name
    pub fn get(&self, name: &str) -> Option<BlockInfo> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id)).cloned()
    }

    /// Look up a block type by id
    pub fn by_id(&self, id: BlockId) -> Option<&BlockInfo> {
        self.by_id.get(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for BlockTypes {
    /// Registry with the handful of vanilla blocks the brushes reference
    fn default() -> Self {
        let mut types = Self::new();
        types.register(BlockId(1), "minecraft:stone");
        types.register(BlockId(2), "minecraft:grass");
        types.register(BlockId(3), "minecraft:dirt");
        types.register(BlockId(4), "minecraft:cobblestone");
        types.register(BlockId(7), "minecraft:bedrock");
        types.register(BlockId(12), "minecraft:sand");
        types
    }
}
