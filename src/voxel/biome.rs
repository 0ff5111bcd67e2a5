//! Biome ids and the biome catalog

use serde::{Deserialize, Serialize};

/// Biome identifier as stored in a chunk's biome array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct BiomeId(pub u8);

impl BiomeId {
    pub const OCEAN: Self = Self(0);
    pub const PLAINS: Self = Self(1);
    pub const DESERT: Self = Self(2);
    pub const EXTREME_HILLS: Self = Self(3);
    pub const FOREST: Self = Self(4);
    pub const TAIGA: Self = Self(5);
    pub const SWAMPLAND: Self = Self(6);
    pub const RIVER: Self = Self(7);
}

/// Catalog entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BiomeType {
    pub id: BiomeId,
    pub name: &'static str,
}

const VANILLA_BIOMES: &[BiomeType] = &[
    BiomeType { id: BiomeId::OCEAN, name: "Ocean" },
    BiomeType { id: BiomeId::PLAINS, name: "Plains" },
    BiomeType { id: BiomeId::DESERT, name: "Desert" },
    BiomeType { id: BiomeId::EXTREME_HILLS, name: "Extreme Hills" },
    BiomeType { id: BiomeId::FOREST, name: "Forest" },
    BiomeType { id: BiomeId::TAIGA, name: "Taiga" },
    BiomeType { id: BiomeId::SWAMPLAND, name: "Swampland" },
    BiomeType { id: BiomeId::RIVER, name: "River" },
    BiomeType { id: BiomeId(8), name: "Hell" },
    BiomeType { id: BiomeId(9), name: "The End" },
    BiomeType { id: BiomeId(10), name: "Frozen Ocean" },
    BiomeType { id: BiomeId(11), name: "Frozen River" },
    BiomeType { id: BiomeId(12), name: "Ice Plains" },
    BiomeType { id: BiomeId(13), name: "Ice Mountains" },
    BiomeType { id: BiomeId(14), name: "Mushroom Island" },
    BiomeType { id: BiomeId(15), name: "Mushroom Island Shore" },
    BiomeType { id: BiomeId(16), name: "Beach" },
    BiomeType { id: BiomeId(17), name: "Desert Hills" },
    BiomeType { id: BiomeId(18), name: "Forest Hills" },
    BiomeType { id: BiomeId(19), name: "Taiga Hills" },
    BiomeType { id: BiomeId(20), name: "Extreme Hills Edge" },
    BiomeType { id: BiomeId(21), name: "Jungle" },
    BiomeType { id: BiomeId(22), name: "Jungle Hills" },
];

/// Ordered list of known biomes
#[derive(Clone, Copy, Debug)]
pub struct BiomeTypes {
    types: &'static [BiomeType],
}

impl BiomeTypes {
    pub fn new() -> Self {
        Self { types: VANILLA_BIOMES }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BiomeType> {
        self.types.iter()
    }

    /// First catalog entry, the default selection of a biome picker
    pub fn first(&self) -> BiomeId {
        self.types.first().map(|b| b.id).unwrap_or_default()
    }

    pub fn get(&self, id: BiomeId) -> Option<&'static BiomeType> {
        self.types.iter().find(|b| b.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&'static BiomeType> {
        self.types.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }
}

impl Default for BiomeTypes {
    fn default() -> Self {
        Self::new()
    }
}
