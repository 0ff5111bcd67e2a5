//! Boolean voxel masks for one section and its column projection

use std::ops::BitOrAssign;

use crate::voxel::chunk::{column_index, COLUMN_COUNT};
use crate::voxel::section::{section_index, SECTION_VOLUME};

/// Selected voxels within one section, laid out `(y, z, x)` like section storage
#[derive(Clone, PartialEq, Eq)]
pub struct SectionMask {
    bits: Box<[bool; SECTION_VOLUME]>,
}

impl SectionMask {
    pub fn empty() -> Self {
        Self {
            bits: Box::new([false; SECTION_VOLUME]),
        }
    }

    pub fn full() -> Self {
        Self {
            bits: Box::new([true; SECTION_VOLUME]),
        }
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.bits[section_index(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: bool) {
        self.bits[section_index(x, y, z)] = value;
    }

    /// Raw mask in `(y, z, x)` order, matching [`crate::voxel::section::Section::blocks`]
    pub fn bits(&self) -> &[bool; SECTION_VOLUME] {
        &self.bits
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|b| *b)
    }

    /// Collapse along Y: a column is set if any voxel in it is set.
    pub fn collapse_columns(&self) -> ColumnMask {
        let mut columns = ColumnMask::empty();
        for (i, layer) in self.bits.chunks_exact(COLUMN_COUNT).enumerate() {
            debug_assert!(i < 16);
            for (column, bit) in columns.bits.iter_mut().zip(layer) {
                *column |= *bit;
            }
        }
        columns
    }
}

impl std::fmt::Debug for SectionMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionMask").field("count", &self.count()).finish()
    }
}

/// Selected columns of one chunk, laid out `(z, x)` like the biome array
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ColumnMask {
    bits: [bool; COLUMN_COUNT],
}

impl ColumnMask {
    pub fn empty() -> Self {
        Self {
            bits: [false; COLUMN_COUNT],
        }
    }

    pub fn get(&self, x: usize, z: usize) -> bool {
        self.bits[column_index(x, z)]
    }

    pub fn set(&mut self, x: usize, z: usize, value: bool) {
        self.bits[column_index(x, z)] = value;
    }

    pub fn bits(&self) -> &[bool; COLUMN_COUNT] {
        &self.bits
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.bits.iter().any(|b| *b)
    }

    /// Local `(x, z)` of every selected column
    pub fn columns(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(i, _)| (i & 15, i >> 4))
    }
}

impl BitOrAssign for ColumnMask {
    fn bitor_assign(&mut self, rhs: Self) {
        for (a, b) in self.bits.iter_mut().zip(rhs.bits.iter()) {
            *a |= *b;
        }
    }
}

impl std::fmt::Debug for ColumnMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnMask").field("count", &self.count()).finish()
    }
}
