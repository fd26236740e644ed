//! Phoneme-indexed blend configuration.
//!
//! Each phoneme carries a rank and two blend lengths. On a boundary, the
//! phoneme with the lower rank is the stronger one and its lengths decide
//! how many frames on each side of the boundary get interpolated.

/// Read-only access to rank and blend lengths by phoneme.
pub trait BlendRankTable {
    fn rank(&self, phoneme: u8) -> u8;

    /// Frames blended at the start of the phoneme.
    fn in_blend_length(&self, phoneme: u8) -> u8;

    /// Frames blended at the end of the phoneme.
    fn out_blend_length(&self, phoneme: u8) -> u8;
}

impl<T: BlendRankTable + ?Sized> BlendRankTable for &T {
    #[inline]
    fn rank(&self, phoneme: u8) -> u8 {
        (**self).rank(phoneme)
    }

    #[inline]
    fn in_blend_length(&self, phoneme: u8) -> u8 {
        (**self).in_blend_length(phoneme)
    }

    #[inline]
    fn out_blend_length(&self, phoneme: u8) -> u8 {
        (**self).out_blend_length(phoneme)
    }
}

const TABLE_SIZE: usize = 256;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlendEntry {
    pub rank: u8,
    pub in_length: u8,
    pub out_length: u8,
}

impl BlendEntry {
    pub const fn new(rank: u8, in_length: u8, out_length: u8) -> Self {
        Self {
            rank,
            in_length,
            out_length,
        }
    }
}

/// Blend table covering every possible phoneme id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendTable {
    rank: [u8; TABLE_SIZE],
    in_length: [u8; TABLE_SIZE],
    out_length: [u8; TABLE_SIZE],
}

impl Default for BlendTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BlendTable {
    pub const fn new() -> Self {
        Self {
            rank: [0; TABLE_SIZE],
            in_length: [0; TABLE_SIZE],
            out_length: [0; TABLE_SIZE],
        }
    }

    /// Builds a table from the three parallel phoneme-indexed arrays.
    ///
    /// Entries missing from shorter slices stay 0.
    pub fn from_slices(rank: &[u8], in_length: &[u8], out_length: &[u8]) -> Self {
        let mut table = Self::new();
        copy_prefix(&mut table.rank, rank);
        copy_prefix(&mut table.in_length, in_length);
        copy_prefix(&mut table.out_length, out_length);
        table
    }

    pub fn with_phoneme(mut self, phoneme: u8, entry: BlendEntry) -> Self {
        self.set(phoneme, entry);
        self
    }

    pub fn set(&mut self, phoneme: u8, entry: BlendEntry) {
        let i = phoneme as usize;
        self.rank[i] = entry.rank;
        self.in_length[i] = entry.in_length;
        self.out_length[i] = entry.out_length;
    }

    pub fn entry(&self, phoneme: u8) -> BlendEntry {
        let i = phoneme as usize;
        BlendEntry::new(self.rank[i], self.in_length[i], self.out_length[i])
    }
}

fn copy_prefix(dst: &mut [u8; TABLE_SIZE], src: &[u8]) {
    let n = usize::min(src.len(), TABLE_SIZE);
    dst[..n].copy_from_slice(&src[..n]);
}

impl BlendRankTable for BlendTable {
    #[inline]
    fn rank(&self, phoneme: u8) -> u8 {
        self.rank[phoneme as usize]
    }

    #[inline]
    fn in_blend_length(&self, phoneme: u8) -> u8 {
        self.in_length[phoneme as usize]
    }

    #[inline]
    fn out_blend_length(&self, phoneme: u8) -> u8 {
        self.out_length[phoneme as usize]
    }
}

/// Frames blended before (`phase1`) and after (`phase2`) a boundary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlendPhases {
    pub phase1: u8,
    pub phase2: u8,
}

impl BlendPhases {
    /// Picks the blend lengths for the boundary between `phoneme` and `next`.
    pub fn select<T: BlendRankTable + ?Sized>(table: &T, phoneme: u8, next: u8) -> Self {
        let rank = table.rank(phoneme);
        let next_rank = table.rank(next);

        match rank.cmp(&next_rank) {
            core::cmp::Ordering::Equal => Self {
                phase1: table.out_blend_length(phoneme),
                phase2: table.out_blend_length(next),
            },
            // Current phoneme is stronger. Out/in are swapped.
            core::cmp::Ordering::Less => Self {
                phase1: table.out_blend_length(phoneme),
                phase2: table.in_blend_length(phoneme),
            },
            core::cmp::Ordering::Greater => Self {
                phase1: table.in_blend_length(next),
                phase2: table.out_blend_length(next),
            },
        }
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.phase1.wrapping_add(self.phase2)
    }
}
