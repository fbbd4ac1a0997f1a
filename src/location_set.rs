//! Occupancy sets.
//!
//! A `LocationSet` is a one-bit-per-square bitboard over `BoardLocation::index`.
//! Off-board squares cannot be represented, so every member is on the board.
//! Iteration runs in ascending index order (a1, b1, ..., h8).

use std::fmt;

use crate::board_location::BoardLocation;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LocationSet(u64);

impl LocationSet {
    pub const EMPTY: LocationSet = LocationSet(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn contains(self, location: BoardLocation) -> bool {
        self.0 & (1u64 << location.index()) != 0
    }

    /// Adds `location`, returning `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, location: BoardLocation) -> bool {
        let bit = 1u64 << location.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Removes `location`, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, location: BoardLocation) -> bool {
        let bit = 1u64 << location.index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn intersection(self, other: LocationSet) -> LocationSet {
        LocationSet(self.0 & other.0)
    }

    #[inline]
    pub const fn union(self, other: LocationSet) -> LocationSet {
        LocationSet(self.0 | other.0)
    }

    #[inline]
    pub const fn is_disjoint(self, other: LocationSet) -> bool {
        self.0 & other.0 == 0
    }

    /// Lowest-index member.
    #[inline]
    pub fn first(self) -> Option<BoardLocation> {
        if self.0 == 0 {
            return None;
        }
        BoardLocation::from_index(self.0.trailing_zeros() as usize)
    }

    #[inline]
    pub fn iter(self) -> LocationSetIter {
        LocationSetIter(self.0)
    }
}

impl FromIterator<BoardLocation> for LocationSet {
    fn from_iter<I: IntoIterator<Item = BoardLocation>>(iter: I) -> Self {
        let mut set = LocationSet::EMPTY;
        for location in iter {
            set.insert(location);
        }
        set
    }
}

impl Extend<BoardLocation> for LocationSet {
    fn extend<I: IntoIterator<Item = BoardLocation>>(&mut self, iter: I) {
        for location in iter {
            self.insert(location);
        }
    }
}

impl IntoIterator for LocationSet {
    type Item = BoardLocation;
    type IntoIter = LocationSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for LocationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|l| l.to_string())).finish()
    }
}

#[derive(Debug, Clone)]
pub struct LocationSetIter(u64);

impl Iterator for LocationSetIter {
    type Item = BoardLocation;

    fn next(&mut self) -> Option<BoardLocation> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        BoardLocation::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for LocationSetIter {}
