//! Candidate bitsets ("colors").

use std::fmt::{self, Debug};

use rand::Rng;

/// A set of candidate values ("colors") drawn from `[0, 64)`, packed into a single `u64`.
///
/// `ColorSet` is the fundamental unit of every constraint-propagation operation in this
/// crate: a grid cell holds one `ColorSet` (its remaining candidates), and the hidden-subset
/// heuristic reuses the exact same type to track which *positions* within a unit a color can
/// still occupy. Bit `i` set means color `i` is present.
///
/// All operations are `const fn` where possible and compile down to single machine
/// instructions (`popcnt`, `bsf`, `bsr`, bitwise and/or/xor).
///
/// # Examples
///
/// ```
/// use sudoku_core::ColorSet;
///
/// let mut candidates = ColorSet::full(9);
/// candidates = candidates.discard(4);
/// assert_eq!(candidates.count(), 8);
/// assert!(!candidates.contains(4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u64);

impl ColorSet {
    /// The empty set, containing no colors.
    pub const EMPTY: Self = Self(0);

    /// Returns the set containing every color in `[0, size)`.
    ///
    /// `size` is clamped to 64; grids never exceed that bound, but the clamp keeps this
    /// function total rather than panicking.
    #[must_use]
    pub const fn full(size: usize) -> Self {
        if size >= 64 {
            Self(u64::MAX)
        } else {
            Self((1u64 << size) - 1)
        }
    }

    /// Returns the set containing exactly `color`, or [`EMPTY`](Self::EMPTY) if
    /// `color >= 64`.
    #[must_use]
    pub const fn singleton(color: usize) -> Self {
        if color >= 64 {
            Self::EMPTY
        } else {
            Self(1u64 << color)
        }
    }

    /// Returns this set with `color` added.
    #[must_use]
    pub const fn add(self, color: usize) -> Self {
        if color >= 64 {
            self
        } else {
            Self(self.0 | (1u64 << color))
        }
    }

    /// Returns this set with `color` removed.
    #[must_use]
    pub const fn discard(self, color: usize) -> Self {
        if color >= 64 {
            self
        } else {
            Self(self.0 & !(1u64 << color))
        }
    }

    /// Returns whether `color` is a member of this set.
    #[must_use]
    pub const fn contains(self, color: usize) -> bool {
        color < 64 && self.0 & (1u64 << color) != 0
    }

    /// Returns the raw bitwise complement of this set.
    ///
    /// This flips every one of the 64 bits, including those beyond whatever `size` the
    /// caller considers meaningful. Intersect with [`full(size)`](Self::full) to restrict
    /// the result to a particular universe.
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0)
    }

    /// Returns the intersection `self ∩ other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the union `self ∪ other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the symmetric difference `self △ other`.
    #[must_use]
    pub const fn symmetric_difference(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Returns the set difference `self \ other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns whether this set is a subset of `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }

    /// Returns whether this set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether this set has exactly one member.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// Returns the number of colors in this set.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "at most 64 colors exist")]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the set containing only the lowest-numbered color in this set, or
    /// [`EMPTY`](Self::EMPTY) if this set is empty.
    #[must_use]
    pub const fn rightmost(self) -> Self {
        Self(self.0 & self.0.wrapping_neg())
    }

    /// Returns the set containing only the highest-numbered color in this set, or
    /// [`EMPTY`](Self::EMPTY) if this set is empty.
    #[must_use]
    pub const fn leftmost(self) -> Self {
        if self.0 == 0 {
            Self::EMPTY
        } else {
            Self(1u64 << (63 - self.0.leading_zeros()))
        }
    }

    /// Returns an iterator over the colors in this set, in ascending order.
    #[must_use]
    pub const fn iter(self) -> ColorSetIter {
        ColorSetIter(self.0)
    }

    /// Returns the set containing a single color picked uniformly at random from this set,
    /// or [`EMPTY`](Self::EMPTY) if this set is empty.
    #[must_use]
    pub fn pick_random<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let n = self.count();
        if n == 0 {
            return Self::EMPTY;
        }
        let k = rng.random_range(0..n);
        let color = self.iter().nth(k).expect("k < count");
        Self::singleton(color)
    }
}

impl Debug for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the members of a [`ColorSet`], in ascending order.
///
/// Returned by [`ColorSet::iter`].
#[derive(Debug, Clone)]
pub struct ColorSetIter(u64);

impl Iterator for ColorSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let color = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ColorSetIter {}

impl FromIterator<usize> for ColorSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::add)
    }
}
