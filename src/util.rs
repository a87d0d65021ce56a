//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! the candidate digits of a cell.

use serde::{Deserialize, Serialize};

use std::ops::{
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    Sub,
    SubAssign
};

/// The smallest digit that can be contained in a [DigitSet].
pub const MIN_DIGIT: usize = 1;

/// The largest digit that can be contained in a [DigitSet].
pub const MAX_DIGIT: usize = 9;

/// A set of the Sudoku digits 1 to 9 that is implemented as a bit mask. Each
/// digit is represented by one bit in a `u16`. This generally has better
/// performance than a `HashSet` and makes copying a board a plain memory
/// copy.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DigitSet {
    bits: u16
}

/// An enumeration of the errors that can happen when using a [DigitSet].
#[derive(Debug, Eq, PartialEq)]
pub enum DigitSetError {

    /// Indicates that a number that was queried to be inserted or removed is
    /// not a Sudoku digit, i.e. not in the range `[1, 9]`.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, DigitSetError>`.
pub type DigitSetResult<V> = Result<V, DigitSetError>;

const ALL_DIGITS: u16 = 0b1_1111_1111;

fn compute_mask(digit: usize) -> DigitSetResult<u16> {
    if digit < MIN_DIGIT || digit > MAX_DIGIT {
        Err(DigitSetError::OutOfBounds)
    }
    else {
        Ok(1u16 << (digit - MIN_DIGIT))
    }
}

/// An iterator over the digits contained in a [DigitSet], in ascending order.
pub struct DigitSetIter {
    bits: u16,
    digit: usize
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.bits != 0 {
            let digit = self.digit;
            let bit = self.bits & 1;
            self.bits >>= 1;
            self.digit += 1;

            if bit != 0 {
                return Some(digit);
            }
        }

        None
    }
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn empty() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    /// Creates a new `DigitSet` that contains all nine digits. This is the
    /// candidate set of a cell about which nothing is known yet.
    pub fn full() -> DigitSet {
        DigitSet {
            bits: ALL_DIGITS
        }
    }

    /// Creates a new `DigitSet` which contains exactly the given digit. This
    /// is the candidate set of a solved cell.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `DigitSetError::OutOfBounds` is returned.
    pub fn singleton(digit: usize) -> DigitSetResult<DigitSet> {
        Ok(DigitSet {
            bits: compute_mask(digit)?
        })
    }

    /// Indicates whether this set contains the given digit, in which case
    /// this method returns `true`. If it is not contained or outside the
    /// range `[1, 9]`, `false` will be returned.
    pub fn contains(&self, digit: usize) -> bool {
        if let Ok(mask) = compute_mask(digit) {
            self.bits & mask != 0
        }
        else {
            false
        }
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `DigitSetError::OutOfBounds` is returned.
    pub fn insert(&mut self, digit: usize) -> DigitSetResult<bool> {
        let mask = compute_mask(digit)?;
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        Ok(changed)
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `DigitSetError::OutOfBounds` is returned.
    pub fn remove(&mut self, digit: usize) -> DigitSetResult<bool> {
        let mask = compute_mask(digit)?;
        let changed = self.bits & mask != 0;
        self.bits &= !mask;
        Ok(changed)
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no digits. For a
    /// cell's candidate set, this signals a contradiction.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// If this set contains exactly one digit, returns that digit, and `None`
    /// otherwise. For a cell's candidate set, a `Some(_)` result means the
    /// cell is solved.
    pub fn single(&self) -> Option<usize> {
        if self.len() == 1 {
            Some(self.bits.trailing_zeros() as usize + MIN_DIGIT)
        }
        else {
            None
        }
    }

    /// Returns an iterator over the digits contained in this set in ascending
    /// order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            bits: self.bits,
            digit: MIN_DIGIT
        }
    }
}

/// Creates a new [DigitSet] that contains the specified digits, which are
/// provided as a comma-separated list. For empty sets, [DigitSet::empty] can
/// be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use sudoku_propagation::digits;
/// use sudoku_propagation::util::DigitSet;
///
/// let set = digits!(2, 4);
/// assert!(set.contains(2));
/// assert!(!set.contains(3));
/// assert_eq!(2, set.len());
/// ```
#[macro_export]
macro_rules! digits {
    ($($ds:expr),+) => {
        {
            let mut set = DigitSet::empty();
            $(set.insert($ds).unwrap();)+
            set
        }
    };
}

impl Sub for DigitSet {
    type Output = DigitSet;

    fn sub(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits & !rhs.bits
        }
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.bits &= !rhs.bits;
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    fn bitor(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits | rhs.bits
        }
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    fn bitand(self, rhs: DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits & rhs.bits
        }
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: DigitSet) {
        self.bits &= rhs.bits;
    }
}
