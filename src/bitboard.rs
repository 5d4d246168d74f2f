//! A fixed-size bitboard implementation using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid packed into an unsigned integer `T`, addressed
//! by `(x, y)` where `x` is the column and `y` the row. Bit `y * N + x` holds
//! the cell, so iteration order is row by row.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Column or row is out of bounds [0..N).
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(x: usize, y: usize) -> usize {
        y * N + x
    }

    /// Create a new empty bitboard (all bits cleared) without size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// A board with every cell set.
    #[inline]
    pub fn full() -> Self {
        BitBoard { bits: Self::mask() }
    }

    /// Returns `true` when `(x, y)` lies on the board.
    #[inline]
    pub fn in_bounds(x: usize, y: usize) -> bool {
        x < N && y < N
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Gets the bit at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        self.check_bounds(x, y)?;
        Ok(((self.bits >> Self::index(x, y)) & T::one()) != T::zero())
    }

    /// Like [`get`](Self::get) but treats off-board cells as clear.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.get(x, y).unwrap_or(false)
    }

    /// Sets the bit at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        self.check_bounds(x, y)?;
        self.bits = self.bits | (T::one() << Self::index(x, y));
        Ok(())
    }

    /// Clears the bit at `(x, y)`.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        self.check_bounds(x, y)?;
        self.bits = self.bits & !(T::one() << Self::index(x, y));
        Ok(())
    }

    /// Grows every set cell into its 8-neighbourhood, clipped to the board.
    ///
    /// Dilating a straight ship yields the `(len + 2) × 3` ring around it.
    pub fn dilate(&self) -> Self {
        let mut out = *self;
        for (x, y) in self.iter_set_bits() {
            for ny in y.saturating_sub(1)..=(y + 1).min(N - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(N - 1) {
                    out.bits = out.bits | (T::one() << Self::index(nx, ny));
                }
            }
        }
        out
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), BitBoardError> {
        if Self::in_bounds(x, y) {
            Ok(())
        } else {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        }
    }

    /// Creates a bitboard from the raw integer, masking out upper bits.
    #[inline]
    pub fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Creates a bitboard from an iterator over `(x, y)` positions.
    #[inline]
    pub fn from_cells<I>(iter: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (x, y) in iter {
            board.set(x, y)?;
        }
        Ok(board)
    }

    /// Iterator over the set cells as `(x, y)`, row by row.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, N> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        fmt::Display::fmt(self, f)?;
        writeln!(f)
    }
}

impl<T, const N: usize> fmt::Display for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let bit = if self.contains(x, y) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if y + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for SetBits<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx % N, idx / N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Inverts a bitboard within board bounds.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl<T, const N: usize> BitAndAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits = self.bits & rhs.bits;
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
