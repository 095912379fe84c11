// File: crates/nine-slice-core/src/types.rs
// Summary: NineSlice value type (four integer insets) with equality, hashing and text form.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Nine-slice margins, in pixels: insets from the top-left and bottom-right corners.
/// Contract: none enforced; any `i32` is accepted, including negative values.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct NineSlice {
    slice_from_top_left_x: i32,
    slice_from_top_left_y: i32,
    slice_from_bottom_right_x: i32,
    slice_from_bottom_right_y: i32,
}

impl NineSlice {
    /// Create a slice from (top-left X, top-left Y, bottom-right X, bottom-right Y).
    #[inline]
    pub const fn new(
        slice_from_top_left_x: i32,
        slice_from_top_left_y: i32,
        slice_from_bottom_right_x: i32,
        slice_from_bottom_right_y: i32,
    ) -> Self {
        Self {
            slice_from_top_left_x,
            slice_from_top_left_y,
            slice_from_bottom_right_x,
            slice_from_bottom_right_y,
        }
    }

    #[inline]
    pub const fn slice_from_top_left_x(&self) -> i32 {
        self.slice_from_top_left_x
    }

    #[inline]
    pub const fn slice_from_top_left_y(&self) -> i32 {
        self.slice_from_top_left_y
    }

    #[inline]
    pub const fn slice_from_bottom_right_x(&self) -> i32 {
        self.slice_from_bottom_right_x
    }

    #[inline]
    pub const fn slice_from_bottom_right_y(&self) -> i32 {
        self.slice_from_bottom_right_y
    }

    /// Total horizontal inset (top-left X + bottom-right X). Wraps on overflow.
    #[inline]
    pub const fn sum_x(&self) -> i32 {
        self.slice_from_top_left_x.wrapping_add(self.slice_from_bottom_right_x)
    }

    /// Total vertical inset (top-left Y + bottom-right Y). Wraps on overflow.
    #[inline]
    pub const fn sum_y(&self) -> i32 {
        self.slice_from_top_left_y.wrapping_add(self.slice_from_bottom_right_y)
    }

    /// True when the four insets sum to zero.
    ///
    /// Note this is a sum check, not a per-field one: `(1:-1:0:0)` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.sum_x().wrapping_add(self.sum_y()) == 0
    }

    /// XOR of the four insets; the value fed to [`Hash`].
    #[inline]
    pub const fn hash_code(&self) -> i32 {
        self.slice_from_top_left_x
            ^ self.slice_from_top_left_y
            ^ self.slice_from_bottom_right_x
            ^ self.slice_from_bottom_right_y
    }
}

impl Hash for NineSlice {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for NineSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}:{}:{}:{})",
            self.slice_from_top_left_x,
            self.slice_from_top_left_y,
            self.slice_from_bottom_right_x,
            self.slice_from_bottom_right_y
        )
    }
}

// Same text as Display so `{:?}` in logs and assertions reads `(a:b:c:d)`.
impl fmt::Debug for NineSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
