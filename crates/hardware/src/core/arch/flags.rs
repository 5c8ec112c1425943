//! Flags Register.
//!
//! Holds the condition bits written by `CMP` and read by the conditional
//! jumps. Layout is `00000LGE`.

/// Equal bit.
pub const FLAG_E: u8 = 0b0000_0001;

/// Greater-than bit.
pub const FLAG_G: u8 = 0b0000_0010;

/// Less-than bit.
pub const FLAG_L: u8 = 0b0000_0100;

/// Condition-code register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// Builds the flags produced by comparing `a` with `b`.
    ///
    /// Exactly one of `L`, `G`, `E` is set.
    pub const fn compare(a: u8, b: u8) -> Self {
        if a == b {
            Self(FLAG_E)
        } else if a > b {
            Self(FLAG_G)
        } else {
            Self(FLAG_L)
        }
    }

    /// Returns the raw `00000LGE` byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if the equal bit is set.
    #[inline]
    pub const fn equal(self) -> bool {
        self.0 & FLAG_E != 0
    }

    /// Returns `true` if the greater-than bit is set.
    #[inline]
    pub const fn greater(self) -> bool {
        self.0 & FLAG_G != 0
    }

    /// Returns `true` if the less-than bit is set.
    #[inline]
    pub const fn less(self) -> bool {
        self.0 & FLAG_L != 0
    }
}
