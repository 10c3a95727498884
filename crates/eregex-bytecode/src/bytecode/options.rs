//! Compile and match option flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit-flag set shared by compilation and matching.
///
/// `NO_SUB_EXPRESSIONS` is read by the compiler; the other flags are read by
/// the matcher. Flags that do not apply to a stage are ignored there.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegexOptions(u8);

impl RegexOptions {
    pub const NONE: Self = Self(0);
    /// Scan every start offset and collect all non-overlapping matches.
    pub const GLOBAL: Self = Self(1 << 0);
    /// The subject start is not a line start: `^` never matches.
    pub const MATCH_NOT_BEGIN_OF_LINE: Self = Self(1 << 1);
    /// The subject end is not a line end: `$` never matches.
    pub const MATCH_NOT_END_OF_LINE: Self = Self(1 << 2);
    /// Parentheses group without capturing.
    pub const NO_SUB_EXPRESSIONS: Self = Self(1 << 3);
    /// Skip capture bookkeeping while matching.
    pub const SKIP_SUB_EXPR_RESULTS: Self = Self(1 << 4);

    const NAMED: [(Self, &'static str); 5] = [
        (Self::GLOBAL, "global"),
        (Self::MATCH_NOT_BEGIN_OF_LINE, "not_bol"),
        (Self::MATCH_NOT_END_OF_LINE, "not_eol"),
        (Self::NO_SUB_EXPRESSIONS, "no_subexpr"),
        (Self::SKIP_SUB_EXPR_RESULTS, "skip_subexpr_results"),
    ];

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for RegexOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.with(rhs)
    }
}

impl BitOrAssign for RegexOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

/// `none`, or the set flags joined with `|`.
impl fmt::Display for RegexOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for RegexOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegexOptions({self})")
    }
}
