//! Opcodes, compare-entry tags and POSIX character classes.
//!
//! Every value in a program is a [`Word`]. The first word of an instruction is
//! its [`OpCodeId`]; the words after it are arguments whose meaning depends on
//! the opcode. `Compare` arguments are themselves tagged with a
//! [`CharacterCompareType`].

/// A single bytecode word.
pub type Word = u32;

/// Instruction opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum OpCodeId {
    Compare = 0,
    Jump = 1,
    ForkJump = 2,
    ForkStay = 3,
    SaveLeftCaptureGroup = 4,
    SaveRightCaptureGroup = 5,
    SaveLeftNamedCaptureGroup = 6,
    SaveRightNamedCaptureGroup = 7,
    CheckBegin = 8,
    CheckEnd = 9,
    Exit = 10,
}

impl OpCodeId {
    pub fn from_word(word: Word) -> Option<Self> {
        Some(match word {
            0 => Self::Compare,
            1 => Self::Jump,
            2 => Self::ForkJump,
            3 => Self::ForkStay,
            4 => Self::SaveLeftCaptureGroup,
            5 => Self::SaveRightCaptureGroup,
            6 => Self::SaveLeftNamedCaptureGroup,
            7 => Self::SaveRightNamedCaptureGroup,
            8 => Self::CheckBegin,
            9 => Self::CheckEnd,
            10 => Self::Exit,
            _ => return None,
        })
    }

    #[inline]
    pub fn to_word(self) -> Word {
        self as Word
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Compare => "Compare",
            Self::Jump => "Jump",
            Self::ForkJump => "ForkJump",
            Self::ForkStay => "ForkStay",
            Self::SaveLeftCaptureGroup => "SaveLeftCaptureGroup",
            Self::SaveRightCaptureGroup => "SaveRightCaptureGroup",
            Self::SaveLeftNamedCaptureGroup => "SaveLeftNamedCaptureGroup",
            Self::SaveRightNamedCaptureGroup => "SaveRightNamedCaptureGroup",
            Self::CheckBegin => "CheckBegin",
            Self::CheckEnd => "CheckEnd",
            Self::Exit => "Exit",
        }
    }

    /// Size in words, not counting `Compare` arguments.
    ///
    /// `Compare` reports its 3-word header (`opcode, count, argument size`);
    /// the full size is that plus the argument size word.
    pub fn fixed_size(self) -> usize {
        match self {
            Self::Compare => 3,
            Self::Jump | Self::ForkJump | Self::ForkStay => 2,
            Self::SaveLeftCaptureGroup | Self::SaveRightCaptureGroup => 2,
            Self::SaveLeftNamedCaptureGroup | Self::SaveRightNamedCaptureGroup => 3,
            Self::CheckBegin | Self::CheckEnd | Self::Exit => 1,
        }
    }
}

/// Tag of a single `Compare` argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CharacterCompareType {
    Undefined = 0,
    Inverse = 1,
    AnyChar = 2,
    Char = 3,
    String = 4,
    CharClass = 5,
    CharRange = 6,
    /// Pending range start inside a bracket expression. Never emitted.
    RangeExpressionDummy = 7,
}

impl CharacterCompareType {
    pub fn from_word(word: Word) -> Option<Self> {
        Some(match word {
            0 => Self::Undefined,
            1 => Self::Inverse,
            2 => Self::AnyChar,
            3 => Self::Char,
            4 => Self::String,
            5 => Self::CharClass,
            6 => Self::CharRange,
            7 => Self::RangeExpressionDummy,
            _ => return None,
        })
    }

    #[inline]
    pub fn to_word(self) -> Word {
        self as Word
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Inverse => "Inverse",
            Self::AnyChar => "AnyChar",
            Self::Char => "Char",
            Self::String => "String",
            Self::CharClass => "CharClass",
            Self::CharRange => "CharRange",
            Self::RangeExpressionDummy => "RangeExpressionDummy",
        }
    }
}

/// POSIX bracket-expression character classes (`[:alpha:]` and friends).
///
/// Classification is ASCII-only, as in the C locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CharClass {
    Alnum = 0,
    Cntrl = 1,
    Lower = 2,
    Space = 3,
    Alpha = 4,
    Digit = 5,
    Print = 6,
    Upper = 7,
    Blank = 8,
    Graph = 9,
    Punct = 10,
    Xdigit = 11,
}

impl CharClass {
    pub const ALL: [CharClass; 12] = [
        Self::Alnum,
        Self::Cntrl,
        Self::Lower,
        Self::Space,
        Self::Alpha,
        Self::Digit,
        Self::Print,
        Self::Upper,
        Self::Blank,
        Self::Graph,
        Self::Punct,
        Self::Xdigit,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    pub fn from_word(word: Word) -> Option<Self> {
        Self::ALL.get(word as usize).copied()
    }

    #[inline]
    pub fn to_word(self) -> Word {
        self as Word
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Alnum => "alnum",
            Self::Cntrl => "cntrl",
            Self::Lower => "lower",
            Self::Space => "space",
            Self::Alpha => "alpha",
            Self::Digit => "digit",
            Self::Print => "print",
            Self::Upper => "upper",
            Self::Blank => "blank",
            Self::Graph => "graph",
            Self::Punct => "punct",
            Self::Xdigit => "xdigit",
        }
    }

    pub fn matches(self, byte: u8) -> bool {
        match self {
            Self::Alnum => byte.is_ascii_alphanumeric(),
            Self::Cntrl => byte.is_ascii_control(),
            Self::Lower => byte.is_ascii_lowercase(),
            // `is_ascii_whitespace` leaves out vertical tab, `isspace` does not.
            Self::Space => byte.is_ascii_whitespace() || byte == 0x0b,
            Self::Alpha => byte.is_ascii_alphabetic(),
            Self::Digit => byte.is_ascii_digit(),
            Self::Print => byte.is_ascii_graphic() || byte == b' ',
            Self::Upper => byte.is_ascii_uppercase(),
            Self::Blank => byte == b' ' || byte == b'\t',
            Self::Graph => byte.is_ascii_graphic(),
            Self::Punct => byte.is_ascii_punctuation(),
            Self::Xdigit => byte.is_ascii_hexdigit(),
        }
    }
}

/// Inclusive byte range, packed into one word as `(from << 8) | to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharRange {
    pub from: u8,
    pub to: u8,
}

impl CharRange {
    pub fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    pub fn from_word(word: Word) -> Option<Self> {
        if word > 0xffff {
            return None;
        }
        Some(Self {
            from: (word >> 8) as u8,
            to: (word & 0xff) as u8,
        })
    }

    #[inline]
    pub fn to_word(self) -> Word {
        (Word::from(self.from) << 8) | Word::from(self.to)
    }

    #[inline]
    pub fn contains(self, byte: u8) -> bool {
        (self.from..=self.to).contains(&byte)
    }
}
