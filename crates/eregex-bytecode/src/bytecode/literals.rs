//! Owned literal storage.
//!
//! `String` compares and named capture groups reference byte strings by
//! `(offset, len)` into a pool owned by the program, so a compiled program
//! never borrows from the pattern text.

/// Reference into a [`LiteralPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LiteralRef {
    pub offset: u32,
    pub len: u32,
}

impl LiteralRef {
    pub fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        let start = self.offset as usize;
        start..start + self.len as usize
    }
}

/// Append-only byte buffer of literals.
///
/// Identical literals are stored once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LiteralPool {
    bytes: Vec<u8>,
    entries: Vec<LiteralRef>,
}

impl LiteralPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, literal: &[u8]) -> LiteralRef {
        if let Some(existing) = self
            .entries
            .iter()
            .copied()
            .find(|r| &self.bytes[r.range()] == literal)
        {
            return existing;
        }

        let r = LiteralRef::new(self.bytes.len() as u32, literal.len() as u32);
        self.bytes.extend_from_slice(literal);
        self.entries.push(r);
        r
    }

    pub fn get(&self, r: LiteralRef) -> Option<&[u8]> {
        self.bytes.get(r.range())
    }

    /// Interned literals in insertion order.
    pub fn entries(&self) -> &[LiteralRef] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
