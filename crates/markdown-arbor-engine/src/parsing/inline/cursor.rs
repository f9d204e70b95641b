/// A byte cursor over inline text.
///
/// Every position the tokenizer slices at sits next to an ASCII delimiter,
/// so byte indices are always char boundaries when they are used for slicing.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte just before the cursor, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|p| self.s.as_bytes().get(p).copied())
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.s.as_bytes()[self.i.min(self.s.len())..].starts_with(pat.as_bytes())
    }

    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Offset of the next `pat` at or after the cursor, relative to the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        let rest = self.s.get(self.i..)?;
        rest.find(pat)
    }

    /// Advances past the `)` balancing an already consumed `(`.
    ///
    /// Nested parentheses are counted. Returns the index of the closing `)`;
    /// on failure the cursor is left untouched.
    pub fn skip_balanced_parens(&mut self) -> Option<usize> {
        let saved = self.i;
        let mut depth = 1usize;
        while let Some(b) = self.bump() {
            match b {
                b'(' => depth += 1,
                b')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(self.i - 1);
                    }
                }
                _ => {}
            }
        }
        self.i = saved;
        None
    }
}
