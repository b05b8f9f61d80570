//! Whitespace tokenizer with a reusable scratch buffer.
//!
//! Output files run to tens of thousands of lines, so token positions are
//! kept in a caller-owned [`TokenBuffer`] that is cleared and refilled per
//! line instead of allocating a fresh vector each time.

/// Reusable storage for the token spans of one line
#[derive(Debug, Default)]
pub struct TokenBuffer {
    spans: Vec<(usize, usize)>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer sized for lines of roughly `tokens` fields
    pub fn with_capacity(tokens: usize) -> Self {
        Self {
            spans: Vec::with_capacity(tokens),
        }
    }

    /// Split `line` on whitespace, replacing any previous contents.
    ///
    /// The returned view borrows both the line and the buffer, so it must be
    /// dropped before the next call.
    pub fn split<'a>(&'a mut self, line: &'a str) -> Tokens<'a> {
        self.spans.clear();

        let mut start = None;
        for (offset, ch) in line.char_indices() {
            if ch.is_whitespace() {
                if let Some(begin) = start.take() {
                    self.spans.push((begin, offset));
                }
            } else if start.is_none() {
                start = Some(offset);
            }
        }
        if let Some(begin) = start {
            self.spans.push((begin, line.len()));
        }

        Tokens {
            line,
            spans: &self.spans,
        }
    }
}

/// Tokens of a single line, in order
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a> {
    line: &'a str,
    spans: &'a [(usize, usize)],
}

impl<'a> Tokens<'a> {
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Token at `index`, if the line has that many
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.spans
            .get(index)
            .map(|&(start, end)| &self.line[start..end])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.spans.iter().map(|&(start, end)| &self.line[start..end])
    }
}
