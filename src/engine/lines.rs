use heapless::Vec;

/// Capacity of a single reply line, large enough for a full `+NSORF` reply.
pub const LINE_LEN: usize = 1100;

/// Number of lines retained per round-trip.
pub const MAX_LINES: usize = 5;

/// Bounded set of reply lines from one command round-trip.
///
/// Bytes beyond `N` on a line are discarded, the line is still terminated.
/// When all `L` slots are taken, every further line overwrites the last slot,
/// so the most recent line (normally the final result code) is always kept.
/// Both losses are counted.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize = LINE_LEN, const L: usize = MAX_LINES> {
    lines: Vec<Vec<u8, N>, L>,
    partial: Vec<u8, N>,
    partial_truncated: bool,
    truncated: usize,
    overwritten: usize,
}

impl<const N: usize, const L: usize> Default for LineBuffer<N, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const L: usize> LineBuffer<N, L> {
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            partial: Vec::new(),
            partial_truncated: false,
            truncated: 0,
            overwritten: 0,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.partial.clear();
        self.partial_truncated = false;
        self.truncated = 0;
        self.overwritten = 0;
    }

    /// Feed one received byte. Returns `true` when it completed a non-empty
    /// line.
    pub fn push(&mut self, byte: u8) -> bool {
        match byte {
            b'\r' | b'\n' => {
                if self.partial.is_empty() {
                    return false;
                }
                self.commit();
                true
            }
            _ => {
                if self.partial.push(byte).is_err() {
                    self.partial_truncated = true;
                }
                false
            }
        }
    }

    fn commit(&mut self) {
        if self.partial_truncated {
            self.truncated += 1;
            self.partial_truncated = false;
        }

        let line = core::mem::take(&mut self.partial);
        if let Err(line) = self.lines.push(line) {
            self.overwritten += 1;
            if let Some(last) = self.lines.last_mut() {
                *last = line;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`; lines that are not valid UTF-8 read as empty.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| as_str(l))
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|l| as_str(l))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| as_str(l))
    }

    /// Lines that lost bytes to the per-line bound.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// Lines that were replaced in the last slot.
    pub fn overwritten(&self) -> usize {
        self.overwritten
    }
}

fn as_str(line: &[u8]) -> &str {
    core::str::from_utf8(line).unwrap_or("")
}
