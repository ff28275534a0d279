use crate::codec;
use crate::error::{Error, Result};
use crate::run::{RunNode, RESERVED_VALUE};
use slotmap::{DefaultKey, SlotMap};
use std::fmt;
use std::io::Write;
use tracing::trace;

/// A byte sequence stored as a list of runs.
///
/// Consecutive repeated bytes are kept once together with a repeat count.
/// All positions taken and returned by the public API are logical
/// (decoded) positions.
///
/// Invariants, holding after every call:
/// 1. **Maximal compression**: no two adjacent runs share a value
/// 2. **Non-empty runs**: every run has length ≥ 1
/// 3. **No reserved bytes**: [`RESERVED_VALUE`] is never stored
///
/// Dropping the list releases every run.
#[derive(Clone)]
pub struct RleList {
    /// Storage for all runs
    pub(crate) runs: SlotMap<DefaultKey, RunNode>,

    /// First run, `None` when empty
    pub(crate) head: Option<DefaultKey>,

    /// Last run, `None` when empty
    pub(crate) tail: Option<DefaultKey>,

    /// Number of logical bytes (sum of all run lengths)
    length: usize,
}

impl RleList {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self {
            runs: SlotMap::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Builds a list from raw bytes.
    ///
    /// Fails with [`Error::NullArgument`] if `bytes` contains the reserved
    /// value; nothing is built in that case.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.contains(&RESERVED_VALUE) {
            return Err(Error::NullArgument);
        }
        let mut list = Self::new();
        list.try_extend(bytes.iter().copied())?;
        Ok(list)
    }

    /// Appends a byte at the logical end.
    ///
    /// If the last run holds the same value its length is incremented
    /// instead of creating a new run.
    pub fn push(&mut self, value: u8) -> Result<()> {
        self.push_run(value, 1)
    }

    /// Appends `count` copies of `value` at the logical end.
    ///
    /// A `count` of zero is accepted and changes nothing. Fails with
    /// [`Error::LengthOverflow`] if the logical size would exceed
    /// `usize::MAX`; the list is unchanged in that case.
    pub fn push_run(&mut self, value: u8, count: usize) -> Result<()> {
        if value == RESERVED_VALUE {
            return Err(Error::NullArgument);
        }
        if count == 0 {
            return Ok(());
        }

        // Every run is bounded by the logical size, so this also covers
        // the tail run
        let length = self
            .length
            .checked_add(count)
            .ok_or(Error::LengthOverflow { count })?;

        // Same value - just extend the tail run
        if let Some(tail) = self.tail {
            if self.runs[tail].value == value {
                self.runs[tail].run += count;
                self.length = length;
                return Ok(());
            }
        }

        let new_key = self.runs.insert(RunNode::with_run(value, count));
        self.runs[new_key].prev = self.tail;
        match self.tail {
            Some(tail) => self.runs[tail].next = Some(new_key),
            None => self.head = Some(new_key),
        }
        self.tail = Some(new_key);
        self.length = length;

        Ok(())
    }

    /// Appends every byte of `iter`, in order.
    ///
    /// Stops at the first reserved byte and reports it; bytes before it stay
    /// appended, exactly as a sequence of [`push`](Self::push) calls would.
    pub fn try_extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) -> Result<()> {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// Returns the number of logical bytes.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of runs in the compressed form.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Removes every run.
    pub fn clear(&mut self) {
        self.runs.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Returns the byte at logical position `index`.
    pub fn get(&self, index: usize) -> Result<u8> {
        let key = self.locate(index)?;
        Ok(self.runs[key].value)
    }

    /// Removes and returns the byte at logical position `index`.
    ///
    /// When this empties a run, the run is unlinked and its former
    /// neighbours are merged if they hold the same value.
    pub fn remove(&mut self, index: usize) -> Result<u8> {
        let key = self.locate(index)?;
        let value = self.runs[key].value;

        if self.runs[key].run > 1 {
            self.runs[key].run -= 1;
        } else {
            let prev = self.unlink(key);
            trace!(index, value, "run emptied and unlinked");
            if let Some(prev) = prev {
                if self.try_merge_with_next(prev) {
                    trace!(index, "neighbouring runs merged");
                }
            }
        }
        self.length -= 1;

        Ok(value)
    }

    /// Replaces every value `v` with `transform(v)`.
    ///
    /// `transform` is called once per run, front to back. Runs that end up
    /// next to a run with the same value are merged into it.
    ///
    /// Fails with [`Error::NullArgument`] if `transform` yields the reserved
    /// value for any run; the list is unchanged in that case.
    pub fn map<F: FnMut(u8) -> u8>(&mut self, mut transform: F) -> Result<()> {
        let mut mapped = Vec::new();
        mapped.try_reserve_exact(self.runs.len())?;

        let mut current = self.head;
        while let Some(key) = current {
            let value = transform(self.runs[key].value);
            if value == RESERVED_VALUE {
                return Err(Error::NullArgument);
            }
            mapped.push(value);
            current = self.runs[key].next;
        }

        let mut survivor: Option<DefaultKey> = None;
        let mut current = self.head;
        for value in mapped {
            let Some(key) = current else {
                break;
            };
            current = self.runs[key].next;
            self.runs[key].value = value;

            // Only the previous surviving run can now hold the same value
            match survivor {
                Some(prev) if self.try_merge_with_next(prev) => {
                    trace!(value, "mapped run merged into predecessor");
                }
                _ => survivor = Some(key),
            }
        }

        Ok(())
    }

    /// Exports the list as text in the `<byte><decimal length>\n` format.
    ///
    /// Each byte becomes the Unicode scalar with the same number, so the
    /// text is lossless for the whole byte alphabet.
    pub fn export_to_string(&self) -> Result<String> {
        let bytes = self.export_to_bytes()?;
        let mut text = String::new();
        text.try_reserve_exact(bytes.len())?;
        text.extend(bytes.iter().copied().map(char::from));
        Ok(text)
    }

    /// Exports the list in the `<byte><decimal length>\n` format, byte-exact.
    pub fn export_to_bytes(&self) -> Result<Vec<u8>> {
        codec::encode(self)
    }

    /// Streams the encoded form into `writer`.
    pub fn write_encoded<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut digits = [0u8; codec::MAX_LENGTH_DIGITS];
        for run in self.runs() {
            writer.write_all(&[run.value])?;
            writer.write_all(codec::format_length(run.length, &mut digits))?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Returns compression statistics.
    pub fn stats(&self) -> RleStats {
        RleStats {
            logical_length: self.length,
            runs: self.runs.len(),
        }
    }

    /// Finds the run covering logical position `index`.
    fn locate(&self, index: usize) -> Result<DefaultKey> {
        let out_of_bounds = Error::IndexOutOfBounds {
            index,
            len: self.length,
        };
        if index >= self.length {
            return Err(out_of_bounds);
        }

        let mut consumed = 0;
        let mut current = self.head;
        while let Some(key) = current {
            let node = &self.runs[key];
            if consumed + node.run > index {
                return Ok(key);
            }
            consumed += node.run;
            current = node.next;
        }

        Err(out_of_bounds)
    }

    /// Unlinks and frees a run, returning its former predecessor.
    fn unlink(&mut self, key: DefaultKey) -> Option<DefaultKey> {
        let node = self.runs.remove(key)?;

        match node.prev {
            Some(prev) => self.runs[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.runs[next].prev = node.prev,
            None => self.tail = node.prev,
        }

        node.prev
    }

    /// Merges a run with its next neighbour if they have the same value.
    ///
    /// Returns true if a merge occurred.
    fn try_merge_with_next(&mut self, key: DefaultKey) -> bool {
        let Some(next_key) = self.runs[key].next else {
            return false;
        };

        if self.runs[key].value != self.runs[next_key].value {
            return false;
        }

        let next_run = self.runs[next_key].run;
        self.runs[key].run += next_run;

        // Relink: skip over next_key
        let after_next = self.runs[next_key].next;
        self.runs[key].next = after_next;
        match after_next {
            Some(after) => self.runs[after].prev = Some(key),
            None => self.tail = Some(key),
        }

        self.runs.remove(next_key);

        true
    }
}

impl Default for RleList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RleList {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.runs().eq(other.runs())
    }
}

impl Eq for RleList {}

impl fmt::Debug for RleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.runs().map(|run| (char::from(run.value), run.length)))
            .finish()
    }
}

impl TryFrom<&[u8]> for RleList {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_bytes(bytes)
    }
}

/// Statistics about run-length compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleStats {
    /// Number of logical bytes
    pub logical_length: usize,
    /// Number of runs stored
    pub runs: usize,
}

impl RleStats {
    /// Returns the compression ratio as a percentage (runs vs logical bytes).
    pub fn compression_ratio(&self) -> f64 {
        if self.logical_length == 0 {
            0.0
        } else {
            (self.runs as f64 / self.logical_length as f64) * 100.0
        }
    }
}
