use slotmap::DefaultKey;

/// The byte that can never be stored in a list.
///
/// `0` marks "no value" and is rejected by every operation that writes a
/// value, so the usable alphabet is `1..=255`.
pub const RESERVED_VALUE: u8 = 0;

/// A run of `length` consecutive copies of `value` in the logical sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// The repeated byte. Never [`RESERVED_VALUE`].
    pub value: u8,
    /// Number of consecutive occurrences, always at least 1.
    pub length: usize,
}

impl Run {
    pub fn new(value: u8, length: usize) -> Self {
        Self { value, length }
    }
}

/// A node in the doubly-linked list of runs.
///
/// Each node represents `run` consecutive occurrences of `value`.
#[derive(Debug, Clone)]
pub(crate) struct RunNode {
    pub value: u8,
    /// Number of consecutive occurrences (1 = single occurrence)
    pub run: usize,
    pub prev: Option<DefaultKey>,
    pub next: Option<DefaultKey>,
}

impl RunNode {
    pub(crate) fn with_run(value: u8, run: usize) -> Self {
        debug_assert!(value != RESERVED_VALUE, "reserved value stored in a run");
        debug_assert!(run > 0, "empty run");
        Self {
            value,
            run,
            prev: None,
            next: None,
        }
    }

    pub(crate) fn to_run(&self) -> Run {
        Run::new(self.value, self.run)
    }
}
