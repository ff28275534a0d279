//! Text form of a run-length list.
//!
//! Every run is written as one record: the literal byte, its length in
//! decimal (no sign, no leading zeros), then `\n`. Runs `[('a', 3), ('b', 12)]`
//! encode to `a3\nb12\n`. The byte is not escaped, so a record may start with
//! a digit or with `\n` itself; the first byte of a record is always the
//! value.

use crate::error::{Error, Result};
use crate::rle_list::RleList;
use crate::run::{Run, RESERVED_VALUE};
use std::str::FromStr;

/// Enough room for `usize::MAX` in decimal.
pub const MAX_LENGTH_DIGITS: usize = 20;

const LINE_TERMINATOR: u8 = b'\n';

/// Number of decimal digits needed to write `n`.
pub fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Writes `n` in decimal into the tail of `buf` and returns the used part.
pub fn format_length(mut n: usize, buf: &mut [u8; MAX_LENGTH_DIGITS]) -> &[u8] {
    let mut start = MAX_LENGTH_DIGITS;
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    &buf[start..]
}

/// Exact size in bytes of the encoded form of `runs`.
pub fn encoded_len<I: IntoIterator<Item = Run>>(runs: I) -> usize {
    runs.into_iter()
        .map(|run| 2 + digit_count(run.length))
        .sum()
}

/// Encodes `list`, allocating the output buffer up front.
pub fn encode(list: &RleList) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(encoded_len(list.runs()))?;
    list.write_encoded(&mut out)?;
    Ok(out)
}

/// Decodes the encoded form back into a list.
///
/// Adjacent records holding the same byte are merged, so `a1\na2\n` loads
/// as a single run of three.
pub fn decode(bytes: &[u8]) -> Result<RleList> {
    let mut list = RleList::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let record_start = pos;
        let value = bytes[pos];
        if value == RESERVED_VALUE {
            return Err(decode_error(pos, "reserved value 0 in record"));
        }
        pos += 1;

        let digits_start = pos;
        let mut length: usize = 0;
        while let Some(&digit) = bytes.get(pos).filter(|b| b.is_ascii_digit()) {
            if pos == digits_start && digit == b'0' {
                return Err(decode_error(pos, "run length is zero or zero-padded"));
            }
            length = length
                .checked_mul(10)
                .and_then(|l| l.checked_add(usize::from(digit - b'0')))
                .ok_or_else(|| decode_error(pos, "run length overflows"))?;
            pos += 1;
        }
        if pos == digits_start {
            return Err(decode_error(pos, "missing run length"));
        }

        if bytes.get(pos) != Some(&LINE_TERMINATOR) {
            return Err(decode_error(pos, "expected line terminator"));
        }
        pos += 1;

        list.push_run(value, length).map_err(|e| match e {
            Error::LengthOverflow { .. } => {
                decode_error(record_start, "total length overflows")
            }
            other => other,
        })?;
    }

    Ok(list)
}

fn decode_error(offset: usize, reason: &'static str) -> Error {
    Error::Decode { offset, reason }
}

impl FromStr for RleList {
    type Err = Error;

    /// Parses the text produced by [`RleList::export_to_string`], where each
    /// byte is carried as the Unicode scalar of the same number.
    fn from_str(s: &str) -> Result<Self> {
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(s.len())?;
        for (offset, c) in s.chars().enumerate() {
            let byte = u8::try_from(c)
                .map_err(|_| decode_error(offset, "character outside the byte alphabet"))?;
            bytes.push(byte);
        }
        decode(&bytes)
    }
}
