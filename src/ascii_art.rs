//! Reading and writing ascii-art pictures through a run-length list.
//!
//! A picture is just a byte stream; newlines are stored as ordinary data.

use crate::error::Result;
use crate::rle_list::RleList;
use std::io::{BufRead, BufReader, Read, Write};
use tracing::debug;

/// Builds a list from every byte of `reader`.
///
/// A `0` byte in the stream fails with [`Error::NullArgument`](crate::Error::NullArgument).
pub fn read<R: Read>(reader: R) -> Result<RleList> {
    let mut reader = BufReader::new(reader);
    let mut list = RleList::new();

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        let consumed = chunk.len();
        list.try_extend(chunk.iter().copied())?;
        reader.consume(consumed);
    }

    debug!(
        bytes = list.len(),
        runs = list.run_count(),
        "read ascii art"
    );
    Ok(list)
}

/// Writes the logical bytes of `list` to `writer`.
pub fn print<W: Write>(list: &RleList, writer: &mut W) -> Result<()> {
    let mut expanded = Vec::new();
    for run in list.runs() {
        expanded.clear();
        expanded.resize(run.length, run.value);
        writer.write_all(&expanded)?;
    }
    writer.flush()?;

    debug!(bytes = list.len(), "printed ascii art");
    Ok(())
}

/// Writes `list` to `writer` in the encoded `<byte><length>\n` form.
pub fn print_encoded<W: Write>(list: &RleList, writer: &mut W) -> Result<()> {
    list.write_encoded(writer)?;
    writer.flush()?;

    debug!(runs = list.run_count(), "printed encoded ascii art");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const PICTURE: &[u8] = b"  **  \n ****\n******\n";

    #[test]
    fn test_read_keeps_newlines() {
        let list = read(PICTURE).unwrap();
        assert_eq!(list.len(), PICTURE.len());
        assert_eq!(list.iter().collect::<Vec<_>>(), PICTURE);
    }

    #[test]
    fn test_read_empty() {
        let list = read(&b""[..]).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_read_rejects_reserved_byte() {
        assert!(matches!(read(&b"ab\0"[..]), Err(Error::NullArgument)));
    }

    #[test]
    fn test_print_identity() {
        let list = read(PICTURE).unwrap();
        let mut out = Vec::new();
        print(&list, &mut out).unwrap();
        assert_eq!(out, PICTURE);
    }

    #[test]
    fn test_print_encoded() {
        let list = read(&b"@@@ \n"[..]).unwrap();
        let mut out = Vec::new();
        print_encoded(&list, &mut out).unwrap();
        assert_eq!(out, b"@3\n 1\n\n1\n");
    }

    #[test]
    fn test_print_after_edit() {
        let mut list = read(&b"ab\ncd\n"[..]).unwrap();
        list.map(|v| if v == b'\n' { v } else { b'#' }).unwrap();
        let mut out = Vec::new();
        print(&list, &mut out).unwrap();
        assert_eq!(out, b"##\n##\n");
    }
}
