//! # RLE List - Run-Length Encoded Byte Sequences
//!
//! A compressed sequential container that stores bytes as runs: consecutive
//! repeated bytes are kept once together with a repeat count.
//!
//! The list always stays maximally compressed:
//! 1. **No adjacent duplicates**: two neighbouring runs never hold the same byte
//! 2. **No empty runs**: every run has length ≥ 1
//!
//! Positions are logical (decoded) positions, while storage stays compressed.
//! The byte `0` is reserved and can never be stored, so the usable alphabet
//! is `1..=255`.
//!
//! ## Example
//!
//! ```
//! use rle_list::RleList;
//!
//! let mut list = RleList::new();
//! for &b in b"aaabbc" {
//!     list.push(b).unwrap();
//! }
//!
//! assert_eq!(list.len(), 6);
//! assert_eq!(list.get(3).unwrap(), b'b');
//! assert_eq!(list.export_to_string().unwrap(), "a3\nb2\nc1\n");
//!
//! list.map(|b| b.to_ascii_uppercase()).unwrap();
//! let decoded: Vec<u8> = list.iter().collect();
//! assert_eq!(decoded, b"AAABBC");
//! ```
//!
//! ## Performance
//!
//! - O(1) append, O(1) size
//! - O(runs) get and remove
//! - O(runs) map, with one transform call per run

pub mod ascii_art;
pub mod codec;
mod error;
mod rle_iter;
mod rle_list;
mod run;


pub use error::{Error, Result};
pub use rle_iter::{Iter, Runs};
pub use rle_list::{RleList, RleStats};
pub use run::{Run, RESERVED_VALUE};
