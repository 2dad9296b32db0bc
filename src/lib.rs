//! A library containing associative indexes over records whose keys may repeat.
//!
//! Every index implements [`Index`]:
//!
//! - [`OrderedTree`] is an unbalanced binary search tree, one node per record.
//! - [`BalancedTree`] is a red-black tree, one node per distinct key.
//! - [`ProbingHashTable`] is a fixed-capacity open-addressing table with linear probing that keeps
//!   only the first record seen for a key.
//! - [`LinearScan`] keeps records in insertion order and scans them on every lookup.

#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::all,
    missing_debug_implementations
)]
#![deny(clippy::all, missing_docs, rust_2018_idioms, rust_2021_compatibility)]

mod balanced;
mod error;
mod index;
mod linear;
mod ordered;
mod probing;
mod record;

pub use balanced::*;
pub use error::*;
pub use index::*;
pub use linear::*;
pub use ordered::*;
pub use probing::*;
pub use record::*;
