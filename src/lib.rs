//! K-way merging of sorted sequences with a loser tree.
//!
//! A [`LoserTree`] merges `k` sorted [`Sequence`]s into one sorted stream. Construction
//! plays a single-elimination tournament between the first values of all sequences
//! (`O(k)` comparisons); afterwards every emitted value costs one replay of the winner's
//! path to the root, `O(log k)` comparisons and no data movement besides slot indices.
//!
//! Exhausted sequences are represented by a caller-supplied *sentinel*, a value that
//! compares greater than or equal to anything the sequences can produce. The tree reports
//! the sentinel as its winner once every sequence is exhausted.
//!
//! By default the merge is stable: among equal values the one from the lower-indexed
//! sequence comes first. `#![no_std]`, with `Vec`-backed storage behind the `vec_storage`
//! feature.
//!
//! # Quick start
//!
//! ```
//! # #[cfg(feature = "vec_storage")]
//! # {
//! use loser_tree::{merge, SliceSequence};
//!
//! let a = [1, 3, 5];
//! let b = [2, 4, 6];
//! let merged = merge([SliceSequence::new(&a), SliceSequence::new(&b)], u32::MAX).into_vec();
//! assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
//! # }
//! ```
//!
//! # Driving the tree by hand
//!
//! [`LoserTree::winner`] reports the current smallest value and the index of the sequence
//! it came from; [`LoserTree::advance`] consumes it. The sentinel signals the end:
//!
//! ```
//! # #[cfg(feature = "vec_storage")]
//! # {
//! use loser_tree::{IterSequence, Tournament};
//!
//! let mut tree = Tournament::new(
//!     [IterSequence::new(vec![1, 3]), IterSequence::new(vec![2, 4, 5])],
//!     u64::MAX,
//! )
//! .build();
//!
//! let mut out = Vec::new();
//! while *tree.winner().0 != u64::MAX {
//!     let (&value, idx) = tree.winner();
//!     out.push((value, idx));
//!     tree.advance();
//! }
//! assert_eq!(out, vec![(1, 0), (2, 1), (3, 0), (4, 1), (5, 1)]);
//! # }
//! ```
//!
//! Note that only the current value of each sequence is considered.
//! If the input sequences are not sorted, the result won't be sorted either.
//!
//! # Crate Features
//! - `vec_storage` (default): heap-allocated storage and [`LoserTree::into_vec`]
//! - `stackvec_storage`: fixed-capacity storage via [`Tournament::new_stackvec`]
//! - `forbid_unsafe`: bounds-check every slot access, even in release builds
#![no_std]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(feature = "forbid_unsafe", forbid(unsafe_code))]

#[cfg(feature = "vec_storage")]
extern crate alloc;

pub mod internal;
pub mod loser_tree;
pub mod merged;
pub mod sequence;
pub mod storage;

pub use loser_tree::{LoserTree, Tournament};
pub use merged::MergedSequence;
pub use sequence::{IterSequence, Sequence, SliceSequence};

#[cfg(feature = "vec_storage")]
mod convenience;
#[cfg(feature = "vec_storage")]
pub use convenience::*;
