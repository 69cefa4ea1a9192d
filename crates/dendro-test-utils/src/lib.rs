//! Test utilities for Dendro development.
//!
//! [`fixtures`] builds small hand-shaped grids and seeded random fields;
//! [`oracle`] holds slow, obviously-correct reference implementations the
//! kernels are checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;
