//! simdiff-core - Comparison-table data model for simdiff
//!
//! This crate holds the tabular side of simdiff: z-test comparison results
//! between paired source tables, ready to be reshaped into chart artifacts
//! by `simdiff-charts`.
//!
//! # Key Components
//!
//! - **SourcePair**: the two source tables being compared
//! - **UnivariateTable / BivariateTable**: row-oriented z-test result tables
//!   with column-based filtering
//! - **ComparisonResults**: insertion-ordered mapping from pair to table
//! - **ValueOrder**: categorical axis ordering, including the numeric
//!   override for age-like fields
//!
//! All data here is read-only input; nothing in this crate performs
//! statistical computation.

pub mod ordering;
pub mod pair;
pub mod table;

pub use ordering::*;
pub use pair::*;
pub use table::*;
