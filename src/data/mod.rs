//! Data layer: core types, loading, and statistics.
//!
//! Architecture:
//! ```text
//!  .txt / .csv (delimited text)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  skip metadata, parse header + rows → DataFrame
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │  DataFrame    │  Vec<Series>, shared integer row labels
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  stats    │  per-column reductions, describe()
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod stats;
