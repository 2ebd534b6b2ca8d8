//! rusty-frame: a small pandas-style tabular data accessor with an
//! egui exploration viewer.
//!
//! The library side loads delimited text files into an immutable
//! [`DataFrame`] of typed columns and answers the usual exploration
//! questions: shape, column names, dtypes, projections, head/tail
//! slices and descriptive statistics. The binary side wraps it in a
//! plot/table viewer.
//!
//! ```no_run
//! use rusty_frame::{read_table, ReadOptions};
//!
//! let opts = ReadOptions::default().skip_rows(8);
//! let data = read_table("Kumpula-June-2016-w-metadata.txt", &opts)?;
//! assert_eq!(data.shape(), (30, 4));
//! let temps = data.select(&["YEARMODA", "TEMP"])?;
//! println!("{}", temps.describe(&[]));
//! # Ok::<(), rusty_frame::FrameError>(())
//! ```

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;

pub use data::loader::{read_table, read_table_from_str, ReadOptions};
pub use data::model::{DataFrame, DataType, Series, Value};
pub use error::{FrameError, Result};
