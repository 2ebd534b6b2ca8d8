use std::path::Path;

use crate::data::model::{DataFrame, DataType, Series, Value};
use crate::error::{FrameError, Result};

// ---------------------------------------------------------------------------
// Read options
// ---------------------------------------------------------------------------

/// Options for [`read_table`]. The defaults match a plain comma-separated
/// file with the header on the first line.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field separator, a single byte.
    pub delimiter: u8,
    /// Number of leading physical lines (metadata, blank lines included)
    /// to discard before the header.
    pub skip_rows: usize,
    /// If set, only these columns are kept, in file order.
    pub use_cols: Option<Vec<String>>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            delimiter: b',',
            skip_rows: 0,
            use_cols: None,
        }
    }
}

impl ReadOptions {
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }

    pub fn use_cols<S: Into<String>>(mut self, cols: impl IntoIterator<Item = S>) -> Self {
        self.use_cols = Some(cols.into_iter().map(Into::into).collect());
        self
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a delimited text file into a [`DataFrame`].
///
/// The first line after `skip_rows` supplies the column names; every
/// following line is one data row with a matching field count. Column
/// dtypes are inferred per column over the raw cells (see
/// [`DataType`]); empty cells and the `NaN` / `nan` / `NA` tokens are
/// missing values.
pub fn read_table(path: impl AsRef<Path>, options: &ReadOptions) -> Result<DataFrame> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| FrameError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let frame = read_table_from_str(&raw, options)?;
    log::info!(
        "loaded {:?}: {} rows x {} columns",
        path,
        frame.len(),
        frame.shape().1
    );
    Ok(frame)
}

/// Same as [`read_table`] for an in-memory source.
pub fn read_table_from_str(raw: &str, options: &ReadOptions) -> Result<DataFrame> {
    let body = skip_lines(raw, options.skip_rows);
    if body.trim().is_empty() {
        return Ok(DataFrame::empty());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .from_reader(body.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    for (i, name) in headers.iter().enumerate() {
        if headers[..i].contains(name) {
            return Err(FrameError::DuplicateColumn(name.clone()));
        }
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| remap_csv_error(e, options.skip_rows as u64))?;
        for (col, field) in record.iter().enumerate() {
            cells[col].push(field.to_string());
        }
    }

    let n_rows = cells.first().map_or(0, Vec::len);
    let index: Vec<i64> = (0..n_rows as i64).collect();

    let mut columns: Vec<Series> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw_cells)| {
            let dtype = classify_column(&raw_cells);
            let values = parse_column(raw_cells, dtype);
            Series::from_parts(name, dtype, values, index.clone())
        })
        .collect();

    if let Some(selected) = &options.use_cols {
        for name in selected {
            if !columns.iter().any(|c| c.name() == name.as_str()) {
                return Err(FrameError::UnknownColumn(name.clone()));
            }
        }
        columns.retain(|c| selected.iter().any(|s| s == c.name()));
    }

    DataFrame::new(columns)
}

// ---------------------------------------------------------------------------
// Cell classification
// ---------------------------------------------------------------------------

fn is_missing(cell: &str) -> bool {
    matches!(cell, "" | "NaN" | "nan" | "NA")
}

/// One classification pass over the raw cell strings of a column.
///
/// * every non-missing cell parses as `i64` and none is missing → `Integer`
/// * every non-missing cell parses as `f64` → `Float`
///   (a missing cell therefore demotes a would-be integer column)
/// * anything else → `Text`
fn classify_column(cells: &[String]) -> DataType {
    // a column with no rows defaults to Float, same as Series dtype
    // inference over an empty value list
    if cells.is_empty() {
        return DataType::Float;
    }
    let mut any_missing = false;
    let mut all_int = true;
    let mut all_num = true;
    for cell in cells {
        let token = cell.trim();
        if is_missing(token) {
            any_missing = true;
            continue;
        }
        if token.parse::<i64>().is_err() {
            all_int = false;
        }
        if token.parse::<f64>().is_err() {
            all_num = false;
        }
    }
    if all_num && all_int && !any_missing {
        DataType::Integer
    } else if all_num {
        DataType::Float
    } else {
        DataType::Text
    }
}

fn parse_column(cells: Vec<String>, dtype: DataType) -> Vec<Value> {
    cells
        .into_iter()
        .map(|cell| {
            let token = cell.trim();
            if is_missing(token) {
                return Value::Null;
            }
            match dtype {
                DataType::Integer => token.parse::<i64>().map_or(Value::Null, Value::Int),
                // spellings like "-nan" get past is_missing but still
                // parse to a NaN float; those are missing values too
                DataType::Float => match token.parse::<f64>() {
                    Ok(v) if v.is_nan() => Value::Null,
                    Ok(v) => Value::Float(v),
                    Err(_) => Value::Null,
                },
                DataType::Text => Value::Text(cell),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Drop the first `n` physical lines, blank ones included.
fn skip_lines(raw: &str, n: usize) -> &str {
    let mut rest = raw;
    for _ in 0..n {
        match rest.find('\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return "",
        }
    }
    rest
}

/// Turn the csv crate's unequal-length error into [`FrameError::MalformedRow`]
/// with a line number relative to the original file.
fn remap_csv_error(err: csv::Error, skipped: u64) -> FrameError {
    if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = err.kind() {
        let line = pos.as_ref().map_or(0, |p| p.line());
        return FrameError::MalformedRow {
            line: skipped + line,
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    FrameError::Csv(err)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const WEATHER: &str = "\
# Data file contents: Daily temperatures (mean, min, max)
#                     for June 1-4, 2016
# Data source: https://www.ncdc.noaa.gov/cdo-web/
#
# comment line five
# comment line six
# comment line seven

YEARMODA,TEMP,MAX,MIN
20160601,65.5,73.6,54.7
20160602,65.8,80.8,55.0
20160603,68.4,,55.6
20160604,57.5,70.9,47.3
";

    #[test]
    fn skips_metadata_lines_before_the_header() {
        let opts = ReadOptions::default().skip_rows(8);
        let df = read_table_from_str(WEATHER, &opts).unwrap();
        assert_eq!(df.shape(), (4, 4));
        assert_eq!(df.column_names(), vec!["YEARMODA", "TEMP", "MAX", "MIN"]);
        assert_eq!(df.index(), &[0, 1, 2, 3]);
    }

    #[test]
    fn plain_csv_needs_no_options() {
        let df = read_table_from_str("a,b\n1,2\n", &ReadOptions::default()).unwrap();
        assert_eq!(df.shape(), (1, 2));
    }

    #[test]
    fn infers_integer_and_float_dtypes() {
        let opts = ReadOptions::default().skip_rows(8);
        let df = read_table_from_str(WEATHER, &opts).unwrap();
        let dtypes = df.dtypes();
        assert_eq!(dtypes[0], ("YEARMODA", DataType::Integer));
        assert_eq!(dtypes[1], ("TEMP", DataType::Float));
        // MAX holds one empty cell: still float, with a missing value
        assert_eq!(dtypes[2], ("MAX", DataType::Float));
        assert!(df.column("MAX").unwrap().values()[2].is_null());
    }

    #[test]
    fn nan_token_demotes_an_integer_column_to_float() {
        let df =
            read_table_from_str("a,b\n1,x\nNaN,y\n", &ReadOptions::default()).unwrap();
        assert_eq!(df.dtypes()[0], ("a", DataType::Float));
        assert_eq!(df.dtypes()[1], ("b", DataType::Text));
    }

    #[test]
    fn use_cols_projects_in_file_order() {
        let opts = ReadOptions::default()
            .skip_rows(8)
            .use_cols(["YEARMODA", "TEMP"]);
        let df = read_table_from_str(WEATHER, &opts).unwrap();
        assert_eq!(df.shape(), (4, 2));
        assert_eq!(df.column_names(), vec!["YEARMODA", "TEMP"]);
    }

    #[test]
    fn use_cols_with_unknown_name_fails() {
        let opts = ReadOptions::default().skip_rows(8).use_cols(["TEMPERATURE"]);
        let err = read_table_from_str(WEATHER, &opts).unwrap_err();
        assert!(matches!(err, FrameError::UnknownColumn(name) if name == "TEMPERATURE"));
    }

    #[test]
    fn wrong_field_count_reports_the_file_line() {
        let src = "# meta\na,b\n1,2\n3,4,5\n";
        let opts = ReadOptions::default().skip_rows(1);
        let err = read_table_from_str(src, &opts).unwrap_err();
        match err {
            FrameError::MalformedRow {
                line,
                expected,
                found,
            } => {
                // line 1 is the metadata, 2 the header, 4 the bad row
                assert_eq!(line, 4);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_header_names_fail() {
        let err =
            read_table_from_str("a,a\n1,2\n", &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn alternate_delimiter() {
        let df = read_table_from_str(
            "a;b\n1;2\n3;4\n",
            &ReadOptions::default().delimiter(b';'),
        )
        .unwrap();
        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.dtypes()[0], ("a", DataType::Integer));
    }

    #[test]
    fn skipping_past_the_end_yields_an_empty_frame() {
        let df = read_table_from_str("only one line", &ReadOptions::default().skip_rows(5))
            .unwrap();
        assert_eq!(df.shape(), (0, 0));
    }

    #[test]
    fn header_with_no_data_rows_keeps_the_columns() {
        let df = read_table_from_str("a,b\n", &ReadOptions::default()).unwrap();
        assert_eq!(df.shape(), (0, 2));
        // empty columns default to float, matching Series inference
        assert_eq!(df.dtypes()[0], ("a", DataType::Float));
        assert_eq!(df.dtypes()[1], ("b", DataType::Float));
    }

    #[test]
    fn negative_nan_spelling_is_a_missing_value() {
        let df = read_table_from_str("a\n1.5\n-nan\n", &ReadOptions::default()).unwrap();
        assert_eq!(df.dtypes()[0], ("a", DataType::Float));
        assert!(df.column("a").unwrap().values()[1].is_null());
        assert_eq!(df.column("a").unwrap().count(), 1);
    }

    #[test]
    fn read_table_reports_missing_files() {
        let err = read_table("/no/such/file.txt", &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, FrameError::SourceNotFound { .. }));
    }

    #[test]
    fn read_table_round_trips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WEATHER.as_bytes()).unwrap();
        let df = read_table(file.path(), &ReadOptions::default().skip_rows(8)).unwrap();
        assert_eq!(df.shape(), (4, 4));
    }
}
