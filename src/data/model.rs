use std::fmt;
use std::ops::Range;

use crate::error::{FrameError, Result};

// ---------------------------------------------------------------------------
// DataType – inferred type of a column
// ---------------------------------------------------------------------------

/// The inferred type of a column, mirroring the common Pandas dtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Float,
    Text,
}

impl DataType {
    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Integer | DataType::Float)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Integer => write!(f, "int64"),
            DataType::Float => write!(f, "float64"),
            DataType::Text => write!(f, "str"),
        }
    }
}

// ---------------------------------------------------------------------------
// Value – a single cell
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. `Null` marks missing data and is
/// excluded from all numeric reductions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Interpret the value as an `f64` for numeric reductions.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => write!(f, "NaN"),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

// ---------------------------------------------------------------------------
// Series – one named, typed column
// ---------------------------------------------------------------------------

/// A single named, typed sequence of values with integer row labels.
/// One column of a [`DataFrame`], or a standalone 1-D sequence.
#[derive(Debug, Clone)]
pub struct Series {
    name: String,
    dtype: DataType,
    values: Vec<Value>,
    index: Vec<i64>,
}

impl Series {
    /// Build a series from raw values, inferring the dtype.
    ///
    /// A single float among integers promotes the whole series to
    /// `Float`; any text value makes it `Text`; a missing value rules
    /// out `Integer` (the column becomes `Float`, like Pandas does).
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        let dtype = infer_dtype(&values);
        let values = promote(values, dtype);
        let index = (0..values.len() as i64).collect();
        Series {
            name: name.into(),
            dtype,
            values,
            index,
        }
    }

    /// Internal constructor for callers that already classified the
    /// column (the loader) or sliced an existing one.
    pub(crate) fn from_parts(
        name: String,
        dtype: DataType,
        values: Vec<Value>,
        index: Vec<i64>,
    ) -> Self {
        debug_assert_eq!(values.len(), index.len());
        Series {
            name,
            dtype,
            values,
            index,
        }
    }

    /// Replace the default `0..n` row labels with custom ones.
    pub fn with_index(mut self, index: Vec<i64>) -> Result<Self> {
        if index.len() != self.values.len() {
            return Err(FrameError::LengthMismatch {
                column: self.name.clone(),
                expected: self.values.len(),
                found: index.len(),
            });
        }
        self.index = index;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn index(&self) -> &[i64] {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&Value> {
        self.values.get(pos)
    }

    /// Positional slice keeping the original row labels.
    pub(crate) fn take_range(&self, range: Range<usize>) -> Series {
        Series {
            name: self.name.clone(),
            dtype: self.dtype,
            values: self.values[range.clone()].to_vec(),
            index: self.index[range].to_vec(),
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .index
            .iter()
            .map(|i| i.to_string().len())
            .max()
            .unwrap_or(1);
        for (label, value) in self.index.iter().zip(&self.values) {
            writeln!(f, "{label:>label_width$}    {value}")?;
        }
        write!(f, "Name: {}, dtype: {}", self.name, self.dtype)
    }
}

/// Classify a value sequence into one dtype.
fn infer_dtype(values: &[Value]) -> DataType {
    let mut any_null = false;
    let mut any_float = false;
    for v in values {
        match v {
            Value::Text(_) => return DataType::Text,
            Value::Float(_) => any_float = true,
            Value::Null => any_null = true,
            Value::Int(_) => {}
        }
    }
    if values.is_empty() || any_float || any_null {
        DataType::Float
    } else {
        DataType::Integer
    }
}

/// Normalise values to the inferred dtype, e.g. `Int(7)` → `Float(7.0)`
/// inside a float column. A float NaN is the same thing as a missing
/// value and becomes `Null`.
fn promote(values: Vec<Value>, dtype: DataType) -> Vec<Value> {
    values
        .into_iter()
        .map(|v| match (dtype, v) {
            (_, Value::Float(x)) if x.is_nan() => Value::Null,
            (DataType::Float, Value::Int(i)) => Value::Float(i as f64),
            (DataType::Text, Value::Int(i)) => Value::Text(i.to_string()),
            (DataType::Text, Value::Float(x)) => Value::Text(x.to_string()),
            (_, v) => v,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// DataFrame – ordered collection of equal-length columns
// ---------------------------------------------------------------------------

/// An immutable table: ordered named columns of equal length sharing one
/// integer row-label sequence. Every operation returns a new value.
#[derive(Debug, Clone)]
pub struct DataFrame {
    columns: Vec<Series>,
}

impl DataFrame {
    /// Assemble a frame from columns. Column names must be unique and
    /// all columns equal-length; row labels are taken from the first
    /// column.
    pub fn new(columns: Vec<Series>) -> Result<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(columns.len());
        for col in &columns {
            if seen.contains(&col.name()) {
                return Err(FrameError::DuplicateColumn(col.name().to_string()));
            }
            seen.push(col.name());
        }
        if let Some(first) = columns.first() {
            let expected = first.len();
            for col in &columns[1..] {
                if col.len() != expected {
                    return Err(FrameError::LengthMismatch {
                        column: col.name().to_string(),
                        expected,
                        found: col.len(),
                    });
                }
            }
            let index = first.index().to_vec();
            let columns = columns
                .into_iter()
                .map(|c| Series::from_parts(c.name, c.dtype, c.values, index.clone()))
                .collect();
            return Ok(DataFrame { columns });
        }
        Ok(DataFrame { columns })
    }

    /// A valid zero-row, zero-column frame.
    pub fn empty() -> Self {
        DataFrame {
            columns: Vec::new(),
        }
    }

    /// Build a frame from ordered `name → values` pairs, the dtype of
    /// each column inferred independently.
    pub fn from_mapping<S, I>(pairs: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<Value>)>,
    {
        let columns = pairs
            .into_iter()
            .map(|(name, values)| Series::new(name, values))
            .collect();
        Self::new(columns)
    }

    /// `(row_count, column_count)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.columns.len())
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Series::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Series::name).collect()
    }

    /// `name → dtype` pairs in insertion order.
    pub fn dtypes(&self) -> Vec<(&str, DataType)> {
        self.columns
            .iter()
            .map(|c| (c.name(), c.dtype()))
            .collect()
    }

    /// The shared row labels.
    pub fn index(&self) -> &[i64] {
        self.columns.first().map_or(&[], |c| c.index())
    }

    /// All columns, in order.
    pub fn columns(&self) -> &[Series] {
        &self.columns
    }

    /// Borrow one column by name.
    pub fn column(&self, name: &str) -> Result<&Series> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| FrameError::UnknownColumn(name.to_string()))
    }

    /// Extract one column as a standalone [`Series`].
    pub fn select_one(&self, name: &str) -> Result<Series> {
        self.column(name).cloned()
    }

    /// Project a subset of columns, in the requested order. Row order
    /// and labels are preserved.
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let columns = names
            .iter()
            .map(|n| self.select_one(n))
            .collect::<Result<Vec<_>>>()?;
        Self::new(columns)
    }

    /// First `n` rows (all rows when `n` exceeds the length).
    pub fn head(&self, n: usize) -> DataFrame {
        let end = n.min(self.len());
        self.slice(0..end)
    }

    /// Last `n` rows (all rows when `n` exceeds the length).
    pub fn tail(&self, n: usize) -> DataFrame {
        let start = self.len().saturating_sub(n);
        self.slice(start..self.len())
    }

    fn slice(&self, range: Range<usize>) -> DataFrame {
        DataFrame {
            columns: self
                .columns
                .iter()
                .map(|c| c.take_range(range.clone()))
                .collect(),
        }
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "Empty DataFrame");
        }

        let rendered: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.values().iter().map(|v| v.to_string()).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(c, cells)| {
                cells
                    .iter()
                    .map(String::len)
                    .max()
                    .unwrap_or(0)
                    .max(c.name().len())
            })
            .collect();
        let label_width = self
            .index()
            .iter()
            .map(|i| i.to_string().len())
            .max()
            .unwrap_or(1);

        write!(f, "{:>label_width$}", "")?;
        for (col, w) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", col.name())?;
        }
        for (row, label) in self.index().iter().enumerate() {
            write!(f, "\n{label:>label_width$}")?;
            for (cells, w) in rendered.iter().zip(&widths) {
                write!(f, "  {:>w$}", cells[row])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(vals: &[f64]) -> Vec<Value> {
        vals.iter().map(|&v| Value::Float(v)).collect()
    }

    #[test]
    fn single_float_promotes_series_to_float() {
        let s = Series::new(
            "numbers",
            vec![
                Value::Int(4),
                Value::Int(5),
                Value::Int(6),
                Value::Float(7.0),
            ],
        );
        assert_eq!(s.dtype(), DataType::Float);
        assert_eq!(s.values()[0], Value::Float(4.0));
    }

    #[test]
    fn all_integer_values_stay_integer() {
        let s = Series::new("n", vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(s.dtype(), DataType::Integer);
    }

    #[test]
    fn missing_value_rules_out_integer() {
        let s = Series::new("n", vec![Value::Int(1), Value::Null]);
        assert_eq!(s.dtype(), DataType::Float);
    }

    #[test]
    fn custom_index_must_match_length() {
        let s = Series::new("n", floats(&[1.0, 2.0]));
        let err = s.clone().with_index(vec![10, 20, 30]).unwrap_err();
        assert!(matches!(err, FrameError::LengthMismatch { .. }));
        let s = s.with_index(vec![10, 20]).unwrap();
        assert_eq!(s.index(), &[10, 20]);
    }

    #[test]
    fn empty_frame_has_zero_shape() {
        let df = DataFrame::empty();
        assert_eq!(df.shape(), (0, 0));
        assert!(df.column_names().is_empty());
        assert!(df.index().is_empty());
    }

    #[test]
    fn from_mapping_rejects_unequal_lengths() {
        let err = DataFrame::from_mapping(vec![
            ("a", vec![Value::Int(1), Value::Int(2)]),
            ("b", vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            FrameError::LengthMismatch {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_column_names_are_rejected() {
        let err = DataFrame::from_mapping(vec![
            ("a", vec![Value::Int(1)]),
            ("a", vec![Value::Int(2)]),
        ])
        .unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn(name) if name == "a"));
    }

    #[test]
    fn select_preserves_row_count_and_order() {
        let df = DataFrame::from_mapping(vec![
            ("x", floats(&[1.0, 2.0, 3.0])),
            ("y", floats(&[4.0, 5.0, 6.0])),
            ("z", floats(&[7.0, 8.0, 9.0])),
        ])
        .unwrap();

        let sub = df.select(&["z", "x"]).unwrap();
        assert_eq!(sub.shape(), (3, 2));
        assert_eq!(sub.column_names(), vec!["z", "x"]);
        assert_eq!(sub.index(), df.index());

        let one = df.select(&["y"]).unwrap();
        assert_eq!(one.column_names(), vec!["y"]);
    }

    #[test]
    fn select_unknown_column_fails() {
        let df = DataFrame::from_mapping(vec![("x", floats(&[1.0]))]).unwrap();
        let err = df.select(&["nope"]).unwrap_err();
        assert!(matches!(err, FrameError::UnknownColumn(name) if name == "nope"));
    }

    #[test]
    fn head_and_tail_keep_row_labels() {
        let df = DataFrame::from_mapping(vec![("x", floats(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]))])
            .unwrap();
        assert_eq!(df.head(5).index(), &[0, 1, 2, 3, 4]);
        assert_eq!(df.tail(2).index(), &[5, 6]);
        // more rows requested than available: everything, no error
        assert_eq!(df.head(100).shape(), (7, 1));
        assert_eq!(df.tail(100).shape(), (7, 1));
    }

    #[test]
    fn tail_of_head_is_idempotent_at_the_boundary() {
        let df = DataFrame::from_mapping(vec![("x", floats(&[1.0, 2.0, 3.0, 4.0, 5.0]))]).unwrap();
        let k = 3;
        let head = df.head(k);
        let round_trip = head.tail(k);
        assert_eq!(round_trip.index(), head.index());
        assert_eq!(
            round_trip.column("x").unwrap().values(),
            head.column("x").unwrap().values()
        );
    }

    #[test]
    fn display_renders_aligned_grid() {
        let df = DataFrame::from_mapping(vec![
            ("name", vec![Value::from("Hanko"), Value::from("Heinola")]),
            ("lat", floats(&[59.77, 61.2])),
        ])
        .unwrap();
        let text = df.to_string();
        assert!(text.contains("name"));
        assert!(text.contains("Heinola"));
        assert_eq!(DataFrame::empty().to_string(), "Empty DataFrame");
    }
}
