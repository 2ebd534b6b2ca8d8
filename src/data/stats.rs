//! Per-column reductions and the `describe()` summary.
//!
//! Every reduction skips missing values and yields `None` instead of
//! failing when nothing is left to reduce. Standard deviation is the
//! sample one (n−1 divisor); percentiles interpolate linearly between
//! order statistics.

use crate::data::model::{DataFrame, DataType, Series, Value};

impl Series {
    /// Non-missing values as `f64`, in row order. Text series yield
    /// nothing.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values()
            .iter()
            .filter_map(Value::as_f64)
            .filter(|v| !v.is_nan())
            .collect()
    }

    /// Count of non-missing values.
    pub fn count(&self) -> usize {
        self.values().iter().filter(|v| !v.is_null()).count()
    }

    pub fn mean(&self) -> Option<f64> {
        let vals = self.numeric_values();
        if vals.is_empty() {
            return None;
        }
        Some(vals.iter().sum::<f64>() / vals.len() as f64)
    }

    pub fn min(&self) -> Option<f64> {
        self.numeric_values().into_iter().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.numeric_values().into_iter().reduce(f64::max)
    }

    /// Sample standard deviation. Needs at least two values.
    pub fn std(&self) -> Option<f64> {
        let vals = self.numeric_values();
        if vals.len() < 2 {
            return None;
        }
        let mean = vals.iter().sum::<f64>() / vals.len() as f64;
        let var = vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (vals.len() - 1) as f64;
        Some(var.sqrt())
    }

    pub fn median(&self) -> Option<f64> {
        self.quantile(0.5)
    }

    /// Quantile `q` in `[0, 1]`, linear interpolation between order
    /// statistics (the Pandas default).
    pub fn quantile(&self, q: f64) -> Option<f64> {
        let mut vals = self.numeric_values();
        if vals.is_empty() {
            return None;
        }
        vals.sort_by(f64::total_cmp);
        let q = q.clamp(0.0, 1.0);
        let pos = q * (vals.len() - 1) as f64;
        let lo = pos.floor() as usize;
        let hi = pos.ceil() as usize;
        if lo == hi {
            return Some(vals[lo]);
        }
        let frac = pos - lo as f64;
        Some(vals[lo] + frac * (vals[hi] - vals[lo]))
    }
}

/// Row labels of the `describe()` output, in order.
const DESCRIBE_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl DataFrame {
    /// Summary statistics for every numeric column whose dtype is not
    /// in `exclude`. Text columns are always left out. The result has
    /// a leading `statistic` label column plus one float column per
    /// summarised input column.
    pub fn describe(&self, exclude: &[DataType]) -> DataFrame {
        // the label column must not shadow an input column of the
        // same name
        let mut label_name = String::from("statistic");
        while self.columns().iter().any(|c| c.name() == label_name) {
            label_name.insert(0, '_');
        }
        let labels = Series::new(
            label_name,
            DESCRIBE_ROWS.iter().map(|&s| Value::from(s)).collect(),
        );
        let mut columns = vec![labels];

        for col in self.columns() {
            if !col.dtype().is_numeric() || exclude.contains(&col.dtype()) {
                continue;
            }
            let opt = |v: Option<f64>| v.map_or(Value::Null, Value::Float);
            let values = vec![
                Value::Float(col.count() as f64),
                opt(col.mean()),
                opt(col.std()),
                opt(col.min()),
                opt(col.quantile(0.25)),
                opt(col.quantile(0.5)),
                opt(col.quantile(0.75)),
                opt(col.max()),
            ];
            columns.push(Series::new(col.name(), values));
        }

        // lengths are all 8, input names are already unique and the
        // label name was disambiguated above
        DataFrame::new(columns).unwrap_or_else(|_| DataFrame::empty())
    }
}
