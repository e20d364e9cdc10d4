// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::iter;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

use crate::error::{BsplineError, Result, ensure_len};
use crate::estimators::approaches::bspline::batch::BsplineMutualInformationBatchRows;
use crate::estimators::approaches::bspline::config::BsplineConfig;

/// Numeric matrix whose rows and columns carry names (e.g. genes x samples).
///
/// The delimited text layout is a header line of column names followed by one line per
/// row, the first field being the row name. A header that also names the row-label
/// column is accepted; its first cell is dropped. Fields may be quoted, so names can
/// contain the separator.
#[derive(Debug, Clone)]
pub struct LabeledMatrix {
    data: Array2<f64>,
    row_names: Vec<String>,
    col_names: Vec<String>,
    row_index: HashMap<String, usize>,
    col_index: HashMap<String, usize>,
}

impl LabeledMatrix {
    pub fn new(data: Array2<f64>, row_names: Vec<String>, col_names: Vec<String>) -> Result<Self> {
        ensure_len(data.nrows(), row_names.len())?;
        ensure_len(data.ncols(), col_names.len())?;
        let row_index = index_names(&row_names);
        let col_index = index_names(&col_names);
        Ok(Self { data, row_names, col_names, row_index, col_index })
    }

    /// Parse delimiter-separated text.
    ///
    /// Blank lines are skipped. An empty cell is an error rather than a missing value.
    pub fn from_reader<R: Read>(reader: R, sep: char) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter(sep)?)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);
        let mut records = rdr.records();
        let header = match records.next() {
            Some(record) => record.map_err(csv_error)?,
            None => return Err(BsplineError::EmptyInput),
        };
        let mut col_names: Vec<String> = header.iter().map(str::to_owned).collect();

        let mut row_names = Vec::new();
        let mut values = Vec::new();
        for record in records {
            let record = record.map_err(csv_error)?;
            let line = record_line(&record);
            if row_names.is_empty() && record.len() == col_names.len() {
                // header included a name for the row-label column
                col_names.remove(0);
            }
            if record.len() != col_names.len() + 1 {
                return Err(BsplineError::Parse {
                    line,
                    message: format!("expected {} fields, found {}", col_names.len() + 1, record.len()),
                });
            }
            row_names.push(record[0].to_owned());
            for (field, col) in record.iter().skip(1).zip(&col_names) {
                if field.is_empty() {
                    return Err(BsplineError::Parse { line, message: format!("empty value in column {col:?}") });
                }
                let v = field.parse::<f64>().map_err(|e| BsplineError::Parse {
                    line,
                    message: format!("invalid number {field:?}: {e}"),
                })?;
                values.push(v);
            }
        }

        let data = Array2::from_shape_vec((row_names.len(), col_names.len()), values)
            .map_err(|e| BsplineError::Parse { line: 0, message: e.to_string() })?;
        debug!(rows = data.nrows(), cols = data.ncols(), "loaded labeled matrix");
        Self::new(data, row_names, col_names)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, sep: char) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file, sep)
    }

    /// Write in the delimited layout, with a `#HEADER` cell labelling the name column.
    ///
    /// Names containing the separator or quotes are quoted, so the output reads back
    /// unchanged through [`LabeledMatrix::from_reader`].
    pub fn write_to<W: Write>(&self, writer: W, sep: char) -> Result<()> {
        let mut wtr = WriterBuilder::new().delimiter(delimiter(sep)?).from_writer(writer);
        wtr.write_record(iter::once("#HEADER").chain(self.col_names.iter().map(String::as_str)))
            .map_err(csv_error)?;
        for (name, row) in self.row_names.iter().zip(self.data.outer_iter()) {
            wtr.write_record(iter::once(name.clone()).chain(row.iter().map(f64::to_string)))
                .map_err(csv_error)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn nrows(&self) -> usize { self.data.nrows() }

    pub fn ncols(&self) -> usize { self.data.ncols() }

    pub fn data(&self) -> ArrayView2<'_, f64> { self.data.view() }

    pub fn row_names(&self) -> &[String] { &self.row_names }

    pub fn col_names(&self) -> &[String] { &self.col_names }

    /// Index of a row name; with duplicate names the last one wins.
    pub fn row_position(&self, name: &str) -> Option<usize> { self.row_index.get(name).copied() }

    pub fn col_position(&self, name: &str) -> Option<usize> { self.col_index.get(name).copied() }

    /// Row by name; with duplicate names the last one wins.
    pub fn row(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.row_position(name).map(|i| self.data.row(i))
    }

    pub fn col(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.col_position(name).map(|j| self.data.column(j))
    }

    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        Some(self.data[[self.row_position(row)?, self.col_position(col)?]])
    }

    /// Overwrite one cell addressed by names.
    pub fn set(&mut self, row: &str, col: &str, value: f64) -> Result<()> {
        let i = lookup(&self.row_index, row)?;
        let j = lookup(&self.col_index, col)?;
        self.data[[i, j]] = value;
        Ok(())
    }

    /// Overwrite a whole row addressed by name.
    pub fn set_row(&mut self, name: &str, values: ArrayView1<'_, f64>) -> Result<()> {
        let i = lookup(&self.row_index, name)?;
        ensure_len(self.ncols(), values.len())?;
        self.data.row_mut(i).assign(&values);
        Ok(())
    }

    /// Sub-matrix by names, in the order given. Names may repeat.
    pub fn select(&self, rows: &[&str], cols: &[&str]) -> Result<Self> {
        let rows = lookup_all(&self.row_index, rows)?;
        let cols = lookup_all(&self.col_index, cols)?;
        self.select_indices(&rows, &cols)
    }

    /// All columns of the named rows.
    pub fn select_rows(&self, rows: &[&str]) -> Result<Self> {
        let rows = lookup_all(&self.row_index, rows)?;
        let cols: Vec<usize> = (0..self.ncols()).collect();
        self.select_indices(&rows, &cols)
    }

    /// All rows of the named columns.
    pub fn select_cols(&self, cols: &[&str]) -> Result<Self> {
        let rows: Vec<usize> = (0..self.nrows()).collect();
        let cols = lookup_all(&self.col_index, cols)?;
        self.select_indices(&rows, &cols)
    }

    /// Sub-matrix by position; ranges can be passed as `&(a..b).collect::<Vec<_>>()`.
    pub fn select_indices(&self, rows: &[usize], cols: &[usize]) -> Result<Self> {
        check_bounds(rows, self.nrows())?;
        check_bounds(cols, self.ncols())?;
        let data = self.data.select(Axis(0), rows).select(Axis(1), cols);
        let row_names = rows.iter().map(|&i| self.row_names[i].clone()).collect();
        let col_names = cols.iter().map(|&j| self.col_names[j].clone()).collect();
        Self::new(data, row_names, col_names)
    }

    /// Stack `other` below `self`. Row names of `other` that already occur in `self`
    /// get `_` appended until unique; column names are taken from `self`.
    pub fn rbind(&self, other: &Self) -> Result<Self> {
        ensure_len(self.ncols(), other.ncols())?;
        let data = ndarray::concatenate(Axis(0), &[self.data.view(), other.data.view()])
            .map_err(|_| BsplineError::InvalidDimensions { expected: self.ncols(), actual: other.ncols() })?;
        let mut row_names = self.row_names.clone();
        row_names.extend(disambiguate(&self.row_index, &other.row_names));
        Self::new(data, row_names, self.col_names.clone())
    }

    /// Place `other` to the right of `self`, renaming clashing column names like [`rbind`](Self::rbind).
    pub fn cbind(&self, other: &Self) -> Result<Self> {
        ensure_len(self.nrows(), other.nrows())?;
        let data = ndarray::concatenate(Axis(1), &[self.data.view(), other.data.view()])
            .map_err(|_| BsplineError::InvalidDimensions { expected: self.nrows(), actual: other.nrows() })?;
        let mut col_names = self.col_names.clone();
        col_names.extend(disambiguate(&self.col_index, &other.col_names));
        Self::new(data, self.row_names.clone(), col_names)
    }

    /// Swap rows and columns together with their names.
    pub fn transpose(self) -> Self {
        let data = self.data.reversed_axes().as_standard_layout().into_owned();
        Self {
            data,
            row_names: self.col_names,
            col_names: self.row_names,
            row_index: self.col_index,
            col_index: self.row_index,
        }
    }

    /// MI between `reference` and every row, keyed by row name, in row order.
    pub fn mutual_information_with(
        &self,
        reference: ArrayView1<'_, f64>,
        config: &BsplineConfig,
    ) -> Result<Vec<(String, f64)>> {
        let batch = BsplineMutualInformationBatchRows::new(reference, self.data.view(), config)?;
        Ok(self.row_names.iter().cloned().zip(batch.global_values()).collect())
    }
}

fn index_names(names: &[String]) -> HashMap<String, usize> {
    names.iter().enumerate().map(|(i, n)| (n.clone(), i)).collect()
}

fn lookup(index: &HashMap<String, usize>, name: &str) -> Result<usize> {
    index.get(name).copied().ok_or_else(|| BsplineError::UnknownLabel(name.to_owned()))
}

fn lookup_all(index: &HashMap<String, usize>, names: &[&str]) -> Result<Vec<usize>> {
    names.iter().map(|name| lookup(index, name)).collect()
}

fn check_bounds(indices: &[usize], len: usize) -> Result<()> {
    match indices.iter().find(|&&i| i >= len) {
        Some(&index) => Err(BsplineError::IndexOutOfBounds { index, len }),
        None => Ok(()),
    }
}

/// `names`, with `_` appended to each entry already present in `taken`.
fn disambiguate(taken: &HashMap<String, usize>, names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|name| {
            let mut name = name.clone();
            while taken.contains_key(&name) {
                name.push('_');
            }
            name
        })
        .collect()
}

fn delimiter(sep: char) -> Result<u8> {
    u8::try_from(sep)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(BsplineError::InvalidDelimiter(sep))
}

fn record_line(record: &StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}

fn csv_error(err: csv::Error) -> BsplineError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(e) => BsplineError::Io(e),
        _ => BsplineError::Parse { line, message },
    }
}
