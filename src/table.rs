//! Dense row-major result tables.
//!
//! Both parsers hand their accepted rows to a [`TableAssembler`], which
//! keeps them in one contiguous buffer and finalizes it into a
//! [`ParseResult`] with an explicit shape.

/// A rows × cols table of `f64`, row-major.
///
/// Zero rows is a normal result; the column count still reflects the layout
/// that was detected (or zero when no layout was recognized at all).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ParseResult {
    /// A table with no rows
    pub fn empty(cols: usize) -> Self {
        Self {
            rows: 0,
            cols,
            data: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// The backing buffer, row after row
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Row `index`, if present
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Rows in file order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).filter_map(move |index| self.row(index))
    }

    /// Copy of column `index`, top to bottom
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.cols {
            return None;
        }
        Some(
            self.data
                .iter()
                .skip(index)
                .step_by(self.cols)
                .copied()
                .collect(),
        )
    }
}

/// Accumulates same-width rows in input order
#[derive(Debug)]
pub struct TableAssembler {
    cols: usize,
    rows: usize,
    data: Vec<f64>,
}

impl TableAssembler {
    pub fn new(cols: usize) -> Self {
        Self::with_capacity(cols, 0)
    }

    /// Reserve room for `rows` rows up front
    pub fn with_capacity(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows: 0,
            data: Vec::with_capacity(cols * rows),
        }
    }

    /// Append a row.
    ///
    /// Short rows are padded with trailing zeros and long rows truncated so
    /// every row occupies exactly `cols` slots.
    pub fn push_row(&mut self, row: &[f64]) {
        let take = row.len().min(self.cols);
        self.data.extend_from_slice(&row[..take]);
        self.data.resize(self.data.len() + (self.cols - take), 0.0);
        self.rows += 1;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn finish(self) -> ParseResult {
        ParseResult {
            rows: self.rows,
            cols: self.cols,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut assembler = TableAssembler::new(3);
        assembler.push_row(&[1.0, 2.0, 3.0]);
        assembler.push_row(&[4.0, 5.0, 6.0]);
        let table = assembler.finish();

        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(table.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(table.column(1), Some(vec![2.0, 5.0]));
    }

    #[test]
    fn test_zero_rows_keeps_column_count() {
        let table = TableAssembler::with_capacity(9, 100).finish();
        assert_eq!(table.shape(), (0, 9));
        assert!(table.is_empty());
        assert_eq!(table.iter_rows().count(), 0);
        assert_eq!(table.column(0), Some(Vec::new()));
    }

    #[test]
    fn test_short_rows_are_padded_and_long_rows_truncated() {
        let mut assembler = TableAssembler::new(4);
        assembler.push_row(&[1.0, 2.0]);
        assembler.push_row(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let table = assembler.finish();

        assert_eq!(table.row(0), Some(&[1.0, 2.0, 0.0, 0.0][..]));
        assert_eq!(table.row(1), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }

    #[test]
    fn test_zero_column_table() {
        let table = ParseResult::empty(0);
        assert_eq!(table.shape(), (0, 0));
        assert_eq!(table.row(0), None);
        assert_eq!(table.column(0), None);
    }
}
