use crate::error::{Error, Result};

/// Training examples stored as concatenated `input ++ output` rows.
///
/// Rows keep their insertion order; every epoch walks them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    input_width: usize,
    output_width: usize,
    rows: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn new(input_width: usize, output_width: usize) -> Result<Dataset> {
        if input_width < 1 || output_width < 1 {
            return Err(Error::config(format!(
                "dataset widths must be at least 1, got {input_width} inputs and {output_width} outputs"
            )));
        }
        if input_width.checked_add(output_width).is_none() {
            return Err(Error::config(format!(
                "dataset widths {input_width} + {output_width} overflow a row"
            )));
        }
        Ok(Dataset { input_width, output_width, rows: Vec::new() })
    }

    /// Builds a dataset from separate input and target vectors.
    pub fn from_pairs(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Dataset> {
        if inputs.len() != targets.len() {
            return Err(Error::shape("target rows", inputs.len(), targets.len()));
        }
        let input_width = inputs.first().map_or(0, Vec::len);
        let output_width = targets.first().map_or(0, Vec::len);
        let mut dataset = Dataset::new(input_width, output_width)?;
        for (input, target) in inputs.iter().zip(targets) {
            dataset.insert_pair(input, target)?;
        }
        Ok(dataset)
    }

    /// Appends one row of exactly `input_width + output_width` values.
    pub fn insert(&mut self, row: Vec<f64>) -> Result<()> {
        if row.len() != self.row_width() {
            return Err(Error::shape("dataset row", self.row_width(), row.len()));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn insert_pair(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        if input.len() != self.input_width {
            return Err(Error::shape("dataset input", self.input_width, input.len()));
        }
        if target.len() != self.output_width {
            return Err(Error::shape("dataset output", self.output_width, target.len()));
        }
        self.rows.push(input.iter().chain(target).copied().collect());
        Ok(())
    }

    pub fn input_width(&self) -> usize {
        self.input_width
    }

    pub fn output_width(&self) -> usize {
        self.output_width
    }

    pub fn row_width(&self) -> usize {
        self.input_width + self.output_width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Input slice of row `index`. Panics if `index` is out of bounds.
    pub fn input_part(&self, index: usize) -> &[f64] {
        &self.rows[index][..self.input_width]
    }

    /// Output slice of row `index`. Panics if `index` is out of bounds.
    pub fn output_part(&self, index: usize) -> &[f64] {
        &self.rows[index][self.input_width..]
    }

    /// `(input, output)` pairs in stored order.
    pub fn examples(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.rows.iter().map(move |row| row.split_at(self.input_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_split_at_input_width() {
        let mut dataset = Dataset::new(2, 1).unwrap();
        dataset.insert(vec![0.0, 1.0, 1.0]).unwrap();
        dataset.insert(vec![1.0, 1.0, 0.0]).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.input_part(1), &[1.0, 1.0]);
        assert_eq!(dataset.output_part(0), &[1.0]);
        let pairs: Vec<_> = dataset.examples().collect();
        assert_eq!(pairs[0], (&[0.0, 1.0][..], &[1.0][..]));
    }

    #[test]
    fn wrong_row_length_is_rejected() {
        let mut dataset = Dataset::new(2, 1).unwrap();
        let err = dataset.insert(vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 3, got: 2, .. }));
        assert!(dataset.is_empty());
    }

    #[test]
    fn zero_width_is_a_configuration_error() {
        assert!(matches!(Dataset::new(0, 1), Err(Error::Configuration(_))));
        assert!(matches!(Dataset::new(1, 0), Err(Error::Configuration(_))));
    }

    #[test]
    fn widths_that_overflow_a_row_are_rejected() {
        assert!(matches!(Dataset::new(usize::MAX, 1), Err(Error::Configuration(_))));
        assert!(Dataset::new(usize::MAX - 1, 1).is_ok());
    }

    #[test]
    fn from_pairs_keeps_order() {
        let dataset = Dataset::from_pairs(
            &[vec![0.0], vec![1.0]],
            &[vec![1.0], vec![0.0]],
        ).unwrap();
        assert_eq!(dataset.rows(), &[vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert!(Dataset::from_pairs(&[vec![0.0]], &[]).is_err());
    }
}
