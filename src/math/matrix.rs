use rand::Rng;
use serde::{Serialize, Deserialize};

/// Dense row-major matrix of `f64`.
///
/// A weight matrix for boundary `i` has one row per unit of layer `i` (the
/// source) and one column per unit of layer `i + 1` (the destination), so
/// `data[k][j]` is the weight from source `k` to destination `j`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills a matrix with samples drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }

        }

        res
    }

    /// Builds a matrix from a slice of exactly `rows * cols` values laid out
    /// row after row. Returns `None` if the length does not match.
    pub fn from_flat(rows: usize, cols: usize, values: &[f64]) -> Option<Matrix> {
        if values.len() != rows * cols {
            return None;
        }
        let data = if cols == 0 {
            vec![Vec::new(); rows]
        } else {
            values.chunks(cols).map(|row| row.to_vec()).collect()
        };
        Some(Matrix { rows, cols, data })
    }

    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Row-major iteration over every element.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter().flat_map(|row| row.iter())
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map_or(0, |row| row.len()),
            data
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_values_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random(4, 5, &mut rng);
        assert_eq!((m.rows, m.cols), (4, 5));
        assert!(m.iter().all(|&w| (0.0..1.0).contains(&w)));
    }

    #[test]
    fn from_flat_is_row_major() {
        let m = Matrix::from_flat(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.data, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn from_flat_rejects_wrong_length() {
        assert!(Matrix::from_flat(2, 2, &[1.0, 2.0, 3.0]).is_none());
    }
}
