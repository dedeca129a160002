use rand::Rng;
use std::ops::Sub;

/// Dense rows × cols matrix of f64. A matrix with shape (rows, cols) maps an
/// input vector of length `cols` to an output vector of length `rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        assert!(
            !data.is_empty(),
            "from_data: data must contain at least one row"
        );
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data,
        }
    }

    /// Xavier (Glorot) uniform initialization: independent samples from
    /// U(-limit, limit) with limit = sqrt(6 / (fan_in + fan_out)).
    ///
    /// Shape: (rows, cols). `cols` is the fan-in, `rows` the fan-out.
    /// Takes the RNG by reference so callers can seed it for reproducible runs.
    pub fn xavier<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let limit = (6.0 / (cols + rows) as f64).sqrt();
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = (rng.gen::<f64>() * 2.0 - 1.0) * limit;
            }
        }
        res
    }

    /// Square matrix with `diagonal` on the main diagonal, zero elsewhere.
    pub fn diag(diagonal: &[f64]) -> Matrix {
        let n = diagonal.len();
        let mut res = Matrix::zeros(n, n);
        for (i, &d) in diagonal.iter().enumerate() {
            res.data[i][i] = d;
        }
        res
    }

    /// Outer product a·bᵗ, shape (len(a), len(b)).
    pub fn outer(a: &[f64], b: &[f64]) -> Matrix {
        let mut res = Matrix::zeros(a.len(), b.len());
        for i in 0..a.len() {
            for j in 0..b.len() {
                res.data[i][j] = a[i] * b[j];
            }
        }
        res
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Matrix-vector product; `v` must have length `cols`.
    pub fn matvec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            v.len(),
            self.cols,
            "matvec: vector length {} does not match matrix cols {}",
            v.len(),
            self.cols
        );

        self.data
            .iter()
            .map(|row| row.iter().zip(v.iter()).map(|(w, x)| w * x).sum())
            .collect()
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            self.data
                .clone()
                .into_iter()
                .map(|row| row.into_iter().map(|x| functor(x)).collect())
                .collect(),
        )
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}
