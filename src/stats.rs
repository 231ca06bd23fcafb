//! Pearson linear correlation over an (x, y) measurement set, computed with two parallel
//! reduction passes on the same rayon substrate the merge runs on. First pass sums both
//! variables for the means, second pass accumulates the centered second moments.

use std::fmt;

use rayon::prelude::*;

/// Measurement set of paired samples. `x` and `y` always have equal length.
#[derive(Debug, Clone)]
pub struct DataSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Least-squares fit `y = a * x + b` and the Pearson coefficient `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub a: f64,
    pub b: f64,
    pub r: f64,
}

#[derive(Debug)]
pub enum LoadError {
    /// A token could not be parsed as the expected number.
    Parse { token: String },
    /// Fewer sample pairs than the declared count.
    Truncated { expected: usize, found: usize },
    /// The declared sample count is missing.
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Parse { token } => write!(f, "invalid number: {token:?}"),
            LoadError::Truncated { expected, found } => {
                write!(f, "expected {expected} sample pairs, found {found}")
            }
            LoadError::Empty => write!(f, "missing sample count"),
        }
    }
}

impl std::error::Error for LoadError {}

fn parse_number(token: &str) -> Result<f64, LoadError> {
    token.parse::<f64>().map_err(|_| LoadError::Parse {
        token: token.into(),
    })
}

/// Parses a data set from whitespace separated text: the sample count, then that many x/y
/// pairs. Trailing tokens are ignored.
///
/// The declared count is untrusted input and never used to size an allocation; storage grows
/// with the pairs actually present, so a bogus huge count yields [`LoadError::Truncated`].
pub fn load(input: &str) -> Result<DataSet, LoadError> {
    let mut tokens = input.split_whitespace();

    let n: usize = match tokens.next() {
        Some(token) => token.parse().map_err(|_| LoadError::Parse {
            token: token.into(),
        })?,
        None => return Err(LoadError::Empty),
    };

    let mut x = Vec::new();
    let mut y = Vec::new();

    while x.len() < n {
        match (tokens.next(), tokens.next()) {
            (Some(x_token), Some(y_token)) => {
                x.push(parse_number(x_token)?);
                y.push(parse_number(y_token)?);
            }
            (Some(x_token), None) => {
                // A malformed dangling token is a parse error, a well-formed one a truncation.
                parse_number(x_token)?;
                return Err(LoadError::Truncated {
                    expected: n,
                    found: x.len(),
                });
            }
            (None, _) => {
                return Err(LoadError::Truncated {
                    expected: n,
                    found: x.len(),
                });
            }
        }
    }

    Ok(DataSet { x, y })
}

/// Computes the correlation of `data`. NaN fields for degenerate sets (empty, or with zero
/// variance in x or y), mirroring the division the formulas call for.
///
/// Panics if `x` and `y` differ in length. The fields are public, so the every-sample-is-a-pair
/// invariant has to be enforced here; silently truncating to the shorter side would produce a
/// plausible-looking but wrong result.
pub fn correlation(data: &DataSet) -> Correlation {
    assert_eq!(data.x.len(), data.y.len());

    let n = data.x.len() as f64;

    let (sum_x, sum_y) = data
        .x
        .par_iter()
        .zip(data.y.par_iter())
        .map(|(x, y)| (*x, *y))
        .reduce(|| (0.0, 0.0), |lhs, rhs| (lhs.0 + rhs.0, lhs.1 + rhs.1));

    let avg_x = sum_x / n;
    let avg_y = sum_y / n;

    let (tot_xx, tot_xy, tot_yy) = data
        .x
        .par_iter()
        .zip(data.y.par_iter())
        .map(|(x, y)| {
            let dx = x - avg_x;
            let dy = y - avg_y;
            (dx * dx, dx * dy, dy * dy)
        })
        .reduce(
            || (0.0, 0.0, 0.0),
            |lhs, rhs| (lhs.0 + rhs.0, lhs.1 + rhs.1, lhs.2 + rhs.2),
        );

    let a = tot_xy / tot_xx;

    Correlation {
        a,
        b: avg_y - a * avg_x,
        r: tot_xy / (tot_xx * tot_yy).sqrt(),
    }
}
