use crate::algebra::{DenseMatrix, FloatT, Matrix, MatrixError, MatrixView, MatrixViewMut};
use itertools::Itertools;
use num_traits::NumCast;
use std::io::BufRead;
use std::str::FromStr;

// -------------------------------------------------
// text format input
//
// Rows are lines, values are whitespace separated.  The first row's
// token count fixes the matrix width; a blank line or the end of input
// terminates the matrix.  A malformed token ends its own row's tokens,
// and any row whose count then differs from the first row's is a
// uniform-width error.
// -------------------------------------------------

impl<T> FromStr for Matrix<T>
where
    T: FloatT,
{
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for line in s.lines() {
            if line.is_empty() {
                break;
            }
            rows.push(parse_row(line));
        }
        Self::from_rows(&rows)
    }
}

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Read a matrix from a buffered reader, consuming lines until a
    /// blank line or the end of the stream.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, MatrixError> {
        let mut rows = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                break;
            }
            rows.push(parse_row(&line));
        }
        Self::from_rows(&rows)
    }
}

fn parse_row<T: FloatT>(line: &str) -> Vec<T> {
    line.split_whitespace()
        .map(|tok| tok.parse::<T>().ok())
        .while_some()
        .collect()
}

// -------------------------------------------------
// text format output
// -------------------------------------------------

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

impl<'a, T> std::fmt::Display for MatrixView<'a, T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

impl<'a, T> std::fmt::Display for MatrixViewMut<'a, T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

/// Each value is rendered to three significant digits, right-justified
/// in a four-character field and followed by a tab; each row ends with a
/// newline.  Exact zero renders as `0` whatever its sign bit (mixing
/// negative and positive zero is ugly); other near-zero noise is
/// rendered as-is.
fn display_matrix<T, M>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    T: FloatT,
    M: DenseMatrix<T>,
{
    for r in 1..=m.nrows() {
        for c in 1..=m.ncols() {
            write!(f, "{:>4}\t", format_value(m[(r, c)]))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn format_value<T: FloatT>(v: T) -> String {
    if v == T::zero() {
        return "0".to_string();
    }
    let v: f64 = NumCast::from(v).unwrap_or(f64::NAN);
    if !v.is_finite() {
        return format!("{}", v);
    }

    // three significant digits, fixed notation for moderate exponents
    // and scientific otherwise, with trailing zeros trimmed
    let exp = v.abs().log10().floor() as i32;
    if !(-4..3).contains(&exp) {
        let s = format!("{:.2e}", v);
        match s.split_once('e') {
            Some((mant, e)) if mant.contains('.') => {
                let mant = mant.trim_end_matches('0').trim_end_matches('.');
                format!("{}e{}", mant, e)
            }
            _ => s,
        }
    } else {
        let decimals = (2 - exp).max(0) as usize;
        let s = format!("{:.*}", decimals, v);
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    }
}
