//! Writer for plain-text profile files.
//!
//! A profile file carries one header line of centered column labels and
//! one line per vertical level, every value in C `%1.14E`-style
//! scientific notation:
//!
//! ```text
//!          z                    b
//! 5.00000000000000E-04 1.50000000000000E-03
//! 1.50000000000000E-03 4.50000000000000E-03
//! ```
//!
//! The file is created fresh on every write and fully overwritten; there
//! are no append or update semantics.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

/// Width of one formatted column, matching the header centering.
const COLUMN_WIDTH: usize = 20;

/// Error type for profile output.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// I/O error during file operations.
    #[error("profile I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A column's length does not match the columns already added.
    #[error("column '{name}' has {got} values, expected {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A non-finite value cannot be represented in the fixed format.
    #[error("non-finite value in column '{name}' at level {level}")]
    NonFinite { name: String, level: usize },

    /// No columns were added before writing.
    #[error("profile has no columns")]
    Empty,
}

/// Builder for a profile file: ordered, equally sized named columns.
///
/// # Example
///
/// ```
/// use abl_rs::io::ProfileWriter;
///
/// let z = [0.5, 1.5, 2.5];
/// let b = [1.5, 4.5, 7.5];
/// let mut out = Vec::new();
/// ProfileWriter::new()
///     .column("z", &z)
///     .unwrap()
///     .column("b", &b)
///     .unwrap()
///     .write(&mut out)
///     .unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), 4); // header + one line per level
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProfileWriter {
    columns: Vec<(String, Vec<f64>)>,
}

impl ProfileWriter {
    /// Create an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named column.
    ///
    /// # Errors
    /// [`ProfileError::ColumnLength`] if `values` differs in length from
    /// the columns already added.
    pub fn column(mut self, name: &str, values: &[f64]) -> Result<Self, ProfileError> {
        if let Some((_, first)) = self.columns.first() {
            if values.len() != first.len() {
                return Err(ProfileError::ColumnLength {
                    name: name.to_string(),
                    expected: first.len(),
                    got: values.len(),
                });
            }
        }
        self.columns.push((name.to_string(), values.to_vec()));
        Ok(self)
    }

    /// Number of levels (rows) in the profile.
    pub fn n_levels(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    /// Write the profile to any writer.
    ///
    /// # Errors
    /// - [`ProfileError::Empty`] if no columns were added
    /// - [`ProfileError::NonFinite`] if any value is NaN or infinite
    /// - [`ProfileError::Io`] on write failure
    pub fn write<W: Write>(&self, mut writer: W) -> Result<(), ProfileError> {
        if self.columns.is_empty() {
            return Err(ProfileError::Empty);
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|(name, _)| format!("{:^1$}", name, COLUMN_WIDTH))
            .collect();
        writeln!(writer, "{}", header.join(" "))?;

        for level in 0..self.n_levels() {
            let mut row = String::with_capacity(self.columns.len() * (COLUMN_WIDTH + 1));
            for (i, (name, values)) in self.columns.iter().enumerate() {
                let value = values[level];
                if !value.is_finite() {
                    return Err(ProfileError::NonFinite {
                        name: name.clone(),
                        level,
                    });
                }
                if i > 0 {
                    row.push(' ');
                }
                row.push_str(&format_scientific(value));
            }
            writeln!(writer, "{}", row)?;
        }

        Ok(())
    }

    /// Write the profile to a file, creating or overwriting it.
    ///
    /// The file handle is scoped to this call: flushed and closed before
    /// returning.
    pub fn write_file(&self, path: &Path) -> Result<(), ProfileError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Format in C `printf %1.14E` style: 14-digit mantissa and a signed,
/// at-least-two-digit exponent.
///
/// Rust's `{:.14E}` produces the right mantissa but an unpadded exponent
/// (`E-4` instead of `E-04`), so the exponent is normalized here. Only
/// valid for finite values; callers check finiteness first.
fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.14E}", value);
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}E{}{:02}", mantissa, sign, exp.abs())
        }
        None => formatted,
    }
}
