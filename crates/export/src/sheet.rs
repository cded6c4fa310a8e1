use std::{fmt, io, string::FromUtf8Error};

use csv::WriterBuilder;
use iterlab_core::Trace;
use thiserror::Error;

use crate::{Cell, Mode, Table, Tabular};

/// Errors that can occur when writing a sheet as CSV.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write CSV record")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output")]
    Io(#[from] io::Error),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

/// A header row and one row of cells per trace record.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Lays out every record of `trace` in order.
    #[must_use]
    pub fn from_trace<R: Tabular>(trace: &Trace<R>, mode: Mode) -> Self {
        Self {
            header: R::HEADER.iter().map(|&title| title.to_owned()).collect(),
            rows: trace.iter().map(|record| record.row(mode)).collect(),
        }
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an aligned text view showing at most `limit` data rows.
    #[must_use]
    pub fn table(&self, limit: Option<usize>) -> Table<'_> {
        Table::new(self, limit)
    }

    /// Writes the header and all rows as CSV.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut writer = WriterBuilder::new().from_writer(writer);

        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(Cell::to_csv_field))?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Returns the CSV text of the sheet.
    ///
    /// # Errors
    ///
    /// Returns an error if CSV encoding fails.
    pub fn to_csv_string(&self) -> Result<String, Error> {
        let mut output = Vec::new();
        self.write_csv(&mut output)?;
        Ok(String::from_utf8(output)?)
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.table(None).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use iterlab_core::{Config, from_fn};
    use iterlab_solvers::{equation::bisection, fixed_point};

    fn bisection_sheet(mode: Mode) -> Sheet {
        let f = from_fn(|x: f64| x * x - 2.0);
        let config = Config::new(1e-12, 3).unwrap();
        let solution = bisection::find_root_unobserved(&f, [1.0, 2.0], &config).unwrap();
        Sheet::from_trace(&solution.trace, mode)
    }

    #[test]
    fn one_row_per_record() {
        let sheet = bisection_sheet(Mode::Values);
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.header(), ["Iter", "a", "b", "c", "f(c)", "|b-a|", "Within Tol"]);
        assert!(sheet.rows().iter().all(|row| row.len() == sheet.header().len()));
    }

    #[test]
    fn values_csv() {
        let csv = bisection_sheet(Mode::Values).to_csv_string().unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Iter,a,b,c,f(c),|b-a|,Within Tol"));
        assert_eq!(lines.next(), Some("0,1,2,1.5,0.25,1,FALSE"));
        assert_eq!(lines.next(), Some("1,1,1.5,1.25,-0.4375,0.5,FALSE"));
    }

    #[test]
    fn formulas_csv() {
        let csv = bisection_sheet(Mode::Formulas).to_csv_string().unwrap();
        let second = csv.lines().nth(2).unwrap();

        assert_eq!(second, "1,1,1.5,=(B3+C3)/2,-0.4375,=ABS(C3-B3),FALSE");
    }

    #[test]
    fn empty_trace_has_only_a_header() {
        let f = from_fn(|x: f64| x - 1.0);
        let config = fixed_point::Config::from(Config::new(1e-4, 0).unwrap());
        let solution = fixed_point::iterate_unobserved(&f, 0.0, &config).unwrap();
        let sheet = Sheet::from_trace(&solution.trace, Mode::Values);

        assert!(sheet.is_empty());
        assert_eq!(sheet.to_csv_string().unwrap(), "Iter,p(i),g(p(i)),|p(i+1)-p(i)|,Within Tol\n");
    }
}
