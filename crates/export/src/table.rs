use std::fmt;

use crate::{Cell, Sheet};

/// An aligned text rendering of a [`Sheet`], optionally truncated.
///
/// Numbers are right-aligned and text is left-aligned. When rows are cut off,
/// a closing line states how many were shown.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    sheet: &'a Sheet,
    limit: Option<usize>,
    precision: Option<usize>,
}

impl<'a> Table<'a> {
    pub(crate) fn new(sheet: &'a Sheet, limit: Option<usize>) -> Self {
        Self {
            sheet,
            limit,
            precision: None,
        }
    }

    /// Prints numbers with a fixed number of decimals.
    #[must_use]
    pub fn with_precision(self, decimals: usize) -> Self {
        Self {
            precision: Some(decimals),
            ..self
        }
    }

    fn shown(&self) -> &'a [Vec<Cell>] {
        let rows = self.sheet.rows();
        match self.limit {
            Some(limit) if limit < rows.len() => &rows[..limit],
            _ => rows,
        }
    }

    fn render(&self, cell: &Cell) -> String {
        match (cell, self.precision) {
            // Iteration indices are whole numbers and stay that way.
            (Cell::Number(n), Some(decimals)) if n.fract() != 0.0 => format!("{n:.decimals$}"),
            _ => cell.to_string(),
        }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.sheet.header();
        let rows: Vec<Vec<String>> = self
            .shown()
            .iter()
            .map(|row| row.iter().map(|cell| self.render(cell)).collect())
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|title| title.chars().count()).collect();
        for row in &rows {
            for (width, text) in widths.iter_mut().zip(row) {
                *width = (*width).max(text.chars().count());
            }
        }

        let titles: Vec<String> = header
            .iter()
            .zip(&widths)
            .map(|(title, &width)| format!("{title:<width$}"))
            .collect();
        writeln!(f, "{}", titles.join("  ").trim_end())?;

        let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
        writeln!(f, "{}", rule.join("  "))?;

        for (cells, texts) in self.shown().iter().zip(&rows) {
            let line: Vec<String> = cells
                .iter()
                .zip(texts)
                .zip(&widths)
                .map(|((cell, text), &width)| match cell {
                    Cell::Number(_) => format!("{text:>width$}"),
                    _ => format!("{text:<width$}"),
                })
                .collect();
            writeln!(f, "{}", line.join("  ").trim_end())?;
        }

        let total = self.sheet.len();
        if rows.len() < total {
            writeln!(f, "Showing first {} of {total} iterations only", rows.len())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use iterlab_core::{Config, from_fn};
    use iterlab_solvers::optimization::golden_section;

    use crate::{Mode, Sheet};

    fn golden_sheet(max_iters: usize) -> Sheet {
        let f = from_fn(|x: f64| (x - 2.0).powi(2));
        let config = Config::new(1e-6, max_iters).unwrap();
        let solution = golden_section::minimize_unobserved(&f, [0.0, 5.0], &config).unwrap();
        Sheet::from_trace(&solution.trace, Mode::Values)
    }

    #[test]
    fn aligns_columns() {
        let text = golden_sheet(3).table(None).with_precision(4).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Iter  a"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].contains("1.9098"));
        assert!(lines[2].ends_with("FALSE"));
    }

    #[test]
    fn truncates_with_notice() {
        let sheet = golden_sheet(30);
        let text = sheet.table(Some(20)).to_string();

        assert_eq!(text.lines().count(), 2 + 20 + 1);
        assert_eq!(
            text.lines().last(),
            Some(format!("Showing first 20 of {} iterations only", sheet.len()).as_str())
        );
    }

    #[test]
    fn no_notice_when_everything_fits() {
        let text = golden_sheet(3).table(Some(20)).to_string();
        assert!(!text.contains("Showing first"));
    }
}
