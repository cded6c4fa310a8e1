
use iterlab_core::Record;
use iterlab_solvers::{
    equation::bisection,
    fixed_point,
    optimization::{golden_section, interval_halving},
};

use crate::{Cell, Mode};

/// A trace record that can be laid out as a spreadsheet row.
///
/// Column `A` is always the iteration index and the last column is always the
/// tolerance flag. Data rows start at sheet row 2, below the header.
pub trait Tabular: Record {
    /// Column titles, in order.
    const HEADER: &'static [&'static str];

    /// Returns this record's cells, one per header column.
    fn row(&self, mode: Mode) -> Vec<Cell>;
}

/// Returns the 1-based sheet row holding the record at `index`.
fn sheet_row(index: usize) -> usize {
    index + 2
}

/// `|b-a|` for a row whose `a` and `b` sit in columns `B` and `C`.
fn width_formula(row: usize) -> String {
    format!("ABS(C{row}-B{row})")
}

fn midpoint_formula(row: usize) -> String {
    format!("(B{row}+C{row})/2")
}

impl Tabular for bisection::Record {
    const HEADER: &'static [&'static str] = &["Iter", "a", "b", "c", "f(c)", "|b-a|", "Within Tol"];

    fn row(&self, mode: Mode) -> Vec<Cell> {
        let r = sheet_row(self.index);
        vec![
            Cell::index(self.index),
            self.a.into(),
            self.b.into(),
            Cell::derived(self.c, mode, || midpoint_formula(r)),
            self.fc.into(),
            Cell::derived(self.width, mode, || width_formula(r)),
            Cell::flag(self.within_tolerance),
        ]
    }
}

impl Tabular for interval_halving::Record {
    const HEADER: &'static [&'static str] = &[
        "Iter",
        "a",
        "b",
        "c",
        "f(a)",
        "f(b)",
        "f(c)",
        "|b-a|",
        "Within Tol",
    ];

    fn row(&self, mode: Mode) -> Vec<Cell> {
        let r = sheet_row(self.index);
        vec![
            Cell::index(self.index),
            self.a.into(),
            self.b.into(),
            Cell::derived(self.c, mode, || midpoint_formula(r)),
            self.fa.into(),
            self.fb.into(),
            self.fc.into(),
            Cell::derived(self.width, mode, || width_formula(r)),
            Cell::flag(self.within_tolerance),
        ]
    }
}

impl Tabular for golden_section::Record {
    const HEADER: &'static [&'static str] = &[
        "Iter",
        "a",
        "b",
        "a'",
        "b'",
        "f(a')",
        "f(b')",
        "|b-a|",
        "Within Tol",
    ];

    fn row(&self, mode: Mode) -> Vec<Cell> {
        use golden_section::{INV_PHI, RHO};

        let r = sheet_row(self.index);
        vec![
            Cell::index(self.index),
            self.a.into(),
            self.b.into(),
            Cell::derived(self.a1, mode, || format!("B{r}+{RHO}*(C{r}-B{r})")),
            Cell::derived(self.b1, mode, || format!("B{r}+{INV_PHI}*(C{r}-B{r})")),
            self.fa1.into(),
            self.fb1.into(),
            Cell::derived(self.width, mode, || width_formula(r)),
            Cell::flag(self.within_tolerance),
        ]
    }
}

impl Tabular for fixed_point::Record {
    const HEADER: &'static [&'static str] = &["Iter", "p(i)", "g(p(i))", "|p(i+1)-p(i)|", "Within Tol"];

    fn row(&self, mode: Mode) -> Vec<Cell> {
        let r = sheet_row(self.index);
        vec![
            Cell::index(self.index),
            // p(i) is the previous row's g(p(i)); the first row has no predecessor.
            Cell::derived(self.pi, mode, || format!("C{}", r - 1)),
            self.gpi.into(),
            Cell::derived(self.diff, mode, || width_formula(r)),
            Cell::flag(self.within_tolerance),
        ]
    }
}
