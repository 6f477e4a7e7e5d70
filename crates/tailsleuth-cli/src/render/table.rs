//! Minimal boxed text table.
//!
//! ```text
//! +------+-----------+
//! | Time | Directory |
//! +------+-----------+
//! | ...  | rule_a    |
//! +------+-----------+
//! ```
//!
//! Headers are always centred. Column widths are measured in `char`s.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Every column starts centred.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let aligns = vec![Align::Center; headers.len()];
        Self {
            headers,
            aligns,
            rows: Vec::new(),
        }
    }

    /// Out-of-range columns are ignored.
    pub fn align(&mut self, column: usize, align: Align) {
        if let Some(a) = self.aligns.get_mut(column) {
            *a = align;
        }
    }

    /// Missing cells render empty; extra cells are dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                self.rows
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(h.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn write_separator(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for w in widths {
        write!(f, "+{}", "-".repeat(w + 2))?;
    }
    writeln!(f, "+")
}

fn write_cells(
    f: &mut fmt::Formatter<'_>,
    cells: &[String],
    widths: &[usize],
    aligns: &[Align],
) -> fmt::Result {
    for ((cell, &width), &align) in cells.iter().zip(widths).zip(aligns) {
        let fill = width - cell.chars().count();
        let (left, right) = match align {
            Align::Left => (0, fill),
            Align::Center => (fill / 2, fill - fill / 2),
        };
        write!(f, "| {:left$}{cell}{:right$} ", "", "")?;
    }
    writeln!(f, "|")
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let header_aligns = vec![Align::Center; self.headers.len()];

        write_separator(f, &widths)?;
        write_cells(f, &self.headers, &widths, &header_aligns)?;
        write_separator(f, &widths)?;
        for row in &self.rows {
            write_cells(f, row, &widths, &self.aligns)?;
        }
        write_separator(f, &widths)
    }
}
