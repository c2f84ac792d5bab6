//! A plain-text table with `+---+` borders and centred cells.
//!
//! ```text
//! +-------+-------+
//! | Word  | a.txt |
//! +-------+-------+
//! | hello |   2   |
//! +-------+-------+
//! ```

use std::fmt;

use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = vec![0; self.column_count()];
        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
        widths
    }
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn row_line(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::from("|");
    for (idx, width) in widths.iter().enumerate() {
        let cell: &str = cells.get(idx).map(String::as_str).unwrap_or("");
        let padding: usize = width.saturating_sub(UnicodeWidthStr::width(cell));
        let left: usize = padding / 2;
        let right: usize = padding - left;
        line.push_str(&format!(" {}{}{} |", " ".repeat(left), cell, " ".repeat(right)));
    }
    line
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.column_widths();
        let sep: String = border(&widths);

        writeln!(f, "{sep}")?;
        writeln!(f, "{}", row_line(&widths, &self.headers))?;
        writeln!(f, "{sep}")?;
        for row in &self.rows {
            writeln!(f, "{}", row_line(&widths, row))?;
        }
        write!(f, "{sep}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_centred_cells_inside_borders() {
        let mut table = Table::new(["Word", "a.txt"]);
        table.push_row(["hello", "2"]);

        let expected = "\
+-------+-------+
| Word  | a.txt |
+-------+-------+
| hello |   2   |
+-------+-------+";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = Table::new(["A", "B"]);
        table.push_row(["x"]);

        let rendered = table.to_string();
        assert!(rendered.contains("| x |   |"), "{rendered}");
    }

    #[test]
    fn headers_only_table_is_still_framed() {
        let table = Table::new(["File", "Count"]);
        assert!(table.is_empty());
        assert_eq!(table.to_string().lines().count(), 4);
    }
}
