//! Minimal streaming CSV reader for the import pipeline.
//!
//! # Responsibility
//! - Read header-first CSV files row by row without loading the file.
//! - Resolve column names to indices once, up front.
//!
//! # Invariants
//! - Fields may be double-quoted; a doubled quote inside a quoted field is
//!   a literal quote. Records never span lines.
//! - Every data row must match the header's width.
//! - Blank lines are skipped; a trailing newline does not produce a row.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug)]
pub enum CsvError {
    Io(std::io::Error),
    /// The header has no column with the requested name.
    MissingColumn { column: String },
    /// A quoted field ran past the end of its line.
    UnclosedQuote { line: u64 },
    /// A data row's field count differs from the header's.
    WrongWidth {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl Display for CsvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::MissingColumn { column } => write!(f, "csv header has no column `{column}`"),
            Self::UnclosedQuote { line } => write!(f, "line {line}: unclosed quote"),
            Self::WrongWidth {
                line,
                expected,
                found,
            } => write!(f, "line {line}: expected {expected} fields, found {found}"),
        }
    }
}

impl Error for CsvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CsvError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Streaming reader over a header-first CSV source.
pub struct CsvReader<R: BufRead> {
    input: R,
    columns: Vec<String>,
    line: u64,
}

impl CsvReader<BufReader<File>> {
    /// Opens a CSV file and consumes its header line.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CsvError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }
}

impl<R: BufRead> CsvReader<R> {
    /// Wraps a buffered reader and consumes its header line.
    ///
    /// An empty source yields a reader with no columns; every lookup on it
    /// fails with `MissingColumn`.
    pub fn from_reader(mut input: R) -> Result<Self, CsvError> {
        let mut header = String::new();
        let mut line = 0;
        let columns = if input.read_line(&mut header)? == 0 {
            Vec::new()
        } else {
            line = 1;
            // A UTF-8 BOM on the first column name would break lookups.
            let header = header.trim_start_matches('\u{feff}');
            split_line(trim_newline(header), line)?
        };

        Ok(Self {
            input,
            columns,
            line,
        })
    }

    /// Header columns in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Resolves a column name to its index in each row.
    pub fn column(&self, name: &str) -> Result<usize, CsvError> {
        self.columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| CsvError::MissingColumn {
                column: name.to_string(),
            })
    }

    /// 1-based file line of the most recently returned row.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Reads the next data row; `Ok(None)` at end of file.
    pub fn next_row(&mut self) -> Result<Option<Vec<String>>, CsvError> {
        let mut buffer = String::new();
        loop {
            buffer.clear();
            if self.input.read_line(&mut buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let record = trim_newline(&buffer);
            if record.is_empty() {
                continue;
            }

            let fields = split_line(record, self.line)?;
            if fields.len() != self.columns.len() {
                return Err(CsvError::WrongWidth {
                    line: self.line,
                    expected: self.columns.len(),
                    found: fields.len(),
                });
            }
            return Ok(Some(fields));
        }
    }
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

fn split_line(line: &str, line_no: u64) -> Result<Vec<String>, CsvError> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(ch);
            }
        } else {
            match ch {
                ',' => fields.push(std::mem::take(&mut field)),
                '"' if field.is_empty() => in_quotes = true,
                _ => field.push(ch),
            }
        }
    }

    if in_quotes {
        return Err(CsvError::UnclosedQuote { line: line_no });
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(data: &str) -> CsvReader<Cursor<&[u8]>> {
        CsvReader::from_reader(Cursor::new(data.as_bytes())).expect("header should parse")
    }

    #[test]
    fn splits_plain_rows_and_resolves_columns() {
        let mut csv = reader("Name,Age,Breed\nRex,4,Boxer\nMaple,2,Samoyed\n");

        assert_eq!(csv.columns(), ["Name", "Age", "Breed"]);
        assert_eq!(csv.column("Breed").unwrap(), 2);

        let first = csv.next_row().unwrap().unwrap();
        assert_eq!(first, ["Rex", "4", "Boxer"]);
        assert_eq!(csv.line(), 2);

        let second = csv.next_row().unwrap().unwrap();
        assert_eq!(second, ["Maple", "2", "Samoyed"]);
        assert!(csv.next_row().unwrap().is_none());
    }

    #[test]
    fn quoted_fields_keep_commas_and_doubled_quotes() {
        let mut csv = reader("Name,Publisher\n\"Super, Deluxe\",\"Says \"\"hi\"\"\"\n");

        let row = csv.next_row().unwrap().unwrap();
        assert_eq!(row[0], "Super, Deluxe");
        assert_eq!(row[1], "Says \"hi\"");
    }

    #[test]
    fn rejects_rows_with_wrong_width() {
        let mut csv = reader("a,b,c\n1,2\n");

        let err = csv.next_row().unwrap_err();
        assert!(matches!(
            err,
            CsvError::WrongWidth {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_unclosed_quote() {
        let mut csv = reader("a,b\n\"open,2\n");

        let err = csv.next_row().unwrap_err();
        assert!(matches!(err, CsvError::UnclosedQuote { line: 2 }));
    }

    #[test]
    fn missing_column_names_the_request() {
        let csv = reader("Name,Age\n");

        let err = csv.column("Breed").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn { column } if column == "Breed"));
    }

    #[test]
    fn skips_blank_lines_and_strips_crlf() {
        let mut csv = reader("Name,Age\r\n\r\nRex,4\r\n\n");

        let row = csv.next_row().unwrap().unwrap();
        assert_eq!(row, ["Rex", "4"]);
        assert!(csv.next_row().unwrap().is_none());
    }

    #[test]
    fn handles_header_with_bom() {
        let csv = reader("\u{feff}Name,Age\n");

        assert_eq!(csv.column("Name").unwrap(), 0);
    }
}
