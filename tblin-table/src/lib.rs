//! Create, read, and write a row-based [`Table`].

use color_eyre::eyre::{eyre, Report, Result, WrapErr};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::PartialEq;
use std::fmt::{Debug, Display};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tblin_utils as utils;


/// A row-based [`Table`] of generic data.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Table<T> {
    /// Names of the table columns.
    pub headers: Vec<T>,
    /// Rows of table values.
    pub rows: Vec<Vec<T>>,
    /// Optional file path for where the table was read from.
    pub path: Option<PathBuf>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Table<T> {
    /// Returns a new row-based [`Table`] with empty headers and rows.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = tblin_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(vec!["A", "B", "C"])?;
    /// # assert_eq!(table.rows, vec![vec!["A", "B", "C"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    ///
    /// | 1 | 2 | 3 |
    /// |---|---|---|
    /// | A | B | C |
    pub fn new() -> Self {
        Table { headers: Vec::new(), rows: Vec::new(), path: None }
    }
}

impl<T> Table<T>
where
    T: Debug + Display + PartialEq,
{
    /// Add a new row to the table.
    ///
    /// The row must have as many values as there are headers.
    ///
    /// ## Examples
    ///
    /// ```
    /// let mut table = tblin_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    /// table.add_row(["D", "E", "F"])?;
    /// assert!(table.add_row(["G"]).is_err());
    /// # assert_eq!(table.rows, [["A", "B", "C"], ["D", "E", "F"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn add_row<I>(&mut self, row: I) -> Result<(), Report>
    where
        I: IntoIterator<Item = T>,
    {
        let row = row.into_iter().collect::<Vec<T>>();
        let (new, ex) = (row.len(), self.headers.len());
        if ex != new {
            return Err(eyre!("New row size ({new}) does not match the table headers ({ex})."));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns the [`Table`] value under a particular header and row index.
    ///
    /// ```
    /// let mut table = tblin_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    ///
    /// assert_eq!(table.get(&"2", 0)?, &"B");
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get(&self, header: &T, row: usize) -> Result<&T, Report> {
        let header_i = self.get_header_index(header)?;
        let row = self.get_row(row)?;
        Ok(&row[header_i])
    }

    /// Returns a [`Vec`] of [`Table`] values under a header.
    ///
    /// ```
    /// let mut table = tblin_table::Table::new();
    /// table.headers = vec!["1", "2"];
    /// table.add_row(["A", "B"])?;
    /// table.add_row(["D", "E"])?;
    ///
    /// assert_eq!(table.get_column(&"1")?, [&"A", &"D"]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get_column(&self, header: &T) -> Result<Vec<&T>, Report> {
        let header_i = self.get_header_index(header)?;
        let column = self.rows.iter().map(|row| &row[header_i]).collect();
        Ok(column)
    }

    /// Returns the column index (0-based) of the header in the [`Table`].
    ///
    /// ```
    /// let mut table = tblin_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    ///
    /// assert_eq!(table.get_header_index(&"3")?, 2);
    /// assert!(table.get_header_index(&"4").is_err());
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn get_header_index(&self, header: &T) -> Result<usize, Report> {
        let pos =
            self.headers.iter().position(|h| h == header).ok_or_else(|| {
                eyre!("Column '{header}' was not found in table: {:?}.", self.path)
            })?;

        Ok(pos)
    }

    /// Return a row of [`Table`] values from a row index.
    pub fn get_row(&self, i: usize) -> Result<&[T], Report> {
        if i >= self.rows.len() {
            Err(eyre!("Row ({i}) does not exist in the table."))
        } else {
            Ok(&self.rows[i])
        }
    }

    /// Write the [`Table`] as delimited text into any [`Write`] destination.
    ///
    /// ```
    /// let mut table = tblin_table::Table::new();
    /// table.headers = vec!["1", "2"];
    /// table.add_row(["A", "B"])?;
    ///
    /// let mut buffer = Vec::new();
    /// table.write_to(&mut buffer, '\t')?;
    /// assert_eq!(String::from_utf8(buffer)?, "1\t2\nA\tB\n");
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn write_to<W>(&self, writer: &mut W, delim: char) -> Result<(), Report>
    where
        W: Write,
    {
        let delim = delim.to_string();

        // write headers
        let line = format!("{}\n", self.headers.iter().join(&delim));
        writer
            .write_all(line.as_bytes())
            .wrap_err_with(|| eyre!("Unable to write table headers: {line}"))?;

        // write regular rows
        self.rows.iter().try_for_each(|row| {
            let line = format!("{}\n", row.iter().join(&delim));
            writer
                .write_all(line.as_bytes())
                .wrap_err_with(|| format!("Unable to write table rows: {line}"))?;
            Ok::<(), Report>(())
        })?;

        Ok(())
    }

    /// Write [`Table`] to file [`Path`].
    ///
    /// If not provided, the delimiter is chosen from the file extension.
    ///
    /// ```
    /// let mut table = tblin_table::Table::new();
    /// table.headers = vec!["1", "2", "3"];
    /// table.add_row(["A", "B", "C"])?;
    ///
    /// let dir = tempfile::tempdir()?;
    /// table.write(&dir.path().join("table.tsv"), None)?;
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn write<P>(&self, path: &P, delim: Option<char>) -> Result<(), Report>
    where
        P: AsRef<Path> + Debug,
    {
        let delim = match delim {
            Some(c) => c,
            None => utils::get_delimiter(path)?,
        };
        let file = File::create(path).wrap_err_with(|| eyre!("Unable to create file: {path:?}"))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, delim)?;
        writer.flush().wrap_err_with(|| eyre!("Unable to write file: {path:?}"))?;
        Ok(())
    }
}

impl Table<String> {
    /// Read a delimited text file into a [`Table`] of owned strings.
    ///
    /// The first line is the header row. If not provided, the delimiter is
    /// chosen from the file extension (.tsv, .txt, or .csv).
    ///
    /// ```
    /// use std::io::Write;
    /// use tblin_table::Table;
    ///
    /// let mut file = tempfile::Builder::new().suffix(".tsv").tempfile()?;
    /// writeln!(file, "1\t2\t3\nA\tB\tC")?;
    /// let table = Table::read(&file.path(), None)?;
    /// assert_eq!(table.rows, [["A", "B", "C"]]);
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn read<P>(path: &P, delim: Option<char>) -> Result<Table<String>, Report>
    where
        P: AsRef<Path> + Debug,
    {
        let delim = match delim {
            Some(c) => c,
            None => utils::get_delimiter(path)?,
        };

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delim as u8)
            .has_headers(true)
            .quoting(delim != '\t')
            .from_path(path)
            .wrap_err_with(|| eyre!("Failed to read file: {path:?}"))?;

        let mut table = Table::new();
        table.headers = reader
            .headers()
            .wrap_err_with(|| eyre!("Failed to read table headers: {path:?}"))?
            .iter()
            .map(String::from)
            .collect_vec();

        for record in reader.records() {
            let record = record.wrap_err_with(|| eyre!("Failed to parse table row: {path:?}"))?;
            table.rows.push(record.iter().map(String::from).collect_vec());
        }

        table.path = Some(path.as_ref().to_path_buf());

        Ok(table)
    }
}
