//! Delimited-table reader/writer with encoding and delimiter auto-detection.
//!
//! Tables are kept as rows of strings in column order. No dataset-specific
//! logic here.

use std::io::Write;
use std::path::Path;

/// CSV parsing error with context
#[derive(Debug, Clone)]
pub struct CsvError {
    pub line: usize,
    pub column: Option<String>,
    pub value: Option<String>,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.column, &self.value) {
            (Some(col), Some(val)) => {
                write!(f, "Line {}, column '{}' (value '{}'): {}", self.line, col, val, self.message)
            }
            (Some(col), None) => {
                write!(f, "Line {}, column '{}': {}", self.line, col, self.message)
            }
            _ => {
                write!(f, "Line {}: {}", self.line, self.message)
            }
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column: None,
            value: None,
            message: message.into(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(0);
        CsvError::new(line, err.to_string())
    }
}

/// A header row plus data rows, all in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Position of the column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Result of reading a file with metadata
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub table: Table,
    /// Detected encoding
    pub encoding: String,
    /// Detected delimiter
    pub delimiter: char,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is always reported as `utf-8`; chardet only guesses for
/// anything else.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "iso-8859-15" | "latin-9" | "latin9" => "iso-8859-15".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        "iso-8859-15" | "latin-9" | "latin9" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.into_owned()
        }
        // UTF-8 and anything unknown: lossy UTF-8
        _ => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Falls back to `,` when no candidate occurs.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

fn delimiter_byte(delimiter: char) -> Result<u8, CsvError> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| CsvError::new(0, format!("Unsupported delimiter '{}'", delimiter)))
}

/// Parse delimited text; the first record is the header.
///
/// Rows may be shorter or longer than the header. Blank lines are skipped.
///
/// # Example
/// ```
/// use datahost::parser::parse_table;
///
/// let table = parse_table("Area,Value\n\"Leeds, West\",3", ',').unwrap();
/// assert_eq!(table.headers, vec!["Area", "Value"]);
/// assert_eq!(table.rows[0], vec!["Leeds, West", "3"]);
/// ```
pub fn parse_table(content: &str, delimiter: char) -> Result<Table, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(|h| h.trim().to_string()).collect(),
        None => return Err(CsvError::new(1, "Empty CSV file")),
    };

    if headers.iter().all(String::is_empty) {
        return Err(CsvError::new(1, "No headers found"));
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { headers, rows })
}

/// Parse raw bytes with encoding and delimiter auto-detection.
pub fn parse_bytes_auto(bytes: &[u8]) -> Result<ParsedTable, CsvError> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    let delimiter = detect_delimiter(content);
    let table = parse_table(content, delimiter)?;

    Ok(ParsedTable {
        table,
        encoding,
        delimiter,
    })
}

/// Read a file with encoding and delimiter auto-detection.
pub fn read_table_auto<P: AsRef<Path>>(path: P) -> Result<ParsedTable, CsvError> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| {
        CsvError::new(0, format!("Cannot read file '{}': {}", path.as_ref().display(), e))
    })?;

    parse_bytes_auto(&bytes)
}

/// Write a table (header first) as UTF-8 delimited text.
pub fn write_table_to<W: Write>(writer: W, table: &Table, delimiter: char) -> Result<(), CsvError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .flexible(true)
        .from_writer(writer);

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .map_err(|e| CsvError::new(0, format!("Cannot flush output: {}", e)))?;

    Ok(())
}

/// Write a table to `path`, replacing any existing file.
pub fn write_table<P: AsRef<Path>>(path: P, table: &Table, delimiter: char) -> Result<(), CsvError> {
    let file = std::fs::File::create(path.as_ref()).map_err(|e| {
        CsvError::new(0, format!("Cannot create file '{}': {}", path.as_ref().display(), e))
    })?;
    write_table_to(file, table, delimiter)
}
