use crate::list::report::ShoppingList;
use crate::list::validation::LoadReport;
use crate::parser::error::ParseError;
use crate::parser::line::parse_line;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub enum ListError {
    Open { path: PathBuf, source: io::Error },
    Read { line_number: usize, source: io::Error },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Open { path, source } => {
                write!(f, "Failed to open file {}: {}", path.display(), source)
            }
            ListError::Read {
                line_number,
                source,
            } => write!(f, "Failed to read line {}: {}", line_number, source),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListError::Open { source, .. } | ListError::Read { source, .. } => Some(source),
        }
    }
}

/// How the loader treats a line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Entry(&'a str),
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.trim().is_empty() {
        LineKind::Blank
    } else if line.starts_with("//") {
        LineKind::Comment
    } else {
        LineKind::Entry(line)
    }
}

pub fn load_list_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<(ShoppingList, LoadReport), ListError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ListError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "reading shopping list");
    load_list_from_reader(BufReader::new(file))
}

/// Lines that are not valid UTF-8 are reported and skipped like any other
/// bad line. Only a failing reader ends the load early.
pub fn load_list_from_reader<R: BufRead>(
    mut reader: R,
) -> Result<(ShoppingList, LoadReport), ListError> {
    let mut list = ShoppingList::new();
    let mut report = LoadReport::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ListError::Read {
                line_number: line_number + 1,
                source,
            })?;
        if read == 0 {
            break;
        }

        line_number += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        match std::str::from_utf8(&buf) {
            Ok(line) => load_line(line_number, line, &mut list, &mut report),
            Err(_) => {
                let lossy = String::from_utf8_lossy(&buf);
                let line = lossy.strip_suffix('\r').unwrap_or(&*lossy);
                debug!(line_number, "skipping undecodable line");
                report.add_issue(line_number, line, ParseError::InvalidEncoding);
            }
        }
    }

    Ok((list, report))
}

/// Load a list that is already in memory
pub fn load_list_from_str(content: &str) -> (ShoppingList, LoadReport) {
    let mut list = ShoppingList::new();
    let mut report = LoadReport::new();

    for (index, line) in content.lines().enumerate() {
        load_line(index + 1, line, &mut list, &mut report);
    }

    (list, report)
}

fn load_line(line_number: usize, line: &str, list: &mut ShoppingList, report: &mut LoadReport) {
    let entry = match classify_line(line) {
        LineKind::Entry(entry) => entry,
        LineKind::Blank | LineKind::Comment => return,
    };

    match parse_line(entry) {
        Ok(item) => {
            let name = item.name.clone();
            let total = list.push(item);
            debug!(line_number, name = %name, total_cents = total, "parsed item");
        }
        Err(e) => {
            debug!(line_number, error = %e, "skipping line");
            report.add_issue(line_number, entry, e);
        }
    }
}
