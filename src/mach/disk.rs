use super::Listing;
use crate::error;
use crate::lang::Error;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, Error>;

/// ## Program files
///
/// A program named `SQUARE` lives in `SQUARE.bas` as one
/// `<line number> <statement>` per line.

/// `"NAME"` or `NAME` to `NAME.bas` inside `dir`.
pub fn filename(dir: &Path, name: &str) -> Result<PathBuf> {
    let name = name.trim_matches('"');
    if name.is_empty() {
        return Err(error!(MissingFilename));
    }
    Ok(dir.join(format!("{}.bas", name)))
}

fn io_error(error: std::io::Error) -> Error {
    match error.kind() {
        ErrorKind::NotFound => error!(FileNotFound),
        _ => error!(DiskError; &error.to_string()),
    }
}

pub fn save(listing: &Listing, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(io_error)?;
    for line in listing.lines() {
        writeln!(file, "{}", line).map_err(io_error)?;
    }
    log::debug!("saved {} lines to {}", listing.len(), path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Listing> {
    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut text = vec![];
    for line in reader.lines() {
        text.push(line.map_err(io_error)?);
    }
    let listing = Listing::commit(text.iter().map(String::as_str));
    log::debug!("loaded {} lines from {}", listing.len(), path.display());
    Ok(listing)
}

/// `.bas` files in `dir` sorted by name: `NAME  SIZE  YYYY-MM-DD HH:MM`.
pub fn dir(dir: &Path) -> Result<Vec<String>> {
    let mut entries = vec![];
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if path.extension().map_or(true, |ext| ext != "bas") {
            continue;
        }
        let metadata = entry.metadata().map_err(io_error)?;
        if !metadata.is_file() {
            continue;
        }
        let name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().to_string(),
            None => continue,
        };
        let modified = match metadata.modified() {
            Ok(time) => DateTime::<Local>::from(time)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            Err(_) => String::new(),
        };
        entries.push((name, metadata.len(), modified));
    }
    entries.sort();
    Ok(entries
        .into_iter()
        .map(|(name, len, modified)| {
            format!("{}  {}  {}", name, len, modified)
                .trim_end()
                .to_string()
        })
        .collect())
}
