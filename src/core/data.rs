//! Line loader: one value per line, trimmed, blanks dropped.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

use crate::core::{
    constants::{STDIN_PATH, STDIN_TITLE},
    error::HistoError,
};

const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Reads every line of `src`, trimming surrounding whitespace and discarding
/// lines that end up empty. The whole input is consumed before returning.
pub fn read_lines<R: Read>(src: R) -> io::Result<Vec<String>> {
    let rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.len() == line.len() {
            out.push(line);
        } else {
            out.push(trimmed.to_owned());
        }
    }
    Ok(out)
}

/// Like [`read_lines`] but opens `path` first; `-` reads standard input.
pub fn read_lines_from_path(path: &Path) -> Result<Vec<String>, HistoError> {
    let unavailable = |source| HistoError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == STDIN_PATH {
        read_lines(io::stdin().lock()).map_err(unavailable)
    } else {
        let file = File::open(path).map_err(unavailable)?;
        read_lines(file).map_err(unavailable)
    }
}

/// Chart title derived from the input path: the file name without its
/// extension, or `stdin` for `-`.
#[must_use]
pub fn title_for_path(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        return STDIN_TITLE.to_owned();
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
