use std::{
    cmp::Ordering,
    fs::File,
    io::{BufRead, BufReader, Lines},
    iter::FusedIterator,
    path::Path,
};

use crate::{
    error::{ErrorKind, PResult},
    syntax,
    value::Value,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pair {
    /// 1-based position of the pair in the input.
    pub index: usize,
    pub left: Value,
    pub right: Value,
}

impl Pair {
    pub fn ordering(&self) -> Ordering {
        self.left.compare(&self.right)
    }
}

/// Yields pairs of values from consecutive non-blank lines.
///
/// Pairs are separated by one or more blank lines. The iterator stops after
/// the first error.
pub(crate) struct PairReader<R> {
    lines: Lines<R>,
    line_no: usize,
    index: usize,
    done: bool,
}

impl<R: BufRead> PairReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            index: 0,
            done: false,
        }
    }

    fn next_line(&mut self) -> PResult<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(line) => {
                self.line_no += 1;
                Ok(Some(line.map_err(|e| ErrorKind::from(e).at_line(self.line_no))?))
            }
        }
    }

    fn next_entry(&mut self) -> PResult<Option<String>> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
            log::trace!("Skipping blank line {}", self.line_no);
        }
        Ok(None)
    }

    fn parse_line(&self, line: &str) -> PResult<Value> {
        syntax::parse(line).map_err(|e| e.at_line(self.line_no))
    }

    fn read_pair(&mut self) -> PResult<Option<Pair>> {
        let left = match self.next_entry()? {
            None => return Ok(None),
            Some(line) => self.parse_line(&line)?,
        };
        let left_line = self.line_no;

        let right = match self.next_line()? {
            Some(line) if !line.trim().is_empty() => self.parse_line(&line)?,
            _ => {
                return Err(ErrorKind::ParseError(format!(
                    "line {left_line}: Entry has no right-hand partner"
                )))
            }
        };

        match self.next_line()? {
            Some(line) if !line.trim().is_empty() => {
                return Err(ErrorKind::ParseError(format!(
                    "line {}: Expected blank line between pairs",
                    self.line_no
                )))
            }
            _ => (),
        }

        self.index += 1;
        Ok(Some(Pair {
            index: self.index,
            left,
            right,
        }))
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = PResult<Pair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_pair() {
            Ok(Some(pair)) => {
                log::debug!("pair {}: {} | {}", pair.index, pair.left, pair.right);
                Some(Ok(pair))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(why) => {
                self.done = true;
                Some(Err(why))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for PairReader<R> {}

pub(crate) fn read_pairs(path: &Path) -> PResult<PairReader<BufReader<File>>> {
    let file = File::open(path)
        .map_err(|e| ErrorKind::IoError(format!("Cannot open {}: {e}", path.display())))?;
    Ok(PairReader::new(BufReader::new(file)))
}
