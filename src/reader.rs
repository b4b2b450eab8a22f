//! Line oriented reader, keeping track of the position within the stream.
use std::io::{BufRead, BufReader, Read};

use crate::error::{Error, ParsingError};

// RINEX is \n termination based, and always made of rather short lines.
const LINE_CAPACITY: usize = 128;

/// [Reader] delivers one RINEX line at a time, strictly forward.
/// It counts the lines it delivered so every error can be located.
/// There is no pushback: content that needs look-ahead must request
/// the next line itself.
pub struct Reader<R: Read> {
    inner: BufReader<R>,
    /// 1-based number of the last delivered line
    line: usize,
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: BufReader::new(reader),
            line: 0,
        }
    }

    /// Number of the last line that was delivered, 0 before the first one.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Returns the next line, without its "\n" or "\r\n" termination,
    /// or None at end of stream.
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::with_capacity(LINE_CAPACITY);
        let size = self.inner.read_line(&mut line)?;
        if size == 0 {
            return Ok(None);
        }
        self.line += 1;
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Locates given [ParsingError] at the current position.
    /// Truncation errors point to the line that was expected.
    pub(crate) fn error(&self, kind: ParsingError) -> Error {
        match kind {
            ParsingError::TruncatedInput | ParsingError::TruncatedEpoch(_) => {
                Error::new(self.line + 1, kind)
            },
            _ => Error::new(self.line, kind),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Reader;
    use crate::error::ParsingError;

    #[test]
    fn lines_iter() {
        let content = "first line\r\nsecond line\n\nlast line";
        let mut reader = Reader::new(content.as_bytes());
        assert_eq!(reader.line_number(), 0);

        assert_eq!(
            reader.next_line().unwrap(),
            Some("first line".to_string())
        );
        assert_eq!(reader.line_number(), 1);
        assert_eq!(
            reader.next_line().unwrap(),
            Some("second line".to_string())
        );
        assert_eq!(reader.next_line().unwrap(), Some(String::new()));
        assert_eq!(reader.next_line().unwrap(), Some("last line".to_string()));
        assert_eq!(reader.line_number(), 4);

        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn error_location() {
        let mut reader = Reader::new("only line\n".as_bytes());
        reader.next_line().unwrap();

        let error = reader.error(ParsingError::InvalidEpochRecord("only line".to_string()));
        assert_eq!(error.line, 1);

        let error = reader.error(ParsingError::TruncatedEpoch(1));
        assert_eq!(error.line, 2);
    }
}
