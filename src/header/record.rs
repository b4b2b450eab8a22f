use std::io::Read;

use crate::{error::ParsingError, reader::Reader};

/// Width of the value field, in bytes
pub const VALUE_WIDTH: usize = 60;

/// Maximal label width, in bytes
pub const LABEL_WIDTH: usize = 20;

/// [HeaderRecord] is one physical header line:
/// a 60 byte value followed by its label.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRecord {
    /// Columns 1-60, space padded
    pub value: String,
    /// Columns 61-80, trimmed
    pub label: String,
    /// 1-based line number
    pub line: usize,
}

impl HeaderRecord {
    /// Splits given line into a [HeaderRecord].
    /// The label is mandatory and may not exceed [LABEL_WIDTH].
    /// A label starting one column late (column 62) is accepted.
    pub fn parse(line: &str, line_number: usize) -> Result<Self, ParsingError> {
        let line = line.trim_end();
        let width = line.len();
        let shifted =
            width == VALUE_WIDTH + LABEL_WIDTH + 1 && line.as_bytes()[VALUE_WIDTH] == b' ';
        if width <= VALUE_WIDTH
            || (width > VALUE_WIDTH + LABEL_WIDTH && !shifted)
            || !line.is_char_boundary(VALUE_WIDTH)
        {
            return Err(ParsingError::InvalidHeaderLine(line.to_string()));
        }
        let (value, label) = line.split_at(VALUE_WIDTH);
        let label = label.trim();
        if label.is_empty() || label.len() > LABEL_WIDTH {
            return Err(ParsingError::InvalidHeaderLine(line.to_string()));
        }
        Ok(Self {
            value: value.to_string(),
            label: label.to_string(),
            line: line_number,
        })
    }

    /// Consumes exactly one line from [Reader].
    pub fn read<R: Read>(reader: &mut Reader<R>) -> Result<Self, ParsingError> {
        let line = reader.next_line()?.ok_or(ParsingError::TruncatedInput)?;
        Self::parse(&line, reader.line_number())
    }

    /// Returns true if the value field is entirely blank
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
