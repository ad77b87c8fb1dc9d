//! `.subckt`/`.ends` parsing and body capture.

use spicevault_core::SubcircuitRecord;

use super::{Extracted, Parser};
use crate::lexer::Token;

impl<'a> Parser<'a> {
    /// Parse a `.subckt` definition, capturing its raw body from the
    /// header line through the matching `.ends` line.
    ///
    /// Nested definitions are not supported: an inner `.subckt` is
    /// dropped, but its `.ends` still pairs up so the outer terminator
    /// is found correctly.
    pub(super) fn parse_subcircuit(&mut self) {
        let header_line = self.current_line();
        self.advance(); // .subckt

        let Some(name) = self.take_name() else {
            self.anomaly(header_line, ".subckt without a name");
            self.skip_to_eol();
            return;
        };
        self.skip_to_eol(); // ports and header parameters

        self.at_top_level = false;
        let mut nesting = 0usize;

        loop {
            self.skip_eol();
            let cmd = match self.peek() {
                Token::Eof => {
                    self.anomaly(
                        header_line,
                        &format!("unterminated .subckt {name}: no matching .ends"),
                    );
                    self.at_top_level = true;
                    return;
                }
                Token::Command(c) => Some(c.clone()),
                _ => None,
            };
            match cmd.as_deref() {
                Some(".subckt") => {
                    let line = self.current_line();
                    self.anomaly(line, &format!("dropped nested .subckt inside {name}"));
                    nesting += 1;
                    self.skip_to_eol();
                }
                Some(".ends") if nesting > 0 => {
                    nesting -= 1;
                    self.skip_to_eol();
                }
                Some(".ends") => {
                    let end_line = self.current_line();
                    self.skip_to_eol();
                    self.at_top_level = true;
                    let record = SubcircuitRecord {
                        name,
                        content: self.original_span(header_line, end_line),
                        source_file: self.file_name.to_string(),
                        line_number: header_line as u32,
                    };
                    self.records.push(Extracted::Subcircuit(record));
                    return;
                }
                // parsed for its diagnostics, then dropped at emission
                Some(".model") => self.parse_model(),
                _ => self.skip_to_eol(),
            }
        }
    }
}
