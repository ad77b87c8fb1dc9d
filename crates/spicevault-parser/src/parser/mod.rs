//! SPICE netlist extractor.
//!
//! Recursive descent over the token stream, recognizing `.model` and
//! `.subckt`/`.ends` and skipping everything else line by line. Parse
//! problems never escape: each one is logged through [`AnomalyLog`] and
//! parsing resumes at the next line.

use spicevault_core::{ModelRecord, SubcircuitRecord};

use crate::anomaly::AnomalyLog;
use crate::lexer::{Lexer, SpannedToken, Token};

mod model;
mod subcircuit;

/// One extracted definition, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    Model(ModelRecord),
    Subcircuit(SubcircuitRecord),
}

/// Extract all model and subcircuit definitions from netlist text.
///
/// Normalizes the input (strips `\r`, folds to lowercase for lexing)
/// while keeping the original text for subcircuit body capture.
pub fn extract(source: &str, file_name: &str, anomalies: &mut AnomalyLog) -> Vec<Extracted> {
    let original = source.replace('\r', "");
    let lowered = original.to_ascii_lowercase();
    Parser::new(&lowered, &original, file_name, anomalies).parse_all()
}

/// Parser state over a pre-lexed token stream.
pub struct Parser<'a> {
    tokens: Vec<SpannedToken>,
    pos: usize,
    /// Original-case lines, indexed by line number - 1.
    original_lines: Vec<&'a str>,
    file_name: &'a str,
    at_top_level: bool,
    anomalies: &'a mut AnomalyLog,
    records: Vec<Extracted>,
}

impl<'a> Parser<'a> {
    /// Build a parser from lowercased text plus the original for body
    /// capture. Both views must have identical line structure.
    pub fn new(
        normalized: &str,
        original: &'a str,
        file_name: &'a str,
        anomalies: &'a mut AnomalyLog,
    ) -> Self {
        Self {
            tokens: Lexer::new(normalized).tokenize(),
            pos: 0,
            original_lines: original.lines().collect(),
            file_name,
            at_top_level: true,
            anomalies,
            records: Vec::new(),
        }
    }

    /// Consume the token stream, returning records in source order.
    pub fn parse_all(mut self) -> Vec<Extracted> {
        loop {
            self.skip_eol();
            let cmd = match self.peek() {
                Token::Eof => break,
                Token::Command(c) => Some(c.clone()),
                _ => None,
            };
            match cmd.as_deref() {
                Some(".model") => self.parse_model(),
                Some(".subckt") => self.parse_subcircuit(),
                Some(".ends") => {
                    let line = self.current_line();
                    self.anomaly(line, "stray .ends outside any .subckt");
                    self.skip_to_eol();
                }
                _ => self.skip_to_eol(),
            }
        }
        self.records
    }

    // Utility methods

    pub(crate) fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .map(|t| &t.token)
            .unwrap_or(&Token::Eof)
    }

    pub(crate) fn current_line(&self) -> usize {
        self.tokens.get(self.pos).map(|t| t.line).unwrap_or(0)
    }

    pub(crate) fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub(crate) fn skip_eol(&mut self) {
        while matches!(self.peek(), Token::Eol) {
            self.advance();
        }
    }

    /// Skip past the end of the current line.
    pub(crate) fn skip_to_eol(&mut self) {
        while !matches!(self.peek(), Token::Eol | Token::Eof) {
            self.advance();
        }
        if matches!(self.peek(), Token::Eol) {
            self.advance();
        }
    }

    /// Index of the next `Eol`/`Eof` token at or after `pos`.
    pub(crate) fn find_line_end(&self) -> usize {
        let mut i = self.pos;
        while i < self.tokens.len() {
            if matches!(self.tokens[i].token, Token::Eol | Token::Eof) {
                return i;
            }
            i += 1;
        }
        self.tokens.len().saturating_sub(1)
    }

    /// Read a name-like token (identifier, number-shaped name such as
    /// `2n7000`, or a raw value), lowercased.
    pub(crate) fn take_name(&mut self) -> Option<String> {
        match self.peek() {
            Token::Ident(s) | Token::Number(s) | Token::Value(s) => {
                let s = s.to_ascii_lowercase();
                self.advance();
                Some(s)
            }
            _ => None,
        }
    }

    pub(crate) fn anomaly(&mut self, line: usize, message: &str) {
        self.anomalies.record(self.file_name, line, message);
    }

    /// Text of one token, as it would appear on the source line.
    pub(crate) fn lexeme(token: &Token) -> String {
        match token {
            Token::Command(s)
            | Token::Ident(s)
            | Token::Number(s)
            | Token::Str(s)
            | Token::Value(s) => s.clone(),
            Token::Operator(c) | Token::Unknown(c) => c.to_string(),
            Token::Equals => "=".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Comma => ",".to_string(),
            Token::Eol | Token::Eof => String::new(),
        }
    }

    /// Original-case text of the (1-based) line range, inclusive.
    pub(crate) fn original_span(&self, first_line: usize, last_line: usize) -> String {
        let first = first_line.saturating_sub(1);
        let last = last_line.min(self.original_lines.len());
        self.original_lines[first..last].join("\n")
    }
}
