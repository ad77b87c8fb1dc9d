//! `.model` directive parsing.
//!
//! A directive is scanned twice: first the parameter portion is joined
//! into one string and screened for expression syntax (a hit discards
//! the whole model, since a single unevaluable parameter makes the
//! record useless), then the parameter pairs are collected.

use std::collections::HashMap;

use spicevault_core::{ModelRecord, ParameterValue, classify, is_expression};

use super::{Extracted, Parser};
use crate::lexer::Token;

impl<'a> Parser<'a> {
    /// Parse one `.model name type [(] param=value ... [)]` line.
    pub(super) fn parse_model(&mut self) {
        let line = self.current_line();
        self.advance(); // .model

        let Some(name) = self.take_name() else {
            self.anomaly(line, ".model without a name");
            self.skip_to_eol();
            return;
        };
        let Some(model_type) = self.take_name() else {
            self.anomaly(line, &format!(".model {name} without a type"));
            self.skip_to_eol();
            return;
        };

        let has_paren = matches!(self.peek(), Token::LParen);
        if has_paren {
            self.advance();
        }

        let scan_end = self.parameter_scan_end(has_paren, line);

        // Pass 1: screen the whole parameter portion for expressions.
        let joined = self.join_value_text(scan_end);
        if is_expression(&joined) {
            self.anomaly(line, &format!("dropped model {name}: expression in parameters"));
            self.pos = scan_end;
            self.skip_to_eol();
            return;
        }

        // Pass 2: collect name=value pairs.
        let parameters = self.collect_parameters(scan_end, line, &name);

        self.pos = scan_end;
        if has_paren && matches!(self.peek(), Token::RParen) {
            self.advance();
        }
        self.skip_to_eol();

        if !self.at_top_level {
            self.anomaly(line, &format!("dropped model {name}: defined inside a .subckt"));
            return;
        }

        let record = ModelRecord {
            name,
            model_type,
            source_file: self.file_name.to_string(),
            line_number: line as u32,
            parameters,
        };
        self.records.push(Extracted::Model(record));
    }

    /// End of the parameter portion: the closing paren of a wrapped
    /// list, else the end of the line.
    fn parameter_scan_end(&mut self, has_paren: bool, line: usize) -> usize {
        let line_end = self.find_line_end();
        if !has_paren {
            return line_end;
        }
        let mut i = line_end;
        while i > self.pos {
            i -= 1;
            if matches!(self.tokens[i].token, Token::RParen) {
                return i;
            }
        }
        self.anomaly(line, "unclosed ( in .model parameter list");
        line_end
    }

    /// Join the value-position lexemes between `pos` and `end` with
    /// single spaces. Parameter names (with their optional wrapping
    /// parens) and `=` signs are structure, not value text, and are
    /// left out.
    fn join_value_text(&self, end: usize) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut i = self.pos;
        while i < end {
            match &self.tokens[i].token {
                Token::Equals => {}
                // (name)= -- skip up to the equals sign
                Token::LParen
                    if matches!(self.tokens.get(i + 1).map(|t| &t.token), Some(Token::Ident(_)))
                        && matches!(self.tokens.get(i + 2).map(|t| &t.token), Some(Token::RParen))
                        && matches!(self.tokens.get(i + 3).map(|t| &t.token), Some(Token::Equals)) =>
                {
                    i += 2;
                }
                // name= -- the equals is dropped on the next iteration
                Token::Ident(_)
                    if matches!(self.tokens.get(i + 1).map(|t| &t.token), Some(Token::Equals)) => {}
                token => {
                    let lexeme = Self::lexeme(token);
                    if !lexeme.is_empty() {
                        parts.push(lexeme);
                    }
                }
            }
            i += 1;
        }
        parts.join(" ")
    }

    /// Collect `name = value` pairs up to `end`, recovering past
    /// malformed entries.
    fn collect_parameters(
        &mut self,
        end: usize,
        line: usize,
        model_name: &str,
    ) -> HashMap<String, ParameterValue> {
        let mut parameters = HashMap::new();

        while self.pos < end {
            match self.peek() {
                Token::LParen | Token::RParen => self.advance(),
                Token::Ident(name) => {
                    let name = name.to_ascii_lowercase();
                    self.advance();
                    if matches!(self.peek(), Token::RParen) {
                        self.advance();
                    }
                    if self.pos >= end || !matches!(self.peek(), Token::Equals) {
                        self.anomaly(
                            line,
                            &format!("model {model_name}: parameter {name} has no value"),
                        );
                        self.recover_to_parameter(end);
                        continue;
                    }
                    self.advance(); // =
                    match self.take_parameter_value(end) {
                        Some(raw) => {
                            parameters.insert(name, classify(&raw));
                        }
                        None => {
                            self.anomaly(
                                line,
                                &format!("model {model_name}: parameter {name} has no value"),
                            );
                            self.recover_to_parameter(end);
                        }
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }

        parameters
    }

    /// The raw text of one parameter value token.
    fn take_parameter_value(&mut self, end: usize) -> Option<String> {
        if self.pos >= end {
            return None;
        }
        match self.peek() {
            Token::Ident(s) | Token::Number(s) | Token::Str(s) | Token::Value(s) => {
                let s = s.clone();
                self.advance();
                Some(s)
            }
            _ => None,
        }
    }

    /// Skip ahead to the next plausible parameter start.
    fn recover_to_parameter(&mut self, end: usize) {
        while self.pos < end {
            match self.peek() {
                Token::Ident(_) | Token::LParen | Token::RParen => break,
                _ => self.advance(),
            }
        }
    }
}
