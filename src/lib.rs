#![allow(clippy::module_inception)]

use std::rc::Rc;

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorTip},
    evaluator::{
        diagnostics::Diagnostics,
        evaluator::{evaluate, EvalResult},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod evaluator;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline over `source`.
///
/// Lexical errors abort and are returned. Syntax errors are handed to
/// `diagnostics` as the evaluator meets them and make the result `NaN`.
pub fn calculate(
    source: &str,
    file: Option<String>,
    diagnostics: &mut impl Diagnostics,
) -> Result<EvalResult, Error> {
    let tokens = tokenize(source.to_string(), file)?;
    debug!(count = tokens.len(), "tokenized source");
    diagnostics.trace_tokens(&tokens);

    let ast = parse(&tokens);
    debug!(has_errors = ast.has_errors(), "parsed token stream");
    diagnostics.trace_ast(&ast);

    Ok(evaluate(&ast, diagnostics))
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within the
/// line. An offset at the very end of the source points just past the last
/// character of the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    // End of input, or an empty source
    match last {
        Some((number, line, _)) if !line.ends_with('\n') => {
            let line_pos = line.len();
            Some((number, line, line_pos))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}


/// Renders an error the way the command line prints it.
///
/// ```text
/// Error: name (tip)
/// -> file
///   |
/// 1 | 2 + $
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
