//! Text front end: turns a command script such as `R F R B` or `F(2) L F3`
//! into a [`SymbiosState`] for the [`CommandInterpreter`](crate::CommandInterpreter).
//!
//! A script is a run of symbols, optionally separated by whitespace or commas.
//! Each symbol is one alphabetic character, optionally followed by an unsigned
//! step count (`F2`) or a parenthesized signed one (`F(-1)`).

use crate::error::RobotError;
use std::iter::Peekable;
use std::str::CharIndices;
use symbios::{SymbiosState, SymbolTable};

/// Parses `src`, interning every symbol it meets into `interner`.
///
/// Letters without a registered operation are kept; the interpreter ignores them.
pub fn parse_script(src: &str, interner: &mut SymbolTable) -> Result<SymbiosState, RobotError> {
    let mut state = SymbiosState::new();
    let mut chars = src.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() || c == ',' {
            continue;
        }
        if !c.is_alphabetic() {
            return Err(RobotError::Script { offset, found: c });
        }

        let symbol = c.to_string();
        let param = parse_param(&mut chars)?;

        let id = interner
            .get_or_intern(&symbol)
            .map_err(|_| RobotError::SymbolTable(symbol.clone()))?;

        let pushed = match param {
            Some(steps) => state.push(id, 0.0, &[steps as f64]),
            None => state.push(id, 0.0, &[]),
        };
        pushed.map_err(|_| RobotError::SymbolTable(symbol))?;
    }

    Ok(state)
}

fn parse_param(chars: &mut Peekable<CharIndices<'_>>) -> Result<Option<i64>, RobotError> {
    match chars.peek() {
        Some(&(_, '(')) => {
            chars.next();
            let negative = chars.next_if(|&(_, c)| c == '-').is_some();
            let digits = take_digits(chars)?;
            match chars.next() {
                Some((_, ')')) => Ok(Some(if negative { -digits } else { digits })),
                Some((offset, found)) => Err(RobotError::Script { offset, found }),
                None => Err(RobotError::ScriptEnd),
            }
        }
        Some(&(_, c)) if c.is_ascii_digit() => take_digits(chars).map(Some),
        _ => Ok(None),
    }
}

fn take_digits(chars: &mut Peekable<CharIndices<'_>>) -> Result<i64, RobotError> {
    let mut value: i64 = 0;
    let mut seen = false;
    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        seen = true;
        // Saturates; an oversized count still fails speed validation.
        let digit = i64::from(c.to_digit(10).unwrap_or(0));
        value = value.saturating_mul(10).saturating_add(digit);
    }
    if seen {
        return Ok(value);
    }
    match chars.peek() {
        Some(&(offset, found)) => Err(RobotError::Script { offset, found }),
        None => Err(RobotError::ScriptEnd),
    }
}
