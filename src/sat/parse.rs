use std::error::Error;
use std::fmt;

use super::clause::Clause;
use super::formula::Formula;
use super::var::Lit;

/// Rejection of a malformed literal token. Raised before any `Formula` is
/// built, so the core never sees a bad literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token with no variable name, i.e. a lone negation marker.
    MissingVariable { token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingVariable { token } => {
                write!(f, "literal token {token:?} has no variable name")
            }
        }
    }
}

impl Error for ParseError {}

fn parse_lit(token: &str) -> Result<Lit<String>, ParseError> {
    let (name, negated) = match token.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (token, false),
    };
    if name.is_empty() {
        return Err(ParseError::MissingVariable {
            token: token.to_string(),
        });
    }
    if negated {
        Ok(Lit::neg(name.to_string()))
    } else {
        Ok(Lit::pos(name.to_string()))
    }
}

/// Parses one clause specification: whitespace-separated literal tokens,
/// a variable name optionally prefixed with `-`. Duplicate literals are
/// dropped by clause construction.
pub fn parse_clause(spec: &str) -> Result<Clause<String>, ParseError> {
    let lits = spec
        .split_whitespace()
        .map(parse_lit)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Clause::new(lits))
}

pub fn parse_formula(specs: &[&str]) -> Result<Formula<String>, ParseError> {
    let clauses = specs
        .iter()
        .map(|spec| parse_clause(spec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Formula::new(clauses))
}
