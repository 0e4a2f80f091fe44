mod lexer;
mod parser;
mod token;

use crate::{error::PResult, value::Value};
use parser::Parser;

/// Parses exactly one value literal from `src`.
pub(crate) fn parse(src: &str) -> PResult<Value> {
    let mut parser = Parser::new(src);
    let value = parser.parse_value()?;
    parser.finish()?;
    Ok(value)
}
