// Tuple decomposition
//
// The operand types are exactly the result tuple's components, so only
// the result is printed and the operands are recovered on parse.

use crate::printer::Printer;
use parser::error::{ParseError, ParseResult};
use parser::parser::TypeParser;
use parser::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct TupleOpType {
    pub operands: Vec<Type>,
    pub result: Type,
}

pub fn print_tuple_op_type(p: &mut Printer, result: &Type) {
    p.print_type(result);
}

pub fn parse_tuple_op_type(parser: &mut TypeParser) -> ParseResult<TupleOpType> {
    let loc = parser.current_location();
    let result = parser.parse_type()?;

    let operands = match result.as_tuple() {
        Some(components) => components.to_vec(),
        None => {
            return Err(ParseError::ShapeMismatch {
                message: "expected tuple type".to_string(),
                span: loc,
            });
        }
    };

    Ok(TupleOpType { operands, result })
}
