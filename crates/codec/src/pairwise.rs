// Pairwise typing
//
// N operands and N results share types position for position, so only
// the operand list is printed. Equal counts are a precondition of an
// operation using this format, established where the operation is
// registered, not re-checked here.

use crate::printer::Printer;
use parser::error::{ParseError, ParseResult};
use parser::parser::TypeParser;
use parser::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseOpType {
    pub operands: Vec<Type>,
    pub results: Vec<Type>,
}

pub fn print_pairwise_op_type(p: &mut Printer, operands: &[Type]) {
    for (i, ty) in operands.iter().enumerate() {
        if i > 0 {
            p.print_str(", ");
        }
        p.print_type(ty);
    }
}

pub fn parse_pairwise_op_type(parser: &mut TypeParser) -> ParseResult<PairwiseOpType> {
    let loc = parser.current_location();

    let operands = match parser.parse_type_list() {
        Ok(types) => types,
        Err(_) => {
            return Err(ParseError::GrammarMismatch {
                message: "expected type list".to_string(),
                span: loc,
            });
        }
    };

    let results = operands.clone();
    Ok(PairwiseOpType { operands, results })
}
