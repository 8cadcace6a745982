// Ternary select typing
//
// Three operands (predicate, on-true, on-false) and one result. When
// both branch types equal the result type the signature collapses to
// two tokens:
//
//   select %p, %t, %f : i1, i32
//
// falling back to `(i1, i32, i32) -> i32` otherwise.

use crate::assign::assign_from_function_type;
use crate::printer::Printer;
use parser::error::{ParseError, ParseResult};
use parser::parser::TypeParser;
use parser::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOpType {
    pub pred: Type,
    pub on_true: Type,
    pub on_false: Type,
    pub result: Type,
}

pub fn print_select_op_type(
    p: &mut Printer,
    pred: &Type,
    on_true: &Type,
    on_false: &Type,
    result: &Type,
) {
    // Both branches must match the result for the two-token form
    if on_true != result || on_false != result {
        p.print_function_type(&[pred.clone(), on_true.clone(), on_false.clone()], result);
        return;
    }

    p.print_type(pred);
    p.print_str(", ");
    p.print_type(result);
}

pub fn parse_select_op_type(parser: &mut TypeParser) -> ParseResult<SelectOpType> {
    let loc = parser.current_location();
    let types = parser.parse_type_list()?;

    // Two types: predicate, then the shared branch-and-result type
    if types.len() == 2 {
        let pred = types[0].clone();
        let result = types[1].clone();
        return Ok(SelectOpType {
            pred,
            on_true: result.clone(),
            on_false: result.clone(),
            result,
        });
    }

    // One function type: the general notation over all three operands
    if types.len() == 1 {
        if let Some((inputs, results)) = types[0].as_function() {
            let assigned = assign_from_function_type(loc, 3, inputs, results)?;
            return Ok(SelectOpType {
                pred: assigned.operands[0].clone(),
                on_true: assigned.operands[1].clone(),
                on_false: assigned.operands[2].clone(),
                result: assigned.result,
            });
        }
    }

    Err(ParseError::GrammarMismatch {
        message: "expected functional type or list of two types".to_string(),
        span: loc,
    })
}
