// Uniform operand/result typing
//
// `op %a, %b : i32` when every operand type equals the result type;
// `op %a, %b : (i32, f32) -> i64` otherwise.

use crate::assign::{AssignedTypes, assign_from_function_type};
use crate::printer::Printer;
use parser::error::ParseResult;
use parser::parser::TypeParser;
use parser::types::Type;

pub fn print_same_operands_and_result_type(p: &mut Printer, operands: &[Type], result: &Type) {
    // Zero operand types: `() -> a` prints as `a`
    if operands.is_empty() {
        p.print_type(result);
        return;
    }

    // All same type: `(a, a, ...) -> a` prints as `a`
    if operands.iter().all(|ty| ty == result) {
        p.print_type(result);
        return;
    }

    p.print_function_type(operands, result);
}

/// Fixed-arity parse: `operand_count` comes from the operation definition
pub fn parse_same_operands_and_result_type(
    parser: &mut TypeParser,
    operand_count: usize,
) -> ParseResult<AssignedTypes> {
    let loc = parser.current_location();
    let ty = parser.parse_type()?;

    // General notation: the operand types did not all match the result
    if let Some((inputs, results)) = ty.as_function() {
        return assign_from_function_type(loc, operand_count, inputs, results);
    }

    // Bare type: one token covers every operand and the result
    let operands = vec![ty.clone(); operand_count];
    Ok(AssignedTypes {
        operands,
        result: ty,
    })
}

/// Variadic parse. A bare type token gives no indication of how many
/// operands were written, so the count comes from the operand references
/// the caller has already parsed.
pub fn parse_variadic_same_operands_and_result_type(
    parser: &mut TypeParser,
    operands: &[String],
) -> ParseResult<AssignedTypes> {
    parse_same_operands_and_result_type(parser, operands.len())
}
