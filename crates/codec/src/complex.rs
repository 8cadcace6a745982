// Complex decomposition
//
// Two real-element tensor operands build one complex-element tensor
// result. The operand types are inferable from the result (same shape,
// element type the real part of the complex element), so only the result
// is printed when they match the inference:
//
//   complex %re, %im : tensor<4xcomplex<f32>>
//     result   : tensor<4xcomplex<f32>>
//     operands : tensor<4xf32>, tensor<4xf32>

use crate::assign::assign_from_function_type;
use crate::printer::Printer;
use parser::error::{ParseError, ParseResult};
use parser::parser::TypeParser;
use parser::types::Type;

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexOpType {
    pub lhs: Type,
    pub rhs: Type,
    pub result: Type,
}

pub fn print_complex_op_type(p: &mut Printer, lhs: &Type, rhs: &Type, result: &Type) {
    let matches_inference = match result.real_component_type() {
        Some(real) => *lhs == real && *rhs == real,
        None => false,
    };

    if !matches_inference {
        p.print_function_type(&[lhs.clone(), rhs.clone()], result);
        return;
    }

    p.print_type(result);
}

pub fn parse_complex_op_type(parser: &mut TypeParser) -> ParseResult<ComplexOpType> {
    let loc = parser.current_location();
    let ty = parser.parse_type()?;

    // General notation: the operand types did not match the inference
    if let Some((inputs, results)) = ty.as_function() {
        let assigned = assign_from_function_type(loc, 2, inputs, results)?;
        return Ok(ComplexOpType {
            lhs: assigned.operands[0].clone(),
            rhs: assigned.operands[1].clone(),
            result: assigned.result,
        });
    }

    // Otherwise both operand types are inferred from the complex result
    let real = match ty.real_component_type() {
        Some(real) => real,
        None => {
            return Err(ParseError::ShapeMismatch {
                message: "expected tensor with complex element type".to_string(),
                span: loc,
            });
        }
    };

    Ok(ComplexOpType {
        lhs: real.clone(),
        rhs: real,
        result: ty,
    })
}
