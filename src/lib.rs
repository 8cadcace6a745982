// opsig — operation signature round-tripping for a tensor IR
//
// The library half hosts a fixed operation registry and the line-based
// driver shared by the CLI and the integration tests. Each registered
// operation declares one of the shorthand signature formats; the codec
// crate does the actual printing and parsing.

use codec::complex::{parse_complex_op_type, print_complex_op_type};
use codec::exp_man::{parse_exponent_mantissa, print_exponent_mantissa};
use codec::operand_list::{parse_operand_list_with_attribute, print_operand_list_with_attribute};
use codec::pairwise::{parse_pairwise_op_type, print_pairwise_op_type};
use codec::printer::Printer;
use codec::select::{parse_select_op_type, print_select_op_type};
use codec::tuple::{parse_tuple_op_type, print_tuple_op_type};
use codec::uniform::{
    parse_same_operands_and_result_type, parse_variadic_same_operands_and_result_type,
    print_same_operands_and_result_type,
};
use codec::IntegerAttr;
use parser::error::{ParseError, ParseResult};
use parser::parser::TypeParser;
use parser::types::Type;

/// Signature formats an operation can declare instead of the fully
/// general `(inputs...) -> result` notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpFormat {
    SameOperandsAndResult { arity: usize },
    VariadicSameOperandsAndResult,
    Tuple,
    Pairwise,
    Complex,
    Select,
    /// Trailing-comma operand list, an e#m# attribute, then a variadic
    /// uniform type
    ReducePrecision,
}

/// Fixed op-name registry. An operation is only mapped to the pairwise
/// format when its operand and result counts are equal by definition;
/// that is the construction-time gate for the format's count invariant.
pub fn lookup_format(name: &str) -> Option<OpFormat> {
    match name {
        "add" | "mul" => Some(OpFormat::SameOperandsAndResult { arity: 2 }),
        "abs" => Some(OpFormat::SameOperandsAndResult { arity: 1 }),
        "concat" => Some(OpFormat::VariadicSameOperandsAndResult),
        "pack" => Some(OpFormat::Tuple),
        "barrier" => Some(OpFormat::Pairwise),
        "complex" => Some(OpFormat::Complex),
        "select" => Some(OpFormat::Select),
        "reduce_precision" => Some(OpFormat::ReducePrecision),
        _ => None,
    }
}

/// One parsed operation line: references plus their assigned types
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub name: String,
    pub operands: Vec<String>,
    pub operand_types: Vec<Type>,
    pub result_types: Vec<Type>,
    pub exponent_mantissa: Option<(IntegerAttr, IntegerAttr)>,
}

impl Operation {
    fn new(
        name: String,
        operands: Vec<String>,
        operand_types: Vec<Type>,
        result_types: Vec<Type>,
    ) -> Self {
        Operation {
            name,
            operands,
            operand_types,
            result_types,
            exponent_mantissa: None,
        }
    }
}

/// Parse one operation from the cursor, through the format its name
/// declares in the registry
pub fn parse_operation(parser: &mut TypeParser) -> ParseResult<Operation> {
    let (name, name_span) = parser.parse_keyword()?;
    let format = match lookup_format(&name) {
        Some(format) => format,
        None => {
            return Err(ParseError::GrammarMismatch {
                message: format!("unknown operation '{}'", name),
                span: name_span,
            });
        }
    };

    let op = match format {
        OpFormat::SameOperandsAndResult { arity } => {
            let operands = parse_operand_refs(parser)?;
            check_operand_count(parser, &operands, arity)?;
            parser.parse_colon()?;
            let assigned = parse_same_operands_and_result_type(parser, arity)?;
            Operation::new(name, operands, assigned.operands, vec![assigned.result])
        }
        OpFormat::VariadicSameOperandsAndResult => {
            let operands = parse_operand_refs(parser)?;
            parser.parse_colon()?;
            let assigned = parse_variadic_same_operands_and_result_type(parser, &operands)?;
            Operation::new(name, operands, assigned.operands, vec![assigned.result])
        }
        OpFormat::Tuple => {
            let operands = parse_operand_refs(parser)?;
            parser.parse_colon()?;
            let parsed = parse_tuple_op_type(parser)?;
            check_operand_count(parser, &operands, parsed.operands.len())?;
            Operation::new(name, operands, parsed.operands, vec![parsed.result])
        }
        OpFormat::Pairwise => {
            let operands = parse_operand_refs(parser)?;
            parser.parse_colon()?;
            let parsed = parse_pairwise_op_type(parser)?;
            check_operand_count(parser, &operands, parsed.operands.len())?;
            Operation::new(name, operands, parsed.operands, parsed.results)
        }
        OpFormat::Complex => {
            let operands = parse_operand_refs(parser)?;
            check_operand_count(parser, &operands, 2)?;
            parser.parse_colon()?;
            let parsed = parse_complex_op_type(parser)?;
            Operation::new(
                name,
                operands,
                vec![parsed.lhs, parsed.rhs],
                vec![parsed.result],
            )
        }
        OpFormat::Select => {
            let operands = parse_operand_refs(parser)?;
            check_operand_count(parser, &operands, 3)?;
            parser.parse_colon()?;
            let parsed = parse_select_op_type(parser)?;
            Operation::new(
                name,
                operands,
                vec![parsed.pred, parsed.on_true, parsed.on_false],
                vec![parsed.result],
            )
        }
        OpFormat::ReducePrecision => {
            let operands = parse_operand_list_with_attribute(parser)?;
            let attrs = parse_exponent_mantissa(parser)?;
            parser.parse_colon()?;
            let assigned = parse_variadic_same_operands_and_result_type(parser, &operands)?;
            let mut op = Operation::new(name, operands, assigned.operands, vec![assigned.result]);
            op.exponent_mantissa = Some(attrs);
            op
        }
    };

    if !parser.at_end() {
        return Err(ParseError::GrammarMismatch {
            message: "unexpected trailing input".to_string(),
            span: parser.current_location(),
        });
    }
    Ok(op)
}

/// Print one operation, using the compact spelling whenever the format's
/// precondition holds. Assumes a well-formed operation; printing has no
/// error path.
pub fn print_operation(op: &Operation) -> String {
    let mut p = Printer::new();
    p.print_str(&op.name);

    match lookup_format(&op.name) {
        Some(OpFormat::SameOperandsAndResult { .. })
        | Some(OpFormat::VariadicSameOperandsAndResult) => {
            print_operand_refs(&mut p, &op.operands);
            p.print_str(" : ");
            print_same_operands_and_result_type(&mut p, &op.operand_types, &op.result_types[0]);
        }
        Some(OpFormat::Tuple) => {
            print_operand_refs(&mut p, &op.operands);
            p.print_str(" : ");
            print_tuple_op_type(&mut p, &op.result_types[0]);
        }
        Some(OpFormat::Pairwise) => {
            print_operand_refs(&mut p, &op.operands);
            p.print_str(" : ");
            print_pairwise_op_type(&mut p, &op.operand_types);
        }
        Some(OpFormat::Complex) => {
            print_operand_refs(&mut p, &op.operands);
            p.print_str(" : ");
            print_complex_op_type(
                &mut p,
                &op.operand_types[0],
                &op.operand_types[1],
                &op.result_types[0],
            );
        }
        Some(OpFormat::Select) => {
            print_operand_refs(&mut p, &op.operands);
            p.print_str(" : ");
            print_select_op_type(
                &mut p,
                &op.operand_types[0],
                &op.operand_types[1],
                &op.operand_types[2],
                &op.result_types[0],
            );
        }
        Some(OpFormat::ReducePrecision) => {
            p.print_char(' ');
            print_operand_list_with_attribute(&mut p, &op.operands);
            if let Some((exponent, mantissa)) = &op.exponent_mantissa {
                p.print_char(' ');
                print_exponent_mantissa(&mut p, exponent, mantissa);
            }
            p.print_str(" : ");
            print_same_operands_and_result_type(&mut p, &op.operand_types, &op.result_types[0]);
        }
        None => {
            // Not in the registry: spell out the general notation
            print_operand_refs(&mut p, &op.operands);
            p.print_str(" : ");
            p.print_type(&Type::function(
                op.operand_types.clone(),
                op.result_types.clone(),
            ));
        }
    }

    p.finish()
}

/// Parse a whole source: one operation per line, blank and `//` lines
/// skipped. Errors keep their line number and carry whole-source spans.
pub fn parse_source(source: &str) -> (Vec<Operation>, Vec<(usize, ParseError)>) {
    let mut operations = Vec::new();
    let mut errors = Vec::new();

    let mut offset = 0;
    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with("//") {
            let mut parser = TypeParser::new(line);
            match parse_operation(&mut parser) {
                Ok(op) => operations.push(op),
                Err(err) => errors.push((index + 1, err.with_offset(offset))),
            }
        }
        offset += line.len() + 1;
    }

    (operations, errors)
}

/// Comma-separated operand references, no trailing comma. Zero operands
/// is allowed; a comma must be followed by another reference.
fn parse_operand_refs(parser: &mut TypeParser) -> ParseResult<Vec<String>> {
    let mut operands = Vec::new();

    match parser.parse_optional_value_ref() {
        Some(first) => operands.push(first),
        None => return Ok(operands),
    }

    while parser.parse_optional_comma() {
        match parser.parse_optional_value_ref() {
            Some(next) => operands.push(next),
            None => {
                return Err(ParseError::GrammarMismatch {
                    message: "expected operand reference".to_string(),
                    span: parser.current_location(),
                });
            }
        }
    }

    Ok(operands)
}

fn check_operand_count(
    parser: &TypeParser,
    operands: &[String],
    expected: usize,
) -> ParseResult<()> {
    if operands.len() != expected {
        return Err(ParseError::GrammarMismatch {
            message: format!("expected {} operands, found {}", expected, operands.len()),
            span: parser.current_location(),
        });
    }
    Ok(())
}

fn print_operand_refs(p: &mut Printer, operands: &[String]) {
    if operands.is_empty() {
        return;
    }
    p.print_char(' ');
    for (i, name) in operands.iter().enumerate() {
        if i > 0 {
            p.print_str(", ");
        }
        p.print_char('%');
        p.print_str(name);
    }
}
