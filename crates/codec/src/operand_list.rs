// Operand list followed by a non-operand attribute
//
// There is no length marker in the text, so the printed form ends every
// operand with a comma; the first token that is not a value reference
// ends the list on parse. The trailing comma is what keeps the boundary
// to the following attribute unambiguous.

use crate::printer::Printer;
use parser::error::ParseResult;
use parser::parser::TypeParser;

pub fn print_operand_list_with_attribute(p: &mut Printer, operands: &[String]) {
    for (i, name) in operands.iter().enumerate() {
        if i > 0 {
            p.print_str(", ");
        }
        p.print_char('%');
        p.print_str(name);
    }
    p.print_str(",");
}

pub fn parse_operand_list_with_attribute(parser: &mut TypeParser) -> ParseResult<Vec<String>> {
    let mut operands = Vec::new();

    // Collect operands and their trailing commas; stop at the first
    // token that is not a value reference. A reference without its
    // comma is a hard error.
    while let Some(name) = parser.parse_optional_value_ref() {
        operands.push(name);
        parser.parse_comma()?;
    }

    Ok(operands)
}
