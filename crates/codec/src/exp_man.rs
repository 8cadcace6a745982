// Compact numeric-format attribute
//
// A pair of integer attributes serialized as one keyword: `e5m2` for
// exponent 5, mantissa 2, instead of two separate typed integer
// literals.

use crate::attr::IntegerAttr;
use crate::printer::Printer;
use parser::error::{ParseError, ParseResult};
use parser::parser::TypeParser;

pub fn print_exponent_mantissa(p: &mut Printer, exponent: &IntegerAttr, mantissa: &IntegerAttr) {
    p.print_char('e');
    p.print_attribute_without_type(exponent);
    p.print_char('m');
    p.print_attribute_without_type(mantissa);
}

/// Split a keyword of the exact shape `e<digits>m<digits>` into its two
/// digit runs. Whole-string match; anything else is rejected.
fn split_exponent_mantissa(keyword: &str) -> Option<(&str, &str)> {
    let rest = keyword.strip_prefix('e')?;
    let split = rest.find(|c: char| !c.is_ascii_digit())?;
    let (exponent, rest) = rest.split_at(split);
    let mantissa = rest.strip_prefix('m')?;

    if exponent.is_empty() || mantissa.is_empty() {
        return None;
    }
    if !mantissa.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((exponent, mantissa))
}

pub fn parse_exponent_mantissa(parser: &mut TypeParser) -> ParseResult<(IntegerAttr, IntegerAttr)> {
    let loc = parser.current_location();
    let (keyword, _) = parser.parse_keyword()?;

    let (exponent_digits, mantissa_digits) = match split_exponent_mantissa(&keyword) {
        Some(parts) => parts,
        None => {
            return Err(ParseError::NumberFormat {
                message: format!("expected exponent mantissa in format e#m#, saw {}", keyword),
                span: loc,
            });
        }
    };

    // Base-10 parses; a run too large for i32 is rejected per field
    let exponent = match exponent_digits.parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            return Err(ParseError::NumberFormat {
                message: format!("unable to parse exponent '{}'", exponent_digits),
                span: loc,
            });
        }
    };
    let mantissa = match mantissa_digits.parse::<i32>() {
        Ok(value) => value,
        Err(_) => {
            return Err(ParseError::NumberFormat {
                message: format!("unable to parse mantissa '{}'", mantissa_digits),
                span: loc,
            });
        }
    };

    Ok((IntegerAttr::new(exponent), IntegerAttr::new(mantissa)))
}
