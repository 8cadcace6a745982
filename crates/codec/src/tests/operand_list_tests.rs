// Trailing-Attribute Operand-List Codec Tests
//
// The list has no length marker; the trailing comma separates it from
// the attribute that follows, and parsing stops at the first token that
// is not a value reference.

use crate::operand_list::{parse_operand_list_with_attribute, print_operand_list_with_attribute};
use crate::printer::Printer;
use parser::parser::TypeParser;

fn print(operands: &[&str]) -> String {
    let owned: Vec<String> = operands.iter().map(|s| s.to_string()).collect();
    let mut p = Printer::new();
    print_operand_list_with_attribute(&mut p, &owned);
    p.finish()
}

// ==================== PRINT TESTS ====================

#[test]
fn test_print_trailing_comma() {
    assert_eq!(print(&["a", "b"]), "%a, %b,");
}

#[test]
fn test_print_single_operand() {
    assert_eq!(print(&["input"]), "%input,");
}

// ==================== PARSE TESTS ====================

#[test]
fn test_parse_stops_at_non_reference() {
    let mut parser = TypeParser::new("%a, %b, e5m2");
    let operands = parse_operand_list_with_attribute(&mut parser).unwrap();
    assert_eq!(operands, vec!["a".to_string(), "b".to_string()]);
    // The attribute keyword is left for the caller
    let (keyword, _) = parser.parse_keyword().unwrap();
    assert_eq!(keyword, "e5m2");
}

#[test]
fn test_parse_zero_operands_is_success() {
    let mut parser = TypeParser::new("e5m2");
    let operands = parse_operand_list_with_attribute(&mut parser).unwrap();
    assert!(operands.is_empty(), "No references collected is still Ok");
    assert!(parser.parse_keyword().is_ok());
}

#[test]
fn test_parse_numbered_references() {
    let mut parser = TypeParser::new("%0, %1, %2, done");
    let operands = parse_operand_list_with_attribute(&mut parser).unwrap();
    assert_eq!(operands.len(), 3);
}

// ==================== ERROR TESTS ====================

#[test]
fn test_parse_missing_comma_is_hard_error() {
    let mut parser = TypeParser::new("%a %b,");
    let err = parse_operand_list_with_attribute(&mut parser).unwrap_err();
    assert_eq!(err.to_string(), "expected ','");
}

#[test]
fn test_parse_reference_at_end_needs_comma() {
    let mut parser = TypeParser::new("%a");
    assert!(parse_operand_list_with_attribute(&mut parser).is_err());
}

// ==================== ROUND-TRIP TESTS ====================

#[test]
fn test_round_trip_with_following_attribute() {
    let printed = format!("{} e4m3", print(&["x", "y"]));
    let mut parser = TypeParser::new(&printed);
    let operands = parse_operand_list_with_attribute(&mut parser).unwrap();
    assert_eq!(operands, vec!["x".to_string(), "y".to_string()]);
    let (keyword, _) = parser.parse_keyword().unwrap();
    assert_eq!(keyword, "e4m3");
}
