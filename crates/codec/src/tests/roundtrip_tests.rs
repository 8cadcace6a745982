// Round-Trip Tests
//
// For each type-bearing format: print a well-typed signature, parse the
// text back, and require the exact operand and result types. Exercises
// both the compact and the fallback spellings.

use super::{f32_ty, i32_ty, i64_ty, ty};
use crate::complex::{parse_complex_op_type, print_complex_op_type};
use crate::pairwise::{parse_pairwise_op_type, print_pairwise_op_type};
use crate::printer::Printer;
use crate::select::{parse_select_op_type, print_select_op_type};
use crate::tuple::{parse_tuple_op_type, print_tuple_op_type};
use crate::uniform::{parse_same_operands_and_result_type, print_same_operands_and_result_type};
use parser::parser::TypeParser;
use parser::types::Type;

// ==================== UNIFORM ====================

fn roundtrip_uniform(operands: Vec<Type>, result: Type) {
    let mut p = Printer::new();
    print_same_operands_and_result_type(&mut p, &operands, &result);
    let text = p.finish();

    let mut parser = TypeParser::new(&text);
    let assigned = parse_same_operands_and_result_type(&mut parser, operands.len())
        .unwrap_or_else(|e| panic!("reparse of '{}' failed: {}", text, e));
    assert!(parser.at_end(), "trailing tokens after '{}'", text);
    assert_eq!(assigned.operands, operands, "operands for '{}'", text);
    assert_eq!(assigned.result, result, "result for '{}'", text);
}

#[test]
fn test_uniform_compact() {
    roundtrip_uniform(vec![i32_ty(), i32_ty()], i32_ty());
}

#[test]
fn test_uniform_fallback() {
    roundtrip_uniform(vec![i32_ty(), f32_ty()], i64_ty());
}

#[test]
fn test_uniform_tensor_compact() {
    let t = ty("tensor<8x8xbf16>");
    roundtrip_uniform(vec![t.clone(), t.clone(), t.clone()], t);
}

#[test]
fn test_uniform_zero_operands() {
    roundtrip_uniform(vec![], ty("tensor<4xi64>"));
}

// ==================== TUPLE ====================

#[test]
fn test_tuple_roundtrip() {
    let result = ty("tuple<i32, tensor<4xf32>>");
    let mut p = Printer::new();
    print_tuple_op_type(&mut p, &result);
    let text = p.finish();

    let mut parser = TypeParser::new(&text);
    let parsed = parse_tuple_op_type(&mut parser).unwrap();
    assert_eq!(parsed.operands, vec![i32_ty(), ty("tensor<4xf32>")]);
    assert_eq!(parsed.result, result);
}

// ==================== PAIRWISE ====================

#[test]
fn test_pairwise_roundtrip() {
    let operands = vec![i32_ty(), ty("tensor<4xf32>"), f32_ty()];
    let mut p = Printer::new();
    print_pairwise_op_type(&mut p, &operands);
    let text = p.finish();

    let mut parser = TypeParser::new(&text);
    let parsed = parse_pairwise_op_type(&mut parser).unwrap();
    assert_eq!(parsed.operands, operands);
    assert_eq!(parsed.results, operands);
}

// ==================== COMPLEX ====================

fn roundtrip_complex(lhs: Type, rhs: Type, result: Type) {
    let mut p = Printer::new();
    print_complex_op_type(&mut p, &lhs, &rhs, &result);
    let text = p.finish();

    let mut parser = TypeParser::new(&text);
    let parsed = parse_complex_op_type(&mut parser)
        .unwrap_or_else(|e| panic!("reparse of '{}' failed: {}", text, e));
    assert_eq!(parsed.lhs, lhs, "lhs for '{}'", text);
    assert_eq!(parsed.rhs, rhs, "rhs for '{}'", text);
    assert_eq!(parsed.result, result, "result for '{}'", text);
}

#[test]
fn test_complex_compact() {
    roundtrip_complex(
        ty("tensor<4xf32>"),
        ty("tensor<4xf32>"),
        ty("tensor<4xcomplex<f32>>"),
    );
}

#[test]
fn test_complex_fallback() {
    // Mismatched operand forces the general notation, which still
    // reproduces the exact original types
    roundtrip_complex(
        ty("tensor<4xf64>"),
        ty("tensor<4xf32>"),
        ty("tensor<4xcomplex<f32>>"),
    );
}

// ==================== SELECT ====================

fn roundtrip_select(pred: Type, on_true: Type, on_false: Type, result: Type) {
    let mut p = Printer::new();
    print_select_op_type(&mut p, &pred, &on_true, &on_false, &result);
    let text = p.finish();

    let mut parser = TypeParser::new(&text);
    let parsed = parse_select_op_type(&mut parser)
        .unwrap_or_else(|e| panic!("reparse of '{}' failed: {}", text, e));
    assert_eq!(parsed.pred, pred, "pred for '{}'", text);
    assert_eq!(parsed.on_true, on_true, "on_true for '{}'", text);
    assert_eq!(parsed.on_false, on_false, "on_false for '{}'", text);
    assert_eq!(parsed.result, result, "result for '{}'", text);
}

#[test]
fn test_select_compact() {
    roundtrip_select(ty("i1"), i32_ty(), i32_ty(), i32_ty());
}

#[test]
fn test_select_fallback() {
    roundtrip_select(ty("i1"), i64_ty(), i32_ty(), i32_ty());
}

#[test]
fn test_select_tensor_compact() {
    let branch = ty("tensor<4xf32>");
    roundtrip_select(ty("tensor<4xi1>"), branch.clone(), branch.clone(), branch);
}
