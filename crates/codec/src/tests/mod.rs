// Test module for codec
//
// One file per signature format, covering the compact path, the general
// fallback path, and the error messages, plus print/parse round-trips.

mod operand_list_tests;
mod roundtrip_tests;

use parser::parser::TypeParser;
use parser::types::{ScalarType, Type};

/// Parse a standalone type from text, for building expectations tersely
pub(crate) fn ty(source: &str) -> Type {
    let mut parser = TypeParser::new(source);
    let ty = parser.parse_type().expect("test type must parse");
    assert!(parser.at_end(), "trailing tokens in test type: {}", source);
    ty
}

pub(crate) fn i32_ty() -> Type {
    Type::scalar(ScalarType::I32)
}

pub(crate) fn f32_ty() -> Type {
    Type::scalar(ScalarType::F32)
}

pub(crate) fn i64_ty() -> Type {
    Type::scalar(ScalarType::I64)
}
