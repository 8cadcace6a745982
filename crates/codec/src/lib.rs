// Signature codecs for operation types
//
// Each module is one print/parse pair for a shorthand signature grammar.
// The shorthands collapse a full `(inputs...) -> result` signature when a
// structural precondition holds and fall back to the general notation
// when it does not. Parsing returns structured records by value; printing
// writes through the Printer sink and never fails.

pub mod assign;
pub mod attr;
pub mod complex;
pub mod exp_man;
pub mod operand_list;
pub mod pairwise;
pub mod printer;
pub mod select;
pub mod tuple;
pub mod uniform;

pub use assign::AssignedTypes;
pub use attr::IntegerAttr;
pub use printer::Printer;

#[cfg(test)]
mod tests;
