// Error handling for signature parsing
//
// Every failure carries a byte span into the offending source line and a
// human-readable message. Failures propagate by value; nothing is caught
// or retried inside the codec. Printing never fails.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::fmt;
use std::ops::Range;

/// Byte range into the source line an error points at
pub type Span = Range<usize>;

/// Signature parse error kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Function-type input count does not match the operand slot count
    ArityMismatch {
        present: usize,
        expected: usize,
        span: Span,
    },

    /// Function type carries other than exactly one result
    ResultArityMismatch { span: Span },

    /// Expected tuple type or complex-element tensor type not found
    ShapeMismatch { message: String, span: Span },

    /// Token sequence matches none of the format's accepted shapes
    GrammarMismatch { message: String, span: Span },

    /// Compact numeric literal fails its pattern or integer parsing
    NumberFormat { message: String, span: Span },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::ArityMismatch {
                present, expected, ..
            } => {
                write!(f, "{} operands present, but expected {}", present, expected)
            }
            ParseError::ResultArityMismatch { .. } => write!(f, "expected single output"),
            ParseError::ShapeMismatch { message, .. } => write!(f, "{}", message),
            ParseError::GrammarMismatch { message, .. } => write!(f, "{}", message),
            ParseError::NumberFormat { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::ArityMismatch { span, .. }
            | ParseError::ResultArityMismatch { span }
            | ParseError::ShapeMismatch { span, .. }
            | ParseError::GrammarMismatch { span, .. }
            | ParseError::NumberFormat { span, .. } => span.clone(),
        }
    }

    /// Shift the span by `delta` bytes, for errors reported against a
    /// larger source than the fragment they were parsed from
    pub fn with_offset(self, delta: usize) -> Self {
        fn shift(span: Span, delta: usize) -> Span {
            span.start + delta..span.end + delta
        }
        match self {
            ParseError::ArityMismatch {
                present,
                expected,
                span,
            } => ParseError::ArityMismatch {
                present,
                expected,
                span: shift(span, delta),
            },
            ParseError::ResultArityMismatch { span } => ParseError::ResultArityMismatch {
                span: shift(span, delta),
            },
            ParseError::ShapeMismatch { message, span } => ParseError::ShapeMismatch {
                message,
                span: shift(span, delta),
            },
            ParseError::GrammarMismatch { message, span } => ParseError::GrammarMismatch {
                message,
                span: shift(span, delta),
            },
            ParseError::NumberFormat { message, span } => ParseError::NumberFormat {
                message,
                span: shift(span, delta),
            },
        }
    }

    /// Diagnostic code shown in reports
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::ArityMismatch { .. } => "E201",
            ParseError::ResultArityMismatch { .. } => "E202",
            ParseError::ShapeMismatch { .. } => "E203",
            ParseError::GrammarMismatch { .. } => "E204",
            ParseError::NumberFormat { .. } => "E205",
        }
    }

    /// Get the exit code for this error type
    /// Used by main.rs to return specific exit codes
    pub fn exit_code(&self) -> i32 {
        match self {
            ParseError::ArityMismatch { .. } => 101,
            ParseError::ResultArityMismatch { .. } => 102,
            ParseError::ShapeMismatch { .. } => 103,
            ParseError::GrammarMismatch { .. } => 104,
            ParseError::NumberFormat { .. } => 105,
        }
    }
}

/// Convenient Result type for signature parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Converts a ParseError to a beautiful Ariadne report
pub fn report_error(filename: &str, source: &str, error: &ParseError) {
    let span = error.span();

    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_code(error.code())
        .with_message("Signature parse error")
        .with_label(
            Label::new((filename, span))
                .with_message(error.to_string())
                .with_color(Color::Red),
        );

    let report = match error {
        ParseError::ArityMismatch { .. } => report.with_help(
            "the general notation must list one input type per operand reference",
        ),
        ParseError::ResultArityMismatch { .. } => {
            report.with_help("the general notation must produce exactly one result type")
        }
        ParseError::NumberFormat { .. } => {
            report.with_help("the compact numeric attribute looks like e5m2")
        }
        _ => report,
    };

    report
        .finish()
        .print((filename, Source::from(source)))
        .unwrap();
}
