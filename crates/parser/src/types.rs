// Type model for operation signatures
//
// Types are immutable values compared structurally. The codec layer only
// reads existing types or builds new ones (e.g. the real component type
// of a complex tensor); nothing here mutates in place.

use std::fmt;

/// Scalar element types known to the signature grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    I1,
    I8,
    I16,
    I32,
    I64,
    F16,
    BF16,
    F32,
    F64,
}

impl ScalarType {
    /// Parse a scalar name as it appears in signature text
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "i1" => Some(ScalarType::I1),
            "i8" => Some(ScalarType::I8),
            "i16" => Some(ScalarType::I16),
            "i32" => Some(ScalarType::I32),
            "i64" => Some(ScalarType::I64),
            "f16" => Some(ScalarType::F16),
            "bf16" => Some(ScalarType::BF16),
            "f32" => Some(ScalarType::F32),
            "f64" => Some(ScalarType::F64),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarType::I1 => "i1",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::F16 => "f16",
            ScalarType::BF16 => "bf16",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type system for operation signatures
///
/// The variant set is closed and small; kind checks go through the
/// `as_*` accessors rather than downcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Scalar(ScalarType),
    Tensor { shape: Vec<u64>, element: Box<Type> },
    Complex(Box<Type>),
    Tuple(Vec<Type>),
    Function { inputs: Vec<Type>, results: Vec<Type> },
}

impl Type {
    pub fn scalar(scalar: ScalarType) -> Self {
        Type::Scalar(scalar)
    }

    pub fn tensor(shape: Vec<u64>, element: Type) -> Self {
        Type::Tensor {
            shape,
            element: Box::new(element),
        }
    }

    pub fn complex(element: Type) -> Self {
        Type::Complex(Box::new(element))
    }

    pub fn tuple(components: Vec<Type>) -> Self {
        Type::Tuple(components)
    }

    pub fn function(inputs: Vec<Type>, results: Vec<Type>) -> Self {
        Type::Function { inputs, results }
    }

    /// Input and result lists of a function type
    pub fn as_function(&self) -> Option<(&[Type], &[Type])> {
        match self {
            Type::Function { inputs, results } => Some((inputs, results)),
            _ => None,
        }
    }

    /// Component types of a tuple type
    pub fn as_tuple(&self) -> Option<&[Type]> {
        match self {
            Type::Tuple(components) => Some(components),
            _ => None,
        }
    }

    /// Shape and element type of a tensor type
    pub fn as_tensor(&self) -> Option<(&[u64], &Type)> {
        match self {
            Type::Tensor { shape, element } => Some((shape, element)),
            _ => None,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Type::Complex(_))
    }

    /// The real-valued counterpart of a complex tensor: same shape, with
    /// the element type replaced by the complex type's real part. Defined
    /// only on tensors whose element type is complex.
    pub fn real_component_type(&self) -> Option<Type> {
        let (shape, element) = self.as_tensor()?;
        match element {
            Type::Complex(real) => Some(Type::tensor(shape.to_vec(), (**real).clone())),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Type::Scalar(scalar) => write!(f, "{}", scalar),
            Type::Tensor { shape, element } => {
                write!(f, "tensor<")?;
                for dim in shape {
                    write!(f, "{}x", dim)?;
                }
                write!(f, "{}>", element)
            }
            Type::Complex(element) => write!(f, "complex<{}>", element),
            Type::Tuple(components) => {
                write!(f, "tuple<")?;
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", component)?;
                }
                write!(f, ">")
            }
            Type::Function { inputs, results } => {
                write!(f, "(")?;
                for (i, input) in inputs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", input)?;
                }
                write!(f, ") -> ")?;
                if results.len() == 1 {
                    write!(f, "{}", results[0])
                } else {
                    write!(f, "(")?;
                    for (i, result) in results.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", result)?;
                    }
                    write!(f, ")")
                }
            }
        }
    }
}
