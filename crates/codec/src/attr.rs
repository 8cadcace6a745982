/// Immutable signed 32-bit integer attribute attached to an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntegerAttr {
    value: i32,
}

impl IntegerAttr {
    pub fn new(value: i32) -> Self {
        IntegerAttr { value }
    }

    pub fn value(self) -> i32 {
        self.value
    }
}
