#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    AllocFailed {
        new_capacity: usize,
    },
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    ZeroSizedElement,
}

impl core::fmt::Display for ArrayError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            ArrayError::AllocFailed { new_capacity: 32 }.to_string(),
            "allocation failed with new capacity 32",
        );
        assert_eq!(
            ArrayError::IndexOutOfBounds { index: 4, len: 4 }.to_string(),
            "index 4 was out of bounds of len 4",
        );
        assert_eq!(
            ArrayError::ZeroSizedElement.to_string(),
            "size of element type is zero",
        );
    }
}
