use std::fmt;

/// Outcome of a failed attribute operation.
///
/// The host drives every attribute call, so these variants are the complete
/// failure surface a writer can report back: either the name or index did not
/// match a known attribute, or the caller-supplied buffer cannot hold the
/// text. `BufferTooSmall` carries the capacity the caller must retry with,
/// measured in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeError {
    Unknown,
    BufferTooSmall { required: usize },
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::Unknown => write!(f, "unknown attribute"),
            AttributeError::BufferTooSmall { required } => {
                write!(f, "buffer too small, {required} code units required")
            }
        }
    }
}

impl std::error::Error for AttributeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_display() {
        assert_eq!(AttributeError::Unknown.to_string(), "unknown attribute");
    }

    #[test]
    fn test_buffer_too_small_display_carries_required_length() {
        assert_eq!(
            AttributeError::BufferTooSmall { required: 9 }.to_string(),
            "buffer too small, 9 code units required"
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(AttributeError::Unknown, AttributeError::Unknown);
        assert_ne!(
            AttributeError::BufferTooSmall { required: 1 },
            AttributeError::BufferTooSmall { required: 2 }
        );
        assert_ne!(
            AttributeError::Unknown,
            AttributeError::BufferTooSmall { required: 0 }
        );
    }
}
