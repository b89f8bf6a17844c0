use crate::plugin::AttributeError;

/// Copy `text` into a caller-supplied buffer of UTF-16 code units.
///
/// The host allocates the destination and retries with a larger buffer when
/// told how much space is required, so a too-small buffer must be reported
/// without writing anything into it.
pub(crate) fn copy_utf16(text: &str, buffer: &mut [u16]) -> Result<usize, AttributeError> {
    let required = text.encode_utf16().count();
    if buffer.len() < required {
        return Err(AttributeError::BufferTooSmall { required });
    }

    let mut copied = 0;
    for (slot, unit) in buffer.iter_mut().zip(text.encode_utf16()) {
        *slot = unit;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_into_exact_buffer() {
        let mut buffer = vec![0u16; 8];
        let result = copy_utf16("property", &mut buffer);
        assert_eq!(result, Ok(8));
        assert_eq!(String::from_utf16(&buffer).ok().as_deref(), Some("property"));
    }

    #[test]
    fn test_copy_into_oversized_buffer() {
        let mut buffer = vec![0u16; 32];
        let result = copy_utf16("flow", &mut buffer);
        assert_eq!(result, Ok(4));

        let copied: Vec<u16> = buffer.iter().copied().take(4).collect();
        assert_eq!(String::from_utf16(&copied).ok().as_deref(), Some("flow"));
    }

    #[test]
    fn test_too_small_buffer_reports_required_length() {
        let mut buffer = vec![0u16; 3];
        let result = copy_utf16("property1", &mut buffer);
        assert_eq!(result, Err(AttributeError::BufferTooSmall { required: 9 }));
    }

    #[test]
    fn test_too_small_buffer_is_left_unmodified() {
        let mut buffer = vec![0xABCDu16; 4];
        let result = copy_utf16("property2", &mut buffer);
        assert!(result.is_err());
        assert!(buffer.iter().all(|unit| *unit == 0xABCD));
    }

    #[test]
    fn test_length_is_counted_in_utf16_code_units() {
        // Both characters are outside the BMP and take two code units each.
        let text = "\u{1F600}\u{1F680}";
        let mut small = vec![0u16; 2];
        assert_eq!(
            copy_utf16(text, &mut small),
            Err(AttributeError::BufferTooSmall { required: 4 })
        );

        let mut buffer = vec![0u16; 4];
        assert_eq!(copy_utf16(text, &mut buffer), Ok(4));
        assert_eq!(String::from_utf16(&buffer).ok().as_deref(), Some(text));
    }

    #[test]
    fn test_empty_text_succeeds_with_zero_capacity() {
        let mut buffer: Vec<u16> = Vec::new();
        assert_eq!(copy_utf16("", &mut buffer), Ok(0));
    }
}
