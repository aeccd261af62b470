//! Permissive text decoding for captured process output.

/// Decode bytes as UTF-8, dropping invalid sequences instead of replacing them.
///
/// Unlike [`String::from_utf8_lossy`], no U+FFFD markers are inserted.
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_utf8() {
        assert_eq!(decode_ignoring_invalid("héllo ✅".as_bytes()), "héllo ✅");
    }

    #[test]
    fn drops_invalid_bytes() {
        let bytes = b"ok\xff\xfe done\xc3";
        assert_eq!(decode_ignoring_invalid(bytes), "ok done");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(decode_ignoring_invalid(b""), "");
    }
}
