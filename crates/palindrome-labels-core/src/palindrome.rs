//! Palindrome predicate shared by settings validation and request evaluation.

/// Returns true when `s` reads the same forward and backward, byte for byte.
///
/// Empty and single-byte strings are palindromes. No Unicode normalization is
/// performed, so multi-byte characters are compared by their encoded bytes.
pub fn is_palindrome(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes
        .iter()
        .zip(bytes.iter().rev())
        .take(bytes.len() / 2)
        .all(|(head, tail)| head == tail)
}
