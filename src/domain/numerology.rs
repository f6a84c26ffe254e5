//! Identifier numerology.

/// Score an identifier: digits count their value, letters their alphabet
/// position (A = 1 ... Z = 26). Everything that is not an ASCII letter or
/// digit, including non-ASCII text, contributes nothing.
pub fn score(identifier: &str) -> u64 {
    identifier
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| match c.to_ascii_uppercase() {
            d @ '0'..='9' => u64::from(d as u8 - b'0'),
            l => u64::from(l as u8 - b'A' + 1),
        })
        .sum()
}
