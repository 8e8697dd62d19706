//! Array-initializer rendering of packed bytes.

/// Render packed bytes as a C array-initializer body.
///
/// Each byte becomes a lowercase hexadecimal literal with a `0x` prefix,
/// joined by `", "`, in exactly the order the packer produced them. Empty
/// input renders as an empty string -- callers must not assume a minimum
/// length. No line wrapping is applied; layout is the header template's
/// concern.
///
/// # Example
///
/// ```
/// use icon_pack::render_array;
///
/// assert_eq!(render_array(&[0x1a, 0x00, 0xff]), "0x1a, 0x00, 0xff");
/// assert_eq!(render_array(&[]), "");
/// ```
pub fn render_array(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:#04x}"))
        .collect::<Vec<_>>()
        .join(", ")
}
