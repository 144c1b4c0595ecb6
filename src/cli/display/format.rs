//! Value formatters for CLI output.

/// Mask all but the first `visible` characters of `value`.
///
/// The masked output keeps the original length so typos in length stay
/// noticeable.
pub fn mask_secret(value: &str, visible: usize) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { c } else { '*' })
        .collect()
}
