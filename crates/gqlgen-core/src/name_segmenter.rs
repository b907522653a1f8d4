use crate::prefix_stack::SEPARATOR;

/// Split a dotted field name into capitalized segments.
///
/// The name is split at every separator except where the word accumulated so
/// far is a strict prefix of one of `immutable_tokens`. Those compound names
/// (`primary_address`, `device_type`, ...) stay joined as a single segment.
/// Tokens are consulted in order and the first one the accumulated word is a
/// prefix of decides.
///
/// ```
/// use gqlgen_core::segment_field_name;
///
/// assert_eq!(
///     segment_field_name("primary_address_value", &["primary_address"]),
///     vec!["Primary_address", "Value"],
/// );
/// ```
pub fn segment_field_name<S: AsRef<str>>(
    dotted_name: &str,
    immutable_tokens: &[S],
) -> Vec<String> {
    let mut segments = vec![];
    let mut current_word = String::new();

    for ch in dotted_name.chars() {
        if ch == SEPARATOR && !keeps_joined(&current_word, immutable_tokens) {
            segments.push(std::mem::take(&mut current_word));
        } else {
            current_word.push(ch);
        }
    }
    segments.push(current_word);

    segments.iter()
        .map(|segment| capitalize_first(segment))
        .collect()
}

fn keeps_joined<S: AsRef<str>>(word: &str, immutable_tokens: &[S]) -> bool {
    immutable_tokens.iter()
        .map(AsRef::as_ref)
        .find(|token| token.starts_with(word))
        .is_some_and(|token| token.len() > word.len())
}

/// Upper-cases the first character and leaves the rest untouched.
pub(crate) fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
