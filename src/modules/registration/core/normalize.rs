// Transformations applied to fields after they pass validation.

/// Trims, collapses runs of spaces and uppercases the first character of
/// every word. Only the space character separates words.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
