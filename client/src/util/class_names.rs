//! Class attribute composition.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// Join class fragments with single spaces, skipping empty ones.
#[must_use]
pub fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
