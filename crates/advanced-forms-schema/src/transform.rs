//! Value transforms applied after validation.

/// Capitalizes the first character of every whitespace-separated word.
///
/// Leading, trailing and repeated whitespace is collapsed into single
/// spaces. The rest of each word is left untouched.
///
/// # Examples
///
/// ```
/// use advanced_forms_schema::transform::capitalize_words;
///
/// assert_eq!(capitalize_words("  ana  paula "), "Ana Paula");
/// assert_eq!(capitalize_words("a b"), "A B");
/// assert_eq!(capitalize_words("mcDonald"), "McDonald");
/// ```
pub fn capitalize_words(value: &str) -> String {
	value
		.split_whitespace()
		.map(capitalize_first)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Uppercases the first character of `word`.
///
/// Characters whose uppercase form spans several characters (`ß` → `SS`)
/// are expanded.
pub fn capitalize_first(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
