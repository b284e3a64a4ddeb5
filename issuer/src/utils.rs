use regex::Regex;

/// File-name slug for a member: keep letters, digits, hyphens and spaces,
/// lowercase, then collapse space runs into single underscores.
pub fn slugify(input: &str) -> String {
    let clean = Regex::new(r"[^A-Za-z0-9- ]").unwrap();
    let s = clean.replace_all(input, "").into_owned();

    let s = s.trim().to_lowercase();

    let collapse = Regex::new(r" +").unwrap();
    collapse.replace_all(&s, "_").into_owned()
}
