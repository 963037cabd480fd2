/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("espresso"), "Espresso");
        assert_eq!(capitalize("cobalt theme"), "Cobalt theme");
        assert_eq!(capitalize("mIxed"), "MIxed");
    }

    #[test]
    fn handles_empty_and_non_ascii() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("1st"), "1st");
    }
}
