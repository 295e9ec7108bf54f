/// Escapes characters that Typst would otherwise interpret as markup or
/// code. Emphasis markers are left alone so fixed template text can carry
/// inline bold spans.
pub fn escape_typst(text: &str) -> String {
    text.replace('@', "\\@")
        .replace('#', "\\#")
        .replace('$', "\\$")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_code_and_markup_characters() {
        assert_eq!(escape_typst("a@b #x $5 c_d"), "a\\@b \\#x \\$5 c\\_d");
    }

    #[test]
    fn leaves_emphasis_markers_untouched() {
        assert_eq!(escape_typst("*Date:* 2025-01-01"), "*Date:* 2025-01-01");
    }
}
