use std::borrow::Cow;

/// Characters with a special meaning in LaTeX and what to write instead
const LATEX_ESCAPES: [(char, &str); 10] = [
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
    ('\\', r"\textbackslash{}"),
];

fn latex_escape_of(ch: char) -> Option<&'static str> {
    LATEX_ESCAPES
        .iter()
        .find(|&&(special, _)| special == ch)
        .map(|&(_, escaped)| escaped)
}

/// Escape `text` so that it can be placed verbatim into a LaTeX document.
/// Text without special characters is returned as-is.
///
/// ```
/// use mklabels::escape_latex;
///
/// assert_eq!(escape_latex("50% off"), r"50\% off");
/// assert_eq!(escape_latex("plain"), "plain");
/// ```
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|ch| latex_escape_of(ch).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match latex_escape_of(ch) {
            Some(replacement) => escaped.push_str(replacement),
            None => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_special_character_is_escaped() {
        assert_eq!(
            escape_latex(r"&%$#_{}~^\"),
            r"\&\%\$\#\_\{\}\textasciitilde{}\textasciicircum{}\textbackslash{}"
        );
    }

    #[test]
    fn escapes_are_not_escaped_again() {
        // the backslash and braces introduced by one escape must survive as-is
        assert_eq!(escape_latex(r"\{"), r"\textbackslash{}\{");
    }

    #[test]
    fn ordinary_text_is_borrowed() {
        assert!(matches!(escape_latex("Jam 2024 (plum)"), Cow::Borrowed(_)));
        assert_eq!(escape_latex("Grüße"), "Grüße");
    }
}
