//! Line ending helpers.
//!
//! `outline-core` processes text using LF (`'\n'`) newlines only.
//! Content that uses CRLF (`"\r\n"`) or lone CR is normalized before merging, and the line
//! ending of the existing content is restored on the merged result.

use std::borrow::Cow;

/// The newline sequence used when rendering a merged outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: if the input contains any CRLF (`"\r\n"`), returns [`LineEnding::Crlf`],
    /// otherwise [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Normalize CRLF and lone CR to LF. Borrows when there is nothing to rewrite.
    pub fn normalize(text: &str) -> Cow<'_, str> {
        if !text.contains('\r') {
            return Cow::Borrowed(text);
        }
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    }

    /// The newline sequence itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }

    /// Join LF-free lines with this line ending.
    pub fn join<S: AsRef<str>>(self, lines: &[S]) -> String {
        let mut out = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str(self.as_str());
            }
            out.push_str(line.as_ref());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_and_join() {
        assert_eq!(LineEnding::detect_in_text("a\r\nb"), LineEnding::Crlf);
        assert_eq!(LineEnding::detect_in_text("a\nb"), LineEnding::Lf);
        assert_eq!(LineEnding::Crlf.join(&["a", "b"]), "a\r\nb");
        assert_eq!(LineEnding::Lf.join::<&str>(&[]), "");
    }

    #[test]
    fn test_normalize_lone_cr() {
        assert_eq!(LineEnding::normalize("a\rb\r\nc"), "a\nb\nc");
        assert!(matches!(LineEnding::normalize("a\nb"), Cow::Borrowed(_)));
    }
}
