//! Injected line-shape capabilities.
//!
//! The structural engine never decides on its own what a group header or an association tag
//! looks like. It asks a [`HeaderSyntax`] and a [`TagStripper`], so the configuration-driven
//! pattern language of a host (see `outline-core-classify`) plugs in without the engine
//! knowing about it. [`ColonHeaders`] and [`AssociationTags`] are the plain defaults.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Recognizes and renders group header lines.
pub trait HeaderSyntax {
    /// The group name if `line` is a header, without indentation or the trailing token.
    fn header_name<'a>(&self, line: &'a str) -> Option<&'a str>;

    /// Returns `true` if `line` is a group header.
    fn is_header(&self, line: &str) -> bool {
        self.header_name(line).is_some()
    }

    /// Render a header line for `name`, without indentation.
    fn render_header(&self, name: &str) -> String {
        format!("{name}:")
    }
}

impl<H: HeaderSyntax + ?Sized> HeaderSyntax for &H {
    fn header_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        (**self).header_name(line)
    }

    fn render_header(&self, name: &str) -> String {
        (**self).render_header(name)
    }
}

// A name, a colon, then whitespace, end of line, or a tag. Colons inside tag values such as
// `@done(10:27 pm)` are not followed by any of those and never make a header.
static COLON_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^:]+):(?:\s|$|@)").expect("valid header regex"));

/// Headers of the form `Name:`, optionally followed by decoration text or tags
/// (`Name: (3) 2h`, `Name: @today`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ColonHeaders;

impl ColonHeaders {
    /// Create the default header syntax.
    pub fn new() -> Self {
        Self
    }
}

impl HeaderSyntax for ColonHeaders {
    fn header_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        let name = COLON_HEADER.captures(line)?.get(1)?.as_str().trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Removes inline association tags from text.
pub trait TagStripper {
    /// `text` with every association tag removed. Borrows when nothing matched.
    fn strip<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

impl<T: TagStripper + ?Sized> TagStripper for &T {
    fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        (**self).strip(text)
    }
}

static PROJECT_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&association_tag_pattern("project")).expect("valid association tag regex")
});

fn association_tag_pattern(keyword: &str) -> String {
    // Horizontal whitespace only: stripping must never join two lines.
    format!(r"[^\S\n]*@{}\([^)]*\)", regex::escape(keyword))
}

/// Strips `@keyword(arbitrary text)` tokens and the whitespace before them.
#[derive(Debug, Clone)]
pub struct AssociationTags {
    regex: Regex,
}

impl AssociationTags {
    /// Stripper for `@<keyword>(...)` tokens.
    pub fn new(keyword: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&association_tag_pattern(keyword))?,
        })
    }
}

impl Default for AssociationTags {
    /// Stripper for `@project(...)`.
    fn default() -> Self {
        Self {
            regex: PROJECT_TAG.clone(),
        }
    }
}

impl TagStripper for AssociationTags {
    fn strip<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(text, "")
    }
}
