//! Group chain creation.
//!
//! Before content can be placed under `A.B.C`, every prefix of that path has to exist as a
//! header. Missing headers are spliced in directly under their parent's header line, so they
//! are recognized as nested on the next parse and land above the parent's existing children.

use crate::groups::{GroupIndex, content_indent_unit};
use crate::indent::indent_line;
use crate::syntax::HeaderSyntax;
use outline_core_lang::MergeConfig;

/// Join `names` into a dotted path.
pub fn join_path<S: AsRef<str>>(names: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(name.as_ref());
    }
    out
}

/// Make sure a header exists for every prefix of `path` (root to leaf).
///
/// The group index is re-parsed before each prefix, since every insertion shifts indices.
/// Returns the number of headers created.
pub fn ensure_group_chain<S, H>(
    lines: &mut Vec<String>,
    path: &[S],
    config: &MergeConfig,
    headers: &H,
) -> usize
where
    S: AsRef<str>,
    H: HeaderSyntax + ?Sized,
{
    let separator = config.path_separator();
    let mut created = 0;

    for depth in 0..path.len() {
        let sub_path = join_path(&path[..=depth], separator);
        let index = GroupIndex::parse(lines.as_slice(), config, headers);
        if index.contains(&sub_path) {
            continue;
        }

        let unit = content_indent_unit(lines.as_slice(), config);
        let base_level = index
            .min_level()
            .map_or(config.root_indent_level, |min| {
                min.max(config.root_indent_level)
            });
        let header = indent_line(
            &headers.render_header(path[depth].as_ref()),
            &unit,
            base_level + depth,
        );

        let parent = if depth > 0 {
            index.find(&join_path(&path[..depth], separator))
        } else {
            None
        };

        match parent {
            Some(parent) => {
                log::debug!("creating group `{sub_path}` under line {}", parent.start);
                lines.insert(parent.start + 1, header);
            }
            None => {
                log::debug!("creating group `{sub_path}` at end of outline");
                lines.push(header);
            }
        }
        created += 1;
    }

    created
}
