//! # Tree Rendering Primitives
//!
//! Shared by every node variant. The output format is fixed:
//! * `+-` marks a sibling that is followed by another sibling.
//! * `\-` marks the last sibling of its level.
//! * Children indent by two columns, keeping a `|` rail while the parent
//!   still has siblings below it.

use std::fmt;

/// Branch glyph for a node that has siblings after it.
pub const BRANCH: &str = "+-";
/// Branch glyph for the last sibling of a level.
pub const BRANCH_LAST: &str = "\\-";

/// Capability set of every inventory tree element.
///
/// Rendering emits one line for the node itself (prefixed by `prefix` and
/// the branch glyph selected by `is_last`) and then recurses into children.
/// Deep copying is the `Clone` supertrait; all node data is owned, so a
/// clone shares nothing with the original.
pub trait Node: Clone {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result;
}

/// Selects the branch glyph for a sibling position.
pub(crate) fn branch(is_last: bool) -> &'static str {
    if is_last { BRANCH_LAST } else { BRANCH }
}

/// Extends `prefix` for the children of a node.
///
/// The last sibling closes its rail (two spaces); any other sibling keeps
/// the `| ` continuation so lines below still connect to the parent level.
pub(crate) fn child_prefix(prefix: &str, is_last: bool) -> String {
    let mut next: String = String::with_capacity(prefix.len() + 2);
    next.push_str(prefix);
    next.push_str(if is_last { "  " } else { "| " });
    next
}
