//! Generic depth-first tree printing for arbitrary object graphs.
//!
//! This is the piece that is not predicate-specific: given any root and a
//! visitor that can describe a node and enumerate its children, it renders
//! the whole graph as indented text. The explanation formatter is a
//! specialization of the same traversal; this one exists for callers who
//! want the same rendering over their own structures.

use std::fmt::Write;

/// Renders a tree as indented text via a caller-supplied visitor.
///
/// The visitor returns the node's one-line description and, optionally, its
/// children. Returning `None` for children terminates that branch; so does
/// an empty vector. Traversal is depth-first pre-order with two-space
/// indentation per level.
pub fn tree_description<N, F>(root: N, mut visit: F) -> String
where
    F: FnMut(&N) -> (String, Option<Vec<N>>),
{
    let mut out = String::new();
    describe_into(&mut out, root, 0, &mut visit);
    out
}

fn describe_into<N, F>(out: &mut String, node: N, depth: usize, visit: &mut F)
where
    F: FnMut(&N) -> (String, Option<Vec<N>>),
{
    let (description, children) = visit(&node);
    let indent = depth * 2;
    let _ = writeln!(out, "{:indent$}{}", "", description);
    if let Some(children) = children {
        for child in children {
            describe_into(out, child, depth + 1, visit);
        }
    }
}
