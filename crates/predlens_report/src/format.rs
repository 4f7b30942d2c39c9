//! Indented text rendering of explanation trees.
//!
//! Rendering is depth-first pre-order: one line per node, indented
//! proportionally to its depth, showing the node's description followed by
//! its result. Error nodes are rendered distinctly from false ones so a
//! reader can tell "predicate says no" apart from "couldn't be evaluated".

use std::fmt::Write;

use predlens_engine::ExplanationNode;

/// Formats explanation trees as indented text.
#[derive(Clone, Debug)]
pub struct ExplainFormatter {
    /// Number of spaces per indentation level.
    pub indent_width: usize,
}

impl Default for ExplainFormatter {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl ExplainFormatter {
    /// Creates a formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the indent width.
    #[must_use]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Renders a tree to indented text, one node per line.
    ///
    /// Describe-only nodes (no outcome) render as bare descriptions.
    #[must_use]
    pub fn render(&self, node: &ExplanationNode) -> String {
        self.render_at(node, 0)
    }

    /// Renders a tree starting at the given indentation level.
    ///
    /// Used when nesting a tree under a per-object header line.
    #[must_use]
    pub fn render_at(&self, node: &ExplanationNode, depth: usize) -> String {
        let mut out = String::new();
        self.render_into(&mut out, node, depth);
        out
    }

    fn render_into(&self, out: &mut String, node: &ExplanationNode, depth: usize) {
        let indent = depth * self.indent_width;
        let _ = write!(out, "{:indent$}{}", "", node.description);
        if let Some(outcome) = &node.outcome {
            let _ = write!(out, " => {outcome}");
        }
        out.push('\n');
        for child in &node.children {
            self.render_into(out, child, depth + 1);
        }
    }
}
