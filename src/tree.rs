//! Tree builder and renderer.

use crate::color::{Color, RenderContext};
use crate::style::Style;

/// Branch glyph pair for a tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeEnumerator {
    /// `├──` with a square `└──` closer.
    #[default]
    Default,
    /// `├──` with a rounded `╰──` closer.
    Rounded,
}

impl TreeEnumerator {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Default),
            1 => Some(Self::Rounded),
            _ => None,
        }
    }

    fn branch(self, last: bool) -> &'static str {
        match (self, last) {
            (_, false) => "├── ",
            (Self::Default, true) => "└── ",
            (Self::Rounded, true) => "╰── ",
        }
    }
}

/// Continuation glyphs drawn under a branch for its descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeIndenter {
    /// `│   ` while the ancestor has further siblings, spaces after.
    #[default]
    Default,
    /// Four spaces regardless of structure.
    Spaces,
}

impl TreeIndenter {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Default),
            1 => Some(Self::Spaces),
            _ => None,
        }
    }

    fn indent(self, ancestor_last: bool) -> &'static str {
        match (self, ancestor_last) {
            (Self::Default, false) => "│   ",
            (Self::Default, true) => "    ",
            (Self::Spaces, _) => "    ",
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(String),
    Branch(Tree),
}

/// An immutable tree of labeled nodes.
///
/// Attaching a subtree copies it by value; the child handle on the
/// boundary side stays live and independent afterward.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    root: String,
    children: Vec<Node>,
    enumerator: TreeEnumerator,
    indenter: TreeIndenter,
    item_style: Option<Color>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, label: impl Into<String>) -> Self {
        self.root = label.into();
        self
    }

    pub fn child_value(mut self, value: impl Into<String>) -> Self {
        self.children.push(Node::Leaf(value.into()));
        self
    }

    pub fn child_tree(mut self, child: Tree) -> Self {
        self.children.push(Node::Branch(child));
        self
    }

    pub fn enumerator(mut self, e: TreeEnumerator) -> Self {
        self.enumerator = e;
        self
    }

    pub fn indenter(mut self, i: TreeIndenter) -> Self {
        self.indenter = i;
        self
    }

    /// Foreground color applied to every node label.
    pub fn item_style(mut self, color: Color) -> Self {
        self.item_style = Some(color);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.children.is_empty()
    }

    /// Render the tree with branch and continuation glyphs.
    pub fn render(&self, ctx: RenderContext) -> String {
        let style = self
            .item_style
            .clone()
            .map(|c| Style::new().foreground(c));
        let label = |text: &str| match &style {
            Some(s) if !text.is_empty() => s.render(ctx, text),
            _ => text.to_string(),
        };

        let mut out = String::new();
        if !self.root.is_empty() {
            out.push_str(&label(&self.root));
        }
        self.render_children(&mut out, "", &label);
        out
    }

    fn render_children(&self, out: &mut String, prefix: &str, label: &dyn Fn(&str) -> String) {
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == count;
            let branch = self.enumerator.branch(last);
            match child {
                Node::Leaf(value) => {
                    push_line(out, &format!("{prefix}{branch}{}", label(value)));
                }
                Node::Branch(subtree) => {
                    push_line(out, &format!("{prefix}{branch}{}", label(&subtree.root)));
                    let indent = format!("{prefix}{}", self.indenter.indent(last));
                    subtree.render_children(out, &indent, label);
                }
            }
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Profile;

    fn ascii() -> RenderContext {
        RenderContext::default()
    }

    #[test]
    fn flat_tree() {
        let t = Tree::new().root("root").child_value("a").child_value("b");
        assert_eq!(t.render(ascii()), "root\n├── a\n└── b");
    }

    #[test]
    fn nested_tree_indents_with_guides() {
        let sub = Tree::new().root("sub").child_value("leaf");
        let t = Tree::new()
            .root("root")
            .child_tree(sub)
            .child_value("tail");
        assert_eq!(
            t.render(ascii()),
            "root\n\
             ├── sub\n\
             │   └── leaf\n\
             └── tail"
        );
    }

    #[test]
    fn last_subtree_indents_with_spaces() {
        let sub = Tree::new().root("sub").child_value("leaf");
        let t = Tree::new().root("root").child_tree(sub);
        assert_eq!(t.render(ascii()), "root\n└── sub\n    └── leaf");
    }

    #[test]
    fn rounded_enumerator_changes_closer() {
        let t = Tree::new()
            .root("r")
            .child_value("a")
            .child_value("b")
            .enumerator(TreeEnumerator::Rounded);
        assert_eq!(t.render(ascii()), "r\n├── a\n╰── b");
    }

    #[test]
    fn spaces_indenter_drops_guides() {
        let sub = Tree::new().root("sub").child_value("leaf");
        let t = Tree::new()
            .root("root")
            .child_tree(sub)
            .child_value("tail")
            .indenter(TreeIndenter::Spaces);
        assert_eq!(
            t.render(ascii()),
            "root\n├── sub\n    └── leaf\n└── tail"
        );
    }

    #[test]
    fn attached_subtree_is_a_copy() {
        let child = Tree::new().root("child");
        let parent = Tree::new().root("p").child_tree(child.clone());
        // Growing the original child later does not affect the parent
        let _grown = child.child_value("new");
        assert_eq!(parent.render(ascii()), "p\n└── child");
    }

    #[test]
    fn item_style_colors_labels() {
        let ctx = RenderContext {
            profile: Profile::TrueColor,
            dark_background: false,
        };
        let t = Tree::new()
            .root("r")
            .child_value("a")
            .item_style(Color::Plain("#ff0000".into()));
        assert_eq!(
            t.render(ctx),
            "\x1b[38;2;255;0;0mr\x1b[0m\n├── \x1b[38;2;255;0;0ma\x1b[0m"
        );
    }

    #[test]
    fn empty_tree_is_empty() {
        assert!(Tree::new().is_empty());
        assert_eq!(Tree::new().render(ascii()), "");
    }
}
