use crate::grammar::{Grammar, Symbol};

/// A concrete syntax tree
#[derive(Debug, Default, PartialEq)]
pub struct Tree {
    pub root: Option<Node>,
}

/// A node in a concrete syntax tree. Terminal nodes are always leaves;
/// non-terminal nodes own their children, which may be empty if the node was
/// produced by an ϵ-production.
#[derive(Debug)]
pub struct Node {
    pub symbol: Symbol,
    children: Vec<Node>,
}

/// An item on the work list of an iterative tree traversal
enum Step<'a> {
    Open(&'a Node, usize),
    Close(usize),
}

impl Node {
    /// Creates a new node with the given children
    pub fn new(symbol: Symbol, children: Vec<Node>) -> Node {
        Node { symbol, children }
    }

    /// Creates a new node with no children
    pub fn leaf(symbol: Symbol) -> Node {
        Node {
            symbol,
            children: Vec::new(),
        }
    }

    /// Returns the node's children, in left-to-right order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl PartialEq for Node {
    /// Tests two subtrees for equality of labels, shape and child order
    fn eq(&self, other: &Node) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.symbol != b.symbol || a.children.len() != b.children.len() {
                return false;
            }
            pending.extend(a.children.iter().zip(b.children.iter()));
        }

        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    // Children are moved onto a work list so that dropping a deep tree does
    // not recurse once per level
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Tree {
    /// Creates a new tree with the given root
    pub fn new(root: Node) -> Tree {
        Tree { root: Some(root) }
    }

    /// Returns the terminal symbols at the leaves of the tree, in
    /// left-to-right order. For a successfully parsed input, this is exactly
    /// the sequence of input tokens.
    pub fn frontier(&self) -> Vec<Symbol> {
        let mut output = Vec::new();
        let mut pending: Vec<&Node> = self.root.iter().collect();

        while let Some(node) = pending.pop() {
            if node.symbol.is_terminal() {
                output.push(node.symbol);
            }
            pending.extend(node.children.iter().rev());
        }

        output
    }

    /// Returns the canonical multi-line representation of the tree. A node
    /// with children is written as its name followed by an opening brace,
    /// its children indented by one more space, and a closing brace on its
    /// own line. A node without children is written as its bare name. Lines
    /// are separated by newlines, with no trailing newline.
    pub fn render(&self, g: &Grammar) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut pending: Vec<Step> = Vec::new();

        if let Some(root) = &self.root {
            pending.push(Step::Open(root, 0));
        }

        while let Some(step) = pending.pop() {
            match step {
                Step::Open(node, indent) => {
                    let name = g.symbol_name(node.symbol);
                    if node.is_leaf() {
                        lines.push(format!("{:indent$}{}", "", name));
                        continue;
                    }

                    lines.push(format!("{:indent$}{} {{", "", name));
                    pending.push(Step::Close(indent));
                    for child in node.children.iter().rev() {
                        pending.push(Step::Open(child, indent + 1));
                    }
                }
                Step::Close(indent) => {
                    lines.push(format!("{:indent$}}}", ""));
                }
            }
        }

        lines.join("\n")
    }

    /// Returns a simple, one-line string representation of the tree. Empty
    /// non-terminals are shown with a single ϵ child.
    pub fn visualize(&self, g: &Grammar) -> String {
        let mut output = String::new();
        let mut pending: Vec<Step> = Vec::new();

        if let Some(root) = &self.root {
            pending.push(Step::Open(root, 0));
        }

        while let Some(step) = pending.pop() {
            match step {
                Step::Open(node, position) => {
                    if position > 0 {
                        output.push(' ');
                    }

                    let name = g.symbol_name(node.symbol);
                    if node.symbol.is_terminal() {
                        output.push_str(name);
                    } else if node.is_leaf() {
                        output.push_str(&format!("{}→[ϵ]", name));
                    } else {
                        output.push_str(&format!("{}→[", name));
                        pending.push(Step::Close(0));
                        for (i, child) in node.children.iter().enumerate().rev() {
                            pending.push(Step::Open(child, i));
                        }
                    }
                }
                Step::Close(_) => {
                    output.push(']');
                }
            }
        }

        output
    }
}
