use super::parsetree::Node;

/// A stack for an LR parser automaton
pub struct Stack {
    elements: Vec<StackEntry>,
}

/// An entry on the stack. Every entry except the bottom one holds the tree
/// node built for the symbol that led to its state.
struct StackEntry {
    state: usize,
    node: Option<Node>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Creates a new stack, prepopulated with an entry for the start state.
    /// That entry carries no node and is never popped.
    pub fn new() -> Stack {
        Stack {
            elements: vec![StackEntry {
                state: 0,
                node: None,
            }],
        }
    }

    /// Returns the number of entries on the stack, including the start state
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if only the start state is on the stack
    pub fn is_empty(&self) -> bool {
        self.elements.len() == 1
    }

    /// Returns the state associated with the entry at the top of the stack
    pub fn peek_state(&self) -> usize {
        self.elements.last().map_or(0, |e| e.state)
    }

    /// Returns the states on the stack, from bottom to top
    pub fn states(&self) -> Vec<usize> {
        self.elements.iter().map(|e| e.state).collect()
    }

    /// Pops the top n entries and returns their nodes in bottom-to-top order,
    /// which is the left-to-right order of the symbols they were built for.
    /// Panics if an attempt is made to pop the start state.
    pub fn pop(&mut self, n: usize) -> Vec<Node> {
        if n >= self.elements.len() {
            panic!(
                "cannot pop {} entries from a stack of {}",
                n,
                self.elements.len() - 1
            );
        }

        self.elements
            .split_off(self.elements.len() - n)
            .into_iter()
            .map(|e| e.node.expect("stack entry without a node"))
            .collect()
    }

    /// Pushes a state and the node built for it onto the stack
    pub fn push(&mut self, state: usize, node: Node) {
        self.elements.push(StackEntry {
            state,
            node: Some(node),
        });
    }

    /// Removes and returns the node held by the entry at the given depth,
    /// counting the start state as depth zero
    pub fn take(&mut self, depth: usize) -> Option<Node> {
        self.elements.get_mut(depth).and_then(|e| e.node.take())
    }
}
