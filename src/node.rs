use crate::state::PuzzleState;
use std::rc::Rc;

/// One node in the search tree: a state plus a link to the node it was
/// expanded from.
///
/// Nodes are created once and never re-parented, so the parent chain is
/// acyclic by construction and walking it always terminates at the root.
/// `Rc` lets the frontier and any reconstructed path share ancestry without
/// cloning states up the chain.
#[derive(Debug)]
pub struct SearchNode {
    state: PuzzleState,
    parent: Option<Rc<SearchNode>>,
    // Tile that slid to produce this state, for diagnostics
    moved: Option<u8>,
}

impl SearchNode {
    /// The starting node of a search, with no parent.
    pub fn root(state: PuzzleState) -> Rc<SearchNode> {
        Rc::new(SearchNode {
            state,
            parent: None,
            moved: None,
        })
    }

    /// A node produced by sliding `moved` from `parent`'s state.
    pub fn child(parent: &Rc<SearchNode>, state: PuzzleState, moved: u8) -> Rc<SearchNode> {
        Rc::new(SearchNode {
            state,
            parent: Some(Rc::clone(parent)),
            moved: Some(moved),
        })
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// The tile that was moved to reach this node (None for the root).
    pub fn moved(&self) -> Option<u8> {
        self.moved
    }

    /// Walk parent links from `node` back to the root and return the chain in
    /// start-to-goal order. Read-only, so calling it repeatedly on the same
    /// node yields the same sequence.
    pub fn reconstruct_path(node: &Rc<SearchNode>) -> Vec<Rc<SearchNode>> {
        let mut path = Vec::new();
        let mut current = Some(node);
        while let Some(n) = current {
            path.push(Rc::clone(n));
            current = n.parent.as_ref();
        }
        path.reverse();
        path
    }
}
