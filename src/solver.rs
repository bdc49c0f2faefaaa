use crate::node::SearchNode;
use crate::state::{Parity, PuzzleState};
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// Outcome of a search run.
#[derive(Debug)]
pub enum SolveResult {
    /// Shortest path from the root's state to the goal; the first node is the
    /// root itself and each consecutive pair differs by one legal move.
    Solved(Vec<Rc<SearchNode>>),
    /// The root's arrangement is provably unreachable from the goal. This is
    /// a definitive result from the parity pre-check, not a search failure.
    Unsolvable,
}

pub struct Solver {
    nodes_explored: usize,
}

impl Solver {
    pub fn new() -> Self {
        Solver { nodes_explored: 0 }
    }

    /// Solve the puzzle rooted at `root` using breadth-first search.
    ///
    /// A solvability pre-check runs first: a 3x3 arrangement is reachable
    /// from the goal iff its inversion parity is even, so odd parity returns
    /// [`SolveResult::Unsolvable`] without expanding a single node. With the
    /// pre-check passed a solution must exist among the 9!/2 = 181,440
    /// reachable states, and FIFO expansion guarantees the first goal
    /// dequeued is reached via a shortest move sequence.
    pub fn solve(&mut self, root: Rc<SearchNode>) -> SolveResult {
        if root.state().inversion_parity() == Parity::Odd {
            return SolveResult::Unsolvable;
        }

        let mut frontier: VecDeque<Rc<SearchNode>> = VecDeque::new();
        let mut visited: HashSet<PuzzleState> = HashSet::new();
        visited.insert(*root.state());
        frontier.push_back(root);

        while let Some(node) = frontier.pop_front() {
            self.nodes_explored += 1;

            if node.state().is_goal() {
                return SolveResult::Solved(SearchNode::reconstruct_path(&node));
            }

            for (tile, next) in node.state().successors() {
                if visited.insert(next) {
                    frontier.push_back(SearchNode::child(&node, next, tile));
                }
            }
        }

        // Even parity guarantees the goal is reachable, so running out of
        // frontier means move generation or the parity formula is broken.
        panic!("frontier exhausted despite even inversion parity");
    }

    /// Number of nodes dequeued and expanded so far.
    pub fn nodes_explored(&self) -> usize {
        self.nodes_explored
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GOAL;
    use std::collections::HashMap;

    fn solve_sequence(seq: &str) -> (SolveResult, usize) {
        let state = PuzzleState::from_sequence(seq).unwrap();
        let mut solver = Solver::new();
        let result = solver.solve(SearchNode::root(state));
        (result, solver.nodes_explored())
    }

    fn path_of(result: SolveResult) -> Vec<Rc<SearchNode>> {
        match result {
            SolveResult::Solved(path) => path,
            SolveResult::Unsolvable => panic!("expected a solution"),
        }
    }

    #[test]
    fn test_solve_already_solved() {
        let (result, _) = solve_sequence("123456780");
        let path = path_of(result);
        assert_eq!(path.len(), 1);
        assert!(path[0].state().is_goal());
    }

    #[test]
    fn test_solve_one_move() {
        let (result, _) = solve_sequence("123456708");
        let path = path_of(result);
        assert_eq!(path.len() - 1, 1);
        assert!(path.last().unwrap().state().is_goal());
    }

    #[test]
    fn test_solve_two_moves() {
        // Blank in the center; solvable in exactly two moves
        let (result, _) = solve_sequence("123406758");
        let path = path_of(result);
        assert_eq!(path.len() - 1, 2);
        assert_eq!(path[0].state().serialize(), "123406758");
        assert!(path.last().unwrap().state().is_goal());

        // Each consecutive pair differs by the recorded legal move
        for pair in path.windows(2) {
            let moved = pair[1].moved().unwrap();
            assert_eq!(pair[0].state().apply_move(moved).unwrap(), *pair[1].state());
        }
    }

    #[test]
    fn test_unsolvable_without_expansion() {
        // A single adjacent-pair swap from the goal flips parity
        let (result, explored) = solve_sequence("123456870");
        assert!(matches!(result, SolveResult::Unsolvable));
        assert_eq!(explored, 0);
    }

    #[test]
    fn test_solve_hard_instance() {
        // A deep scramble still solves; path replays to the goal
        let (result, explored) = solve_sequence("867254301");
        let path = path_of(result);
        assert!(explored > 0);

        let mut state = *path[0].state();
        for node in &path[1..] {
            state = state.apply_move(node.moved().unwrap()).unwrap();
        }
        assert!(state.is_goal());
    }

    #[test]
    fn test_bfs_paths_are_minimal() {
        // Independent brute-force distance map for everything within six
        // moves of the goal, then check the solver matches it exactly.
        let goal = PuzzleState::from_cells(GOAL).unwrap();
        let mut distances: HashMap<PuzzleState, usize> = HashMap::new();
        let mut queue = VecDeque::new();
        distances.insert(goal, 0);
        queue.push_back(goal);

        while let Some(state) = queue.pop_front() {
            let dist = distances[&state];
            if dist == 6 {
                continue;
            }
            for (_, next) in state.successors() {
                if !distances.contains_key(&next) {
                    distances.insert(next, dist + 1);
                    queue.push_back(next);
                }
            }
        }

        for (state, dist) in &distances {
            let mut solver = Solver::new();
            let path = path_of(solver.solve(SearchNode::root(*state)));
            assert_eq!(
                path.len() - 1,
                *dist,
                "wrong length for {}",
                state.serialize()
            );
        }
    }
}
