//! A resumable A* search over any hashable node type. Unlike a priority-queue based A*, the open
//! frontier is an insertion-ordered [FrontierSet] that is scanned for the minimal fScore, which
//! makes the node selection (including ties) reproducible and lets callers look at the open and
//! closed frontiers between steps.
use crate::config::TieBreak;
use crate::frontier::FrontierSet;
use fxhash::FxHashMap;
use itertools::Itertools;
use log::trace;
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::Hash;

/// Result of a single [AstarSearch::step].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStep<N> {
    /// The node was moved to the closed set and its successors were relaxed.
    Expanded(N),
    /// The goal was selected; holds the path from start to goal inclusive.
    Found(Vec<N>),
    /// The open set is empty and the goal was never selected.
    Exhausted,
}

#[derive(Clone, Debug)]
pub struct AstarSearch<N: Eq + Hash, C> {
    open: FrontierSet<N>,
    closed: FrontierSet<N>,
    g_score: FxHashMap<N, C>,
    f_score: FxHashMap<N, C>,
    came_from: FxHashMap<N, N>,
    tie_break: TieBreak,
    iterations: usize,
}

impl<N, C> AstarSearch<N, C>
where
    N: Eq + Hash + Clone + Ord,
    C: Float,
{
    /// Starts a search with only `start` in the open set, at cost zero and with fScore equal to
    /// the `estimate` of its distance to the goal.
    pub fn new(start: N, estimate: C, tie_break: TieBreak) -> AstarSearch<N, C> {
        let mut open = FrontierSet::new();
        open.add(start.clone());
        let mut g_score = FxHashMap::default();
        let mut f_score = FxHashMap::default();
        g_score.insert(start.clone(), C::zero());
        f_score.insert(start, estimate);
        AstarSearch {
            open,
            closed: FrontierSet::new(),
            g_score,
            f_score,
            came_from: FxHashMap::default(),
            tie_break,
            iterations: 0,
        }
    }

    pub fn open(&self) -> &FrontierSet<N> {
        &self.open
    }

    pub fn closed(&self) -> &FrontierSet<N> {
        &self.closed
    }

    /// Number of steps taken so far, including the one that found the goal.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Best known cost from the start to `node`, or infinity if it has not been reached.
    pub fn g_score(&self, node: &N) -> C {
        Self::score(&self.g_score, node)
    }

    pub fn f_score(&self, node: &N) -> C {
        Self::score(&self.f_score, node)
    }

    fn score(scores: &FxHashMap<N, C>, node: &N) -> C {
        scores.get(node).copied().unwrap_or_else(C::infinity)
    }

    /// The open node with minimal fScore. On ties, [TieBreak::InsertionOrder] keeps the first one
    /// encountered while [TieBreak::LowestNode] keeps the smallest.
    fn select_current(&self) -> Option<N> {
        let by_f = |a: &&N, b: &&N| {
            self.f_score(a)
                .partial_cmp(&self.f_score(b))
                .unwrap_or(Ordering::Equal)
        };
        let index = match self.tie_break {
            TieBreak::InsertionOrder => self.open.elements().position_min_by(by_f),
            TieBreak::LowestNode => self
                .open
                .elements()
                .position_min_by(|a, b| by_f(a, b).then_with(|| a.cmp(b))),
        }?;
        self.open.get_index(index).cloned()
    }

    /// Walks the predecessor map back from `goal` and returns the path from start to goal.
    fn reconstruct_path(&self, goal: N) -> Vec<N> {
        let mut path: Vec<N> =
            std::iter::successors(Some(goal), |node| self.came_from.get(node).cloned()).collect();
        path.reverse();
        path
    }

    /// Performs one iteration: selects the open node with minimal fScore, returns the path if it
    /// satisfies `success`, and otherwise closes it and relaxes the edges to its `successors`.
    /// Successors already in the closed set are skipped; the others join the open set.
    pub fn step<FN, IN, FH, FS>(
        &mut self,
        mut successors: FN,
        mut heuristic: FH,
        mut success: FS,
    ) -> SearchStep<N>
    where
        FN: FnMut(&N) -> IN,
        IN: IntoIterator<Item = (N, C)>,
        FH: FnMut(&N) -> C,
        FS: FnMut(&N) -> bool,
    {
        let current = match self.select_current() {
            Some(current) => current,
            None => return SearchStep::Exhausted,
        };
        self.iterations += 1;
        if success(&current) {
            return SearchStep::Found(self.reconstruct_path(current));
        }
        self.open.remove(&current);
        self.closed.add(current.clone());
        let current_g = self.g_score(&current);
        trace!("Iteration {}: expanding node at cost {:?}", self.iterations, current_g.to_f64());

        for (neighbour, move_cost) in successors(&current) {
            if self.closed.contains(&neighbour) {
                continue;
            }
            self.open.add(neighbour.clone());
            let tentative_g = current_g + move_cost;
            if tentative_g >= self.g_score(&neighbour) {
                continue;
            }
            let f = tentative_g + heuristic(&neighbour);
            self.came_from.insert(neighbour.clone(), current.clone());
            self.g_score.insert(neighbour.clone(), tentative_g);
            self.f_score.insert(neighbour, f);
        }
        SearchStep::Expanded(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    type Graph = HashMap<char, Vec<(char, f64)>>;

    fn run(graph: &Graph, start: char, goal: char, tie_break: TieBreak) -> Option<Vec<char>> {
        let mut search = AstarSearch::new(start, 0.0, tie_break);
        loop {
            match search.step(
                |n| graph.get(n).cloned().unwrap_or_default(),
                |_| 0.0,
                |n| *n == goal,
            ) {
                SearchStep::Expanded(_) => {}
                SearchStep::Found(path) => return Some(path),
                SearchStep::Exhausted => return None,
            }
        }
    }

    /// The cheaper route through C is preferred over the shorter-looking one through B.
    #[test]
    fn finds_cheapest_path() {
        let graph: Graph = HashMap::from([
            ('A', vec![('B', 1.0), ('C', 3.0)]),
            ('B', vec![('D', 5.0)]),
            ('C', vec![('D', 1.0)]),
        ]);
        assert_eq!(
            run(&graph, 'A', 'D', TieBreak::InsertionOrder),
            Some(vec!['A', 'C', 'D'])
        );
    }

    #[test]
    fn unreachable_goal_exhausts() {
        let graph: Graph = HashMap::from([('A', vec![('B', 1.0)]), ('B', vec![('A', 1.0)])]);
        assert_eq!(run(&graph, 'A', 'Z', TieBreak::InsertionOrder), None);
    }

    /// With equal scores the insertion order picks Z (discovered first), the node order picks Y.
    #[test]
    fn tie_break_policies() {
        let graph: Graph = HashMap::from([
            ('A', vec![('Z', 1.0), ('Y', 1.0)]),
            ('Z', vec![('G', 1.0)]),
            ('Y', vec![('G', 1.0)]),
        ]);
        assert_eq!(
            run(&graph, 'A', 'G', TieBreak::InsertionOrder),
            Some(vec!['A', 'Z', 'G'])
        );
        assert_eq!(
            run(&graph, 'A', 'G', TieBreak::LowestNode),
            Some(vec!['A', 'Y', 'G'])
        );
    }

    #[test]
    fn frontiers_move_between_steps() {
        let graph: Graph = HashMap::from([('A', vec![('B', 1.0), ('C', 1.0)])]);
        let mut search: AstarSearch<char, f64> = AstarSearch::new('A', 0.0, TieBreak::default());
        assert_eq!(search.open().to_vec(), vec!['A']);
        let step = search.step(|n| graph.get(n).cloned().unwrap_or_default(), |_| 0.0, |_| false);
        assert_eq!(step, SearchStep::Expanded('A'));
        assert_eq!(search.open().to_vec(), vec!['B', 'C']);
        assert_eq!(search.closed().to_vec(), vec!['A']);
        assert_eq!(search.g_score(&'B'), 1.0);
        assert!(search.g_score(&'Q').is_infinite());
        assert_eq!(search.iterations(), 1);
    }
}
