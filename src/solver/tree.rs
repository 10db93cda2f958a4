//! Exhaustive decision-tree search
//!
//! Finds the strategy that minimizes the total number of guesses needed to
//! solve every answer in a pool, given a forced first guess. Sub-pools recur
//! across branches, so solutions are memoized per search by the sorted pool.

use super::entropy;
use super::scorer::Scorer;
use crate::core::{Pattern, WordId};
use crate::error::SolverError;
use dashmap::DashMap;
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;
use std::collections::BTreeMap;

/// Which words may be guessed below the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessScope {
    /// Only the sub-pool's own members
    #[default]
    Pool,
    /// Any word in the dictionary
    Universe,
}

/// Tree search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeSearchConfig {
    pub scope: GuessScope,
    /// Caps the guesses tried per sub-pool, shrinking by 3 per level
    pub candidate_limit: Option<usize>,
}

/// Index of a node in a [`DecisionTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Outcome of one pattern below a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// The guess was the answer
    Solved,
    /// Keep guessing from this node
    Next(NodeId),
}

/// A guess and where each of its patterns leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionNode {
    pub guess: WordId,
    /// Candidates still possible when this guess is played
    pub pool_size: usize,
    /// Children in pattern order
    pub children: Vec<(Pattern, Branch)>,
}

/// Arena of decision nodes; the root is the first node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    nodes: Vec<DecisionNode>,
}

impl DecisionTree {
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &DecisionNode {
        &self.nodes[id.0]
    }

    /// Number of guess nodes in the tree
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every root-to-answer path as `(guess, pattern)` steps
    ///
    /// Each path ends with the perfect pattern. Paths are ordered by their
    /// pattern sequence.
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<(WordId, Pattern)>> {
        let mut paths = Vec::new();
        let mut stack = vec![(self.root(), Vec::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = self.node(id);
            for &(pattern, branch) in &node.children {
                let mut path: Vec<(WordId, Pattern)> = prefix.clone();
                path.push((node.guess, pattern));
                match branch {
                    Branch::Solved => paths.push(path),
                    Branch::Next(next) => stack.push((next, path)),
                }
            }
        }

        paths.sort_by(|a, b| a.iter().map(|step| step.1).cmp(b.iter().map(|step| step.1)));
        paths
    }

    /// Number of answers the tree solves
    #[must_use]
    pub fn answers(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|node| &node.children)
            .filter(|(_, branch)| *branch == Branch::Solved)
            .count()
    }

    /// Answers solved per number of guesses
    #[must_use]
    pub fn histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        let mut stack = vec![(self.root(), 1)];
        while let Some((id, depth)) = stack.pop() {
            for &(_, branch) in &self.node(id).children {
                match branch {
                    Branch::Solved => *histogram.entry(depth).or_insert(0) += 1,
                    Branch::Next(next) => stack.push((next, depth + 1)),
                }
            }
        }
        histogram
    }

    /// Sum over all answers of the guesses needed to solve them
    #[must_use]
    pub fn total_guesses(&self) -> usize {
        self.histogram()
            .iter()
            .map(|(guesses, answers)| guesses * answers)
            .sum()
    }

    /// Most guesses needed for any answer
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.histogram().keys().next_back().copied().unwrap_or(0)
    }
}

/// Best guess for a sub-pool and the total guesses it leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Solution {
    cost: usize,
    guess: WordId,
}

/// Memoized search context
///
/// The memo lives as long as the search, so one `TreeSearch` can build
/// several trees over the same dictionary and reuse sub-pool solutions.
#[derive(Debug)]
pub struct TreeSearch<'a> {
    scorer: &'a Scorer,
    config: TreeSearchConfig,
    universe: Vec<WordId>,
    memo: DashMap<(usize, Vec<WordId>), Solution, FxBuildHasher>,
}

/// Fewest total guesses any strategy could need for `size` candidates
const fn lower_bound(size: usize, guess_in_pool: bool) -> usize {
    if guess_in_pool { 2 * size - 1 } else { 2 * size }
}

impl<'a> TreeSearch<'a> {
    #[must_use]
    pub fn new(scorer: &'a Scorer, config: TreeSearchConfig) -> Self {
        Self {
            scorer,
            config,
            universe: scorer.dictionary().all_ids(),
            memo: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Restrict the words tried under [`GuessScope::Universe`]
    #[must_use]
    pub fn with_universe(mut self, universe: Vec<WordId>) -> Self {
        self.universe = universe;
        self
    }

    /// Number of memoized sub-pools
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }

    /// Worst-case bucket size of `guess` against `pool`
    #[must_use]
    pub fn minimax_worst(&self, guess: WordId, pool: &[WordId]) -> usize {
        self.scorer.histogram(guess, pool).largest()
    }

    /// Build the decision tree with the fewest total guesses, opening with
    /// `seed`
    ///
    /// # Errors
    /// Returns `SolverError::EmptyPool` if `pool` is empty.
    pub fn optimal_tree(&self, seed: WordId, pool: &[WordId]) -> Result<DecisionTree, SolverError> {
        let mut pool = pool.to_vec();
        pool.sort_unstable();
        pool.dedup();
        if pool.is_empty() {
            return Err(SolverError::EmptyPool);
        }

        // Sibling buckets are independent apart from the shared memo
        let buckets: Vec<Vec<WordId>> = self
            .scorer
            .partition(seed, &pool)
            .into_iter()
            .filter(|(pattern, _)| !pattern.is_perfect())
            .map(|(_, bucket)| bucket)
            .collect();
        buckets.par_iter().for_each(|bucket| {
            self.solve(bucket, 1);
        });

        let mut nodes = Vec::new();
        self.build(&mut nodes, seed, &pool, 0);
        let tree = DecisionTree { nodes };

        log::info!(
            "tree for {}: {} answers, {} guesses, max depth {}, {} memoized pools",
            self.scorer.dictionary().word(seed),
            tree.answers(),
            tree.total_guesses(),
            tree.max_depth(),
            self.memo_len()
        );
        Ok(tree)
    }

    fn build(
        &self,
        nodes: &mut Vec<DecisionNode>,
        guess: WordId,
        pool: &[WordId],
        depth: usize,
    ) -> NodeId {
        let id = NodeId(nodes.len());
        nodes.push(DecisionNode {
            guess,
            pool_size: pool.len(),
            children: Vec::new(),
        });

        let mut children = Vec::new();
        for (pattern, bucket) in self.scorer.partition(guess, pool) {
            let branch = if pattern.is_perfect() {
                Branch::Solved
            } else {
                let next = self.solve(&bucket, depth + 1);
                Branch::Next(self.build(nodes, next.guess, &bucket, depth + 1))
            };
            children.push((pattern, branch));
        }
        nodes[id.0].children = children;
        id
    }

    fn memo_key(&self, pool: &[WordId], depth: usize) -> (usize, Vec<WordId>) {
        // The candidate cap depends on depth, so the same pool may solve
        // differently at different levels
        let level = if self.config.candidate_limit.is_some() { depth } else { 0 };
        (level, pool.to_vec())
    }

    /// Guesses worth trying for `pool`, most informative first
    fn candidates(&self, pool: &[WordId], depth: usize) -> Vec<WordId> {
        let universe = match self.config.scope {
            GuessScope::Pool => pool,
            GuessScope::Universe => &self.universe,
        };
        let mut candidates: Vec<WordId> = entropy::rank_guesses(self.scorer, pool, universe)
            .into_iter()
            .map(|guess| guess.word)
            .collect();

        if let Some(limit) = self.config.candidate_limit {
            let limit = limit.saturating_sub(3 * depth.saturating_sub(1)).max(1);
            candidates.truncate(limit);
            if !candidates.contains(&pool[0]) {
                candidates.push(pool[0]);
            }
        }
        candidates
    }

    /// Optimal solution for a sorted, non-empty sub-pool
    fn solve(&self, pool: &[WordId], depth: usize) -> Solution {
        match pool {
            [only] => {
                return Solution {
                    cost: 1,
                    guess: *only,
                };
            }
            [first, _] => {
                return Solution {
                    cost: 3,
                    guess: *first,
                };
            }
            _ => {}
        }

        let key = self.memo_key(pool, depth);
        // Copy out so no shard lock is held while recursing
        let cached = self.memo.get(&key).map(|entry| *entry);
        if let Some(solution) = cached {
            log::trace!("memo hit: {} candidates at depth {depth}", pool.len());
            return solution;
        }

        let floor = lower_bound(pool.len(), true);
        let mut best: Option<Solution> = None;
        for guess in self.candidates(pool, depth) {
            let bound = best.map_or(usize::MAX, |solution| solution.cost);
            if let Some(cost) = self.cost_of(guess, pool, depth, bound) {
                best = Some(Solution { cost, guess });
                if cost <= floor {
                    break;
                }
            }
        }

        let solution = best.unwrap_or_else(|| Solution {
            cost: self.cost_of(pool[0], pool, depth, usize::MAX).unwrap_or(usize::MAX),
            guess: pool[0],
        });
        self.memo.insert(key, solution);
        solution
    }

    /// Total guesses when `guess` is played on `pool`, or `None` once it
    /// cannot beat `bound`
    fn cost_of(&self, guess: WordId, pool: &[WordId], depth: usize, bound: usize) -> Option<usize> {
        let partition = self.scorer.partition(guess, pool);
        let in_pool = !partition.bucket(self.scorer.perfect()).is_empty();
        if !in_pool && partition.len() == 1 {
            // Learns nothing
            return None;
        }
        if lower_bound(pool.len(), in_pool) >= bound {
            return None;
        }

        let buckets: Vec<Vec<WordId>> = partition
            .into_iter()
            .filter(|(pattern, _)| !pattern.is_perfect())
            .map(|(_, bucket)| bucket)
            .collect();

        // Every answer pays for this guess; each bucket owes at least its bound
        let mut cost = pool.len();
        let mut pending: usize = buckets.iter().map(|b| lower_bound(b.len(), true)).sum();
        for bucket in &buckets {
            if cost + pending >= bound {
                return None;
            }
            pending -= lower_bound(bucket.len(), true);
            cost += self.solve(bucket, depth + 1).cost;
        }
        (cost < bound).then_some(cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::wordlists::{SAMPLE_ANSWERS, SAMPLE_GUESSES};
    use rstest::rstest;
    use rustc_hash::FxHashMap;

    fn setup() -> Scorer {
        let dictionary = Dictionary::from_strs(
            5,
            &["kapow", "vivid"],
            &["skill", "spill", "still", "swill", "funky", "musky", "roomy"],
        )
        .unwrap();
        Scorer::new(dictionary)
    }

    fn ids(scorer: &Scorer, words: &[&str]) -> Vec<WordId> {
        words
            .iter()
            .filter_map(|w| scorer.dictionary().lookup(w))
            .collect()
    }

    fn id(scorer: &Scorer, word: &str) -> WordId {
        scorer.dictionary().lookup(word).unwrap()
    }

    fn sample_scorer() -> Scorer {
        Scorer::new(Dictionary::from_strs(5, SAMPLE_GUESSES, SAMPLE_ANSWERS).unwrap())
    }

    /// Total guesses when `guess` opens on `pool`, trying every member at
    /// every level with no bounds
    fn exhaustive_total(
        scorer: &Scorer,
        guess: WordId,
        pool: &[WordId],
        seen: &mut FxHashMap<Vec<WordId>, usize>,
    ) -> usize {
        pool.len()
            + scorer
                .partition(guess, pool)
                .into_iter()
                .filter(|(pattern, _)| !pattern.is_perfect())
                .map(|(_, bucket)| exhaustive_best(scorer, &bucket, seen))
                .sum::<usize>()
    }

    fn exhaustive_best(
        scorer: &Scorer,
        pool: &[WordId],
        seen: &mut FxHashMap<Vec<WordId>, usize>,
    ) -> usize {
        if pool.len() == 1 {
            return 1;
        }
        if let Some(&total) = seen.get(pool) {
            return total;
        }
        let best = pool
            .iter()
            .map(|&guess| exhaustive_total(scorer, guess, pool, seen))
            .min()
            .unwrap();
        seen.insert(pool.to_vec(), best);
        best
    }

    #[rstest]
    #[case(0, 40)]
    #[case(150, 37)]
    #[case(300, 36)]
    #[case(450, 31)]
    #[case(600, 34)]
    fn pruned_search_matches_exhaustive_search(#[case] start: usize, #[case] total: usize) {
        let scorer = sample_scorer();
        let pool = scorer.dictionary().answers()[start..start + 14].to_vec();
        let seed = pool[0];

        let expected = exhaustive_total(&scorer, seed, &pool, &mut FxHashMap::default());
        assert_eq!(expected, total);

        let search = TreeSearch::new(&scorer, TreeSearchConfig::default());
        let tree = search.optimal_tree(seed, &pool).unwrap();
        assert_eq!(tree.total_guesses(), expected);
        assert_eq!(tree.answers(), pool.len());
    }

    #[test]
    fn concurrent_searches_share_one_memo() {
        let scorer = sample_scorer();
        let pool = scorer.dictionary().answers()[..20].to_vec();
        let seeds = &pool[..4];

        let search = TreeSearch::new(&scorer, TreeSearchConfig::default());
        let trees: Vec<DecisionTree> = seeds
            .par_iter()
            .map(|&seed| search.optimal_tree(seed, &pool).unwrap())
            .collect();
        assert!(search.memo_len() > 0);

        for (tree, &seed) in trees.iter().zip(seeds) {
            let alone = TreeSearch::new(&scorer, TreeSearchConfig::default())
                .optimal_tree(seed, &pool)
                .unwrap();
            assert_eq!(*tree, alone);
        }
    }

    #[test]
    fn pool_scope_cannot_split_skill_family() {
        let scorer = setup();
        let pool = ids(&scorer, &["skill", "spill", "still", "swill"]);
        let search = TreeSearch::new(&scorer, TreeSearchConfig::default());

        for &guess in &pool {
            assert_eq!(search.minimax_worst(guess, &pool), 3);
        }
        assert_eq!(search.minimax_worst(id(&scorer, "kapow"), &pool), 1);

        let tree = search.optimal_tree(id(&scorer, "skill"), &pool).unwrap();
        assert_eq!(tree.answers(), 4);
        assert_eq!(tree.total_guesses(), 10);
        assert_eq!(tree.max_depth(), 4);
    }

    #[test]
    fn universe_scope_probe_isolates_all() {
        let scorer = setup();
        let pool = ids(&scorer, &["skill", "spill", "still", "swill"]);
        let config = TreeSearchConfig {
            scope: GuessScope::Universe,
            candidate_limit: None,
        };
        let search = TreeSearch::new(&scorer, config);

        let tree = search.optimal_tree(id(&scorer, "kapow"), &pool).unwrap();
        assert_eq!(tree.total_guesses(), 8);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.histogram(), BTreeMap::from([(2, 4)]));
        assert_eq!(tree.node(tree.root()).children.len(), 4);
    }

    #[test]
    fn vivid_tree_paths() {
        let scorer = setup();
        let pool = ids(&scorer, &["funky", "musky", "roomy"]);
        let search = TreeSearch::new(&scorer, TreeSearchConfig::default());
        let vivid = id(&scorer, "vivid");
        let funky = id(&scorer, "funky");

        let tree = search.optimal_tree(vivid, &pool).unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.guess, vivid);
        assert_eq!(root.pool_size, 3);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].0.to_string(), "00000");

        let render = |path: &Vec<(WordId, Pattern)>| {
            path.iter()
                .map(|&(guess, pattern)| format!("{},{}", scorer.dictionary().word(guess), pattern))
                .collect::<Vec<_>>()
                .join(",")
        };
        let paths: Vec<String> = tree.paths().iter().map(render).collect();
        assert_eq!(
            paths,
            [
                "VIVID,00000,FUNKY,00002,ROOMY,22222",
                "VIVID,00000,FUNKY,02022,MUSKY,22222",
                "VIVID,00000,FUNKY,22222",
            ]
        );

        let Branch::Next(next) = root.children[0].1 else {
            panic!("VIVID does not solve anything");
        };
        assert_eq!(tree.node(next).guess, funky);
        assert_eq!(tree.total_guesses(), 8);
        assert_eq!(tree.histogram(), BTreeMap::from([(2, 1), (3, 2)]));
    }

    #[test]
    fn repeated_searches_agree() {
        let scorer = setup();
        let pool = scorer.dictionary().answers().to_vec();
        let config = TreeSearchConfig {
            scope: GuessScope::Universe,
            candidate_limit: None,
        };
        let seed = id(&scorer, "kapow");

        let first = TreeSearch::new(&scorer, config).optimal_tree(seed, &pool).unwrap();
        let search = TreeSearch::new(&scorer, config);
        let second = search.optimal_tree(seed, &pool).unwrap();
        let third = search.optimal_tree(seed, &pool).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(first.answers(), pool.len());
    }

    #[test]
    fn candidate_limit_keeps_first_member() {
        let scorer = setup();
        let pool = ids(&scorer, &["skill", "spill", "still", "swill"]);
        let config = TreeSearchConfig {
            scope: GuessScope::Universe,
            candidate_limit: Some(1),
        };
        let search = TreeSearch::new(&scorer, config);

        let tree = search.optimal_tree(id(&scorer, "skill"), &pool).unwrap();
        assert_eq!(tree.total_guesses(), 10);
        assert_eq!(tree.answers(), 4);
    }

    #[test]
    fn empty_pool_is_rejected() {
        let scorer = setup();
        let search = TreeSearch::new(&scorer, TreeSearchConfig::default());
        assert_eq!(
            search.optimal_tree(id(&scorer, "kapow"), &[]),
            Err(SolverError::EmptyPool)
        );
    }
}
