use std::fmt::Write;

use derivative::Derivative;

use crate::{
    dynamic_cover::{CoverError, DynamicCoverSolver},
    indexed_set::{Idx, IndexedSet, EMPTY},
};

/// Deterministic fully dynamic (2+epsilon)-approximate vertex cover, after
/// Bhattacharya, Henzinger and Italiano (SICOMP 2018).
///
/// Every vertex carries a discrete level in `0..levels` and a fractional
/// weight, the sum of its incident edge weights, where an edge always weighs
/// `beta^-max(level[u], level[v])`. Between updates every vertex satisfies
///
/// ```text
/// level[v] == 0  =>  weight[v] <= alpha * beta
/// level[v]  > 0  =>  1 <= weight[v] <= alpha * beta
/// ```
///
/// and the set of heavy vertices (weight >= 1) is the cover. An update may
/// break the invariant for its endpoints; the drain then promotes overweight
/// and demotes underweight vertices one level at a time until it holds again,
/// in amortized O(1) level changes per update.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct LeveledCoverEngine {
    n: usize,
    epsilon: f64,
    alpha: f64,
    beta: f64,
    /// Number of discrete levels, `1 + ceil(log_beta(n / alpha))`.
    levels: usize,
    level: Vec<usize>,
    weight: Vec<f64>,
    /// `buckets[u]` groups u's neighbours by level difference
    /// `max(0, level[v] - level[u])`, ordered backwards: the sub-list for the
    /// largest difference is physically first and the one for difference zero
    /// is the tail. Only the tail moves when u changes level, and the list
    /// shrinks by one sub-list per level of u, so
    /// `buckets[u].len() == levels - level[u]`.
    buckets: Vec<Vec<Vec<Idx>>>,
    /// `slot[v][u]` is v's index inside whichever sub-list of `buckets[u]`
    /// holds it, or EMPTY when the edge (u, v) is absent.
    #[derivative(Debug = "ignore")]
    slot: Vec<Vec<Idx>>,
    /// Vertices with weight >= 1, i.e. the approximate cover.
    heavy: IndexedSet,
    /// Vertices currently violating the invariant, drained LIFO.
    dirty: IndexedSet,
    /// Total promotions plus demotions so far.
    relevels: u64,
}

impl LeveledCoverEngine {
    /// New engine for an empty graph on n vertices.
    ///
    /// Panics if `n == 0` or `epsilon <= 0`.
    pub fn new(n: usize, epsilon: f64) -> Self {
        assert!(n > 0, "graph must have at least one vertex");
        assert!(epsilon > 0.0, "epsilon must be positive");
        let alpha = 1.0 + 3.0 * epsilon;
        let beta = 1.0 + epsilon;
        let levels = 1 + (n as f64 / alpha).log(beta).ceil().max(0.0) as usize;
        Self {
            n,
            epsilon,
            alpha,
            beta,
            levels,
            level: vec![0; n],
            weight: vec![0.0; n],
            buckets: vec![vec![Vec::new(); levels]; n],
            slot: vec![vec![EMPTY; n]; n],
            heavy: IndexedSet::new(n),
            dirty: IndexedSet::new(n),
            relevels: 0,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Number of discrete levels available to vertices.
    pub fn num_levels(&self) -> usize {
        self.levels
    }

    pub fn level(&self, v: usize) -> usize {
        self.level[v]
    }

    /// Sum of the weights of v's incident edges.
    pub fn weight(&self, v: usize) -> f64 {
        self.weight[v]
    }

    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        u < self.n && v < self.n && self.slot[u][v] != EMPTY
    }

    /// Total promotions plus demotions since construction. Grows by O(1)
    /// amortized per update; useful as a performance regression guard.
    pub fn relevel_events(&self) -> u64 {
        self.relevels
    }

    /// The current cover, borrowed. Order is unspecified and not stable
    /// across updates.
    pub fn vertex_cover(&self) -> &[Idx] {
        self.heavy.as_slice()
    }

    pub fn matching_weight(&self) -> f64 {
        self.weight.iter().sum::<f64>() / 2.0
    }

    /// Checks the leveling invariant for every vertex. Between updates this
    /// can only fail if the structure itself is buggy.
    pub fn verify_invariant(&self) -> Result<(), CoverError> {
        for v in 0..self.n {
            if self.violates(v) {
                return Err(CoverError::InvariantViolation(v));
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, u: usize, v: usize) -> Result<(), CoverError> {
        self.check_pair(u, v)?;
        if self.slot[u][v] != EMPTY {
            return Err(CoverError::DuplicateEdge(u, v));
        }
        log::debug!("insert ({u}, {v})");
        let w = self.edge_weight(u, v);
        self.weight[u] += w;
        self.weight[v] += w;
        self.consider_heavy(u);
        self.consider_heavy(v);
        self.bucket_add(u, v);
        self.bucket_add(v, u);
        self.consider_dirty(u);
        self.consider_dirty(v);
        self.drain_dirty();
        Ok(())
    }

    pub fn delete(&mut self, u: usize, v: usize) -> Result<(), CoverError> {
        self.check_pair(u, v)?;
        if self.slot[u][v] == EMPTY {
            return Err(CoverError::MissingEdge(u, v));
        }
        log::debug!("delete ({u}, {v})");
        let w = self.edge_weight(u, v);
        self.weight[u] -= w;
        self.weight[v] -= w;
        self.consider_heavy(u);
        self.consider_heavy(v);
        self.bucket_remove(u, v);
        self.bucket_remove(v, u);
        self.consider_dirty(u);
        self.consider_dirty(v);
        self.drain_dirty();
        Ok(())
    }

    pub fn describe(&self) -> String {
        let mut out = String::new();
        for v in 0..self.n {
            let _ = writeln!(out, "{v}: level {} weight {:.3}", self.level[v], self.weight[v]);
        }
        let _ = writeln!(out, "vertex cover: {:?}", self.heavy.as_slice());
        let _ = writeln!(out, "{} out of {} vertices", self.heavy.len(), self.n);
        let _ = writeln!(
            out,
            "fractional matching of weight {:.3}",
            self.matching_weight()
        );
        out
    }

    fn check_pair(&self, u: usize, v: usize) -> Result<(), CoverError> {
        for x in [u, v] {
            if x >= self.n {
                return Err(CoverError::InvalidVertex { v: x, n: self.n });
            }
        }
        if u == v {
            return Err(CoverError::SelfLoop(u));
        }
        Ok(())
    }

    fn violates(&self, v: Idx) -> bool {
        let w = self.weight[v];
        if self.level[v] == 0 {
            w > self.alpha * self.beta
        } else {
            w < 1.0 || w > self.alpha * self.beta
        }
    }

    fn edge_weight(&self, u: Idx, v: Idx) -> f64 {
        self.level_edge_weight(self.level[u], self.level[v])
    }

    /// Weight of an edge whose endpoints sit at the given levels.
    fn level_edge_weight(&self, l1: usize, l2: usize) -> f64 {
        self.beta.powi(-(l1.max(l2) as i32))
    }

    /// Physical index of the sub-list of `buckets[owner]` that holds (or
    /// would hold) `member`. Backwards order: difference zero is the tail.
    fn slot_bucket(&self, owner: Idx, member: Idx) -> usize {
        self.buckets[owner].len() - 1 - self.level[member].saturating_sub(self.level[owner])
    }

    fn bucket_add(&mut self, owner: Idx, member: Idx) {
        let b = self.slot_bucket(owner, member);
        self.slot[member][owner] = self.buckets[owner][b].len();
        self.buckets[owner][b].push(member);
    }

    fn bucket_remove(&mut self, owner: Idx, member: Idx) {
        let b = self.slot_bucket(owner, member);
        let p = self.slot[member][owner];
        self.buckets[owner][b].swap_remove(p);
        if let Some(&moved) = self.buckets[owner][b].get(p) {
            self.slot[moved][owner] = p;
        }
        self.slot[member][owner] = EMPTY;
    }

    /// Relocates `member` between adjacent sub-lists of `buckets[owner]`.
    /// Must run before `member`'s level changes by `delta`; the backwards
    /// ordering turns a level increase into a move towards the head.
    fn bucket_shift(&mut self, owner: Idx, member: Idx, delta: isize) {
        let from = self.slot_bucket(owner, member);
        let to = (from as isize - delta) as usize;
        let p = self.slot[member][owner];
        self.buckets[owner][from].swap_remove(p);
        if let Some(&moved) = self.buckets[owner][from].get(p) {
            self.slot[moved][owner] = p;
        }
        self.slot[member][owner] = self.buckets[owner][to].len();
        self.buckets[owner][to].push(member);
    }

    /// Restores the invariant, always working on the most recently dirtied
    /// vertex. Each round moves one vertex one level; levels are bounded, and
    /// the potential argument in the paper bounds total rounds over any
    /// update sequence to O(1) amortized per update.
    fn drain_dirty(&mut self) {
        while let Some(v) = self.dirty.top() {
            if self.weight[v] > self.alpha * self.beta {
                log::trace!("promote {v}: level {} weight {}", self.level[v], self.weight[v]);
                self.promote(v);
            } else if self.weight[v] < 1.0 && self.level[v] > 0 {
                log::trace!("demote {v}: level {} weight {}", self.level[v], self.weight[v]);
                self.demote(v);
            }
            if !self.violates(v) {
                self.dirty.remove(v);
            }
        }
        debug_assert!(self.verify_invariant().is_ok());
    }

    /// Raises v one level. Every neighbour in v's tail bucket (those at v's
    /// level or below) has its copy of v relocated and the shared edge
    /// reweighted; the vacated tail then merges into the new tail, which is
    /// what keeps a promotion O(1) amortized instead of O(levels).
    fn promote(&mut self, v: Idx) {
        let lv = self.level[v];
        let tail = self.buckets[v].len() - 1;
        debug_assert!(tail > 0, "promotion from the top level");
        for i in 0..self.buckets[v][tail].len() {
            let u = self.buckets[v][tail][i];
            if self.level[u] <= lv {
                self.bucket_shift(u, v, 1);
            }
            let diff = self.level_edge_weight(self.level[u], lv + 1) - self.edge_weight(u, v);
            self.weight[u] += diff;
            self.consider_dirty(u);
            self.weight[v] += diff;
            self.consider_heavy(u);
            self.consider_heavy(v);
        }
        self.level[v] = lv + 1;
        if let Some(vacated) = self.buckets[v].pop() {
            let base = self.buckets[v].last().map_or(0, Vec::len);
            for (i, &u) in vacated.iter().enumerate() {
                self.slot[u][v] = base + i;
            }
            if let Some(new_tail) = self.buckets[v].last_mut() {
                new_tail.extend(vacated);
            }
        }
        self.relevels += 1;
    }

    /// Lowers v one level. Tail-bucket neighbours strictly below v's old
    /// level move with v into the new tail; those exactly at the old level
    /// now differ by one and form the sub-list above it.
    fn demote(&mut self, v: Idx) {
        let lv = self.level[v];
        let tail = self.buckets[v].len() - 1;
        let mut lower = Vec::new();
        let mut equal = Vec::new();
        for i in 0..self.buckets[v][tail].len() {
            let u = self.buckets[v][tail][i];
            if self.level[u] < lv {
                lower.push(u);
                self.bucket_shift(u, v, -1);
            } else {
                equal.push(u);
            }
            let diff = self.level_edge_weight(self.level[u], lv - 1) - self.edge_weight(u, v);
            self.weight[u] += diff;
            self.consider_dirty(u);
            self.weight[v] += diff;
            self.consider_heavy(u);
            self.consider_heavy(v);
        }
        self.level[v] = lv - 1;
        for (i, &u) in lower.iter().enumerate() {
            self.slot[u][v] = i;
        }
        for (i, &u) in equal.iter().enumerate() {
            self.slot[u][v] = i;
        }
        self.buckets[v][tail] = equal;
        self.buckets[v].push(lower);
        self.relevels += 1;
    }

    /// The only place cover membership changes.
    fn consider_heavy(&mut self, v: Idx) {
        if self.weight[v] >= 1.0 {
            self.heavy.insert(v);
        } else {
            self.heavy.remove(v);
        }
    }

    fn consider_dirty(&mut self, v: Idx) {
        if self.violates(v) {
            self.dirty.insert(v);
        } else {
            self.dirty.remove(v);
        }
    }
}

impl DynamicCoverSolver for LeveledCoverEngine {
    fn new(n: usize, epsilon: f64) -> Self {
        LeveledCoverEngine::new(n, epsilon)
    }

    fn insert(&mut self, u: usize, v: usize) -> Result<(), CoverError> {
        LeveledCoverEngine::insert(self, u, v)
    }

    fn delete(&mut self, u: usize, v: usize) -> Result<(), CoverError> {
        LeveledCoverEngine::delete(self, u, v)
    }

    fn vertex_cover(&self) -> Vec<usize> {
        self.heavy.as_slice().to_vec()
    }

    fn matching_weight(&self) -> f64 {
        LeveledCoverEngine::matching_weight(self)
    }

    fn describe(&self) -> String {
        LeveledCoverEngine::describe(self)
    }
}
