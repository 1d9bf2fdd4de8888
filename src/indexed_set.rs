pub type Idx = usize;

/// Marks an empty slot in a position table.
pub const EMPTY: Idx = usize::MAX;

/// Unordered set over keys in `0..capacity` with O(1) insert, remove and
/// membership test.
///
/// Members live in a plain vector; a position table maps each key to its slot
/// in that vector (or [`EMPTY`]). Removal swaps the victim with the last
/// member and pops, so nothing ever shifts. The member order is therefore
/// unspecified, but fully deterministic for a given operation sequence.
#[derive(Debug, Clone)]
pub struct IndexedSet {
    items: Vec<Idx>,
    pos: Vec<Idx>,
}

impl IndexedSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            pos: vec![EMPTY; capacity],
        }
    }

    pub fn contains(&self, v: Idx) -> bool {
        self.pos[v] != EMPTY
    }

    /// Adds v. Returns whether it was absent.
    pub fn insert(&mut self, v: Idx) -> bool {
        if self.contains(v) {
            return false;
        }
        self.pos[v] = self.items.len();
        self.items.push(v);
        true
    }

    /// Removes v by swapping it with the last member. Returns whether it was
    /// present.
    pub fn remove(&mut self, v: Idx) -> bool {
        if !self.contains(v) {
            return false;
        }
        let p = self.pos[v];
        self.items.swap_remove(p);
        if let Some(&moved) = self.items.get(p) {
            self.pos[moved] = p;
        }
        self.pos[v] = EMPTY;
        true
    }

    /// Last member of the backing vector. Treating the set as a stack and
    /// always working on `top()` gives the LIFO discipline the dirty worklist
    /// needs.
    pub fn top(&self) -> Option<Idx> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Idx] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = Idx> + '_ {
        self.items.iter().copied()
    }
}
