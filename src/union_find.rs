/// Disjoint sets over `0..n` with path compression and union by size.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    pub fn find(&mut self, u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut u = u;
        while self.parent[u] != root {
            let next = self.parent[u];
            self.parent[u] = root;
            u = next;
        }
        root
    }

    /// Merges the sets of `u` and `v`; returns the new root, or `None` if they
    /// were already joined.
    pub fn union(&mut self, u: usize, v: usize) -> Option<usize> {
        let u = self.find(u);
        let v = self.find(v);
        if u == v {
            return None;
        }
        let (par, child) = if self.size[u] < self.size[v] { (v, u) } else { (u, v) };
        self.parent[child] = par;
        self.size[par] += self.size[child];
        self.components -= 1;
        Some(par)
    }

    pub fn size(&mut self, u: usize) -> usize {
        let root = self.find(u);
        self.size[root]
    }

    pub fn equiv(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
