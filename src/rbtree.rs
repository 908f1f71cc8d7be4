use std::{
    borrow::Borrow,
    cmp::Ordering,
    mem,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

use log::{debug, trace};
use rand::Rng;

use crate::depth::Depth;
use crate::error::Error;

// Arena slot reserved for the sentinel, in every tree instance.
const SENTINEL: usize = 0;

// Source of unique tags, so that a NodeRef from one tree can never
// address another tree.
static TREE_TAG: AtomicU64 = AtomicU64::new(1);

/// RbTree manage a single instance of in-memory ordered index using
/// [red-black][rbtree] tree.
///
/// Nodes are kept in an arena and linked by index. Every absent link,
/// including the parent of the root, points to a shared always-black
/// sentinel node, so rotation and fixup logic never branch on `None`.
///
/// Duplicate keys are allowed. Insert descends left only when the new
/// key is strictly less than the visited key, hence an equal key lands
/// in the right subtree of its twin at the time of insertion.
///
/// [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct RbTree<K>
where
    K: Clone + Ord,
{
    name: String,
    tag: u64,
    nodes: Vec<Node<K>>,
    free: Vec<usize>, // erased slots, reused by insert.
    root: usize,
    n_count: usize, // number of entries in the tree.
    n_allocs: usize,
    n_frees: usize,
}

/// Handle to a node in [`RbTree`], returned by insert, find, min, max
/// and random. A handle stays valid until its node is erased or the
/// tree is cleared, after which it is rejected by [`RbTree::erase`]
/// and [`RbTree::key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef {
    tag: u64,
    index: usize,
    generation: u32,
}

/// Different ways to construct a new RbTree instance.
impl<K> RbTree<K>
where
    K: Clone + Ord,
{
    /// Create an empty instance of RbTree, identified by `name`.
    /// Applications can choose unique names. Fails only when the
    /// sentinel cannot be allocated.
    pub fn new<S>(name: S) -> Result<RbTree<K>, Error<K>>
    where
        S: AsRef<str>,
    {
        let mut nodes: Vec<Node<K>> = vec![];
        nodes.try_reserve(1)?;
        nodes.push(Node::sentinel());

        let tree = RbTree {
            name: name.as_ref().to_string(),
            tag: TREE_TAG.fetch_add(1, AtomicOrdering::Relaxed),
            nodes,
            free: vec![],
            root: SENTINEL,
            n_count: Default::default(),
            n_allocs: Default::default(),
            n_frees: Default::default(),
        };
        debug!("rbtree <{}>: created", tree.name);
        Ok(tree)
    }

    /// Create a new instance of RbTree and load it with keys from `iter`.
    /// Keys need not be unique.
    pub fn load_from<S, I>(name: S, iter: I) -> Result<RbTree<K>, Error<K>>
    where
        S: AsRef<str>,
        I: Iterator<Item = K>,
    {
        let mut tree = RbTree::new(name)?;
        for key in iter {
            tree.insert(key)?;
        }
        debug!("rbtree <{}>: loaded {} entries", tree.name, tree.n_count);
        Ok(tree)
    }
}

/// Maintenance API.
impl<K> RbTree<K>
where
    K: Clone + Ord,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating RbTree instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root == SENTINEL
    }

    /// Return quickly with basic statisics, black-height and depth
    /// statistics are only computed by [`RbTree::validate`].
    pub fn stats(&self) -> Stats {
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K>>());
        stats.set_arena(self.nodes.len(), self.free.len());
        stats.set_lifetime(self.n_allocs, self.n_frees);
        stats
    }

    /// Free every node, children before parents, leaving an empty tree
    /// whose sentinel is intact. Return the number of nodes freed.
    pub fn clear(&mut self) -> usize {
        let mut freed = 0;
        let root = self.root;
        self.free_subtree(root, &mut freed);
        self.root = SENTINEL;
        self.n_count = 0;
        self.reset_sentinel();
        debug!("rbtree <{}>: cleared {} nodes", self.name, freed);
        freed
    }

    /// Tear down this instance, freeing every node and then the sentinel.
    /// Return the number of nodes freed, not counting the sentinel.
    pub fn destroy(mut self) -> usize {
        let freed = self.clear();
        let slots = self.nodes.len();
        self.nodes.truncate(SENTINEL);
        self.free.clear();
        debug!(
            "rbtree <{}>: destroyed, {} nodes {} slots {} allocs {} frees",
            self.name, freed, slots, self.n_allocs, self.n_frees
        );
        freed
    }

    /// Validate red-black tree with following rules:
    ///
    /// * Root is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Keys are in non-decreasing order.
    /// * Parent and child links agree with each other.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, Error<K>> {
        if self.is_red(self.root) {
            return Err(Error::RedRoot);
        }
        if self.nodes[self.root].parent != SENTINEL {
            let err = format!("root {} has parent", self.root);
            return Err(Error::BrokenLink(err));
        }

        let mut stats = self.stats();
        stats.set_depths(Depth::new());
        let blacks = self.validate_tree(self.root, false, 0, 0, &mut stats)?;
        stats.set_blacks(blacks);

        let keys = self.to_vec(self.n_count + 1);
        if keys.len() != self.n_count {
            let (expected, found) = (self.n_count, keys.len());
            return Err(Error::CountMismatch { expected, found });
        }
        for pair in keys.windows(2) {
            if pair[0] > pair[1] {
                return Err(Error::SortError(pair[0].clone(), pair[1].clone()));
            }
        }
        Ok(stats)
    }
}

/// Write operations on RbTree instance.
impl<K> RbTree<K>
where
    K: Clone + Ord,
{
    /// Insert `key` into the index and return a handle to its node. An
    /// equal key, if present, is kept and the new key goes after it.
    pub fn insert(&mut self, key: K) -> Result<NodeRef, Error<K>> {
        let z = self.alloc_node(key)?;

        let (mut y, mut x) = (SENTINEL, self.root);
        while x != SENTINEL {
            y = x;
            x = if self.key_of(z) < self.key_of(x) {
                self.nodes[x].left
            } else {
                self.nodes[x].right
            };
        }

        self.nodes[z].parent = y;
        if y == SENTINEL {
            self.root = z;
        } else if self.key_of(z) < self.key_of(y) {
            self.nodes[y].left = z;
        } else {
            self.nodes[y].right = z;
        }

        self.insert_fixup(z);
        self.n_count += 1;
        Ok(self.node_ref(z))
    }

    /// Erase the node addressed by `node` and return its key. Handles
    /// that are stale, or that belong to another tree, are rejected
    /// with [`Error::InvalidNode`] and the tree is left untouched.
    pub fn erase(&mut self, node: NodeRef) -> Result<K, Error<K>> {
        let z = self.resolve(node).ok_or(Error::InvalidNode)?;

        let (zl, zr) = (self.nodes[z].left, self.nodes[z].right);
        let mut removed_black = self.nodes[z].black;
        let x = if zl == SENTINEL {
            trace!("rbtree <{}>: erase, no left child", self.name);
            self.transplant(z, zr);
            zr
        } else if zr == SENTINEL {
            trace!("rbtree <{}>: erase, no right child", self.name);
            self.transplant(z, zl);
            zl
        } else {
            trace!("rbtree <{}>: erase, two children", self.name);
            let y = self.minimum(zr);
            removed_black = self.nodes[y].black;
            let x = self.nodes[y].right;
            if self.nodes[y].parent == z {
                self.nodes[x].parent = y;
            } else {
                self.transplant(y, x);
                self.nodes[y].right = zr;
                self.nodes[zr].parent = y;
            }
            self.transplant(z, y);
            self.nodes[y].left = zl;
            self.nodes[zl].parent = y;
            self.nodes[y].black = self.nodes[z].black;
            x
        };

        if removed_black {
            self.delete_fixup(x);
        }
        self.reset_sentinel();

        self.n_count -= 1;
        Ok(self.free_node(z))
    }

    /// Erase one entry equal to `key` and return it. If key is not
    /// present, then remove is effectively a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find(key)?;
        self.erase(node).ok()
    }
}

/// Read operations on RbTree instance.
impl<K> RbTree<K>
where
    K: Clone + Ord,
{
    /// Return the key held by `node`, None if the handle is stale or
    /// does not belong to this tree.
    pub fn key(&self, node: NodeRef) -> Option<&K> {
        self.resolve(node).map(|x| self.key_of(x))
    }

    /// Find a node holding `key`. With duplicates, the first equal node
    /// met on the descent from root is returned.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut x = self.root;
        while x != SENTINEL {
            x = match self.key_of(x).borrow().cmp(key) {
                Ordering::Less => self.nodes[x].right,
                Ordering::Greater => self.nodes[x].left,
                Ordering::Equal => return Some(self.node_ref(x)),
            };
        }
        None
    }

    /// Check whether `key` is present in this index.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Return the node with smallest key, None if index is empty.
    pub fn min(&self) -> Option<NodeRef> {
        match self.root {
            SENTINEL => None,
            root => Some(self.node_ref(self.minimum(root))),
        }
    }

    /// Return the node with largest key, None if index is empty.
    pub fn max(&self) -> Option<NodeRef> {
        match self.root {
            SENTINEL => None,
            root => Some(self.node_ref(self.maximum(root))),
        }
    }

    /// Return a random node from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<NodeRef> {
        if self.root == SENTINEL {
            return None;
        }

        let (mut x, mut at_depth) = (self.root, rng.gen::<u8>() % 40);
        loop {
            let next = match rng.gen::<u8>() % 2 {
                0 => self.nodes[x].left,
                _ => self.nodes[x].right,
            };
            if at_depth == 0 || next == SENTINEL {
                break Some(self.node_ref(x));
            }
            at_depth -= 1;
            x = next;
        }
    }

    /// Copy keys, in sort order, into `dst`. Stop when `dst` is full and
    /// return the number of keys written.
    pub fn to_array(&self, dst: &mut [K]) -> usize {
        let keys = self.to_vec(dst.len());
        let n = keys.len();
        dst.iter_mut().zip(keys.into_iter()).for_each(|(d, k)| *d = k);
        n
    }

    /// Return at most `capacity` keys in sort order.
    pub fn to_vec(&self, capacity: usize) -> Vec<K> {
        let mut acc: Vec<K> = Vec::with_capacity(capacity.min(self.n_count));
        self.scan_iter(self.root, capacity, &mut acc);
        acc
    }
}

impl<K> RbTree<K>
where
    K: Clone + Ord,
{
    //            (p)                        (p)
    //             |                          |
    //             x                          y
    //            / \                        / \
    //           /   \                      /   \
    //          a     y                    x     c
    //               / \                  / \
    //              b   c                a   b
    //
    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;
        let b = self.nodes[y].left;
        self.nodes[x].right = b;
        if b != SENTINEL {
            self.nodes[b].parent = x;
        }
        self.replace_child(x, y);
        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    //            (p)                        (p)
    //             |                          |
    //             x                          y
    //            / \                        / \
    //           /   \                      /   \
    //          y     c                    a     x
    //         / \                              / \
    //        a   b                            b   c
    //
    fn rotate_right(&mut self, x: usize) {
        let y = self.nodes[x].left;
        let b = self.nodes[y].right;
        self.nodes[x].left = b;
        if b != SENTINEL {
            self.nodes[b].parent = x;
        }
        self.replace_child(x, y);
        self.nodes[y].right = x;
        self.nodes[x].parent = y;
    }

    // hook `v` into the slot that `u` occupies under u's parent, or make
    // it the root. Sets v's parent even when v is the sentinel.
    fn replace_child(&mut self, u: usize, v: usize) {
        let p = self.nodes[u].parent;
        if p == SENTINEL {
            self.root = v;
        } else if u == self.nodes[p].left {
            self.nodes[p].left = v;
        } else {
            self.nodes[p].right = v;
        }
        self.nodes[v].parent = p;
    }

    #[inline]
    fn transplant(&mut self, u: usize, v: usize) {
        self.replace_child(u, v)
    }

    fn insert_fixup(&mut self, mut z: usize) {
        while z != self.root && self.is_red(self.nodes[z].parent) {
            let p = self.nodes[z].parent;
            let g = self.nodes[p].parent;
            if p == self.nodes[g].left {
                let u = self.nodes[g].right;
                if self.is_red(u) {
                    trace!("rbtree <{}>: insert-fixup, red uncle", self.name);
                    self.set_black(p);
                    self.set_black(u);
                    self.set_red(g);
                    z = g;
                    continue;
                }
                if z == self.nodes[p].right {
                    trace!("rbtree <{}>: insert-fixup, inner child", self.name);
                    z = p;
                    self.rotate_left(z);
                }
                trace!("rbtree <{}>: insert-fixup, outer child", self.name);
                let p = self.nodes[z].parent;
                let g = self.nodes[p].parent;
                self.set_black(p);
                self.set_red(g);
                self.rotate_right(g);
            } else {
                let u = self.nodes[g].left;
                if self.is_red(u) {
                    trace!("rbtree <{}>: insert-fixup, red uncle", self.name);
                    self.set_black(p);
                    self.set_black(u);
                    self.set_red(g);
                    z = g;
                    continue;
                }
                if z == self.nodes[p].left {
                    trace!("rbtree <{}>: insert-fixup, inner child", self.name);
                    z = p;
                    self.rotate_right(z);
                }
                trace!("rbtree <{}>: insert-fixup, outer child", self.name);
                let p = self.nodes[z].parent;
                let g = self.nodes[p].parent;
                self.set_black(p);
                self.set_red(g);
                self.rotate_left(g);
            }
        }
        let root = self.root;
        self.set_black(root);
    }

    // `x` carries an extra black, possibly x is the sentinel standing in
    // at the splice point, in which case its parent link was set by
    // transplant.
    fn delete_fixup(&mut self, mut x: usize) {
        while x != self.root && self.is_black(x) {
            let p = self.nodes[x].parent;
            if x == self.nodes[p].left {
                let mut w = self.nodes[p].right;
                if self.is_red(w) {
                    trace!("rbtree <{}>: delete-fixup, red sibling", self.name);
                    self.set_black(w);
                    self.set_red(p);
                    self.rotate_left(p);
                    w = self.nodes[self.nodes[x].parent].right;
                }
                let (near, far) = (self.nodes[w].left, self.nodes[w].right);
                if self.is_black(near) && self.is_black(far) {
                    trace!("rbtree <{}>: delete-fixup, black nephews", self.name);
                    self.set_red(w);
                    x = self.nodes[x].parent;
                    continue;
                }
                if self.is_black(far) {
                    trace!("rbtree <{}>: delete-fixup, red near nephew", self.name);
                    self.set_black(near);
                    self.set_red(w);
                    self.rotate_right(w);
                    w = self.nodes[self.nodes[x].parent].right;
                }
                trace!("rbtree <{}>: delete-fixup, red far nephew", self.name);
                let p = self.nodes[x].parent;
                let far = self.nodes[w].right;
                self.nodes[w].black = self.nodes[p].black;
                self.set_black(p);
                self.set_black(far);
                self.rotate_left(p);
                x = self.root;
            } else {
                let mut w = self.nodes[p].left;
                if self.is_red(w) {
                    trace!("rbtree <{}>: delete-fixup, red sibling", self.name);
                    self.set_black(w);
                    self.set_red(p);
                    self.rotate_right(p);
                    w = self.nodes[self.nodes[x].parent].left;
                }
                let (near, far) = (self.nodes[w].right, self.nodes[w].left);
                if self.is_black(near) && self.is_black(far) {
                    trace!("rbtree <{}>: delete-fixup, black nephews", self.name);
                    self.set_red(w);
                    x = self.nodes[x].parent;
                    continue;
                }
                if self.is_black(far) {
                    trace!("rbtree <{}>: delete-fixup, red near nephew", self.name);
                    self.set_black(near);
                    self.set_red(w);
                    self.rotate_left(w);
                    w = self.nodes[self.nodes[x].parent].left;
                }
                trace!("rbtree <{}>: delete-fixup, red far nephew", self.name);
                let p = self.nodes[x].parent;
                let far = self.nodes[w].left;
                self.nodes[w].black = self.nodes[p].black;
                self.set_black(p);
                self.set_black(far);
                self.rotate_right(p);
                x = self.root;
            }
        }
        self.set_black(x);
    }

    fn minimum(&self, mut x: usize) -> usize {
        while self.nodes[x].left != SENTINEL {
            x = self.nodes[x].left;
        }
        x
    }

    fn maximum(&self, mut x: usize) -> usize {
        while self.nodes[x].right != SENTINEL {
            x = self.nodes[x].right;
        }
        x
    }

    fn scan_iter(
        &self,
        x: usize,
        limit: usize,
        acc: &mut Vec<K>, // accumulator for keys in sort order
    ) -> bool {
        if x == SENTINEL {
            return true;
        }
        if !self.scan_iter(self.nodes[x].left, limit, acc) {
            return false;
        }
        if acc.len() >= limit {
            return false;
        }
        acc.push(self.key_of(x).clone());
        self.scan_iter(self.nodes[x].right, limit, acc)
    }

    fn validate_tree(
        &self,
        x: usize,
        fromred: bool,
        mut nb: usize,
        depth: usize,
        stats: &mut Stats,
    ) -> Result<usize, Error<K>> {
        if x == SENTINEL {
            stats.sample_depth(depth);
            return Ok(nb);
        }

        let red = self.is_red(x);
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }
        let (left, right) = (self.nodes[x].left, self.nodes[x].right);
        for child in [left, right].iter() {
            if *child != SENTINEL && self.nodes[*child].parent != x {
                let err = format!("child {} of {} points elsewhere", child, x);
                return Err(Error::BrokenLink(err));
            }
        }
        let lblacks = self.validate_tree(left, red, nb, depth + 1, stats)?;
        let rblacks = self.validate_tree(right, red, nb, depth + 1, stats)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }

    fn free_subtree(&mut self, x: usize, freed: &mut usize) {
        if x == SENTINEL {
            return;
        }
        let (left, right) = (self.nodes[x].left, self.nodes[x].right);
        self.free_subtree(left, freed);
        self.free_subtree(right, freed);
        self.free_node(x);
        *freed += 1;
    }

    //--------- arena management ----------------

    fn alloc_node(&mut self, key: K) -> Result<usize, Error<K>> {
        let index = match self.free.pop() {
            Some(index) => {
                self.nodes[index].reuse(key);
                index
            }
            None => {
                self.nodes.try_reserve(1)?;
                self.nodes.push(Node::new(key));
                self.nodes.len() - 1
            }
        };
        self.n_allocs += 1;
        Ok(index)
    }

    fn free_node(&mut self, x: usize) -> K {
        let key = match self.nodes[x].release() {
            Some(key) => key,
            None => panic!("free_node(): double free, call the programmer"),
        };
        self.free.push(x);
        self.n_frees += 1;
        key
    }

    fn resolve(&self, node: NodeRef) -> Option<usize> {
        if node.tag != self.tag || node.index == SENTINEL {
            return None;
        }
        match self.nodes.get(node.index) {
            Some(n) if n.key.is_some() && n.generation == node.generation => Some(node.index),
            _ => None,
        }
    }

    #[inline]
    fn node_ref(&self, x: usize) -> NodeRef {
        NodeRef {
            tag: self.tag,
            index: x,
            generation: self.nodes[x].generation,
        }
    }

    #[inline]
    fn key_of(&self, x: usize) -> &K {
        match &self.nodes[x].key {
            Some(key) => key,
            None => panic!("key_of(): {} has no key, call the programmer", x),
        }
    }

    fn reset_sentinel(&mut self) {
        let sentinel = &mut self.nodes[SENTINEL];
        sentinel.parent = SENTINEL;
        sentinel.left = SENTINEL;
        sentinel.right = SENTINEL;
        sentinel.black = true;
    }

    #[inline]
    fn is_red(&self, x: usize) -> bool {
        !self.nodes[x].black
    }

    #[inline]
    fn is_black(&self, x: usize) -> bool {
        self.nodes[x].black
    }

    #[inline]
    fn set_red(&mut self, x: usize) {
        self.nodes[x].black = false
    }

    #[inline]
    fn set_black(&mut self, x: usize) {
        self.nodes[x].black = true
    }
}

/// Node corresponds to a single slot in the RbTree arena.
#[derive(Clone)]
struct Node<K> {
    key: Option<K>,  // None for sentinel and free slots
    black: bool,     // store: black or red
    parent: usize,   // store: parent, SENTINEL for root
    left: usize,     // store: left child
    right: usize,    // store: right child
    generation: u32, // bumped on every free
}

impl<K> Node<K> {
    fn new(key: K) -> Node<K> {
        Node {
            key: Some(key),
            black: false,
            parent: SENTINEL,
            left: SENTINEL,
            right: SENTINEL,
            generation: 0,
        }
    }

    fn sentinel() -> Node<K> {
        Node {
            key: None,
            black: true,
            parent: SENTINEL,
            left: SENTINEL,
            right: SENTINEL,
            generation: 0,
        }
    }

    // revive a free slot as a fresh red node.
    fn reuse(&mut self, key: K) {
        self.key = Some(key);
        self.black = false;
        self.parent = SENTINEL;
        self.left = SENTINEL;
        self.right = SENTINEL;
    }

    fn release(&mut self) -> Option<K> {
        let key = self.key.take()?;
        self.generation = self.generation.wrapping_add(1);
        self.black = true;
        self.parent = SENTINEL;
        self.left = SENTINEL;
        self.right = SENTINEL;
        Some(key)
    }
}

/// Statistics on [`RbTree`]. Serves two purpose:
///
/// * To get partial but quick statistics via [`RbTree::stats`] method.
/// * To get full statisics via [`RbTree::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    slots: usize,
    free_slots: usize,
    allocs: usize,
    frees: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            ..Default::default()
        }
    }

    #[inline]
    fn set_arena(&mut self, slots: usize, free_slots: usize) {
        self.slots = slots;
        self.free_slots = free_slots;
    }

    #[inline]
    fn set_lifetime(&mut self, allocs: usize, frees: usize) {
        self.allocs = allocs;
        self.frees = frees;
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    fn sample_depth(&mut self, depth: usize) {
        if let Some(depths) = self.depths.as_mut() {
            depths.sample(depth)
        }
    }

    /// Return number entries in [`RbTree`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `RbTree<K>`. Although
    /// the node overhead is constant, the node size varies based on
    /// key type. EG:
    ///
    /// ```
    /// use rbtree_index::RbTree;
    /// let tree: RbTree<u64> = RbTree::new("myinstance").unwrap();
    ///
    /// // size of key: 8 bytes, plus links, color and generation.
    /// assert!(tree.stats().node_size() > 32);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of arena slots, including the sentinel and free slots.
    #[inline]
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Return number of arena slots waiting to be reused.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.free_slots
    }

    /// Return number of nodes allocated over the life of the instance.
    #[inline]
    pub fn allocs(&self) -> usize {
        self.allocs
    }

    /// Return number of nodes freed over the life of the instance.
    #[inline]
    pub fn frees(&self) -> usize {
        self.frees
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        self.depths.as_ref().filter(|d| d.samples() > 0).cloned()
    }
}
