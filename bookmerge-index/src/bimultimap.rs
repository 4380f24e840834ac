use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Derives the lookup key of an object; `None` means the object cannot be
/// indexed.
pub type KeyFn<T, K> = Box<dyn Fn(&T) -> Option<K> + Send + Sync>;

struct Side<T, K> {
    key_fn: KeyFn<T, K>,
    /// Canonical (first-seen) object per key.
    canonical: HashMap<K, T>,
    /// Keys in first-seen order, for stable iteration.
    order: Vec<K>,
}

impl<T, K> Side<T, K>
where
    K: Eq + Hash + Clone,
{
    fn new(key_fn: KeyFn<T, K>) -> Self {
        Self {
            key_fn,
            canonical: HashMap::new(),
            order: Vec::new(),
        }
    }

    fn key(&self, value: &T) -> Option<K> {
        (self.key_fn)(value)
    }

    fn register(&mut self, key: &K, value: T) {
        if !self.canonical.contains_key(key) {
            self.canonical.insert(key.clone(), value);
            self.order.push(key.clone());
        }
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|k| self.canonical.get(k))
    }
}

/// A many-to-many association between `L` and `R` objects, keyed by `LK`
/// and `RK` derived from them.
///
/// [`len`](Self::len) counts associations, not objects.
pub struct BiMultiMap<L, R, LK, RK> {
    left: Side<L, LK>,
    right: Side<R, RK>,
    left_to_right: HashMap<LK, Vec<RK>>,
    right_to_left: HashMap<RK, Vec<LK>>,
    pairs: HashSet<(LK, RK)>,
}

impl<L, R, LK, RK> BiMultiMap<L, R, LK, RK>
where
    LK: Eq + Hash + Clone,
    RK: Eq + Hash + Clone,
{
    /// Creates an empty map with the given key derivations.
    pub fn new<FL, FR>(left_key: FL, right_key: FR) -> Self
    where
        FL: Fn(&L) -> Option<LK> + Send + Sync + 'static,
        FR: Fn(&R) -> Option<RK> + Send + Sync + 'static,
    {
        Self {
            left: Side::new(Box::new(left_key)),
            right: Side::new(Box::new(right_key)),
            left_to_right: HashMap::new(),
            right_to_left: HashMap::new(),
            pairs: HashSet::new(),
        }
    }

    /// Associates `left` with `right`.
    ///
    /// Returns `false` without changing anything when either key cannot be
    /// derived, and `false` when the pair is already associated. Objects
    /// whose key is already known are dropped in favour of the canonical
    /// one.
    pub fn add(&mut self, left: L, right: R) -> bool {
        let (Some(lk), Some(rk)) = (self.left.key(&left), self.right.key(&right)) else {
            debug!("skipping association with an underivable key");
            return false;
        };
        self.left.register(&lk, left);
        self.right.register(&rk, right);

        if !self.pairs.insert((lk.clone(), rk.clone())) {
            return false;
        }
        self.left_to_right.entry(lk.clone()).or_default().push(rk.clone());
        self.right_to_left.entry(rk).or_default().push(lk);
        true
    }

    /// True when `left` and `right` are associated.
    #[must_use]
    pub fn contains(&self, left: &L, right: &R) -> bool {
        match (self.left.key(left), self.right.key(right)) {
            (Some(lk), Some(rk)) => self.pairs.contains(&(lk, rk)),
            _ => false,
        }
    }

    #[must_use]
    pub fn contains_left(&self, left: &L) -> bool {
        self.left.key(left).is_some_and(|k| self.contains_left_key(&k))
    }

    #[must_use]
    pub fn contains_right(&self, right: &R) -> bool {
        self.right.key(right).is_some_and(|k| self.contains_right_key(&k))
    }

    #[must_use]
    pub fn contains_left_key(&self, key: &LK) -> bool {
        self.left.canonical.contains_key(key)
    }

    #[must_use]
    pub fn contains_right_key(&self, key: &RK) -> bool {
        self.right.canonical.contains_key(key)
    }

    /// The canonical object stored for `left`'s key.
    pub fn canonical_left(&self, left: &L) -> Option<&L> {
        self.left.key(left).and_then(|k| self.left.canonical.get(&k))
    }

    /// The canonical object stored for `right`'s key.
    pub fn canonical_right(&self, right: &R) -> Option<&R> {
        self.right.key(right).and_then(|k| self.right.canonical.get(&k))
    }

    /// Every left object associated with `right`, in association order.
    pub fn lefts_for(&self, right: &R) -> Vec<&L> {
        self.right
            .key(right)
            .map(|k| self.lefts_for_key(&k))
            .unwrap_or_default()
    }

    /// Every right object associated with `left`, in association order.
    pub fn rights_for(&self, left: &L) -> Vec<&R> {
        self.left
            .key(left)
            .map(|k| self.rights_for_key(&k))
            .unwrap_or_default()
    }

    pub fn lefts_for_key(&self, key: &RK) -> Vec<&L> {
        self.right_to_left
            .get(key)
            .map(|keys| keys.iter().filter_map(|k| self.left.canonical.get(k)).collect())
            .unwrap_or_default()
    }

    pub fn rights_for_key(&self, key: &LK) -> Vec<&R> {
        self.left_to_right
            .get(key)
            .map(|keys| keys.iter().filter_map(|k| self.right.canonical.get(k)).collect())
            .unwrap_or_default()
    }

    /// Canonical left objects, in first-seen order.
    pub fn lefts(&self) -> impl Iterator<Item = &L> {
        self.left.iter()
    }

    /// Canonical right objects, in first-seen order.
    pub fn rights(&self) -> impl Iterator<Item = &R> {
        self.right.iter()
    }

    #[must_use]
    pub fn left_len(&self) -> usize {
        self.left.canonical.len()
    }

    #[must_use]
    pub fn right_len(&self) -> usize {
        self.right.canonical.len()
    }

    /// Number of associations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<L, R, LK, RK> fmt::Debug for BiMultiMap<L, R, LK, RK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiMultiMap")
            .field("lefts", &self.left.canonical.len())
            .field("rights", &self.right.canonical.len())
            .field("associations", &self.pairs.len())
            .finish()
    }
}
