//! 256-way trie symbol table keyed by byte strings.
//!
//! Each node has one link per possible byte. Lookups follow the link for the
//! next key byte until the key is exhausted or a link is missing, so they
//! take time proportional to the key length regardless of table size.

const RADIX: usize = 256;

struct Node<V> {
    value: Option<V>,
    children: Box<[Option<Box<Node<V>>>; RADIX]>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            value: None,
            children: Box::new(std::array::from_fn(|_| None)),
        }
    }

    /// No value and no children: the node can be unlinked
    fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.iter().all(Option::is_none)
    }
}

/// Symbol table mapping byte-string keys to values
///
/// Inserting an existing key replaces its value. The empty key is allowed.
pub struct TrieMap<V> {
    root: Option<Box<Node<V>>>,
    len: usize,
}

impl<V> Default for TrieMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieMap<V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of key-value pairs
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, key: &[u8]) -> Option<&V> {
        self.node(key)?.value.as_ref()
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let mut node = self.root.as_deref_mut()?;
        for &b in key {
            node = node.children[b as usize].as_deref_mut()?;
        }
        node.value.as_mut()
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Insert a key-value pair, returning the value it replaced
    pub fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        let mut node = self.root.get_or_insert_with(|| Box::new(Node::new()));
        for &b in key {
            node = node.children[b as usize].get_or_insert_with(|| Box::new(Node::new()));
        }

        let previous = node.value.replace(value);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Remove a key, pruning nodes left without values or children
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        let root = self.root.as_deref_mut()?;
        let removed = Self::remove_at(root, key);
        if root.is_vacant() {
            self.root = None;
        }

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_at(node: &mut Node<V>, key: &[u8]) -> Option<V> {
        match key.split_first() {
            None => node.value.take(),
            Some((&b, rest)) => {
                let slot = &mut node.children[b as usize];
                let child = slot.as_deref_mut()?;
                let removed = Self::remove_at(child, rest);
                if child.is_vacant() {
                    *slot = None;
                }
                removed
            }
        }
    }

    /// All keys in sorted byte order
    pub fn keys(&self) -> Vec<Vec<u8>> {
        self.keys_with_prefix(b"")
    }

    /// All keys starting with `prefix`, in sorted byte order
    pub fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
        self.first_keys_with_prefix(prefix, usize::MAX)
    }

    /// The first `limit` keys starting with `prefix`, in sorted byte order
    ///
    /// The walk stops as soon as `limit` keys are found.
    pub fn first_keys_with_prefix(&self, prefix: &[u8], limit: usize) -> Vec<Vec<u8>> {
        let mut keys = Vec::new();
        if limit == 0 {
            return keys;
        }
        if let Some(node) = self.node(prefix) {
            let mut path = prefix.to_vec();
            collect(node, &mut path, &mut keys, limit);
        }
        keys
    }

    /// All keys matching `pattern`, where `.` matches any single byte
    pub fn keys_that_match(&self, pattern: &[u8]) -> Vec<Vec<u8>> {
        let mut keys = Vec::new();
        if let Some(root) = self.root.as_deref() {
            collect_matching(root, &mut Vec::new(), pattern, &mut keys);
        }
        keys
    }

    /// Longest key that is a prefix of `query`
    pub fn longest_prefix_of<'q>(&self, query: &'q [u8]) -> Option<&'q [u8]> {
        let mut node = self.root.as_deref()?;
        let mut longest = node.value.as_ref().map(|_| 0);

        for (depth, &b) in query.iter().enumerate() {
            match node.children[b as usize].as_deref() {
                Some(child) => node = child,
                None => break,
            }
            if node.value.is_some() {
                longest = Some(depth + 1);
            }
        }

        longest.map(|len| &query[..len])
    }

    fn node(&self, key: &[u8]) -> Option<&Node<V>> {
        let mut node = self.root.as_deref()?;
        for &b in key {
            node = node.children[b as usize].as_deref()?;
        }
        Some(node)
    }
}

impl<K: AsRef<[u8]>, V> FromIterator<(K, V)> for TrieMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        for (key, value) in iter {
            trie.insert(key.as_ref(), value);
        }
        trie
    }
}

/// Preorder walk; returns once `keys` holds `limit` entries
fn collect<V>(node: &Node<V>, path: &mut Vec<u8>, keys: &mut Vec<Vec<u8>>, limit: usize) {
    if node.value.is_some() {
        keys.push(path.clone());
    }

    for (b, child) in node.children.iter().enumerate() {
        if keys.len() >= limit {
            return;
        }
        if let Some(child) = child {
            path.push(b as u8);
            collect(child, path, keys, limit);
            path.pop();
        }
    }
}

fn collect_matching<V>(node: &Node<V>, path: &mut Vec<u8>, pattern: &[u8], keys: &mut Vec<Vec<u8>>) {
    let depth = path.len();
    if depth == pattern.len() {
        if node.value.is_some() {
            keys.push(path.clone());
        }
        return;
    }

    let next = pattern[depth];
    for (b, child) in node.children.iter().enumerate() {
        if next != b'.' && next as usize != b {
            continue;
        }
        if let Some(child) = child {
            path.push(b as u8);
            collect_matching(child, path, pattern, keys);
            path.pop();
        }
    }
}
