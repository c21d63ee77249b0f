//! Fixed-branching prefix tree over the lowercase ASCII alphabet.

const ALPHABET_SIZE: usize = 26;

/// Fixed accounting cost charged per node in the memory estimate.
const NODE_COST: usize = std::mem::size_of::<TrieNode>();

#[derive(Debug)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
    insert_count: u32,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            terminal: false,
            insert_count: 0,
        }
    }
}

/// In-memory dictionary with O(word length) membership queries.
///
/// Each node carries a dense 26-slot child array keyed by alphabet
/// offset, so a lookup step is a single index rather than a hash. The
/// alphabet is strictly a-z; input is case-folded at the boundary and
/// anything else is rejected, never coerced.
#[derive(Debug)]
pub struct Trie {
    root: Box<TrieNode>,
    word_count: usize,
    memory_estimate: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: Box::new(TrieNode::new()),
            word_count: 0,
            memory_estimate: std::mem::size_of::<Trie>() + NODE_COST,
        }
    }

    /// Alphabet offset for a character, folding case. `None` for
    /// anything outside a-z.
    fn index_of(c: char) -> Option<usize> {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase().then(|| c as usize - 'a' as usize)
    }

    /// Insert a word, creating missing prefix nodes along the path.
    ///
    /// Returns false if the word is empty or contains any character
    /// outside a-z; nothing is modified in that case. Re-inserting a
    /// known word bumps its insert counter but leaves the distinct-word
    /// count unchanged.
    pub fn insert(&mut self, word: &str) -> bool {
        // Validate up front so a rejected word never leaves a partial path.
        let path: Option<Vec<usize>> = word.chars().map(Self::index_of).collect();
        let path = match path {
            Some(p) if !p.is_empty() => p,
            _ => return false,
        };

        let mut node = &mut self.root;
        for idx in path {
            if node.children[idx].is_none() {
                node.children[idx] = Some(Box::new(TrieNode::new()));
                self.memory_estimate += NODE_COST;
            }
            node = node.children[idx].as_mut().unwrap();
        }

        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
        node.insert_count += 1;

        true
    }

    /// True iff every character resolves to a child and the final node
    /// terminates a word. Invalid characters and missing paths yield
    /// false, never an error.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &self.root;
        for c in word.chars() {
            let idx = match Self::index_of(c) {
                Some(idx) => idx,
                None => return false,
            };
            node = match &node.children[idx] {
                Some(child) => child,
                None => return false,
            };
        }

        node.terminal
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Cached estimate of the structure's memory footprint in bytes.
    /// Monotonically non-decreasing across insertions.
    pub fn memory_estimate(&self) -> usize {
        self.memory_estimate
    }

    /// Every stored word, in depth-first a-to-z order.
    ///
    /// The order is deterministic for a fixed insertion history.
    /// Traversal uses an explicit stack so very long words cannot
    /// exhaust the call stack.
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut stack: Vec<(&TrieNode, String)> = vec![(self.root.as_ref(), String::new())];

        while let Some((node, prefix)) = stack.pop() {
            if node.terminal {
                words.push(prefix.clone());
            }

            // Push z down to a so that a pops first.
            for idx in (0..ALPHABET_SIZE).rev() {
                if let Some(child) = &node.children[idx] {
                    let mut next = prefix.clone();
                    next.push((b'a' + idx as u8) as char);
                    stack.push((child.as_ref(), next));
                }
            }
        }

        words
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
