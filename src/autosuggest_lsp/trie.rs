use hashbrown::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    complete_word: Option<String>,
    popularity: u32,
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn insert(&mut self, word: &str) {
        // an empty walk would terminate at the root; no word is empty
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.complete_word.is_none() {
            node.complete_word = Some(word.to_string());
            self.count += 1;
        }
    }

    pub fn populate<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    fn find_node_mut(&mut self, word: &str) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.get_mut(&ch)?;
        }
        Some(node)
    }

    /// Ranked completions for a prefix: popularity descending, ties in
    /// traversal order. A prefix that diverges from every stored word
    /// yields an empty vec.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let mut matches = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            Self::collect_words(node, &mut matches);
        }
        // sort_by is stable, so equally popular words keep traversal order
        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches.into_iter().map(|(word, _)| word).collect()
    }

    fn collect_words(node: &TrieNode, matches: &mut Vec<(String, u32)>) {
        if let Some(word) = &node.complete_word {
            matches.push((word.clone(), node.popularity));
        }
        // ascending char order keeps the traversal deterministic
        let mut letters: Vec<char> = node.children.keys().copied().collect();
        letters.sort_unstable();
        for ch in letters {
            Self::collect_words(&node.children[&ch], matches);
        }
    }

    /// Records that a suggested word was picked. Returns false without
    /// touching anything when the word is not in the index.
    pub fn select(&mut self, word: &str) -> bool {
        match self.find_node_mut(word) {
            Some(node) if node.complete_word.is_some() => {
                node.popularity = node.popularity.saturating_add(1);
                true
            }
            _ => false,
        }
    }

    /// Unmarks a word so it no longer appears in suggestions. The node and
    /// its popularity stay in the tree; re-inserting the word restores its
    /// previous rank. Returns false when the word is not in the index.
    pub fn delete(&mut self, word: &str) -> bool {
        let removed = match self.find_node_mut(word) {
            Some(node) => node.complete_word.take().is_some(),
            None => false,
        };
        if removed {
            self.count -= 1;
        }
        removed
    }
}
