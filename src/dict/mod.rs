pub mod loader;
pub mod trie;

pub use loader::{load_dictionary, DictionaryError, DictionaryLoad};
pub use trie::Trie;
