use serde::{Deserialize, Serialize};

fn default_synonym_depth() -> usize {
    5
}

fn default_sentence_word_threshold() -> usize {
    3
}

fn default_gloss_min_len() -> usize {
    2
}

fn default_max_examples_stored() -> usize {
    8
}

fn default_max_phrases_stored() -> usize {
    6
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// How many merged translations get back-translated into synonyms
    #[serde(default = "default_synonym_depth")]
    pub synonym_depth: usize,
    /// Inputs with more words than this are treated as sentences
    #[serde(default = "default_sentence_word_threshold")]
    pub sentence_word_threshold: usize,
    /// Tokens this short or shorter are left out of the word-by-word gloss
    #[serde(default = "default_gloss_min_len")]
    pub gloss_min_len: usize,
    #[serde(default = "default_max_examples_stored")]
    pub max_examples_stored: usize,
    #[serde(default = "default_max_phrases_stored")]
    pub max_phrases_stored: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            synonym_depth: default_synonym_depth(),
            sentence_word_threshold: default_sentence_word_threshold(),
            gloss_min_len: default_gloss_min_len(),
            max_examples_stored: default_max_examples_stored(),
            max_phrases_stored: default_max_phrases_stored(),
        }
    }
}
