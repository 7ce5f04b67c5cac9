use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

type CacheKey = (String, String, String);

/// Translation memo keyed by (text, from, to), owned by one provider.
///
/// Unbounded by default. With a capacity, the oldest insertion is evicted first.
pub struct TranslationCache {
    inner: Mutex<CacheInner>,
    capacity: Option<usize>,
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<CacheKey, String>,
    order: VecDeque<CacheKey>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::with_capacity(None)
    }

    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity,
        }
    }

    pub fn get(&self, text: &str, from: &str, to: &str) -> Option<String> {
        let inner = self.inner.lock().ok()?;
        inner
            .entries
            .get(&(text.to_string(), from.to_string(), to.to_string()))
            .cloned()
    }

    pub fn insert(&self, text: &str, from: &str, to: &str, translation: String) {
        if self.capacity == Some(0) {
            return;
        }
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };

        let key = (text.to_string(), from.to_string(), to.to_string());
        if inner.entries.insert(key.clone(), translation).is_none() {
            inner.order.push_back(key);
        }

        if let Some(capacity) = self.capacity {
            while inner.order.len() > capacity {
                if let Some(oldest) = inner.order.pop_front() {
                    inner.entries.remove(&oldest);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}
