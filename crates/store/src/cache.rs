// Resolve cache: bounded, invalidated synchronously by writes.

use std::collections::HashMap;

/// Caches resolved values keyed by (key, user). A write to a key drops
/// every entry for that key, since a global write changes what each user
/// resolves to. When full, the cache flushes entirely rather than evicting
/// piecemeal; it refills in a handful of lookups.
pub(crate) struct ResolveCache {
    entries: HashMap<(String, Option<String>), String>,
    capacity: usize,
}

impl ResolveCache {
    pub fn new(capacity: usize) -> Self {
        ResolveCache {
            entries: HashMap::new(),
            capacity,
        }
    }

    pub fn get(&self, key: &str, user: Option<&str>) -> Option<String> {
        self.entries
            .get(&(key.to_string(), user.map(|u| u.to_string())))
            .cloned()
    }

    pub fn insert(&mut self, key: &str, user: Option<&str>, value: String) {
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries
            .insert((key.to_string(), user.map(|u| u.to_string())), value);
    }

    pub fn invalidate_key(&mut self, key: &str) {
        self.entries.retain(|(k, _), _| k != key);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
