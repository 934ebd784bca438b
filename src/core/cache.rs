// src/core/cache.rs
//
// Session-scoped memo of fetched pages, keyed by URL.
// Entries expire after `ttl`; `invalidate`/`clear` force the next fetch.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use super::net::{Fetch, RawPage};
use crate::error::Result;

pub struct FetchCache {
    ttl: Duration,
    entries: HashMap<String, RawPage>,
}

impl FetchCache {
    /// `ttl_secs <= 0` disables reuse (every call fetches).
    pub fn new(ttl_secs: i64) -> Self {
        Self { ttl: Duration::seconds(ttl_secs.max(0)), entries: HashMap::new() }
    }

    pub fn get_or_fetch(&mut self, url: &str, fetcher: &dyn Fetch) -> Result<&RawPage> {
        self.get_or_fetch_at(url, fetcher, Utc::now())
    }

    /// Same as `get_or_fetch` with an explicit clock.
    pub fn get_or_fetch_at(
        &mut self,
        url: &str,
        fetcher: &dyn Fetch,
        now: DateTime<Utc>,
    ) -> Result<&RawPage> {
        let fresh = self
            .entries
            .get(url)
            .is_some_and(|p| is_fresh(p, self.ttl, now));

        if fresh {
            logd!("Cache: hit {url}");
        } else {
            let page = fetcher.fetch(url)?;
            logd!("Cache: stored {url}");
            self.entries.insert(s!(url), page);
        }
        Ok(&self.entries[url])
    }

    pub fn peek(&self, url: &str) -> Option<&RawPage> {
        self.entries.get(url)
    }

    /// Drop one entry. Returns whether it was present.
    pub fn invalidate(&mut self, url: &str) -> bool {
        self.entries.remove(url).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

fn is_fresh(page: &RawPage, ttl: Duration, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(page.fetched_at) < ttl
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::GdpError;

    struct Counting {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Fetch for Counting {
        fn fetch(&self, url: &str) -> Result<RawPage> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(GdpError::Fetch { url: s!(url), reason: s!("offline") });
            }
            Ok(RawPage::new(url, "<html></html>"))
        }
    }

    fn counting() -> Counting {
        Counting { calls: Cell::new(0), fail: false }
    }

    #[test]
    fn reuses_fresh_entries() {
        let f = counting();
        let mut cache = FetchCache::new(60);
        cache.get_or_fetch("u", &f).unwrap();
        cache.get_or_fetch("u", &f).unwrap();
        assert_eq!(f.calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn expired_entries_are_refetched() {
        let f = counting();
        let mut cache = FetchCache::new(60);
        let t0 = cache.get_or_fetch("u", &f).unwrap().fetched_at;
        cache.get_or_fetch_at("u", &f, t0 + Duration::seconds(61)).unwrap();
        assert_eq!(f.calls.get(), 2);
    }

    #[test]
    fn zero_ttl_always_fetches() {
        let f = counting();
        let mut cache = FetchCache::new(0);
        cache.get_or_fetch("u", &f).unwrap();
        cache.get_or_fetch("u", &f).unwrap();
        assert_eq!(f.calls.get(), 2);
    }

    #[test]
    fn invalidate_forces_refetch() {
        let f = counting();
        let mut cache = FetchCache::new(600);
        cache.get_or_fetch("u", &f).unwrap();
        assert!(cache.invalidate("u"));
        assert!(!cache.invalidate("u"));
        cache.get_or_fetch("u", &f).unwrap();
        assert_eq!(f.calls.get(), 2);
    }

    #[test]
    fn keys_are_independent() {
        let f = counting();
        let mut cache = FetchCache::new(600);
        cache.get_or_fetch("a", &f).unwrap();
        cache.get_or_fetch("b", &f).unwrap();
        assert_eq!(f.calls.get(), 2);
        assert!(cache.peek("a").is_some());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn failures_are_not_cached() {
        let f = Counting { calls: Cell::new(0), fail: true };
        let mut cache = FetchCache::new(600);
        assert!(cache.get_or_fetch("u", &f).is_err());
        assert!(cache.is_empty());
    }
}
