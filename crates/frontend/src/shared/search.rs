//! Debounce and response-ordering bookkeeping for incremental search.
//!
//! The pickers own the actual timer (`gloo_timers::future::TimeoutFuture`)
//! and fetch; this module keeps the bookkeeping pure so the ordering rules
//! can be tested without a DOM.
//!
//! Wiring in a component (both live in a `StoredValue`):
//! ```rust,ignore
//! let mut d = debounce.get_value();
//! let ticket = d.note_input();
//! debounce.set_value(d);
//! spawn_local(async move {
//!     TimeoutFuture::new(DEBOUNCE_MS).await;
//!     if !debounce.get_value().is_current(ticket) {
//!         return; // superseded while waiting, no request is sent
//!     }
//!     if !should_search(&query) {
//!         let mut s = sequencer.get_value();
//!         s.invalidate(); // retire any in-flight request
//!         sequencer.set_value(s);
//!         // clear the result list, nothing to fetch
//!         return;
//!     }
//!     let mut s = sequencer.get_value();
//!     let seq = s.begin();
//!     sequencer.set_value(s);
//!     let outcome = fetch(query).await;
//!     if !sequencer.get_value().try_apply(seq) {
//!         return; // stale response, a newer query owns the result list
//!     }
//!     // apply outcome
//! });
//! ```

/// Quiet period before a settled query triggers a lookup.
pub const DEBOUNCE_MS: u32 = 1000;

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_LEN: usize = 3;

/// True when the query is long enough to trigger a lookup. Length is
/// counted in characters, not bytes.
pub fn should_search(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Debounce generations. Every keystroke takes a fresh ticket and
/// invalidates all earlier ones; a timer that wakes up holding a stale
/// ticket was superseded and must not issue a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_input(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.generation
    }
}

/// Request sequence numbers for in-flight lookups. A response may replace
/// the result list only while its ticket is still the latest issued, so an
/// older request that resolves late can never overwrite a newer result.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuerySequencer {
    issued: u64,
}

impl QuerySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket immediately before issuing a request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// True when the response for `ticket` is still the one to display.
    pub fn try_apply(&self, ticket: u64) -> bool {
        ticket == self.issued
    }

    /// Retire every outstanding ticket without issuing a request. Called
    /// when the query drops below the minimum length: the cleared result
    /// list must stay cleared even if an older lookup resolves late.
    pub fn invalidate(&mut self) {
        self.issued += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_query_length() {
        assert!(!should_search(""));
        assert!(!should_search("ap"));
        assert!(!should_search("  a  "));
        assert!(should_search("app"));
    }

    #[test]
    fn test_min_query_length_counts_chars_not_bytes() {
        // Two accented characters are four bytes but still too short.
        assert!(!should_search("éé"));
        assert!(should_search("ééé"));
    }

    #[test]
    fn test_debounce_coalesces_rapid_input() {
        // "a", "ap", "app" typed within one quiet period: each keystroke
        // takes a ticket, only the last timer is allowed to fetch.
        let mut debounce = Debouncer::new();
        let tickets: Vec<u64> = ["a", "ap", "app"]
            .iter()
            .map(|_| debounce.note_input())
            .collect();

        let queries = ["a", "ap", "app"];
        let mut requests = Vec::new();
        for (ticket, query) in tickets.iter().zip(queries.iter()) {
            if debounce.is_current(*ticket) {
                requests.push(*query);
            }
        }

        assert_eq!(requests, vec!["app"]);
    }

    #[test]
    fn test_settled_query_fires_again() {
        let mut debounce = Debouncer::new();
        let first = debounce.note_input();
        assert!(debounce.is_current(first));

        // A later keystroke starts a new debounce window.
        let second = debounce.note_input();
        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }

    #[test]
    fn test_last_issued_request_wins() {
        // Request A ("cab") is issued before request B ("car"); B resolves
        // first, then A resolves late. A must be refused.
        let mut sequencer = QuerySequencer::new();
        let ticket_a = sequencer.begin();
        let ticket_b = sequencer.begin();

        let mut displayed: Vec<&str> = Vec::new();
        if sequencer.try_apply(ticket_b) {
            displayed = vec!["Car"];
        }
        if sequencer.try_apply(ticket_a) {
            displayed = vec!["Cab"];
        }

        assert_eq!(displayed, vec!["Car"]);
    }

    #[test]
    fn test_shortened_query_retires_inflight_request() {
        // "app" is in flight when the query drops to "ap": the short input
        // clears the list and invalidates the sequencer, so the old "app"
        // response must not repopulate what the user just cleared.
        let mut sequencer = QuerySequencer::new();
        let ticket_app = sequencer.begin();

        sequencer.invalidate();
        assert!(!sequencer.try_apply(ticket_app));

        // The next long-enough query starts fresh and still applies.
        let ticket_next = sequencer.begin();
        assert!(sequencer.try_apply(ticket_next));
    }

    #[test]
    fn test_in_order_responses_apply() {
        let mut sequencer = QuerySequencer::new();
        let ticket = sequencer.begin();
        assert!(sequencer.try_apply(ticket));

        let newer = sequencer.begin();
        assert!(!sequencer.try_apply(ticket));
        assert!(sequencer.try_apply(newer));
    }
}
