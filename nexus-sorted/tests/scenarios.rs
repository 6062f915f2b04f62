use nexus_sorted::{Direction, SortedChain, SortedList};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fruit() -> SortedChain {
    init_logging();
    let mut chain = SortedChain::new();
    chain.add("banana");
    chain.add("Apple");
    chain.add("cherry");
    chain
}

fn values(chain: &SortedChain) -> Vec<String> {
    chain.values().map(str::to_owned).collect()
}

/// Walks `prev` links from the tail and reverses the result.
fn values_via_prev(chain: &SortedChain) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = chain.last();
    while let Some(element) = current {
        out.push(element.value().to_owned());
        current = element.prev();
    }
    out.reverse();
    out
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn ascending_insert_order() {
    let chain = fruit();
    assert_eq!(values(&chain), ["Apple", "banana", "cherry"]);
    assert_eq!(values_via_prev(&chain), values(&chain));
}

#[test]
fn descending_flip() {
    let mut chain = fruit();
    chain.order_descending();
    assert_eq!(values(&chain), ["cherry", "banana", "Apple"]);
    assert_eq!(values_via_prev(&chain), values(&chain));
}

#[test]
fn presence_ignores_case() {
    let chain = fruit();
    assert!(chain.is_present("APPLE"));
    assert!(!chain.is_present("grape"));
}

#[test]
fn remove_by_value_once() {
    let mut chain = fruit();
    assert!(chain.remove("banana"));
    assert_eq!(values(&chain), ["Apple", "cherry"]);
    assert!(!chain.remove("banana"));
    assert_eq!(values_via_prev(&chain), values(&chain));
}

#[test]
fn remove_last_of_single() {
    init_logging();
    let mut chain = SortedChain::new();
    chain.add("Apple");

    assert!(chain.remove_last());
    assert_eq!(chain.size(), 0);
    assert!(chain.first().is_none());
    assert!(chain.last().is_none());
}

#[test]
fn empty_chain_edges() {
    init_logging();
    let mut chain = SortedChain::new();

    assert!(!chain.remove_at(0));
    assert!(chain.get(0).is_none());
    assert_eq!(chain.size(), 0);
    assert!(!chain.remove_first());
    assert!(!chain.remove_last());
    assert!(!chain.remove("apple"));

    // Reordering an empty chain only flips the direction
    chain.order_descending();
    assert_eq!(chain.direction(), Direction::Descending);
    assert_eq!(chain.size(), 0);
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn rejected_inputs_change_nothing() {
    let mut chain = fruit();
    let before = values(&chain);

    chain.add("abc123");
    chain.add("");
    chain.add("BANANA");
    chain.add("apple");
    chain.add(" cherry");

    assert_eq!(chain.size(), 3);
    assert_eq!(values(&chain), before);
}

// =============================================================================
// Reordering
// =============================================================================

#[test]
fn ascending_twice_is_ascending_once() {
    let mut once = fruit();
    once.order_ascending();

    let mut twice = fruit();
    twice.order_ascending();
    twice.order_ascending();

    assert_eq!(values(&once), values(&twice));
    assert_eq!(once.direction(), twice.direction());
}

#[test]
fn descending_then_ascending_round_trips() {
    let mut chain: SortedChain = ["kiwi", "Lime", "fig", "Date", "plum", "apple"]
        .into_iter()
        .collect();
    let original = values(&chain);

    chain.order_descending();
    chain.order_ascending();

    assert_eq!(values(&chain), original);
    assert_eq!(values_via_prev(&chain), original);
}

#[test]
fn mixed_session() {
    let mut chain = fruit();
    chain.order_descending();
    chain.add("date");
    chain.add("Avocado");
    assert_eq!(values(&chain), ["date", "cherry", "banana", "Avocado", "Apple"]);

    assert!(chain.remove_at(2));
    assert!(chain.remove_first());
    assert_eq!(values(&chain), ["cherry", "Avocado", "Apple"]);

    chain.order_ascending();
    chain.add("blueberry");
    assert_eq!(values(&chain), ["Apple", "Avocado", "blueberry", "cherry"]);
    assert_eq!(values_via_prev(&chain), values(&chain));
    assert_eq!(chain.to_string(), "Apple\nAvocado\nblueberry\ncherry\n");
}
