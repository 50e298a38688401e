use ordered_float::OrderedFloat;
use pathfind::data_structures::IndexedMinHeap;
use pathfind::Error;
use std::collections::HashMap;

#[test]
fn test_pop_order_follows_costs_not_insertion_order() {
    // costs {0: 5.0, 1: 1.0, 2: 3.0} inserted in index order must pop 1, 2, 0
    let mut costs = HashMap::new();
    costs.insert(0, 5.0f64);
    costs.insert(1, 1.0);
    costs.insert(2, 3.0);

    let mut heap = IndexedMinHeap::new();
    heap.insert(0, &costs);
    heap.insert(1, &costs);
    heap.insert(2, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(1));
    assert_eq!(heap.pop_min(&costs), Ok(2));
    assert_eq!(heap.pop_min(&costs), Ok(0));
    assert!(heap.is_empty());
}

#[test]
fn test_interleaved_inserts_and_pops() {
    let mut costs = HashMap::new();
    costs.insert(1, OrderedFloat(1.9f64));
    costs.insert(2, OrderedFloat(5.0));
    costs.insert(3, OrderedFloat(4.1));
    costs.insert(4, OrderedFloat(0.0));
    costs.insert(5, OrderedFloat(3.0));

    let untouched = IndexedMinHeap::new();
    assert!(untouched.is_empty());

    let mut heap = IndexedMinHeap::new();
    heap.insert(4, &costs);
    assert!(!heap.is_empty());

    assert_eq!(heap.pop_min(&costs), Ok(4));
    heap.insert(1, &costs);
    heap.insert(5, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(1));
    heap.insert(2, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(5));
    heap.insert(3, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(3));
    assert_eq!(heap.pop_min(&costs), Ok(2));
    assert!(heap.is_empty());
}

#[test]
fn test_costs_filled_just_before_insert_and_one_priority_change() {
    let mut costs = HashMap::new();
    costs.insert(4, 0.0f64);

    let mut heap = IndexedMinHeap::new();
    heap.insert(4, &costs);
    assert_eq!(heap.pop_min(&costs), Ok(4));

    costs.insert(1, 1.9);
    heap.insert(1, &costs);
    costs.insert(5, 3.0);
    heap.insert(5, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(1));
    costs.insert(2, 5.0);
    heap.insert(2, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(5));
    costs.insert(3, 4.1);
    heap.insert(3, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(3));
    costs.insert(2, 4.2);
    heap.change_priority(2, &costs);

    assert_eq!(heap.pop_min(&costs), Ok(2));
    assert!(heap.is_empty());
}

#[test]
fn test_round_trip_returns_each_index_exactly_once() {
    let mut costs = HashMap::new();
    // 37 is coprime with 50, so the costs are a permutation of 0..50
    for i in 0..50usize {
        costs.insert(i, ((i * 37 + 11) % 50) as f64);
    }

    let mut heap = IndexedMinHeap::new();
    for i in 0..50 {
        heap.insert(i, &costs);
    }

    let mut seen = vec![false; 50];
    let mut popped = Vec::new();
    while !heap.is_empty() {
        let i = heap.pop_min(&costs).expect("heap reported non-empty");
        assert!(!seen[i], "index {} popped twice", i);
        seen[i] = true;
        popped.push(i);
    }

    assert_eq!(popped.len(), 50);
    for pair in popped.windows(2) {
        assert!(costs[&pair[0]] <= costs[&pair[1]]);
    }
}

#[test]
fn test_change_priority_moves_indices_both_ways() {
    let mut costs = HashMap::new();
    for i in 0..10usize {
        costs.insert(i, (i + 1) as f64);
    }

    let mut heap = IndexedMinHeap::new();
    for i in 0..10 {
        heap.insert(i, &costs);
    }

    // decrease-key: 10.0 -> 0.5, increase-key: 1.0 -> 20.0
    costs.insert(9, 0.5);
    heap.change_priority(9, &costs);
    costs.insert(0, 20.0);
    heap.change_priority(0, &costs);

    let mut popped = Vec::new();
    while let Ok(i) = heap.pop_min(&costs) {
        popped.push(i);
    }

    assert_eq!(popped.first(), Some(&9));
    assert_eq!(popped.last(), Some(&0));
    for pair in popped.windows(2) {
        assert!(costs[&pair[0]] <= costs[&pair[1]]);
    }
}

#[test]
fn test_wider_fan_outs_preserve_pop_order() {
    for way in [2usize, 3, 4, 8] {
        let mut costs = HashMap::new();
        for i in 0..40usize {
            costs.insert(i, ((i * 23 + 7) % 40) as f64);
        }

        let mut heap = IndexedMinHeap::with_way(way);
        for i in 0..40 {
            heap.insert(i, &costs);
        }

        // churn a few priorities before draining
        costs.insert(13, -1.0);
        heap.change_priority(13, &costs);
        costs.insert(4, 100.0);
        heap.change_priority(4, &costs);

        let mut popped = Vec::new();
        while let Ok(i) = heap.pop_min(&costs) {
            popped.push(i);
        }

        assert_eq!(popped.len(), 40, "fan-out {}", way);
        assert_eq!(popped.first(), Some(&13), "fan-out {}", way);
        assert_eq!(popped.last(), Some(&4), "fan-out {}", way);
        for pair in popped.windows(2) {
            assert!(costs[&pair[0]] <= costs[&pair[1]], "fan-out {}", way);
        }
    }
}

#[test]
fn test_pop_on_empty_heap_is_recoverable() {
    let mut costs: HashMap<usize, f64> = HashMap::new();
    let mut heap = IndexedMinHeap::new();
    assert_eq!(heap.pop_min(&costs), Err(Error::EmptyHeap));

    // the heap stays usable after the failed pop
    costs.insert(7, 1.5);
    heap.insert(7, &costs);
    assert_eq!(heap.pop_min(&costs), Ok(7));
    assert_eq!(heap.pop_min(&costs), Err(Error::EmptyHeap));
}

#[test]
#[should_panic(expected = "no cost")]
fn test_insert_without_cost_panics() {
    let costs: HashMap<usize, f64> = HashMap::new();
    let mut heap = IndexedMinHeap::new();
    heap.insert(3, &costs);
}

#[test]
#[should_panic(expected = "not queued")]
fn test_change_priority_of_unqueued_index_panics() {
    let mut costs = HashMap::new();
    costs.insert(1, 1.0f64);
    let mut heap = IndexedMinHeap::new();
    heap.change_priority(1, &costs);
}
