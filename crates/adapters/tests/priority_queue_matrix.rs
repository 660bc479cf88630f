use proptest::prelude::*;

use container_adapters::{AdapterError, Greater, PriorityQueue};

fn drain<C, F>(pq: &mut PriorityQueue<i32, C, F>) -> Vec<i32>
where
    C: container_adapters::IndexedSequence<Item = i32>,
    F: container_adapters::Compare<i32>,
{
    std::iter::from_fn(|| pq.pop().ok()).collect()
}

#[test]
fn priority_queue_max_heap_matrix() {
    let mut pq = PriorityQueue::new();
    for x in [4, 8, 1, 8, 3, 0, 12] {
        pq.push(x);
        assert!(pq.top().is_ok());
    }
    assert_eq!(pq.top(), Ok(&12));
    assert_eq!(pq.size(), 7);
    assert_eq!(drain(&mut pq), vec![12, 8, 8, 4, 3, 1, 0]);
    assert!(pq.is_empty());
}

#[test]
fn priority_queue_min_heap_matrix() {
    let mut pq: PriorityQueue<i32, Vec<i32>, Greater> = PriorityQueue::with_comparator(Greater);
    for x in [5, -2, 7, 0] {
        pq.push(x);
    }
    assert_eq!(pq.top(), Ok(&-2));
    assert_eq!(drain(&mut pq), vec![-2, 0, 5, 7]);
}

#[test]
fn priority_queue_closure_comparator_matrix() {
    // Orders by distance from 10, closest on top.
    let mut pq: PriorityQueue<i32, Vec<i32>, _> =
        PriorityQueue::with_comparator(|a: &i32, b: &i32| (a - 10).abs() > (b - 10).abs());
    for x in [0, 9, 25, 12] {
        pq.push(x);
    }
    assert_eq!(pq.pop(), Ok(9));
    assert_eq!(pq.pop(), Ok(12));
}

#[test]
fn priority_queue_empty_matrix() {
    let mut pq = PriorityQueue::<i32>::new();
    assert_eq!(pq.top(), Err(AdapterError::Empty("priority queue")));
    assert_eq!(pq.pop(), Err(AdapterError::Empty("priority queue")));
    assert_eq!(
        pq.pop().unwrap_err().to_string(),
        "priority queue is empty"
    );
}

#[test]
fn priority_queue_swap_matrix() {
    let mut a = PriorityQueue::new();
    a.push(1);
    let mut b = PriorityQueue::new();
    b.push(5);
    b.push(6);

    a.swap(&mut b);
    assert_eq!(a.top(), Ok(&6));
    assert_eq!(b.size(), 1);
}

proptest! {
    #[test]
    fn prop_pops_in_descending_order(values in prop::collection::vec(any::<i32>(), 0..500)) {
        let mut pq = PriorityQueue::new();
        for &v in &values {
            pq.push(v);
        }
        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drain(&mut pq), expected);
    }

    #[test]
    fn prop_interleaved_push_pop_tracks_max(
        ops in prop::collection::vec(prop::option::of(any::<i16>()), 0..300)
    ) {
        let mut pq = PriorityQueue::new();
        let mut model: Vec<i16> = Vec::new();
        for op in ops {
            match op {
                Some(v) => {
                    pq.push(v);
                    model.push(v);
                }
                None => {
                    let expected = model.iter().copied().max();
                    if let Some(max) = expected {
                        let pos = model.iter().position(|&x| x == max).unwrap();
                        model.swap_remove(pos);
                    }
                    prop_assert_eq!(pq.pop().ok(), expected);
                }
            }
            prop_assert_eq!(pq.size(), model.len());
        }
    }
}
