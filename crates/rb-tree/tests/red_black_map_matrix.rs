use std::cmp::Ordering;

use rb_tree::{Color, InvariantError, RbMap};
use simplelog::{Config, LevelFilter, TestLogger};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn keys_of<C: Fn(&i32, &i32) -> Ordering>(map: &RbMap<i32, i32, C>) -> Vec<i32> {
    map.keys().copied().collect()
}

#[test]
fn rb_map_three_ascending_keys_matrix() {
    let mut map = RbMap::new();
    map.insert(10, "ten");
    map.insert(20, "twenty");
    map.insert(30, "thirty");

    let arena = map.arena();
    let root = map.root_index().unwrap() as usize;
    assert_eq!(arena[root].k, 20);
    assert_eq!(arena[root].color, Color::Black);

    let l = arena[root].l.unwrap() as usize;
    let r = arena[root].r.unwrap() as usize;
    assert_eq!((arena[l].k, arena[l].color), (10, Color::Red));
    assert_eq!((arena[r].k, arena[r].color), (30, Color::Red));

    assert_eq!(map.find(&20), Some(&"twenty"));
    assert_eq!(map.find(&99), None);
    assert_eq!(map.assert_valid(), Ok(1));
}

#[test]
fn rb_map_remove_twenty_from_five_matrix() {
    init_logging();
    let mut map = RbMap::new();
    for k in [10, 20, 30, 40, 50] {
        assert!(map.insert(k, k * 2));
        map.assert_valid().unwrap();
    }

    assert_eq!(map.remove(&20), Some(40));
    map.assert_valid().unwrap();

    assert_eq!(map.find(&20), None);
    for k in [10, 30, 40, 50] {
        assert_eq!(map.find(&k), Some(&(k * 2)));
    }
    assert_eq!(map.size(), 4);
}

#[test]
fn rb_map_ascending_thousand_stays_shallow_matrix() {
    let mut map = RbMap::new();
    for k in 1..=1000 {
        map.insert(k, ());
    }
    let bound = 2.0 * (1001f64).log2();

    let black_height = map.assert_valid().unwrap();
    assert_eq!(black_height, map.black_height());
    assert!((black_height as f64) <= bound);
    assert!((map.height() as f64) <= bound, "height {}", map.height());
    assert_eq!(map.size(), 1000);
}

#[test]
fn rb_map_first_write_wins_matrix() {
    let mut map = RbMap::new();
    assert!(map.insert("k", 1));
    assert!(!map.insert("k", 2));
    assert!(!map.insert("k", 3));
    assert_eq!(map.find(&"k"), Some(&1));
    assert_eq!(map.size(), 1);

    // Mutation goes through find_mut, never through insert.
    *map.find_mut(&"k").unwrap() = 7;
    assert!(!map.insert("k", 8));
    assert_eq!(map.find(&"k"), Some(&7));
}

#[test]
fn rb_map_remove_absent_is_noop_matrix() {
    let mut map = RbMap::new();
    for k in [5, 3, 8, 1, 4] {
        map.insert(k, k);
    }
    let before = map.dump();

    assert_eq!(map.remove(&6), None);
    assert_eq!(map.remove_entry(&100), None);
    assert_eq!(map.size(), 5);
    assert_eq!(map.dump(), before);

    let mut empty = RbMap::<i32, i32>::new();
    assert_eq!(empty.remove(&1), None);
    assert!(empty.is_empty());
}

#[test]
fn rb_map_ladder_insert_delete_matrix() {
    init_logging();
    let mut map = RbMap::new();

    for i in 0..200 {
        map.insert(i, i);
        assert_eq!(map.find(&i), Some(&i));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.size(), 200);

    for i in (0..200).step_by(2) {
        assert_eq!(map.remove(&i), Some(i));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.size(), 100);

    for i in 0..200 {
        if i % 2 == 0 {
            assert_eq!(map.find(&i), None);
        } else {
            assert_eq!(map.find(&i), Some(&i));
        }
    }
}

#[test]
fn rb_map_round_trip_to_empty_matrix() {
    let mut map = RbMap::new();
    let order = [42, 7, 99, 13, 58, 1, 77, 23, 64, 35, 88, 5, 50];
    for k in order {
        map.insert(k, k.to_string());
    }
    for k in order.iter().rev().step_by(2).chain(order.iter().skip(1).step_by(2)) {
        assert_eq!(map.remove(k), Some(k.to_string()));
        map.assert_valid().unwrap();
    }
    assert_eq!(map.size(), 0);
    assert!(map.is_empty());
    assert_eq!(map.root_index(), None);
    assert!(map.arena().is_empty());
}

#[test]
fn rb_map_in_order_print_matrix() {
    let mut map = RbMap::new();
    assert_eq!(map.in_order().to_string(), "\n");

    map.insert(3, "c");
    map.insert(1, "a");
    map.insert(2, "b");
    assert_eq!(map.in_order().to_string(), "1 a 2 b 3 c \n");
}

#[test]
fn rb_map_iteration_matrix() {
    let mut map = RbMap::new();
    map.insert(3, 30);
    map.insert(1, 10);
    map.insert(2, 20);

    let entries: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, vec![(1, 10), (2, 20), (3, 30)]);
    assert_eq!(map.iter().len(), 3);

    assert_eq!(keys_of(&map), vec![1, 2, 3]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![10, 20, 30]);

    let mut from_for_each = Vec::new();
    map.for_each(|k, v| from_for_each.push(k + v));
    assert_eq!(from_for_each, vec![11, 22, 33]);

    let mut via_ref = Vec::new();
    for (k, _) in &map {
        via_ref.push(*k);
    }
    assert_eq!(via_ref, vec![1, 2, 3]);

    assert_eq!(format!("{map:?}"), "{1: 10, 2: 20, 3: 30}");
}

#[test]
fn rb_map_misc_api_matrix() {
    let mut map = RbMap::new();
    assert!(map.is_empty());
    assert_eq!(map.size(), 0);
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
    assert_eq!(map.get_or_next_lower(&10), None);
    assert!(!map.contains_key(&10));
    assert_eq!(map.assert_valid(), Ok(0));

    map.insert(10, 100);
    map.insert(5, 50);
    map.insert(20, 200);

    assert!(!map.is_empty());
    assert_eq!(map.size(), 3);
    assert!(map.contains_key(&5));

    assert_eq!(map.get_or_next_lower(&4), None);
    assert_eq!(map.get_or_next_lower(&5), Some((&5, &50)));
    assert_eq!(map.get_or_next_lower(&19), Some((&10, &100)));
    assert_eq!(map.get_or_next_lower(&21), Some((&20, &200)));

    assert_eq!(map.first(), Some((&5, &50)));
    assert_eq!(map.last(), Some((&20, &200)));

    assert_eq!(map.remove_entry(&10), Some((10, 100)));
    assert_eq!(map.remove(&10), None);
    assert_eq!(map.size(), 2);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.size(), 0);
    assert_eq!(map.first(), None);
    assert_eq!(map.root_index(), None);

    map.insert(1, 1);
    assert_eq!(map.find(&1), Some(&1));
    map.assert_valid().unwrap();
}

#[test]
fn rb_map_custom_comparator_matrix() {
    let mut map = RbMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    map.insert(1, 10);
    map.insert(3, 30);
    map.insert(2, 20);

    assert_eq!(keys_of(&map), vec![3, 2, 1]);
    assert_eq!(map.first(), Some((&3, &30)));
    map.assert_valid().unwrap();

    map.remove(&3);
    assert_eq!(keys_of(&map), vec![2, 1]);
    map.assert_valid().unwrap();
}

#[test]
fn rb_map_invariant_error_messages_matrix() {
    let map = RbMap::<i32, ()>::new();
    assert_eq!(map.assert_valid(), Ok(0));

    let err = InvariantError::SizeMismatch {
        tracked: 3,
        reachable: 2,
    };
    assert_eq!(
        err.to_string(),
        "tracked size 3 differs from reachable node count 2"
    );
}

#[test]
fn rb_map_trace_subset_matrix() {
    let mut map = RbMap::new();

    let trace: &[(char, i32)] = &[
        ('i', 47),
        ('i', 20),
        ('i', 14),
        ('i', 88),
        ('i', 71),
        ('i', 100),
        ('i', 8),
        ('i', 53),
        ('i', 46),
        ('i', 52),
        ('d', 41),
        ('d', 20),
        ('d', 36),
        ('d', 67),
        ('d', 88),
        ('d', 0),
        ('i', 77),
        ('i', 27),
        ('d', 47),
        ('d', 75),
        ('i', 62),
        ('d', 11),
        ('d', 53),
        ('i', 1),
        ('d', 8),
        ('d', 100),
        ('d', 96),
        ('d', 14),
    ];

    for (idx, (op, key)) in trace.iter().enumerate() {
        match op {
            'i' => {
                map.insert(*key, *key);
            }
            'd' => {
                map.remove(key);
            }
            _ => unreachable!(),
        }
        if let Err(err) = map.assert_valid() {
            panic!("trace failure at step {idx} ({op},{key}): {err}\n{}", map.dump());
        }
    }
    assert_eq!(keys_of(&map), vec![1, 27, 46, 52, 62, 71, 77]);
}
