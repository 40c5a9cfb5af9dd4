extern crate classic_collections;
extern crate rand;

use classic_collections::deque::Deque;
use classic_collections::queue::{sliding_window_max, PriorityQueue, Queue};
use classic_collections::stack::{next_greater_elements, Stack};
use self::rand::Rng;
use std::collections::VecDeque;

#[test]
fn int_test_stack_lifo() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut stack = Stack::new();
    let mut pushed = Vec::new();
    for _ in 0..1_000 {
        let value = rng.gen::<u32>();
        stack.push(value);
        pushed.push(value);
    }

    let pops = rng.gen_range(0, 1_000);
    for _ in 0..pops {
        assert_eq!(stack.pop(), pushed.pop());
    }
    assert_eq!(stack.len(), 1_000 - pops);
}

#[test]
fn int_test_queue_fifo() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut queue = Queue::new();
    let mut expected = VecDeque::new();
    for _ in 0..10_000 {
        if rng.gen_weighted_bool(3) {
            assert_eq!(queue.dequeue(), expected.pop_front());
        } else {
            let value = rng.gen::<u32>();
            queue.enqueue(value);
            expected.push_back(value);
        }
        assert_eq!(queue.peek(), expected.front());
        assert_eq!(queue.len(), expected.len());
    }
}

#[test]
fn int_test_deque() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut deque = Deque::new();
    let mut expected = VecDeque::new();
    for _ in 0..10_000 {
        let value = rng.gen::<u32>();
        match rng.gen_range(0, 4) {
            0 => {
                deque.push_front(value);
                expected.push_front(value);
            },
            1 => {
                deque.push_back(value);
                expected.push_back(value);
            },
            2 => assert_eq!(deque.pop_front(), expected.pop_front()),
            _ => assert_eq!(deque.pop_back(), expected.pop_back()),
        }
        assert_eq!(deque.front(), expected.front());
        assert_eq!(deque.back(), expected.back());
        assert_eq!(deque.len(), expected.len());
    }
}

#[test]
fn int_test_priority_queue() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut pq = PriorityQueue::new();
    let mut expected = Vec::new();
    for id in 0..1_000u32 {
        let priority = rng.gen_range(0, 50);
        pq.enqueue(id, priority);
        expected.push((priority, id));
    }

    // a stable sort by priority keeps enqueue order among equal priorities
    expected.sort_by_key(|pair| pair.0);
    for (priority, id) in expected {
        let entry = pq.dequeue().unwrap();
        assert_eq!((entry.priority, entry.element), (priority, id));
    }
    assert!(pq.dequeue().is_none());
}

#[test]
fn int_test_sliding_window_max() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    for _ in 0..100 {
        let values = (0..rng.gen_range(1, 100))
            .map(|_| rng.gen_range(-20, 20))
            .collect::<Vec<i32>>();
        let window_size = rng.gen_range(1, values.len() + 1);

        let expected = values
            .windows(window_size)
            .map(|window| *window.iter().max().unwrap())
            .collect::<Vec<i32>>();
        assert_eq!(sliding_window_max(&values, window_size), expected);
    }
}

#[test]
fn int_test_next_greater_elements() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    for _ in 0..100 {
        let values = (0..rng.gen_range(0, 100))
            .map(|_| rng.gen_range(-20, 20))
            .collect::<Vec<i32>>();

        let expected = (0..values.len())
            .map(|i| values[i + 1..].iter().find(|value| **value > values[i]).cloned())
            .collect::<Vec<Option<i32>>>();
        assert_eq!(next_greater_elements(&values), expected);
    }
}
