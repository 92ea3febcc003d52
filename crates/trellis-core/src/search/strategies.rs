//! Frontier containers and expansion rules for the traversal variants

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{Strategy, Traversal};

/// FIFO frontier: nodes expand in discovery order, so the first time the
/// destination is removed it sits at the fewest hops from the source.
pub(crate) struct BreadthFirst {
    frontier: VecDeque<String>,
}

impl BreadthFirst {
    pub(crate) fn new() -> Self {
        BreadthFirst {
            frontier: VecDeque::new(),
        }
    }
}

impl Strategy for BreadthFirst {
    fn initialize(&mut self, state: &mut Traversal) {
        state.mark_source();
        self.frontier.push_back(state.source().to_string());
    }

    fn run(&mut self, state: &mut Traversal) {
        while let Some(current) = self.frontier.pop_front() {
            if current == state.destination() {
                break;
            }
            for next in state.successors(&current) {
                if state.discover(next, &current) {
                    self.frontier.push_back(next.clone());
                }
            }
        }
    }
}

/// LIFO frontier: the most recently discovered node expands first
pub(crate) struct DepthFirst {
    frontier: Vec<String>,
}

impl DepthFirst {
    pub(crate) fn new() -> Self {
        DepthFirst {
            frontier: Vec::new(),
        }
    }
}

impl Strategy for DepthFirst {
    fn initialize(&mut self, state: &mut Traversal) {
        state.mark_source();
        self.frontier.push(state.source().to_string());
    }

    fn run(&mut self, state: &mut Traversal) {
        while let Some(current) = self.frontier.pop() {
            if current == state.destination() {
                break;
            }
            for next in state.successors(&current) {
                if state.discover(next, &current) {
                    self.frontier.push(next.clone());
                }
            }
        }
    }
}

/// Unordered frontier: removal picks a uniformly random element and the
/// successor list is shuffled before insertion, so expansion order varies
/// run to run while reachability stays structural.
pub(crate) struct RandomWalk {
    frontier: Vec<String>,
    rng: StdRng,
}

impl RandomWalk {
    /// The RNG is scoped to one search invocation: seeded for
    /// reproducible runs, entropy otherwise.
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomWalk {
            frontier: Vec::new(),
            rng,
        }
    }
}

impl Strategy for RandomWalk {
    fn initialize(&mut self, state: &mut Traversal) {
        state.mark_source();
        self.frontier.push(state.source().to_string());
    }

    fn run(&mut self, state: &mut Traversal) {
        while !self.frontier.is_empty() {
            let index = self.rng.gen_range(0..self.frontier.len());
            let current = self.frontier.swap_remove(index);
            tracing::trace!(node = %current, "visiting");
            if current == state.destination() {
                break;
            }
            let successors = state.successors(&current);
            // Dead ends are dropped without expansion
            if successors.is_empty() {
                continue;
            }
            let mut order: Vec<&String> = successors.iter().collect();
            order.shuffle(&mut self.rng);
            for next in order {
                if state.discover(next, &current) {
                    self.frontier.push(next.clone());
                }
            }
        }
    }
}
