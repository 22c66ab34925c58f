#![cfg(feature = "unstable")]
#![feature(test)]

extern crate test;

use coffer::Deque;
use rand::{rngs::SmallRng, RngCore, SeedableRng};
use std::collections::VecDeque;
use test::Bencher;

const N: usize = 127;

trait Sequence {
    fn new() -> Self;
    fn prepend(&mut self, value: u32);
    fn insert(&mut self, index: usize, value: u32);
    fn remove_at(&mut self, index: usize);
    fn count(&self) -> usize;
}

impl Sequence for Deque<u32, N> {
    fn new() -> Self {
        Deque::new()
    }
    fn prepend(&mut self, value: u32) {
        Deque::prepend(self, value);
    }
    fn insert(&mut self, index: usize, value: u32) {
        Deque::insert(self, index, value);
    }
    fn remove_at(&mut self, index: usize) {
        Deque::remove_at(self, index);
    }
    fn count(&self) -> usize {
        Deque::count(self)
    }
}

impl Sequence for VecDeque<u32> {
    fn new() -> Self {
        VecDeque::with_capacity(N)
    }
    fn prepend(&mut self, value: u32) {
        self.push_front(value);
    }
    fn insert(&mut self, index: usize, value: u32) {
        VecDeque::insert(self, index, value);
    }
    fn remove_at(&mut self, index: usize) {
        VecDeque::remove(self, index);
    }
    fn count(&self) -> usize {
        self.len()
    }
}

macro_rules! prepends {
    ($fnn:ident, $ty:ty) => {
        #[bench]
        fn $fnn(b: &mut Bencher) {
            b.iter(|| {
                let mut seq = <$ty as Sequence>::new();
                for i in 0..N as u32 {
                    seq.prepend(i);
                }
                seq
            })
        }
    };
}

macro_rules! churn {
    ($fnn:ident, $ty:ty) => {
        #[bench]
        fn $fnn(b: &mut Bencher) {
            let mut rng = SmallRng::seed_from_u64(0x5432_1012_3454_3210);
            let mut seq = <$ty as Sequence>::new();
            seq.prepend(0);
            for i in 1..(N / 2) as u32 {
                seq.insert(0, i);
            }

            b.iter(|| {
                for _ in 0..64 {
                    let at = rng.next_u32() as usize % seq.count();
                    seq.insert(at, rng.next_u32());
                    let at = rng.next_u32() as usize % seq.count();
                    seq.remove_at(at);
                }
            })
        }
    };
}

prepends! { prepend_coffer_deque, Deque<u32, N> }
prepends! { prepend_std_vec_deque, VecDeque<u32> }

churn! { churn_coffer_deque, Deque<u32, N> }
churn! { churn_std_vec_deque, VecDeque<u32> }
