#![feature(test)]
extern crate test;

use std::collections::LinkedList;

#[bench]
fn bench_push_pop_slink(b: &mut test::Bencher) {
    b.iter(|| {
        let mut list = slink::List::new();

        for i in 0..10_000 {
            if rand::random::<u8>() % 2 != 0 {
                list.push(i);
            } else {
                list.pop();
            }
        }

        list
    })
}

#[bench]
fn bench_push_pop_std(b: &mut test::Bencher) {
    b.iter(|| {
        let mut list = LinkedList::new();

        for i in 0..10_000 {
            if rand::random::<u8>() % 2 != 0 {
                list.push_front(i);
            } else {
                list.pop_front();
            }
        }

        list
    })
}

#[bench]
fn bench_sequential_build_and_len(b: &mut test::Bencher) {
    b.iter(|| {
        let list = slink::List::sequential(10_000);
        list.len()
    })
}
