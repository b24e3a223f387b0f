mod base;

pub use base::{Direction, Iter, List, Node, RevIter, Stack};

#[cfg(feature = "arbitrary")]
#[derive(Clone, Debug)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Operation<T> {
    Push { item: T },
    Pop,
    Peek,
    Ext { items: Vec<T> },
    Find { key: T },
    Clear,
    Iter,
}
