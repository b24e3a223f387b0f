use std::fmt;
use std::io;
use std::mem;

pub struct Node<V> {
    pub val: V,
    pub(crate) next: Option<usize>,
}

// Slots double as the free list: a vacant slot links to the next vacant one.
enum Slot<V> {
    Occupied(Node<V>),
    Vacant { next_free: Option<usize> },
}

/// Singly linked list of nodes held in an owning arena. Links are indices
/// into the arena rather than pointers, so the empty list is `head == None`
/// and dropping the list frees every node at once.
pub struct List<V> {
    slots: Vec<Slot<V>>,
    head: Option<usize>,
    free: Option<usize>,
}

/// The head of a stack is its top; the operations are the same.
pub type Stack<V> = List<V>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl<V> List<V> {
    pub fn new() -> Self {
        List {
            slots: Vec::new(),
            head: None,
            free: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks the chain from the head counting nodes.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut curr = self.head;

        while let Some(idx) = curr {
            count += 1;
            curr = self.node(idx).next;
        }

        count
    }

    /// Links a new node in front of the current head.
    pub fn push(&mut self, val: V) {
        let next = self.head;
        let idx = self.insert(Node { val, next });
        self.head = Some(idx);
    }

    /// Unlinks the head node and returns its value. The slot is recycled by
    /// a later `push` or `extend`.
    pub fn pop(&mut self) -> Option<V> {
        let idx = self.head?;
        let node = self.release(idx);
        self.head = node.next;
        Some(node.val)
    }

    pub fn peek(&self) -> Option<&Node<V>> {
        self.head.map(|idx| self.node(idx))
    }

    /// First node whose value equals `key`, searching from the head.
    pub fn find(&self, key: &V) -> Option<&Node<V>>
    where
        V: PartialEq,
    {
        self.iter().find(|node| node.val == *key)
    }

    /// Drops every node and resets the list to empty. Safe to call on an
    /// already-empty list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.free = None;
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    /// Visits the nodes tail-to-head. The chain only links forward, so the
    /// order is prepared up front from one forward walk.
    pub fn iter_rev(&self) -> RevIter<'_, V> {
        let mut pending = Vec::new();
        let mut curr = self.head;

        while let Some(idx) = curr {
            pending.push(idx);
            curr = self.node(idx).next;
        }

        RevIter {
            list: self,
            pending,
        }
    }

    fn insert(&mut self, node: Node<V>) -> usize {
        match self.free {
            Some(idx) => {
                let slot = mem::replace(&mut self.slots[idx], Slot::Occupied(node));
                self.free = match slot {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<V> {
        let slot = mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free,
            },
        );
        self.free = Some(idx);

        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    fn node(&self, idx: usize) -> &Node<V> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<V> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("chain points at a vacant slot"),
        }
    }

    fn tail_index(&self) -> Option<usize> {
        let mut curr = self.head?;

        loop {
            match self.node(curr).next {
                Some(next) => curr = next,
                None => return Some(curr),
            }
        }
    }
}

impl List<u32> {
    /// Generates `count` nodes holding positions `1..=count`, linked in
    /// generation order. `count == 0` yields the empty list.
    pub fn sequential(count: u32) -> Self {
        (1..=count).collect()
    }
}

impl<V: fmt::Display> List<V> {
    /// Renders the values in the given direction, space-separated with a
    /// trailing newline. The empty list writes nothing.
    pub fn write_to<W: io::Write>(&self, direction: Direction, out: &mut W) -> io::Result<()> {
        match direction {
            Direction::Forward => write_line(out, self.iter()),
            Direction::Reverse => write_line(out, self.iter_rev()),
        }
    }
}

fn write_line<'a, W, I, V>(out: &mut W, nodes: I) -> io::Result<()>
where
    W: io::Write,
    I: Iterator<Item = &'a Node<V>>,
    V: fmt::Display + 'a,
{
    let mut any = false;

    for node in nodes {
        if any {
            out.write_all(b" ")?;
        }
        write!(out, "{}", node.val)?;
        any = true;
    }

    if any {
        out.write_all(b"\n")?;
    }

    Ok(())
}

impl<V> Extend<V> for List<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        let mut tail = self.tail_index();

        for val in iter {
            let idx = self.insert(Node { val, next: None });
            match tail {
                Some(t) => self.node_mut(t).next = Some(idx),
                None => self.head = Some(idx),
            }
            tail = Some(idx);
        }
    }
}

impl<V> FromIterator<V> for List<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<V> Default for List<V> {
    fn default() -> Self {
        List::new()
    }
}

impl<V: fmt::Display> fmt::Display for List<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, node) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", node.val)?;
        }
        f.write_str("]")
    }
}

pub struct Iter<'a, V> {
    list: &'a List<V>,
    next: Option<usize>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.list.node(idx);
        self.next = node.next;
        Some(node)
    }
}

pub struct RevIter<'a, V> {
    list: &'a List<V>,
    // Indices head-to-tail; popping from the back yields reverse order.
    pending: Vec<usize>,
}

impl<'a, V> Iterator for RevIter<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pending.pop().map(|idx| self.list.node(idx))
    }
}
