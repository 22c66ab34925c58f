use core::cell::Cell;
use std::rc::Rc;

pub(crate) const RNG_SEED: [u8; 32] = [
    0x3c, 0x91, 0x5e, 0x07, 0xa2, 0x4f, 0xd8, 0x16, 0x6b, 0xe0, 0x29, 0x73, 0xbf, 0x44, 0x0a, 0x95,
    0x58, 0xc7, 0x1d, 0x82, 0xf6, 0x30, 0x6e, 0xab, 0x12, 0x9d, 0x47, 0xe5, 0x0c, 0x7a, 0xd1, 0x63,
];

#[derive(Debug)]
pub(crate) struct DropCounter {
    drop_count: Rc<Cell<usize>>,
}

impl DropCounter {
    pub(crate) fn new() -> Self {
        DropCounter {
            drop_count: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn new_droppable<T>(&self, value: T) -> Droppable<T> {
        Droppable {
            value,
            counter: Rc::clone(&self.drop_count),
        }
    }

    pub(crate) fn dropped(&self) -> usize {
        self.drop_count.get()
    }
}

#[derive(Debug)]
pub(crate) struct Droppable<T = ()> {
    pub value: T,
    counter: Rc<Cell<usize>>,
}

impl<T: Clone> Clone for Droppable<T> {
    fn clone(&self) -> Self {
        Droppable {
            value: self.value.clone(),
            counter: Rc::clone(&self.counter),
        }
    }
}

impl<T: PartialEq> PartialEq for Droppable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Droppable<T> {
    fn drop(&mut self) {
        self.counter.set(self.counter.get() + 1);
    }
}
