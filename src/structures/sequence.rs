//! Contiguous sequence backing arrays, stacks and queues
//!
//! A [`Sequence`] is a plain ordered collection of values with
//! bounds-checked mutation primitives.  The same store backs three
//! user-facing structures: arrays (indexed access), stacks (push/pop at the
//! back) and queues (enqueue at the back, dequeue at the front).
//!
//! Preconditions follow the usual convention: read/remove/swap/replace
//! require an index in `[0, len)`, insert allows `[0, len]`.

use super::errors::StructureError;
use super::Value;

/// Ordered values with bounds-checked mutators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    items: Vec<Value>,
}

impl Sequence {
    pub fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    pub fn from_values(items: Vec<Value>) -> Self {
        Sequence { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Bounds-checked element access
    pub fn get(&self, index: usize) -> Result<Value, StructureError> {
        self.items
            .get(index)
            .copied()
            .ok_or(StructureError::InvalidIndex {
                index,
                len: self.items.len(),
            })
    }

    /// Insert at `index`, shifting later elements right.  `index` may equal
    /// the current length (append).
    pub fn insert_at(&mut self, index: usize, value: Value) -> Result<(), StructureError> {
        if index > self.items.len() {
            return Err(StructureError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Remove at `index`, shifting later elements left
    pub fn remove_at(&mut self, index: usize) -> Result<Value, StructureError> {
        if self.items.is_empty() {
            return Err(StructureError::EmptyStructure { structure: "Array" });
        }
        if index >= self.items.len() {
            return Err(StructureError::InvalidIndex {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Swap the values at two distinct indices
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), StructureError> {
        let len = self.items.len();
        if i >= len {
            return Err(StructureError::InvalidIndex { index: i, len });
        }
        if j >= len {
            return Err(StructureError::InvalidIndex { index: j, len });
        }
        if i == j {
            return Err(StructureError::IndicesEqual { index: i });
        }
        self.items.swap(i, j);
        Ok(())
    }

    /// Overwrite the value at `index`, returning the old value
    pub fn replace(&mut self, index: usize, value: Value) -> Result<Value, StructureError> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(StructureError::InvalidIndex { index, len }),
        }
    }

    /// Stack push: append at the top (back)
    pub fn push(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Stack pop: remove from the top (back)
    pub fn pop(&mut self) -> Result<Value, StructureError> {
        self.items
            .pop()
            .ok_or(StructureError::EmptyStructure { structure: "Stack" })
    }

    /// Queue enqueue: append at the rear (back)
    pub fn enqueue(&mut self, value: Value) {
        self.items.push(value);
    }

    /// Queue dequeue: remove from the front
    pub fn dequeue(&mut self) -> Result<Value, StructureError> {
        if self.items.is_empty() {
            return Err(StructureError::EmptyStructure { structure: "Queue" });
        }
        Ok(self.items.remove(0))
    }
}
