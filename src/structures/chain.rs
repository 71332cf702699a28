//! Linked-list model in arena form
//!
//! A [`Chain`] holds the values of a singly or doubly linked list in
//! insertion order.  Links are implicit in the ordering: node `i` points
//! forward to node `i + 1`, and for doubly linked lists the back-reference
//! exists only in rendering, never as owned state.  This keeps snapshots
//! plain value copies with no aliased node graphs.

use super::errors::StructureError;
use super::Value;

/// Whether nodes carry a back-reference when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    Singly,
    Doubly,
}

/// Ordered linked-list values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    kind: ChainKind,
    values: Vec<Value>,
}

impl Chain {
    pub fn new(kind: ChainKind) -> Self {
        Chain {
            kind,
            values: Vec::new(),
        }
    }

    pub fn from_values(kind: ChainKind, values: Vec<Value>) -> Self {
        Chain { kind, values }
    }

    pub fn kind(&self) -> ChainKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Append a node at the tail
    pub fn push_back(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Relink a new node in at `index`; `index == len` appends
    pub fn insert_at(&mut self, index: usize, value: Value) -> Result<(), StructureError> {
        if index > self.values.len() {
            return Err(StructureError::InvalidIndex {
                index,
                len: self.values.len(),
            });
        }
        self.values.insert(index, value);
        Ok(())
    }

    /// Unlink the node at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Value, StructureError> {
        if self.values.is_empty() {
            return Err(StructureError::EmptyStructure { structure: "List" });
        }
        if index >= self.values.len() {
            return Err(StructureError::InvalidIndex {
                index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    /// Swap the values of two distinct nodes
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), StructureError> {
        let len = self.values.len();
        if i >= len {
            return Err(StructureError::InvalidIndex { index: i, len });
        }
        if j >= len {
            return Err(StructureError::InvalidIndex { index: j, len });
        }
        if i == j {
            return Err(StructureError::IndicesEqual { index: i });
        }
        self.values.swap(i, j);
        Ok(())
    }

    /// Overwrite the value of the node at `index`, returning the old value
    pub fn replace(&mut self, index: usize, value: Value) -> Result<Value, StructureError> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(StructureError::InvalidIndex { index, len }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_remove_relink_neighbors() {
        let mut chain = Chain::from_values(ChainKind::Singly, vec![1, 3]);
        chain.insert_at(1, 2).unwrap();
        assert_eq!(chain.values(), &[1, 2, 3]);
        assert_eq!(chain.remove_at(0), Ok(1));
        assert_eq!(chain.values(), &[2, 3]);
    }

    #[test]
    fn empty_list_removal_fails() {
        let mut chain = Chain::new(ChainKind::Doubly);
        assert_eq!(
            chain.remove_at(0),
            Err(StructureError::EmptyStructure { structure: "List" })
        );
    }
}
