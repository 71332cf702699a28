//! Traced linked-list operations
//!
//! Pointer relinks are narrated against the arena-form chain: a head
//! insert shows the new head taking over, a middle remove shows the
//! predecessor's pointer skipping the unlinked node.  Swaps exchange node
//! values through a temp register with a scratch slot, like the sequence
//! swap.

use crate::structures::chain::{Chain, ChainKind};
use crate::structures::Value;
use crate::trace::{ElementId, Snapshot, Trace};

fn chain_frame(
    trace: &mut Trace,
    values: &[Value],
    kind: ChainKind,
    highlight: &[usize],
    explanation: String,
) {
    trace.frame(
        Snapshot::Chain {
            values: values.to_vec(),
            kind,
        },
        highlight.iter().map(|&i| ElementId::Index(i)).collect(),
        explanation,
    );
}

/// Append a node at the tail
pub fn add(chain: &Chain, value: Value) -> (Trace, Chain) {
    let mut trace = Trace::new();
    let kind = chain.kind();
    let mut work = chain.values().to_vec();
    chain_frame(&mut trace, &work, kind, &[], "Step 1: Current list.".to_string());
    work.push(value);
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[work.len() - 1],
        format!("Step 2: Create new node with value {} and link it at the end.", value),
    );
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[],
        "Step 3: Done. List after insertion.".to_string(),
    );
    (trace, Chain::from_values(kind, work))
}

/// Relink a new node in at `index`
pub fn insert_at(chain: &Chain, index: usize, value: Value) -> (Trace, Chain) {
    let mut trace = Trace::new();
    let kind = chain.kind();
    let mut work = chain.values().to_vec();
    // the slot at index == len exists only after the insert
    let target: Vec<usize> = if index < work.len() { vec![index] } else { Vec::new() };
    if index == 0 {
        chain_frame(
            &mut trace,
            &work,
            kind,
            &target,
            "Step 1: Highlight position for new head node.".to_string(),
        );
    } else {
        chain_frame(
            &mut trace,
            &work,
            kind,
            &target,
            format!("Step 1: Highlight index {} for insertion.", index),
        );
    }
    work.insert(index, value);
    if index == 0 {
        chain_frame(
            &mut trace,
            &work,
            kind,
            &[0],
            format!("Step 2: Create new node with value {} and make it the new head.", value),
        );
    } else {
        chain_frame(
            &mut trace,
            &work,
            kind,
            &[index],
            format!("Step 2: Create new node with value {} and update pointers.", value),
        );
    }
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[],
        "Step 3: Done. List after insertion.".to_string(),
    );
    (trace, Chain::from_values(kind, work))
}

/// Unlink the node at `index`
pub fn remove_at(chain: &Chain, index: usize) -> (Trace, Chain) {
    let mut trace = Trace::new();
    let kind = chain.kind();
    let mut work = chain.values().to_vec();
    if index == 0 {
        chain_frame(
            &mut trace,
            &work,
            kind,
            &[0],
            "Step 1: Highlight head node to remove.".to_string(),
        );
    } else {
        chain_frame(
            &mut trace,
            &work,
            kind,
            &[index],
            format!("Step 1: Highlight node {} to remove.", index),
        );
    }
    work.remove(index);
    if index == 0 {
        if work.is_empty() {
            chain_frame(
                &mut trace,
                &work,
                kind,
                &[],
                "Step 2: List becomes empty (no head).".to_string(),
            );
        } else {
            chain_frame(
                &mut trace,
                &work,
                kind,
                &[0],
                "Step 2: Update head pointer to next node.".to_string(),
            );
        }
    } else {
        chain_frame(
            &mut trace,
            &work,
            kind,
            &[index - 1],
            format!("Step 2: Update pointer to skip node {}.", index),
        );
    }
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[],
        "Step 3: Done. List after removal.".to_string(),
    );
    (trace, Chain::from_values(kind, work))
}

/// Swap the values of two nodes through a temp register
pub fn swap(chain: &Chain, i: usize, j: usize) -> (Trace, Chain) {
    let mut trace = Trace::new();
    let kind = chain.kind();
    let mut work = chain.values().to_vec();
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[i, j],
        format!("Step 1: Highlight indices {} and {} to swap.", i, j),
    );
    let temp = work[i];
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[i],
        format!("Step 2: Store value {} from index {} in temp variable.", temp, i),
    );
    work[i] = work[j];
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[i, j],
        format!("Step 3: Assign value from index {} ({}) to index {}.", j, work[j], i),
    );
    work[j] = temp;
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[j],
        format!("Step 4: Assign temp value ({}) to index {}.", work[j], j),
    );
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[],
        "Step 5: Done. List after swap.".to_string(),
    );
    trace.set_scratch(temp, 1..4);
    (trace, Chain::from_values(kind, work))
}

/// Overwrite the value of the node at `index`
pub fn replace(chain: &Chain, index: usize, value: Value) -> (Trace, Chain) {
    let mut trace = Trace::new();
    let kind = chain.kind();
    let mut work = chain.values().to_vec();
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[index],
        format!("Step 1: Highlight index {} to replace value.", index),
    );
    let old = work[index];
    work[index] = value;
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[index],
        format!("Step 2: Replace value {} with {} at index {}.", old, value, index),
    );
    chain_frame(
        &mut trace,
        &work,
        kind,
        &[],
        "Step 3: Done. List after replacement.".to_string(),
    );
    (trace, Chain::from_values(kind, work))
}
