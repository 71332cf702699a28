//! Traced array, stack and queue operations
//!
//! Each operation is bracketed by a "before" and "done" frame and emits one
//! frame per element moved.  Swaps designate a scratch slot covering the
//! store/assign/restore steps so the renderer can show the temp register.

use crate::structures::sequence::Sequence;
use crate::structures::Value;
use crate::trace::{ElementId, Snapshot, Trace};

fn seq_frame(trace: &mut Trace, items: &[Value], highlight: &[usize], explanation: String) {
    trace.frame(
        Snapshot::Sequence(items.to_vec()),
        highlight.iter().map(|&i| ElementId::Index(i)).collect(),
        explanation,
    );
}

/// Append a value at the end of the array
pub fn add(seq: &Sequence, value: Value) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut arr = seq.items().to_vec();
    seq_frame(&mut trace, &arr, &[], "Step 1: Current array.".to_string());
    arr.push(value);
    seq_frame(
        &mut trace,
        &arr,
        &[arr.len() - 1],
        format!("Step 2: Add {} to the end.", value),
    );
    seq_frame(
        &mut trace,
        &arr,
        &[],
        format!("Step 3: Done. Array after adding {}.", value),
    );
    (trace, Sequence::from_values(arr))
}

/// Insert at `index`, shifting elements right one at a time
pub fn insert_at(seq: &Sequence, index: usize, value: Value) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let arr = seq.items().to_vec();
    // the slot at index == len exists only after the insert
    let target: Vec<usize> = if index < arr.len() { vec![index] } else { Vec::new() };
    seq_frame(
        &mut trace,
        &arr,
        &target,
        format!("Step 1: Highlight index {} for insertion.", index),
    );
    let mut work = arr.clone();
    work.push(0);
    seq_frame(
        &mut trace,
        &work,
        &[work.len() - 1],
        "Step 2: Create space at the end for shifting.".to_string(),
    );
    for i in (index + 1..=arr.len()).rev() {
        work[i] = work[i - 1];
        let step = trace.len() + 1;
        seq_frame(
            &mut trace,
            &work,
            &[i],
            format!(
                "Step {}: Shift value {} from index {} to {}.",
                step,
                work[i],
                i - 1,
                i
            ),
        );
    }
    work[index] = value;
    let step = trace.len() + 1;
    seq_frame(
        &mut trace,
        &work,
        &[index],
        format!("Step {}: Insert {} at index {}.", step, value, index),
    );
    let step = trace.len() + 1;
    seq_frame(
        &mut trace,
        &work,
        &[],
        format!("Step {}: Done. Array after insertion.", step),
    );
    (trace, Sequence::from_values(work))
}

/// Remove at `index`, shifting elements left one at a time
pub fn remove_at(seq: &Sequence, index: usize) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut work = seq.items().to_vec();
    seq_frame(
        &mut trace,
        &work,
        &[index],
        format!("Step 1: Highlight index {} to remove ({}).", index, work[index]),
    );
    for i in index..work.len() - 1 {
        work[i] = work[i + 1];
        let step = trace.len() + 1;
        seq_frame(
            &mut trace,
            &work,
            &[i],
            format!("Step {}: Move value {} from index {} to {}.", step, work[i], i + 1, i),
        );
    }
    work.pop();
    let step = trace.len() + 1;
    seq_frame(
        &mut trace,
        &work,
        &[],
        format!("Step {}: Remove last element (array shrinks).", step),
    );
    let step = trace.len() + 1;
    seq_frame(
        &mut trace,
        &work,
        &[],
        format!("Step {}: Done. Array after removal.", step),
    );
    (trace, Sequence::from_values(work))
}

/// Swap two elements through a temp register; the scratch slot spans the
/// store/assign/restore steps.  `label` names the structure in the final
/// frame ("Array" or "Queue").
pub fn swap(seq: &Sequence, i: usize, j: usize, label: &str) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut work = seq.items().to_vec();
    seq_frame(
        &mut trace,
        &work,
        &[i, j],
        format!("Step 1: Highlight indices {} and {} to swap.", i, j),
    );
    let temp = work[i];
    seq_frame(
        &mut trace,
        &work,
        &[i],
        format!("Step 2: Store value {} from index {} in temp variable.", temp, i),
    );
    work[i] = work[j];
    seq_frame(
        &mut trace,
        &work,
        &[i, j],
        format!("Step 3: Assign value from index {} ({}) to index {}.", j, work[j], i),
    );
    work[j] = temp;
    seq_frame(
        &mut trace,
        &work,
        &[j],
        format!("Step 4: Assign temp value ({}) to index {}.", work[j], j),
    );
    seq_frame(
        &mut trace,
        &work,
        &[],
        format!("Step 5: Done. {} after swap.", label),
    );
    trace.set_scratch(temp, 1..4);
    (trace, Sequence::from_values(work))
}

/// Overwrite the value at `index`; `label` names the structure
pub fn replace(seq: &Sequence, index: usize, value: Value, label: &str) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut work = seq.items().to_vec();
    seq_frame(
        &mut trace,
        &work,
        &[index],
        format!("Step 1: Highlight index {} to replace value.", index),
    );
    let old = work[index];
    work[index] = value;
    seq_frame(
        &mut trace,
        &work,
        &[index],
        format!("Step 2: Replace value {} with {} at index {}.", old, value, index),
    );
    seq_frame(
        &mut trace,
        &work,
        &[],
        format!("Step 3: Done. {} after replacement.", label),
    );
    (trace, Sequence::from_values(work))
}

/// Push onto the top of the stack
pub fn push(seq: &Sequence, value: Value) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut work = seq.items().to_vec();
    seq_frame(&mut trace, &work, &[], "Step 1: Current stack.".to_string());
    work.push(value);
    seq_frame(
        &mut trace,
        &work,
        &[work.len() - 1],
        format!("Step 2: Push {} to the top of the stack.", value),
    );
    seq_frame(
        &mut trace,
        &work,
        &[],
        "Step 3: Done. Stack after push.".to_string(),
    );
    (trace, Sequence::from_values(work))
}

/// Pop the top of the stack
pub fn pop(seq: &Sequence) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut work = seq.items().to_vec();
    let top = work[work.len() - 1];
    seq_frame(
        &mut trace,
        &work,
        &[work.len() - 1],
        format!("Step 1: Highlight top value {} to pop.", top),
    );
    work.pop();
    seq_frame(
        &mut trace,
        &work,
        &[],
        "Step 2: Remove top value. Stack shrinks.".to_string(),
    );
    seq_frame(
        &mut trace,
        &work,
        &[],
        "Step 3: Done. Stack after pop.".to_string(),
    );
    (trace, Sequence::from_values(work))
}

/// Enqueue at the rear of the queue
pub fn enqueue(seq: &Sequence, value: Value) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut work = seq.items().to_vec();
    seq_frame(&mut trace, &work, &[], "Step 1: Current queue.".to_string());
    work.push(value);
    seq_frame(
        &mut trace,
        &work,
        &[work.len() - 1],
        format!("Step 2: Enqueue {} to the rear of the queue.", value),
    );
    seq_frame(
        &mut trace,
        &work,
        &[0],
        "Step 3: Front of the queue is at index 0.".to_string(),
    );
    seq_frame(
        &mut trace,
        &work,
        &[],
        "Step 4: Done. Queue after enqueue.".to_string(),
    );
    (trace, Sequence::from_values(work))
}

/// Dequeue the front of the queue
pub fn dequeue(seq: &Sequence) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let work = seq.items().to_vec();
    let front = work[0];
    seq_frame(
        &mut trace,
        &work,
        &[0],
        format!("Step 1: Highlight front value {} to dequeue.", front),
    );
    let rest = work[1..].to_vec();
    if rest.is_empty() {
        seq_frame(
            &mut trace,
            &rest,
            &[],
            "Step 2: Queue is now empty.".to_string(),
        );
    } else {
        seq_frame(
            &mut trace,
            &rest,
            &[0],
            "Step 2: Remove front value. New front is at index 0.".to_string(),
        );
    }
    seq_frame(
        &mut trace,
        &rest,
        &[],
        "Step 3: Done. Queue after dequeue.".to_string(),
    );
    (trace, Sequence::from_values(rest))
}
