//! Traced heap operations
//!
//! Heaps are stored as arrays but every frame snapshots the implicit-tree
//! view, so highlights address nodes by value.  Insert sifts up, remove
//! swaps the victim with the last element and sifts down, replace sifts up
//! first and only sifts down when no upward swap happened.
//!
//! Swap messages are formatted after the exchange, so the value named at
//! each index is the one sitting there once the step is shown.

use crate::structures::tree::{array_to_tree, Heap, HeapKind};
use crate::structures::Value;
use crate::trace::{ElementId, Snapshot, Trace};

fn heap_frame(trace: &mut Trace, items: &[Value], highlight: &[Value], explanation: String) {
    trace.frame(
        Snapshot::Tree(array_to_tree(items)),
        highlight.iter().map(|&v| ElementId::Key(v)).collect(),
        explanation,
    );
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Sift index `i` up to its place, one frame per swap.  Returns true when
/// at least one swap happened.  `suffix` tags the message (empty or
/// " (heapify up)").
fn sift_up_frames(
    trace: &mut Trace,
    arr: &mut [Value],
    kind: HeapKind,
    mut i: usize,
    suffix: &str,
) -> bool {
    let mut moved = false;
    while i > 0 {
        let p = parent(i);
        if !kind.outranks(arr[i], arr[p]) {
            break;
        }
        arr.swap(i, p);
        heap_frame(
            trace,
            arr,
            &[arr[p], arr[i]],
            format!(
                "Step: Swap {} (index {}) with parent {} (index {}) to maintain heap property{}.",
                arr[i], i, arr[p], p, suffix
            ),
        );
        i = p;
        moved = true;
    }
    moved
}

/// Sift index `i` down to its place, one frame per swap
fn sift_down_frames(trace: &mut Trace, arr: &mut [Value], kind: HeapKind, mut i: usize, suffix: &str) {
    let n = arr.len();
    loop {
        let l = 2 * i + 1;
        let r = 2 * i + 2;
        let mut swap_idx = i;
        if l < n && kind.outranks(arr[l], arr[swap_idx]) {
            swap_idx = l;
        }
        if r < n && kind.outranks(arr[r], arr[swap_idx]) {
            swap_idx = r;
        }
        if swap_idx == i {
            break;
        }
        arr.swap(i, swap_idx);
        heap_frame(
            trace,
            arr,
            &[arr[i], arr[swap_idx]],
            format!(
                "Step: Swap {} (index {}) with {} (index {}) to maintain heap property{}.",
                arr[swap_idx], swap_idx, arr[i], i, suffix
            ),
        );
        i = swap_idx;
    }
}

/// Insert `value` at the end and sift it up; duplicates are a one-frame
/// non-event
pub fn insert(heap: &Heap, value: Value) -> (Trace, Heap) {
    let kind = heap.kind();
    if heap.contains(value) {
        let trace = Trace::single(
            Snapshot::Tree(heap.to_tree()),
            vec![ElementId::Key(value)],
            &format!("Value {} already exists in the heap.", value),
        );
        return (trace, heap.clone());
    }
    let mut trace = Trace::new();
    let mut arr = heap.items().to_vec();
    arr.push(value);
    let idx = arr.len() - 1;
    heap_frame(
        &mut trace,
        &arr,
        &[value],
        format!("Step 1: Insert {} at the end (index {}).", value, idx),
    );
    sift_up_frames(&mut trace, &mut arr, kind, idx, "");
    heap_frame(
        &mut trace,
        &arr,
        &[value],
        format!("Done: {} added and heap property restored.", value),
    );
    (trace, Heap::from_array(kind, arr))
}

/// Remove the first occurrence of `value` by swapping it with the last
/// element and sifting down; absent values are a one-frame non-event
pub fn remove(heap: &Heap, value: Value) -> (Trace, Heap) {
    let kind = heap.kind();
    let Some(idx) = heap.position(value) else {
        let trace = Trace::single(
            Snapshot::Tree(heap.to_tree()),
            vec![],
            &format!("Value {} not found in the heap.", value),
        );
        return (trace, heap.clone());
    };
    let mut trace = Trace::new();
    let mut arr = heap.items().to_vec();
    let last = arr.len() - 1;
    arr.swap(idx, last);
    arr.pop();
    heap_frame(
        &mut trace,
        &arr,
        &[],
        format!("Step 1: Swap {} (index {}) with last element and remove it.", value, idx),
    );
    if idx < arr.len() {
        sift_down_frames(&mut trace, &mut arr, kind, idx, "");
    }
    heap_frame(
        &mut trace,
        &arr,
        &[],
        format!("Done: {} removed and heap property restored.", value),
    );
    (trace, Heap::from_array(kind, arr))
}

/// Overwrite `old` with `new` in place, then repair: sift up first, sift
/// down only if nothing moved up.  Missing `old` is a one-frame non-event.
pub fn replace(heap: &Heap, old: Value, new: Value) -> (Trace, Heap) {
    let kind = heap.kind();
    let Some(idx) = heap.position(old) else {
        let trace = Trace::single(
            Snapshot::Tree(heap.to_tree()),
            vec![],
            &format!("Value {} not found in the heap.", old),
        );
        return (trace, heap.clone());
    };
    let mut trace = Trace::new();
    let mut arr = heap.items().to_vec();
    arr[idx] = new;
    heap_frame(
        &mut trace,
        &arr,
        &[new],
        format!("Step 1: Replace {} with {} at index {}.", old, new, idx),
    );
    let moved_up = sift_up_frames(&mut trace, &mut arr, kind, idx, " (heapify up)");
    if !moved_up {
        sift_down_frames(&mut trace, &mut arr, kind, idx, " (heapify down)");
    }
    heap_frame(
        &mut trace,
        &arr,
        &[new],
        format!("Done: {} replaced with {} and heap property restored.", old, new),
    );
    (trace, Heap::from_array(kind, arr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_heap_insert_sifts_to_root() {
        let heap = Heap::from_values(HeapKind::Min, &[10, 20, 30]);
        let (trace, result) = insert(&heap, 5);
        assert!(result.is_valid());
        assert_eq!(result.items()[0], 5);
        assert_eq!(
            trace.final_frame().unwrap().explanation,
            "Done: 5 added and heap property restored."
        );
    }

    #[test]
    fn max_heap_insert_keeps_larger_root() {
        let heap = Heap::from_values(HeapKind::Max, &[50, 20, 30]);
        let (_, result) = insert(&heap, 40);
        assert!(result.is_valid());
        assert_eq!(result.items()[0], 50);
    }

    #[test]
    fn remove_root_sifts_replacement_down() {
        let heap = Heap::from_values(HeapKind::Min, &[1, 5, 3, 9, 7]);
        let (trace, result) = remove(&heap, 1);
        assert!(result.is_valid());
        assert_eq!(result.len(), 4);
        assert!(!result.contains(1));
        assert_eq!(
            trace.frames().next().unwrap().explanation,
            "Step 1: Swap 1 (index 0) with last element and remove it."
        );
    }

    #[test]
    fn duplicate_insert_is_one_frame_noop() {
        let heap = Heap::from_values(HeapKind::Min, &[10, 20, 30]);
        let (trace, result) = insert(&heap, 20);
        assert_eq!(trace.len(), 1);
        assert_eq!(result.items(), heap.items());
        assert_eq!(
            trace.final_frame().unwrap().explanation,
            "Value 20 already exists in the heap."
        );
    }

    #[test]
    fn remove_missing_is_one_frame_noop() {
        let heap = Heap::from_values(HeapKind::Min, &[1, 5, 3]);
        let (trace, result) = remove(&heap, 42);
        assert_eq!(trace.len(), 1);
        assert_eq!(result.items(), heap.items());
        assert_eq!(
            trace.final_frame().unwrap().explanation,
            "Value 42 not found in the heap."
        );
    }

    #[test]
    fn remove_last_element_needs_no_sift() {
        let heap = Heap::from_array(HeapKind::Min, vec![1, 5, 3]);
        let (trace, result) = remove(&heap, 3);
        assert!(result.is_valid());
        assert_eq!(result.items(), &[1, 5]);
        // swap-and-pop frame plus the done frame
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn replace_prefers_sift_up() {
        let heap = Heap::from_values(HeapKind::Min, &[1, 5, 3, 9, 7]);
        let (trace, result) = replace(&heap, 9, 0);
        assert!(result.is_valid());
        assert_eq!(result.items()[0], 0);
        assert!(trace
            .frames()
            .any(|f| f.explanation.contains("(heapify up).")));
        assert!(!trace
            .frames()
            .any(|f| f.explanation.contains("(heapify down).")));
    }

    #[test]
    fn replace_falls_back_to_sift_down() {
        let heap = Heap::from_values(HeapKind::Min, &[1, 5, 3, 9, 7]);
        let (trace, result) = replace(&heap, 1, 100);
        assert!(result.is_valid());
        assert!(trace
            .frames()
            .any(|f| f.explanation.contains("(heapify down).")));
    }
}
