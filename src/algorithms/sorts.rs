//! Traced sorting algorithms
//!
//! Each sort narrates every comparison and move.  Merge sort breaks ties in
//! favor of the left half; quicksort partitions around the last element and
//! recurses on `[l, i-1]` and `[i+1, r]`.  Inputs are small (≤ ~12
//! elements), so the recursive forms are kept.

use crate::structures::sequence::Sequence;
use crate::structures::Value;
use crate::trace::{ElementId, Snapshot, Trace};

/// Which sorting algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortKind {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "bubble" => Some(SortKind::Bubble),
            "selection" => Some(SortKind::Selection),
            "insertion" => Some(SortKind::Insertion),
            "merge" => Some(SortKind::Merge),
            "quick" => Some(SortKind::Quick),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Selection => "Selection Sort",
            SortKind::Insertion => "Insertion Sort",
            SortKind::Merge => "Merge Sort",
            SortKind::Quick => "Quick Sort",
        }
    }
}

/// Run the chosen sort over the sequence
pub fn sort(seq: &Sequence, kind: SortKind) -> (Trace, Sequence) {
    match kind {
        SortKind::Bubble => bubble(seq),
        SortKind::Selection => selection(seq),
        SortKind::Insertion => insertion(seq),
        SortKind::Merge => merge(seq),
        SortKind::Quick => quick(seq),
    }
}

fn frame(trace: &mut Trace, arr: &[Value], highlight: &[usize], explanation: String) {
    trace.frame(
        Snapshot::Sequence(arr.to_vec()),
        highlight.iter().map(|&i| ElementId::Index(i)).collect(),
        explanation,
    );
}

pub fn bubble(seq: &Sequence) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut arr = seq.items().to_vec();
    let n = arr.len();
    frame(
        &mut trace,
        &arr,
        &[],
        "Bubble Sort: We will repeatedly compare and swap adjacent elements if they are in the \
         wrong order. The largest value \"bubbles\" to the end each round."
            .to_string(),
    );
    for i in 0..n {
        for j in 0..n - i - 1 {
            frame(
                &mut trace,
                &arr,
                &[j, j + 1],
                format!(
                    "Compare elements at index {} and {}. If the left one is bigger, we swap them.",
                    j,
                    j + 1
                ),
            );
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                frame(
                    &mut trace,
                    &arr,
                    &[j, j + 1],
                    format!("Swap! Now {} is before {}.", arr[j], arr[j + 1]),
                );
            }
        }
        frame(
            &mut trace,
            &arr,
            &[n - i - 1],
            format!(
                "After this round, the largest unsorted value is at index {}.",
                n - i - 1
            ),
        );
    }
    frame(
        &mut trace,
        &arr,
        &[],
        "Bubble Sort is finished! The array is now sorted from smallest to largest.".to_string(),
    );
    (trace, Sequence::from_values(arr))
}

pub fn selection(seq: &Sequence) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut arr = seq.items().to_vec();
    let n = arr.len();
    frame(
        &mut trace,
        &arr,
        &[],
        "Selection Sort: We repeatedly find the smallest value in the unsorted part and move it \
         to its correct place."
            .to_string(),
    );
    for i in 0..n {
        let mut min_idx = i;
        frame(
            &mut trace,
            &arr,
            &[i],
            format!("Assume index {} is the smallest in the unsorted part.", i),
        );
        for j in i + 1..n {
            frame(
                &mut trace,
                &arr,
                &[min_idx, j],
                format!("Compare index {} (current smallest) with index {}.", min_idx, j),
            );
            if arr[j] < arr[min_idx] {
                min_idx = j;
                frame(
                    &mut trace,
                    &arr,
                    &[min_idx],
                    format!("Found a new smallest value at index {}.", min_idx),
                );
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
            frame(
                &mut trace,
                &arr,
                &[i, min_idx],
                format!("Swap the smallest value to index {}.", i),
            );
        }
        frame(&mut trace, &arr, &[i], format!("Index {} is now sorted.", i));
    }
    frame(
        &mut trace,
        &arr,
        &[],
        "Selection Sort is finished! The array is sorted.".to_string(),
    );
    (trace, Sequence::from_values(arr))
}

pub fn insertion(seq: &Sequence) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut arr = seq.items().to_vec();
    let n = arr.len();
    frame(
        &mut trace,
        &arr,
        &[],
        "Insertion Sort: We build the sorted array one value at a time by inserting each value \
         into its correct position."
            .to_string(),
    );
    for i in 1..n {
        let key = arr[i];
        let mut j = i as isize - 1;
        frame(
            &mut trace,
            &arr,
            &[i],
            format!("Pick value {} at index {} to insert into the sorted part.", key, i),
        );
        while j >= 0 && arr[j as usize] > key {
            arr[(j + 1) as usize] = arr[j as usize];
            frame(
                &mut trace,
                &arr,
                &[j as usize, (j + 1) as usize],
                format!("Shift value at index {} to {}.", j, j + 1),
            );
            j -= 1;
        }
        arr[(j + 1) as usize] = key;
        frame(
            &mut trace,
            &arr,
            &[(j + 1) as usize],
            format!("Insert key at index {}.", j + 1),
        );
        let sorted_prefix: Vec<usize> = (0..=i).collect();
        frame(
            &mut trace,
            &arr,
            &sorted_prefix,
            format!("First {} values are now sorted.", i + 1),
        );
    }
    frame(
        &mut trace,
        &arr,
        &[],
        "Insertion Sort is finished! The array is sorted.".to_string(),
    );
    (trace, Sequence::from_values(arr))
}

pub fn merge(seq: &Sequence) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut arr = seq.items().to_vec();
    frame(
        &mut trace,
        &arr,
        &[],
        "Merge Sort: We divide the array into halves, sort each half, and then merge them back \
         together in order."
            .to_string(),
    );
    fn merge_rec(arr: &mut Vec<Value>, l: usize, r: usize, trace: &mut Trace) {
        if l >= r {
            return;
        }
        let m = (l + r) / 2;
        merge_rec(arr, l, m, trace);
        merge_rec(arr, m + 1, r, trace);
        let left: Vec<Value> = arr[l..=m].to_vec();
        let right: Vec<Value> = arr[m + 1..=r].to_vec();
        let mut i = l;
        let mut li = 0;
        let mut ri = 0;
        while li < left.len() && ri < right.len() {
            frame(
                trace,
                arr,
                &[i],
                format!(
                    "Compare {} (left) and {} (right). Place the smaller one at index {}.",
                    left[li], right[ri], i
                ),
            );
            // tie-break favors the left half
            if left[li] <= right[ri] {
                arr[i] = left[li];
                li += 1;
            } else {
                arr[i] = right[ri];
                ri += 1;
            }
            frame(trace, arr, &[i], format!("Inserted value at index {}.", i));
            i += 1;
        }
        while li < left.len() {
            arr[i] = left[li];
            frame(
                trace,
                arr,
                &[i],
                format!("Insert remaining left value {} at index {}.", left[li], i),
            );
            li += 1;
            i += 1;
        }
        while ri < right.len() {
            arr[i] = right[ri];
            frame(
                trace,
                arr,
                &[i],
                format!("Insert remaining right value {} at index {}.", right[ri], i),
            );
            ri += 1;
            i += 1;
        }
    }
    let len = arr.len();
    if len > 1 {
        merge_rec(&mut arr, 0, len - 1, &mut trace);
    }
    frame(
        &mut trace,
        &arr,
        &[],
        "Merge Sort is finished! The array is sorted.".to_string(),
    );
    (trace, Sequence::from_values(arr))
}

pub fn quick(seq: &Sequence) -> (Trace, Sequence) {
    let mut trace = Trace::new();
    let mut arr = seq.items().to_vec();
    frame(
        &mut trace,
        &arr,
        &[],
        "Quick Sort: We pick a pivot value and move all smaller values to the left and larger to \
         the right, then sort each part recursively."
            .to_string(),
    );
    fn quick_rec(arr: &mut Vec<Value>, l: usize, r: usize, trace: &mut Trace) {
        if l >= r {
            return;
        }
        let pivot = arr[r];
        frame(
            trace,
            arr,
            &[r],
            format!("Choose pivot {} at index {}.", pivot, r),
        );
        let mut i = l;
        for j in l..r {
            frame(
                trace,
                arr,
                &[j, r],
                format!("Compare {} at index {} with pivot {}.", arr[j], j, pivot),
            );
            if arr[j] < pivot {
                arr.swap(i, j);
                frame(
                    trace,
                    arr,
                    &[i, j],
                    format!(
                        "Swap {} and {} so smaller values are on the left.",
                        arr[i], arr[j]
                    ),
                );
                i += 1;
            }
        }
        arr.swap(i, r);
        frame(
            trace,
            arr,
            &[i, r],
            format!("Place pivot {} at its correct position at index {}.", pivot, i),
        );
        if i > l {
            quick_rec(arr, l, i - 1, trace);
        }
        if i + 1 < r {
            quick_rec(arr, i + 1, r, trace);
        }
    }
    let len = arr.len();
    if len > 1 {
        quick_rec(&mut arr, 0, len - 1, &mut trace);
    }
    frame(
        &mut trace,
        &arr,
        &[],
        "Quick Sort is finished! The array is sorted.".to_string(),
    );
    (trace, Sequence::from_values(arr))
}
