use crate::domain::model::ReverseMode;

/// Returns the elements of `sequence` in reverse order, consuming it.
pub fn reverse<T>(mut sequence: Vec<T>) -> Vec<T> {
    sequence.reverse();
    sequence
}

/// Reversed copy of `sequence`; the input is left as it was.
pub fn reverse_copy<T: Clone>(sequence: &[T]) -> Vec<T> {
    sequence.iter().rev().cloned().collect()
}

/// Pops from the back of `sequence` into a new vector until the input is
/// empty. The caller's vector is left empty.
pub fn drain_reversed<T>(sequence: &mut Vec<T>) -> Vec<T> {
    let mut reversed = Vec::with_capacity(sequence.len());
    while let Some(item) = sequence.pop() {
        reversed.push(item);
    }
    reversed
}

pub fn reverse_with<T: Clone>(mode: ReverseMode, sequence: &mut Vec<T>) -> Vec<T> {
    match mode {
        ReverseMode::InPlace => drain_reversed(sequence),
        ReverseMode::Copy => reverse_copy(sequence),
    }
}
