//! Rotation of a range in place, by swapping only.

use crate::traversal::SequenceMut;

/// Rotates `[first, last)` to the left so that the element at `new_first` becomes the first
/// element. Returns the new position of the element that was at `first`.
///
/// Swap walk: a write cursor trails a read cursor, whenever the read cursor runs off the end it
/// wraps back to the current rotation boundary, and whenever the write cursor reaches the boundary
/// the boundary moves up to the read cursor. Only forward steps are needed, so this works on every
/// tier.
pub fn rotate<S>(
    seq: &mut S,
    first: S::Position,
    new_first: S::Position,
    last: S::Position,
) -> S::Position
where
    S: SequenceMut + ?Sized,
{
    if first == new_first {
        return last;
    }
    if new_first == last {
        return first;
    }

    let mut write = first;
    let mut read = new_first.clone();
    let mut boundary = new_first;

    // Until `read` first reaches `last`, `write` can't catch up with it. When it does, `write` has
    // moved exactly `distance(new_first, last)` steps, which is where the old first element ends
    // up.
    loop {
        seq.swap_at(&write, &read);
        seq.increment(&mut write);
        seq.increment(&mut read);

        if read == last {
            break;
        }
        if write == boundary {
            boundary = read.clone();
        }
    }

    let result = write.clone();
    read = boundary.clone();

    while write != read {
        seq.swap_at(&write, &read);
        seq.increment(&mut write);
        seq.increment(&mut read);

        if read == last {
            read = boundary.clone();
        } else if write == boundary {
            boundary = read.clone();
        }
    }

    result
}

/// Rotates `v` to the left by `mid` places and returns the new index of the old first element.
///
/// Panics if `mid > v.len()`.
pub fn rotate_slice<T>(v: &mut [T], mid: usize) -> usize {
    let len = v.len();
    assert!(mid <= len, "rotation point {mid} out of range for slice of length {len}");

    rotate(v, 0, mid, len)
}
