#![no_main]

use libfuzzer_sys::fuzz_target;

use seq_algos::containers::ForwardList;
use seq_algos::distance::distance;
use seq_algos::Sequence;
use seq_algos_fuzz::{split_target, to_list, u8_as_i32, Target};

fuzz_target!(|data: &[u8]| {
    let Some((target, data)) = split_target(data) else {
        return;
    };

    let v = u8_as_i32(data);
    let pred = |x: &i32| x % 3 == 0;
    let (expected_true, expected_false): (Vec<i32>, Vec<i32>) = v.iter().partition(|x| pred(x));

    // Unstable partition, only the multiset of each side is fixed.
    let mut unstable = v.clone();
    let boundary = match target {
        Target::Slice => {
            let len = unstable.len();
            seq_algos::partition::partition(unstable.as_mut_slice(), 0, len, pred)
        }
        Target::List => {
            let mut list = to_list(&unstable);
            let (first, last) = (list.begin(), list.end());
            let boundary = seq_algos::partition::partition(&mut list, first, last, pred);
            let boundary = distance(&list, &list.begin(), &boundary);
            unstable = list.iter().copied().collect();
            boundary
        }
    };

    assert_eq!(boundary, expected_true.len());
    assert!(unstable[..boundary].iter().all(pred));
    assert!(!unstable[boundary..].iter().any(pred));

    // Stable partition on the singly linked list, the exact order is fixed.
    let mut list: ForwardList<i32> = v.iter().copied().collect();
    let (first, last) = (list.begin(), list.end());
    seq_algos::partition::stable_partition(&mut list, first, last, pred);
    assert!(list
        .iter()
        .eq(expected_true.iter().chain(expected_false.iter())));
});
