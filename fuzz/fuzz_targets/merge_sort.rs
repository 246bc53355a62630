#![no_main]

use libfuzzer_sys::fuzz_target;

use seq_algos::containers::List;
use seq_algos::Sequence;
use seq_algos_fuzz::{split_target, u8_as_i32, Target};

fuzz_target!(|data: &[u8]| {
    let Some((target, data)) = split_target(data) else {
        return;
    };

    // Sort by the low byte only, so the original index reveals stability violations.
    let mut expected: Vec<(i32, usize)> = u8_as_i32(data)
        .into_iter()
        .map(|val| val & 0xFF)
        .enumerate()
        .map(|(idx, val)| (val, idx))
        .collect();
    let v = expected.clone();
    expected.sort_by_key(|(val, _)| *val);

    let is_less = |a: &(i32, usize), b: &(i32, usize)| a.0 < b.0;

    match target {
        Target::Slice => {
            let mut v = v;
            let len = v.len();
            seq_algos::sort::merge_sort_by(v.as_mut_slice(), 0, len, is_less);
            assert_eq!(v, expected);
        }
        Target::List => {
            let mut list: List<(i32, usize)> = v.into_iter().collect();
            let (first, last) = (list.begin(), list.end());
            seq_algos::sort::merge_sort_by(&mut list, first, last, is_less);
            assert!(list.iter().eq(expected.iter()));
        }
    }
});
