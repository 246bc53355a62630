#![no_main]

use libfuzzer_sys::fuzz_target;

use seq_algos::Sequence;
use seq_algos_fuzz::{split_target, to_list, u8_as_i32, Target};

fuzz_target!(|data: &[u8]| {
    let Some((target, data)) = split_target(data) else {
        return;
    };

    let mut expected = u8_as_i32(data);
    let mut v = expected.clone();
    expected.sort_unstable();

    match target {
        Target::Slice => {
            let len = v.len();
            seq_algos::sort::quick_sort(v.as_mut_slice(), 0, len);
            assert_eq!(v, expected);
        }
        Target::List => {
            let mut list = to_list(&v);
            let (first, last) = (list.begin(), list.end());
            seq_algos::sort::quick_sort(&mut list, first, last);
            assert!(list.iter().eq(expected.iter()));
        }
    }
});
