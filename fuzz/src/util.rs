use seq_algos::containers::List;

/// Reinterprets the fuzzer input as little endian `i32` values, trailing bytes are ignored.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// The first input byte selects the sequence the fuzzed algorithm runs on.
pub enum Target {
    Slice,
    List,
}

pub fn split_target(data: &[u8]) -> Option<(Target, &[u8])> {
    let (selector, rest) = data.split_first()?;
    let target = if selector % 2 == 0 {
        Target::Slice
    } else {
        Target::List
    };

    Some((target, rest))
}

pub fn to_list(v: &[i32]) -> List<i32> {
    v.iter().copied().collect()
}
