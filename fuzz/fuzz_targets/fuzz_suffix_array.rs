#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sax::{SuffixArrayBuilder, SuffixArrayConfig};

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    key: Vec<u8>,
    cutoff: u8,
}

fuzz_target!(|input: Input| {
    let config = SuffixArrayConfig {
        insertion_cutoff: usize::from(input.cutoff).max(1),
        ..Default::default()
    };
    let Ok(builder) = SuffixArrayBuilder::new(config) else {
        return;
    };
    let sa = builder.build(input.text.clone());

    // Sorted, and every suffix exactly once
    let mut seen = vec![false; input.text.len()];
    for rank in 0..sa.len() {
        let offset = sa.offset_of(rank).unwrap();
        assert!(!seen[offset]);
        seen[offset] = true;
        if rank > 0 {
            assert!(sa.suffix_at(rank - 1).unwrap() < sa.suffix_at(rank).unwrap());
        }
    }

    let rank = sa.rank(&input.key);
    let smaller = (0..input.text.len())
        .filter(|&i| input.text[i..] < input.key[..])
        .count();
    assert_eq!(rank, smaller);
});
