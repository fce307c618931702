#![no_main]
use huffman::{Bit, HuffmanCodec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<bool>)| {
    let (input, digits) = data;

    if input.is_empty() {
        return;
    }

    let codec = match HuffmanCodec::from_symbols(input.iter().copied()) {
        Ok(codec) => codec,
        Err(_) => return,
    };

    let bits = codec.encode(&input).unwrap();
    assert_eq!(codec.decode(&bits).unwrap(), input);

    // Arbitrary digit strings must fail cleanly, never panic.
    let digits: Vec<Bit> = digits.into_iter().map(Bit::from).collect();
    let _ = codec.decode(&digits);
});
