#![no_main]
use libfuzzer_sys::fuzz_target;

use splitex::{evaluate, parse, SplitEx};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse::<f64>(s);
        let _ = SplitEx::<f32>::parse(s);
        let _ = evaluate(s);
    }
});
