#![no_main]

use libfuzzer_sys::fuzz_target;
use sfj_decoder::JournalDecoder;

// Fuzz target: a whole journal, uncompressed, end to end through the
// public iterator entry point. Catches bugs anywhere across the opcode
// dispatcher, event parser, and their interaction (e.g. state left
// inconsistent by a partially-applied opcode).
fuzz_target!(|data: &[u8]| {
    for result in JournalDecoder::new(data) {
        if result.is_err() {
            break;
        }
    }
});
