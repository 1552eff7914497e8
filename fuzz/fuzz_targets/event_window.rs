#![no_main]

use libfuzzer_sys::fuzz_target;
use sfj_decoder::event::parse_event;
use sfj_decoder::DecoderState;

// Fuzz target: the event parser against an arbitrary already-framed
// window, with a populated decoder state so metadata overrides and
// index_time_delta resolution are exercised. Catches bugs in:
// - extended-header skipping
// - metadata block parsing
// - window-truncation-to-Malformed mapping
// - UTF-8-lossy message decoding
fuzz_target!(|data: &[u8]| {
    let mut state = DecoderState::new();
    state.hosts.push("fuzz-host".to_string());
    state.sources.push("fuzz-source".to_string());
    state.sourcetypes.push("fuzz-sourcetype".to_string());
    state.active_host_idx = Some(0);
    state.active_source_idx = Some(0);
    state.active_sourcetype_idx = Some(0);
    state.base_time = Some(1_700_000_000);

    let _ = parse_event(data, &state);
});
