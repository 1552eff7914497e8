/// Mutable state accumulated while decoding one journal.
///
/// `hosts`, `sources`, and `sourcetypes` are append-only dictionaries —
/// entries are never removed or rewritten once a `NewString` opcode adds
/// them, so an index handed out by `SetActive` stays valid for the rest
/// of the journal. A fresh `DecoderState` is created at the start of
/// every journal and discarded at the end; nothing here persists across
/// journal boundaries.
#[derive(Debug, Default)]
pub struct DecoderState {
    pub hosts: Vec<String>,
    pub sources: Vec<String>,
    pub sourcetypes: Vec<String>,
    pub active_host_idx: Option<usize>,
    pub active_source_idx: Option<usize>,
    pub active_sourcetype_idx: Option<usize>,
    pub base_time: Option<u64>,
}

impl DecoderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_host(&self) -> Option<&str> {
        self.active_host_idx.and_then(|i| self.hosts.get(i)).map(String::as_str)
    }

    pub fn active_source(&self) -> Option<&str> {
        self.active_source_idx.and_then(|i| self.sources.get(i)).map(String::as_str)
    }

    pub fn active_sourcetype(&self) -> Option<&str> {
        self.active_sourcetype_idx
            .and_then(|i| self.sourcetypes.get(i))
            .map(String::as_str)
    }
}
