use std::io::{self, Write};

use sfj_decoder::DecodedEvent;

/// Writes one JSON object per line, matching the output contract's
/// exact field names (`host`, `source`, `sourcetype`, `index_time`,
/// `message`, `stream_id`, `stream_offset`) via `DecodedEvent`'s own
/// `Serialize` derive — no hand-rolled JSON assembly.
pub struct JsonlSink<W: Write> {
    inner: W,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_event(&mut self, event: &DecodedEvent) -> io::Result<()> {
        serde_json::to_writer(&mut self.inner, event)?;
        self.inner.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_json_object_per_line() {
        let mut buf = Vec::new();
        {
            let mut sink = JsonlSink::new(&mut buf);
            sink.write_event(&DecodedEvent {
                host: "web01".to_string(),
                source: "/var/log/app.log".to_string(),
                sourcetype: "app_log".to_string(),
                index_time: 1_700_000_005,
                message: "hello".to_string(),
                stream_id: 1,
                stream_offset: 0,
            })
            .unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["host"], "web01");
        assert_eq!(parsed["index_time"], 1_700_000_005);
        assert_eq!(parsed["stream_offset"], 0);
    }
}
