//! Snapshot coverage for the decoded event's on-the-wire JSON shape —
//! the one piece of output downstream consumers depend on byte-exactly.

use sfj_decoder::JournalDecoder;
use sfj_wire::varint::encode_varint;

fn varint(v: u64) -> Vec<u8> {
    let mut buf = [0u8; 10];
    let len = encode_varint(v, &mut buf);
    buf[..len].to_vec()
}

fn lp(bytes: &[u8]) -> Vec<u8> {
    let mut out = varint(bytes.len() as u64);
    out.extend_from_slice(bytes);
    out
}

#[test]
fn decoded_event_json_shape() {
    let mut journal = Vec::new();
    journal.push(0x03);
    journal.extend(lp(b"hostA"));
    journal.push(0x04);
    journal.extend(lp(b"src/1"));
    journal.push(0x05);
    journal.extend(lp(b"st_1"));
    journal.push(0x11);
    journal.extend(varint(0));
    journal.push(0x12);
    journal.extend(varint(0));
    journal.push(0x13);
    journal.extend(varint(0));
    journal.push(0x14);
    journal.extend(varint(10_000_000));
    journal.push(0x20);
    let mut body = vec![0x00];
    body.extend(varint(0));
    body.extend(varint(0));
    body.extend(varint(5));
    body.extend(varint(0));
    body.extend_from_slice(b"hello");
    journal.extend(varint(body.len() as u64));
    journal.extend(body);

    let mut decoder = JournalDecoder::new(std::io::Cursor::new(journal));
    let event = decoder.next_event().unwrap().unwrap();
    let json = serde_json::to_string_pretty(&event).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "host": "hostA",
      "source": "src/1",
      "sourcetype": "st_1",
      "index_time": 10000005,
      "message": "hello",
      "stream_id": 0,
      "stream_offset": 0
    }
    "#);
}
