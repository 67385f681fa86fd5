//! Smoke tests for the facade re-exports.

use tasrec::prelude::*;
use tasrec_test_utils::sample_recording;

#[test]
fn prelude_covers_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level01.rec");
    let rec = sample_recording(8, 1);

    save_recording(&path, &rec).unwrap();
    let loaded = load_recording(&path).unwrap();
    assert_eq!(compare_recordings(&rec, &loaded), None);
}

#[test]
fn module_paths_resolve() {
    let rec = tasrec::types::Recording::default();
    let text = tasrec::codec::to_text(&rec);
    assert_eq!(text.lines().count(), tasrec::codec::HEADER_LINES);
    assert_eq!(
        tasrec::codec::recording_hash(&rec),
        tasrec::codec::recording_hash(&from_text(&text).unwrap())
    );
}

#[test]
fn streaming_through_prelude() {
    let rec = sample_recording(3, 0);
    let mut writer = RecordingWriter::new(Vec::new(), &rec.header()).unwrap();
    for frame in &rec.frames {
        writer.write_frame(frame).unwrap();
    }
    let bytes = writer.finish().unwrap();

    let reader = RecordingReader::open_with(bytes.as_slice(), DecodeConfig::default()).unwrap();
    assert_eq!(reader.into_recording().unwrap(), rec);
}
