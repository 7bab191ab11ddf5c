use std::io::{self, Cursor as IoCursor, Read, Write};

use crate::record::{Field, FieldType, RecordError, Struct, Value};

fn person() -> Struct {
	Struct::new(vec![
		Field::new("Name", FieldType::string(4), "Alex").expect("name field"),
		Field::new("Age", FieldType::Int8, 24).expect("age field"),
		Field::new("Weight", FieldType::Int8, 98).expect("weight field"),
	])
	.expect("struct builds")
}

fn mixed() -> Struct {
	Struct::new(vec![
		Field::new("Id", FieldType::UInt32, 0xDEAD_BEEF_u32).expect("id field"),
		Field::new("Delta", FieldType::Int16, -2).expect("delta field"),
		Field::new("Tag", FieldType::string(3), "ok").expect("tag field"),
		Field::new("Total", FieldType::Int64, i64::MIN).expect("total field"),
	])
	.expect("struct builds")
}

#[test]
fn person_writes_exact_wire_bytes() {
	let record = person();
	let mut out = Vec::<u8>::new();
	let written = record.write(&mut out).expect("write succeeds");

	assert_eq!(written, 6);
	assert_eq!(out, vec![0x41, 0x6C, 0x65, 0x78, 0x18, 0x62]);
}

#[test]
fn set_then_round_trip_on_fresh_stream() {
	let mut record = person();
	record.set("Age", 25).expect("age fits");

	let mut out = Vec::<u8>::new();
	record.write(&mut out).expect("write succeeds");

	let mut restored = person();
	restored.read(&mut IoCursor::new(out)).expect("read succeeds");
	assert_eq!(restored.get("Age").expect("age exists"), &Value::I64(25));
	assert_eq!(restored.values(), record.values());
}

#[test]
fn mixed_widths_round_trip() {
	let record = mixed();
	let bytes = record.to_bytes().expect("encodes");
	assert_eq!(bytes.len(), record.byte_width());
	assert_eq!(&bytes[..4], &[0xEF, 0xBE, 0xAD, 0xDE]);
	assert_eq!(&bytes[4..6], &[0xFE, 0xFF]);
	assert_eq!(&bytes[6..9], b"ok\0");

	let mut other = Struct::new(vec![
		Field::with_zero("Id", FieldType::UInt32).expect("id field"),
		Field::with_zero("Delta", FieldType::Int16).expect("delta field"),
		Field::with_zero("Tag", FieldType::string(3)).expect("tag field"),
		Field::with_zero("Total", FieldType::Int64).expect("total field"),
	])
	.expect("struct builds");
	other.read_from_slice(&bytes).expect("decodes");
	assert_eq!(other.values(), record.values());
}

#[test]
fn out_of_range_set_keeps_prior_value() {
	let mut record = person();
	let err = record.set("Age", 300).expect_err("300 does not fit int8");
	assert!(matches!(err, RecordError::ValueOutOfRange { .. }));
	assert_eq!(record.get("Age").expect("age exists"), &Value::I64(24));
}

#[test]
fn duplicate_names_are_rejected() {
	let err = Struct::new(vec![
		Field::new("Age", FieldType::Int8, 1).expect("field"),
		Field::new("Age", FieldType::Int16, 2).expect("field"),
	])
	.expect_err("duplicate name");
	assert!(matches!(err, RecordError::DuplicateFieldName { ref name } if name == "Age"));
}

#[test]
fn unknown_field_access_fails_without_side_effects() {
	let mut record = person();
	let before = record.values();

	let err = record.get("Height").expect_err("unknown field");
	assert!(matches!(err, RecordError::UnknownField { ref name } if name == "Height"));

	let err = record.set("Height", 180).expect_err("unknown field");
	assert!(matches!(err, RecordError::UnknownField { .. }));
	assert_eq!(record.values(), before);
}

#[test]
fn set_updates_only_named_field() {
	let mut record = person();
	record.set("Name", "Bo").expect("short name pads");
	assert_eq!(record.values(), vec![Value::from("Bo"), Value::I64(24), Value::I64(98)]);
	assert_eq!(record.to_bytes().expect("encodes"), vec![b'B', b'o', 0, 0, 24, 98]);
}

#[test]
fn short_stream_leaves_all_fields_unchanged() {
	let source = mixed();
	let bytes = source.to_bytes().expect("encodes");

	let mut record = mixed();
	record.set("Id", 1_u32).expect("fits");
	record.set("Delta", 5).expect("fits");
	let before = record.values();

	// Stream ends partway through the third field.
	let err = record.read(&mut IoCursor::new(&bytes[..7])).expect_err("short stream");
	assert!(matches!(err, RecordError::UnexpectedEof { need: 17, have: 7 }));
	assert_eq!(record.values(), before);
}

#[test]
fn decode_failure_in_late_field_leaves_earlier_fields_unchanged() {
	let mut record = Struct::new(vec![
		Field::new("Age", FieldType::Int8, 0).expect("field"),
		Field::new("Name", FieldType::string(5), "x").expect("field"),
	])
	.expect("struct builds");

	// Age decodes to 7 before Name hits invalid UTF-8; the staged age must not commit.
	let err = record.read(&mut IoCursor::new([7_u8, 0xFF, 0xFE, 0, 0, 0])).expect_err("invalid utf-8");
	assert!(err.is_decoding());
	assert_eq!(record.values(), vec![Value::I64(0), Value::from("x")]);
}

#[test]
fn decode_failure_in_first_field_commits_nothing() {
	let mut record = person();
	let before = record.values();

	let err = record.read(&mut IoCursor::new([0xFF_u8, 0xFF, 0xFF, 0xFF, 1, 2])).expect_err("invalid utf-8");
	assert!(matches!(err, RecordError::DecodeInvalidUtf8 { .. }));
	assert_eq!(record.values(), before);
}

#[test]
fn overflowing_total_width_is_rejected() {
	let half = FieldType::string(usize::MAX / 2 + 1);
	let err = Struct::new(vec![
		Field::with_zero("Head", half).expect("field"),
		Field::with_zero("Tail", half).expect("field"),
	])
	.expect_err("widths overflow usize");
	assert!(matches!(err, RecordError::RecordWidthOverflow { ref field } if field == "Tail"));
}

#[test]
fn huge_declared_width_reports_eof_instead_of_allocating() {
	let mut record = Struct::new(vec![Field::with_zero("Blob", FieldType::string(usize::MAX)).expect("field")])
		.expect("struct builds");
	assert_eq!(record.byte_width(), usize::MAX);

	let err = record.read(&mut io::empty()).expect_err("empty source");
	assert!(matches!(err, RecordError::UnexpectedEof { need: usize::MAX, have: 0 }));

	let err = record.read(&mut IoCursor::new(b"Alex\x18b")).expect_err("short source");
	assert!(matches!(err, RecordError::UnexpectedEof { need: usize::MAX, have: 6 }));
	assert_eq!(record.get("Blob").expect("blob exists"), &Value::from(""));
}

#[test]
fn read_consumes_exactly_the_record_width() {
	let mut stream = Vec::<u8>::new();
	let mut first = person();
	first.write(&mut stream).expect("write succeeds");
	first.set("Name", "Max").expect("fits");
	first.set("Weight", -3).expect("fits");
	first.write(&mut stream).expect("write succeeds");

	let mut source = IoCursor::new(stream);
	let mut record = person();
	record.read(&mut source).expect("first record");
	assert_eq!(record.get("Name").expect("name exists"), &Value::from("Alex"));
	record.read(&mut source).expect("second record");
	assert_eq!(record.get("Name").expect("name exists"), &Value::from("Max"));
	assert_eq!(record.get("Weight").expect("weight exists"), &Value::I64(-3));
	assert_eq!(source.position(), 12);
}

#[test]
fn read_from_slice_requires_exact_length() {
	let mut record = person();
	let err = record.read_from_slice(&[0; 5]).expect_err("short");
	assert!(matches!(err, RecordError::UnexpectedEof { need: 6, have: 5 }));

	let err = record.read_from_slice(&[0; 7]).expect_err("long");
	assert!(matches!(err, RecordError::TrailingBytes { expected: 6, got: 7 }));
}

#[test]
fn layout_reports_offsets_in_declaration_order() {
	let record = mixed();
	let layout = record.layout();
	let offsets: Vec<_> = layout.iter().map(|item| (item.name, item.offset, item.width)).collect();
	assert_eq!(offsets, vec![("Id", 0, 4), ("Delta", 4, 2), ("Tag", 6, 3), ("Total", 9, 8)]);
	assert_eq!(record.byte_width(), 17);
	assert_eq!(record.len(), 4);
	assert_eq!(record.field_names().collect::<Vec<_>>(), vec!["Id", "Delta", "Tag", "Total"]);
	assert_eq!(record.field("Tag").expect("tag exists").field_type(), FieldType::string(3));
}

#[test]
fn layout_is_stable_across_value_changes() {
	let mut record = mixed();
	let before = record.layout().iter().map(|item| item.offset).collect::<Vec<_>>();
	record.set("Tag", "abc").expect("fits");
	record.set("Total", 5).expect("fits");
	let after = record.layout().iter().map(|item| item.offset).collect::<Vec<_>>();
	assert_eq!(before, after);
	assert_eq!(after.last().copied().expect("has fields") + 8, record.byte_width());
}

#[test]
fn empty_struct_has_zero_width() {
	let mut record = Struct::new(Vec::new()).expect("empty struct builds");
	assert!(record.is_empty());
	assert_eq!(record.to_bytes().expect("encodes"), Vec::<u8>::new());
	record.read(&mut io::empty()).expect("nothing to read");
}

struct FailingSink;

impl Write for FailingSink {
	fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
		Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

struct FailingSource;

impl Read for FailingSource {
	fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
		Err(io::Error::new(io::ErrorKind::ConnectionReset, "source reset"))
	}
}

#[test]
fn stream_failures_are_propagated() {
	let mut record = person();
	let err = record.write(&mut FailingSink).expect_err("sink fails");
	assert!(matches!(err, RecordError::Write(ref source) if source.kind() == io::ErrorKind::BrokenPipe));

	let before = record.values();
	let err = record.read(&mut FailingSource).expect_err("source fails");
	assert!(matches!(err, RecordError::Read(ref source) if source.kind() == io::ErrorKind::ConnectionReset));
	assert_eq!(record.values(), before);
}

#[test]
fn write_accepts_trait_objects() {
	let record = person();
	let mut out = Vec::<u8>::new();
	let sink: &mut dyn Write = &mut out;
	record.write(sink).expect("write succeeds");
	assert_eq!(out.len(), 6);
}

#[test]
fn struct_can_move_between_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<Struct>();

	let record = person();
	let bytes = std::thread::spawn(move || record.to_bytes().expect("encodes")).join().expect("thread joins");
	assert_eq!(bytes.len(), 6);
}
