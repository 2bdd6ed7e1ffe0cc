//! Performance benchmarks for RESP decoder, extractor and encoder

use bytes::Bytes;
use bytes::BytesMut;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use resp::RespEncoder;
use resp::RespValue;
use std::hint::black_box;

fn bench_decode_scalars(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_scalar");
	let cases: [(&str, &'static [u8]); 3] = [
		("simple_string", b"+OK\r\n"),
		("integer", b":1000\r\n"),
		("bulk_string", b"$11\r\nhello world\r\n"),
	];

	for (name, data) in cases {
		let buf = Bytes::from_static(data);
		group.throughput(Throughput::Bytes(buf.len() as u64));
		group.bench_function(name, |b| b.iter(|| resp::decode(black_box(&buf)).unwrap()));
	}
	group.finish();
}

fn bench_decode_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_array");
	let data = Bytes::from_static(b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n");

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("array_set_command", |b| {
		b.iter(|| resp::decode(black_box(&data)).unwrap())
	});
	group.finish();
}

fn bench_decode_large_array(c: &mut Criterion) {
	let mut group = c.benchmark_group("decode_large_array");

	// Create array with 100 elements
	let mut data = BytesMut::from("*100\r\n");
	for i in 0..100 {
		let item = format!("$3\r\n{:03}\r\n", i);
		data.extend_from_slice(item.as_bytes());
	}
	let data = data.freeze();

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("array_100_items", |b| {
		b.iter(|| resp::decode(black_box(&data)).unwrap())
	});
	group.finish();
}

fn bench_extract_pipeline(c: &mut Criterion) {
	let mut group = c.benchmark_group("extract_pipeline");
	let data = Bytes::from_static(b"*1\r\n$4\r\nPING\r\n*2\r\n$4\r\nECHO\r\n$2\r\nhi\r\n+OK\r\n:7\r\n");

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("four_values", |b| {
		b.iter(|| {
			let mut rest = black_box(&data).clone();
			while !rest.is_empty() {
				let (value, next) = resp::extract(&rest).unwrap();
				black_box(value);
				rest = next;
			}
		})
	});
	group.finish();
}

fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode");
	let cases = [
		("simple_string", RespValue::simple_string("OK")),
		("bulk_string", RespValue::bulk_string("hello world")),
		(
			"array_set_command",
			RespValue::array(vec![
				RespValue::bulk_string("SET"),
				RespValue::bulk_string("key"),
				RespValue::bulk_string("value"),
			]),
		),
	];

	for (name, value) in &cases {
		group.bench_function(*name, |b| b.iter(|| black_box(value).encode()));
	}
	group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
	let mut group = c.benchmark_group("roundtrip");
	let value = RespValue::array(vec![
		RespValue::bulk_string("SET"),
		RespValue::bulk_string("key"),
		RespValue::bulk_string("value"),
	]);

	group.bench_function("encode_decode", |b| {
		b.iter(|| {
			let encoded = black_box(&value).encode();
			resp::decode(&encoded).unwrap()
		})
	});
	group.finish();
}

criterion_group!(
	benches,
	bench_decode_scalars,
	bench_decode_array,
	bench_decode_large_array,
	bench_extract_pipeline,
	bench_encode,
	bench_roundtrip,
);

criterion_main!(benches);
