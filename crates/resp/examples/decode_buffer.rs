use bytes::Bytes;
use resp::RespEncoder;
use resp::RespValue;

fn main() {
	println!("--- RESP Decode Example ---");

	// Each buffer is handed to the decoder whole, the way a single socket read
	// would be.
	let buffers = vec![
		b"+OK\r\n".as_slice(),
		b":+1000\r\n".as_slice(),
		b"$-1\r\n".as_slice(),
		b"$0\r\n\r\n".as_slice(),
		b"*2\r\n$4\r\nECHO\r\n$5\r\nhello\r\n".as_slice(),
		b"*2\r\n*1\r\n:1\r\n*1\r\n$3\r\nfoo\r\n".as_slice(),
		b"+OK\r\nEXTRA".as_slice(),
		b"$10\r\nfoo\r\n".as_slice(),
		b"*2\r\n:1\r\nnot a value\r\n".as_slice(),
	];

	for raw in buffers {
		let input = Bytes::from_static(raw);
		println!("\n[Input] {:?}", input);

		match resp::decode(&input) {
			Ok(value) => {
				println!("[Decoded] {:?}", value);
				println!("[Re-encoded] {:?}", value.encode());
			}
			Err(e) => {
				println!("[Error] {}", e);
				println!("[Root cause] {:?} in {}", e.root_cause().kind(), e.root_cause().func());
			}
		}
	}

	let reply = RespValue::array(vec![RespValue::simple_string("PONG"), RespValue::null_array()]);
	println!("\n[Built reply] {:?}", reply.encode());
}
