pub const LOGO: &str = r#"
  __ _  ___  _ __ ___  __| |
 / _` |/ _ \| '__/ _ \/ _` |
| (_| | (_) | | |  __/ (_| |
 \__, |\___/|_|  \___|\__,_|
 |___/
"#;

/// Startup banner: logo, version, listening address and start time.
pub fn banner(addr: &str) -> String {
	let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

	format!(
		r#"{}
Version:     v{}
Address:     {}
Started:     {}"#,
		LOGO.trim_end(),
		env!("CARGO_PKG_VERSION"),
		addr,
		now
	)
}

pub fn show_logo(addr: &str) {
	println!("{}\n", banner(addr));
}
