// Formats log records as GitHub Actions workflow commands so error and
// warning lines surface as annotations in the run summary.

use std::io::{self, Write};

use env_logger::fmt::Formatter;
use log::{Level, Record};

/// Escapes a message for the data section of a workflow command. The runner
/// reads commands line by line, so newlines have to be encoded.
fn escape_data(data: &str) -> String {
	data.replace('%', "%25")
		.replace('\r', "%0D")
		.replace('\n', "%0A")
}

pub fn format(fmt: &mut Formatter, record: &Record) -> io::Result<()> {
	let message = record.args().to_string();

	match record.level() {
		Level::Error => writeln!(fmt, "::error::{}", escape_data(&message)),
		Level::Warn => writeln!(fmt, "::warning::{}", escape_data(&message)),
		Level::Debug | Level::Trace => {
			writeln!(fmt, "::debug::{}", escape_data(&message))
		}
		Level::Info => writeln!(fmt, "{}", message),
	}
}
