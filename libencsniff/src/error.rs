use std::{fmt::Display, io};

macro_rules! impl_from_for_variant {
	($variant: path, $contained_type: ty) => {
		impl From<$contained_type> for Error {
			fn from(value: $contained_type) -> Self {
				$variant(value)
			}
		}
	};
}

#[derive(Debug)]
pub enum Error {
	/// The byte source could not be opened, or a read from it failed
	IoError(io::Error),
	ConfigValidationError(String),
}

impl Error {
	/// The operating system's description of an I/O error, without the "(os error N)" suffix that `io::Error`'s `Display`
	/// appends. Non-I/O errors are described by their `Display` output
	pub fn system_message(&self) -> String {
		match self {
			Error::IoError(e) => {
				let msg = e.to_string();
				match e.raw_os_error() {
					Some(code) => msg.strip_suffix(&format!(" (os error {})", code)).map(str::to_string).unwrap_or(msg),
					None => msg
				}
			}
			e => e.to_string()
		}
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", match self {
			Error::IoError(e) => e.to_string(),
			Error::ConfigValidationError(msg) => format!("Config validation error: {}", msg),
		})
	}
}

impl std::error::Error for Error {}

impl_from_for_variant!(Error::IoError, io::Error);
