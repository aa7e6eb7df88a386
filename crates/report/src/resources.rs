//! Templates and stylesheet embedded at build time.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, Result};

/// File name of the stylesheet every report links to.
pub const STYLESHEET: &str = "geoapi-reports.css";

pub const AUTHORITY_CODES: &str = "AuthorityCodes.html";
pub const OPERATION_PARAMETERS: &str = "OperationParameters.html";

/// Returns the packaged resource named `name`.
pub fn resource(name: &str) -> Result<&'static str> {
	Ok(match name {
		AUTHORITY_CODES => include_str!("../templates/AuthorityCodes.html"),
		OPERATION_PARAMETERS => include_str!("../templates/OperationParameters.html"),
		STYLESHEET => include_str!("../templates/geoapi-reports.css"),
		_ => return Err(ReportError::ResourceNotFound(name.to_string())),
	})
}

/// Copies the stylesheet into `directory` unless a non-empty file with that
/// name already exists.
pub fn copy_stylesheet(directory: &Path) -> Result<()> {
	let path = directory.join(STYLESHEET);
	if fs::metadata(&path).is_ok_and(|m| m.is_file() && m.len() != 0) {
		return Ok(());
	}
	fs::write(&path, resource(STYLESHEET)?).map_err(|error| ReportError::Io {
		path: path.clone(),
		error,
	})?;
	debug!(path = %path.display(), "copied stylesheet");
	Ok(())
}
