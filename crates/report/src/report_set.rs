//! Several reports written into one directory under one progress chain.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::progress::{ProgressChain, ProgressListener};
use crate::report::Report;

/// Reports sharing a [`ProgressChain`].
///
/// Call [`track`](Self::track) on each report before feeding it, so that its
/// progress lands in its own slot, then [`push`](Self::push) it.
pub struct ReportSet {
	chain: Arc<ProgressChain>,
	reports: Vec<Box<dyn Report>>,
}

impl ReportSet {
	pub fn new(listener: impl ProgressListener + 'static) -> Self {
		Self {
			chain: ProgressChain::new(listener),
			reports: Vec::new(),
		}
	}

	/// Gives `report` a slot in the chain. Its expected count starts at zero
	/// and is revised by the report as it learns its size.
	pub fn track(&self, report: &mut dyn Report) {
		report.set_progress(self.chain.attach(0));
	}

	pub fn push(&mut self, report: impl Report + 'static) {
		self.reports.push(Box::new(report));
	}

	pub fn len(&self) -> usize {
		self.reports.len()
	}

	pub fn is_empty(&self) -> bool {
		self.reports.is_empty()
	}

	pub fn chain(&self) -> &Arc<ProgressChain> {
		&self.chain
	}

	/// Writes every report into `directory`, creating it if needed, and
	/// returns the written files in insertion order.
	pub fn write(&mut self, directory: &Path) -> Result<Vec<PathBuf>> {
		std::fs::create_dir_all(directory).map_err(|error| ReportError::Io {
			path: directory.to_path_buf(),
			error,
		})?;
		let mut written = Vec::with_capacity(self.reports.len());
		for report in &mut self.reports {
			written.push(report.write(directory)?);
		}
		debug!(count = written.len(), directory = %directory.display(), "wrote report set");
		Ok(written)
	}
}
