//! File-existence probing for environment-coupled rules.
//!
//! The license-file rule needs to know whether a `LICENSE` file exists next
//! to the process, not next to the document. That lookup is injected through
//! the [`FileProbe`] trait so the engine stays testable without manipulating
//! the process working directory.

use std::path::Path;

/// Read-only file-existence check consulted by lint rules.
pub trait FileProbe: Send + Sync {
    /// Whether a file with the given name exists.
    fn exists(&self, name: &str) -> bool;
}

/// Probes relative to the process's current working directory.
///
/// This is the probe the CLI wires in: the `LICENSE` lookup is relative to
/// where the tool runs, not to the linted document's directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct CwdProbe;

impl FileProbe for CwdProbe {
    fn exists(&self, name: &str) -> bool {
        Path::new(name).exists()
    }
}
