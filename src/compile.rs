//! Running the external programs that turn markup into something printable.
//!
//! The document compiler is run inside a directory owned by the caller,
//! normally a [`tempfile::TempDir`], so that its auxiliary files disappear with
//! it whichever way the run ends.

use crate::error::{LabelError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Base name of the files written into the working directory
pub const JOB_NAME: &str = "labels";

#[cfg(target_os = "macos")]
pub const DEFAULT_VIEWER: &str = "open";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_VIEWER: &str = "xdg-open";

/// Arguments for [`DEFAULT_VIEWER`] that make it wait until the document is closed
#[cfg(target_os = "macos")]
pub const DEFAULT_VIEWER_ARGS: &[&str] = &["-W"];
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_VIEWER_ARGS: &[&str] = &[];

pub const DEFAULT_COMPILER: &str = "pdflatex";

/// The document compiler and viewer to use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub compiler: String,
    pub viewer: String,
    /// Passed to the viewer before the document path
    pub viewer_args: Vec<String>,
}

impl Default for Toolchain {
    fn default() -> Self {
        Toolchain {
            compiler: DEFAULT_COMPILER.to_string(),
            viewer: DEFAULT_VIEWER.to_string(),
            viewer_args: DEFAULT_VIEWER_ARGS.iter().map(|arg| arg.to_string()).collect(),
        }
    }
}

impl Toolchain {
    /// Write `markup` into `dir` and compile it there. Returns the path of the
    /// produced PDF, which lives inside `dir`.
    pub fn compile(&self, markup: &str, dir: &Path) -> Result<PathBuf> {
        let source = dir.join(format!("{JOB_NAME}.tex"));
        std::fs::write(&source, markup)?;

        log::info!("compiling {} with {}", source.display(), self.compiler);
        let output = Command::new(&self.compiler)
            .args(["-interaction=nonstopmode", "-halt-on-error"])
            .arg(format!("{JOB_NAME}.tex"))
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| LabelError::Spawn {
                program: self.compiler.clone(),
                source,
            })?;

        if !output.status.success() {
            log::error!(
                "{} output:\n{}",
                self.compiler,
                String::from_utf8_lossy(&output.stdout)
            );
            return Err(LabelError::Compiler {
                program: self.compiler.clone(),
                status: output.status,
            });
        }
        log::debug!("{}", String::from_utf8_lossy(&output.stdout));

        Ok(dir.join(format!("{JOB_NAME}.pdf")))
    }

    /// Open `document` in the viewer and wait for the viewer to exit.
    ///
    /// Openers that hand the file to another process and return straight
    /// away (`xdg-open` on most desktops) may exit before the document has
    /// been read. Write the PDF to a file of its own when that matters.
    pub fn view(&self, document: &Path) -> Result<()> {
        log::info!("opening {} with {}", document.display(), self.viewer);
        let status = Command::new(&self.viewer)
            .args(&self.viewer_args)
            .arg(document)
            .status()
            .map_err(|source| LabelError::Spawn {
                program: self.viewer.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(LabelError::Viewer {
                program: self.viewer.clone(),
                status,
            })
        }
    }
}
