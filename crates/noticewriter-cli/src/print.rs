//! Output targets for rendered notices.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, bail};
use tokio::io::AsyncWriteExt;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Printer {
    Stdout,
    /// Append to a file.
    File(PathBuf),
    /// Pipe to a shell command such as `lp`.
    Command(String),
}

impl Printer {
    pub fn from_args(out: Option<PathBuf>, command: Option<String>) -> Self {
        match (out, command) {
            (Some(path), _) => Printer::File(path),
            (None, Some(command)) => Printer::Command(command),
            (None, None) => Printer::Stdout,
        }
    }

    pub async fn print(&self, text: &str) -> anyhow::Result<()> {
        match self {
            Printer::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(text.as_bytes()).await?;
                stdout.flush().await?;
            }
            Printer::File(path) => {
                let mut file = tokio::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await
                    .with_context(|| format!("opening {}", path.display()))?;
                file.write_all(text.as_bytes()).await?;
                file.flush().await?;
                info!(path = %path.display(), bytes = text.len(), "notice written");
            }
            Printer::Command(command) => {
                let mut child = tokio::process::Command::new("sh")
                    .arg("-c")
                    .arg(command)
                    .stdin(Stdio::piped())
                    .spawn()
                    .with_context(|| format!("starting print command `{command}`"))?;
                if let Some(mut stdin) = child.stdin.take() {
                    // A command that exits without reading is reported by its status below.
                    if let Err(e) = stdin.write_all(text.as_bytes()).await {
                        if e.kind() != ErrorKind::BrokenPipe {
                            return Err(e.into());
                        }
                    }
                }
                let status = child.wait().await?;
                if !status.success() {
                    bail!("print command `{command}` exited with {status}");
                }
                info!(command = %command, "notice sent to print command");
            }
        }
        Ok(())
    }
}
