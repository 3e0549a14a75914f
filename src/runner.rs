use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// A fully resolved child command: the runner (or CI parser) executable, its
/// fixed arguments, and the file paths to test, one argv entry each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub files: Vec<String>,
}

impl Invocation {
    /// Build an invocation from a configured command string plus the files to
    /// test. The command string is split on whitespace; each file becomes its
    /// own argument, so no shell quoting is involved.
    pub fn from_command(command: &str, files: &[PathBuf]) -> Result<Invocation> {
        let mut parts = command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| anyhow!("runner command is empty"))?
            .to_string();
        let args: Vec<String> = parts.map(str::to_string).collect();
        let files = files
            .iter()
            .map(|f| f.to_string_lossy().into_owned())
            .collect();
        Ok(Invocation {
            program,
            args,
            files,
        })
    }

    /// Human-readable command line for the `Running:` banner. Every file
    /// path is quoted, whether or not it contains whitespace.
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(arg);
        }
        for file in &self.files {
            out.push(' ');
            out.push('"');
            out.push_str(file);
            out.push('"');
        }
        out
    }
}

/// List the regular files directly inside `dir`, in directory order.
/// Sub-directories and special entries are skipped; symlinks are followed,
/// so a link to a regular file counts. An entry whose metadata cannot be
/// read (a dangling symlink, say) is an error, not a skip.
pub fn collect_suite_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("error reading directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("error reading directory {}", dir.display()))?;
        let path = entry.path();
        let meta = fs::metadata(&path)
            .with_context(|| format!("error reading directory {}", dir.display()))?;
        if meta.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Run the invocation with stdin/stdout/stderr inherited from this process,
/// blocking until the child exits. There is no timeout: a hung child hangs
/// the dispatcher.
pub fn run(invocation: &Invocation) -> Result<ExitStatus> {
    Command::new(&invocation.program)
        .args(&invocation.args)
        .args(&invocation.files)
        .status()
        .with_context(|| format!("failed to run {}", invocation.program))
}

/// Exit code to propagate for a finished child. On unix a signal death maps
/// to the conventional 128 + signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}
