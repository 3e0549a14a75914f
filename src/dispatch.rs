/// What a given argument list asks the dispatcher to do.
///
/// The first token alone selects the mode. Anything unrecognized is a
/// pass-through no-op that exits 0, not a usage error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// `-d [<dir>]`: run the suite in a directory (default suite dir when omitted).
    Suite { dir: Option<String> },
    /// `-t <file>`: run a single file. The file may be absent here; the
    /// caller reports the missing-argument diagnostic.
    Single { file: Option<String> },
    /// `--ci`: run the CI parsing command, ignoring remaining arguments.
    Ci,
    /// Unrecognized first argument: do nothing, exit 0.
    Passthrough,
    /// No arguments: print usage, exit 1.
    Usage,
}

impl Mode {
    /// Decide the mode from the process arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Mode {
        match args.first().map(String::as_str) {
            None => Mode::Usage,
            Some("-d") => Mode::Suite {
                dir: args.get(1).cloned(),
            },
            Some("-t") => Mode::Single {
                file: args.get(1).cloned(),
            },
            Some("--ci") => Mode::Ci,
            Some(_) => Mode::Passthrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args_ask_for_usage() {
        assert_eq!(Mode::from_args(&[]), Mode::Usage);
    }

    #[test]
    fn dash_d_without_dir_uses_default() {
        assert_eq!(Mode::from_args(&args(&["-d"])), Mode::Suite { dir: None });
    }

    #[test]
    fn dash_d_with_dir_carries_it() {
        assert_eq!(
            Mode::from_args(&args(&["-d", "/some/dir"])),
            Mode::Suite {
                dir: Some("/some/dir".to_string())
            }
        );
    }

    #[test]
    fn dash_t_carries_optional_file() {
        assert_eq!(
            Mode::from_args(&args(&["-t", "a.mbt"])),
            Mode::Single {
                file: Some("a.mbt".to_string())
            }
        );
        assert_eq!(Mode::from_args(&args(&["-t"])), Mode::Single { file: None });
    }

    #[test]
    fn ci_ignores_trailing_args() {
        assert_eq!(Mode::from_args(&args(&["--ci"])), Mode::Ci);
        assert_eq!(Mode::from_args(&args(&["--ci", "extra", "-t"])), Mode::Ci);
    }

    #[test]
    fn unrecognized_flag_is_a_passthrough() {
        assert_eq!(Mode::from_args(&args(&["-x"])), Mode::Passthrough);
        assert_eq!(Mode::from_args(&args(&["whatever"])), Mode::Passthrough);
    }
}
