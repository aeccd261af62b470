//! Command-line quoting for the shell that runs each deploy step.
//!
//! Unix steps go through `sh -c`, Windows steps through `cmd /C`. The two
//! disagree on quoting: `sh` honors single quotes, `cmd` passes them through
//! verbatim and leaves argument splitting to the child's C runtime, which only
//! understands double quotes.

/// Quoting dialect of the shell a command line is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlavor {
    /// POSIX `sh`.
    Posix,
    /// Windows `cmd.exe`, with MSVC-style argv splitting in the child.
    Cmd,
}

impl ShellFlavor {
    /// Flavor of the shell `ShellRunner` spawns on this platform.
    pub fn native() -> Self {
        if cfg!(windows) {
            ShellFlavor::Cmd
        } else {
            ShellFlavor::Posix
        }
    }

    /// Quote one argument so it survives as a single word.
    pub fn quote(self, arg: &str) -> String {
        match self {
            ShellFlavor::Posix => shell_words::quote(arg).into_owned(),
            ShellFlavor::Cmd => quote_cmd(arg),
        }
    }

    /// Join arguments into one command line, quoting each as needed.
    pub fn join<S: AsRef<str>>(self, args: &[S]) -> String {
        args.iter()
            .map(|arg| self.quote(arg.as_ref()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote_cmd(arg: &str) -> String {
    let needs_quotes = arg.is_empty()
        || arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '&' | '|' | '<' | '>' | '^' | '(' | ')'));
    if !needs_quotes {
        return arg.to_string();
    }

    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                // backslashes before a quote are doubled, then the quote escaped
                out.extend(std::iter::repeat_n('\\', backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat_n('\\', backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    // trailing backslashes would otherwise escape the closing quote
    out.extend(std::iter::repeat_n('\\', backslashes * 2));
    out.push('"');
    out
}
