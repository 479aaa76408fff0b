//! Command line handling for the `big_calc` binary

use std::io::{BufRead, Write};

use crate::error::CalcError;
use crate::parser::parser::evaluate;
use crate::repl::{Repl, ReplConfig};

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Evaluate one expression given on the command line and exit
    Evaluate(String),
    Repl(ReplConfig),
}

/// Parses the arguments that follow the program name.
///
/// Flags may appear anywhere; every other argument is an expression token.
/// With no expression tokens the binary runs interactively.
pub fn parse_args<I>(args: I) -> Result<Command, CalcError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = ReplConfig::default();
    let mut tokens = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-q" | "--quiet" => config.show_banner = false,
            "--prompt" => match args.next() {
                Some(prompt) => config.prompt = prompt,
                None => {
                    return Err(CalcError::InvalidInput(
                        "`--prompt` needs a value".to_string(),
                    ))
                }
            },
            _ => tokens.push(arg),
        }
    }

    if tokens.is_empty() {
        Ok(Command::Repl(config))
    } else {
        Ok(Command::Evaluate(tokens.join(" ")))
    }
}

pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {0} [--quiet] [--prompt <text>] [<a> <op> <b> | <a> !]\n\
         \n\
         Examples:\n  \
           {0}                 # Start the interactive calculator\n  \
           {0} 123 '*' 456     # Evaluate one expression\n  \
           {0} 30 '!'          # Factorial\n\
         \n\
         Factorial operands are limited to 4 digits.",
        program_name
    )
}

/// Runs the binary against the given streams and returns its exit code.
///
/// `0` on success, `1` when the expression or the session fails, `2` for bad
/// arguments. Results go to `output`, diagnostics to `errors`.
pub fn run<I, R, W, E>(args: I, input: R, mut output: W, mut errors: E) -> i32
where
    I: IntoIterator<Item = String>,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut args = args.into_iter();
    let program_name = args.next().unwrap_or_else(|| "big_calc".to_string());

    let command = match parse_args(args) {
        Ok(command) => command,
        Err(e) => {
            // nothing sensible is left to do if stderr itself is gone
            let _ = writeln!(errors, "Error: {}\n\n{}", e, usage(&program_name));
            return 2;
        }
    };

    let outcome = match command {
        Command::Help => writeln!(output, "{}", usage(&program_name)),
        Command::Evaluate(expression) => match evaluate(&expression) {
            Ok(result) => writeln!(output, "{}", result),
            Err(e) => {
                let _ = writeln!(errors, "Error: {}", e);
                return 1;
            }
        },
        Command::Repl(config) => Repl::new(input, output, config).run(),
    };

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(errors, "Error: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Write};

    use super::{parse_args, run, usage, Command};
    use crate::error::CalcError;
    use crate::repl::ReplConfig;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    /// Runs the binary on `input`, returning (exit code, stdout, stderr).
    fn run_with(list: &[&str], input: &str) -> (i32, String, String) {
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let code = run(args(list), Cursor::new(input), &mut output, &mut errors);
        (
            code,
            String::from_utf8(output).unwrap(),
            String::from_utf8(errors).unwrap(),
        )
    }

    /// A writer whose every write fails, like a closed pipe.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_repl_by_default() {
        assert_eq!(parse_args(args(&[])), Ok(Command::Repl(ReplConfig::default())));
    }

    #[test]
    fn test_flags() {
        let command = parse_args(args(&["-q", "--prompt", "calc> "])).unwrap();
        assert_eq!(
            command,
            Command::Repl(ReplConfig { prompt: "calc> ".to_string(), show_banner: false })
        );
        assert_eq!(parse_args(args(&["1", "--help"])), Ok(Command::Help));
        assert!(matches!(
            parse_args(args(&["--prompt"])),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_expression() {
        assert_eq!(
            parse_args(args(&["5", "-", "9"])),
            Ok(Command::Evaluate("5 - 9".to_string()))
        );
        assert_eq!(
            parse_args(args(&["4", "!", "-q"])),
            Ok(Command::Evaluate("4 !".to_string()))
        );
    }

    #[test]
    fn test_usage() {
        let text = usage("big_calc");
        assert!(text.starts_with("Usage: big_calc"));
        assert!(text.contains("limited to 4 digits"));
    }

    #[test]
    fn test_run_expression() {
        let (code, out, err) = run_with(&["big_calc", "123456789123456789", "*", "2"], "");
        assert_eq!(code, 0);
        assert_eq!(out, "246913578246913578\n");
        assert_eq!(err, "");

        let (code, out, err) = run_with(&["big_calc", "5", "-", "9"], "");
        assert_eq!(code, 1);
        assert_eq!(out, "");
        assert_eq!(err, "Error: Negative results are not supported\n");

        let (code, _, err) = run_with(&["big_calc", "10000", "!"], "");
        assert_eq!(code, 1);
        assert!(err.starts_with("Error: Factorial operand `10000` is too large"));
    }

    #[test]
    fn test_run_help_and_bad_args() {
        let (code, out, err) = run_with(&["calc", "--help"], "");
        assert_eq!(code, 0);
        assert!(out.starts_with("Usage: calc"));
        assert_eq!(err, "");

        let (code, out, err) = run_with(&["calc", "--prompt"], "");
        assert_eq!(code, 2);
        assert_eq!(out, "");
        assert!(err.starts_with("Error: Invalid input: `--prompt` needs a value"));
        assert!(err.contains("Usage: calc"));
    }

    #[test]
    fn test_run_repl() {
        let (code, out, err) = run_with(&["big_calc", "-q", "--prompt", "$ "], "4 !\nexit\n");
        assert_eq!(code, 0);
        assert_eq!(out, "$ Result: 24\n$ Goodbye!\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_run_write_failure() {
        let mut errors = Vec::new();
        let code = run(args(&["big_calc", "2", "+", "2"]), Cursor::new(""), BrokenPipe, &mut errors);
        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(errors).unwrap(), "Error: pipe closed\n");

        let mut errors = Vec::new();
        let code = run(args(&["big_calc", "-q"]), Cursor::new("1 + 1\n"), BrokenPipe, &mut errors);
        assert_eq!(code, 1);
    }
}
