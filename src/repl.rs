//! Read-eval-print loop
//!
//! One expression per line. Every error is reported on its own line and the
//! loop keeps going; only `exit` or the end of input stops it. Lines that are
//! not UTF-8 are reported like any other bad input.
//!
//! Factorial operands are capped at four digits, so a single `n !` line
//! cannot stall the session.

use std::io::{self, BufRead, Write};

use crate::parser::parser::evaluate;

/// Settings for a [`Repl`] session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub show_banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: ">".to_string(),
            show_banner: true,
        }
    }
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Repl { input, output, config }
    }

    pub fn run(&mut self) -> io::Result<()> {
        if self.config.show_banner {
            self.print_banner()?;
        }

        let mut buf = Vec::new();
        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                // end of input, keep the shell prompt on its own line
                writeln!(self.output)?;
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(_) => {
                    writeln!(self.output, "Error: Invalid input: line is not valid UTF-8")?;
                    continue;
                }
            };

            if line.trim().eq_ignore_ascii_case("exit") {
                writeln!(self.output, "Goodbye!")?;
                break;
            }

            match evaluate(line) {
                Ok(result) => writeln!(self.output, "Result: {}", result)?,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the big number calculator!")?;
        writeln!(self.output, "Supported operations:")?;
        writeln!(self.output)?;
        writeln!(self.output, "  3 + 3")?;
        writeln!(self.output, "  3 - 3")?;
        writeln!(self.output, "  3 * 3")?;
        writeln!(self.output, "  4 !")?;
        writeln!(self.output)?;
        writeln!(self.output, "Type 'exit' to quit.")?;
        writeln!(self.output)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{Repl, ReplConfig};

    fn session(input: &str) -> String {
        let config = ReplConfig { prompt: "> ".to_string(), show_banner: false };
        let mut repl = Repl::new(Cursor::new(input.as_bytes()), Vec::new(), config);
        repl.run().unwrap();
        String::from_utf8(repl.into_output()).unwrap()
    }

    #[test]
    fn test_exit() {
        assert_eq!(session("  EXIT \n1 + 1\n"), "> Goodbye!\n");
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(session("2 * 3\n"), "> Result: 6\n> \n");
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let output = session("5 - 9\n\n4 !\nexit\n");
        assert_eq!(
            output,
            "> Error: Negative results are not supported\n\
             > Error: Invalid input: expected `a + b`, `a - b`, `a * b` or `a !`, got 0 tokens\n\
             > Result: 24\n\
             > Goodbye!\n"
        );
    }

    #[test]
    fn test_invalid_utf8_line() {
        let mut input = b"1 + 1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b' ', b'!', b'\n']);
        input.extend_from_slice(b"2 * 3\nexit\n");

        let config = ReplConfig { prompt: "> ".to_string(), show_banner: false };
        let mut repl = Repl::new(Cursor::new(input), Vec::new(), config);
        repl.run().unwrap();
        let output = String::from_utf8(repl.into_output()).unwrap();
        assert_eq!(
            output,
            "> Result: 2\n\
             > Error: Invalid input: line is not valid UTF-8\n\
             > Result: 6\n\
             > Goodbye!\n"
        );
    }

    #[test]
    fn test_last_line_without_newline() {
        assert_eq!(session("3 !"), "> Result: 6\n> \n");
    }

    #[test]
    fn test_factorial_too_large() {
        let output = session("99999 !\n4 !\n");
        assert_eq!(
            output,
            "> Error: Factorial operand `99999` is too large: at most 4 digits are accepted\n\
             > Result: 24\n\
             > \n"
        );
    }

    #[test]
    fn test_banner() {
        let mut repl = Repl::new(Cursor::new("exit\n"), Vec::new(), ReplConfig::default());
        repl.run().unwrap();
        let output = String::from_utf8(repl.into_output()).unwrap();
        assert!(output.contains("Welcome"));
        assert!(output.contains("Type 'exit' to quit."));
        assert!(output.ends_with(">Goodbye!\n"));
    }
}
