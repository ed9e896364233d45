use std::io::{self, BufRead, Write};

use crate::{error::PResult, runtime::eval::eval_str};

/// Interactive loop around the pipeline. The previous result is held here
/// and substituted into the input text; the engine itself stays stateless.
pub(crate) struct Repl {
    last: Option<f64>,
}

impl Repl {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
                break;
            }

            match self.eval_line(line) {
                Ok(value) => match render(value) {
                    Ok(text) => {
                        println!("{text}");
                        self.last = Some(value);
                    }
                    Err(why) => eprintln!("error: {why}"),
                },
                Err(why) => eprintln!("error: {why}"),
            }
        }

        Ok(())
    }

    fn eval_line(&self, line: &str) -> PResult<f64> {
        let expr = substitute_last(line, self.last);
        log::debug!("input after substitution: {expr}");

        eval_str(&expr)
    }
}

/// A finite value renders as its decimal form; NaN and infinities are
/// reported as errors and never become the stored last result.
pub(crate) fn render(value: f64) -> Result<String, &'static str> {
    if value.is_nan() {
        Err("result is not a number")
    } else if value.is_infinite() {
        Err("result overflowed to infinity")
    } else {
        Ok(value.to_string())
    }
}

/// Replaces every case-insensitive `ans` with the literal rendering of the
/// previous result, before the text reaches the lexer.
fn substitute_last(line: &str, last: Option<f64>) -> String {
    let value = match last {
        Some(value) => value,
        None => return line.to_string(),
    };

    let lower = line.to_ascii_lowercase();
    let rendered = value.to_string();
    let mut out = String::with_capacity(line.len());
    let mut rest = 0;

    for (off, matched) in lower.match_indices("ans") {
        out.push_str(&line[rest..off]);
        out.push_str(&rendered);
        rest = off + matched.len();
    }
    out.push_str(&line[rest..]);

    out
}

#[cfg(test)]
mod test {
    use super::{render, substitute_last};

    #[test]
    fn substitute_ans() {
        assert_eq!(substitute_last("ans + 2", Some(3.5)), "3.5 + 2");
        assert_eq!(substitute_last("ANS*Ans", Some(-1.0)), "-1*-1");
        assert_eq!(substitute_last("1+2", Some(3.5)), "1+2");
    }

    #[test]
    fn no_previous_result_leaves_input_alone() {
        assert_eq!(substitute_last("ans + 2", None), "ans + 2");
    }

    #[test]
    fn render_classifies_non_finite_values() {
        assert_eq!(render(0.5), Ok("0.5".to_string()));
        assert!(render(f64::NAN).is_err());
        assert!(render(f64::INFINITY).is_err());
    }
}
