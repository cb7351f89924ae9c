use std::io::{self, BufRead, Write};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Answer {
    Yes,
    No,
}

/// Asks whether to scan for readers again until the operator answers `y` or `n`.
///
/// The whole line is the answer, surrounding whitespace aside: `yes`, `Y` or a
/// blank line are not taken as `y`/`n` and ask again. End of input counts as `n`.
pub fn ask_retry<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Answer> {
    let mut line = String::new();

    loop {
        write!(out, "Retry search for devices? (y/n): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(Answer::No);
        }

        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(out, "Invalid input. Please enter 'y' or 'n'.")?,
        }
    }
}

fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim() {
        "y" => Some(Answer::Yes),
        "n" => Some(Answer::No),
        _ => None,
    }
}
