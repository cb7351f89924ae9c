use std::io::{self, BufRead, Write};

/// Where the operator is asked (`input`), the report is written (`out`) and
/// problems are shown (`err`).
pub struct Console<R, W, E> {
    pub input: R,
    pub out: W,
    pub err: E,
}

impl Console<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Console { input, out, err }
    }
}
