use std::io::{self, BufRead, Write};

/// Answer to a suggestion picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Picked(String),
    Declined,
    /// EOF or `:q`: the session should end.
    Quit,
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// `None` on EOF or `:q`.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}> ", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line == ":q" {
            return Ok(None);
        }
        Ok(Some(line.to_string()))
    }

    /// Numbered picker. Empty input, `0`, or anything out of range declines.
    pub fn choose(&mut self, raw: &str, candidates: &[String]) -> io::Result<Choice> {
        writeln!(self.output, "Did you mean (for \"{}\")?", raw.trim())?;
        for (i, c) in candidates.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, c)?;
        }
        writeln!(self.output, "  0) none of these")?;
        let Some(answer) = self.ask("choice")? else {
            return Ok(Choice::Quit);
        };
        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| candidates.get(i));
        Ok(match picked {
            Some(c) => Choice::Picked(c.clone()),
            None => Choice::Declined,
        })
    }
}
