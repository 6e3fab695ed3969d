//! Interactive prompts
//!
//! Every question loops until it gets an answer it accepts; there is no
//! retry limit. End of input is the only way out and surfaces as an
//! `UnexpectedEof` error.

use std::io::{self, BufRead, Write};

use imdb_core::{Candidate, NameValidator};

const NAME_PROMPT: &str = "\nHello, Please enter the Movie Stars Name: ";
const NAME_REJECTED: &str = "Please enter a valid name.";
const MENU_HEADER: &str =
    "It seems your query has returned a couple of actors, which actor were you looking for? ";
const MENU_PROMPT: &str = "Please enter the number next to the actor above: ";
const MENU_REJECTED: &str = "Please enter a valid number listed above";
const YES_NO_REJECTED: &str = "That wasn't valid option, try again ...";

/// Map an exact yes/no token to its answer.
///
/// Only `yes`, `y`, `no` and `n` are recognised; case and surrounding
/// whitespace matter.
pub fn parse_yes_no(token: &str) -> Option<bool> {
    match token {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

/// Map a 1-based menu number to a 0-based index into `len` entries.
///
/// Zero, negative and out-of-range numbers are rejected.
pub fn parse_menu_choice(token: &str, len: usize) -> Option<usize> {
    let number: usize = token.trim().parse().ok()?;
    let index = number.checked_sub(1)?;
    (index < len).then_some(index)
}

/// Line-oriented question and answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the conversation is printed to
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Ask for an actor name until one passes `validator`.
    pub fn read_actor_name(&mut self, validator: &NameValidator) -> io::Result<String> {
        loop {
            let name = self.ask(NAME_PROMPT)?;
            if validator.is_valid(&name) {
                return Ok(name);
            }
            tracing::debug!(input = %name, "rejected name");
            self.say(NAME_REJECTED)?;
        }
    }

    /// Print a numbered menu of candidates and ask until a listed number is
    /// given.
    pub fn choose_candidate<'c>(&mut self, candidates: &'c [Candidate]) -> io::Result<&'c Candidate> {
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, candidate.display_name)?;
        }
        self.say(MENU_HEADER)?;

        loop {
            let answer = self.ask(MENU_PROMPT)?;
            match parse_menu_choice(&answer, candidates.len()) {
                Some(index) => return Ok(&candidates[index]),
                None => {
                    tracing::debug!(input = %answer, "rejected menu choice");
                    self.say(MENU_REJECTED)?;
                }
            }
        }
    }

    /// Ask `question` until a yes/no token is given.
    pub fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse_yes_no(&answer) {
                return Ok(value);
            }
            self.say(YES_NO_REJECTED)?;
        }
    }
}
