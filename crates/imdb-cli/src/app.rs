//! The interactive run
//!
//! name -> candidates -> pick one -> filmography -> list -> optional export.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use imdb_core::{write_filmography, Filmography, ImdbError, ImdbScraper, NameValidator};
use thiserror::Error;

use crate::config::CliConfig;
use crate::present::display;
use crate::prompt::Prompter;

const BANNER: &str = "IMDB Movie Star Search";
const BANNER_RULE: &str = "**********************";
const NOT_AN_ACTOR: &str = "This name you provided does not seem to be an actor";
const ORDER_QUESTION: &str = "By the way, would you like the movies listed in newest first? [y/n]: ";
const EXPORT_QUESTION: &str = "Would you like these movies published to a JSON document? [y/n]: ";

/// Why a run ended early
#[derive(Error, Debug)]
pub enum RunError {
    /// The search page listed nobody
    #[error("no actor found for {0:?}")]
    NoCandidates(String),

    /// The profile page listed no titles. Zero credits and an unrecognised
    /// page layout look the same here.
    #[error("no movies found for {0:?}")]
    NoCredits(String),

    #[error(transparent)]
    Scrape(#[from] ImdbError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl RunError {
    /// Whether the user was already told "not an actor".
    pub fn is_not_an_actor(&self) -> bool {
        matches!(self, RunError::NoCandidates(_) | RunError::NoCredits(_))
    }
}

/// What a completed run produced
#[derive(Debug)]
pub struct Outcome {
    pub filmography: Filmography,
    pub exported: Option<PathBuf>,
}

pub struct App {
    scraper: ImdbScraper,
    validator: NameValidator,
    output_dir: PathBuf,
}

impl App {
    pub fn new(scraper: ImdbScraper, validator: NameValidator, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            scraper,
            validator,
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &CliConfig) -> Result<Self, RunError> {
        let scraper = ImdbScraper::with_config(config.client_config())?;
        let validator = NameValidator::new()?;
        Ok(Self::new(scraper, validator, config.output_dir.clone()))
    }

    pub async fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Outcome, RunError> {
        prompter.say(BANNER)?;
        prompter.say(BANNER_RULE)?;

        let name = prompter.read_actor_name(&self.validator)?;
        let candidates = self.scraper.resolve_candidates(&name).await?;

        let candidate = match candidates.len() {
            0 => {
                prompter.say(NOT_AN_ACTOR)?;
                return Err(RunError::NoCandidates(name));
            }
            1 => &candidates[0],
            _ => prompter.choose_candidate(&candidates)?,
        };
        let actor = &candidate.display_name;

        prompter.say(&format!("\nAwesome, I will now list the movies {} is in", actor))?;
        let newest_first = prompter.ask_yes_no(ORDER_QUESTION)?;

        let filmography = self.scraper.filmography(candidate, newest_first).await?;
        if filmography.is_empty() {
            prompter.say(NOT_AN_ACTOR)?;
            return Err(RunError::NoCredits(actor.clone()));
        }

        prompter.say(&format!("\nThe movie(s) that {} is in are:", actor))?;
        display(&filmography, prompter.output())?;

        let exported = if prompter.ask_yes_no(EXPORT_QUESTION)? {
            Some(write_filmography(&filmography, &self.output_dir)?)
        } else {
            None
        };

        Ok(Outcome {
            filmography,
            exported,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_actor_classification() {
        assert!(RunError::NoCandidates("X".to_string()).is_not_an_actor());
        assert!(RunError::NoCredits("X".to_string()).is_not_an_actor());
        let io = RunError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(!io.is_not_an_actor());
    }

    #[test]
    fn test_run_error_display() {
        assert_eq!(
            RunError::NoCandidates("Xyzzy".to_string()).to_string(),
            "no actor found for \"Xyzzy\""
        );
        let scrape = RunError::from(ImdbError::ElementNotFound("bold title".to_string()));
        assert_eq!(scrape.to_string(), "Element not found: bold title");
    }
}
