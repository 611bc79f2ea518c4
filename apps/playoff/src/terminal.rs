//! # Terminal Wizard
//!
//! Line-oriented front end for [`WizardController`] over any
//! `BufRead`/`Write` pair.
//!
//! Each step lists the round's matchups in order. For every matchup with a
//! known participant the user is asked for a winner (seed slot number or
//! team name) and then the series length; a blank line keeps the current
//! pick. The finals step also asks for the MVP. After the round a command
//! prompt accepts `next`, `back`, `edit`, `submit`, `restart` and `quit`.
//! The summary page offers `restart` to start over with an empty bracket.

use playoff_core::primitives::TOTAL_STEPS;
use playoff_core::{
    Conference, Matchup, MatchupId, PredictionSet, PredictionStore, RoundKind, ScoreEntry,
    SeriesResult, Slot, WizardController,
};
use std::io::{self, BufRead, Write};

const WINNER_PROMPT: &str = "  Winner [1/2 or name, blank to keep]: ";
const GAMES_PROMPT: &str = "  Games [4-0/4-1/4-2/4-3, blank to keep]: ";
const MVP_PROMPT: &str = "  MVP [number or name, blank to keep]: ";
const COMMAND_PROMPT: &str = "Command [next/back/edit/submit/restart/quit]: ";
const SUMMARY_PROMPT: &str = "Command [restart/quit]: ";

/// How the user left the edit loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Submit,
    Quit,
}

/// Navigation commands accepted after a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    Edit,
    Submit,
    Restart,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Some(Self::Next),
            "b" | "back" => Some(Self::Back),
            "e" | "edit" => Some(Self::Edit),
            "s" | "submit" => Some(Self::Submit),
            "r" | "restart" | "start over" => Some(Self::Restart),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

// =============================================================================
// INTERACTIVE LOOP
// =============================================================================

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the wizard until the user submits or quits.
    ///
    /// End of input counts as `quit`. Returns immediately with
    /// [`Exit::Quit`] once the predictions are submitted.
    pub fn edit(&mut self, wizard: &mut WizardController) -> io::Result<Exit> {
        loop {
            let Some(round) = wizard.step().round() else {
                return Ok(Exit::Quit);
            };
            self.render_step(wizard)?;
            if !self.edit_round(wizard, round)? {
                return Ok(Exit::Quit);
            }

            loop {
                let Some(line) = self.read_line(COMMAND_PROMPT)? else {
                    return Ok(Exit::Quit);
                };
                match Command::parse(&line) {
                    Some(Command::Next) => {
                        wizard.next();
                        break;
                    }
                    Some(Command::Back) => {
                        wizard.previous();
                        break;
                    }
                    Some(Command::Edit) => break,
                    Some(Command::Submit) => return Ok(Exit::Submit),
                    Some(Command::Restart) => match wizard.restart() {
                        Ok(()) => break,
                        Err(e) => writeln!(self.output, "Error: {e}")?,
                    },
                    Some(Command::Quit) => return Ok(Exit::Quit),
                    None => writeln!(self.output, "Unknown command '{line}'")?,
                }
            }
        }
    }

    /// Step header and the current error, if any.
    pub fn render_step(&mut self, wizard: &WizardController) -> io::Result<()> {
        writeln!(self.output)?;
        write_header(&mut self.output, wizard)?;
        if let Some(error) = wizard.current_error() {
            writeln!(self.output, "Error: {error}")?;
        }
        Ok(())
    }

    /// The step 5 page: submitted document and leaderboard.
    pub fn render_summary(&mut self, wizard: &WizardController) -> io::Result<()> {
        writeln!(self.output)?;
        write_summary(&mut self.output, wizard)
    }

    /// Ask whether to start over after the summary page.
    ///
    /// Returns `true` once the wizard has been restarted on step 1, `false`
    /// on `quit` or end of input.
    pub fn prompt_restart(&mut self, wizard: &mut WizardController) -> io::Result<bool> {
        loop {
            let Some(line) = self.read_line(SUMMARY_PROMPT)? else {
                return Ok(false);
            };
            match Command::parse(&line) {
                Some(Command::Restart) => match wizard.restart() {
                    Ok(()) => return Ok(true),
                    Err(e) => writeln!(self.output, "Error: {e}")?,
                },
                Some(Command::Quit) => return Ok(false),
                _ => writeln!(self.output, "Unknown command '{line}'")?,
            }
        }
    }

    /// Read one trimmed line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn edit_round(&mut self, wizard: &mut WizardController, round: RoundKind) -> io::Result<bool> {
        for id in round.matchup_ids() {
            if !self.edit_matchup(wizard, round, &id)? {
                return Ok(false);
            }
        }
        if round == RoundKind::Finals {
            return self.edit_mvp(wizard);
        }
        Ok(true)
    }

    fn edit_matchup(
        &mut self,
        wizard: &mut WizardController,
        round: RoundKind,
        id: &MatchupId,
    ) -> io::Result<bool> {
        let Some(matchup) = wizard.predictions().matchup(round, id).cloned() else {
            return Ok(true);
        };
        writeln!(self.output)?;
        write_matchup(&mut self.output, id, &matchup)?;
        if matchup.participants().iter().all(Slot::is_undetermined) {
            writeln!(self.output, "  Waiting on earlier rounds")?;
            return Ok(true);
        }
        if !matchup.is_determined() {
            writeln!(self.output, "  Opponent not decided yet")?;
        }

        loop {
            let Some(input) = self.read_line(WINNER_PROMPT)? else {
                return Ok(false);
            };
            if input.is_empty() {
                break;
            }
            let team = resolve_winner(&matchup, &input);
            match wizard.set_winner(round, id.as_str(), &team) {
                Ok(()) => break,
                Err(e) => writeln!(self.output, "  Error: {e}")?,
            }
        }

        let has_winner = wizard
            .predictions()
            .matchup(round, id)
            .and_then(Matchup::winner)
            .is_some();
        if !has_winner {
            return Ok(true);
        }

        loop {
            let Some(input) = self.read_line(GAMES_PROMPT)? else {
                return Ok(false);
            };
            if input.is_empty() {
                break;
            }
            let result = input
                .parse::<SeriesResult>()
                .and_then(|games| wizard.set_games(round, id.as_str(), games));
            match result {
                Ok(()) => break,
                Err(e) => writeln!(self.output, "  Error: {e}")?,
            }
        }
        Ok(true)
    }

    fn edit_mvp(&mut self, wizard: &mut WizardController) -> io::Result<bool> {
        let candidates: Vec<String> = wizard
            .store()
            .bracket()
            .mvp_candidates()
            .iter()
            .map(|p| p.to_string())
            .collect();

        writeln!(self.output)?;
        writeln!(self.output, "Finals MVP")?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(self.output, "  {:>2}. {candidate}", i + 1)?;
        }

        loop {
            let Some(input) = self.read_line(MVP_PROMPT)? else {
                return Ok(false);
            };
            if input.is_empty() {
                return Ok(true);
            }
            let player = resolve_candidate(&candidates, &input);
            match wizard.set_mvp(&player) {
                Ok(()) => return Ok(true),
                Err(e) => writeln!(self.output, "  Error: {e}")?,
            }
        }
    }
}

/// Map `1`/`2` or a case-insensitive name onto a participant. Anything else
/// is passed through so the store can reject it.
fn resolve_winner(matchup: &Matchup, input: &str) -> String {
    let by_slot = match input {
        "1" => matchup.participants()[0].team(),
        "2" => matchup.participants()[1].team(),
        _ => None,
    };
    by_slot
        .or_else(|| {
            matchup
                .participants()
                .iter()
                .filter_map(Slot::team)
                .find(|team| team.as_str().eq_ignore_ascii_case(input))
        })
        .map(|team| team.to_string())
        .unwrap_or_else(|| input.to_string())
}

fn resolve_candidate(candidates: &[String], input: &str) -> String {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| candidates.get(i))
        .or_else(|| candidates.iter().find(|c| c.eq_ignore_ascii_case(input)))
        .cloned()
        .unwrap_or_else(|| input.to_string())
}

// =============================================================================
// RENDERING
// =============================================================================

/// `Step n of 5 (p%) - Title`
pub fn write_header<W: Write>(out: &mut W, wizard: &WizardController) -> io::Result<()> {
    let step = wizard.step();
    writeln!(
        out,
        "Step {} of {} ({}%) - {}",
        step.number(),
        TOTAL_STEPS,
        wizard.progress_percent(),
        step.title()
    )
}

/// One matchup line, e.g. `east-0  Celtics vs Hawks  -> Celtics in 4-1 (5 games)`.
pub fn write_matchup<W: Write>(out: &mut W, id: &MatchupId, matchup: &Matchup) -> io::Result<()> {
    let [home, away] = matchup.participants();
    write!(out, "  {:<12} {home} vs {away}", id.as_str())?;
    if let Some(winner) = matchup.winner() {
        write!(out, "  -> {winner}")?;
        if let Some(games) = matchup.games() {
            write!(out, " in {} ({} games)", games.as_str(), games.games_played())?;
        }
    }
    if let Some(mvp) = matchup.mvp() {
        write!(out, "  (MVP: {mvp})")?;
    }
    writeln!(out)
}

/// One round, grouped by conference before the finals.
pub fn write_round<W: Write>(out: &mut W, set: &PredictionSet, kind: RoundKind) -> io::Result<()> {
    writeln!(out, "{kind}")?;
    let round = set.round(kind);
    if kind == RoundKind::Finals {
        for (id, matchup) in round.ordered() {
            write_matchup(out, &id, matchup)?;
        }
        return Ok(());
    }
    for conference in Conference::ALL {
        writeln!(out, " {}", conference.name())?;
        for id in kind.conference_ids(conference) {
            if let Some(matchup) = round.get(&id) {
                write_matchup(out, &id, matchup)?;
            }
        }
    }
    Ok(())
}

/// Every round in order, then the champion if one is picked.
pub fn write_bracket<W: Write>(out: &mut W, store: &PredictionStore) -> io::Result<()> {
    let set = store.predictions();
    for kind in RoundKind::ALL {
        write_round(out, set, kind)?;
        writeln!(out)?;
    }
    if let Some(champion) = set.champion() {
        match store.bracket().conference_of(champion) {
            Some(conference) => writeln!(out, "Champion: {champion} ({})", conference.name())?,
            None => writeln!(out, "Champion: {champion}")?,
        }
    }
    Ok(())
}

/// Scores in the order the service returned them.
pub fn write_leaderboard<W: Write>(out: &mut W, scores: &[ScoreEntry]) -> io::Result<()> {
    writeln!(out, "Leaderboard")?;
    if scores.is_empty() {
        return writeln!(out, "  No scores yet");
    }
    for (rank, entry) in scores.iter().enumerate() {
        writeln!(out, "  {:>3}. {:<24} {}", rank + 1, entry.user, entry.score)?;
    }
    Ok(())
}

/// Step 5: the submitted document as sent, then the leaderboard.
pub fn write_summary<W: Write>(out: &mut W, wizard: &WizardController) -> io::Result<()> {
    write_header(out, wizard)?;
    if let Some(submitted) = wizard.submitted() {
        let json = submitted
            .to_json_pretty()
            .map_err(|e| io::Error::other(e.to_string()))?;
        writeln!(out, "Your predictions:")?;
        writeln!(out, "{json}")?;
    }
    writeln!(out)?;
    match wizard.scores() {
        Some(scores) => write_leaderboard(out, scores),
        None => match wizard.current_error() {
            Some(error) => writeln!(out, "Error: {error}"),
            None => Ok(()),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
