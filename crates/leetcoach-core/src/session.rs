//! Interactive coaching session.
//!
//! Every flow is synchronous and line-oriented: the session writes a prompt,
//! blocks on one line of input, and persists progress as soon as a problem is
//! finished. The reader and writer are generic so flows can be driven from
//! in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

use comfy_table::Table;
use tracing::debug;

use crate::curriculum::CurriculumStore;
use crate::error::SessionError;
use crate::model::Problem;
use crate::progress::ProgressStore;
use crate::review::review;

const COMMANDS_BANNER: &str = "Commands: assess, topics, practice, interview, progress, quit";

/// A top-level command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Assess,
    Topics,
    Practice,
    Interview,
    Progress,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "assess" => Ok(Command::Assess),
            "topics" => Ok(Command::Topics),
            "practice" => Ok(Command::Practice),
            "interview" => Ok(Command::Interview),
            "progress" => Ok(Command::Progress),
            "quit" => Ok(Command::Quit),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Owns the curriculum and progress for one run and drives the user flows.
pub struct CoachSession<R, W> {
    curriculum: CurriculumStore,
    progress: ProgressStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CoachSession<R, W> {
    pub fn new(curriculum: CurriculumStore, progress: ProgressStore, input: R, output: W) -> Self {
        Self {
            curriculum,
            progress,
            input,
            output,
        }
    }

    pub fn curriculum(&self) -> &CurriculumStore {
        &self.curriculum
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    /// Consume the session, returning the writer (useful for inspecting output).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            writeln!(self.output, "\n{COMMANDS_BANNER}")?;
            let Some(line) = self.prompt_line("Choose command: ")? else {
                debug!("input closed, leaving command loop");
                break;
            };
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(_) => writeln!(self.output, "Unknown command")?,
            }
        }
        Ok(())
    }

    /// Run a single command. `Quit` is a no-op here; the loop handles it.
    pub fn execute(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::Assess => self.assess_skill(),
            Command::Topics => self.list_topics(),
            Command::Practice => {
                let topic = self.ask("Enter topic (or leave blank): ")?;
                let topic = topic.trim();
                self.start_problem((!topic.is_empty()).then_some(topic))
            }
            Command::Interview => self.simulate_interview(),
            Command::Progress => self.show_progress(),
            Command::Quit => Ok(()),
        }
    }

    pub fn assess_skill(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "--- Skill Assessment ---")?;
        let level = self.ask("Rate your algorithm skill (beginner/intermediate/advanced): ")?;
        let level = level.trim();
        self.progress.set_skill_level(level)?;
        writeln!(self.output, "Skill level recorded as {level}.")?;
        Ok(())
    }

    pub fn list_topics(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "Available topics:")?;
        for topic in self.curriculum.list_topics() {
            writeln!(self.output, " - {topic}")?;
        }
        Ok(())
    }

    /// Guided practice on the next unsolved problem in `topic`.
    pub fn start_problem(&mut self, topic: Option<&str>) -> Result<(), SessionError> {
        let Some(problem) = self.curriculum.next_unsolved(topic, &self.progress).cloned() else {
            writeln!(self.output, "No more problems in this topic!")?;
            return Ok(());
        };

        writeln!(
            self.output,
            "\n--- {} ({}) ---",
            problem.title, problem.difficulty
        )?;
        self.write_statement(&problem)?;

        for (idx, hint) in problem.hints.iter().enumerate() {
            let n = idx + 1;
            let answer = self.ask(&format!("Need hint {n}? (y/n): "))?;
            if !answer.trim_start().to_lowercase().starts_with('y') {
                break;
            }
            writeln!(self.output, "Hint {n}: {hint}")?;
        }

        self.ask("Attempt the problem now. Press Enter when done to see the solution.")?;
        writeln!(self.output, "Solution:")?;
        if problem.solution.is_empty() {
            writeln!(self.output, "(no solution on file)")?;
        } else {
            writeln!(self.output, "{}", problem.solution)?;
        }
        writeln!(self.output, "Time Complexity: {}", problem.time_complexity)?;
        writeln!(self.output, "Space Complexity: {}", problem.space_complexity)?;

        self.progress.mark_solved(&problem.title)?;
        debug!(title = %problem.title, "practice problem completed");
        Ok(())
    }

    /// Mock interview on the next unsolved problem of the first topic.
    ///
    /// The time box is advisory: elapsed time is reported afterwards and
    /// never cuts off input.
    pub fn simulate_interview(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "\n--- Mock Interview ---")?;
        let Some(problem) = self.curriculum.next_unsolved(None, &self.progress).cloned() else {
            writeln!(self.output, "You have solved all problems!")?;
            return Ok(());
        };

        writeln!(self.output, "Problem: {}", problem.title)?;
        self.write_statement(&problem)?;

        let start = Instant::now();
        self.ask("You have 20 minutes. Press Enter when you have an answer...")?;
        let seconds = start.elapsed().as_secs();
        writeln!(self.output, "You took {seconds} seconds.")?;

        writeln!(self.output, "Let's review your approach.")?;
        writeln!(
            self.output,
            "Paste your code here (or describe), then finish with an empty line:"
        )?;
        let code = self.read_block()?;

        writeln!(
            self.output,
            "Reviewing your code for edge cases and clarity..."
        )?;
        for note in review(&code, &problem) {
            writeln!(self.output, "{note}")?;
        }

        self.progress.mark_solved(&problem.title)?;
        debug!(title = %problem.title, seconds, "mock interview completed");
        Ok(())
    }

    pub fn show_progress(&mut self) -> Result<(), SessionError> {
        let solved = self.progress.solved_titles();
        writeln!(self.output, "Problems solved: {}", solved.len())?;
        for title in &solved {
            writeln!(self.output, " - {title}")?;
        }

        if let Some(level) = self.progress.skill_level() {
            writeln!(self.output, "Skill level: {level}")?;
        }

        let mut table = Table::new();
        table.set_header(vec!["Topic", "Solved", "Total"]);
        for (topic, done, total) in self.curriculum.topic_totals(&self.progress) {
            table.add_row(vec![topic.to_string(), done.to_string(), total.to_string()]);
        }
        writeln!(self.output, "{table}")?;
        Ok(())
    }

    fn write_statement(&mut self, problem: &Problem) -> Result<(), SessionError> {
        if !problem.prompt.is_empty() {
            writeln!(self.output, "{}", problem.prompt)?;
        }
        if let Some(url) = &problem.url {
            writeln!(self.output, "Link: {url}")?;
        }
        Ok(())
    }

    /// Write `prompt` and read one line. End of input reads as empty.
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        Ok(self.prompt_line(prompt)?.unwrap_or_default())
    }

    /// Write `prompt` and read one line, or `None` at end of input.
    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read lines until an empty line or end of input.
    fn read_block(&mut self) -> Result<String, SessionError> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}
