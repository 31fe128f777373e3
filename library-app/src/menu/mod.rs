// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::io::{self, BufRead, Write};

use strum::FromRepr;

use songlib::{
    Song, SongId,
    repo::song::SongRepo,
    usecases::{
        InputError,
        song::command::{Command, execute, parse_song_id, parse_year},
    },
};

pub(crate) const MENU_TEXT: &str = "\
-------------------------------
      Music Library App
-------------------------------

1. Search by Song Name
2. Search by Artist
3. Search by Song ID
4. Display Songs by Genre
5. Display Songs by ID Range
6. Insert a New Song
7. Delete a Song by ID
8. Exit
";

pub(crate) const CHOICE_PROMPT: &str = "Enter your choice: [1-8]";

pub(crate) const INVALID_CHOICE: &str = "Invalid choice! Please enter a valid option.";

const RESULTS_SEPARATOR: &str = "----------------------------------";

#[derive(Copy, Clone, Debug, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub(crate) enum MenuChoice {
    SearchByName = 1,
    SearchByArtist = 2,
    SearchById = 3,
    DisplayByGenre = 4,
    DisplayByIdRange = 5,
    Insert = 6,
    DeleteById = 7,
    Exit = 8,
}

/// Reasons for abandoning a partially entered command.
#[derive(Debug)]
enum Interrupt {
    Closed,
    Invalid(InputError),
    Io(io::Error),
}

impl From<io::Error> for Interrupt {
    fn from(from: io::Error) -> Self {
        Self::Io(from)
    }
}

impl From<InputError> for Interrupt {
    fn from(from: InputError) -> Self {
        Self::Invalid(from)
    }
}

/// Interactive, line-based session on a song library.
#[allow(missing_debug_implementations)]
pub(crate) struct Session<'r, Repo: ?Sized, R, W> {
    repo: &'r mut Repo,
    input: R,
    output: W,
}

impl<'r, Repo, R, W> Session<'r, Repo, R, W>
where
    Repo: SongRepo + ?Sized,
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(repo: &'r mut Repo, input: R, output: W) -> Self {
        Self {
            repo,
            input,
            output,
        }
    }

    /// Process choices until the user exits or the input is closed.
    pub(crate) fn run(&mut self) -> io::Result<()> {
        self.output.write_all(MENU_TEXT.as_bytes())?;
        loop {
            let choice = match self.ask(CHOICE_PROMPT) {
                Ok(choice) => choice,
                Err(Interrupt::Io(err)) => return Err(err),
                Err(_) => break,
            };
            let Ok(number) = choice.parse::<i32>() else {
                log::debug!("Rejected choice {choice:?}");
                writeln!(self.output, "{INVALID_CHOICE}")?;
                continue;
            };
            let Some(menu_choice) = u8::try_from(number)
                .ok()
                .and_then(MenuChoice::from_repr)
            else {
                self.write_results(number, INVALID_CHOICE)?;
                continue;
            };
            let command = match self.read_command(menu_choice) {
                Ok(command) => command,
                Err(Interrupt::Closed) => break,
                Err(Interrupt::Io(err)) => return Err(err),
                Err(Interrupt::Invalid(err)) => {
                    log::warn!("Aborting {menu_choice:?}: {err}");
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    continue;
                }
            };
            let outcome = execute(&mut *self.repo, command);
            self.write_results(number, &outcome.to_string())?;
            if outcome.is_exit() {
                break;
            }
        }
        self.output.flush()
    }

    fn write_results(&mut self, number: i32, results: &str) -> io::Result<()> {
        writeln!(
            self.output,
            "Choice {number} results:\n{RESULTS_SEPARATOR}\n{results}"
        )
    }

    fn ask(&mut self, question: &str) -> Result<String, Interrupt> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("Input closed");
            return Err(Interrupt::Closed);
        }
        let answer = line.trim_end_matches(['\n', '\r']);
        Ok(answer.to_owned())
    }

    fn ask_song_id(&mut self, question: &str) -> Result<SongId, Interrupt> {
        let answer = self.ask(question)?;
        Ok(parse_song_id(&answer)?)
    }

    fn read_command(&mut self, menu_choice: MenuChoice) -> Result<Command, Interrupt> {
        let command = match menu_choice {
            MenuChoice::SearchByName => Command::SearchByName(self.ask("Enter song name:")?),
            MenuChoice::SearchByArtist => Command::SearchByArtist(self.ask("Enter artist:")?),
            MenuChoice::SearchById => Command::SearchById(self.ask_song_id("Enter ID:")?),
            MenuChoice::DisplayByGenre => Command::DisplayByGenre(self.ask("Enter genre:")?),
            MenuChoice::DisplayByIdRange => {
                let low = self.ask_song_id("Enter lower ID:")?;
                let high = self.ask_song_id("Enter upper ID:")?;
                Command::DisplayByIdRange { low, high }
            }
            MenuChoice::Insert => {
                let name = self.ask("Enter new song name:")?;
                let artist = self.ask("Enter new artist:")?;
                let id = self.ask_song_id("Enter new ID:")?;
                let genre = self.ask("Enter new genre:")?;
                let year = parse_year(&self.ask("Enter new year:")?)?;
                Command::Insert(Song::new(name, artist, id, genre, year))
            }
            MenuChoice::DeleteById => Command::DeleteById(self.ask_song_id("Enter ID to delete:")?),
            MenuChoice::Exit => Command::Exit,
        };
        Ok(command)
    }
}
