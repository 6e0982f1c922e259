use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};
use std::{fs, path::Path};

use super::tokenizer::is_separator;

/// Tab completion for the interactive editor: command names in the first
/// word, entries of the working directory after that.
pub struct CommandCompleter {
    commands: Vec<String>,
}

impl CommandCompleter {
    pub fn new(commands: Vec<&'static str>) -> Self {
        Self {
            commands: commands.into_iter().map(String::from).collect(),
        }
    }

    fn command_candidates(&self, word: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(word))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }
}

/// Entries of `dir` whose names start with `word`, directories marked with `/`.
pub fn file_candidates(dir: &Path, word: &str) -> Vec<Pair> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut matches: Vec<Pair> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            if !name.starts_with(word) {
                return None;
            }
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            let display = if is_dir {
                format!("{}/", name)
            } else {
                name.clone()
            };
            Some(Pair {
                display,
                replacement: name,
            })
        })
        .collect();

    matches.sort_by(|a, b| a.display.cmp(&b.display));
    matches
}

fn is_separator_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_separator)
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let start = line[..pos]
            .rfind(is_separator_char)
            .map(|i| i + 1)
            .unwrap_or(0);
        let word = &line[start..pos];

        let matches = if line[..start].trim_matches(is_separator_char).is_empty() {
            self.command_candidates(word)
        } else {
            file_candidates(Path::new("."), word)
        };

        Ok((start, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
