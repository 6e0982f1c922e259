use colored::Colorize;
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};
use std::{
    env,
    ffi::OsString,
    io::{self, BufRead, Stdout, Write},
    path::Path,
    time::Duration,
};

use crate::{
    commands::cd,
    config::ShellConfig,
    core::{
        command::ExitOutcome, completer::CommandCompleter, external::ExternalCommand,
        registry::BuiltinRegistry, tokenizer,
    },
    error::ShellError,
    farewell::Farewell,
};

/// Where command lines come from.
pub enum Input {
    /// A terminal: prompt, history and completion through the line editor.
    Interactive(Editor<CommandCompleter, DefaultHistory>),
    /// Anything else: plain lines, no prompt.
    Piped(Box<dyn BufRead>),
}

impl Input {
    fn is_interactive(&self) -> bool {
        matches!(self, Input::Interactive(_))
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<W: Write = Stdout> {
    config: ShellConfig,
    registry: BuiltinRegistry,
    external: ExternalCommand,
    farewell: Farewell,
    input: Input,
    out: W,
    status: i32,
}

impl Shell {
    /// Shell on the process's standard streams.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let input = if termion::is_tty(&io::stdin()) {
            let mut names = BuiltinRegistry::setup().get_commands();
            names.push(cd::NAME);

            let mut editor = Editor::new()?;
            editor.set_helper(Some(CommandCompleter::new(names)));
            Input::Interactive(editor)
        } else {
            Input::Piped(Box::new(io::stdin().lock()))
        };

        Ok(Self::with_io(config, input, io::stdout()))
    }
}

impl<W: Write> Shell<W> {
    pub fn with_io(config: ShellConfig, input: Input, out: W) -> Self {
        let frame_delay = if input.is_interactive() {
            config.shutdown_frame_delay
        } else {
            Duration::ZERO
        };

        Self {
            config,
            registry: BuiltinRegistry::setup(),
            external: ExternalCommand::new(),
            farewell: Farewell::new(frame_delay),
            input,
            out,
            status: 0,
        }
    }

    /// Status of the most recent builtin or external command.
    #[cfg(test)]
    pub fn status(&self) -> i32 {
        self.status
    }

    /// Reads and runs lines until end of input or `exit`.
    ///
    /// Both endings are successful regardless of the last status; only a
    /// failure to create a child process comes back as an error.
    pub fn run(&mut self) -> Result<(), ShellError> {
        while let Some(line) = self.read_line() {
            let args = tokenizer::split(&line);
            if let Flow::Exit = self.dispatch(&args)? {
                if let Err(e) = self.farewell.play(&mut self.out) {
                    log::debug!("shutdown animation interrupted: {}", e);
                }
                return Ok(());
            }
        }

        log::debug!("end of input, last status {}", self.status);
        Ok(())
    }

    /// Next line as raw bytes, terminator included for piped input.
    fn read_line(&mut self) -> Option<Vec<u8>> {
        match &mut self.input {
            Input::Interactive(editor) => {
                let cwd = env::current_dir().ok();
                let prompt = render_prompt(self.config.prompt_glyph, cwd.as_deref(), self.status);
                match editor.readline(&prompt) {
                    Ok(line) => {
                        let _ = editor.add_history_entry(line.as_str());
                        Some(line.into_bytes())
                    }
                    // Ctrl-C drops the line being edited
                    Err(ReadlineError::Interrupted) => Some(Vec::new()),
                    Err(ReadlineError::Eof) => {
                        println!("{}", "[EOF]".red().bold());
                        None
                    }
                    Err(e) => {
                        eprintln!("{}", format!("cell: read failed: {}", e).red());
                        None
                    }
                }
            }
            Input::Piped(reader) => {
                let mut buf = Vec::new();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => None,
                    Ok(_) => Some(buf),
                    Err(e) => {
                        eprintln!("{}", format!("cell: read failed: {}", e).red());
                        None
                    }
                }
            }
        }
    }

    fn dispatch(&mut self, args: &[OsString]) -> Result<Flow, ShellError> {
        let Some(name) = args.first() else {
            return Ok(Flow::Continue);
        };

        if name == cd::NAME {
            match cd::change_directory(args) {
                Ok(dir) => log::debug!("working directory is now {}", dir.display()),
                Err(e) => eprintln!("{}", e.to_string().red()),
            }
            return Ok(Flow::Continue);
        }

        if let Some(builtin) = self.registry.lookup(name) {
            log::debug!("running builtin {}", builtin.name());
            let outcome = builtin.execute(args, &mut self.out);
            let Some(status) = outcome.status() else {
                return Ok(Flow::Exit);
            };
            if outcome == ExitOutcome::Failure {
                if let Err(e) = writeln!(self.out, "{} failed", builtin.name()) {
                    log::debug!("cannot report failure of {}: {}", builtin.name(), e);
                }
            }
            self.status = status;
            return Ok(Flow::Continue);
        }

        // keep builtin output ahead of whatever the child prints
        if let Err(e) = self.out.flush() {
            log::debug!("flush before spawn failed: {}", e);
        }
        self.status = self.external.launch(args)?;
        Ok(Flow::Continue)
    }
}

/// Prompt text: the working directory, plus the last status when it is nonzero.
pub fn render_prompt(glyph: &str, cwd: Option<&Path>, status: i32) -> String {
    let dir = match cwd {
        Some(path) => format!("[{}]", path.display()),
        None => "[?]".to_string(),
    };
    let dir = dir.cyan().bold();

    if status != 0 {
        let status = format!("[{}]", status).red().bold();
        format!("{}{}{}{} > ", glyph, dir, status, glyph)
    } else {
        format!("{}{}{} > ", glyph, dir, glyph)
    }
}
