// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, error};
use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;
use wa_link::{
    DEFAULT_EXIT_INTERVAL_MS, DryRunLauncher, ExitGate, Feedback, LinkLauncher, Session,
    SessionCommand, SystemClock, SystemLauncher,
    i18n::{COUNTRY_CODE_REGISTRY, CountryCode, CountryCodeRegistry, DEFAULT_DIAL_CODE},
};

/// Open a WhatsApp chat for a phone number without saving it as a contact.
#[derive(Debug, Parser)]
#[command(name = "wa-link", version)]
struct Cli {
    /// Preselected country dial code, with or without the leading `+`.
    #[arg(long, env = "WA_LINK_COUNTRY", default_value = DEFAULT_DIAL_CODE)]
    country: String,

    /// Print links instead of opening them.
    #[arg(long, env = "WA_LINK_DRY_RUN")]
    dry_run: bool,

    /// Window for the second Ctrl-C that asks to quit the session.
    #[arg(long, env = "WA_LINK_EXIT_INTERVAL_MS", default_value_t = DEFAULT_EXIT_INTERVAL_MS)]
    exit_interval_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the selectable countries with their positions.
    List,
    /// Validate a number and open its chat once.
    Open { number: String },
    /// Interactive session (default).
    Session,
}

#[derive(Debug, Error)]
enum ShellError {
    #[error("Unknown country code '{0}'")]
    UnknownCountry(String),
    #[error("Line editor failed: {0}")]
    Readline(#[from] ReadlineError),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            eprintln!("wa-link: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, ShellError> {
    let registry: &CountryCodeRegistry = &COUNTRY_CODE_REGISTRY;
    match cli.command.as_ref().unwrap_or(&Command::Session) {
        // needs no selected country, so --country is not checked
        Command::List => {
            print_countries(registry.all_countries());
            Ok(ExitCode::SUCCESS)
        }
        Command::Open { number } => {
            let mut session = start_session(registry, &cli)?;
            let feedback = session.submit(number);
            render(&feedback);
            if matches!(feedback, Feedback::Success(_)) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        Command::Session => {
            let mut session = start_session(registry, &cli)?;
            run_session(&mut session)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Builds the session from the configuration and applies `--country`.
fn start_session<'a>(registry: &'a CountryCodeRegistry, cli: &Cli) -> Result<Session<'a>, ShellError> {
    let launcher: Box<dyn LinkLauncher> = if cli.dry_run {
        Box::new(DryRunLauncher)
    } else {
        Box::new(SystemLauncher::new())
    };
    let mut session = Session::new(registry, launcher, Box::new(SystemClock::new()))
        .with_exit_gate(ExitGate::with_interval(cli.exit_interval_ms));

    if session.select_dial_code(&cli.country).is_none() {
        return Err(ShellError::UnknownCountry(cli.country.clone()));
    }
    Ok(session)
}

fn run_session(session: &mut Session<'_>) -> Result<(), ShellError> {
    let mut editor = DefaultEditor::new()?;
    println!("Enter a phone number to open its chat. /list, /country <position|+code>, /quit.");
    println!("Ctrl-C twice asks to quit, Ctrl-D quits right away.");

    loop {
        let prompt = match session.selected() {
            Some(country) => format!("{}> ", country.dial_code()),
            None => "?> ".to_owned(),
        };
        match editor.readline(&prompt) {
            Ok(line) => {
                if let Some(command) = SessionCommand::from_line(&line) {
                    match command {
                        Ok(command) => {
                            if !run_session_command(session, command) {
                                return Ok(());
                            }
                        }
                        Err(err) => render(&Feedback::Error(err.to_string())),
                    }
                    continue;
                }
                let input = line.trim();
                if !input.is_empty() {
                    if let Err(err) = editor.add_history_entry(input) {
                        debug!("Could not add {:?} to history: {}", input, err);
                    }
                }
                render(&session.submit(&line));
            }
            Err(ReadlineError::Interrupted) => match session.back_pressed() {
                Feedback::ConfirmExit => {
                    if confirm_exit(&mut editor)? {
                        return Ok(());
                    }
                }
                feedback => render(&feedback),
            },
            Err(ReadlineError::Eof) => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Runs a parsed `/command`. Returns false when the session should end.
fn run_session_command(session: &mut Session<'_>, command: SessionCommand) -> bool {
    match command {
        SessionCommand::Quit => return false,
        SessionCommand::List => print_countries(session.registry().all_countries()),
        SessionCommand::SelectDialCode(code) => match session.select_dial_code(&code) {
            Some(country) => println!("Selected {}", country),
            None => render(&Feedback::Error(ShellError::UnknownCountry(code).to_string())),
        },
        SessionCommand::SelectPosition(index) => match session.select_position(index) {
            Ok(country) => println!("Selected {}", country),
            Err(err) => render(&Feedback::Error(err.to_string())),
        },
    }
    true
}

fn confirm_exit(editor: &mut DefaultEditor) -> Result<bool, ShellError> {
    match editor.readline("Exit? [y/N] ") {
        Ok(answer) => {
            let answer = answer.trim();
            Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
        }
        Err(ReadlineError::Interrupted) => Ok(false),
        Err(ReadlineError::Eof) => Ok(true),
        Err(err) => Err(err.into()),
    }
}

fn print_countries(countries: &[CountryCode]) {
    for (index, country) in countries.iter().enumerate() {
        println!("{:>3}  {}", index, country);
    }
}

fn render(feedback: &Feedback) {
    debug!("Feedback: {:?}", feedback);
    match feedback {
        Feedback::Success(message) => println!("{}", message),
        Feedback::Error(message) => eprintln!("error: {}", message),
        Feedback::FieldError(message) => eprintln!("phone number: {}", message),
        Feedback::Hint(message) => println!("{}", message),
        Feedback::ConfirmExit => println!("Exit?"),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{run, run_session_command, start_session, Cli, ShellError};
    use wa_link::{i18n::COUNTRY_CODE_REGISTRY, SessionCommand};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wa-link").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn list_ignores_unknown_country() {
        assert!(run(cli(&["--country", "+999", "list"])).is_ok());
    }

    #[test]
    fn open_and_session_reject_unknown_country() {
        assert!(matches!(
            run(cli(&["--country", "+999", "--dry-run", "open", "9876543210"])),
            Err(ShellError::UnknownCountry(ref code)) if code == "+999"
        ));
        assert!(matches!(
            start_session(&COUNTRY_CODE_REGISTRY, &cli(&["--country", "+999", "session"])),
            Err(ShellError::UnknownCountry(_))
        ));
    }

    #[test]
    fn country_flag_accepts_code_without_plus() {
        let session = start_session(&COUNTRY_CODE_REGISTRY, &cli(&["--country", "44", "--dry-run"])).unwrap();
        assert_eq!(Some("+44"), session.selected().map(|c| c.dial_code()));
    }

    #[test]
    fn session_commands_update_selection() {
        let mut session = start_session(&COUNTRY_CODE_REGISTRY, &cli(&["--dry-run"])).unwrap();

        assert!(run_session_command(&mut session, SessionCommand::SelectDialCode("+44".to_owned())));
        assert_eq!(Some("+44"), session.selected().map(|c| c.dial_code()));

        assert!(run_session_command(&mut session, SessionCommand::SelectPosition(3)));
        assert_eq!(COUNTRY_CODE_REGISTRY.find_by_position(3).ok(), session.selected());

        // out of range, keeps the previous selection
        assert!(run_session_command(&mut session, SessionCommand::SelectPosition(91)));
        assert_eq!(COUNTRY_CODE_REGISTRY.find_by_position(3).ok(), session.selected());

        assert!(run_session_command(&mut session, SessionCommand::SelectDialCode("+999".to_owned())));
        assert_eq!(COUNTRY_CODE_REGISTRY.find_by_position(3).ok(), session.selected());

        assert!(run_session_command(&mut session, SessionCommand::List));
        assert!(!run_session_command(&mut session, SessionCommand::Quit));
    }
}
