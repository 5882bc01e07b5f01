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

use std::{
    io,
    process::{Child, Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use log::{debug, info, warn};

use crate::interfaces::{LaunchOutcome, LinkLauncher};

/// Exit status xdg-open uses when no tool able to open the URI was found.
const XDG_OPEN_NO_TOOL_STATUS: i32 = 3;

/// How long to wait for the opener to report a failure before the launch is
/// taken as done. Openers that fall back to a browser may keep running
/// until it closes.
pub const DEFAULT_OPENER_WAIT: Duration = Duration::from_millis(1500);
const OPENER_POLL_INTERVAL: Duration = Duration::from_millis(20);

#[cfg(target_os = "macos")]
const PLATFORM_OPENER: (&'static str, &'static [&'static str]) = ("open", &[]);
#[cfg(target_os = "windows")]
const PLATFORM_OPENER: (&'static str, &'static [&'static str]) = ("cmd", &["/C", "start", ""]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PLATFORM_OPENER: (&'static str, &'static [&'static str]) = ("xdg-open", &[]);

/// Hands links to the operating system's URI opener.
///
/// The opener is spawned and given [`DEFAULT_OPENER_WAIT`] to exit. An early
/// exit is mapped to an outcome; an opener still running after that is
/// left detached and counted as `Launched`, so a failure it reports later
/// goes unnoticed.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    program: String,
    args: Vec<String>,
    wait: Duration,
}

impl SystemLauncher {
    pub fn new() -> Self {
        let (program, args) = PLATFORM_OPENER;
        Self::with_program(program, args)
    }

    /// Uses `program`, called with `args` followed by the link.
    pub fn with_program(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_owned(),
            args: args.iter().map(|arg| (*arg).to_owned()).collect(),
            wait: DEFAULT_OPENER_WAIT,
        }
    }

    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkLauncher for SystemLauncher {
    fn launch(&self, url: &str) -> LaunchOutcome {
        debug!("Running {} {:?} {}", self.program, self.args, url);
        let spawned = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let outcome = match spawned.and_then(|mut child| wait_for_exit(&mut child, self.wait)) {
            Ok(Some(status)) if status.success() => LaunchOutcome::Launched,
            Ok(Some(status)) => outcome_for_exit_code(&self.program, status.code()),
            Ok(None) => {
                debug!("{} still running after {:?}, not waiting for it", self.program, self.wait);
                LaunchOutcome::Launched
            }
            Err(err) => outcome_for_spawn_error(&self.program, &err),
        };
        if outcome != LaunchOutcome::Launched {
            warn!("Could not open {} with {}: {:?}", url, self.program, outcome);
        }
        outcome
    }
}

/// Polls `child` until it exits or `wait` runs out. `None` means it is
/// still running; the child is not killed.
fn wait_for_exit(child: &mut Child, wait: Duration) -> io::Result<Option<ExitStatus>> {
    let deadline = Instant::now() + wait;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        let now = Instant::now();
        if now >= deadline {
            return Ok(None);
        }
        thread::sleep(OPENER_POLL_INTERVAL.min(deadline - now));
    }
}

fn outcome_for_exit_code(program: &str, code: Option<i32>) -> LaunchOutcome {
    match code {
        Some(XDG_OPEN_NO_TOOL_STATUS) if program == "xdg-open" => LaunchOutcome::NoHandler,
        Some(code) => LaunchOutcome::OtherFailure(format!("{} exited with status {}", program, code)),
        None => LaunchOutcome::OtherFailure(format!("{} was terminated by a signal", program)),
    }
}

fn outcome_for_spawn_error(program: &str, err: &io::Error) -> LaunchOutcome {
    if err.kind() == io::ErrorKind::NotFound {
        // no opener installed at all
        return LaunchOutcome::NoHandler;
    }
    LaunchOutcome::OtherFailure(format!("failed to run {}: {}", program, err))
}

/// Reports every link as launched without touching the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunLauncher;

impl LinkLauncher for DryRunLauncher {
    fn launch(&self, url: &str) -> LaunchOutcome {
        info!("Dry run, not opening {}", url);
        LaunchOutcome::Launched
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        time::{Duration, Instant},
    };

    use super::{outcome_for_exit_code, outcome_for_spawn_error, DryRunLauncher, SystemLauncher};
    use crate::interfaces::{LaunchOutcome, LinkLauncher};

    #[test]
    fn test_missing_opener_is_no_handler() {
        let launcher = SystemLauncher::with_program("wa-link-test-opener-that-does-not-exist", &[]);
        assert_eq!(LaunchOutcome::NoHandler, launcher.launch("https://wa.me/919876543210"));
    }

    #[cfg(unix)]
    #[test]
    fn test_long_running_opener_does_not_block() {
        // the link ends up as $0 of the inline script and is ignored
        let launcher = SystemLauncher::with_program("sh", &["-c", "sleep 10"])
            .with_wait(Duration::from_millis(200));
        let started = Instant::now();
        assert_eq!(LaunchOutcome::Launched, launcher.launch("https://wa.me/919876543210"));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_is_reported() {
        let launcher = SystemLauncher::with_program("sh", &["-c", "exit 4"])
            .with_wait(Duration::from_secs(5));
        assert_eq!(
            LaunchOutcome::OtherFailure("sh exited with status 4".to_owned()),
            launcher.launch("https://wa.me/1")
        );

        let launcher = SystemLauncher::with_program("sh", &["-c", "exit 0"])
            .with_wait(Duration::from_secs(5));
        assert_eq!(LaunchOutcome::Launched, launcher.launch("https://wa.me/1"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(LaunchOutcome::NoHandler, outcome_for_exit_code("xdg-open", Some(3)));
        assert_eq!(
            LaunchOutcome::OtherFailure("open exited with status 3".to_owned()),
            outcome_for_exit_code("open", Some(3))
        );
        assert!(matches!(
            outcome_for_exit_code("xdg-open", Some(4)),
            LaunchOutcome::OtherFailure(_)
        ));
        assert!(matches!(outcome_for_exit_code("xdg-open", None), LaunchOutcome::OtherFailure(_)));
    }

    #[test]
    fn test_spawn_errors() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(LaunchOutcome::NoHandler, outcome_for_spawn_error("xdg-open", &not_found));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            LaunchOutcome::OtherFailure("failed to run xdg-open: denied".to_owned()),
            outcome_for_spawn_error("xdg-open", &denied)
        );
    }

    #[test]
    fn test_dry_run() {
        assert_eq!(LaunchOutcome::Launched, DryRunLauncher.launch("https://wa.me/1"));
    }
}
