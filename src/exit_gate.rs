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

use std::time::Instant;

use log::debug;
use strum::EnumIter;

use crate::interfaces::Clock;

/// Window in which a second back press asks for exit confirmation.
pub const DEFAULT_EXIT_INTERVAL_MS: u64 = 2000;

/// What the front-end should do in response to a back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ExitAction {
    /// Show a transient "press back again to exit" hint.
    ShowHint,
    /// Ask the user whether to quit. Confirming ends the process,
    /// dismissing keeps the session running.
    ConfirmExit,
}

/// Timestamp of the last back press that showed the hint. Owned by the
/// screen session; a fresh session starts with an empty state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitGateState {
    last_back_press: Option<u64>,
}

impl ExitGateState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_back_press(&self) -> Option<u64> {
        self.last_back_press
    }

    pub fn reset(&mut self) {
        self.last_back_press = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitGate {
    interval_ms: u64,
}

impl ExitGate {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_EXIT_INTERVAL_MS)
    }

    pub fn with_interval(interval_ms: u64) -> Self {
        Self { interval_ms }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Handles a back press at `now_ms`.
    ///
    /// A press within the interval of the recorded one (inclusive) asks for
    /// confirmation and leaves the recorded timestamp untouched, so a
    /// dismissed prompt followed by another press inside the same window
    /// asks again. Any other press shows the hint and records `now_ms`.
    /// A clock that went backwards counts as zero elapsed time.
    pub fn on_back_pressed(&self, state: &mut ExitGateState, now_ms: u64) -> ExitAction {
        if let Some(last) = state.last_back_press {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed <= self.interval_ms {
                debug!("Back pressed {}ms after {}, asking to confirm exit", elapsed, last);
                return ExitAction::ConfirmExit;
            }
        }
        debug!("Back pressed at {}, showing exit hint", now_ms);
        state.last_back_press = Some(now_ms);
        ExitAction::ShowHint
    }
}

impl Default for ExitGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds elapsed since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
