use tokio::time::Instant;

use crate::log;
use crate::scheduler::OneShotTimer;
use super::{
    LineKind, OutputLine, TerminalOutput, TerminalSession, TerminalSettings, decorate_intro_line,
};

/// Connects a [`TerminalSession`] to a display surface and reveals scheduled
/// lines with one-shot timers. Must be used inside a tokio runtime.
///
/// Submissions are not serialised: lines of overlapping commands interleave
/// by deadline. Dropping the terminal cancels every pending reveal.
pub struct Terminal<O: TerminalOutput> {
    session: TerminalSession,
    output: O,
    pending: Vec<OneShotTimer>,
}

impl<O: TerminalOutput> Terminal<O> {
    pub fn new(settings: &TerminalSettings, output: O) -> Self {
        Self::with_session(TerminalSession::new(settings), settings, output)
    }

    pub fn with_session(session: TerminalSession, settings: &TerminalSettings, output: O) -> Self {
        for line in &settings.intro {
            output.append_line(OutputLine::new(
                LineKind::Intro,
                decorate_intro_line(&settings.marker, line),
            ));
        }

        Self {
            session,
            output,
            pending: Vec::new(),
        }
    }

    pub fn submit(&mut self, raw_input: &str) {
        let submitted_at = Instant::now();
        let Some(submission) = self.session.submit(raw_input) else {
            return;
        };

        self.pending.retain(|timer| !timer.is_finished());

        for line in submission.immediate {
            self.output.append_line(line);
        }

        for scheduled in submission.scheduled {
            let output = self.output.clone();
            let line = scheduled.line;
            self.pending.push(OneShotTimer::at(submitted_at + scheduled.delay, move || {
                output.append_line(line);
            }));
        }
    }

    pub fn display_name(&self) -> &str {
        self.session.display_name()
    }

    pub fn pending_reveals(&self) -> usize {
        self.pending.iter().filter(|timer| !timer.is_finished()).count()
    }
}

impl<O: TerminalOutput> Drop for Terminal<O> {
    fn drop(&mut self) {
        let mut cancelled = 0;
        for timer in self.pending.iter().filter(|timer| !timer.is_finished()) {
            timer.cancel();
            cancelled += 1;
        }
        if cancelled > 0 {
            log!("Terminal closed with {} pending lines cancelled", cancelled);
        }
    }
}
