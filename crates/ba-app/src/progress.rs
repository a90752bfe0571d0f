use std::io::{self, Write};

const BAR_CELLS: usize = 20;
/// Pas de rafraîchissement pour une image fixe, en pixels.
pub const PIXEL_STEP: u64 = 1000;

/// Stage message for a completion percentage.
#[must_use]
pub fn stage_message(percent: f64) -> &'static str {
    match percent {
        p if p < 25.0 => "warming up the sigma energy...",
        p if p < 50.0 => "converting pixels like a chad...",
        p if p < 75.0 => "absolutely demolishing the competition...",
        p if p < 95.0 => "entering the final boss phase...",
        _ => "MAXIMUM POWER ACHIEVED",
    }
}

/// One progress line, without the leading carriage return.
#[must_use]
pub fn format_progress(current: u64, total: u64, operation: &str) -> String {
    let percent = if total == 0 {
        100.0
    } else {
        (current as f64 / total as f64 * 100.0).min(100.0)
    };
    let filled = ((percent / 5.0) as usize).min(BAR_CELLS);
    format!(
        "[{}{}] {percent:.1}% {operation} - {}",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled),
        stage_message(percent)
    )
}

/// Barre de progression sur stderr. Inerte quand désactivée.
pub struct ProgressBar<W: Write> {
    enabled: bool,
    out: W,
}

impl ProgressBar<io::Stderr> {
    #[must_use]
    pub fn stderr(enabled: bool) -> Self {
        Self {
            enabled,
            out: io::stderr(),
        }
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn new(enabled: bool, out: W) -> Self {
        Self { enabled, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Redraw the bar; terminates the line once `current == total`.
    ///
    /// Write failures are logged, never propagated: progress is cosmetic.
    pub fn update(&mut self, current: u64, total: u64, operation: &str) {
        if !self.enabled {
            return;
        }
        let line = format_progress(current, total, operation);
        let res = if current >= total {
            writeln!(self.out, "\r{line}")
        } else {
            write!(self.out, "\r{line}")
        }
        .and_then(|()| self.out.flush());
        if let Err(e) = res {
            log::debug!("Barre de progression indisponible : {e}");
        }
    }
}

/// Whether a pixel-progress report is due between `previous` and `done`.
#[must_use]
pub fn pixel_step_crossed(previous: u64, done: u64, total: u64) -> bool {
    done >= total || done / PIXEL_STEP > previous / PIXEL_STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        let line = format_progress(50, 100, "Converting pixels");
        assert_eq!(
            line,
            "[██████████░░░░░░░░░░] 50.0% Converting pixels - absolutely demolishing the competition..."
        );
    }

    #[test]
    fn complete_bar_is_full() {
        let line = format_progress(7, 7, "Processing frame (Loop 1)");
        assert!(line.starts_with("[████████████████████] 100.0%"));
        assert!(line.ends_with("MAXIMUM POWER ACHIEVED"));
    }

    #[test]
    fn stage_boundaries() {
        assert_eq!(stage_message(0.0), "warming up the sigma energy...");
        assert_eq!(stage_message(25.0), "converting pixels like a chad...");
        assert_eq!(stage_message(94.9), "entering the final boss phase...");
        assert_eq!(stage_message(95.0), "MAXIMUM POWER ACHIEVED");
    }

    #[test]
    fn disabled_bar_writes_nothing() {
        let mut bar = ProgressBar::new(false, Vec::new());
        bar.update(1, 2, "x");
        assert!(bar.into_inner().is_empty());
    }

    #[test]
    fn enabled_bar_ends_line_on_completion() {
        let mut bar = ProgressBar::new(true, Vec::new());
        bar.update(1, 2, "x");
        bar.update(2, 2, "x");
        let out = String::from_utf8(bar.into_inner()).unwrap();
        assert!(out.starts_with('\r'));
        assert!(out.ends_with('\n'));
        assert_eq!(out.matches('\n').count(), 1);
    }

    #[test]
    fn pixel_steps() {
        assert!(!pixel_step_crossed(0, 999, 5000));
        assert!(pixel_step_crossed(999, 1000, 5000));
        assert!(!pixel_step_crossed(1000, 1999, 5000));
        assert!(pixel_step_crossed(10, 20, 20));
    }
}
