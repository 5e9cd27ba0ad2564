use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrowest terminal width honored for table shrinking.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

/// What the process environment says about the output terminal.
#[derive(Clone, Debug, Default)]
struct Terminal {
    is_tty: bool,
    no_color: bool,
    columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(flags, &Terminal::detect()));
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

/// Colors only ever apply to tables. `--quiet` turns off auto-detected color
/// but not an explicit `--color always`.
fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> UiPrefs {
    let is_table = flags.format == OutputFormat::Table;
    let table_color = match flags.color {
        ColorMode::Always => is_table,
        ColorMode::Never => false,
        ColorMode::Auto => is_table && terminal.is_tty && !flags.quiet && !terminal.no_color,
    };

    let term_width = terminal
        .columns
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);

    UiPrefs {
        table_color,
        term_width,
    }
}
