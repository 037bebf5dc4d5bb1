//! Terminal restore guard so a panic or early return never strands the
//! user's shell in raw mode or the alternate screen.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{self, Write},
    panic,
    sync::{
        atomic::{AtomicBool, Ordering},
        OnceLock,
    },
};

static RAW_MODE_ENABLED: AtomicBool = AtomicBool::new(false);
static ALT_SCREEN_ENABLED: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

/// RAII guard to restore terminal state on drop (and on panic via a shared hook).
pub struct TerminalRestoreGuard;

impl TerminalRestoreGuard {
    pub fn new() -> Self {
        install_terminal_panic_hook();
        TerminalRestoreGuard
    }

    pub fn enable_raw_mode(&self) -> io::Result<()> {
        enable_raw_mode()?;
        RAW_MODE_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }

    pub fn enter_alt_screen(&self, stdout: &mut impl Write) -> io::Result<()> {
        execute!(stdout, EnterAlternateScreen)?;
        ALT_SCREEN_ENABLED.store(true, Ordering::SeqCst);
        Ok(())
    }

    pub fn restore(&self) {
        restore_terminal();
    }
}

impl Default for TerminalRestoreGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRestoreGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

pub fn restore_terminal() {
    if RAW_MODE_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = disable_raw_mode();
    }
    let mut stdout = io::stdout();
    if ALT_SCREEN_ENABLED.swap(false, Ordering::SeqCst) {
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
    let _ = execute!(stdout, Show);
    let _ = stdout.flush();
}

pub fn install_terminal_panic_hook() {
    PANIC_HOOK_INSTALLED.get_or_init(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}
