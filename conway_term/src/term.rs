// term.rs - Terminal setup on start, restore on exit

use std::io::{self, Write};

const ENTER: &str = "\x1b[?1049h\x1b[?25l\x1b[H\x1b[2J"; // alternate screen, hide cursor, clear
const LEAVE: &str = "\x1b[?25h\x1b[?1049l"; // show cursor, main screen

/// Puts the terminal into drawing mode for as long as it lives.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        #[cfg(windows)]
        enable_virtual_terminal()?;

        let mut out = io::stdout();
        out.write_all(ENTER.as_bytes())?;
        out.flush()?;
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        // nothing sensible to do if the terminal is already gone
        let _ = out.write_all(LEAVE.as_bytes());
        let _ = out.flush();
    }
}

/// Escape sequences are plain text to the Windows console unless asked.
#[cfg(windows)]
fn enable_virtual_terminal() -> io::Result<()> {
    use winapi::shared::minwindef::DWORD;
    use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processenv::GetStdHandle;
    use winapi::um::winbase::STD_OUTPUT_HANDLE;
    use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

    // SAFETY: the handle comes from GetStdHandle and `mode` outlives the calls.
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return Err(io::Error::last_os_error());
        }
        let mut mode: DWORD = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            return Err(io::Error::last_os_error());
        }
        if SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) == 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}
