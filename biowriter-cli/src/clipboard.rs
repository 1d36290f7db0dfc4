//! Clipboard delivery for generated bios.
//!
//! Never fails: a missing clipboard (SSH sessions, headless machines) is
//! reported in the returned status message instead.

use arboard::Clipboard;

/// Copy text to the system clipboard and return a status message
///
/// On Linux the selection is served by the owning process, so this blocks until
/// another program (usually a clipboard manager) takes it over. Otherwise the
/// text would vanish when the CLI exits.
pub fn copy_to_clipboard(text: &str) -> String {
    let outcome = Clipboard::new().and_then(|mut clipboard| set_text(&mut clipboard, text));
    status_message(outcome)
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    tracing::info!("Waiting for another program to take over the clipboard");
    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

fn status_message(outcome: Result<(), arboard::Error>) -> String {
    match outcome {
        Ok(()) => {
            tracing::debug!("Copied bio to clipboard");
            "✓ Copied bio to clipboard".to_string()
        }
        Err(e @ arboard::Error::ClipboardNotSupported) => {
            tracing::warn!(error = %e, "Clipboard unavailable");
            format!("✗ Clipboard not available: {}", e)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard write failed");
            format!("✗ Clipboard error: {}", e)
        }
    }
}
