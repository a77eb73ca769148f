/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a non-blocking notification when a focus session completes
pub fn notify_session_complete(sessions: u64) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "Session {} complete" with title "FocusFlow - Focus session complete!""#,
            sessions
        );

        let _ = Command::new("osascript").arg("-e").arg(&script).output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = sessions;
    }
}
