use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::app::capabilities::SystemTheme;
use crate::app::domain::{Message, ThemeMode};
use crate::app::infrastructure::error::Result;

pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: GNOME exposes the preference as a color scheme, older setups only via the GTK theme name
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            let scheme = String::from_utf8_lossy(&output.stdout);
            if scheme.contains("prefer-dark") {
                return true;
            }
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if theme.contains("dark") {
                return true;
            }
        }
    }

    // macOS: AppleInterfaceStyle is only set while dark mode is on
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if style.contains("dark") {
                    return true;
                }
            }
        }
    }

    // Default to light mode if detection fails
    false
}

/// The platform color scheme as a [`SystemTheme`] capability.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformTheme;

impl SystemTheme for PlatformTheme {
    fn current(&self) -> Result<ThemeMode> {
        Ok(ThemeMode::from_dark(detect_system_dark_mode()))
    }
}

/// Poll the platform color scheme and emit `SystemThemeChanged` on every transition.
pub fn watch_system_theme(
    sender: UnboundedSender<Message>,
    initial: ThemeMode,
    period: Duration,
) -> JoinHandle<()> {
    watch_system_theme_with(detect_system_dark_mode, sender, initial, period)
}

/// Like [`watch_system_theme`] with a custom probe. The probe runs on the
/// blocking pool since detection may spawn a subprocess.
pub fn watch_system_theme_with<F>(
    probe: F,
    sender: UnboundedSender<Message>,
    initial: ThemeMode,
    period: Duration,
) -> JoinHandle<()>
where
    F: Fn() -> bool + Clone + Send + 'static,
{
    tokio::task::spawn_local(async move {
        let mut last = initial;
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the initial mode is already known.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let is_dark = match tokio::task::spawn_blocking(probe.clone()).await {
                Ok(is_dark) => is_dark,
                Err(err) => {
                    warn!("System theme probe failed: {err}");
                    continue;
                }
            };
            let mode = ThemeMode::from_dark(is_dark);
            if mode == last {
                continue;
            }
            debug!(from = %last, to = %mode, "System color scheme changed");
            last = mode;
            if sender.send(Message::SystemThemeChanged(mode)).is_err() {
                debug!("Trigger channel closed, stopping system theme watcher");
                break;
            }
        }
    })
}
