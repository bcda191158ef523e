use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::app::capabilities::{PreferenceStore, SystemTheme, Viewport};
use crate::app::domain::theme::{THEME_KEY, THEME_OVERRIDE_KEY};
use crate::app::domain::{ThemeMode, ThemeState};
use crate::app::infrastructure::error::Result;

/// Owns the session's [`ThemeState`] and keeps the viewport and the
/// preference store in step with it.
pub struct ThemeController {
    state: Cell<ThemeState>,
    preferences: Rc<dyn PreferenceStore>,
    viewport: Rc<dyn Viewport>,
}

impl ThemeController {
    pub fn new(
        preferences: Rc<dyn PreferenceStore>,
        system: &dyn SystemTheme,
        viewport: Rc<dyn Viewport>,
    ) -> Self {
        let state = Self::compute_initial(preferences.as_ref(), system);
        info!(mode = %state.mode, user_override = state.user_override, "Initial theme");
        Self {
            state: Cell::new(state),
            preferences,
            viewport,
        }
    }

    /// Persisted mode while the user override is active, otherwise the system preference.
    ///
    /// Unreadable preferences count as absent and a failing system query as light.
    pub fn compute_initial(preferences: &dyn PreferenceStore, system: &dyn SystemTheme) -> ThemeState {
        let user_override = read_preference(preferences, THEME_OVERRIDE_KEY).as_deref() == Some("true");

        let mode = if user_override {
            read_preference(preferences, THEME_KEY)
                .and_then(|value| match value.parse() {
                    Ok(mode) => Some(mode),
                    Err(err) => {
                        warn!("Ignoring persisted theme: {err}");
                        None
                    }
                })
                .unwrap_or_default()
        } else {
            system.current().unwrap_or_else(|err| {
                warn!("System theme query failed, using light: {err}");
                ThemeMode::Light
            })
        };

        ThemeState {
            mode,
            user_override,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.get().mode
    }

    /// Flip the mode and remember it as the user's explicit choice.
    pub fn toggle(&self) {
        let mode = self.mode().toggled();
        self.state.set(ThemeState {
            mode,
            user_override: true,
        });
        debug!(mode = %mode, "Theme toggled by user");

        report(THEME_KEY, self.preferences.set(THEME_KEY, mode.as_str()));
        report(THEME_OVERRIDE_KEY, self.preferences.set(THEME_OVERRIDE_KEY, "true"));
        self.apply();
    }

    /// Follow a platform color scheme change. Always discards the user override.
    pub fn on_system_change(&self, mode: ThemeMode) {
        let previous = self.state.replace(ThemeState {
            mode,
            user_override: false,
        });
        if previous.user_override {
            info!(mode = %mode, "System theme changed, dropping user override");
        } else {
            debug!(mode = %mode, "System theme changed");
        }

        report(THEME_OVERRIDE_KEY, self.preferences.remove(THEME_OVERRIDE_KEY));
        report(THEME_KEY, self.preferences.set(THEME_KEY, mode.as_str()));
        self.apply();
    }

    /// Project the current mode onto the viewport. No state changes.
    pub fn apply(&self) {
        let mode = self.mode();
        self.viewport.set_theme(mode);
        self.viewport.set_theme_indicator(mode.toggle_icon());
    }
}

fn read_preference(preferences: &dyn PreferenceStore, key: &str) -> Option<String> {
    preferences.get(key).unwrap_or_else(|err| {
        warn!(key, "Could not read preference: {err}");
        None
    })
}

fn report(key: &str, result: Result<()>) {
    if let Err(err) = result {
        warn!(key, "Could not persist preference: {err}");
    }
}
