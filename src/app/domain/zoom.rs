use std::fmt;
use std::str::FromStr;

pub const ZOOM_MIN: u32 = 50;
pub const ZOOM_MAX: u32 = 200;
pub const ZOOM_STEP: u32 = 10;
pub const ZOOM_DEFAULT: u32 = 100;

/// Zoom commands carried by the menu (`"in"`, `"out"`, `"reset"`), toolbar and keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    In,
    Out,
    Reset,
}

impl FromStr for ZoomCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "reset" => Ok(Self::Reset),
            other => Err(format!("unknown zoom command {:?}", other)),
        }
    }
}

/// Font scale of the content pane, in percent.
///
/// Always within `ZOOM_MIN..=ZOOM_MAX` and a multiple of `ZOOM_STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    percent: u32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            percent: ZOOM_DEFAULT,
        }
    }
}

impl ZoomState {
    pub fn percent(self) -> u32 {
        self.percent
    }

    pub fn apply(&mut self, command: ZoomCommand) {
        self.percent = match command {
            ZoomCommand::In => (self.percent + ZOOM_STEP).min(ZOOM_MAX),
            ZoomCommand::Out => self.percent.saturating_sub(ZOOM_STEP).max(ZOOM_MIN),
            ZoomCommand::Reset => ZOOM_DEFAULT,
        };
    }

    /// Text shown in the zoom level label.
    pub fn label(self) -> String {
        format!("{}%", self.percent)
    }
}

impl fmt::Display for ZoomState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent)
    }
}
