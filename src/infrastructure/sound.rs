//! Sound cue adapters.

use std::io::Write;

use crate::domain::ports::{SoundCue, SoundPort};

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSound;

impl SoundPort for SilentSound {
    fn play(&self, _cue: SoundCue) {}
}

/// Rings the terminal bell for gift cues. Clicks stay silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl TerminalBell {
    const BEL: &'static [u8] = b"\x07";

    /// Returns whether `cue` rings the bell.
    #[must_use]
    pub const fn rings_for(cue: SoundCue) -> bool {
        matches!(cue, SoundCue::Open | SoundCue::Complete)
    }

    fn ring(mut out: impl Write) -> std::io::Result<()> {
        out.write_all(Self::BEL)?;
        out.flush()
    }
}

impl SoundPort for TerminalBell {
    fn play(&self, cue: SoundCue) {
        if !Self::rings_for(cue) {
            return;
        }
        if let Err(e) = Self::ring(std::io::stdout()) {
            tracing::warn!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Picks the adapter for the configured sound setting.
#[must_use]
pub fn sound_port(enabled: bool) -> Box<dyn SoundPort> {
    if enabled {
        Box::new(TerminalBell)
    } else {
        Box::new(SilentSound)
    }
}
