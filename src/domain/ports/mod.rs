mod sound_port;

pub use sound_port::{SoundCue, SoundPort};
