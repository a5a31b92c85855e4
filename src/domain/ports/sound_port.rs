//! Sound cue port definition.

/// Moments that may be accompanied by a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A navigation control was activated.
    Click,
    /// A gift was opened.
    Open,
    /// The last gift of the round was opened.
    Complete,
}

/// Port for playing sound cues.
pub trait SoundPort {
    /// Plays a cue. Failures are the adapter's concern and never surface here.
    fn play(&self, cue: SoundCue);
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every cue it is asked to play.
    #[derive(Default, Clone)]
    pub struct MockSoundPort {
        pub played: Rc<RefCell<Vec<SoundCue>>>,
    }

    impl MockSoundPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn cues(&self) -> Vec<SoundCue> {
            self.played.borrow().clone()
        }
    }

    impl SoundPort for MockSoundPort {
        fn play(&self, cue: SoundCue) {
            self.played.borrow_mut().push(cue);
        }
    }
}
