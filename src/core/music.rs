/// Browsers refuse to start audio before a user gesture, so background music
/// goes through a one-shot unlock latch:
/// `NotReady` (still loading) -> `ReadyUnstarted` (waiting for a gesture)
/// -> `Started` (first playback succeeded; gesture listeners released).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Unlock {
    #[default]
    NotReady,
    ReadyUnstarted,
    Started,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Playback state behind the music toggle button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MusicState {
    unlock: Unlock,
    playing: bool,
    // A play request is in flight; further gestures must not stack another
    pending: bool,
}

impl MusicState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlock(&self) -> Unlock {
        self.unlock
    }

    pub fn is_loaded(&self) -> bool {
        self.unlock != Unlock::NotReady
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Audio can play through. Returns true on the first call only.
    pub fn mark_loaded(&mut self) -> bool {
        if self.unlock == Unlock::NotReady {
            self.unlock = Unlock::ReadyUnstarted;
            true
        } else {
            false
        }
    }

    /// Whether a user gesture should attempt to start playback.
    pub fn wants_interaction(&self) -> bool {
        self.unlock == Unlock::ReadyUnstarted && !self.playing && !self.pending
    }

    /// Claim the right to call `play()`. Returns false while the audio is
    /// not loaded, already playing, or another request is still in flight.
    pub fn request_play(&mut self) -> bool {
        if !self.is_loaded() || self.playing || self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Playback actually began. Returns true if this released the latch.
    pub fn play_started(&mut self) -> bool {
        self.pending = false;
        self.playing = true;
        if self.unlock == Unlock::ReadyUnstarted {
            self.unlock = Unlock::Started;
            true
        } else {
            false
        }
    }

    /// The browser rejected playback; the latch stays armed for a retry.
    pub fn play_failed(&mut self) {
        self.pending = false;
        self.playing = false;
    }

    pub fn paused(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&self) -> Option<PlaybackCommand> {
        if !self.is_loaded() {
            return None;
        }
        Some(if self.playing {
            PlaybackCommand::Pause
        } else {
            PlaybackCommand::Play
        })
    }

    /// Accessible label for the toggle button.
    pub fn label(&self) -> &'static str {
        if self.playing {
            "Mute sound"
        } else {
            "Play sound"
        }
    }
}
