use rand::Rng;
use std::num::NonZeroU32;

/// A source of die faces.
///
/// Every [rand::Rng] is a roller, so `rand::thread_rng()` or a seeded
/// `StdRng` can be passed wherever one is expected.
pub trait Roller {
    /// Returns a uniformly distributed face in `1..=faces`.
    fn roll(&mut self, faces: NonZeroU32) -> u32;
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, faces: NonZeroU32) -> u32 {
        self.gen_range(1..=faces.get())
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;

#[cfg(test)]
mod scripted {
    use super::*;

    /// Replays a fixed list of faces, cycling when it runs out.
    /// Faces larger than the die are wrapped into range.
    pub(crate) struct ScriptedRoller {
        faces: Vec<u32>,
        next: usize,
    }

    impl ScriptedRoller {
        pub fn new(faces: Vec<u32>) -> Self {
            Self { faces, next: 0 }
        }
    }

    impl Roller for ScriptedRoller {
        fn roll(&mut self, faces: NonZeroU32) -> u32 {
            let face = self.faces[self.next % self.faces.len()];
            self.next += 1;
            (face - 1) % faces.get() + 1
        }
    }
}
