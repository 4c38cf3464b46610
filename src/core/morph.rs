use super::constants::MAX_MORPH_STEP;

/// Which extreme a direct jump lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphTarget {
    Formed,
    Chaos,
}

/// Discrete formed <-> chaos position plus the direction the next tap moves it.
///
/// Step 0 is the fully formed tree, step 5 is full chaos. A tap at either
/// extreme bounces one step back instead of resting there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorphState {
    step: u8,
    expanding: bool,
}

impl Default for MorphState {
    fn default() -> Self {
        Self {
            step: 0,
            expanding: true,
        }
    }
}

impl MorphState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn step(&self) -> u8 {
        self.step
    }

    #[inline]
    pub fn is_expanding(&self) -> bool {
        self.expanding
    }

    /// Render-facing value `step / 5`: 0.0 is the formed tree, 1.0 full chaos.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.step as f32 / MAX_MORPH_STEP as f32
    }

    pub fn advance(&mut self) {
        if self.expanding {
            if self.step < MAX_MORPH_STEP {
                self.step += 1;
            } else {
                self.expanding = false;
                self.step = MAX_MORPH_STEP - 1;
            }
        } else if self.step > 0 {
            self.step -= 1;
        } else {
            self.expanding = true;
            self.step = 1;
        }
    }

    pub fn jump_to(&mut self, target: MorphTarget) {
        match target {
            MorphTarget::Formed => {
                self.step = 0;
                self.expanding = true;
            }
            MorphTarget::Chaos => {
                self.step = MAX_MORPH_STEP;
                self.expanding = false;
            }
        }
    }
}
