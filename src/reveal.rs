use crate::error::SiteError;

// absorbs float rounding only, never a visibly lower ratio
const RATIO_TOLERANCE: f64 = f64::EPSILON * 16.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    pub section_id: String,
    pub revealed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Observing,
    Released,
}

/// One-shot latch: the first sample at or above the threshold reveals the
/// section for good and releases the observation.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    state: RevealState,
    threshold: f64,
    observation: Observation,
}

impl RevealObserver {
    pub fn new(section_id: impl Into<String>, threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            0.0
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            state: RevealState {
                section_id: section_id.into(),
                revealed: false,
            },
            threshold,
            observation: Observation::Observing,
        }
    }

    /// Feeds one sample. Returns true only for the call that revealed.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if self.observation == Observation::Released || self.state.revealed {
            return false;
        }
        if !sample.is_intersecting || sample.ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.state.revealed = true;
        self.release();
        true
    }

    pub fn fail_open(&mut self, reason: SiteError) -> bool {
        if self.state.revealed {
            self.release();
            return false;
        }
        log::debug!("revealing #{} without observer: {reason}", self.state.section_id);
        self.state.revealed = true;
        self.release();
        true
    }

    pub fn release(&mut self) -> bool {
        if self.observation == Observation::Released {
            return false;
        }
        self.observation = Observation::Released;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.state.revealed
    }

    pub fn is_observing(&self) -> bool {
        self.observation == Observation::Observing
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> &RevealState {
        &self.state
    }
}
