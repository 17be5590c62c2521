//! Experiment cell lifecycle.

use optima_core::errors::BatchError;

use crate::variants::PromptVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Pending,
    Analyzing,
    Solving,
    Scoring,
    Buffered,
    Flushed,
    Failed,
}

impl CellState {
    /// Valid forward transitions.
    pub fn valid_next(&self) -> &'static [CellState] {
        match self {
            Self::Pending => &[Self::Analyzing, Self::Failed],
            Self::Analyzing => &[Self::Solving, Self::Failed],
            Self::Solving => &[Self::Scoring, Self::Failed],
            Self::Scoring => &[Self::Buffered, Self::Failed],
            Self::Buffered => &[Self::Flushed, Self::Failed],
            Self::Flushed | Self::Failed => &[],
        }
    }

    pub fn can_transition_to(&self, target: CellState) -> bool {
        self.valid_next().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.valid_next().is_empty()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Analyzing => "analyzing",
            Self::Solving => "solving",
            Self::Scoring => "scoring",
            Self::Buffered => "buffered",
            Self::Flushed => "flushed",
            Self::Failed => "failed",
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One (problem, prompt variant, persona) unit of work.
#[derive(Debug, Clone)]
pub struct ExperimentCell {
    /// Fresh uuid v4, never reused.
    pub run_id: String,
    pub problem_id: String,
    pub variant: PromptVariant,
    state: CellState,
}

impl ExperimentCell {
    pub fn new(problem_id: &str, variant: PromptVariant) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            problem_id: problem_id.to_string(),
            variant,
            state: CellState::Pending,
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn advance(&mut self, target: CellState) -> Result<(), BatchError> {
        if !self.state.can_transition_to(target) {
            return Err(BatchError::InvalidTransition {
                from: self.state.name().to_string(),
                to: target.name().to_string(),
            });
        }
        self.state = target;
        Ok(())
    }

    /// Mark failed from any non-terminal state.
    pub fn fail(&mut self) -> Result<(), BatchError> {
        self.advance(CellState::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> ExperimentCell {
        ExperimentCell::new("p-1", PromptVariant::baseline())
    }

    #[test]
    fn happy_path_reaches_flushed() {
        let mut c = cell();
        for next in [
            CellState::Analyzing,
            CellState::Solving,
            CellState::Scoring,
            CellState::Buffered,
            CellState::Flushed,
        ] {
            c.advance(next).unwrap();
        }
        assert!(c.state().is_terminal());
    }

    #[test]
    fn skipping_a_stage_is_rejected() {
        let mut c = cell();
        let err = c.advance(CellState::Scoring).unwrap_err();
        assert_eq!(
            err,
            BatchError::InvalidTransition {
                from: "pending".into(),
                to: "scoring".into()
            }
        );
        assert_eq!(c.state(), CellState::Pending);
    }

    #[test]
    fn failed_is_reachable_from_every_live_state_and_final() {
        let path = [
            CellState::Analyzing,
            CellState::Solving,
            CellState::Scoring,
            CellState::Buffered,
        ];
        for depth in 0..=path.len() {
            let mut c = cell();
            for next in &path[..depth] {
                c.advance(*next).unwrap();
            }
            c.fail().unwrap();
            assert!(c.fail().is_err());
            assert!(c.advance(CellState::Analyzing).is_err());
        }
    }

    #[test]
    fn run_ids_are_fresh() {
        assert_ne!(cell().run_id, cell().run_id);
    }
}
