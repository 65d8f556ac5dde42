// src/page/context.rs

/// Header context threaded through one page walk.
///
/// A competition header always starts a fresh competition with no stage; a
/// stage header keeps the competition and replaces the stage. A stage seen
/// before any competition header is recorded under an empty competition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CompetitionContext {
    #[default]
    NoCompetition,
    InCompetition { competition: String },
    InStage { competition: String, stage: String },
}

impl CompetitionContext {
    pub fn enter_competition(self, name: String) -> Self {
        if name.is_empty() {
            CompetitionContext::NoCompetition
        } else {
            CompetitionContext::InCompetition { competition: name }
        }
    }

    pub fn enter_stage(self, stage: String) -> Self {
        let competition = match self {
            CompetitionContext::NoCompetition => s!(),
            CompetitionContext::InCompetition { competition }
            | CompetitionContext::InStage { competition, .. } => competition,
        };
        match (competition.is_empty(), stage.is_empty()) {
            (true, true) => CompetitionContext::NoCompetition,
            (false, true) => CompetitionContext::InCompetition { competition },
            _ => CompetitionContext::InStage { competition, stage },
        }
    }

    pub fn competition(&self) -> &str {
        match self {
            CompetitionContext::NoCompetition => "",
            CompetitionContext::InCompetition { competition }
            | CompetitionContext::InStage { competition, .. } => competition,
        }
    }

    pub fn stage(&self) -> &str {
        match self {
            CompetitionContext::InStage { stage, .. } => stage,
            _ => "",
        }
    }
}
