use serde::{Deserialize, Serialize};

use crate::data::ions::Ion;

/// Bonding class of a compound, as the quiz asks students to identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Ionic,
    Covalent,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Ionic => "ionic",
            Kind::Covalent => "covalent",
        }
    }
}

/// One component of a compound formula, for display and naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaPart {
    pub symbol: String, // Display symbol, may carry charge notation (e.g. "Fe3+")
    pub core: String,   // Bare element/group symbol (e.g. "Fe", "SO4")
    pub count: u32,     // Subscript count, >= 1
    pub poly: bool,     // Polyatomic groups get parenthesized when count > 1
}

impl FormulaPart {
    /// Part for a plain element with an atom count (covalent compounds).
    pub fn element(symbol: &str, count: u32) -> Self {
        FormulaPart {
            symbol: symbol.to_string(),
            core: symbol.to_string(),
            count,
            poly: false,
        }
    }

    /// Part for an ion taken `count` times in a neutral formula unit.
    pub fn from_ion(ion: &Ion, count: u32) -> Self {
        FormulaPart {
            symbol: ion.symbol.to_string(),
            core: ion.core.to_string(),
            count,
            poly: ion.poly,
        }
    }
}

/// Running quiz score. The UI owns the value; the arithmetic lives here.
///
/// A correct answer is worth +1 and extends the streak, a wrong answer
/// costs 1 point (never going below zero) and resets the streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
    pub streak: u32,
}

impl Score {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
        } else {
            self.correct = self.correct.saturating_sub(1);
            self.streak = 0;
        }
    }

    pub fn accuracy(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f32 / self.total as f32 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rewards_and_penalizes() {
        let mut score = Score::default();
        score.record(true);
        score.record(true);
        assert_eq!(score, Score { correct: 2, total: 2, streak: 2 });

        score.record(false);
        assert_eq!(score, Score { correct: 1, total: 3, streak: 0 });
    }

    #[test]
    fn score_never_goes_negative() {
        let mut score = Score::default();
        score.record(false);
        score.record(false);
        assert_eq!(score.correct, 0);
        assert_eq!(score.total, 2);
    }

    #[test]
    fn accuracy_handles_empty_score() {
        assert_eq!(Score::default().accuracy(), 0.0);
        let score = Score { correct: 1, total: 2, streak: 0 };
        assert!((score.accuracy() - 50.0).abs() < f32::EPSILON);
    }
}
