use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author-assigned difficulty label for a card.
///
/// Display metadata only: review order is driven entirely by `priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
  Easy,
  #[default]
  Medium,
  Hard,
}

impl Difficulty {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "easy" => Some(Self::Easy),
      "medium" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Easy => "easy",
      Self::Medium => "medium",
      Self::Hard => "hard",
    }
  }
}

/// A flashcard as handed in by the owning application.
///
/// The scheduler never creates, persists, or deletes cards. During one
/// scheduling pass it reads the review-history fields and rewrites
/// `priority` in place; everything else is opaque payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
  pub id: i64,
  pub front: String,
  pub back: String,
  pub difficulty: Difficulty,

  /// Ranking key driving review order; higher = reviewed sooner.
  /// Recomputed by the priority metric and never validated, so negative
  /// values are fine.
  pub priority: i64,
  /// Lifetime incorrect answers. Owned by the review flow; read here.
  pub incorrect_count: i64,
  /// None = never reviewed.
  pub last_reviewed: Option<DateTime<Utc>>,
}

impl Card {
  pub fn new(front: String, back: String, difficulty: Difficulty) -> Self {
    Self {
      id: 0,
      front,
      back,
      difficulty,
      priority: 0,
      incorrect_count: 0,
      last_reviewed: None,
    }
  }
}
