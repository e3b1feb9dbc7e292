//! Error handling for the clinical scoring core.

/// Errors that can occur during scoring and risk assessment
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// A required question has no recorded answer
    #[error("Missing answer for required question '{0}'")]
    MissingAnswer(String),

    /// An answer value lies outside its question's option range
    #[error("Answer for '{question}' is {value}, outside the valid range 0-{max}")]
    InvalidAnswerValue {
        /// Id of the question the answer belongs to
        question: String,
        /// The offending value
        value: i32,
        /// Highest allowed value for the question
        max: i32,
    },

    /// A score lies outside the valid range for its scale
    #[error("{scale} score {value} is outside the valid range {min}-{max}")]
    ScoreOutOfRange {
        /// Name of the clinical scale
        scale: &'static str,
        /// The offending score
        value: i32,
        /// Lowest valid score
        min: i32,
        /// Highest valid score
        max: i32,
    },
}

/// Alias for Result with `ScoringError`
pub type Result<T> = std::result::Result<T, ScoringError>;
