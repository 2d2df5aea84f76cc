//! Advisory password-strength scoring.
//!
//! Feedback for the strength meter only; a weak score never fails
//! validation.

/// Label shown next to the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLabel {
    /// Nothing typed yet; the meter shows its resting caption.
    Neutral,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Caption text for the meter.
    pub fn caption(self) -> &'static str {
        match self {
            StrengthLabel::Neutral => "Password Strength",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

/// An additive 0–6 score plus its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a password: +1 each for length >= 8, length >= 12, a lowercase
/// letter, an uppercase letter, a digit, and a character outside
/// `[A-Za-z0-9]`. An empty password scores nothing and stays neutral.
pub fn password_strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength {
            score: 0,
            label: StrengthLabel::Neutral,
        };
    }

    let len = password.chars().count();
    let mut score = 0u8;
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3 => StrengthLabel::Fair,
        4 => StrengthLabel::Good,
        _ => StrengthLabel::Strong,
    };

    Strength { score, label }
}
