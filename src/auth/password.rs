use serde::Serialize;

/// Strength bucket derived from the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: StrengthLabel,
}

impl PasswordStrength {
    pub fn feedback(&self) -> &'static str {
        match self.label {
            StrengthLabel::Weak => "Weak password",
            StrengthLabel::Medium => "Medium password",
            StrengthLabel::Strong => "Strong password",
        }
    }
}

/// Scores a password one point each for length (8+), an uppercase letter, a
/// lowercase letter, a digit and a symbol.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0u8;

    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
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
        3 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    };

    PasswordStrength { score, label }
}
