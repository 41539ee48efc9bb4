use crate::Error;

/// What a range does with a starting hand. Cells nobody mentions fold.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Action {
    Raise,
    Call,
    #[default]
    Fold,
    ThreeBet,
}

impl Action {
    pub const fn all() -> [Self; 4] {
        [Action::Raise, Action::Call, Action::Fold, Action::ThreeBet]
    }
    /// anything but a fold puts the hand in play
    pub fn is_played(&self) -> bool {
        !matches!(self, Action::Fold)
    }
    /// boundary label, as written in range strings and json
    pub const fn label(&self) -> &'static str {
        match self {
            Action::Raise => "raise",
            Action::Call => "call",
            Action::Fold => "fold",
            Action::ThreeBet => "3bet",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" | "r" => Ok(Action::Raise),
            "call" | "c" => Ok(Action::Call),
            "fold" | "f" => Ok(Action::Fold),
            "3bet" | "3-bet" => Ok(Action::ThreeBet),
            _ => Err(Error::InvalidInput(format!("invalid action: {:?}", s))),
        }
    }
}
impl TryFrom<String> for Action {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.label().to_string()
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Raise => write!(f, "Raise"),
            Action::Call => write!(f, "Call"),
            Action::Fold => write!(f, "Fold"),
            Action::ThreeBet => write!(f, "3-Bet"),
        }
    }
}
