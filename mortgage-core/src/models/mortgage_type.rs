use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MortgageType {
    Repayment,
    InterestOnly,
}

impl MortgageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repayment => "Repayment",
            Self::InterestOnly => "Interest Only",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Repayment" => Some(Self::Repayment),
            "Interest Only" => Some(Self::InterestOnly),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn as_str_round_trips_through_parse() {
        for ty in [MortgageType::Repayment, MortgageType::InterestOnly] {
            assert_eq!(MortgageType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn parse_rejects_unknown_labels() {
        assert_eq!(MortgageType::parse("repayment"), None);
        assert_eq!(MortgageType::parse(""), None);
        assert_eq!(MortgageType::parse("Balloon"), None);
    }
}
