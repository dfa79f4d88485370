//! Input and output types of a medicine safety analysis, and the seam that
//! turns one into the other.
//!
//! The shipped [`MockAnalyzer`] does no real work: every field except the
//! risk level is a fixed list. Swap in another [`Analyzer`] to hook up a real
//! service.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    /// Value used for the `<option>` element.
    pub fn value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub age: String,
    pub gender: Option<Gender>,
    pub medicine: String,
}

impl UserInfo {
    pub fn has_demographics(&self) -> bool {
        !self.age.is_empty() && self.gender.is_some()
    }

    pub fn has_medicine(&self) -> bool {
        !self.medicine.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Ages strictly above this are flagged as `Medium`.
    pub const SENIOR_AGE: i64 = 65;

    /// Unparseable ages are treated as `Low`.
    pub fn for_age(age: &str) -> Self {
        match parse_leading_int(age) {
            Some(years) if years > Self::SENIOR_AGE => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "text-success",
            RiskLevel::Medium => "text-warning",
            RiskLevel::High => "text-danger",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            RiskLevel::Low => "✓",
            RiskLevel::Medium | RiskLevel::High => "⚠",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub composition: Vec<String>,
    pub risk_level: RiskLevel,
    pub side_effects: Vec<String>,
    pub interactions: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("analysis service failed: {0}")]
    Service(String),
}

pub trait Analyzer {
    fn analyze(&self, info: &UserInfo) -> Result<AnalysisResult, AnalysisError>;
}

/// Placeholder analyzer returning the same findings for every medicine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer;

const MOCK_COMPOSITION: &[&str] = &[
    "Acetaminophen 500mg",
    "Caffeine 65mg",
    "Phenylephrine HCl 5mg",
    "Dextromethorphan HBr 15mg",
];

const MOCK_SIDE_EFFECTS: &[&str] = &[
    "Drowsiness or dizziness",
    "Nausea or stomach upset",
    "Dry mouth",
    "Restlessness (due to caffeine)",
];

const MOCK_INTERACTIONS: &[&str] = &[
    "Warfarin (blood thinner) - increased bleeding risk",
    "MAO inhibitors - dangerous blood pressure changes",
    "Other acetaminophen products - liver damage risk",
];

const MOCK_RECOMMENDATIONS: &[&str] = &[
    "Take with food to reduce stomach irritation",
    "Avoid alcohol consumption",
    "Do not exceed 4 doses in 24 hours",
    "Consult doctor if symptoms persist beyond 7 days",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, info: &UserInfo) -> Result<AnalysisResult, AnalysisError> {
        if info.age.is_empty() {
            return Err(AnalysisError::MissingField("age"));
        }
        if info.gender.is_none() {
            return Err(AnalysisError::MissingField("gender"));
        }
        if !info.has_medicine() {
            return Err(AnalysisError::MissingField("medicine"));
        }

        Ok(AnalysisResult {
            composition: owned(MOCK_COMPOSITION),
            risk_level: RiskLevel::for_age(&info.age),
            side_effects: owned(MOCK_SIDE_EFFECTS),
            interactions: owned(MOCK_INTERACTIONS),
            recommendations: owned(MOCK_RECOMMENDATIONS),
        })
    }
}

/// Shared analyzer that can be passed around as a component property.
#[derive(Clone)]
pub struct AnalyzerHandle(Rc<dyn Analyzer>);

impl AnalyzerHandle {
    pub fn new<A: Analyzer + 'static>(analyzer: A) -> Self {
        Self(Rc::new(analyzer))
    }
}

impl Default for AnalyzerHandle {
    fn default() -> Self {
        Self::new(MockAnalyzer)
    }
}

impl PartialEq for AnalyzerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for AnalyzerHandle {
    type Target = dyn Analyzer;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Reads an integer the way a browser's `parseInt(s)` does: leading
/// whitespace and an optional sign are skipped, a `0x` prefix switches to
/// hex, and parsing stops at the first non-digit. Returns `None` when no
/// digit was consumed.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut consumed = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value.saturating_mul(radix as i64).saturating_add(d as i64);
        consumed = true;
    }

    if !consumed {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(age: &str, gender: Gender, medicine: &str) -> UserInfo {
        UserInfo {
            age: age.to_string(),
            gender: Some(gender),
            medicine: medicine.to_string(),
        }
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("70"), Some(70));
        assert_eq!(parse_leading_int("  42 years"), Some(42));
        assert_eq!(parse_leading_int("+66"), Some(66));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("65.9"), Some(65));
        assert_eq!(parse_leading_int("0x50"), Some(80));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("0x"), None);
    }

    #[test]
    fn test_risk_level_threshold() {
        for age in 0..=120 {
            let expected = if age > 65 { RiskLevel::Medium } else { RiskLevel::Low };
            assert_eq!(RiskLevel::for_age(&age.to_string()), expected, "age {}", age);
        }
        assert_eq!(RiskLevel::for_age(""), RiskLevel::Low);
        assert_eq!(RiskLevel::for_age("old"), RiskLevel::Low);
        assert_eq!(RiskLevel::for_age("66abc"), RiskLevel::Medium);
        assert_eq!(RiskLevel::for_age("99999999999999999999999"), RiskLevel::Medium);
    }

    #[test]
    fn test_senior_tylenol_scenario() {
        let result = MockAnalyzer
            .analyze(&info("70", Gender::Male, "Tylenol"))
            .unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.composition.len(), 4);
        assert_eq!(result.interactions.len(), 3);
        assert_eq!(result.side_effects.len(), 4);
        assert_eq!(result.recommendations.len(), 4);
    }

    #[test]
    fn test_adult_ibuprofen_scenario() {
        let result = MockAnalyzer
            .analyze(&info("30", Gender::Female, "Ibuprofen"))
            .unwrap();
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_mock_ignores_medicine_and_gender() {
        let a = MockAnalyzer.analyze(&info("40", Gender::Other, "Aspirin")).unwrap();
        let b = MockAnalyzer
            .analyze(&info("40", Gender::PreferNotToSay, "Something else"))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_incomplete_user_info_is_rejected() {
        assert_eq!(
            MockAnalyzer.analyze(&UserInfo::default()),
            Err(AnalysisError::MissingField("age"))
        );

        let mut partial = info("30", Gender::Female, "");
        partial.gender = None;
        assert_eq!(MockAnalyzer.analyze(&partial), Err(AnalysisError::MissingField("gender")));

        partial.gender = Some(Gender::Female);
        assert_eq!(MockAnalyzer.analyze(&partial), Err(AnalysisError::MissingField("medicine")));
        assert_eq!(
            AnalysisError::MissingField("medicine").to_string(),
            "missing medicine"
        );
    }

    #[test]
    fn test_gender_values() {
        for gender in Gender::ALL {
            assert_eq!(Gender::from_value(gender.value()), Some(gender));
        }
        assert_eq!(Gender::from_value(""), None);
        assert_eq!(
            serde_json::to_string(&Gender::PreferNotToSay).unwrap(),
            "\"prefer-not-to-say\""
        );
    }

    #[test]
    fn test_result_json_shape() {
        let result = MockAnalyzer.analyze(&info("80", Gender::Male, "x")).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["riskLevel"], "medium");
        assert!(json["sideEffects"].is_array());
        assert!(json.get("side_effects").is_none());
    }

    #[test]
    fn test_user_info_completeness() {
        let mut user = UserInfo::default();
        assert!(!user.has_demographics());
        user.age = "30".into();
        assert!(!user.has_demographics());
        user.gender = Some(Gender::Female);
        assert!(user.has_demographics());
        assert!(!user.has_medicine());
        user.medicine = "Ibuprofen".into();
        assert!(user.has_medicine());
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = AnalyzerHandle::default();
        let b = a.clone();
        assert!(a == b);
        assert!(a != AnalyzerHandle::default());
    }
}
