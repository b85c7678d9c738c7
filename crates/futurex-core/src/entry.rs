use serde::{Deserialize, Serialize};

/// Who ran the evaluation for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TestType {
    Official,
    ThirdParty,
}

impl TryFrom<u8> for TestType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TestType::Official),
            1 => Ok(TestType::ThirdParty),
            other => Err(format!("unknown test type: {}", other)),
        }
    }
}

impl From<TestType> for u8 {
    fn from(value: TestType) -> Self {
        match value {
            TestType::Official => 0,
            TestType::ThirdParty => 1,
        }
    }
}

impl TestType {
    pub fn label(&self) -> &'static str {
        match self {
            TestType::Official => "Official",
            TestType::ThirdParty => "Third-party",
        }
    }
}

pub const UNDISCLOSED_LABEL: &str = "Undisclosed";

/// Public label for a model name; names in `undisclosed` are masked.
pub fn masked_model_name<'a>(name: &'a str, undisclosed: &[String]) -> &'a str {
    if undisclosed.iter().any(|m| m == name) {
        UNDISCLOSED_LABEL
    } else {
        name
    }
}

/// One model's scored results for a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub model_name: String,
    pub agent_framework: String,
    pub organization: String,
    pub overall_score: f64,
    pub number_of_events: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_type: Option<TestType>,
    pub level1_score: f64,
    pub level2_score: f64,
    pub level3_score: f64,
    pub level4_score: f64,
}

impl LeaderboardEntry {
    /// Model-name column text; undisclosed models are masked.
    pub fn display_model_name(&self, undisclosed: &[String]) -> String {
        masked_model_name(&self.model_name, undisclosed).to_string()
    }

    /// `NAME (Agent Framework)` column text.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.model_name, self.agent_framework)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_deserializes_camel_case() {
        let json = r#"{
            "modelName": "GPT-4o",
            "agentFramework": "SmolAgent",
            "organization": "OpenAI",
            "overallScore": 41.25,
            "numberOfEvents": 1200,
            "testType": 1,
            "level1Score": 60,
            "level2Score": 45.5,
            "level3Score": 30,
            "level4Score": 12
        }"#;
        let entry: LeaderboardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.model_name, "GPT-4o");
        assert_eq!(entry.number_of_events, 1200);
        assert_eq!(entry.test_type, Some(TestType::ThirdParty));
        assert_eq!(entry.level2_score, 45.5);
        assert_eq!(entry.display_name(), "GPT-4o (SmolAgent)");
    }

    #[test]
    fn test_unknown_test_type_rejected() {
        let json = r#"{"modelName":"x","agentFramework":"y","organization":"z",
            "overallScore":1,"numberOfEvents":1,"testType":7,
            "level1Score":1,"level2Score":1,"level3Score":1,"level4Score":1}"#;
        assert!(serde_json::from_str::<LeaderboardEntry>(json).is_err());
    }

    #[test]
    fn test_undisclosed_model_masked() {
        let json = r#"{"modelName":"Manus","agentFramework":"Manus","organization":"Monica",
            "overallScore":1,"numberOfEvents":1,
            "level1Score":1,"level2Score":1,"level3Score":1,"level4Score":1}"#;
        let entry: LeaderboardEntry = serde_json::from_str(json).unwrap();
        let undisclosed = vec!["Manus".to_string()];
        assert_eq!(entry.display_model_name(&undisclosed), "Undisclosed");
        assert_eq!(entry.display_model_name(&[]), "Manus");
        assert_eq!(entry.test_type, None);
    }
}
