use super::de;
use serde::Deserialize;

/// One entry of a user's college education history.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EducationInfo {
    #[serde(default, deserialize_with = "de::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "de::string_list")]
    pub concentrations: Vec<String>,
}

/// High school details. The remote API reports up to two schools per user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HighschoolInfo {
    #[serde(default, deserialize_with = "de::string")]
    pub hs1_name: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub hs2_name: Option<String>,
    #[serde(default, deserialize_with = "de::string")]
    pub grad_year: Option<String>,
    #[serde(default, deserialize_with = "de::uint")]
    pub hs1_id: Option<u64>,
    #[serde(default, deserialize_with = "de::uint")]
    pub hs2_id: Option<u64>,
}
