use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ================================
// Document kinds
// ================================

/// Version stamped on documents created by the editors.
pub const CURRENT_DSL_VERSION: &str = "1.0";

/// Discriminator carried in the `kind` field of every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Customer Journey Map
    Cjm,
    /// Service Blueprint
    Sbp,
    /// Outcome / KPI tree
    Outcome,
    /// Enablement Map
    Em,
}

impl DocumentKind {
    /// Canonical emission order.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Cjm,
        DocumentKind::Sbp,
        DocumentKind::Outcome,
        DocumentKind::Em,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Cjm => "cjm",
            DocumentKind::Sbp => "sbp",
            DocumentKind::Outcome => "outcome",
            DocumentKind::Em => "em",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cjm" => Ok(DocumentKind::Cjm),
            "sbp" => Ok(DocumentKind::Sbp),
            "outcome" => Ok(DocumentKind::Outcome),
            "em" => Ok(DocumentKind::Em),
            other => Err(other.to_string()),
        }
    }
}

/// Any one of the four documents, tagged by `kind`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DslDocument {
    Cjm(CjmDocument),
    Sbp(SbpDocument),
    Outcome(OutcomeDocument),
    Em(EmDocument),
}

impl DslDocument {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DslDocument::Cjm(_) => DocumentKind::Cjm,
            DslDocument::Sbp(_) => DocumentKind::Sbp,
            DslDocument::Outcome(_) => DocumentKind::Outcome,
            DslDocument::Em(_) => DocumentKind::Em,
        }
    }

    /// Document-level id.
    pub fn id(&self) -> &str {
        match self {
            DslDocument::Cjm(d) => &d.id,
            DslDocument::Sbp(d) => &d.id,
            DslDocument::Outcome(d) => &d.id,
            DslDocument::Em(d) => &d.id,
        }
    }

    /// Convert an already validated generic value into the typed document.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

// ================================
// Customer Journey Map
// ================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CjmDocument {
    pub version: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,
    /// Ordered: drives journey progression and the emotion curve.
    pub phases: Vec<Phase>,
    pub actions: Vec<CjmAction>,
    /// Unrecognized top-level fields, re-emitted on encode.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Persona {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Phase {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CjmAction {
    pub id: String,
    pub name: String,
    /// References [`Phase::id`].
    pub phase: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub touchpoints: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub thoughts_feelings: Vec<String>,
    /// -2 (very negative) ..= 2 (very positive)
    #[serde(deserialize_with = "integral_i32")]
    pub emotion_score: i32,
}

// ================================
// Service Blueprint
// ================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SbpDocument {
    pub version: String,
    pub id: String,
    pub lanes: Vec<Lane>,
    pub tasks: Vec<SbpTask>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Lane {
    pub id: String,
    pub name: String,
    pub kind: LaneKind,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LaneKind {
    Cjm,
    Human,
    Team,
    System,
}

impl LaneKind {
    pub const NAMES: &'static [&'static str] = &["cjm", "human", "team", "system"];
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SbpTask {
    pub id: String,
    /// References [`Lane::id`].
    pub lane: String,
    pub name: String,
    /// References [`CjmAction::id`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// References other [`SbpTask::id`]s.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub link_to: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub readonly: bool,
}

// ================================
// Outcome
// ================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutcomeDocument {
    pub version: String,
    pub id: String,
    pub kgi: Kgi,
    pub primary_csf: Csf,
    pub primary_kpi: Kpi,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Kgi {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Csf {
    pub id: String,
    /// References [`Kgi::id`].
    pub kgi_id: String,
    /// References [`SbpTask::id`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default)]
    pub rationale: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Kpi {
    pub id: String,
    /// References [`Csf::id`].
    pub csf_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub target: f64,
}

// ================================
// Enablement Map
// ================================

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EmDocument {
    pub version: String,
    pub id: String,
    pub outcomes: Vec<EmOutcome>,
    pub actions: Vec<EmAction>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub skills: Vec<Skill>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub knowledge: Vec<Knowledge>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tools: Vec<Tool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EmOutcome {
    pub id: String,
    /// References [`Kpi::id`].
    pub source_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EmAction {
    pub id: String,
    pub name: String,
    /// References [`SbpTask::id`].
    pub source_id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// References [`EmAction::id`].
    pub action_id: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub learnings: Vec<Learning>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Learning {
    pub title: String,
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Knowledge {
    pub id: String,
    pub name: String,
    pub action_id: String,
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub action_id: String,
    pub url: String,
}

/// An explicit `null` reads as the field's default, same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `1` and `1.0` alike; rejects fractional or out-of-range values.
fn integral_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = f64::deserialize(deserializer)?;
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return Err(D::Error::custom(format!("expected an integer, found {}", n)));
    }
    Ok(n as i32)
}

/// Treats `None` and the empty string alike: neither points anywhere.
pub(crate) fn reference(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
