use serde::{Deserialize, Serialize};

/// Four-level qualitative verdict derived from a numeric ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sentiment {
    Positive,
    Neutral,
    SlightlyNegative,
    VeryNegative,
}

/// Outcome of one metric computation. Unavailable values can never carry a
/// sentiment; the variant has no slot for one.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Computed {
        text: String,
        sentiment: Option<Sentiment>,
    },
    Unavailable,
}

impl MetricValue {
    pub fn is_available(&self) -> bool {
        matches!(self, MetricValue::Computed { .. })
    }
}

/// An internal metric slot: always present after a calculator runs, whether
/// or not the value could be computed. Filtering to the public shape happens
/// at assembly time.
#[derive(Debug, Clone)]
pub struct Metric {
    pub label: &'static str,
    pub description: Option<&'static str>,
    pub value: MetricValue,
}

impl Metric {
    pub fn computed(
        label: &'static str,
        description: Option<&'static str>,
        text: String,
        sentiment: Option<Sentiment>,
    ) -> Self {
        Metric {
            label,
            description,
            value: MetricValue::Computed { text, sentiment },
        }
    }

    pub fn unavailable(label: &'static str, description: Option<&'static str>) -> Self {
        Metric {
            label,
            description,
            value: MetricValue::Unavailable,
        }
    }
}

/// Public, render-ready ratio. Only produced from computed metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// One analytical category of the output sheet. Sections with zero ratios
/// after filtering are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSection {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ratios: Vec<Ratio>,
}
