use std::collections::BTreeMap;

use serde::Serialize;

/// The six canonical performance buckets every configured KPI breakdown is
/// folded into. Catalog files name areas loosely ("Vision (VIS)", "Learning
/// Development & Personal Career Growth (LnD)"); matching is by substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiCategory {
    Vision,
    Delivery,
    Financial,
    Quality,
    LearningDevelopment,
    InternalComms,
}

impl KpiCategory {
    pub const ALL: [KpiCategory; 6] = [
        KpiCategory::Vision,
        KpiCategory::Delivery,
        KpiCategory::Financial,
        KpiCategory::Quality,
        KpiCategory::LearningDevelopment,
        KpiCategory::InternalComms,
    ];

    /// Short label used in the breakdown table and context keys.
    pub fn label(self) -> &'static str {
        match self {
            KpiCategory::Vision => "Vision",
            KpiCategory::Delivery => "Delivery",
            KpiCategory::Financial => "Financial",
            KpiCategory::Quality => "Quality",
            KpiCategory::LearningDevelopment => "LnD",
            KpiCategory::InternalComms => "ICO",
        }
    }

    /// Folds a raw breakdown key into a canonical category, case-insensitive,
    /// first match wins. Keys matching nothing are dropped.
    pub fn from_raw_key(raw: &str) -> Option<Self> {
        let key = raw.to_lowercase();
        if key.contains("vision") {
            Some(KpiCategory::Vision)
        } else if key.contains("delivery") {
            Some(KpiCategory::Delivery)
        } else if key.contains("financial") || key.contains("fin") {
            Some(KpiCategory::Financial)
        } else if key.contains("quality") || key.contains("qua") {
            Some(KpiCategory::Quality)
        } else if key.contains("learning") || key.contains("lnd") {
            Some(KpiCategory::LearningDevelopment)
        } else if key.contains("internal") || key.contains("ico") || key.contains("communications")
        {
            Some(KpiCategory::InternalComms)
        } else {
            None
        }
    }

    /// Generic activities used when no generated alternative is available.
    pub fn fallback_activities(self) -> &'static [&'static str] {
        match self {
            KpiCategory::Vision => &[
                "Participate in strategic planning sessions",
                "Contribute to business model development",
                "Engage in industry networking activities",
            ],
            KpiCategory::Delivery => &[
                "Execute assigned projects and deliverables",
                "Manage project communications and coordination",
                "Support community engagement initiatives",
            ],
            KpiCategory::Financial => &[
                "Assist in business development activities",
                "Support proposal writing and funding efforts",
                "Contribute to financial planning processes",
            ],
            KpiCategory::Quality => &[
                "Conduct quality checks and reviews",
                "Collect and analyze feedback data",
                "Generate performance reports",
            ],
            KpiCategory::LearningDevelopment => &[
                "Attend training sessions and workshops",
                "Participate in professional development programs",
                "Engage in team feedback and review sessions",
            ],
            KpiCategory::InternalComms => &[
                "Utilize project management tools effectively",
                "Maintain clear communication channels",
                "Support team coordination and planning",
            ],
        }
    }

    /// The fallback activities as a `- ` bullet block, one line per activity.
    pub fn activity_bullets(self) -> String {
        self.fallback_activities()
            .iter()
            .map(|activity| format!("- {activity}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Percentage weight per canonical category. Values are copied as configured;
/// the sum is not required to equal 100 and is never renormalized. Categories
/// that receive no match stay at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KpiBreakdown {
    #[serde(rename = "Vision")]
    pub vision: u32,
    #[serde(rename = "Delivery")]
    pub delivery: u32,
    #[serde(rename = "Financial")]
    pub financial: u32,
    #[serde(rename = "Quality")]
    pub quality: u32,
    #[serde(rename = "LnD")]
    pub lnd: u32,
    #[serde(rename = "ICO")]
    pub ico: u32,
}

/// Folds a raw catalog breakdown into the canonical buckets.
pub fn normalize_kpis(raw: &BTreeMap<String, u32>) -> KpiBreakdown {
    let mut out = KpiBreakdown::default();
    for (key, value) in raw {
        match KpiCategory::from_raw_key(key) {
            Some(KpiCategory::Vision) => out.vision = *value,
            Some(KpiCategory::Delivery) => out.delivery = *value,
            Some(KpiCategory::Financial) => out.financial = *value,
            Some(KpiCategory::Quality) => out.quality = *value,
            Some(KpiCategory::LearningDevelopment) => out.lnd = *value,
            Some(KpiCategory::InternalComms) => out.ico = *value,
            None => {}
        }
    }
    out
}
