//! `founder_scout`: business reports mined from "how I built it" videos.
//!
//! A call moves through [`ScoutStage`]s. Missing selections produce a prompt, a
//! confirmed selection set is echoed back, and only an explicit `confirm: false`
//! searches and analyses videos. The first two stages never reach the platform.

use super::separator;
use crate::analysis::{
    compose_founder_story, select_insights, EntityExtractor, Geography, KeyTopic, MonthlyRevenue,
    RegexEntityExtractor,
};
use crate::error::Result;
use crate::youtube::{watch_url, VideoPlatform};
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};

const DEFAULT_MAX_RESULTS: u32 = 5;
const MAX_RESULTS_LIMIT: u32 = 50;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FounderScoutArgs {
    pub monthly_revenue: Option<String>,
    pub key_topic: Option<String>,
    pub target_geography: Option<String>,
    pub max_results: Option<u32>,
    pub confirm: Option<bool>,
    pub api_key: Option<String>,
}

/// A complete, validated set of scouting choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selections {
    pub revenue: MonthlyRevenue,
    pub topic: KeyTopic,
    pub geography: Geography,
}

impl Selections {
    /// Search query sent to the platform.
    pub fn query(&self) -> String {
        format!("How I built a {} business {}", self.revenue, self.geography)
    }

    fn confirmation(&self) -> String {
        let title = "Founder Scout - Input Confirmation";
        format!(
            "{}\n{}\nMonthly Revenue: {}\nKey Topic: {}\nTarget Geography: {}",
            title,
            "-".repeat(title.len()),
            self.revenue,
            self.topic,
            self.geography
        )
    }
}

/// Where a founder scout call ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoutStage {
    AwaitingSelections,
    Confirming(Selections),
    Fetching(Selections),
}

impl ScoutStage {
    /// Decide the stage from call arguments. Present but invalid selections are an error.
    pub fn from_args(args: &FounderScoutArgs) -> Result<Self> {
        let present = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let (Some(revenue), Some(topic), Some(geography)) = (
            present(&args.monthly_revenue),
            present(&args.key_topic),
            present(&args.target_geography),
        ) else {
            return Ok(ScoutStage::AwaitingSelections);
        };

        let selections = Selections {
            revenue: revenue.parse()?,
            topic: topic.parse()?,
            geography: geography.parse()?,
        };

        if args.confirm.unwrap_or(true) {
            Ok(ScoutStage::Confirming(selections))
        } else {
            Ok(ScoutStage::Fetching(selections))
        }
    }
}

fn render_prompt() -> String {
    [
        "Founder Scout needs your selections. Provide the following parameters:".to_string(),
        String::new(),
        format!("{}: one of {}", MonthlyRevenue::PARAM, MonthlyRevenue::choices()),
        format!("{}: one of {}", KeyTopic::PARAM, KeyTopic::choices()),
        format!("{}: one of {}", Geography::PARAM, Geography::choices()),
        String::new(),
        "Optionally include: { maxResults: number, confirm: boolean }".to_string(),
    ]
    .join("\n")
}

/// Text for the stages that need no platform access, or `None` when videos must be fetched.
pub fn preflight(args: &FounderScoutArgs) -> Result<Option<String>> {
    let text = match ScoutStage::from_args(args)? {
        ScoutStage::AwaitingSelections => render_prompt(),
        ScoutStage::Confirming(selections) => format!(
            "{}\n\nRe-run with \"confirm: false\" to fetch and analyze videos.",
            selections.confirmation()
        ),
        ScoutStage::Fetching(_) => return Ok(None),
    };
    Ok(Some(text))
}

/// What one search result says about a founder and their business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessReport {
    pub founder_name: String,
    pub business_name: String,
    pub monthly_revenue: MonthlyRevenue,
    pub insights: Vec<String>,
    pub founder_story: String,
    pub source: String,
}

impl fmt::Display for BusinessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Founder's Name: {}", self.founder_name)?;
        writeln!(f, "Business Name: {}", self.business_name)?;
        writeln!(f, "Monthly Revenue: {}", self.monthly_revenue)?;
        writeln!(f, "Source: {}", self.source)?;
        writeln!(f, "\nInsights:")?;
        for insight in &self.insights {
            writeln!(f, "- {}", insight)?;
        }
        writeln!(f, "\nFounder Story:")?;
        writeln!(f, "{}", self.founder_story)
    }
}

fn render_reports(reports: &[BusinessReport]) -> String {
    if reports.is_empty() {
        return "No matching videos found.".to_string();
    }

    let rule = separator();
    let mut out = format!("Founder Scout - Business Reports\n\n{}\n\n", rule);
    for (index, report) in reports.iter().enumerate() {
        out.push_str(&format!("Report {}\n{}{}\n\n", index + 1, report, rule));
    }
    out
}

/// Search, analyse each hit in order, and build one report per usable result.
pub async fn scout(
    selections: &Selections,
    max_results: u32,
    platform: &dyn VideoPlatform,
    extractor: &dyn EntityExtractor,
) -> Result<Vec<BusinessReport>> {
    let query = selections.query();
    info!("Scouting founders with query '{}'", query);

    let items = platform.search_videos(&query, max_results).await?;
    let mut reports = Vec::with_capacity(items.len());

    for item in &items {
        let Some(video_id) = item.video_id() else {
            continue;
        };

        let transcript = match platform.get_transcript(video_id).await {
            Ok(t) => t,
            Err(e) => {
                debug!("Using description for {}: {}", video_id, e);
                item.snippet.description.clone()
            }
        };

        let snippet = &item.snippet;
        let entities = extractor.extract(&snippet.title, &snippet.channel_title, &transcript);
        reports.push(BusinessReport {
            founder_name: entities.founder_name,
            business_name: entities.business_name,
            monthly_revenue: selections.revenue,
            insights: select_insights(&transcript, selections.topic),
            founder_story: compose_founder_story(&transcript),
            source: watch_url(video_id),
        });
    }

    Ok(reports)
}

pub async fn handle(args: &FounderScoutArgs, platform: &dyn VideoPlatform) -> Result<String> {
    let selections = match ScoutStage::from_args(args)? {
        ScoutStage::Fetching(selections) => selections,
        _ => return Ok(preflight(args)?.unwrap_or_default()),
    };

    let max_results = args
        .max_results
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(1, MAX_RESULTS_LIMIT);
    let reports = scout(&selections, max_results, platform, &RegexEntityExtractor::new()).await?;

    Ok(format!("{}\n\n{}", selections.confirmation(), render_reports(&reports)))
}
