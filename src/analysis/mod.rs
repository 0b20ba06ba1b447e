//! Heuristic transcript analysis.
//!
//! Everything here is pure text processing: no network, no shared state, and no
//! external NLP service. Transcripts arrive as one unstructured string and are cut
//! into sentences lexically before the individual heuristics run.

mod entities;
mod insights;
mod options;
mod story;
mod summary;
pub mod text;
mod themes;

pub use entities::{Entities, EntityExtractor, RegexEntityExtractor, UNKNOWN};
pub use insights::{select_insights, MAX_INSIGHTS};
pub use options::{Geography, KeyTopic, MonthlyRevenue};
pub use story::{compose_founder_story, MAX_STORY_CHARS};
pub use summary::{summarize, Summary, MAX_KEY_POINTS};
pub use themes::{content_types, ContentDepth, KeywordTally, ThemeScanner, THEME_MARKERS};
