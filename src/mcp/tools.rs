//! MCP tool definitions for tubescout.

use super::protocol::Tool;
use crate::analysis::{Geography, KeyTopic, MonthlyRevenue};
use serde_json::{json, Value};

fn api_key_property() -> Value {
    json!({
        "type": "string",
        "description": "YouTube Data API v3 key (defaults to the configured YOUTUBE_API_KEY)"
    })
}

fn labels<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_transcript".to_string(),
            description: "Get the transcript of a YouTube video by video ID".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "videoId": {
                        "type": "string",
                        "description": "YouTube video ID or watch URL (e.g. youtube.com/watch?v=VIDEO_ID)"
                    },
                    "apiKey": api_key_property()
                },
                "required": ["videoId"]
            }),
        },
        Tool {
            name: "get_summary".to_string(),
            description: "Get a summary of a YouTube video from its transcript".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "videoId": {
                        "type": "string",
                        "description": "YouTube video ID or watch URL"
                    },
                    "apiKey": api_key_property()
                },
                "required": ["videoId"]
            }),
        },
        Tool {
            name: "search_videos".to_string(),
            description: "Search YouTube videos and get their transcripts and summaries"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query for YouTube videos"
                    },
                    "maxResults": {
                        "type": "integer",
                        "description": "Maximum number of results to return (1-50)",
                        "default": 5
                    },
                    "apiKey": api_key_property()
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get_channel_info".to_string(),
            description: "Get information about a YouTube channel".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channelId": {
                        "type": "string",
                        "description": "YouTube channel ID"
                    },
                    "apiKey": api_key_property()
                },
                "required": ["channelId"]
            }),
        },
        Tool {
            name: "analyze_channel".to_string(),
            description: "Analyze the videos of a channel and summarize the nature of its content"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channelId": {
                        "type": "string",
                        "description": "YouTube channel ID"
                    },
                    "maxVideos": {
                        "type": "integer",
                        "description": "Maximum number of videos to analyze",
                        "default": 50
                    },
                    "apiKey": api_key_property()
                },
                "required": ["channelId"]
            }),
        },
        Tool {
            name: "founder_scout".to_string(),
            description: "Founder Scout: confirm inputs, search founder videos, fetch transcripts \
                and build business reports"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "monthlyRevenue": {
                        "type": "string",
                        "enum": labels(MonthlyRevenue::ALL)
                    },
                    "keyTopic": {
                        "type": "string",
                        "enum": labels(KeyTopic::ALL)
                    },
                    "targetGeography": {
                        "type": "string",
                        "enum": labels(Geography::ALL)
                    },
                    "maxResults": {
                        "type": "integer",
                        "description": "Max number of videos to analyze",
                        "default": 5
                    },
                    "confirm": {
                        "type": "boolean",
                        "description": "If true, only returns confirmation. Set false to fetch results.",
                        "default": true
                    },
                    "apiKey": api_key_property()
                },
                "required": []
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names() {
        let names: Vec<String> = get_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "get_transcript",
                "get_summary",
                "search_videos",
                "get_channel_info",
                "analyze_channel",
                "founder_scout",
            ]
        );
    }

    #[test]
    fn test_founder_scout_schema_lists_choices() {
        let tools = get_tools();
        let scout = tools.iter().find(|t| t.name == "founder_scout").unwrap();
        assert_eq!(
            scout.input_schema["properties"]["targetGeography"]["enum"],
            json!(["USA", "Europe", "Asia", "Global"])
        );
        assert_eq!(scout.input_schema["properties"]["confirm"]["default"], json!(true));
    }
}
