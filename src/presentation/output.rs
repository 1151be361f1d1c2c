//! Output Rendering
//!
//! Renders pipeline events, item listings and resolved paths as plain text
//! or JSON.

use std::io::{self, Write};

use crate::domain::entities::AssetItem;
use crate::domain::ports::{PathProvider, PipelineEvent, PipelineEventSink};
use crate::infrastructure::events::JsonEventSink;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Items grouped under their category heading
pub fn render_items(format: OutputFormat, items: &[AssetItem]) -> String {
    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = items
                .iter()
                .map(|item| {
                    serde_json::json!({
                        "name": item.name(),
                        "category": item.category(),
                    })
                })
                .collect();
            serde_json::Value::Array(entries).to_string()
        }
        OutputFormat::Text => {
            if items.is_empty() {
                return "No maps found".to_string();
            }
            let mut out = String::new();
            let mut current = None;
            for item in items {
                if current != Some(item.category()) {
                    out.push_str(&format!("{}:\n", item.category()));
                    current = Some(item.category());
                }
                out.push_str(&format!("  {}\n", item.name()));
            }
            out
        }
    }
}

/// Install roots and tools as the runs will see them
pub fn render_paths(format: OutputFormat, paths: &dyn PathProvider) -> String {
    let rows = [
        ("source_game", paths.source_game_dir().display().to_string()),
        ("target_game", paths.target_game_dir().display().to_string()),
        ("export_tool", paths.export_tool().display().to_string()),
        ("build_tool", paths.build_tool().display().to_string()),
        ("zone_source", paths.zone_source_dir().display().to_string()),
    ];
    match format {
        OutputFormat::Json => {
            let mut map = serde_json::Map::new();
            for (key, value) in rows {
                map.insert(key.to_string(), serde_json::Value::String(value));
            }
            map.insert("valid".to_string(), serde_json::Value::Bool(paths.is_valid()));
            serde_json::Value::Object(map).to_string()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (key, value) in rows {
                out.push_str(&format!("{:<12} {}\n", key, value));
            }
            if !paths.is_valid() {
                out.push_str("warning: a game directory does not exist\n");
            }
            out
        }
    }
}

/// Prints events to stdout as they arrive
pub struct EventPrinter {
    json: Option<JsonEventSink>,
}

impl EventPrinter {
    pub fn new(format: OutputFormat) -> Self {
        let json = match format {
            OutputFormat::Json => Some(JsonEventSink::stdout()),
            OutputFormat::Text => None,
        };
        Self { json }
    }

    pub fn print(&self, event: &PipelineEvent) {
        if let Some(sink) = &self.json {
            sink.on_event(event.clone());
            return;
        }
        let mut stdout = io::stdout().lock();
        // A closed stdout (e.g. `| head`) should not stop the run
        let _ = writeln!(stdout, "{}", event.to_line());
        let _ = stdout.flush();
    }
}
