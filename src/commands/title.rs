//! `ratgraph title <story-id>` - single title lookup

use serde_json::json;

use super::print_json;
use crate::cli::{Cli, OutputFormat};
use ratgraph_core::error::Result;
use ratgraph_core::titles::TitleLookup;

pub fn execute(cli: &Cli, titles: &dyn TitleLookup, story_id: &str) -> Result<()> {
    let title = titles.title(story_id);

    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "story": story_id,
            "title": title,
        }))?,
        OutputFormat::Human => println!("{}", title),
    }
    Ok(())
}
