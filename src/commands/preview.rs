//! Preview command - CI summary or commit trailers from the newest entry

use std::fs;
use std::path::Path;

use sqf_core::error::{Result, SqfError};
use sqf_core::summary;

use super::context::{load_config, open_repository};
use crate::cli::{Cli, PreviewFormat};

#[tracing::instrument(skip(cli))]
pub fn execute(cli: &Cli, format: PreviewFormat, template: Option<&Path>) -> Result<()> {
    let config = load_config(cli)?;
    let repo = open_repository(&config)?;

    match format {
        PreviewFormat::Summary => {
            let template = match template {
                Some(path) => fs::read_to_string(path)
                    .map_err(|e| SqfError::io_operation("read template", path.display(), e))?,
                None => config.summary_format.clone(),
            };
            let text = summary::render_summary(&repo, &template, &config.trailer_keys)?;
            if !text.is_empty() {
                print!("{}", text);
                if !text.ends_with('\n') {
                    println!();
                }
            }
        }
        PreviewFormat::Trailers => {
            let text = summary::render_trailers(&repo, &config.trailer_keys)?;
            if !text.is_empty() {
                println!("{}", text);
            }
        }
    }

    Ok(())
}
