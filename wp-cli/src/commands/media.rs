//! Media commands.

use std::path::PathBuf;

use clap::Subcommand;
use console::style;

use wp_api::{Media, MediaQuery};
use wp_core::config::AppConfig;
use wp_core::error::WpResult;

use crate::OutputFormat;

#[derive(Subcommand)]
pub enum MediaAction {
    /// List media items.
    List {
        /// Number of items per page.
        #[arg(short = 'n', long, default_value = "10")]
        limit: u32,
        /// Page number (1-based).
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Full-text search.
        #[arg(short, long)]
        search: Option<String>,
        /// Only items of this kind (image, video, audio, application).
        #[arg(long)]
        media_type: Option<String>,
    },
    /// Download a file from a URL and add it to the media library.
    Upload {
        /// Source URL.
        url: String,
    },
    /// Add a local file to the media library.
    UploadFile {
        /// Path to the file.
        path: PathBuf,
    },
    /// Permanently delete a media item.
    Delete {
        /// Media id.
        id: u64,
    },
}

pub async fn run(config: &AppConfig, action: MediaAction, format: OutputFormat) -> WpResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        MediaAction::List {
            limit,
            page,
            search,
            media_type,
        } => {
            let query = MediaQuery {
                page: Some(page.max(1)),
                per_page: Some(limit.clamp(1, wp_core::constants::PER_PAGE_LIMIT)),
                search,
                media_type,
                ..MediaQuery::default()
            };
            let items = api.list_media(&query).await?;

            match format {
                OutputFormat::Json => super::print_json(&items)?,
                OutputFormat::Text => {
                    if items.is_empty() {
                        println!("No media found.");
                    } else {
                        let mut table = super::new_table(vec!["ID", "Title", "Type", "URL"]);
                        for item in &items {
                            table.add_row(vec![
                                item.id.to_string(),
                                super::truncate(item.title.text(), 30),
                                item.mime_type.clone(),
                                item.source_url.clone(),
                            ]);
                        }
                        println!("{table}");
                        println!("\nPage {page} ({} items)", items.len());
                    }
                }
            }
        }
        MediaAction::Upload { url } => {
            let media = api.upload_media_from_url(&url).await?;
            print_uploaded(&media, None, format)?;
        }
        MediaAction::UploadFile { path } => {
            let size = std::fs::metadata(&path)?.len();
            let media = api.upload_media_file(&path).await?;
            print_uploaded(&media, Some(size), format)?;
        }
        MediaAction::Delete { id } => {
            let result = api.delete_media(id).await?;
            match format {
                OutputFormat::Json => super::print_json(&result)?,
                OutputFormat::Text => {
                    if result.deleted {
                        println!("{} media {id}", style("Deleted").green());
                    } else {
                        println!("{} media {id} was not deleted", style("Warning:").yellow());
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_uploaded(media: &Media, size: Option<u64>, format: OutputFormat) -> WpResult<()> {
    match format {
        OutputFormat::Json => super::print_json(media)?,
        OutputFormat::Text => {
            println!("{} media {}", style("Uploaded").green(), media.id);
            println!("  Type: {}", media.mime_type);
            if let Some(size) = size {
                println!("  Size: {}", super::format_bytes(size));
            }
            println!("  URL:  {}", media.source_url);
        }
    }
    Ok(())
}
