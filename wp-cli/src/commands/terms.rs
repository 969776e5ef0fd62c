//! Category and tag commands.

use clap::Subcommand;
use console::style;

use wp_api::{ApiClient, Term};
use wp_core::config::AppConfig;
use wp_core::error::WpResult;

use crate::OutputFormat;

/// Which taxonomy a terms command works on.
#[derive(Debug, Clone, Copy)]
pub enum Taxonomy {
    Category,
    Tag,
}

impl Taxonomy {
    fn label(self) -> &'static str {
        match self {
            Taxonomy::Category => "category",
            Taxonomy::Tag => "tag",
        }
    }

    async fn list(self, api: &ApiClient) -> WpResult<Vec<Term>> {
        match self {
            Taxonomy::Category => api.list_categories().await,
            Taxonomy::Tag => api.list_tags().await,
        }
    }

    async fn create(self, api: &ApiClient, name: &str) -> WpResult<Term> {
        match self {
            Taxonomy::Category => api.create_category(name).await,
            Taxonomy::Tag => api.create_tag(name).await,
        }
    }
}

#[derive(Subcommand)]
pub enum TermsAction {
    /// List every term (all pages).
    List,
    /// Create a term.
    Create {
        /// Display name.
        name: String,
    },
}

pub async fn run(
    config: &AppConfig,
    taxonomy: Taxonomy,
    action: TermsAction,
    format: OutputFormat,
) -> WpResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        TermsAction::List => {
            let terms = taxonomy.list(&api).await?;
            match format {
                OutputFormat::Json => super::print_json(&terms)?,
                OutputFormat::Text => {
                    if terms.is_empty() {
                        println!("No {} terms found.", taxonomy.label());
                    } else {
                        let mut header = vec!["ID", "Name", "Slug", "Posts"];
                        if let Taxonomy::Category = taxonomy {
                            header.push("Parent");
                        }
                        let mut table = super::new_table(header);
                        for term in &terms {
                            let mut row = vec![
                                term.id.to_string(),
                                super::truncate(&term.name, 30),
                                super::truncate(&term.slug, 30),
                                term.count.to_string(),
                            ];
                            if let Taxonomy::Category = taxonomy {
                                row.push(if term.parent > 0 {
                                    term.parent.to_string()
                                } else {
                                    "-".to_string()
                                });
                            }
                            table.add_row(row);
                        }
                        println!("{table}");
                        println!("\n{} total", terms.len());
                    }
                }
            }
        }
        TermsAction::Create { name } => {
            let term = taxonomy.create(&api, &name).await?;
            match format {
                OutputFormat::Json => super::print_json(&term)?,
                OutputFormat::Text => {
                    println!(
                        "{} {} '{}' (id {}, slug {})",
                        style("Created").green(),
                        taxonomy.label(),
                        term.name,
                        term.id,
                        term.slug
                    );
                }
            }
        }
    }

    Ok(())
}
