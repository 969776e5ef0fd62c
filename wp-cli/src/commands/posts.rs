//! Post commands.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use wp_api::{Post, PostParams, PostQuery, PostStatus};
use wp_core::config::AppConfig;
use wp_core::error::WpResult;

use crate::OutputFormat;

/// Status values accepted on the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StatusArg {
    Publish,
    Future,
    Draft,
    Pending,
    Private,
}

impl From<StatusArg> for PostStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Publish => PostStatus::Publish,
            StatusArg::Future => PostStatus::Future,
            StatusArg::Draft => PostStatus::Draft,
            StatusArg::Pending => PostStatus::Pending,
            StatusArg::Private => PostStatus::Private,
        }
    }
}

#[derive(Subcommand)]
pub enum PostsAction {
    /// List posts.
    List {
        /// Number of posts per page.
        #[arg(short = 'n', long, default_value = "10")]
        limit: u32,
        /// Page number (1-based).
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Fetch every page instead of one.
        #[arg(long, conflicts_with_all = ["limit", "page"])]
        all: bool,
        /// Full-text search.
        #[arg(short, long)]
        search: Option<String>,
        /// Only posts with this status.
        #[arg(long)]
        status: Option<StatusArg>,
        /// Only posts in these category ids.
        #[arg(long, value_delimiter = ',')]
        categories: Vec<u64>,
        /// Only posts with these tag ids.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<u64>,
    },
    /// Show a single post.
    Get {
        /// Post id.
        id: u64,
    },
    /// Create a post.
    Create(PostArgs),
    /// Replace the fields of an existing post.
    Update {
        /// Post id.
        id: u64,
        #[command(flatten)]
        post: PostArgs,
    },
    /// Delete a post (moves it to the trash).
    Delete {
        /// Post id.
        id: u64,
    },
}

/// Fields shared by create and update.
#[derive(Args)]
pub struct PostArgs {
    /// Post title.
    #[arg(short, long)]
    title: String,
    /// Post content (HTML).
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    content: Option<String>,
    /// Read the post content from a file.
    #[arg(long)]
    content_file: Option<PathBuf>,
    /// Publication status.
    #[arg(short, long, default_value = "publish")]
    status: StatusArg,
    /// URL slug.
    #[arg(long)]
    slug: Option<String>,
    /// Short summary.
    #[arg(long)]
    excerpt: Option<String>,
    /// Category ids, comma separated.
    #[arg(long, value_delimiter = ',')]
    categories: Vec<u64>,
    /// Tag ids, comma separated.
    #[arg(long, value_delimiter = ',')]
    tags: Vec<u64>,
    /// Media id to use as the featured image.
    #[arg(long)]
    featured_media: Option<u64>,
}

impl PostArgs {
    fn into_params(self) -> WpResult<PostParams> {
        let content = match (self.content, self.content_file) {
            (Some(content), _) => content,
            (None, Some(path)) => std::fs::read_to_string(&path)?,
            (None, None) => String::new(),
        };
        Ok(PostParams {
            status: self.status.into(),
            slug: self.slug,
            excerpt: self.excerpt,
            categories: self.categories,
            tags: self.tags,
            featured_media: self.featured_media,
            ..PostParams::new(&self.title, &content)
        })
    }
}

pub async fn run(config: &AppConfig, action: PostsAction, format: OutputFormat) -> WpResult<()> {
    let api = super::create_api_client(config)?;

    match action {
        PostsAction::List {
            limit,
            page,
            all,
            search,
            status,
            categories,
            tags,
        } => {
            let mut query = PostQuery {
                search,
                status: status.map(Into::into),
                categories,
                tags,
                ..PostQuery::default()
            };
            let posts = if all {
                api.all_posts(&query).await?
            } else {
                query.page = Some(page.max(1));
                query.per_page = Some(limit.clamp(1, wp_core::constants::PER_PAGE_LIMIT));
                api.list_posts(&query).await?
            };

            match format {
                OutputFormat::Json => super::print_json(&posts)?,
                OutputFormat::Text => {
                    if posts.is_empty() {
                        println!("No posts found.");
                    } else {
                        let mut table =
                            super::new_table(vec!["ID", "Title", "Status", "Date", "Slug"]);
                        for post in &posts {
                            let date = post.date.as_deref().unwrap_or("-");
                            let date_short = date.get(..10).unwrap_or(date);
                            table.add_row(vec![
                                post.id.to_string(),
                                super::truncate(post.title.text(), 40),
                                post.status.clone(),
                                date_short.to_string(),
                                super::truncate(&post.slug, 30),
                            ]);
                        }
                        println!("{table}");
                        if all {
                            println!("\n{} posts", posts.len());
                        } else {
                            println!("\nPage {page} ({} posts)", posts.len());
                        }
                    }
                }
            }
        }
        PostsAction::Get { id } => {
            let post = api.get_post(id).await?;
            print_post(&post, format)?;
        }
        PostsAction::Create(args) => {
            let post = api.create_post(&args.into_params()?).await?;
            if let OutputFormat::Text = format {
                println!("{} post {}", style("Created").green(), post.id);
            }
            print_post(&post, format)?;
        }
        PostsAction::Update { id, post } => {
            let post = api.update_post(id, &post.into_params()?).await?;
            if let OutputFormat::Text = format {
                println!("{} post {}", style("Updated").green(), post.id);
            }
            print_post(&post, format)?;
        }
        PostsAction::Delete { id } => {
            let result = api.delete_post(id).await?;
            match format {
                OutputFormat::Json => super::print_json(&result)?,
                OutputFormat::Text => {
                    let status = result
                        .get("status")
                        .and_then(|v| v.as_str())
                        .unwrap_or("deleted");
                    println!("{} post {id} ({status})", style("Deleted").green());
                }
            }
        }
    }

    Ok(())
}

fn print_post(post: &Post, format: OutputFormat) -> WpResult<()> {
    match format {
        OutputFormat::Json => super::print_json(post)?,
        OutputFormat::Text => {
            println!("{}", style(post.title.text()).bold().underlined());
            println!("  ID:         {}", post.id);
            println!("  Status:     {}", post.status);
            println!("  Slug:       {}", post.slug);
            if let Some(ref date) = post.date {
                println!("  Date:       {date}");
            }
            if !post.link.is_empty() {
                println!("  Link:       {}", post.link);
            }
            if !post.categories.is_empty() {
                println!("  Categories: {}", join_ids(&post.categories));
            }
            if !post.tags.is_empty() {
                println!("  Tags:       {}", join_ids(&post.tags));
            }
            if post.featured_media > 0 {
                println!("  Featured:   {}", post.featured_media);
            }
            let content = post.content.text().trim();
            if !content.is_empty() {
                println!();
                println!("{}", super::truncate(content, 500));
            }
        }
    }
    Ok(())
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
