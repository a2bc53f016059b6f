use anyhow::{bail, Result};

use webchnl::{ApiClient, Channel, ViewerCounts};

use super::output::{print_json, truncate_text};
use crate::OutputFormat;

/// Which view of the viewer-count list to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerQuery {
    Summary,
    Online,
    Offline,
    Slug(String),
    Total,
}

pub async fn cmd_viewers(client: ApiClient, query: ViewerQuery, format: OutputFormat) -> Result<()> {
    let viewers = ViewerCounts::with_transport(client);

    match query {
        ViewerQuery::Summary => {
            let summary = viewers.summary().await?;
            match format {
                OutputFormat::Text => print!("{summary}"),
                OutputFormat::Json => print_json(&summary)?,
            }
        }
        ViewerQuery::Online => {
            let channels = viewers.get_online_channels().await?;
            print_channels(&channels, format)?;
        }
        ViewerQuery::Offline => {
            let channels = viewers.get_offline_channels().await?;
            print_channels(&channels, format)?;
        }
        ViewerQuery::Slug(slug) => {
            let Some(channel) = viewers.get_channel_by_slug(&slug).await? else {
                bail!("No channel with slug {slug:?}");
            };
            match format {
                OutputFormat::Text => {
                    println!("Name: {}", channel.name);
                    println!("Slug: {}", channel.slug);
                    println!("Viewers: {}", viewer_text(&channel));
                }
                OutputFormat::Json => print_json(&channel)?,
            }
        }
        ViewerQuery::Total => {
            let total = viewers.get_total_viewers().await?;
            match format {
                OutputFormat::Text => println!("{total}"),
                OutputFormat::Json => print_json(&serde_json::json!({ "total_viewers": total }))?,
            }
        }
    }

    Ok(())
}

fn print_channels(channels: &[Channel], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for channel in channels {
                println!(
                    "{:<20} | {:<20} | {}",
                    truncate_text(&channel.name, 20),
                    truncate_text(&channel.slug, 20),
                    viewer_text(channel)
                );
            }
            println!("\n({} channels)", channels.len());
        }
        OutputFormat::Json => print_json(channels)?,
    }
    Ok(())
}

fn viewer_text(channel: &Channel) -> String {
    if channel.is_online() {
        format!("{} viewers", channel.viewers)
    } else {
        "offline".to_string()
    }
}
