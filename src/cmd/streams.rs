use anyhow::{bail, Result};

use webchnl::{ApiClient, StreamChannel, StreamUrls};

use super::output::{print_json, print_pairs};
use crate::OutputFormat;

/// Which view of the playlist to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamQuery {
    Summary,
    Name(String),
    Id(String),
    Names,
    Urls,
    Logos,
}

pub async fn cmd_streams(client: ApiClient, query: StreamQuery, format: OutputFormat) -> Result<()> {
    let streams = StreamUrls::with_transport(client);

    match query {
        StreamQuery::Summary => {
            let summary = streams.summary().await?;
            match format {
                OutputFormat::Text => print!("{summary}"),
                OutputFormat::Json => print_json(&summary.channels)?,
            }
        }
        StreamQuery::Name(name) => {
            let Some(channel) = streams.get_channel_by_name(&name).await? else {
                bail!("No channel named {name:?}");
            };
            print_channel(&channel, format)?;
        }
        StreamQuery::Id(id) => {
            let Some(channel) = streams.get_channel_by_id(&id).await? else {
                bail!("No channel with tvg-id {id:?}");
            };
            print_channel(&channel, format)?;
        }
        StreamQuery::Names => {
            let names = streams.get_all_channel_names().await?;
            match format {
                OutputFormat::Text => {
                    for name in &names {
                        println!("{name}");
                    }
                }
                OutputFormat::Json => print_json(&names)?,
            }
        }
        StreamQuery::Urls => {
            let urls = streams.get_all_stream_urls().await?;
            match format {
                OutputFormat::Text => print_pairs(&urls),
                OutputFormat::Json => print_json(&urls)?,
            }
        }
        StreamQuery::Logos => {
            let logos = streams.get_all_logos().await?;
            match format {
                OutputFormat::Text => print_pairs(&logos),
                OutputFormat::Json => print_json(&logos)?,
            }
        }
    }

    Ok(())
}

fn print_channel(channel: &StreamChannel, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Name: {}", channel.name);
            println!("  Title: {}", channel.display_name);
            println!("  TVG ID: {}", channel.id);
            println!("  Logo: {}", channel.logo_url);
            println!("  Stream: {}", channel.stream_url);
        }
        OutputFormat::Json => print_json(channel)?,
    }
    Ok(())
}
