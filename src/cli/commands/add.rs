use crate::cli::AddArgs;
use crate::models::movie::{DownloadLink, NewMovie};
use crate::services::MovieService;

/// Splits `LABEL=URL` on the first `=`.
fn parse_link(raw: &str) -> anyhow::Result<DownloadLink> {
    let (label, url) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Invalid link '{raw}', expected LABEL=URL"))?;

    if url.trim().is_empty() {
        anyhow::bail!("Invalid link '{raw}', URL is empty");
    }

    Ok(DownloadLink {
        label: label.trim().to_string(),
        url: url.trim().to_string(),
    })
}

pub async fn cmd_add_movie(service: &dyn MovieService, args: AddArgs) -> anyhow::Result<()> {
    let download_links = args
        .links
        .iter()
        .map(|raw| parse_link(raw))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let movie = NewMovie {
        title: args.title,
        description: args.description,
        poster_url: args.poster_url,
        release_year: args.release_year,
        quality: args.quality,
        category: args.category,
        size: args.size,
        language: args.language,
        download_links,
        is_trending: args.trending,
    };

    let title = movie.title.clone();
    let id = service.create(movie).await?;

    println!("✓ Added movie #{id}: {title}");
    Ok(())
}
