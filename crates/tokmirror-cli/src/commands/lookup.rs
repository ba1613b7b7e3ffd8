use crate::OutputFormat;
use anyhow::Result;
use tokmirror_lookup::VideoLookup;

pub fn execute(url: &str, format: OutputFormat) -> Result<()> {
    tracing::info!("Looking up video metadata for: {}", url);

    let runtime = tokio::runtime::Runtime::new()?;
    let metadata = runtime.block_on(VideoLookup::new().lookup(url))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        OutputFormat::Table => {
            println!("Field,Value");
            println!("Video Id,{}", metadata.video_id);
            println!("Title,{}", metadata.title);
            println!("Author,{}", metadata.author);
            println!("Url,{}", metadata.url);
        }
        OutputFormat::Pretty => {
            use console::style;

            println!("\n{}", style("Video Metadata").bold().cyan());
            println!("  Video Id:  {}", metadata.video_id);
            println!("  Title:     {}", metadata.title);
            println!("  Author:    {}", metadata.author);
            println!("  Url:       {}", metadata.url);
            println!("  Thumbnail: {}", metadata.thumbnail);
            println!();
        }
    }

    Ok(())
}
