use std::path::Path;

use env_logger::Env;
use log::{error, info};
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};
use tokio::fs;

use borutomanga_scraper::{
    download::download_chapter,
    listing::{self, HOST_URL},
    naming::parse_manga_name,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut headers = HeaderMap::new();
    headers.insert(header::REFERER, HeaderValue::from_static(HOST_URL));

    let client = Client::builder()
        .default_headers(headers)
        .user_agent("Mozilla/5.0 (X11; Linux x86_64; rv:145.0) Gecko/20100101 Firefox/145.0")
        .build()?;

    let manga_list = listing::fetch_manga_list(&client, HOST_URL).await;

    for (manga_name, manga_url) in &manga_list {
        info!("manga: {manga_name}, url: {manga_url}");
        let chapter = parse_manga_name(manga_name);

        let chapter_path = Path::new("data")
            .join(chapter.dir_name())
            .join(format!("{:03}", chapter.number));
        fs::create_dir_all(&chapter_path).await?;

        if let Err(err) = download_chapter(
            &client,
            manga_url,
            &chapter_path,
            &chapter.series,
            chapter.number,
        )
        .await
        {
            error!("{err}");
        }
    }

    Ok(())
}
