use std::path::Path;

use env_logger::Env;
use log::error;
use reqwest::{
    Client,
    header::{self, HeaderMap, HeaderValue},
};
use tokio::fs;

use borutomanga_scraper::{download::download_chapter, listing::HOST_URL};

const MANGA_NAME: &str = "Boruto";
const MANGA_SLUG: &str = "boruto";
const CHAPTER_NUMBER: u32 = 81;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut headers = HeaderMap::new();
    headers.insert(header::REFERER, HeaderValue::from_static(HOST_URL));

    let client = Client::builder()
        .default_headers(headers)
        .user_agent("Mozilla/5.0 (X11; Linux x86_64; rv:145.0) Gecko/20100101 Firefox/145.0")
        .build()?;

    let chapter_url = format!("{HOST_URL}/manga/{MANGA_SLUG}-chapter-{CHAPTER_NUMBER}/");
    let chapter_path = Path::new("data")
        .join(MANGA_NAME)
        .join(format!("{CHAPTER_NUMBER:03}"));
    fs::create_dir_all(&chapter_path).await?;

    if let Err(err) = download_chapter(
        &client,
        &chapter_url,
        &chapter_path,
        MANGA_NAME,
        CHAPTER_NUMBER,
    )
    .await
    {
        error!("{err}");
    }

    Ok(())
}
