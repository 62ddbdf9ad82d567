use std::path::Path;

use log::{error, info};
use reqwest::{Client, StatusCode};
use scraper::Selector;
use tokio::{fs, io::AsyncWriteExt};

use crate::errors::ScraperErrors;

/// Full-size page images sit behind `<div class="separator">` anchors with the
/// hoverZoomLink class; returns their urls in document order.
pub fn extract_image_urls(html_content: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html_content);

    let selector = Selector::parse("div.separator > a.hoverZoomLink").unwrap();
    doc.select(&selector)
        .enumerate()
        .filter_map(|(i, a)| {
            a.attr("href")
                .or_else(|| {
                    error!("failed to extract url for page {}", i + 1);
                    None
                })
                .map(str::to_string)
        })
        .collect()
}

fn page_filename(manga_name: &str, chapter_number: u32, page_num: usize) -> String {
    format!("{manga_name}_{chapter_number:03}_{page_num:02}.jpg")
}

pub async fn download_page(
    client: &Client,
    url: &str,
    file_path: &Path,
    page_num: usize,
) -> anyhow::Result<()> {
    let response = client.get(url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(ScraperErrors::PageDownloadFailed {
            url: url.to_string(),
            page_num,
        }
        .into());
    }

    let data = response.bytes().await?;
    let mut downloaded_file = fs::File::create(file_path).await?;
    downloaded_file.write_all(&data).await?;

    Ok(())
}

/// Downloads every page image of a chapter into `chapter_path`, one request
/// at a time. A failed page is logged and skipped, not retried.
pub async fn download_chapter(
    client: &Client,
    chapter_url: &str,
    chapter_path: &Path,
    manga_name: &str,
    chapter_number: u32,
) -> anyhow::Result<()> {
    let response = client.get(chapter_url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScraperErrors::ChapterFetchFailed {
            url: chapter_url.to_string(),
            status,
        }
        .into());
    }

    let html_content = response.text().await?;
    let image_urls = extract_image_urls(&html_content);

    for (i, image_url) in image_urls.iter().enumerate() {
        let page_num = i + 1;
        let file_path = chapter_path.join(page_filename(manga_name, chapter_number, page_num));
        match download_page(client, image_url, &file_path, page_num).await {
            Ok(()) => info!("downloaded {}", file_path.display()),
            Err(err) => error!("{err}"),
        }
    }

    Ok(())
}
