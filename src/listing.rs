use std::collections::HashMap;

use log::error;
use reqwest::{Client, StatusCode};
use scraper::Selector;

pub const HOST_URL: &str = "https://w15.read-borutomanga.com";

/// Collects listing anchors into a title -> chapter-url map. Anchors must sit
/// directly under an `<li>` and point somewhere below `HOST_URL/manga/`; a
/// title appearing twice keeps the later url.
pub fn extract_manga_list(html_content: &str) -> HashMap<String, String> {
    let doc = scraper::Html::parse_document(html_content);

    let selector = Selector::parse(&format!("li > a[href^=\"{HOST_URL}/manga/\"]")).unwrap();
    doc.select(&selector)
        .map(|a| {
            let manga_name = a.text().collect::<String>();
            let manga_url = a.attr("href").unwrap_or_default().to_string();
            (manga_name, manga_url)
        })
        .collect()
}

pub async fn fetch_manga_list(client: &Client, index_url: &str) -> HashMap<String, String> {
    match client.get(index_url).send().await {
        Ok(response) => {
            let status = response.status();
            if status != StatusCode::OK {
                error!("failed to retrieve manga list: status code {status}");
                return HashMap::new();
            }
            match response.text().await {
                Ok(html_content) => extract_manga_list(&html_content),
                Err(err) => {
                    error!("failed to read manga list response: {err}");
                    HashMap::new()
                }
            }
        }
        Err(err) => {
            error!("failed to retrieve manga list: {err}");
            HashMap::new()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const LISTING_HTML: &str = r#"<html><body><ul>
        <li><a href="https://w15.read-borutomanga.com/manga/boruto-chapter-81/">Boruto: Two Blue Vortex, Chapter 81</a></li>
        <li><a href="https://w15.read-borutomanga.com/manga/boruto-chapter-80/">Boruto: Two Blue Vortex, Chapter 80</a></li>
        <li><a href="https://example.com/manga/elsewhere/">Elsewhere</a></li>
        <li><span>no anchor here</span></li>
    </ul></body></html>"#;

    #[test]
    fn extracts_matching_anchors() {
        let manga_list = extract_manga_list(LISTING_HTML);

        assert_eq!(manga_list.len(), 2);
        assert_eq!(
            manga_list["Boruto: Two Blue Vortex, Chapter 81"],
            "https://w15.read-borutomanga.com/manga/boruto-chapter-81/"
        );
        assert_eq!(
            manga_list["Boruto: Two Blue Vortex, Chapter 80"],
            "https://w15.read-borutomanga.com/manga/boruto-chapter-80/"
        );
    }

    #[test]
    fn later_duplicate_title_wins() {
        let html = r#"<ul>
            <li><a href="https://w15.read-borutomanga.com/manga/first/">Boruto, Chapter 1</a></li>
            <li><a href="https://w15.read-borutomanga.com/manga/second/">Boruto, Chapter 1</a></li>
        </ul>"#;

        let manga_list = extract_manga_list(html);

        assert_eq!(manga_list.len(), 1);
        assert_eq!(
            manga_list["Boruto, Chapter 1"],
            "https://w15.read-borutomanga.com/manga/second/"
        );
    }

    #[test]
    fn empty_when_no_anchor_matches() {
        assert!(extract_manga_list("<html><body><p>nothing</p></body></html>").is_empty());
    }
}
