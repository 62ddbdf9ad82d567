use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperErrors {
    #[error("failed to retrieve chapter page {url}: status code {status}")]
    ChapterFetchFailed { url: String, status: StatusCode },

    #[error("failed to download page {page_num} from {url}")]
    PageDownloadFailed { url: String, page_num: usize },
}
