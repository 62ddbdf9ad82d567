use crate::models::ChapterName;

const CHAPTER_MARKER: &str = "Chapter";

/// Splits a listing title of the form `"<series>: <subtitle>, Chapter <n>"`.
/// The format is assumed, not verified; missing pieces fall back per field.
pub fn parse_manga_name(manga_name: &str) -> ChapterName {
    match manga_name.find(':') {
        Some(colon) => {
            let series = manga_name[..colon].trim().to_string();
            let rest = &manga_name[colon + 1..];
            match rest.find(CHAPTER_MARKER) {
                Some(marker) => ChapterName {
                    series,
                    subtitle: strip_trailing_comma(rest[..marker].trim()),
                    number: parse_chapter_number(&rest[marker + CHAPTER_MARKER.len()..]),
                },
                None => ChapterName {
                    series,
                    subtitle: rest.trim().to_string(),
                    number: 1,
                },
            }
        }
        None => match manga_name.find(CHAPTER_MARKER) {
            Some(marker) => ChapterName {
                series: strip_trailing_comma(manga_name[..marker].trim()),
                subtitle: String::new(),
                number: parse_chapter_number(&manga_name[marker + CHAPTER_MARKER.len()..]),
            },
            None => ChapterName {
                series: manga_name.trim().to_string(),
                subtitle: String::new(),
                number: 1,
            },
        },
    }
}

fn strip_trailing_comma(text: &str) -> String {
    text.strip_suffix(',').map_or(text, str::trim).to_string()
}

fn parse_chapter_number(text: &str) -> u32 {
    match text.trim().parse::<u32>() {
        Ok(number) if number >= 1 => number,
        _ => 1,
    }
}
