use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterName {
    pub series: String,
    pub subtitle: String,
    pub number: u32,
}

impl ChapterName {
    /// Directory stem for this chapter: subtitle spaces become underscores,
    /// series spaces are kept.
    pub fn dir_name(&self) -> String {
        format!("{}_{}", self.series, self.subtitle.replace(' ', "_"))
    }
}

impl Display for ChapterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:03}", self.series, self.number)
    }
}
