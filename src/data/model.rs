use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors raised by the data layer
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("sentiment {score} is outside [0, 1]")]
    ScoreOutOfRange { score: f64 },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing '{0}' column")]
    MissingColumn(String),
}

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub handle: String,
}

impl Author {
    pub fn new(name: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: handle.into(),
        }
    }

    /// Up to two initials for the avatar badge, taken from the display name
    /// (falls back to the handle without its `@`).
    pub fn initials(&self) -> String {
        let source = if self.name.trim().is_empty() {
            self.handle.trim_start_matches('@')
        } else {
            self.name.as_str()
        };
        source
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// ScoredPost – one row of the dataset
// ---------------------------------------------------------------------------

/// A post together with its sentiment score (0 = most negative, 1 = most positive).
///
/// Fields are private so a post cannot leave the `[0, 1]` score range once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPost {
    author: Author,
    text: String,
    score: f64,
}

impl ScoredPost {
    pub fn new(author: Author, text: impl Into<String>, score: f64) -> Result<Self, DatasetError> {
        if !(0.0..=1.0).contains(&score) {
            return Err(DatasetError::ScoreOutOfRange { score });
        }
        Ok(Self {
            author,
            text: text.into(),
            score,
        })
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Score on the 0–100 display scale, rounded to the nearest integer.
    pub fn percent(&self) -> u8 {
        (self.score * 100.0).round() as u8
    }
}

// ---------------------------------------------------------------------------
// PostRecord – the flat on-disk / wire representation
// ---------------------------------------------------------------------------

/// Flat record as produced by the search backend:
/// `{ "name": ..., "handle": ..., "reply": ..., "sentiment": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub name: String,
    pub handle: String,
    #[serde(alias = "content")]
    pub reply: String,
    pub sentiment: f64,
}

impl TryFrom<PostRecord> for ScoredPost {
    type Error = DatasetError;

    fn try_from(record: PostRecord) -> Result<Self, Self::Error> {
        ScoredPost::new(
            Author::new(record.name, record.handle),
            record.reply,
            record.sentiment,
        )
    }
}

// ---------------------------------------------------------------------------
// PostDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Ordered, read-only collection of posts for one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct PostDataset {
    posts: Vec<ScoredPost>,
}

impl PostDataset {
    pub fn from_posts(posts: Vec<ScoredPost>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[ScoredPost] {
        &self.posts
    }

    pub fn get(&self, index: usize) -> Option<&ScoredPost> {
        self.posts.get(index)
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Lowest and highest score, `None` for an empty dataset.
    pub fn score_bounds(&self) -> Option<(f64, f64)> {
        self.posts.iter().map(ScoredPost::score).fold(None, |acc, s| match acc {
            None => Some((s, s)),
            Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
        })
    }
}
