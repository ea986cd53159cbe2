use std::path::PathBuf;

use clap::Parser;

use crate::data::sampler::DEFAULT_SAMPLE_COUNT;
use crate::state::QueryContext;

/// Explore the sentiment of posts returned for a search query.
#[derive(Debug, Parser)]
#[command(name = "sentiment-dash", version, about)]
pub struct Args {
    /// Dataset to open (.json, .csv or .parquet). Defaults to the built-in sample set.
    #[arg(long, env = "SENTIMENT_DASH_DATA")]
    pub data: Option<PathBuf>,

    /// Display name of the account that ran the query.
    #[arg(long, default_value = "Rag Pil")]
    pub name: String,

    /// Handle of the account that ran the query.
    #[arg(long, env = "SENTIMENT_DASH_HANDLE", default_value = "@rag_pil")]
    pub handle: String,

    /// Query text shown above the charts.
    #[arg(long, env = "SENTIMENT_DASH_QUERY", default_value = "")]
    pub query: String,

    /// Number of representative posts shown as cards.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub sample_count: u16,
}

impl Args {
    pub fn query_context(&self) -> QueryContext {
        QueryContext {
            name: self.name.clone(),
            handle: self.handle.clone(),
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["sentiment-dash"]).unwrap();
        assert_eq!(usize::from(args.sample_count), DEFAULT_SAMPLE_COUNT);
        assert_eq!(args.query_context().handle, "@rag_pil");
    }

    #[test]
    fn explicit_values() {
        let args = Args::try_parse_from([
            "sentiment-dash",
            "--data",
            "posts.parquet",
            "--query",
            "new phone launch",
            "--sample-count",
            "6",
        ])
        .unwrap();
        assert_eq!(args.data, Some(PathBuf::from("posts.parquet")));
        assert_eq!(args.query_context().query, "new phone launch");
        assert_eq!(args.sample_count, 6);
    }

    #[test]
    fn zero_sample_count_is_rejected() {
        assert!(Args::try_parse_from(["sentiment-dash", "--sample-count", "0"]).is_err());
    }
}
