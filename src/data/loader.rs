use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{Author, DatasetError, PostDataset, PostRecord, ScoredPost};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a post dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "name": ..., "handle": ..., "reply": ..., "sentiment": 0.7 }, ...]`
/// * `.csv`     – header `name,handle,reply,sentiment`
/// * `.parquet` – columns `name`, `handle`, `reply` (or `content`), `sentiment`
pub fn load_file(path: &Path) -> Result<PostDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(DatasetError::UnsupportedExtension(other.to_string()).into()),
    }
}

fn into_dataset(records: impl IntoIterator<Item = PostRecord>) -> Result<PostDataset> {
    let posts = records
        .into_iter()
        .enumerate()
        .map(|(row, record)| {
            ScoredPost::try_from(record).with_context(|| format!("Row {row}: invalid post"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(PostDataset::from_posts(posts))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the shape the search backend answers with.
/// `content` is accepted in place of `reply`.
fn load_json(path: &Path) -> Result<PostDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<PostRecord> = serde_json::from_str(&text).context("parsing JSON records")?;
    into_dataset(records)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<PostDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let records = reader
        .deserialize::<PostRecord>()
        .enumerate()
        .map(|(row, rec)| rec.with_context(|| format!("CSV row {row}")))
        .collect::<Result<Vec<_>>>()?;
    into_dataset(records)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`), Polars or the
/// `generate_sample` binary. Text columns may be Utf8 or LargeUtf8, the
/// sentiment column Float64 or Float32.
fn load_parquet(path: &Path) -> Result<PostDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut posts = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let offset = posts.len();
        posts.extend(batch_posts(&batch, offset)?);
    }

    Ok(PostDataset::from_posts(posts))
}

fn batch_posts(batch: &RecordBatch, row_offset: usize) -> Result<Vec<ScoredPost>> {
    let names = column(batch, &["name"])?;
    let handles = column(batch, &["handle"])?;
    let replies = column(batch, &["reply", "content"])?;
    let sentiments = column(batch, &["sentiment"])?;

    (0..batch.num_rows())
        .map(|row| {
            let at = row_offset + row;
            let name = string_at(names, row).with_context(|| format!("Row {at}: 'name'"))?;
            let handle = string_at(handles, row).with_context(|| format!("Row {at}: 'handle'"))?;
            let reply = string_at(replies, row).with_context(|| format!("Row {at}: 'reply'"))?;
            let sentiment =
                float_at(sentiments, row).with_context(|| format!("Row {at}: 'sentiment'"))?;
            ScoredPost::new(Author::new(name, handle), reply, sentiment)
                .with_context(|| format!("Row {at}: invalid post"))
        })
        .collect()
}

// -- Arrow helpers --

/// First column present under any of `names`.
fn column<'a>(batch: &'a RecordBatch, names: &[&str]) -> Result<&'a Arc<dyn Array>> {
    let schema = batch.schema();
    names
        .iter()
        .find_map(|name| schema.index_of(name).ok())
        .map(|idx| batch.column(idx))
        .ok_or_else(|| DatasetError::MissingColumn(names[0].to_string()).into())
}

fn string_at(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("expected a string column, got {other:?}"),
    }
}

fn float_at(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Float64 => Ok(col.as_primitive::<Float64Type>().value(row)),
        DataType::Float32 => Ok(f64::from(col.as_primitive::<Float32Type>().value(row))),
        other => bail!("expected Float64 or Float32, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use arrow::array::{Float32Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use parquet::arrow::ArrowWriter;

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_json_with_reply_or_content() {
        let file = write_temp(
            ".json",
            r#"[
                {"name": "Rag Pil", "handle": "@rag_pil", "reply": "Love this!", "sentiment": 1.0},
                {"name": "Skeptic", "handle": "@skeptic123", "content": "Not convinced.", "sentiment": 0.2}
            ]"#,
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.posts()[1].text(), "Not convinced.");
        assert_eq!(ds.posts()[0].author().name, "Rag Pil");
    }

    #[test]
    fn json_rejects_out_of_range_sentiment() {
        let file = write_temp(
            ".json",
            r#"[{"name": "A", "handle": "@a", "reply": "x", "sentiment": 1.5}]"#,
        );
        let err = load_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Row 0"));
        assert_eq!(
            err.root_cause().downcast_ref::<DatasetError>(),
            Some(&DatasetError::ScoreOutOfRange { score: 1.5 })
        );
    }

    #[test]
    fn loads_csv() {
        let file = write_temp(
            ".csv",
            "name,handle,reply,sentiment\n\
             Tech Critic,@tech_critic,Overhyped.,0.0\n\
             UX Designer,@ux_designer,\"Clean design, but accessibility could be improved.\",0.65\n",
        );
        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(
            ds.posts()[1].text(),
            "Clean design, but accessibility could be improved."
        );
        assert_eq!(ds.posts()[1].score(), 0.65);
    }

    #[test]
    fn csv_with_bad_number_fails_with_row() {
        let file = write_temp(".csv", "name,handle,reply,sentiment\nA,@a,x,high\n");
        let err = load_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn loads_parquet_with_content_and_f32_sentiment() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("name", DataType::Utf8, false),
            Field::new("handle", DataType::Utf8, false),
            Field::new("content", DataType::Utf8, false),
            Field::new("sentiment", DataType::Float32, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["Innovator X", "Tech Skeptic"])),
                Arc::new(StringArray::from(vec!["@innovator_x", "@tech_skeptic"])),
                Arc::new(StringArray::from(vec!["Brilliant.", "Doubtful."])),
                Arc::new(Float32Array::from(vec![0.5_f32, 0.25])),
            ],
        )
        .unwrap();

        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(std::fs::File::create(file.path()).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.posts()[0].text(), "Brilliant.");
        assert_eq!(ds.posts()[1].score(), 0.25);
    }

    #[test]
    fn parquet_missing_column_is_reported() {
        let schema = Arc::new(Schema::new(vec![Field::new("name", DataType::Utf8, false)]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![Arc::new(StringArray::from(vec!["Nobody"]))],
        )
        .unwrap();

        let file = tempfile::Builder::new().suffix(".pq").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(std::fs::File::create(file.path()).unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::MissingColumn("handle".to_string()))
        );
    }

    #[test]
    fn unsupported_extension() {
        let err = load_file(Path::new("posts.xlsx")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DatasetError>(),
            Some(&DatasetError::UnsupportedExtension("xlsx".to_string()))
        );
    }
}
