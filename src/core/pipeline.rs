use crate::core::processor::RecordProcessor;
use crate::domain::model::{Record, RedactedRow, Row, TransformResult};
use crate::domain::ports::{Pipeline, Storage};
use crate::utils::error::{RedactError, Result};

/// Fixed output filename, written under the storage root.
pub const OUTPUT_FILE: &str = "redacted_output.csv";

const RECORD_ID_COLUMN: &str = "record_id";
const DATA_JSON_COLUMN: &str = "data_json";

/// One-shot CSV-in, CSV-out redaction pipeline. Rows are processed
/// strictly in order, one at a time; the only state carried across rows
/// is the compiled rule set inside the processor.
pub struct CsvPipeline<S: Storage> {
    storage: S,
    input_path: String,
    processor: RecordProcessor,
}

impl<S: Storage> CsvPipeline<S> {
    pub fn new(storage: S, input_path: String) -> Self {
        Self {
            storage,
            input_path,
            processor: RecordProcessor::new(),
        }
    }

    /// Parse failures substitute an empty record: malformed payloads
    /// degrade to "no PII found" instead of failing the run.
    fn decode_payload(&self, record_id: &str, data_json: &str) -> Record {
        match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(data_json) {
            Ok(fields) => Record::new(fields),
            Err(e) => {
                tracing::debug!(
                    "Payload for record {} failed to parse ({}), substituting empty record",
                    record_id,
                    e
                );
                Record::default()
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for CsvPipeline<S> {
    async fn extract(&self) -> Result<Vec<Row>> {
        let data = self.storage.read_file(&self.input_path).await?;
        // Ragged rows are a per-record anomaly, not a fatal one: short
        // rows read as empty cells, extra cells are ignored.
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        let column = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| RedactError::ProcessingError {
                    message: format!("Input is missing required column: {}", name),
                })
        };
        let id_idx = column(RECORD_ID_COLUMN)?;
        let json_idx = column(DATA_JSON_COLUMN)?;

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(Row {
                record_id: record.get(id_idx).unwrap_or_default().to_string(),
                data_json: record.get(json_idx).unwrap_or_default().to_string(),
            });
        }

        tracing::debug!("Extracted {} rows from {}", rows.len(), self.input_path);
        Ok(rows)
    }

    async fn transform(&self, rows: Vec<Row>) -> Result<TransformResult> {
        let mut redacted = Vec::with_capacity(rows.len());
        let mut pii_count = 0;

        for row in rows {
            let record = self.decode_payload(&row.record_id, &row.data_json);
            let (record, is_pii) = self.processor.process(record);
            if is_pii {
                pii_count += 1;
            }
            redacted.push(RedactedRow {
                record_id: row.record_id,
                payload: record.to_json()?,
                is_pii,
            });
        }

        Ok(TransformResult {
            rows: redacted,
            pii_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["record_id", "redacted_data_json", "is_pii"])?;
        for row in &result.rows {
            // Literal True/False, matching the documented output contract
            let flag = if row.is_pii { "True" } else { "False" };
            writer.write_record([row.record_id.as_str(), row.payload.as_str(), flag])?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| RedactError::ProcessingError {
                message: format!("Failed to flush output CSV: {}", e),
            })?;
        self.storage.write_file(OUTPUT_FILE, &data).await?;

        Ok(OUTPUT_FILE.to_string())
    }
}
