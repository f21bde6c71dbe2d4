//! Robust line-oriented reading of GPS trace resources.

use std::io::Read;
use std::num::ParseFloatError;

use rayon::prelude::*;

use crate::diagnostics::{DiagnosticSink, Level};
use crate::loading::resource::ResourceProvider;
use crate::model::{GpsFix, TraceLog};

/// Comma-separated values expected on every record line
const FIELDS_PER_RECORD: usize = 5;
const FIELD_NAMES: [&str; FIELDS_PER_RECORD] =
    ["latitude", "longitude", "angle", "speed", "hdop"];

/// Reader for GPS trace resources.
///
/// A trace read never fails: records that cannot be parsed are skipped
/// and reported through the diagnostics sink, a resource that cannot be
/// opened or read yields an empty log. Batch callers keep going no
/// matter what a single resource contains.
pub struct TraceReader<'a> {
    sink: &'a dyn DiagnosticSink,
}

impl<'a> TraceReader<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Reads one named resource into a trace log.
    pub fn read(&self, provider: &dyn ResourceProvider, name: &str) -> TraceLog {
        match provider.open(name) {
            Ok(stream) => self.read_from(name, stream),
            Err(err) => {
                self.sink.report(
                    Level::Error,
                    &format!("Cannot open trace resource '{name}'"),
                    Some(&err),
                );
                TraceLog::empty(name)
            }
        }
    }

    /// Parses an already opened stream. `name` labels the result and
    /// any diagnostics, it is not resolved again.
    pub fn read_from<R: Read>(&self, name: &str, mut stream: R) -> TraceLog {
        let mut bytes = Vec::new();
        if let Err(err) = stream.read_to_end(&mut bytes) {
            self.sink.report(
                Level::Error,
                &format!("Cannot read trace resource '{name}'"),
                Some(&err),
            );
            return TraceLog::empty(name);
        }

        // Undecodable byte sequences degrade to replacement characters
        // rather than failing the whole trace.
        let text = String::from_utf8_lossy(&bytes);
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() < 2 {
            self.sink.warn(&format!(
                "Trace '{name}' contains fewer than 2 lines, expected a header and at least one record"
            ));
            return TraceLog::empty(name);
        }

        let mut fixes = Vec::with_capacity(lines.len() - 1);
        // The first line is the header, skipped by position regardless
        // of its content.
        for line in &lines[1..] {
            match parse_record(line) {
                Ok(fix) => fixes.push(fix),
                Err(RecordError::ColumnCount(found)) => {
                    self.sink.warn(&format!(
                        "Trace '{name}': skipping record with {found} columns instead of \
                         {FIELDS_PER_RECORD}: '{line}'"
                    ));
                }
                Err(RecordError::Conversion { column, source }) => {
                    self.sink.report(
                        Level::Warn,
                        &format!("Trace '{name}': skipping record with non-numeric {column}: '{line}'"),
                        Some(&source),
                    );
                }
            }
        }

        TraceLog {
            source: name.to_owned(),
            fixes,
        }
    }

    /// Reads a batch of named resources, one log per name in input order.
    ///
    /// Resources are independent, a failure in one never affects the
    /// others.
    pub fn read_all(&self, provider: &dyn ResourceProvider, names: &[String]) -> Vec<TraceLog> {
        names
            .par_iter()
            .map(|name| self.read(provider, name))
            .collect()
    }
}

enum RecordError {
    ColumnCount(usize),
    Conversion {
        column: &'static str,
        source: ParseFloatError,
    },
}

/// Parses one record line into a fix.
///
/// Fields are trimmed of surrounding whitespace before numeric
/// conversion, the comma split itself is exact.
fn parse_record(line: &str) -> Result<GpsFix, RecordError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELDS_PER_RECORD {
        return Err(RecordError::ColumnCount(fields.len()));
    }

    let mut values = [0.0f64; FIELDS_PER_RECORD];
    for (index, field) in fields.iter().enumerate() {
        values[index] = field.trim().parse().map_err(|source| RecordError::Conversion {
            column: FIELD_NAMES[index],
            source,
        })?;
    }

    Ok(GpsFix {
        latitude: values[0],
        longitude: values[1],
        angle: values[2],
        speed_kmh: values[3],
        hdop: values[4],
    })
}
