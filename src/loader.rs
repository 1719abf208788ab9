//! Credential file loader
//!
//! Reads credential lines from a file and sorts them into accepted entries,
//! skipped comment/blank lines and rejected lines.

use std::collections::HashSet;
use std::path::Path;

use log::{info, warn};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::auth::{Credentials, parse_line};
use crate::config::LoaderConfig;
use crate::error::{CredentialsError, LoaderError};

/// Summary of a load
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Accepted credentials in file order, duplicates removed
    pub accepted: Vec<Credentials>,
    pub comments: usize,
    pub blank: usize,
    pub duplicates: usize,
    /// 1-based line numbers with the reason they were rejected
    pub rejected: Vec<(usize, CredentialsError)>,
}

impl LoadReport {
    /// Accepted credentials ordered by user name
    pub fn sorted(&self) -> Vec<Credentials> {
        let mut sorted = self.accepted.clone();
        sorted.sort_by(Credentials::compare);
        sorted
    }
}

/// Load credentials from the file named in the configuration
pub async fn load_credentials(config: &LoaderConfig) -> Result<LoadReport, LoaderError> {
    load_file(config.credentials_path(), config).await
}

/// Load credentials from an explicit path
pub async fn load_file(
    path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> Result<LoadReport, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).await?;
    let report = load_from_reader(BufReader::new(file), config).await?;

    info!(
        "Loaded {} credentials from {} ({} rejected, {} duplicates, {} comments)",
        report.accepted.len(),
        path.display(),
        report.rejected.len(),
        report.duplicates,
        report.comments
    );

    Ok(report)
}

/// Strips the line terminator, and a byte order mark on the first line.
fn decode_line(raw: &[u8], first: bool) -> Result<&str, CredentialsError> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = std::str::from_utf8(raw).map_err(|_| CredentialsError::Encoding)?;

    Ok(if first {
        line.strip_prefix('\u{feff}').unwrap_or(line)
    } else {
        line
    })
}

/// Load credentials from any buffered reader
pub async fn load_from_reader<R>(
    mut reader: R,
    config: &LoaderConfig,
) -> Result<LoadReport, LoaderError>
where
    R: AsyncBufRead + Unpin,
{
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_number += 1;

        let parsed = decode_line(&buf, line_number == 1)
            .and_then(|line| parse_line(line, &config.delimiter));

        match parsed {
            Ok(credentials) => {
                if seen.insert(credentials.clone()) {
                    report.accepted.push(credentials);
                } else {
                    warn!("Duplicate credentials for {} on line {}", credentials, line_number);
                    report.duplicates += 1;
                }
            }
            Err(CredentialsError::CommentLine) => report.comments += 1,
            Err(CredentialsError::BlankLine) => report.blank += 1,
            Err(reason) if config.fail_on_rejected => {
                return Err(LoaderError::Rejected {
                    line: line_number,
                    reason,
                });
            }
            Err(reason) => {
                warn!("Skipping line {}: {}", line_number, reason);
                report.rejected.push((line_number, reason));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(delimiter: &str, fail_on_rejected: bool) -> LoaderConfig {
        LoaderConfig {
            credentials_file: "unused".into(),
            delimiter: delimiter.into(),
            fail_on_rejected,
        }
    }

    #[tokio::test]
    async fn test_load_sorts_lines_into_report() {
        let input = "// header\nalice:pw\n\nbob:x:y\nALICE:pw\ncarol:\ndave : d\n";
        let report = load_from_reader(input.as_bytes(), &config(":", false))
            .await
            .unwrap();

        assert_eq!(report.accepted.len(), 2);
        assert_eq!(report.comments, 1);
        assert_eq!(report.blank, 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(
            report.rejected,
            vec![
                (4, CredentialsError::FieldCount(3)),
                (6, CredentialsError::BlankField)
            ]
        );
    }

    #[tokio::test]
    async fn test_fail_on_rejected() {
        let input = "alice:pw\nbroken\n";
        let err = load_from_reader(input.as_bytes(), &config(":", true))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Rejected {
                line: 2,
                reason: CredentialsError::FieldCount(1)
            }
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_skipped() {
        let input: &[u8] = b"alice:pw\nbad\xff:pw\r\nbob:pw\n";
        let report = load_from_reader(input, &config(":", false)).await.unwrap();

        assert_eq!(report.accepted.len(), 2);
        assert_eq!(report.rejected, vec![(2, CredentialsError::Encoding)]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_fails_when_strict() {
        let input: &[u8] = b"alice:pw\nbad\xff:pw\n";
        let err = load_from_reader(input, &config(":", true)).await.unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Rejected {
                line: 2,
                reason: CredentialsError::Encoding
            }
        ));
    }

    #[tokio::test]
    async fn test_crlf_and_missing_final_newline() {
        let input = "alice:pw\r\nbob:x";
        let report = load_from_reader(input.as_bytes(), &config(":", false))
            .await
            .unwrap();
        assert_eq!(report.accepted[0].user_password(), Some("pw"));
        assert_eq!(report.accepted[1].user_password(), Some("x"));
    }

    #[tokio::test]
    async fn test_byte_order_mark_stripped() {
        let input = "\u{feff}alice;pw\n";
        let report = load_from_reader(input.as_bytes(), &config(";", false))
            .await
            .unwrap();
        assert_eq!(report.accepted[0].user_name(), Some("alice"));
    }

    #[tokio::test]
    async fn test_sorted_by_user_name() {
        let input = "carol:1\nBob:2\nalice:3\n";
        let report = load_from_reader(input.as_bytes(), &config(":", false))
            .await
            .unwrap();
        let names: Vec<_> = report
            .sorted()
            .iter()
            .filter_map(|c| c.user_name().map(str::to_string))
            .collect();
        assert_eq!(names, ["alice", "Bob", "carol"]);
    }
}
