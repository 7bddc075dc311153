// dataset-core/src/writer.rs
//! CSV 输出

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{DatasetError, Result};
use crate::models::Record;

pub const CSV_HEADER: [&str; 4] = ["filename", "title", "text", "label"];

/// 写出表头和所有记录
///
/// 即使没有记录也会写表头，方便下游按列读取。
pub fn write_records<W: io::Write>(out: W, records: &[Record]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_csv(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    write_records(file, records).map_err(|source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Label;
    use tempfile::TempDir;

    fn render(records: &[Record]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let records = vec![
            Record::new("a.json", "X", "", Label::Fake),
            Record::new("b.json", "", "Y", Label::Real),
        ];

        assert_eq!(
            render(&records),
            "filename,title,text,label\na.json,X,,fake\nb.json,,Y,real\n"
        );
    }

    #[test]
    fn test_empty_dataset_writes_header_only() {
        assert_eq!(render(&[]), "filename,title,text,label\n");
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let records = vec![Record::new(
            "q.json",
            "Hello, \"world\"",
            "line one\nline two",
            Label::Fake,
        )];

        assert_eq!(
            render(&records),
            "filename,title,text,label\nq.json,\"Hello, \"\"world\"\"\",\"line one\nline two\",fake\n"
        );
    }

    #[test]
    fn test_non_ascii_is_written_as_utf8() {
        let records = vec![Record::new("u.json", "Café ☕", "日本語", Label::Real)];
        assert!(render(&records).contains("u.json,Café ☕,日本語,real"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = save_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
