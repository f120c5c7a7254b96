use std::{fs::File, io::Write, path::Path};

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use crate::error::LocksmithError;

pub const HEADER: &str = "Product Key";

/// Writes the keys as a single column csv table with a `Product Key` header.
/// Rows keep the order of `keys`, there is no index column.
pub fn write_table<W: Write>(keys: &[String], sink: W) -> Result<(), LocksmithError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink);
    writer.write_record([HEADER])?;
    for key in keys {
        writer.write_record([key])?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes the table into it.
/// The parent directory has to exist already.
pub fn export(keys: &[String], path: &Path) -> Result<(), LocksmithError> {
    let file = File::create(path)?;
    debug!("Writing {} keys to {path:?}", keys.len());
    write_table(keys, file)
}

#[cfg(test)]
mod tests {
    use std::{fs::read_to_string, io::ErrorKind};

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::random::generate_collection;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let mut buffer = Vec::new();
        write_table(
            &keys(&["AAAAA-BBBBB-CCCCC-DDDDD-EEEEE", "01234-56789-ABCDE-FGHIJ-KLMNO"]),
            &mut buffer,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Product Key\nAAAAA-BBBBB-CCCCC-DDDDD-EEEEE\n01234-56789-ABCDE-FGHIJ-KLMNO\n"
        );
    }

    #[test]
    fn duplicates_are_written_as_is() {
        let mut buffer = Vec::new();
        let duplicated = keys(&["AAAAA-AAAAA-AAAAA-AAAAA-AAAAA"; 2]);
        write_table(&duplicated, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 3);
    }

    #[test]
    fn exported_file_has_one_line_per_key_plus_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated_keys.csv");
        let collection = generate_collection(&mut StdRng::seed_from_u64(3), 100_000);

        export(&collection, &path).unwrap();

        let content = read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 100_001);
        assert_eq!(lines[0], HEADER);
        assert_eq!(&lines[1..], collection.as_slice());
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generated_keys.csv");
        std::fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

        export(&keys(&["ZZZZZ-99999-ZZZZZ-99999-ZZZZZ"]), &path).unwrap();

        assert_eq!(
            read_to_string(&path).unwrap(),
            "Product Key\nZZZZZ-99999-ZZZZZ-99999-ZZZZZ\n"
        );
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does").join("not").join("exist.csv");

        let err = export(&keys(&["AAAAA-BBBBB-CCCCC-DDDDD-EEEEE"]), &path).unwrap_err();

        match err {
            LocksmithError::Io(err) => assert_eq!(err.kind(), ErrorKind::NotFound),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(!path.exists());
    }
}
