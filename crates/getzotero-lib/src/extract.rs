use crate::error::GetZoteroError;
use bzip2::read::BzDecoder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Component, Path};
use tracing::{debug, info};

/// Unpacks the bzip2-compressed tarball at `archive_path` into `dest_dir`
/// and deletes the archive file afterwards.
///
/// Entries that are absolute or contain `..` components are rejected so a
/// hostile archive cannot write outside the scratch directory.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<(), GetZoteroError> {
    info!(archive = %archive_path.display(), "Extracting archive");

    let file = File::open(archive_path)?;
    let decoder = BzDecoder::new(BufReader::new(file));
    let mut archive = tar::Archive::new(decoder);

    let entries = archive.entries().map_err(|e| GetZoteroError::Archive {
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut count = 0usize;
    for entry in entries {
        let mut entry = entry.map_err(|e| GetZoteroError::Archive {
            path: archive_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let entry_path = entry
            .path()
            .map_err(|e| GetZoteroError::Archive {
                path: archive_path.to_path_buf(),
                reason: e.to_string(),
            })?
            .into_owned();

        let escapes = entry_path.is_absolute()
            || entry_path
                .components()
                .any(|c| matches!(c, Component::ParentDir));
        if escapes {
            return Err(GetZoteroError::Archive {
                path: archive_path.to_path_buf(),
                reason: format!(
                    "entry '{}' would escape the extraction root",
                    entry_path.display()
                ),
            });
        }

        let target = dest_dir.join(&entry_path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        entry.unpack(&target).map_err(|e| GetZoteroError::Archive {
            path: archive_path.to_path_buf(),
            reason: format!("failed to unpack '{}': {e}", entry_path.display()),
        })?;
        count += 1;
    }

    fs::remove_file(archive_path)?;
    debug!(entries = count, dest = %dest_dir.display(), "Extraction complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzip2::Compression;
    use bzip2::write::BzEncoder;
    use std::io::Write;

    fn write_tar_bz2(path: &Path, entries: &[(&str, &[u8])]) {
        let file = File::create(path).unwrap();
        let encoder = BzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, *data).unwrap();
        }
        let encoder = builder.into_inner().unwrap();
        let mut file = encoder.finish().unwrap();
        file.flush().unwrap();
    }

    #[test]
    fn unpacks_entries_and_removes_the_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("zotero.tar.bz2");
        write_tar_bz2(
            &archive,
            &[
                ("Zotero_linux-x86_64/zotero", b"#!/bin/sh\n" as &[u8]),
                ("Zotero_linux-x86_64/application.ini", b"[App]\nVersion=1.0\n"),
            ],
        );

        extract_archive(&archive, dir.path()).unwrap();

        assert!(!archive.exists(), "archive should be deleted after extraction");
        let app_dir = dir.path().join("Zotero_linux-x86_64");
        assert_eq!(
            std::fs::read(app_dir.join("zotero")).unwrap(),
            b"#!/bin/sh\n"
        );
        assert!(app_dir.join("application.ini").is_file());
    }

    // tar::Builder refuses to write `..` paths itself, so the hostile entry
    // is smuggled in through the raw header bytes.
    fn write_traversal_tar_bz2(path: &Path, name: &str, data: &[u8]) {
        let file = File::create(path).unwrap();
        let encoder = BzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);
        let mut header = tar::Header::new_gnu();
        header.as_gnu_mut().unwrap().name[..name.len()].copy_from_slice(name.as_bytes());
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append(&header, data).unwrap();
        let encoder = builder.into_inner().unwrap();
        encoder.finish().unwrap();
    }

    #[test]
    fn rejects_path_traversal_entries() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("scratch");
        fs::create_dir(&inner).unwrap();
        let archive = inner.join("evil.tar.bz2");
        write_traversal_tar_bz2(&archive, "../escaped.txt", b"boom");

        let err = extract_archive(&archive, &inner).unwrap_err();
        assert!(
            matches!(err, GetZoteroError::Archive { .. }),
            "expected Archive error, got {err:?}"
        );
        assert!(!dir.path().join("escaped.txt").exists());
    }

    #[test]
    fn malformed_archive_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("zotero.tar.bz2");
        std::fs::write(&archive, b"this is not bzip2 data").unwrap();

        let err = extract_archive(&archive, dir.path()).unwrap_err();
        assert!(matches!(err, GetZoteroError::Archive { .. }), "got {err:?}");
    }
}
