use bzip2::Compression;
use bzip2::write::BzEncoder;
use eyre::Result;
use getzotero_lib::config::PackageSpec;
use std::path::{Path, PathBuf};

/// Builds a bzip2-compressed tarball in memory from `(path, contents)` pairs.
pub fn fixture_archive(entries: &[(&str, &[u8])]) -> Result<Vec<u8>> {
    let encoder = BzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    for (name, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder.append_data(&mut header, name, *data)?;
    }
    let encoder = builder.into_inner()?;
    Ok(encoder.finish()?)
}

/// The canonical two-file upstream fixture: a launcher script and an
/// `application.ini` declaring `version` under `[App]`.
pub fn zotero_fixture(version: &str, arch_key: &str) -> Result<Vec<u8>> {
    let subdir = format!("Zotero_linux-{arch_key}");
    let ini = format!("[App]\nVendor=Zotero\nName=Zotero\nVersion={version}\n");
    fixture_archive(&[
        (&format!("{subdir}/zotero"), b"#!/bin/sh\nexec true\n" as &[u8]),
        (&format!("{subdir}/application.ini"), ini.as_bytes()),
    ])
}

/// A spec pointed at a stub download server instead of zotero.org.
pub fn spec_for_server(server_url: &str) -> PackageSpec {
    PackageSpec {
        download_url_template: format!("{server_url}/download/linux-{{arch}}"),
        ..PackageSpec::zotero()
    }
}

/// Writes a stand-in for `dpkg-deb` that checks the staged tree, records the
/// package root it was handed and creates the output file. Keeps the
/// end-to-end tests hermetic on machines without dpkg.
pub fn write_stub_packaging_tool(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("stub-dpkg-deb");
    let script = "#!/bin/sh\n\
        [ \"$1\" = --build ] || exit 64\n\
        [ -f \"$2/DEBIAN/control\" ] || exit 65\n\
        echo \"$2\" > \"$(dirname \"$3\")/package-root.txt\"\n\
        cp \"$2/DEBIAN/control\" \"$3\"\n";
    std::fs::write(&path, script)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    }
    Ok(path)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .try_init();
}
