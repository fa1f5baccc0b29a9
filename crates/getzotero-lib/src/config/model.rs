use crate::error::GetZoteroError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// CPU architecture variants of the upstream Zotero tarball.
///
/// The enumeration is closed: upstream only publishes these two builds, so
/// there is no registry mechanism for adding more.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Architecture {
    #[value(name = "x86_64")]
    X86_64,
    #[value(name = "i686")]
    I686,
}

impl Architecture {
    pub const ALL: [Architecture; 2] = [Architecture::X86_64, Architecture::I686];

    /// Architecture key used by the upstream download service.
    pub fn upstream_key(self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86_64",
            Architecture::I686 => "i686",
        }
    }

    /// Architecture label used in Debian control metadata and file names.
    /// Distinct from [`Self::upstream_key`]: Debian calls these `amd64` and
    /// `i386`.
    pub fn deb_label(self) -> &'static str {
        match self {
            Architecture::X86_64 => "amd64",
            Architecture::I686 => "i386",
        }
    }

    fn supported_keys() -> String {
        Self::ALL
            .iter()
            .map(|arch| arch.upstream_key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upstream_key())
    }
}

impl FromStr for Architecture {
    type Err = GetZoteroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|arch| arch.upstream_key() == s)
            .ok_or_else(|| GetZoteroError::UnsupportedArchitecture {
                requested: s.to_string(),
                supported: Self::supported_keys(),
            })
    }
}

/// Immutable description of the package to build.
///
/// Every pipeline stage receives this struct explicitly instead of reading
/// ambient globals, so tests can substitute URLs, file names and the
/// packaging tool.
#[derive(Clone, Debug)]
pub struct PackageSpec {
    /// Debian package name, also the first component of the output file name.
    pub package_name: String,
    /// Download URL template with an `{arch}` placeholder for the upstream
    /// architecture key.
    pub download_url_template: String,
    /// File name the downloaded archive is stored under inside the scratch
    /// directory.
    pub archive_name: String,
    /// Template for the directory the tarball unpacks into, with an `{arch}`
    /// placeholder.
    pub app_subdir_template: String,
    /// Name of the INI file inside the application directory that carries the
    /// version.
    pub ini_file: String,
    /// INI section holding the version key.
    pub version_section: String,
    /// INI key holding the version value.
    pub version_key: String,
    pub maintainer: String,
    pub section: String,
    pub priority: String,
    pub homepage: String,
    pub description_summary: String,
    pub description_body: String,
    /// Static body of the `.desktop` file installed under
    /// `usr/share/applications`.
    pub desktop_entry: String,
    /// Program invoked to build the package, `dpkg-deb` in production.
    pub packaging_program: String,
}

impl PackageSpec {
    /// The canonical Zotero spec.
    pub fn zotero() -> Self {
        Self {
            package_name: "zotero".to_string(),
            download_url_template:
                "https://www.zotero.org/download/client/dl?channel=release&platform=linux-{arch}"
                    .to_string(),
            archive_name: "zotero.tar.bz2".to_string(),
            app_subdir_template: "Zotero_linux-{arch}".to_string(),
            ini_file: "application.ini".to_string(),
            version_section: "App".to_string(),
            version_key: "Version".to_string(),
            maintainer: "Vadim Velikodniy <vadim@velikodniy.name>".to_string(),
            section: "science".to_string(),
            priority: "optional".to_string(),
            homepage: "https://zotero.org".to_string(),
            description_summary: "Zotero".to_string(),
            description_body: "Zotero is a free reference manager".to_string(),
            desktop_entry: "\
[Desktop Entry]
Name=Zotero
Comment=\"Open-source reference manager\"
Exec=/opt/zotero/zotero
Icon=accessories-dictionary
Type=Application
Categories=Office;
StartupNotify=true
Terminal=false
"
            .to_string(),
            packaging_program: "dpkg-deb".to_string(),
        }
    }

    pub fn download_url(&self, arch: Architecture) -> String {
        self.download_url_template
            .replace("{arch}", arch.upstream_key())
    }

    pub fn app_subdir(&self, arch: Architecture) -> String {
        self.app_subdir_template
            .replace("{arch}", arch.upstream_key())
    }

    /// Output file name, `<name>_<version>_<debarch>.deb`.
    pub fn deb_file_name(&self, version: &str, arch: Architecture) -> String {
        format!(
            "{}_{}_{}.deb",
            self.package_name,
            version,
            arch.deb_label()
        )
    }

    /// Renders the Debian control file. This is the single place where the
    /// upstream architecture key is translated to the Debian label.
    pub fn control_file(&self, version: &str, arch: Architecture) -> String {
        format!(
            "Package: {package}\n\
             Version: {version}\n\
             Architecture: {arch}\n\
             Maintainer: {maintainer}\n\
             Section: {section}\n\
             Priority: {priority}\n\
             Homepage: {homepage}\n\
             Description: {summary}\n \
             {body}\n",
            package = self.package_name,
            version = version,
            arch = arch.deb_label(),
            maintainer = self.maintainer,
            section = self.section,
            priority = self.priority,
            homepage = self.homepage,
            summary = self.description_summary,
            body = self.description_body,
        )
    }
}

impl Default for PackageSpec {
    fn default() -> Self {
        Self::zotero()
    }
}
