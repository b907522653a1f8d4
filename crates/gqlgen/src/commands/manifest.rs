use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use serde::Serialize;

const PGP_PUBLIC_KEY_HEADER: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----";
const PGP_VERSION_LINE: &str = "Version: GnuPG v1";

#[derive(Debug, clap::Args)]
pub(crate) struct ManifestCmd {
    #[arg(help="Operating systems to publish artifacts for.", long, required=true, value_delimiter=',')]
    os: Vec<String>,

    #[arg(help="Architectures to publish artifacts for.", long, required=true, value_delimiter=',')]
    arch: Vec<String>,

    #[arg(help="GPG public key in ASCII armor format.", long, default_value="")]
    ascii_armor: String,

    #[arg(help="Download URL under which release artifacts are published.", long)]
    base_url: String,

    #[arg(help="GPG key ID.", long, default_value="")]
    key_id: String,

    #[arg(
        help="Plugin protocol versions supported by the release.",
        long,
        required=true,
        value_delimiter=',',
    )]
    protocols: Vec<String>,

    #[arg(help="Name of the provider.", long)]
    provider_name: String,

    #[arg(help="Version of the provider release.", long="version")]
    release_version: String,

    #[arg(help="Source of the GPG key.", long, default_value="")]
    source: String,

    #[arg(help="Source URL of the GPG key.", long, default_value="")]
    source_url: String,
}

#[inherent::inherent]
impl RunnableCommand for ManifestCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let manifest = self.build_manifest();
        log::debug!(
            "Generated manifest with {} platforms.",
            manifest.versions.iter().map(|v| v.platforms.len()).sum::<usize>(),
        );

        match serde_json::to_string_pretty(&manifest) {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to serialize manifest: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
impl ManifestCmd {
    pub(crate) fn build_manifest(&self) -> RegistryManifest {
        let signing_keys = SigningKeys {
            gpg_public_keys: vec![GpgPublicKey {
                ascii_armor: annotate_ascii_armor(&self.ascii_armor),
                key_id: self.key_id.to_owned(),
                source: self.source.to_owned(),
                source_url: self.source_url.to_owned(),
                trust_signature: String::new(),
            }],
        };

        let release_prefix = format!(
            "{}/{}/{}_{}",
            self.base_url,
            self.release_version,
            self.provider_name,
            self.release_version,
        );

        let platforms =
            platforms(&self.os, &self.arch)
                .into_iter()
                .map(|(os, arch)| {
                    let filename = format!(
                        "{}_{}_{os}_{arch}.zip",
                        self.provider_name,
                        self.release_version,
                    );
                    PlatformArtifact {
                        download_url: format!(
                            "{}/{}/{filename}",
                            self.base_url,
                            self.release_version,
                        ),
                        filename,
                        shasum: String::new(),
                        shasums_signature_url: format!("{release_prefix}_SHA256SUMS.sig"),
                        shasums_url: format!("{release_prefix}_SHA256SUMS"),
                        signing_keys: signing_keys.clone(),
                        os,
                        arch,
                    }
                })
                .collect();

        RegistryManifest {
            versions: vec![ReleaseVersion {
                platforms,
                protocols: self.protocols.to_owned(),
                version: self.release_version.to_owned(),
            }],
        }
    }
}

/// Every `(os, arch)` combination that gets a release artifact, in
/// `os`-major order. Darwin has no 32-bit builds.
pub(crate) fn platforms(os_list: &[String], arch_list: &[String]) -> Vec<(String, String)> {
    os_list.iter()
        .flat_map(|os| arch_list.iter().map(move |arch| (os, arch)))
        .filter(|(os, arch)| !(*os == "darwin" && matches!(arch.as_str(), "386" | "arm")))
        .map(|(os, arch)| (os.to_owned(), arch.to_owned()))
        .collect()
}

/// Registries expect a version line right after the armor header.
pub(crate) fn annotate_ascii_armor(ascii_armor: &str) -> String {
    ascii_armor.replace(
        PGP_PUBLIC_KEY_HEADER,
        &format!("{PGP_PUBLIC_KEY_HEADER}\n{PGP_VERSION_LINE}"),
    )
}

#[derive(Debug, Serialize)]
pub(crate) struct RegistryManifest {
    pub versions: Vec<ReleaseVersion>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReleaseVersion {
    pub version: String,
    pub protocols: Vec<String>,
    pub platforms: Vec<PlatformArtifact>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PlatformArtifact {
    pub os: String,
    pub arch: String,
    pub filename: String,
    pub download_url: String,
    pub shasums_url: String,
    pub shasums_signature_url: String,
    pub shasum: String,
    pub signing_keys: SigningKeys,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct SigningKeys {
    pub gpg_public_keys: Vec<GpgPublicKey>,
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct GpgPublicKey {
    pub key_id: String,
    pub ascii_armor: String,
    pub trust_signature: String,
    pub source: String,
    pub source_url: String,
}
