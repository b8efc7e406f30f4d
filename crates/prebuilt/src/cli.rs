use std::path::PathBuf;

use clap::Parser;
use prebuilt_install::Settings;
use prebuilt_install::config::{DEFAULT_HOST_VAR, DEFAULT_MANIFEST};

#[derive(Clone, Debug, Parser)]
#[command(name = "install-prebuilt", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    #[arg(long, help = "Where the native artifact is installed")]
    pub artifact: Option<PathBuf>,

    #[arg(long, default_value = "", help = "Prepended to the asset file name")]
    pub prefix: String,

    #[arg(long, default_value = "", help = "Appended to the asset file name")]
    pub suffix: String,

    #[arg(long, help = "Release host, overriding the mirror variable")]
    pub host: Option<String>,

    #[arg(long, default_value = DEFAULT_HOST_VAR, help = "Environment variable holding a mirror host")]
    pub host_var: String,

    #[arg(long, default_value = DEFAULT_MANIFEST, help = "Package manifest, relative to the working directory")]
    pub manifest: PathBuf,

    #[arg(long, help = "Native ABI version, instead of asking node")]
    pub abi: Option<String>,

    #[arg(long, help = "Architecture name used in the asset file name")]
    pub arch: Option<String>,

    #[arg(short, long, help = "Show verification output and debug logs")]
    pub verbose: bool,
}

impl App {
    pub fn into_settings(self, working_dir: PathBuf) -> Settings {
        Settings {
            artifact: self.artifact,
            prefix: self.prefix,
            suffix: self.suffix,
            host: self.host,
            host_var: self.host_var,
            manifest: self.manifest,
            abi: self.abi,
            arch: self.arch,
            verbose: self.verbose,
            working_dir,
        }
    }
}
