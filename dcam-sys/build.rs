use std::env;
use std::path::{Path, PathBuf};

macro_rules! println_info {
    ($($tokens: tt)*) => {
        println!("cargo:warning=\r\x1b[32;1m   {}", format!($($tokens)*))
    }
}

/// Library subdirectories the DCAM-SDK installers use, most specific first.
const SDK_LIB_SUBDIRS: &[&str] = &["lib/win64", "lib/linux64", "lib"];

fn main() {
    println!("cargo:rerun-if-env-changed=DCAM_SDK_DIR");
    println!("cargo:rerun-if-changed=build.rs");

    // Declarations only: nothing to link.
    if env::var_os("CARGO_FEATURE_NATIVE").is_none() {
        return;
    }

    match resolve_dcam_lib_dir() {
        Some(dir) => {
            println_info!("Linking dcamapi from: {}", dir.display());
            println!("cargo:rustc-link-search=native={}", dir.display());
            println!("cargo:root={}", dir.display());
        }
        None => {
            println_info!("DCAM_SDK_DIR not set or empty; relying on the system linker path for dcamapi");
        }
    }
}

fn resolve_dcam_lib_dir() -> Option<PathBuf> {
    let root = PathBuf::from(env::var_os("DCAM_SDK_DIR")?);
    if !root.is_dir() {
        println_info!("DCAM_SDK_DIR={} is not a directory", root.display());
        return None;
    }

    SDK_LIB_SUBDIRS
        .iter()
        .map(|sub| root.join(sub))
        .find(|dir| contains_dcamapi(dir))
        .or_else(|| contains_dcamapi(&root).then(|| root.clone()))
}

fn contains_dcamapi(dir: &Path) -> bool {
    ["dcamapi.lib", "libdcamapi.so", "libdcamapi.dylib", "libdcamapi.a"]
        .iter()
        .any(|name| dir.join(name).is_file())
}
