// Exposes the crate version to the binary as SEO_VERSION.
//
// SEO_PATCH_VERSION, when set, takes the place of the patch number so a
// release build can carry its build number (0.1.0 -> 0.1.<build>).

use std::env;

const PATCH_OVERRIDE: &str = "SEO_PATCH_VERSION";

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed={PATCH_OVERRIDE}");

    let package_version = env!("CARGO_PKG_VERSION");
    let Some((major_minor, patch)) = package_version.rsplit_once('.') else {
        panic!("package version '{package_version}' is not major.minor.patch");
    };
    if !major_minor.contains('.') {
        panic!("package version '{package_version}' is not major.minor.patch");
    }

    let patch = env::var(PATCH_OVERRIDE)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| patch.to_string());

    println!("cargo:rustc-env=SEO_VERSION={major_minor}.{patch}");
}
