use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Timestamp and copyright year of this build, read back through env!
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
}
