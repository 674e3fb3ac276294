//! Build script for chart-crop-production.
//!
//! Copies the crop production CSV to OUT_DIR so it can be embedded via
//! `include_str!` at compile time. A missing fixture becomes an empty
//! placeholder; the app then fails its startup load and shows the error.

use std::env;
use std::fs;
use std::path::Path;

use crop_data::record::CROP_CSV_FILE;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");

    let src_path = format!("../fixtures/{}", CROP_CSV_FILE);
    let src = Path::new(&src_path);
    let dest = Path::new(&out_dir).join(CROP_CSV_FILE);
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else {
        fs::write(&dest, "").expect("failed to write placeholder csv");
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder",
            src_path
        );
    }

    println!("cargo:rerun-if-changed={}", src_path);
    println!("cargo:rerun-if-changed=build.rs");
}
