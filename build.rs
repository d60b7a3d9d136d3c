//! Retrieves information about the version of the crate from Git and the build
//! environment. This information is then written to a file in the output
//! directory and can be accessed at runtime by the binary.

use std::path::Path;
use std::{env, fs};

fn generate_file(filename: &str, contents: &str) {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join(filename);
    fs::write(dest_path, contents).unwrap();
}

fn generate_build_info() {
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    generate_file("target", &target);
}

fn main() -> shadow_rs::SdResult<()> {
    generate_build_info();
    shadow_rs::new()
}
