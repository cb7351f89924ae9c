use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=DPFP_SDK_DIR");
    println!("cargo:rerun-if-env-changed=DPFP_LIB_DIR");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        // The device client runtime ships for Windows only, nothing to link.
        return;
    }

    if let Some(lib_dir) = lib_dir() {
        println!("cargo:rustc-link-search=native={}", lib_dir.display());
        println!("cargo:lib={}", lib_dir.display());
    }

    println!("cargo:rustc-link-lib=dylib=DPFPApi");
}

fn lib_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var("DPFP_LIB_DIR") {
        return Some(PathBuf::from(dir));
    }

    let sdk_dir = env::var("DPFP_SDK_DIR").ok()?;
    let arch = match env::var("CARGO_CFG_TARGET_ARCH").as_ref().map(String::as_str) {
        Ok("x86") => "x86",
        _ => "x64",
    };
    let mut path = PathBuf::from(sdk_dir);
    path.push("Lib");
    path.push(arch);

    Some(path)
}
