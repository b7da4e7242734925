use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Local development key, only used when `ADMIN_PUBKEY` is not provided.
const DEV_ADMIN_PUBKEY: &str = "3AdmnDvKy7pQr2sTuVwXz9bCdEfGhJk4LmNoPqRs5TuV";

fn workspace_env_file() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR is set by cargo");

    Path::new(&manifest_dir)
        .parent()
        .expect("shared lives inside the workspace")
        .join(".env")
}

fn main() {
    let env_file = workspace_env_file();
    dotenv::from_path(&env_file).ok();

    let admin_pubkey = env::var("ADMIN_PUBKEY").unwrap_or_else(|_| DEV_ADMIN_PUBKEY.to_string());

    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(
        Path::new(&out_dir).join("config.rs"),
        format!("pub const ADMIN: Pubkey = pubkey!(\"{admin_pubkey}\");"),
    )
    .expect("Failed to write the generated admin key");

    println!("cargo:rerun-if-env-changed=ADMIN_PUBKEY");
    println!("cargo:rerun-if-changed={}", env_file.display());
}
