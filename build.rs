//! Bake `COLUMBUS_*` settings from `.env` into the WASM bundle.
//!
//! The browser has no process environment, so configuration is read at build
//! time. Values already present in the build environment win over `.env`.

use std::env;

const FORWARDED_KEYS: [&str; 2] = ["COLUMBUS_API_BASE_URL", "COLUMBUS_LOG_LEVEL"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let Ok(entries) = dotenvy::from_filename_iter(".env") else {
        return;
    };
    for entry in entries {
        let (key, value) = match entry {
            Ok(pair) => pair,
            Err(e) => {
                println!("cargo:warning=skipping malformed .env line: {e}");
                continue;
            }
        };
        if FORWARDED_KEYS.contains(&key.as_str()) && env::var_os(&key).is_none() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
