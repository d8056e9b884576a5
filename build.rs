use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded from `.env` to `option_env!` in `src/config.rs`.
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "REDIRECT_DELAY_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found, using built-in defaults (see .env.example)");
        return;
    }

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env exists but could not be read");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown .env key {}", key);
            continue;
        }

        // The real environment wins over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
