//! Build configuration for the raw word-copy path.
//!
//! The word-aligned copier issues unaligned word loads and stores, so it is
//! only compiled for architectures known to tolerate unaligned access. The
//! `raw-copy` cargo feature opts into the path; this script decides whether
//! the target can actually have it and emits the `bufcopy_word_copy` cfg.
//! Targets without it silently use the portable element/block ladder.

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo::rustc-check-cfg=cfg(bufcopy_word_copy)");

    if env::var_os("CARGO_FEATURE_RAW_COPY").is_none() {
        return;
    }

    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    match target_arch.as_str() {
        // Mainstream architectures with hardware support for unaligned
        // word access.
        "x86" | "x86_64" | "aarch64" => {
            println!("cargo:rustc-cfg=bufcopy_word_copy");
        }
        other => {
            println!(
                "cargo:warning=raw word copy not available for target architecture: {}; \
                 falling back to block copy",
                other
            );
        }
    }
}
