use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Dependency versions live in the workspace root Cargo.toml; surface them
    // as env!() variables for the startup banner.
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_toml_path = Path::new(&manifest_dir)
        .join("..")
        .join("..")
        .join("Cargo.toml");
    let workspace_toml = fs::read_to_string(workspace_toml_path).unwrap_or_default();

    let mut egui_version = "unknown";
    let mut egui_dock_version = "unknown";
    let mut nalgebra_version = "unknown";

    for line in workspace_toml.lines() {
        let line = line.trim();
        if line.starts_with("egui = ") {
            egui_version = line.split('"').nth(1).unwrap_or("unknown");
        } else if line.starts_with("egui_dock = ") {
            // Handle the table format: egui_dock = { version = "0.17.0", ... }
            if let Some(version_part) = line.split("version = ").nth(1) {
                egui_dock_version = version_part.split('"').nth(1).unwrap_or("unknown");
            }
        } else if line.starts_with("nalgebra = ") {
            nalgebra_version = line.split('"').nth(1).unwrap_or("unknown");
        }
    }

    println!("cargo:rustc-env=EGUI_VERSION={}", egui_version);
    println!("cargo:rustc-env=EGUI_DOCK_VERSION={}", egui_dock_version);
    println!("cargo:rustc-env=NALGEBRA_VERSION={}", nalgebra_version);
}
