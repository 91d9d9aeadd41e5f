use std::path::{Path, PathBuf};
use std::process::Command;

fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("icon-gen-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_in(dir: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_icon-gen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_writes_all_icons_into_public() {
    let dir = workdir("ok");
    std::fs::create_dir(dir.join("public")).unwrap();

    let out = run_in(&dir);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for name in ["icon-192x192.png", "icon-512x512.png", "icon-maskable.png"] {
        assert!(dir.join("public").join(name).is_file(), "{name} missing");
        assert!(stdout.contains(&format!("Created {name}")));
    }
    assert!(stdout.contains("All icons created successfully"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_fails_without_public_dir() {
    let dir = workdir("nopublic");

    let out = run_in(&dir);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("icon-192x192.png"), "stderr: {stderr}");
    assert!(!dir.join("public").exists());
    std::fs::remove_dir_all(&dir).unwrap();
}
