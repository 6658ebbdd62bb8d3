use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Askama reads templates at compile time; cargo does not track them on its own.
    // A directory path is watched recursively.
    println!("cargo:rerun-if-changed=templates");

    // Shown as an HTML comment on the page so a stale binary is easy to spot.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ROSTER_BUILD_ID={}", build_id);
}
