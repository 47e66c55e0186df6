fn main() {
    // Stamped into the page footer as the "last built" time
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Project cards are embedded from here
    println!("cargo:rerun-if-changed=projects");
    println!("cargo:rerun-if-changed=build.rs");
}
