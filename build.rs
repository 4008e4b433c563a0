fn main() {
    // Stamp the build time for `seatkit version`
    let built_at = chrono::Utc::now()
        .format("%Y-%m-%d %H:%M UTC")
        .to_string();
    println!("cargo:rustc-env=BUILD_DATE={built_at}");
    println!("cargo:rerun-if-changed=build.rs");
}
