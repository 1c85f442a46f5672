fn main() {
    // Stamped into the footer copyright year
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    // Contact settings are read with option_env! in src/config.rs
    println!("cargo:rerun-if-env-changed=CONTACT_ENDPOINT");
    println!("cargo:rerun-if-env-changed=CONTACT_TEST_MODE");
    println!("cargo:rerun-if-changed=build.rs");
}
