use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();

    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // Footer copyright year
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // The API override is read with option_env!, so a change must rebuild
    println!("cargo:rerun-if-env-changed=PORTFOLIO_API_URL");
    println!("cargo:rerun-if-changed=build.rs");
}
