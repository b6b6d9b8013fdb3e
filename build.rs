use std::error::Error;

/// Stamps the build time so requests can identify the client build.
fn main() -> Result<(), Box<dyn Error>> {
    // Set build timestamp in milliseconds since epoch
    let build_timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_millis()
        .to_string();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
