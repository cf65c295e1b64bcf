// Stamps the binary with a build number: `ADT_BUILD_NUMBER` from the
// environment wins, then the contents of `BUILD_NUMBER`, then "0".
fn main() {
    println!("cargo:rerun-if-env-changed=ADT_BUILD_NUMBER");
    println!("cargo:rerun-if-changed=BUILD_NUMBER");

    let build_number = std::env::var("ADT_BUILD_NUMBER")
        .ok()
        .or_else(|| std::fs::read_to_string("BUILD_NUMBER").ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "0".to_string());

    println!("cargo:rustc-env=BUILD_NUMBER={build_number}");
}
