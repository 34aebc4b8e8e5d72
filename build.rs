fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Emits VERGEN_BUILD_TIMESTAMP and VERGEN_RUSTC_SEMVER for the footer.
    vergen::EmitBuilder::builder()
        .build_timestamp()
        .rustc_semver()
        .emit()?;
    Ok(())
}
