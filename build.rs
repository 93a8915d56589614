fn main() {
    // Embeds build/git metadata used by the version log at startup
    shadow_rs::ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
