use glib_build_tools::compile_resources;

fn main() {
    let version = env!("CARGO_PKG_VERSION").to_string();
    println!("cargo:rustc-env=APP_VERSION={}", version);

    compile_resources(
        &["resources"],
        "resources/resources.xml",
        "pairhunt.gresource",
    );

    println!("cargo:rerun-if-changed=resources");
    println!("cargo:rerun-if-changed=locales");
}
