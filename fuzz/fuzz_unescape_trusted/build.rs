use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=MARTENJSON_CHECKED");

    if let Ok(checked) = env::var("MARTENJSON_CHECKED") {
        if checked != "0" {
            println!("cargo:rustc-cfg=checked");
        }
    }

    println!("cargo:rerun-if-changed=build.rs")
}
