use chrono::{Datelike, Utc};

fn main() {
    let today = Utc::now();
    println!("cargo:rustc-env=ASTRA_BUILD_YEAR={}", today.year());
    println!("cargo:rustc-env=ASTRA_BUILD_MONTH={}", today.month());
    println!("cargo:rustc-env=ASTRA_BUILD_DAY={}", today.day());
    println!("cargo:rerun-if-changed=build.rs");
}
