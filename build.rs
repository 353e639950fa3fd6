include!("build/config.rs");

use self::config::Cfgs;

fn main() {
    Cfgs::new().apply()
}
