use std::env;
use std::fs;
use std::path::Path;

// Expone las variables de un .env local como rustc-env para que config.rs
// pueda leerlas con option_env! en tiempo de compilación.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No hay .env, se usan los valores por defecto (ver .env.example)");
        return;
    }

    let contents = match fs::read_to_string(env_file) {
        Ok(c) => c,
        Err(_) => return,
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let (key, value) = (key.trim(), value.trim());
            // Las variables ya presentes en el entorno ganan sobre el .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
