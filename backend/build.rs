use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = include_str!("static/placeholder.html");

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");
    let embedded_dir = out_dir.join("dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(&embedded_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
            .unwrap();
    } else if !embedded_dir.join("index.html").exists() {
        // include_dir! needs static/dist to exist even without a frontend build
        fs::create_dir_all(&embedded_dir).unwrap();
        fs::write(embedded_dir.join("index.html"), PLACEHOLDER).unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
