#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const KEY: &[u8] = include_bytes!("../fixtures/key_pub.pem");
pub const KEY_PKCS1: &[u8] = include_bytes!("../fixtures/key_pub_pkcs1.pem");
pub const OTHER_KEY: &[u8] = include_bytes!("../fixtures/other_pub.pem");

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bin")
}

/// Scratch copy of the signed fixture binaries so tests can tamper freely.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let src = fixture_dir();
        std::fs::create_dir_all(dir.path().join("signatures")).expect("mkdir signatures");
        for name in ["payload.bin", "tool", "empty.bin"] {
            std::fs::copy(src.join(name), dir.path().join(name)).expect("copy fixture");
        }
        for name in ["payload.sig", "tool.sig", "empty.sig"] {
            std::fs::copy(
                src.join("signatures").join(name),
                dir.path().join("signatures").join(name),
            )
            .expect("copy signature");
        }
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn sig_path(&self, stem: &str) -> PathBuf {
        self.dir.path().join("signatures").join(format!("{stem}.sig"))
    }

    pub fn read(&self, path: &Path) -> Vec<u8> {
        std::fs::read(path).expect("read fixture")
    }

    pub fn write(&self, path: &Path, data: &[u8]) {
        std::fs::write(path, data).expect("write fixture");
    }
}

pub fn flip_bit(data: &mut [u8], bit: usize) {
    data[bit / 8] ^= 1 << (bit % 8);
}
