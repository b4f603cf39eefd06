#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const DUMP: &str = "SET NAMES utf8mb4;\n\nCREATE TABLE `t` (\n  `id` int(11) NOT NULL AUTO_INCREMENT,\n  `name` varchar(50) COMMENT 'name'\n) ENGINE=InnoDB;\n\nINSERT INTO `t` VALUES (1, 'int(11)');\n";

/// A scratch directory holding one input dump.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub output: PathBuf,
}

pub fn workspace(dump: &str) -> Workspace {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("mysql.sql");
    let output = dir.path().join("postgres.sql");
    fs::write(&input, dump).expect("Failed to write input");
    Workspace { dir, input, output }
}

pub fn read(path: &PathBuf) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
