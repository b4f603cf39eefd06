#![allow(dead_code)]

use oxide_dump_core::{Preset, RewriteOptions, Rewriter};

pub fn convert(sql: &str) -> String {
    convert_with(&RewriteOptions::default(), sql)
}

pub fn convert_with(options: &RewriteOptions, sql: &str) -> String {
    Rewriter::new(options)
        .unwrap_or_else(|e| panic!("Failed to build pipeline: {e}"))
        .rewrite(sql)
}

pub fn convert_preset(preset: Preset, sql: &str) -> String {
    convert_with(&preset.options(), sql)
}

/// Verifies that converting the converted output changes nothing.
pub fn assert_fixed_point(options: &RewriteOptions, sql: &str) {
    let once = convert_with(options, sql);
    let twice = convert_with(options, &once);
    assert_eq!(
        once, twice,
        "Not idempotent.\n  Input:  {sql}\n  First:  {once}\n  Second: {twice}"
    );
}
