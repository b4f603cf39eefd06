mod common;

use common::{assert_fixed_point, convert, convert_preset};
use oxide_dump_core::stages;
use oxide_dump_core::{PostgresDialect, Preset, RewriteOptions, Stage};
use std::sync::Arc;

#[test]
fn test_plain_sql_is_unchanged() {
    let sql = "-- nightly report\nSELECT id, name FROM users WHERE id = 1;\n\nDROP TABLE old_users;\n";
    assert_eq!(convert(sql), sql);
}

#[test]
fn test_integer_widths_are_discarded() {
    assert_eq!(
        convert("CREATE TABLE t (a int(11), b bigint(20), c tinyint(1));"),
        "CREATE TABLE t (a INTEGER, b BIGINT, c SMALLINT);"
    );
}

#[test]
fn test_backticks_are_stripped() {
    assert_eq!(convert("`users`"), "users");
    assert_eq!(
        convert("DROP TABLE IF EXISTS `order items`;"),
        "DROP TABLE IF EXISTS order items;"
    );
}

#[test]
fn test_auto_increment_becomes_serial() {
    assert_eq!(
        convert("CREATE TABLE t (id INTEGER NOT NULL AUTO_INCREMENT);"),
        "CREATE TABLE t (id INTEGER SERIAL);"
    );
}

#[test]
fn test_bare_comment_annotation() {
    assert_eq!(convert("COMMENT 'user id'"), "-- user id");
}

#[test]
fn test_full_table_definition() {
    let sql = "CREATE TABLE `t` (`id` int(11) NOT NULL AUTO_INCREMENT, `name` varchar(50) COMMENT 'name') ENGINE=InnoDB;";
    let out = convert(sql);
    assert_eq!(
        out,
        "CREATE TABLE t (id INTEGER SERIAL, name varchar(50) -- name\n);"
    );
    assert!(!out.contains('`'));
    assert!(!out.contains("ENGINE"));
    assert!(out.ends_with(");"));
}

#[test]
fn test_blank_lines_collapse() {
    assert_eq!(
        convert("DROP TABLE a;\n\n\n\nDROP TABLE b;\n"),
        "DROP TABLE a;\n\nDROP TABLE b;\n"
    );
}

#[test]
fn test_insert_literals_are_never_rewritten() {
    let sql = "INSERT INTO t VALUES ('int(11)', '`x`', 'a\n\n\n\nb', 'NOT NULL AUTO_INCREMENT');";
    assert_eq!(
        convert(sql),
        sql,
        "row data must survive the pipeline untouched"
    );
}

#[test]
fn test_unsigned_in_data_is_preserved() {
    let sql = "INSERT INTO words VALUES (1, UNSIGNED, 'UNSIGNED');";
    assert_eq!(convert(sql), sql);
}

#[test]
fn test_double_dash_arithmetic_does_not_hide_statements() {
    assert_eq!(
        convert("UPDATE t SET n=n--1 WHERE id=`x`;\nCREATE TABLE `y` (`a` int(11));"),
        "UPDATE t SET n=n--1 WHERE id=x;\nCREATE TABLE y (a INTEGER);"
    );
}

#[test]
fn test_set_character_set_becomes_client_encoding() {
    assert_eq!(
        convert("SET CHARACTER SET utf8mb4;\nCREATE TABLE t (a varchar(10) CHARACTER SET utf8mb4);\n"),
        "SET client_encoding = 'UTF8';\nCREATE TABLE t (a varchar(10));\n"
    );
}

#[test]
fn test_default_pipeline_is_idempotent() {
    let sql = "CREATE TABLE `t` (\n  `id` bigint(20) UNSIGNED NOT NULL AUTO_INCREMENT COMMENT 'key',\n  `body` longtext CHARACTER SET utf8mb4 NULL,\n  PRIMARY KEY (`id`) USING BTREE\n) ENGINE = InnoDB AUTO_INCREMENT = 7 COMMENT = 'posts';\n\n\n\nINSERT INTO `t` VALUES (1, 'x');\n";
    for preset in [Preset::Simple, Preset::Improved, Preset::Full] {
        assert_fixed_point(&preset.options(), sql);
    }
}

#[test]
fn test_each_stage_is_idempotent_on_its_own_output() {
    let sql = "/*\n Source Server Type    : MySQL\n Source Host           : db:3306\n*/\n\nSET NAMES utf8mb4;\nCREATE TABLE `t` (`id` int(11) NOT NULL AUTO_INCREMENT COMMENT 'k',\n) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 ;\n\n\n\n";
    let stages = stages::standard(Arc::new(PostgresDialect::new()), &Preset::Full.options()).unwrap();
    for stage in &stages {
        let once = stage.apply(sql).into_owned();
        let twice = stage.apply(&once).into_owned();
        assert_eq!(once, twice, "stage {} is not idempotent", stage.name());
    }
}

#[test]
fn test_simple_preset_leaves_dangling_comma() {
    let sql = "CREATE TABLE t (\n  a INTEGER,\n  KEY k (a) USING HASH,\n) ;";
    assert_eq!(
        convert_preset(Preset::Simple, sql),
        "CREATE TABLE t (\n  a INTEGER,\n  KEY k (a),\n) ;"
    );
    assert_eq!(
        convert_preset(Preset::Improved, sql),
        "CREATE TABLE t (\n  a INTEGER,\n  KEY k (a)\n);"
    );
}

#[test]
fn test_full_preset_resets_sequences() {
    let out = convert_preset(
        Preset::Full,
        "CREATE TABLE `sys_role` (`id` int(11) NOT NULL AUTO_INCREMENT);",
    );
    assert_eq!(
        out,
        "CREATE TABLE sys_role (id INTEGER SERIAL);\n\n-- Reset sequence\n\
         SELECT setval(pg_get_serial_sequence('sys_role', 'id'), COALESCE(MAX(id), 0) + 1, false) FROM sys_role;"
    );
}

#[test]
fn test_default_options_match_improved_preset() {
    let sql = "CREATE TABLE t (a INTEGER,\n);";
    assert_eq!(
        convert(sql),
        convert_preset(Preset::Improved, sql)
    );
    assert_eq!(RewriteOptions::default(), Preset::Improved.options());
}
