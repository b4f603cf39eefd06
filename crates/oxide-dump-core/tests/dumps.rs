mod common;

use common::{assert_fixed_point, convert, convert_preset, convert_with};
use oxide_dump_core::{Preset, SequenceBootstrap, SequencePlacement};

const NAVICAT: &str = r"/*
 Navicat Premium Data Transfer

 Source Server         : local
 Source Server Type    : MySQL
 Source Server Version : 80027
 Source Host           : localhost:3306
 Source Schema         : jeecg-boot

 Target Server Type    : MySQL
 Target Server Version : 80027
 File Encoding         : 65001

 Date: 01/03/2024 10:00:00
*/

CREATE database if NOT EXISTS `jeecg-boot` default character set utf8mb4 collate utf8mb4_general_ci;
USE `jeecg-boot`;

SET NAMES utf8mb4;
SET FOREIGN_KEY_CHECKS = 0;

-- ----------------------------
-- Table structure for sys_user
-- ----------------------------
DROP TABLE IF EXISTS `sys_user`;
CREATE TABLE `sys_user`  (
  `id` bigint(20) NOT NULL AUTO_INCREMENT COMMENT '主键id',
  `username` varchar(100) CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NULL DEFAULT NULL COMMENT '登录账号',
  `age` int(11) UNSIGNED NULL DEFAULT NULL,
  `del_flag` tinyint(1) NULL DEFAULT NULL COMMENT '删除状态(0-正常,1-已删除)',
  `create_time` datetime NULL DEFAULT NULL COMMENT '创建时间',
  `update_time` datetime NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
  `remark` longtext CHARACTER SET utf8mb4 COLLATE utf8mb4_general_ci NULL,
  PRIMARY KEY (`id`) USING BTREE,
  INDEX `idx_username`(`username`) USING BTREE
) ENGINE = InnoDB AUTO_INCREMENT = 3 CHARACTER SET = utf8mb4 COLLATE = utf8mb4_general_ci COMMENT = '用户表' ROW_FORMAT = Dynamic;

-- ----------------------------
-- Records of sys_user
-- ----------------------------
INSERT INTO `sys_user` VALUES (1, 'admin', 30, 0, '2024-01-01 00:00:00', NULL, 'int(11) `x` UNSIGNED ENGINE=InnoDB COMMENT \'y\'');

SET FOREIGN_KEY_CHECKS = 1;
";

const NAVICAT_TABLE: &str = "CREATE TABLE sys_user  (
  id BIGINT SERIAL, -- 主键id
  username varchar(100) NULL DEFAULT NULL, -- 登录账号
  age INTEGER NULL DEFAULT NULL,
  del_flag SMALLINT NULL DEFAULT NULL, -- 删除状态(0-正常,1-已删除)
  create_time TIMESTAMP NULL DEFAULT NULL, -- 创建时间
  update_time TIMESTAMP NULL DEFAULT CURRENT_TIMESTAMP,
  remark TEXT NULL,
  PRIMARY KEY (id),
  INDEX idx_username(username)
); -- 用户表";

const MYSQLDUMP: &str = r"-- MySQL dump 10.13  Distrib 8.0.36, for Linux (x86_64)
--
-- Host: localhost    Database: shop
-- ------------------------------------------------------
-- Server version	8.0.36

/*!40101 SET @OLD_CHARACTER_SET_CLIENT=@@CHARACTER_SET_CLIENT */;
/*!40101 SET NAMES utf8mb4 */;

--
-- Table structure for table `orders`
--

DROP TABLE IF EXISTS `orders`;
/*!40101 SET @saved_cs_client     = @@character_set_client */;
/*!50503 SET character_set_client = utf8mb4 */;
CREATE TABLE `orders` (
  `id` int NOT NULL AUTO_INCREMENT,
  `customer` varchar(64) COLLATE utf8mb4_unicode_ci NOT NULL,
  `total` decimal(10,2) unsigned NOT NULL DEFAULT '0.00',
  `note` mediumtext,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB AUTO_INCREMENT=42 DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;
/*!40101 SET character_set_client = @saved_cs_client */;

--
-- Dumping data for table `orders`
--

LOCK TABLES `orders` WRITE;
INSERT INTO `orders` VALUES (1,'O\'Brien',9.99,'line1\nline2');
UNLOCK TABLES;
";

const ORDERS_RESET: &str = "SELECT setval(pg_get_serial_sequence('orders', 'id'), COALESCE(MAX(id), 0) + 1, false) FROM orders;";

#[test]
fn test_navicat_header() {
    let out = convert(NAVICAT);
    assert!(out.contains(" Source Server Type    : PostgreSQL\n"));
    assert!(out.contains(" Source Server Version : 16.0\n"));
    assert!(out.contains(" Source Host           : 127.0.0.1:5432\n"));
    assert!(out.contains(" Target Server Type    : PostgreSQL\n"));
    assert!(out.contains(" Target Server Version : 16.0\n"));
    assert!(out.contains(" Source Schema         : jeecg-boot\n"));
    assert!(!out.contains("MySQL"));
}

#[test]
fn test_navicat_session_statements() {
    let out = convert(NAVICAT);
    assert!(out.contains(
        "-- CREATE DATABASE jeecg-boot WITH ENCODING 'UTF8' LC_COLLATE='en_US.UTF-8' LC_CTYPE='en_US.UTF-8';\n-- USE jeecg-boot;\n"
    ));
    assert!(out.contains("SET client_encoding = 'UTF8';\n-- SET FOREIGN_KEY_CHECKS = 0;\n"));
    assert!(out.ends_with("-- SET FOREIGN_KEY_CHECKS = 1;\n"));
}

#[test]
fn test_navicat_table() {
    let out = convert(NAVICAT);
    assert!(out.contains(NAVICAT_TABLE), "unexpected table:\n{out}");
    assert!(out.contains("DROP TABLE IF EXISTS sys_user;\n"));
}

#[test]
fn test_navicat_rows_untouched() {
    let out = convert(NAVICAT);
    assert!(out.contains(
        r"INSERT INTO sys_user VALUES (1, 'admin', 30, 0, '2024-01-01 00:00:00', NULL, 'int(11) `x` UNSIGNED ENGINE=InnoDB COMMENT \'y\'');"
    ));
}

#[test]
fn test_navicat_is_fixed_point() {
    for preset in [Preset::Simple, Preset::Improved, Preset::Full] {
        assert_fixed_point(&preset.options(), NAVICAT);
    }
}

#[test]
fn test_mysqldump_header_and_conditional_comments() {
    let out = convert(MYSQLDUMP);
    assert!(out.contains("-- Host: 127.0.0.1    Database: shop\n"));
    assert!(out.contains("-- Server version\t16.0\n"));
    assert!(out.contains("/*!40101 SET NAMES utf8mb4 */;\n"));
    assert!(out.contains("-- Table structure for table orders\n"));
}

#[test]
fn test_mysqldump_table() {
    let out = convert(MYSQLDUMP);
    assert!(out.contains(
        "CREATE TABLE orders (
  id int SERIAL,
  customer varchar(64) NOT NULL,
  total decimal(10,2) NOT NULL DEFAULT '0.00',
  note TEXT,
  PRIMARY KEY (id)
);
"
    ));
}

#[test]
fn test_mysqldump_rows_untouched() {
    let out = convert(MYSQLDUMP);
    assert!(out.contains("LOCK TABLES orders WRITE;\n"));
    assert!(out.contains(r"INSERT INTO orders VALUES (1,'O\'Brien',9.99,'line1\nline2');"));
}

#[test]
fn test_mysqldump_full_preset_resets_after_table() {
    let out = convert_preset(Preset::Full, MYSQLDUMP);
    assert!(out.contains(&format!(
        "  PRIMARY KEY (id)\n);\n\n-- Reset sequence\n{ORDERS_RESET}\n/*!40101"
    )));
    assert_eq!(out.matches(ORDERS_RESET).count(), 1);
}

#[test]
fn test_mysqldump_resets_at_end_of_script() {
    let options = Preset::Improved.options().sequence_bootstrap(
        SequenceBootstrap::default().placement(SequencePlacement::EndOfScript),
    );
    let out = convert_with(&options, MYSQLDUMP);
    assert!(out.ends_with(&format!(
        "UNLOCK TABLES;\n\n-- Reset sequences\n{ORDERS_RESET}\n"
    )));
}
