//! Tests for encode, decode, hash, clean and completions.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_encode_repeated_flags() {
    match parse(&[
        "taglink",
        "encode",
        "--tag",
        "rust",
        "--tag",
        "cli",
        "--domain",
        "example.com",
        "--keyword",
        "async io",
    ]) {
        CliCommand::Encode {
            tags,
            domains,
            keyword,
        } => {
            assert_eq!(tags, vec!["rust", "cli"]);
            assert_eq!(domains, vec!["example.com"]);
            assert_eq!(keyword, "async io");
        }
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_encode_defaults() {
    match parse(&["taglink", "encode"]) {
        CliCommand::Encode {
            tags,
            domains,
            keyword,
        } => {
            assert!(tags.is_empty());
            assert!(domains.is_empty());
            assert_eq!(keyword, "");
        }
        _ => panic!("expected Encode"),
    }
}

#[test]
fn cli_parse_decode() {
    match parse(&["taglink", "decode", "tag1%2Ctag2/example.com/kw"]) {
        CliCommand::Decode { segment, json } => {
            assert_eq!(segment, "tag1%2Ctag2/example.com/kw");
            assert!(!json);
        }
        _ => panic!("expected Decode"),
    }
}

#[test]
fn cli_parse_decode_json() {
    match parse(&["taglink", "decode", "a", "--json"]) {
        CliCommand::Decode { json, .. } => assert!(json),
        _ => panic!("expected Decode with --json"),
    }
}

#[test]
fn cli_parse_hash() {
    match parse(&["taglink", "hash", "#a/b.com#c"]) {
        CliCommand::Hash { hash } => assert_eq!(hash, "#a/b.com#c"),
        _ => panic!("expected Hash"),
    }
}

#[test]
fn cli_parse_clean() {
    match parse(&["taglink", "clean", "a,b/  /"]) {
        CliCommand::Clean { text } => assert_eq!(text, "a,b/  /"),
        _ => panic!("expected Clean"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["taglink", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}
