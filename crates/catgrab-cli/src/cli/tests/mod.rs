//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn fetch_defaults() {
    let cmd = parse(&["catgrab", "fetch", "http://shop.example/catalog/"]);
    match cmd {
        CliCommand::Fetch {
            url,
            workers,
            images_dir,
        } => {
            assert_eq!(url, "http://shop.example/catalog/");
            assert!(workers.is_none());
            assert!(images_dir.is_none());
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn fetch_with_overrides() {
    let cmd = parse(&[
        "catgrab",
        "fetch",
        "http://shop.example/catalog/",
        "--workers",
        "10",
        "--images-dir",
        "product-images",
    ]);
    match cmd {
        CliCommand::Fetch {
            workers,
            images_dir,
            ..
        } => {
            assert_eq!(workers, Some(10));
            assert_eq!(images_dir.as_deref(), Some(std::path::Path::new("product-images")));
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn stats_takes_a_url() {
    let cmd = parse(&["catgrab", "stats", "http://shop.example/catalog/"]);
    match cmd {
        CliCommand::Stats { url } => assert_eq!(url, "http://shop.example/catalog/"),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn missing_url_is_an_error() {
    assert!(Cli::try_parse_from(["catgrab", "fetch"]).is_err());
}
