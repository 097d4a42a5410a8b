use clap::Parser;

use taklifnoma_cli::commands::{Command, slug_arg};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[test]
fn generated_slugs_are_accepted() {
    assert_eq!(
        slug_arg("jahongir-sarvinoz-3f9a1c").as_deref(),
        Ok("jahongir-sarvinoz-3f9a1c")
    );
}

#[test]
fn path_like_slugs_are_rejected() {
    for bad in ["", "../etc", "Jahongir", "a--b", "-abc", "abc/def"] {
        assert!(slug_arg(bad).is_err(), "{bad:?} should be rejected");
    }
}

#[test]
fn show_rejects_malformed_slug_at_parse_time() {
    let err = Cli::try_parse_from(["taklifnoma", "show", "../secret"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

    let ok = Cli::try_parse_from(["taklifnoma", "show", "jahongir-sarvinoz-3f9a1c"]).unwrap();
    assert!(matches!(ok.command, Command::Show { slug, .. } if slug == "jahongir-sarvinoz-3f9a1c"));
}

#[test]
fn rsvp_rejects_malformed_slug_at_parse_time() {
    let result = Cli::try_parse_from([
        "taklifnoma",
        "rsvp",
        "Bad Slug",
        "--name",
        "Dilnoza",
        "--attending",
    ]);
    assert!(result.is_err());
}
