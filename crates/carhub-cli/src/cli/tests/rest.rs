//! Tests for image, set-param, delete-param, mock.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_image_without_angle() {
    match parse(&[
        "carhub", "image", "--make", "BMW", "--model", "3 Series", "--year", "2022",
    ]) {
        CliCommand::Image {
            make,
            model,
            year,
            angle,
        } => {
            assert_eq!(make, "BMW");
            assert_eq!(model, "3 Series");
            assert_eq!(year, 2022);
            assert!(angle.is_none());
        }
        _ => panic!("expected Image"),
    }
}

#[test]
fn cli_parse_image_with_angle() {
    match parse(&[
        "carhub", "image", "--make", "Audi", "--model", "a4", "--year", "2020", "--angle", "29",
    ]) {
        CliCommand::Image { angle, .. } => assert_eq!(angle.as_deref(), Some("29")),
        _ => panic!("expected Image"),
    }
}

#[test]
fn cli_parse_set_param() {
    match parse(&["carhub", "set-param", "/?fuel=gas", "year", "2022"]) {
        CliCommand::SetParam {
            location,
            key,
            value,
        } => {
            assert_eq!(location, "/?fuel=gas");
            assert_eq!(key, "year");
            assert_eq!(value, "2022");
        }
        _ => panic!("expected SetParam"),
    }
}

#[test]
fn cli_parse_delete_param() {
    match parse(&["carhub", "delete-param", "/?fuel=gas&year=2022", "Fuel"]) {
        CliCommand::DeleteParam { location, key } => {
            assert_eq!(location, "/?fuel=gas&year=2022");
            assert_eq!(key, "Fuel");
        }
        _ => panic!("expected DeleteParam"),
    }
}

#[test]
fn cli_parse_mock() {
    match parse(&["carhub", "mock"]) {
        CliCommand::Mock { json } => assert!(!json),
        _ => panic!("expected Mock"),
    }
    match parse(&["carhub", "mock", "--json"]) {
        CliCommand::Mock { json } => assert!(json),
        _ => panic!("expected Mock --json"),
    }
}
