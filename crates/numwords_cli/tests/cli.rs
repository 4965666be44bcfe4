//! Tests for the `numwords` command-line interface.

use std::process::Command;

use insta_cmd::{assert_cmd_snapshot, get_cargo_bin};

const BIN_NAME: &str = "numwords";

fn numwords() -> Command {
    Command::new(get_cargo_bin(BIN_NAME))
}

#[test]
fn version() {
    assert_cmd_snapshot!(numwords().arg("--version"), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    numwords 0.1.0

    ----- stderr -----
    "###);
}

#[test]
fn spells_out_arguments_in_order() {
    assert_cmd_snapshot!(numwords().args(["2.345", "-0.0", "0.0", "0.1"]), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    Two point three four five
    Minus zero
    Zero
    Zero point one

    ----- stderr -----
    "###);
}

#[test]
fn special_values() {
    assert_cmd_snapshot!(numwords().args(["--", "NaN", "inf", "-inf"]), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    Not a Number
    Positive Infinity
    Negative Infinity

    ----- stderr -----
    "###);
}

#[test]
fn reads_stdin_when_no_arguments() {
    assert_cmd_snapshot!(numwords().pass_stdin("1e16 0.1\n-2.5\n"), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    One E plus one six
    Zero point one
    Minus two point five

    ----- stderr -----
    "###);
}

#[test]
fn empty_input_fails_fast() {
    assert_cmd_snapshot!(numwords().pass_stdin(""), @r###"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    numwords failed
      Cause: input sequence is empty
    "###);
}

#[test]
fn malformed_token_prints_nothing() {
    assert_cmd_snapshot!(numwords().pass_stdin("1.5 pear 2.5"), @r###"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    numwords failed
      Cause: invalid number: `pear`
      Cause: invalid float literal
    "###);
}
