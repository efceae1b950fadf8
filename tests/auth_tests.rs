// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlens::auth::{self, AuthError};

fn creds_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(auth::CREDENTIALS_FILE);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn matching_pair_logs_in() {
    let (_dir, path) = creds_file("alice,hunter2\nbob,swordfish\n");
    assert!(auth::login(&path, "bob", "swordfish").is_ok());
}

#[test]
fn wrong_password_is_rejected() {
    let (_dir, path) = creds_file("alice,hunter2\n");
    assert!(matches!(
        auth::login(&path, "alice", "wrong"),
        Err(AuthError::BadCredentials)
    ));
}

#[test]
fn unknown_user_is_rejected() {
    let (_dir, path) = creds_file("alice,hunter2\n");
    assert!(matches!(
        auth::login(&path, "mallory", "hunter2"),
        Err(AuthError::BadCredentials)
    ));
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let (_dir, path) = creds_file("# staff accounts\n\nalice,hunter2\n");
    assert!(auth::login(&path, "alice", "hunter2").is_ok());
    assert!(matches!(
        auth::login(&path, "# staff accounts", ""),
        Err(AuthError::BadCredentials)
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    assert!(matches!(
        auth::login(&path, "alice", "hunter2"),
        Err(AuthError::Io(_))
    ));
}
