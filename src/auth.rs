// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Flat-file credential check. Plaintext comparison, a thin stand-in for a
//! real auth service; nothing else in the crate depends on it.

use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CREDENTIALS_FILE: &str = "credentials.csv";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid username or password")]
    BadCredentials,
}

/// One `username,password` pair per line; blank lines and `#` comments are
/// skipped. Returns `BadCredentials` when no line matches.
pub fn login(credentials: &Path, username: &str, password: &str) -> Result<(), AuthError> {
    let text = fs::read_to_string(credentials)?;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((user, pass)) = line.split_once(',') {
            if user == username && pass == password {
                return Ok(());
            }
        }
    }
    Err(AuthError::BadCredentials)
}
