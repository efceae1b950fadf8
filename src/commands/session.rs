// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth;
use crate::store;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let user = m.get_one::<String>("user").unwrap();
    let password = m.get_one::<String>("password").unwrap();
    let path = match m.get_one::<String>("file") {
        Some(p) => PathBuf::from(p),
        None => store::data_dir()?.join(auth::CREDENTIALS_FILE),
    };
    auth::login(&path, user, password)
        .with_context(|| format!("Login failed for '{}'", user))?;
    println!("Logged in as {}", user);
    Ok(())
}
