// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod store;
pub mod models;
pub mod utils;
pub mod analytics;
pub mod auth;
pub mod tools;
pub mod commands;
