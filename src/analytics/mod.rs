// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation core: pure, synchronous transformations over record slices.
//! Callers filter first, then hand the narrowed set to the summarizers and
//! builders; nothing in here touches storage.

pub mod filter;
pub mod summary;
pub mod balance;
pub mod breakdown;
pub mod trends;
pub mod monthly;

pub use balance::BalanceSummary;
pub use breakdown::CategorySpend;
pub use monthly::{CategoryAmount, MonthlyBreakdown};
pub use summary::{GroupTotal, Summary};
pub use trends::TrendPoint;
