// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

mod handler_cache;

pub use handler_cache::*;
