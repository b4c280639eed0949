// SPDX-License-Identifier: GPL-3.0-or-later

#![warn(missing_docs)]

mod descriptor;
mod fingerprint;
mod handler;
mod invocable;
pub(crate) mod path;
mod shape;
mod token;
mod type_identity;

pub use descriptor::*;
pub use fingerprint::*;
pub use handler::*;
pub use invocable::*;
pub use shape::*;
pub use token::*;
pub use type_identity::*;
