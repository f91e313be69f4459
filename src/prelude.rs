/*

This is intended to quickly import commonly used modules across
the body tree crate.

@date: 2 Dec, 2025
@author: bartu
*/

// Almost every module uses tracing, so I'm adding it here
pub use tracing::{info, error, warn, debug};
pub use smart_default::SmartDefault;
pub use serde::{Deserialize};
pub use std::{sync::Arc};

pub use crate::json_parser::{*};
pub use crate::numeric::{*};
