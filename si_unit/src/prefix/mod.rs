/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod normalize;
pub mod si_prefix;
pub mod standardize;

pub use normalize::{from_string, normalize, normalize_unit};
pub use si_prefix::{scale10, SiPrefix, MICRO_ASCII};
pub use standardize::{standardize, to_display_string, DEFAULT_DISPLAY_DIGITS};
