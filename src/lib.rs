// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error;

pub use crate::colors::Rgb;
pub use crate::style::SurfaceStyle;
pub use crate::themes::{SurfaceConfig, Theme};

pub mod colors;
pub mod hash;
pub mod style;
pub mod themes;

type Res<T> = Result<T, Box<dyn Error>>;
