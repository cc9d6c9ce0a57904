// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod logger;

pub use logger::{LoggingConfig, LoggingError, init, init_with_config};
