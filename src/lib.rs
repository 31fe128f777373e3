// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub use songlib_core::*;

#[cfg(feature = "repo")]
pub use songlib_repo as repo;

#[cfg(feature = "memory")]
pub use songlib_repo_memory as repo_memory;

#[cfg(feature = "usecases")]
pub use songlib_usecases as usecases;
