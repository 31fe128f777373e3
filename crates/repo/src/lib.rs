// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod song;

pub mod prelude {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
    pub enum RepoError {
        #[error("not found")]
        NotFound,
    }

    pub type RepoResult<T> = Result<T, RepoError>;
}
