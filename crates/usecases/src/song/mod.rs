// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Executing commands against a song library
pub mod command;

/// Populating a song library from text files
pub mod load;
